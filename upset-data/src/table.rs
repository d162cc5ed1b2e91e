use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, AsArray};
use arrow::compute::{cast, concat_batches};
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::{DataType, Float64Type};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::error::UpSetDataError;

/// Tabular input where each row is an element and each set column holds a
/// 0/1 (or boolean) membership indicator
#[derive(Debug, Clone)]
pub struct MembershipTable {
    batch: RecordBatch,
}

impl MembershipTable {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Load a headered CSV file, inferring column types
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, UpSetDataError> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read + Seek>(mut reader: R) -> Result<Self, UpSetDataError> {
        let (schema, _) = Format::default()
            .with_header(true)
            .infer_schema(&mut reader, None)?;
        reader.rewind()?;

        let schema = Arc::new(schema);
        let csv_reader = ReaderBuilder::new(schema.clone())
            .with_header(true)
            .build(reader)?;
        let batches = csv_reader.collect::<Result<Vec<_>, ArrowError>>()?;
        let batch = concat_batches(&schema, &batches)?;

        tracing::debug!(
            "Loaded membership table with {} rows and {} columns",
            batch.num_rows(),
            batch.num_columns()
        );
        Ok(Self { batch })
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|field| field.name().clone())
            .collect()
    }

    /// Membership flags of every row for a single set column
    pub fn membership(&self, set: &str) -> Result<Vec<bool>, UpSetDataError> {
        let index = self
            .batch
            .schema()
            .index_of(set)
            .map_err(|_| UpSetDataError::MissingKey(set.to_string()))?;
        let column = self.batch.column(index);

        let data_type = column.data_type();
        if !(data_type.is_numeric() || matches!(data_type, DataType::Boolean)) {
            return Err(UpSetDataError::InvalidArgument(format!(
                "set column '{set}' must be boolean or numeric, got {data_type}"
            )));
        }

        let values = cast(column, &DataType::Float64)?;
        values
            .as_primitive::<Float64Type>()
            .iter()
            .enumerate()
            .map(|(row, value)| match value {
                Some(v) if v == 0.0 => Ok(false),
                Some(v) if v == 1.0 => Ok(true),
                Some(v) => Err(UpSetDataError::InvalidArgument(format!(
                    "set column '{set}' holds {v} at row {row}, membership values must be 0 or 1"
                ))),
                None => Err(UpSetDataError::InvalidArgument(format!(
                    "set column '{set}' is null at row {row}"
                ))),
            })
            .collect()
    }

    /// Row-major membership vectors projected onto `sets`, in set order
    pub fn memberships(&self, sets: &[String]) -> Result<Vec<Vec<bool>>, UpSetDataError> {
        let columns = sets
            .iter()
            .map(|set| self.membership(set))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((0..self.num_rows())
            .map(|row| columns.iter().map(|column| column[row]).collect())
            .collect())
    }
}

impl From<RecordBatch> for MembershipTable {
    fn from(batch: RecordBatch) -> Self {
        Self::new(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{ArrayRef, BooleanArray, Int64Array, StringArray};
    use std::io::Cursor;

    fn batch(columns: Vec<(&str, ArrayRef)>) -> RecordBatch {
        RecordBatch::try_from_iter(columns).unwrap()
    }

    #[test]
    fn test_membership_from_integer_and_boolean_columns() {
        let table = MembershipTable::new(batch(vec![
            ("a", Arc::new(Int64Array::from(vec![1, 0, 1])) as ArrayRef),
            ("b", Arc::new(BooleanArray::from(vec![false, true, true])) as ArrayRef),
        ]));

        assert_eq!(table.membership("a").unwrap(), vec![true, false, true]);
        assert_eq!(table.membership("b").unwrap(), vec![false, true, true]);
        assert_eq!(
            table.memberships(&["b".to_string(), "a".to_string()]).unwrap(),
            vec![vec![false, true], vec![true, false], vec![true, true]]
        );
    }

    #[test]
    fn test_missing_column_is_missing_key() {
        let table = MembershipTable::new(batch(vec![(
            "a",
            Arc::new(Int64Array::from(vec![1])) as ArrayRef,
        )]));
        assert!(matches!(
            table.membership("z"),
            Err(UpSetDataError::MissingKey(name)) if name == "z"
        ));
    }

    #[test]
    fn test_rejects_non_binary_and_non_numeric_columns() {
        let table = MembershipTable::new(batch(vec![
            ("count", Arc::new(Int64Array::from(vec![0, 2])) as ArrayRef),
            ("label", Arc::new(StringArray::from(vec!["x", "y"])) as ArrayRef),
            ("gap", Arc::new(Int64Array::from(vec![Some(1), None])) as ArrayRef),
        ]));

        let err = table.membership("count").unwrap_err().to_string();
        assert!(err.contains("row 1"), "{err}");
        assert!(matches!(
            table.membership("label"),
            Err(UpSetDataError::InvalidArgument(_))
        ));
        assert!(matches!(
            table.membership("gap"),
            Err(UpSetDataError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_csv_reader() {
        let csv = "set1,set2,name\n1,0,a\n0,1,b\n1,1,c\n";
        let table = MembershipTable::from_csv_reader(Cursor::new(csv)).unwrap();

        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.column_names(), vec!["set1", "set2", "name"]);
        assert_eq!(table.membership("set2").unwrap(), vec![false, true, true]);
    }
}
