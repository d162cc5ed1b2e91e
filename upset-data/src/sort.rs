use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::error::UpSetDataError;

/// Key used to order intersections along the x axis
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortBy {
    #[default]
    Frequency,
    Degree,
}

impl SortBy {
    /// Name of the long-form field this key sorts on
    pub fn field(&self) -> &'static str {
        match self {
            SortBy::Frequency => "count",
            SortBy::Degree => "degree",
        }
    }

    pub fn parse(value: &str) -> Result<Self, UpSetDataError> {
        Self::from_str(value).map_err(|_| {
            UpSetDataError::InvalidArgument(format!(
                "sort_by must be either 'frequency' or 'degree', got '{value}'"
            ))
        })
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn parse(value: &str) -> Result<Self, UpSetDataError> {
        Self::from_str(value).map_err(|_| {
            UpSetDataError::InvalidArgument(format!(
                "sort_order must be either 'ascending' or 'descending', got '{value}'"
            ))
        })
    }

    /// Orient an ascending comparison
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_keys() {
        assert_eq!(SortBy::parse("frequency").unwrap(), SortBy::Frequency);
        assert_eq!(SortBy::parse("degree").unwrap(), SortBy::Degree);
        assert_eq!(SortOrder::parse("descending").unwrap(), SortOrder::Descending);
        assert_eq!(SortBy::Degree.to_string(), "degree");
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        let err = SortBy::parse("size").unwrap_err();
        assert!(err.to_string().contains("'frequency' or 'degree'"));

        let err = SortOrder::parse("Ascending").unwrap_err();
        assert!(err.to_string().contains("'ascending' or 'descending'"));
    }

    #[test]
    fn test_descending_reverses_ordering() {
        assert_eq!(SortOrder::Descending.apply(1.cmp(&2)), Ordering::Greater);
        assert_eq!(SortOrder::Ascending.apply(1.cmp(&2)), Ordering::Less);
    }
}
