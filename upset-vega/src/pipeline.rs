//! Transform chain shared by every UpSet view.
//!
//! The long-form rows are regrouped inside the runtime so that the legend
//! filter, which removes rows of hidden sets, changes intersection counts and
//! degrees before anything is drawn.

use serde_json::Value;
use upset_data::SetLookup;

use crate::error::UpSetChartError;
use crate::selections::Selections;
use crate::spec::encoding::AggregateOp;
use crate::spec::transform::{AggregatedFieldDef, Transform, WindowFieldDef, WindowOp};

/// Expression summing the membership columns of a pivoted row
pub fn degree_expression(sets: &[String]) -> String {
    sets.iter()
        .map(|set| {
            let key = quote_key(set);
            format!("(isDefined(datum[{key}]) ? datum[{key}] : 0)")
        })
        .collect::<Vec<_>>()
        .join("+")
}

fn quote_key(key: &str) -> String {
    format!("'{}'", key.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Field reference to a column named `name`.
///
/// Dots and brackets in a field string are read as nested access, so they
/// are backslash-escaped along with the backslash itself.
pub fn field_ref(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '\\' | '.' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn base_transforms(
    sets: &[String],
    lookup: &SetLookup,
    selections: &Selections,
) -> Result<Vec<Transform>, UpSetChartError> {
    let abbreviations = serde_json::to_value(lookup.abbreviation_table())?;
    let orders = serde_json::to_value(lookup.order_table())?;

    Ok(vec![
        selections.legend_filter(),
        Transform::Pivot {
            pivot: "set".to_string(),
            value: "is_intersect".to_string(),
            groupby: vec!["intersection_id".to_string(), "count".to_string()],
            op: Some(AggregateOp::Max),
        },
        Transform::Aggregate {
            aggregate: vec![AggregatedFieldDef {
                op: AggregateOp::Sum,
                field: "count".to_string(),
                as_: "count".to_string(),
            }],
            groupby: sets.iter().map(|set| field_ref(set)).collect(),
        },
        Transform::Calculate {
            calculate: degree_expression(sets),
            as_: "degree".to_string(),
        },
        Transform::filter_expr("datum.degree != 0"),
        Transform::Window {
            window: vec![WindowFieldDef {
                op: WindowOp::RowNumber,
                as_: "intersection_id".to_string(),
            }],
            frame: Some([None, None]),
        },
        Transform::Fold {
            fold: sets.iter().map(|set| field_ref(set)).collect(),
            as_: ["set".to_string(), "is_intersect".to_string()],
        },
        Transform::lookup("set", abbreviations, &["set_abbre"]),
        Transform::lookup("set", orders, &["set_order"]),
    ])
}

/// Keep only rows where the set is part of the intersection
pub fn members_only() -> Transform {
    Transform::filter_expr("datum.is_intersect == 1")
}

/// Attach the lowest and highest member set order to every member row
pub fn connector_span() -> Transform {
    Transform::JoinAggregate {
        joinaggregate: vec![
            AggregatedFieldDef {
                op: AggregateOp::Min,
                field: "set_order".to_string(),
                as_: "set_order_min".to_string(),
            },
            AggregatedFieldDef {
                op: AggregateOp::Max,
                field: "set_order".to_string(),
                as_: "set_order_max".to_string(),
            },
        ],
        groupby: vec!["intersection_id".to_string()],
    }
}

pub(crate) fn json_rows<T: serde::Serialize>(rows: &[T]) -> Result<Value, UpSetChartError> {
    Ok(serde_json::to_value(rows)?)
}
