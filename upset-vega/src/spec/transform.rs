use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::encoding::AggregateOp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Predicate {
    Param { param: String },
    Expr(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedFieldDef {
    pub op: AggregateOp,
    pub field: String,
    #[serde(rename = "as")]
    pub as_: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowOp {
    RowNumber,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFieldDef {
    pub op: WindowOp,
    #[serde(rename = "as")]
    pub as_: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineData {
    pub values: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupData {
    pub data: InlineData,
    pub key: String,
    pub fields: Vec<String>,
}

/// Data transforms evaluated by the Vega-Lite runtime, each variant keyed by
/// its operator name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Transform {
    Filter {
        filter: Predicate,
    },
    Pivot {
        pivot: String,
        value: String,
        groupby: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        op: Option<AggregateOp>,
    },
    Aggregate {
        aggregate: Vec<AggregatedFieldDef>,
        groupby: Vec<String>,
    },
    JoinAggregate {
        joinaggregate: Vec<AggregatedFieldDef>,
        groupby: Vec<String>,
    },
    Calculate {
        calculate: String,
        #[serde(rename = "as")]
        as_: String,
    },
    Window {
        window: Vec<WindowFieldDef>,
        #[serde(skip_serializing_if = "Option::is_none")]
        frame: Option<[Option<i64>; 2]>,
    },
    Fold {
        fold: Vec<String>,
        #[serde(rename = "as")]
        as_: [String; 2],
    },
    Lookup {
        lookup: String,
        from: LookupData,
    },
}

impl Transform {
    pub fn filter_expr(expr: impl Into<String>) -> Self {
        Transform::Filter {
            filter: Predicate::Expr(expr.into()),
        }
    }

    pub fn filter_param(param: impl Into<String>) -> Self {
        Transform::Filter {
            filter: Predicate::Param {
                param: param.into(),
            },
        }
    }

    /// Join `fields` from inline `values` on the `key` field
    pub fn lookup(key: &str, values: Value, fields: &[&str]) -> Self {
        Transform::Lookup {
            lookup: key.to_string(),
            from: LookupData {
                data: InlineData { values },
                key: key.to_string(),
                fields: fields.iter().map(|f| f.to_string()).collect(),
            },
        }
    }

    /// Operator name, as it appears as the transform's key
    pub fn op_name(&self) -> &'static str {
        match self {
            Transform::Filter { .. } => "filter",
            Transform::Pivot { .. } => "pivot",
            Transform::Aggregate { .. } => "aggregate",
            Transform::JoinAggregate { .. } => "joinaggregate",
            Transform::Calculate { .. } => "calculate",
            Transform::Window { .. } => "window",
            Transform::Fold { .. } => "fold",
            Transform::Lookup { .. } => "lookup",
        }
    }
}
