use serde::{Deserialize, Serialize};
use serde_json::Value;
use upset_data::SortOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Nominal,
    Quantitative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateOp {
    Sum,
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrient {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<AxisOrient>,
}

impl Axis {
    /// Axis with grid, labels and ticks turned off
    pub fn bare(domain: bool) -> Self {
        Self {
            grid: Some(false),
            labels: Some(false),
            ticks: Some(false),
            domain: Some(domain),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortField {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op: Option<AggregateOp>,
    pub order: SortOrder,
}

/// Field definition. `Some(None)` in the nullable members serializes as an
/// explicit `null`, which disables the title, axis or legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<AggregateOp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Option<Axis>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Option<Legend>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl FieldDef {
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: field.into(),
            field_type,
            aggregate: None,
            title: None,
            axis: None,
            legend: None,
            scale: None,
            sort: None,
            format: None,
        }
    }

    pub fn nominal(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Nominal)
    }

    pub fn quantitative(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Quantitative)
    }

    pub fn aggregate(mut self, op: AggregateOp) -> Self {
        self.aggregate = Some(op);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Some(title.into()));
        self
    }

    pub fn no_title(mut self) -> Self {
        self.title = Some(None);
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(Some(axis));
        self
    }

    pub fn no_legend(mut self) -> Self {
        self.legend = Some(None);
        self
    }

    pub fn legend(mut self, legend: Legend) -> Self {
        self.legend = Some(Some(legend));
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn sort(mut self, sort: SortField) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDef {
    pub value: Value,
}

/// Predicate half of a conditional value: either a selection parameter or a
/// test expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    /// Whether an empty selection satisfies the predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalValueDef {
    pub condition: Condition,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelDef {
    Field(FieldDef),
    Conditional(ConditionalValueDef),
    Value(ValueDef),
}

impl ChannelDef {
    pub fn value(value: impl Into<Value>) -> Self {
        ChannelDef::Value(ValueDef {
            value: value.into(),
        })
    }

    /// `selected` when the point selection `param` contains the datum,
    /// `otherwise` for everything else
    pub fn when_selected(
        param: &str,
        empty: Option<bool>,
        selected: impl Into<Value>,
        otherwise: impl Into<Value>,
    ) -> Self {
        ChannelDef::Conditional(ConditionalValueDef {
            condition: Condition {
                param: Some(param.to_string()),
                test: None,
                empty,
                value: selected.into(),
            },
            value: otherwise.into(),
        })
    }

    pub fn field(&self) -> Option<&FieldDef> {
        match self {
            ChannelDef::Field(def) => Some(def),
            _ => None,
        }
    }
}

impl From<FieldDef> for ChannelDef {
    fn from(def: FieldDef) -> Self {
        ChannelDef::Field(def)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x2: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y2: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Vec<FieldDef>>,
}

impl Encoding {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nullable_members_serialize_as_null() {
        let def = FieldDef::nominal("set_order")
            .axis(Axis::bare(false))
            .no_title();
        assert_eq!(
            serde_json::to_value(&def).unwrap(),
            json!({
                "field": "set_order",
                "type": "nominal",
                "title": null,
                "axis": {"grid": false, "labels": false, "ticks": false, "domain": false}
            })
        );
    }

    #[test]
    fn test_conditional_value() {
        let color = ChannelDef::when_selected("hover", Some(false), "#EA4667", "#3A3A3A");
        assert_eq!(
            serde_json::to_value(&color).unwrap(),
            json!({
                "condition": {"param": "hover", "empty": false, "value": "#EA4667"},
                "value": "#3A3A3A"
            })
        );
    }

    #[test]
    fn test_channel_def_deserializes_each_variant() {
        let field: ChannelDef = serde_json::from_value(
            json!({"field": "count", "type": "quantitative", "aggregate": "max"}),
        )
        .unwrap();
        assert_eq!(field.field().and_then(|def| def.aggregate), Some(AggregateOp::Max));

        let value: ChannelDef = serde_json::from_value(json!({"value": 0})).unwrap();
        assert_eq!(value, ChannelDef::value(0));

        let conditional: ChannelDef = serde_json::from_value(json!({
            "condition": {"param": "opacity", "value": 1}, "value": 0.6
        }))
        .unwrap();
        assert!(matches!(conditional, ChannelDef::Conditional(_)));
    }
}
