use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::config::{Config, TitleParams};
use crate::spec::encoding::Encoding;
use crate::spec::mark::MarkDef;
use crate::spec::params::SelectionParam;
use crate::spec::transform::Transform;

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Reference to a dataset registered in the top-level `datasets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedData {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<NamedData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transform: Vec<Transform>,
    pub mark: MarkDef,
    #[serde(default, skip_serializing_if = "Encoding::is_empty")]
    pub encoding: Encoding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl UnitSpec {
    pub fn new(mark: MarkDef, encoding: Encoding) -> Self {
        Self {
            name: None,
            data: None,
            transform: Vec::new(),
            mark,
            encoding,
            width: None,
            height: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform.push(transform);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<NamedData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transform: Vec<Transform>,
    pub layer: Vec<ViewSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl LayerSpec {
    pub fn new(layer: Vec<ViewSpec>) -> Self {
        Self {
            data: None,
            transform: Vec::new(),
            layer,
            width: None,
            height: None,
        }
    }

    /// Read `dataset` through `transform` before any child layer
    pub fn source(mut self, dataset: &str, transform: Vec<Transform>) -> Self {
        self.data = Some(NamedData {
            name: dataset.to_string(),
        });
        self.transform = transform;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HConcatSpec {
    pub hconcat: Vec<ViewSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewSpec {
    Layer(LayerSpec),
    HConcat(HConcatSpec),
    Unit(UnitSpec),
}

impl ViewSpec {
    /// Names of every unit view in this subtree, in document order
    pub fn unit_names(&self) -> Vec<&str> {
        match self {
            ViewSpec::Unit(unit) => unit.name.as_deref().into_iter().collect(),
            ViewSpec::Layer(spec) => spec.layer.iter().flat_map(|v| v.unit_names()).collect(),
            ViewSpec::HConcat(spec) => spec.hconcat.iter().flat_map(|v| v.unit_names()).collect(),
        }
    }
}

impl From<UnitSpec> for ViewSpec {
    fn from(spec: UnitSpec) -> Self {
        ViewSpec::Unit(spec)
    }
}

impl From<LayerSpec> for ViewSpec {
    fn from(spec: LayerSpec) -> Self {
        ViewSpec::Layer(spec)
    }
}

impl From<HConcatSpec> for ViewSpec {
    fn from(spec: HConcatSpec) -> Self {
        ViewSpec::HConcat(spec)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    Shared,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resolve {
    pub scale: IndexMap<String, ResolveMode>,
}

/// Root of a vertically concatenated Vega-Lite specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopLevelSpec {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleParams>,
    pub background: String,
    /// Inline datasets addressable by name from any view
    pub datasets: IndexMap<String, Value>,
    pub vconcat: Vec<ViewSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve: Option<Resolve>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<SelectionParam>,
    pub config: Config,
}

impl TopLevelSpec {
    pub fn param(&self, name: &str) -> Option<&SelectionParam> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn unit_names(&self) -> Vec<&str> {
        self.vconcat.iter().flat_map(|v| v.unit_names()).collect()
    }
}
