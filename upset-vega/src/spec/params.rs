use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSelectionConfig {
    #[serde(rename = "type")]
    pub select_type: SelectionType,
    pub fields: Vec<String>,
    /// Event stream that triggers the selection, click when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<String>,
    /// `false` keeps the selection until another datum replaces it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionBinding {
    Legend,
}

/// Top-level selection parameter, attached to the named views it listens on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionParam {
    pub name: String,
    pub select: PointSelectionConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<SelectionBinding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<String>,
}

impl SelectionParam {
    pub fn point(name: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            name: name.into(),
            select: PointSelectionConfig {
                select_type: SelectionType::Point,
                fields: fields.iter().map(|f| f.to_string()).collect(),
                on: None,
                clear: None,
            },
            bind: None,
            views: Vec::new(),
        }
    }

    pub fn on(mut self, event: impl Into<String>) -> Self {
        self.select.on = Some(event.into());
        self
    }

    pub fn clear(mut self, clear: bool) -> Self {
        self.select.clear = Some(clear);
        self
    }

    pub fn bind(mut self, binding: SelectionBinding) -> Self {
        self.bind = Some(binding);
        self
    }

    pub fn views(mut self, views: &[&str]) -> Self {
        self.views = views.iter().map(|v| v.to_string()).collect();
        self
    }
}
