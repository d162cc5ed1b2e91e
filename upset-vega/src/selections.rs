//! Interactive selections shared by the UpSet views.
//!
//! Three independent point selections are declared once at the top level and
//! referenced by name from the views that read them:
//!
//! * `legend` toggles sets through the set-size legend and filters the source
//!   rows before intersections are recomputed.
//! * `hover` follows the pointer over intersections. It is never cleared by
//!   moving off a mark, so the last hovered intersection stays highlighted
//!   until another one replaces it.
//! * `opacity` holds the clicked intersection and dims matrix glyphs of every
//!   other intersection.

use serde_json::Value;

use crate::constants::{
    DIMMED_OPACITY, HOVER_PARAM, INTERSECTION_BARS_VIEW, LEGEND_PARAM, MAIN_COLOR,
    MATRIX_DOTS_VIEW, OPACITY_PARAM, SET_BARS_VIEW,
};
use crate::spec::encoding::ChannelDef;
use crate::spec::params::{SelectionBinding, SelectionParam};
use crate::spec::transform::Transform;

#[derive(Debug, Clone, PartialEq)]
pub struct Selections {
    pub legend: SelectionParam,
    pub hover: SelectionParam,
    pub opacity: SelectionParam,
}

impl Selections {
    pub fn new() -> Self {
        Self {
            legend: SelectionParam::point(LEGEND_PARAM, &["set"])
                .bind(SelectionBinding::Legend)
                .views(&[SET_BARS_VIEW]),
            hover: SelectionParam::point(HOVER_PARAM, &["intersection_id"])
                .on("mouseover")
                .clear(false)
                .views(&[INTERSECTION_BARS_VIEW, MATRIX_DOTS_VIEW]),
            opacity: SelectionParam::point(OPACITY_PARAM, &["intersection_id"])
                .views(&[MATRIX_DOTS_VIEW]),
        }
    }

    /// Keep only rows of the sets toggled on in the legend
    pub fn legend_filter(&self) -> Transform {
        Transform::filter_param(self.legend.name.clone())
    }

    /// Highlight color for the hovered intersection, neutral otherwise.
    /// An empty hover selection matches nothing.
    pub fn hover_color(&self, highlight_color: &str) -> ChannelDef {
        ChannelDef::when_selected(&self.hover.name, Some(false), highlight_color, MAIN_COLOR)
    }

    /// Full opacity for the clicked intersection (or all, when none is clicked)
    pub fn click_opacity(&self) -> ChannelDef {
        ChannelDef::when_selected(&self.opacity.name, None, 1.0, Value::from(DIMMED_OPACITY))
    }

    pub fn into_params(self) -> Vec<SelectionParam> {
        vec![self.legend, self.hover, self.opacity]
    }
}

impl Default for Selections {
    fn default() -> Self {
        Self::new()
    }
}
