//! Builders for the three chart fragments.
//!
//! Each fragment is a layer that reads the shared source dataset through the
//! shared base transforms and adds its own marks on top.

mod intersection_bars;
mod matrix;
mod set_bars;

pub use intersection_bars::intersection_size_chart;
pub use matrix::matrix_view;
pub use set_bars::set_size_chart;

use upset_data::SetLookup;

use crate::constants::{LABEL_DX, SOURCE_DATASET};
use crate::dimensions::Dimensions;
use crate::options::UpSetOptions;
use crate::selections::Selections;
use crate::spec::encoding::{AggregateOp, Axis, ChannelDef, Encoding, FieldDef, Scale, SortField};
use crate::spec::mark::{MarkDef, MarkType, TextAlign, TextBaseline};
use crate::spec::transform::Transform;
use crate::spec::view::{LayerSpec, UnitSpec, ViewSpec};

/// Inputs shared by every fragment builder
pub struct FragmentContext<'a> {
    pub sets: &'a [String],
    pub options: &'a UpSetOptions,
    pub dimensions: &'a Dimensions,
    pub selections: &'a Selections,
    pub lookup: &'a SetLookup,
    pub base: &'a [Transform],
}

impl FragmentContext<'_> {
    /// Intersection position along x, ordered by the chosen sort key
    fn intersection_x(&self, axis: Axis) -> FieldDef {
        FieldDef::nominal("intersection_id")
            .axis(axis)
            .sort(SortField {
                field: self.options.sort_by.field().to_string(),
                op: Some(AggregateOp::Max),
                order: self.options.sort_order,
            })
            .no_title()
    }

    /// Set row position along y, in caller order
    fn set_row_y(&self) -> FieldDef {
        FieldDef::nominal("set_order")
            .axis(Axis::bare(false))
            .no_title()
    }

    /// Set color, mapped positionally from the set list to the color range
    fn set_color(&self) -> FieldDef {
        FieldDef::nominal("set")
            .scale(Scale {
                domain: Some(self.sets.to_vec()),
                range: Some(self.options.color_range.clone()),
            })
            .no_legend()
    }

    /// Plain right-aligned set labels ending just left of the panel
    fn label_text(&self) -> UnitSpec {
        UnitSpec::new(
            MarkDef::new(MarkType::Text)
                .align(TextAlign::Right)
                .baseline(TextBaseline::Middle)
                .dx(LABEL_DX)
                .size(self.options.vertical_bar_label_size),
            Encoding {
                x: Some(ChannelDef::value(0)),
                y: Some(self.set_row_y().into()),
                text: Some(FieldDef::nominal("set_abbre").into()),
                ..Default::default()
            },
        )
    }

    fn tooltip(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::quantitative("count")
                .aggregate(AggregateOp::Max)
                .title("Cardinality"),
            FieldDef::quantitative("degree").title("Degree"),
        ]
    }

    fn layer(&self, layers: Vec<ViewSpec>) -> LayerSpec {
        LayerSpec::new(layers).source(SOURCE_DATASET, self.base.to_vec())
    }
}
