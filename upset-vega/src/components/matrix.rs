use crate::components::FragmentContext;
use crate::constants::{GLYPH_BACKGROUND_COLOR, MAIN_COLOR, MATRIX_DOTS_VIEW, STRIPE_COLOR};
use crate::pipeline::{connector_span, members_only};
use crate::spec::encoding::{Axis, ChannelDef, Encoding, FieldDef};
use crate::spec::mark::{MarkDef, MarkType};
use crate::spec::transform::Transform;
use crate::spec::view::{LayerSpec, UnitSpec};

/// Membership matrix: one column per intersection, one row per set.
///
/// Layers from back to front: stripes on odd set rows, a grey dot in every
/// cell, set labels, the line joining an intersection's member rows, and a
/// solid dot in every member cell.
pub fn matrix_view(ctx: &FragmentContext) -> LayerSpec {
    let hidden_x = Axis::bare(false);
    let highlight = ctx.selections.hover_color(&ctx.options.highlight_color);

    let stripes = UnitSpec::new(
        MarkDef::new(MarkType::Rect),
        Encoding {
            x: Some(ChannelDef::value(0)),
            x2: Some(ChannelDef::value(ctx.dimensions.matrix_width)),
            y: Some(ctx.set_row_y().into()),
            color: Some(ChannelDef::value(STRIPE_COLOR)),
            ..Default::default()
        },
    )
    .transform(Transform::filter_expr("datum.set_order % 2 == 1"));

    let background_dots = UnitSpec::new(
        MarkDef::new(MarkType::Circle)
            .size(ctx.options.glyph_size)
            .opacity(1.0),
        Encoding {
            x: Some(ctx.intersection_x(hidden_x.clone()).into()),
            y: Some(ctx.set_row_y().into()),
            color: Some(ChannelDef::value(GLYPH_BACKGROUND_COLOR)),
            ..Default::default()
        },
    );

    let labels = ctx.label_text();

    // Rule from the first to the last member row of each intersection
    let connectors = UnitSpec::new(
        MarkDef::new(MarkType::Rule)
            .color(MAIN_COLOR)
            .size(ctx.options.line_connection_size),
        Encoding {
            x: Some(ctx.intersection_x(hidden_x.clone()).into()),
            y: Some(
                FieldDef::nominal("set_order_min")
                    .axis(Axis::bare(false))
                    .no_title()
                    .into(),
            ),
            y2: Some(FieldDef::nominal("set_order_max").into()),
            detail: Some(FieldDef::nominal("intersection_id").into()),
            color: Some(highlight.clone()),
            opacity: Some(ctx.selections.click_opacity()),
            ..Default::default()
        },
    )
    .transform(members_only())
    .transform(connector_span());

    let member_dots = UnitSpec::new(
        MarkDef::new(MarkType::Circle)
            .size(ctx.options.glyph_size)
            .opacity(1.0),
        Encoding {
            x: Some(ctx.intersection_x(hidden_x).into()),
            y: Some(ctx.set_row_y().into()),
            color: Some(highlight),
            opacity: Some(ctx.selections.click_opacity()),
            tooltip: Some(ctx.tooltip()),
            ..Default::default()
        },
    )
    .name(MATRIX_DOTS_VIEW)
    .transform(members_only());

    ctx.layer(vec![
        stripes.into(),
        background_dots.into(),
        labels.into(),
        connectors.into(),
        member_dots.into(),
    ])
    .width(ctx.dimensions.matrix_width)
    .height(ctx.dimensions.matrix_height)
}
