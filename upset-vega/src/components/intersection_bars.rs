use crate::components::FragmentContext;
use crate::constants::{BAR_LABEL_DY, INTERSECTION_BARS_VIEW, MAIN_COLOR};
use crate::spec::encoding::{AggregateOp, Axis, AxisOrient, Encoding, FieldDef};
use crate::spec::mark::{MarkDef, MarkType};
use crate::spec::view::{LayerSpec, UnitSpec};

/// Bar per intersection with its cardinality printed above it
pub fn intersection_size_chart(ctx: &FragmentContext) -> LayerSpec {
    let encoding = Encoding {
        x: Some(ctx.intersection_x(Axis::bare(true)).into()),
        y: Some(
            FieldDef::quantitative("count")
                .aggregate(AggregateOp::Max)
                .axis(Axis {
                    grid: Some(false),
                    tick_count: Some(3),
                    orient: Some(AxisOrient::Right),
                    ..Default::default()
                })
                .title("Intersection Size")
                .into(),
        ),
        color: Some(ctx.selections.hover_color(&ctx.options.highlight_color)),
        tooltip: Some(ctx.tooltip()),
        ..Default::default()
    };

    let bars = UnitSpec::new(
        MarkDef::new(MarkType::Bar)
            .color(MAIN_COLOR)
            .size(ctx.dimensions.vertical_bar_size),
        encoding.clone(),
    )
    .name(INTERSECTION_BARS_VIEW);

    let labels = UnitSpec::new(
        MarkDef::new(MarkType::Text)
            .color(MAIN_COLOR)
            .dy(BAR_LABEL_DY)
            .size(ctx.options.vertical_bar_label_size),
        Encoding {
            text: Some(FieldDef::quantitative("count").format(".0f").into()),
            ..encoding
        },
    );

    ctx.layer(vec![bars.into(), labels.into()])
        .width(ctx.dimensions.matrix_width)
        .height(ctx.dimensions.vertical_bar_chart_height)
}
