use crate::components::FragmentContext;
use crate::constants::{LABEL_BG_X, SET_BARS_VIEW, SHORT_LABEL_MAX_CHARS};
use crate::pipeline::members_only;
use crate::spec::encoding::{AggregateOp, Axis, ChannelDef, Encoding, FieldDef, Legend};
use crate::spec::mark::{MarkDef, MarkType, TextAlign, TextBaseline};
use crate::spec::view::{LayerSpec, UnitSpec, ViewSpec};

/// Horizontal bar per set, its length the number of elements in the set.
///
/// This view carries the set color legend, which the legend selection binds
/// to.
pub fn set_size_chart(ctx: &FragmentContext) -> LayerSpec {
    let bars = UnitSpec::new(
        MarkDef::new(MarkType::Bar).size(ctx.options.horizontal_bar_size),
        Encoding {
            x: Some(
                FieldDef::quantitative("count")
                    .aggregate(AggregateOp::Sum)
                    .axis(Axis {
                        grid: Some(false),
                        tick_count: Some(3),
                        ..Default::default()
                    })
                    .title("Set Size")
                    .into(),
            ),
            y: Some(ctx.set_row_y().into()),
            color: Some(
                ctx.set_color()
                    .legend(Legend { title: Some(None) })
                    .into(),
            ),
            ..Default::default()
        },
    )
    .name(SET_BARS_VIEW)
    .transform(members_only());

    ctx.layer(vec![set_labels(ctx), bars.into()])
        .width(ctx.options.horizontal_bar_chart_width)
        .height(ctx.dimensions.matrix_height)
}

/// Set labels in the gutter left of the bars. When the first label is short,
/// every label sits on a circle in its set's color; otherwise all are plain
/// right-aligned text.
fn set_labels(ctx: &FragmentContext) -> ViewSpec {
    if ctx.lookup.leading_abbreviation_chars() > SHORT_LABEL_MAX_CHARS {
        return ctx.label_text().into();
    }

    let backgrounds = UnitSpec::new(
        MarkDef::new(MarkType::Circle)
            .size(ctx.options.set_label_bg_size)
            .opacity(1.0),
        Encoding {
            x: Some(ChannelDef::value(LABEL_BG_X)),
            y: Some(ctx.set_row_y().into()),
            color: Some(ctx.set_color().into()),
            ..Default::default()
        },
    );

    let text = UnitSpec::new(
        MarkDef::new(MarkType::Text)
            .color("white")
            .align(TextAlign::Center)
            .baseline(TextBaseline::Middle)
            .size(ctx.options.vertical_bar_label_size),
        Encoding {
            x: Some(ChannelDef::value(LABEL_BG_X)),
            y: Some(ctx.set_row_y().into()),
            text: Some(FieldDef::nominal("set_abbre").into()),
            ..Default::default()
        },
    );

    LayerSpec::new(vec![backgrounds.into(), text.into()]).into()
}
