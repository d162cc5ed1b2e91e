use indexmap::IndexMap;
use itertools::Itertools;
use upset_data::aggregate::validate_sets;
use upset_data::{melt, Intersections, LongFormRow, MembershipTable, SetLookup};

use crate::components::{intersection_size_chart, matrix_view, set_size_chart, FragmentContext};
use crate::constants::{LABEL_GUTTER, PANEL_SPACING, SOURCE_DATASET};
use crate::dimensions::Dimensions;
use crate::error::UpSetChartError;
use crate::html::standalone_html;
use crate::options::UpSetOptions;
use crate::pipeline::{base_transforms, json_rows};
use crate::selections::Selections;
use crate::spec::config::{TitleAnchor, TitleParams};
use crate::spec::view::{HConcatSpec, Resolve, ResolveMode, TopLevelSpec, VEGA_LITE_SCHEMA};
use crate::theme::{upset_config, BACKGROUND};

/// An UpSet chart built from a membership table.
///
/// Holds the aggregated intersections next to the Vega-Lite specification
/// that draws them.
#[derive(Debug, Clone)]
pub struct UpSetChart {
    spec: TopLevelSpec,
    intersections: Intersections,
    rows: Vec<LongFormRow>,
    lookup: SetLookup,
    options: UpSetOptions,
}

impl UpSetChart {
    /// Aggregate `table` over the `sets` columns and compose the three views.
    ///
    /// Columns of `table` that are not listed in `sets` are ignored.
    pub fn build<S: AsRef<str>>(
        table: &MembershipTable,
        sets: &[S],
        options: UpSetOptions,
    ) -> Result<Self, UpSetChartError> {
        let sets: Vec<String> = sets.iter().map(|s| s.as_ref().to_string()).collect();
        validate_sets(&sets)?;

        let options = options.validate(sets.len())?;
        let lookup = SetLookup::new(&sets, options.abbreviations.as_deref());
        let intersections =
            Intersections::compute(table, &sets, options.sort_by, options.sort_order)?;
        let rows = melt(&intersections);

        let dimensions = Dimensions::from_options(&options, intersections.len());
        let selections = Selections::new();
        let base = base_transforms(&sets, &lookup, &selections)?;
        tracing::debug!(
            "Base transforms: {}",
            base.iter().map(|t| t.op_name()).join(" -> ")
        );

        let ctx = FragmentContext {
            sets: &sets,
            options: &options,
            dimensions: &dimensions,
            selections: &selections,
            lookup: &lookup,
            base: &base,
        };

        let top = intersection_size_chart(&ctx);
        let bottom = HConcatSpec {
            hconcat: vec![matrix_view(&ctx).into(), set_size_chart(&ctx).into()],
            spacing: Some(LABEL_GUTTER),
        };

        let mut datasets = IndexMap::new();
        datasets.insert(SOURCE_DATASET.to_string(), json_rows(&rows)?);

        let spec = TopLevelSpec {
            schema: VEGA_LITE_SCHEMA.to_string(),
            title: title_params(&options),
            background: BACKGROUND.to_string(),
            datasets,
            vconcat: vec![top.into(), bottom.into()],
            spacing: Some(PANEL_SPACING),
            resolve: Some(Resolve {
                scale: IndexMap::from([("y".to_string(), ResolveMode::Shared)]),
            }),
            params: selections.into_params(),
            config: upset_config(),
        };

        Ok(Self {
            spec,
            intersections,
            rows,
            lookup,
            options,
        })
    }

    pub fn spec(&self) -> &TopLevelSpec {
        &self.spec
    }

    pub fn into_spec(self) -> TopLevelSpec {
        self.spec
    }

    pub fn intersections(&self) -> &Intersections {
        &self.intersections
    }

    /// Long-form rows published as the `source` dataset
    pub fn rows(&self) -> &[LongFormRow] {
        &self.rows
    }

    pub fn lookup(&self) -> &SetLookup {
        &self.lookup
    }

    /// Options after validation
    pub fn options(&self) -> &UpSetOptions {
        &self.options
    }

    pub fn to_value(&self) -> Result<serde_json::Value, UpSetChartError> {
        Ok(serde_json::to_value(&self.spec)?)
    }

    pub fn to_json(&self) -> Result<String, UpSetChartError> {
        Ok(serde_json::to_string(&self.spec)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, UpSetChartError> {
        Ok(serde_json::to_string_pretty(&self.spec)?)
    }

    /// Standalone HTML page rendering the chart with vega-embed
    pub fn to_html(&self) -> Result<String, UpSetChartError> {
        let title = self
            .spec
            .title
            .as_ref()
            .map(|t| t.text.as_str())
            .unwrap_or("UpSet");
        Ok(standalone_html(title, &self.to_json()?))
    }
}

fn title_params(options: &UpSetOptions) -> Option<TitleParams> {
    if options.title.is_empty() {
        return None;
    }
    Some(TitleParams {
        text: options.title.clone(),
        subtitle: options
            .subtitle
            .clone()
            .filter(|subtitle| !subtitle.is_blank()),
        anchor: TitleAnchor::Start,
    })
}
