//! UpSet plots as Vega-Lite specifications.
//!
//! [`UpSetChart::build`] aggregates a [`MembershipTable`] into set
//! intersections and composes three linked views: intersection sizes on top,
//! the membership matrix below them and the set sizes to its right. The
//! result is a typed [`spec::view::TopLevelSpec`] that serializes to Vega-Lite
//! v5 JSON.
//!
//! Interaction runs in the Vega-Lite runtime. The set legend filters sets out
//! of the recomputed intersections, hovering an intersection highlights it in
//! both the bar chart and the matrix, and clicking one dims the others.

pub mod chart;
mod components;
pub mod constants;
pub mod dimensions;
pub mod error;
mod html;
pub mod options;
pub mod pipeline;
pub mod selections;
pub mod spec;
pub mod theme;

pub use chart::UpSetChart;
pub use error::UpSetChartError;
pub use options::UpSetOptions;
pub use upset_data::{MembershipTable, SortBy, SortOrder};
