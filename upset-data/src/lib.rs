//! Intersection aggregation for UpSet plots.
//!
//! Turns a membership table (one row per element, one 0/1 column per set)
//! into sorted set intersections, their long-form per-set rows, and the
//! per-set label and order lookups.

pub mod aggregate;
pub mod error;
pub mod reshape;
pub mod sort;
pub mod table;

pub use aggregate::{Combination, Intersections};
pub use error::UpSetDataError;
pub use reshape::{connector_spans, melt, LongFormRow, SetLookup};
pub use sort::{SortBy, SortOrder};
pub use table::MembershipTable;
