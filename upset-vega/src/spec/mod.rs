//! Typed subset of the Vega-Lite v5 grammar used by UpSet charts

pub mod config;
pub mod encoding;
pub mod mark;
pub mod params;
pub mod transform;
pub mod view;
