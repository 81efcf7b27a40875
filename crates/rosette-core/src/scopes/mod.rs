//! Scope computation — hue rose and its chart data.

pub mod chart;
pub mod rose;

pub use chart::RoseChart;
pub use rose::RoseData;
