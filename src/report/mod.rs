//! Aggregation, persistence and comparison of benchmark results.

mod compare;
mod render;
mod stats;
mod summary;
mod table;

pub use compare::{Comparison, ComparisonRow};
pub use render::{render_comparison, render_summary};
pub use stats::{calculate_percentile, LatencyStats};
pub use summary::{summarize, SummaryRow};
pub use table::{load, persist, prepare_output, read_from, write_to, COLUMNS};
