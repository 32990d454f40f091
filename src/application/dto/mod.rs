//! Data transfer objects.

mod stats_view;

pub use stats_view::StatsView;
