//! CLI library components for Survey Insight.

pub mod logging;
