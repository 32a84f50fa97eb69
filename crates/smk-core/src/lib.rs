//! Aggregation and progress calculation for SMK specializations.
//!
//! Every entry point is a pure function of the supplied [`smk_model::DataBundle`]
//! and the resolved requirement catalog. Nothing is cached between calls.

pub mod aggregate;
pub mod context;
pub mod dashboard;
pub mod dates;
pub mod procedures;
pub mod progress;
pub mod statistics;

pub use context::ProgressContext;
pub use dashboard::{build_dashboard, dashboard_module_progress, specialization_info};
pub use dates::{
    TimelineInputs, current_module, expected_end_date, important_dates,
    remaining_self_education_days,
};
pub use procedures::{build_module_procedures, build_user_procedures};
pub use progress::{
    ModuleTotals, axis, calculate_module_progress, calculate_overall_progress, percentage,
    ratio, round2,
};
pub use statistics::build_statistics;
