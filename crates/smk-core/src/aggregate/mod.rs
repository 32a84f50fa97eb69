//! Entity aggregators.
//!
//! Each aggregator is a pure function over a record slice. Empty or partially
//! filled input yields zero totals and empty breakdowns, never an error, and
//! nothing here logs. Year and month breakdowns are sorted newest first.

pub mod absences;
pub mod courses;
pub mod internships;
pub mod procedures;
pub mod publications;
pub mod self_education;
pub mod shifts;

pub use absences::{self_education_leave_days, summarize_absences, summarize_recognitions};
pub use courses::{is_valid_cmkp_certificate, summarize_courses};
pub use internships::summarize_internships;
pub use procedures::{
    ProcedureTally, capped_role_totals, ingest_procedures, is_requirement_complete,
    module_requirement_progress, requirement_progress, summarize_module_procedures,
    tally_realizations,
};
pub use publications::summarize_publications;
pub use self_education::{self_education_days_by_module, summarize_self_education};
pub use shifts::{
    hours_by_training_year, monthly_breakdown, months_below_minimum, span_weeks,
    summarize_shifts, total_hours, weekly_average, weekly_breakdown, weeks_above_maximum,
    yearly_breakdown,
};
