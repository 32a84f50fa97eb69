//! Rule checks. Every check runs on every validation; none short-circuits.

pub mod courses;
pub mod internships;
pub mod modules;
pub mod procedures;
pub mod self_education;
pub mod shifts;
pub mod user_data;

use smk_core::ProgressContext;

use crate::issue::Issue;

/// Run all checks in a fixed order and collect every issue.
pub fn run_all(ctx: &ProgressContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    // 1. User data
    issues.extend(user_data::check(ctx));
    // 2. Internships
    issues.extend(internships::check(ctx));
    // 3. Medical shifts
    issues.extend(shifts::check(ctx));
    // 4. Procedures
    issues.extend(procedures::check(ctx));
    // 5. Courses
    issues.extend(courses::check(ctx));
    // 6. Self-education
    issues.extend(self_education::check(ctx));
    // 7. Modules
    issues.extend(modules::check(ctx));

    issues
}
