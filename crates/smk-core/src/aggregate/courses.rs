use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use smk_model::{Course, CourseSummary, YearCount};

/// CMKP certificate numbers look like `CMKP/2024/123`.
static CMKP_CERTIFICATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CMKP/\d{4}/\d+$").expect("Invalid CMKP certificate regex"));

pub fn is_valid_cmkp_certificate(number: &str) -> bool {
    CMKP_CERTIFICATE_REGEX.is_match(number.trim())
}

/// Course counts; per-year counts use the completion date, else the
/// scheduled date. Undated courses are left out of the year breakdown.
pub fn summarize_courses(courses: &[Course]) -> CourseSummary {
    let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
    for course in courses {
        if let Some(date) = course.completion_date.or(course.scheduled_date) {
            *by_year.entry(date.year()).or_insert(0) += 1;
        }
    }
    CourseSummary {
        total: courses.len(),
        completed: courses.iter().filter(|c| c.counts_as_completed()).count(),
        approved: courses.iter().filter(|c| c.is_approved).count(),
        with_certificate: courses.iter().filter(|c| c.has_certificate()).count(),
        by_year: by_year
            .into_iter()
            .rev()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use smk_model::{CourseId, SpecializationId};

    use super::*;

    fn make_course(id: u64, completed: Option<NaiveDate>, certificate: Option<&str>) -> Course {
        Course {
            id: CourseId(id),
            specialization_id: SpecializationId(1),
            module_id: None,
            course_type: "mandatory".to_string(),
            name: format!("Kurs {id}"),
            scheduled_date: None,
            completion_date: completed,
            certificate_number: certificate.map(str::to_string),
            is_completed: completed.is_some(),
            is_approved: false,
        }
    }

    #[test]
    fn certificate_format() {
        assert!(is_valid_cmkp_certificate("CMKP/2024/15"));
        assert!(is_valid_cmkp_certificate(" CMKP/2019/1 "));
        assert!(!is_valid_cmkp_certificate("CMKP/24/15"));
        assert!(!is_valid_cmkp_certificate("cmkp/2024/15"));
        assert!(!is_valid_cmkp_certificate("2024/15"));
    }

    #[test]
    fn counts_and_years_newest_first() {
        let summary = summarize_courses(&[
            make_course(1, NaiveDate::from_ymd_opt(2023, 5, 1), Some("CMKP/2023/1")),
            make_course(2, NaiveDate::from_ymd_opt(2024, 5, 1), None),
            make_course(3, None, None),
        ]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.with_certificate, 1);
        assert_eq!(
            summary.by_year,
            vec![
                YearCount {
                    year: 2024,
                    count: 1
                },
                YearCount {
                    year: 2023,
                    count: 1
                },
            ]
        );
    }
}
