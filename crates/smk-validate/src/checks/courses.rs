use smk_core::ProgressContext;
use smk_core::aggregate::is_valid_cmkp_certificate;

use crate::issue::Issue;

pub fn check(ctx: &ProgressContext<'_>) -> Vec<Issue> {
    let courses = &ctx.bundle.courses;
    let mut issues = Vec::new();

    if courses.is_empty() {
        issues.push(Issue::NoCourses);
        return issues;
    }

    for course in courses {
        if !course.is_completed {
            continue;
        }
        if course.completion_date.is_none() {
            issues.push(Issue::CourseMissingCompletionDate {
                course: course.id,
                module_id: course.module_id,
                name: course.name.clone(),
            });
        }
        if !ctx
            .requirements
            .course_requires_cmkp(&course.course_type, &course.name)
        {
            continue;
        }
        match course.certificate_number.as_deref().map(str::trim) {
            Some(number) if !number.is_empty() => {
                if !is_valid_cmkp_certificate(number) {
                    issues.push(Issue::CourseCertificateFormat {
                        course: course.id,
                        module_id: course.module_id,
                        certificate_number: number.to_string(),
                    });
                }
            }
            _ => issues.push(Issue::CourseMissingCertificate {
                course: course.id,
                module_id: course.module_id,
                name: course.name.clone(),
            }),
        }
    }

    issues
}
