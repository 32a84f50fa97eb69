use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use smk_model::{
    DashboardOverviewDto, ExportStatus, ModuleProceduresDto, SmkExportPreviewDto,
    SmkValidationResultDto, SpecializationStatisticsDto, UserProceduresDto,
};
use smk_standards::RequirementSet;

pub fn print_validation(result: &SmkValidationResultDto) {
    println!(
        "Specialization {} ({} SMK), checked {}",
        result.specialization_id, result.smk_version, result.validation_date
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Scope"),
        header_cell("Errors"),
        header_cell("Warnings"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    let buckets = [
        ("User data", result.user_data_errors.len()),
        ("Medical shifts", result.medical_shift_errors.len()),
        ("Procedures", result.procedure_errors.len()),
        ("Modules", result.module_errors.len()),
    ];
    for (label, errors) in buckets {
        table.add_row(vec![
            Cell::new(label),
            count_cell(errors, Color::Red),
            dim_cell("-"),
            status_cell(errors == 0),
        ]);
    }
    for module in &result.module_validations {
        table.add_row(vec![
            Cell::new(format!("  {} ({})", module.module_name, module.module_id)).fg(Color::Blue),
            count_cell(module.errors.len(), Color::Red),
            count_cell(module.warnings.len(), Color::Yellow),
            status_cell(module.is_valid),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(result.total_errors, Color::Red).add_attribute(Attribute::Bold),
        count_cell(result.total_warnings, Color::Yellow).add_attribute(Attribute::Bold),
        status_cell(result.is_valid).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let errors = result
        .user_data_errors
        .iter()
        .chain(&result.medical_shift_errors)
        .chain(&result.procedure_errors)
        .chain(&result.module_errors)
        .chain(result.module_validations.iter().flat_map(|m| &m.errors));
    let warnings = result
        .warnings
        .iter()
        .chain(result.module_validations.iter().flat_map(|m| &m.warnings));
    print_messages("Errors", errors);
    print_messages("Warnings", warnings);
}

fn print_messages<'a>(title: &str, messages: impl Iterator<Item = &'a String>) {
    let messages: Vec<&String> = messages.collect();
    if messages.is_empty() {
        return;
    }
    println!("{title}:");
    for message in messages {
        println!("- {message}");
    }
}

pub fn print_dashboard(dashboard: &DashboardOverviewDto) {
    let info = &dashboard.specialization;
    println!("{} [{}] ({} SMK)", info.name, info.program_code, info.smk_version);
    println!(
        "Started {}, expected end {}",
        info.start_date, info.expected_end_date
    );
    println!("Overall progress: {:.2}%", dashboard.overall_progress);
    if let Some(name) = &dashboard.current_module_name {
        println!("Current module: {name}");
    }

    if let Some(progress) = &dashboard.module_progress {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Area"),
            header_cell("Completed"),
            header_cell("Required"),
            header_cell("%"),
        ]);
        apply_table_style(&mut table);
        for index in 1..=3 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        table.add_row(vec![
            Cell::new("Internships"),
            Cell::new(progress.internships.completed),
            Cell::new(progress.internships.required),
            percent_cell(progress.internships.percentage),
        ]);
        table.add_row(vec![
            Cell::new("Internship days"),
            Cell::new(progress.internships.completed_days),
            Cell::new(progress.internships.required_days),
            dim_cell("-"),
        ]);
        table.add_row(vec![
            Cell::new("Courses"),
            Cell::new(progress.courses.completed),
            Cell::new(progress.courses.required),
            percent_cell(progress.courses.percentage),
        ]);
        table.add_row(vec![
            Cell::new("Procedures (operator)"),
            Cell::new(progress.procedures.completed_operator),
            Cell::new(progress.procedures.required_operator),
            percent_cell(progress.procedures.percentage),
        ]);
        table.add_row(vec![
            Cell::new("Procedures (assistant)"),
            Cell::new(progress.procedures.completed_assistant),
            Cell::new(progress.procedures.required_assistant),
            dim_cell("-"),
        ]);
        table.add_row(vec![
            Cell::new("Shift hours"),
            Cell::new(format!("{:.2}", progress.medical_shifts.completed_hours)),
            Cell::new(format!("{:.2}", progress.medical_shifts.required_hours)),
            percent_cell(progress.medical_shifts.percentage),
        ]);
        println!("{table}");
    }

    if !dashboard.upcoming_events.is_empty() {
        println!("Upcoming:");
        for event in &dashboard.upcoming_events {
            println!(
                "- {} {} (in {} days)",
                event.date, event.title, event.days_remaining
            );
        }
    }
}

pub fn print_statistics(stats: &SpecializationStatisticsDto) {
    println!(
        "Specialization {} ({} SMK){}",
        stats.specialization_id,
        stats.smk_version,
        if stats.requirements_are_default {
            ", default requirements"
        } else {
            ""
        }
    );
    println!("Overall progress: {:.2}%", stats.overall_progress);
    println!("Expected end date: {}", stats.expected_end_date);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Module"),
        header_cell("Internships"),
        header_cell("Courses"),
        header_cell("Operator"),
        header_cell("Assistant"),
        header_cell("%"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for module in &stats.modules {
        table.add_row(vec![
            Cell::new(&module.module_name).fg(Color::Blue),
            Cell::new(format!(
                "{}/{}",
                module.internships.completed, module.internships.required
            )),
            Cell::new(format!("{}/{}", module.courses.completed, module.courses.required)),
            Cell::new(format!(
                "{}/{}",
                module.procedures_operator.completed, module.procedures_operator.required
            )),
            Cell::new(format!(
                "{}/{}",
                module.procedures_assistant.completed, module.procedures_assistant.required
            )),
            percent_cell(module.percentage),
        ]);
    }
    println!("{table}");

    let shifts = &stats.medical_shifts;
    println!(
        "Shifts: {} totalling {:.2} h, weekly average {:.2} h",
        shifts.shift_count, shifts.total_hours, shifts.weekly_average
    );
    println!(
        "Internships: {} ({} completed, {} days)",
        stats.internships.total, stats.internships.completed, stats.internships.total_days
    );
    println!(
        "Courses: {} ({} completed, {} with certificate)",
        stats.courses.total, stats.courses.completed, stats.courses.with_certificate
    );
    println!(
        "Self-education: {:.1} day(s)",
        stats.self_education.combined_days()
    );
}

pub fn print_module_procedures(view: &ModuleProceduresDto) {
    println!(
        "{} ({} SMK): {}/{} requirements complete ({:.2}%)",
        view.module_name,
        view.smk_version,
        view.summary.completed_requirements,
        view.summary.total_requirements,
        view.summary.completion_percentage
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Procedure"),
        header_cell("Operator"),
        header_cell("Assistant"),
        header_cell("Done"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for procedure in &view.procedures {
        table.add_row(vec![
            Cell::new(&procedure.requirement_code).fg(Color::Blue),
            Cell::new(&procedure.name),
            Cell::new(format!(
                "{}/{}",
                procedure.completed_as_operator, procedure.required_as_operator
            )),
            Cell::new(format!(
                "{}/{}",
                procedure.completed_as_assistant, procedure.required_as_assistant
            )),
            status_cell(procedure.is_completed),
        ]);
    }
    println!("{table}");
}

pub fn print_user_procedures(view: &UserProceduresDto) {
    for module in &view.modules {
        print_module_procedures(module);
    }
    println!(
        "All modules: {}/{} requirements complete ({:.2}%)",
        view.summary.completed_procedures,
        view.summary.total_procedures,
        view.summary.overall_completion_percentage
    );
}

pub fn print_preview(preview: &SmkExportPreviewDto) {
    println!(
        "{} ({} SMK)",
        preview.specialization_name, preview.smk_version
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Records"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Internships"), Cell::new(preview.internship_count)]);
    table.add_row(vec![Cell::new("Courses"), Cell::new(preview.course_count)]);
    table.add_row(vec![
        Cell::new("Medical shifts"),
        Cell::new(preview.medical_shift_count),
    ]);
    table.add_row(vec![Cell::new("Procedures"), Cell::new(preview.procedure_count)]);
    table.add_row(vec![
        Cell::new("Self-education days"),
        Cell::new(preview.self_education_days),
    ]);
    println!("{table}");

    let status = match preview.status {
        ExportStatus::Ready => "ready",
        ExportStatus::HasWarnings => "has warnings",
    };
    println!(
        "Status: {status}; export {}",
        if preview.can_export {
            "allowed"
        } else {
            "blocked by validation errors"
        }
    );
    print_messages("Warnings", preview.warnings.iter());
}

pub fn print_requirements(set: &RequirementSet) {
    println!(
        "{} ({} SMK, {} years){}",
        set.specialization_name,
        set.smk_version,
        set.duration_years,
        if set.is_default { ", default" } else { "" }
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Module"),
        header_cell("Months"),
        header_cell("Internships"),
        header_cell("Days"),
        header_cell("Courses"),
        header_cell("Procedures"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for module in &set.modules {
        table.add_row(vec![
            Cell::new(&module.name).fg(Color::Blue),
            Cell::new(module.duration_months),
            Cell::new(module.required_internships),
            Cell::new(module.required_internship_days),
            Cell::new(module.required_courses),
            Cell::new(module.procedures.len()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn status_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("fail").fg(Color::Red)
    }
}

fn percent_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2}"))
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
