use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_model::{
    DepartmentAnalysis, ExtractionType, IssueSeverity, Priority, Quadrant, ValidationReport,
};

use crate::types::{AnalyzeOutcome, DepartmentsOutcome};

pub fn print_analyze_summary(outcome: &AnalyzeOutcome) {
    println!("File: {}", outcome.file.display());
    println!("Respondents: {}", outcome.respondents);
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Question"),
        header_cell("Category"),
        header_cell("Mean"),
        header_cell("Median"),
        header_cell("Std Dev"),
        header_cell("Low"),
        header_cell("High"),
        header_cell("Imp."),
        header_cell("Quadrant"),
        header_cell("Priority"),
        header_cell("Tag"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 2..=7 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for result in &outcome.results {
        table.add_row(vec![
            Cell::new(&result.label),
            Cell::new(result.category.as_str()),
            Cell::new(format!("{:.2}", result.mean)),
            Cell::new(format!("{}", result.median)),
            Cell::new(format!("{:.2}", result.std_dev)),
            Cell::new(format!("{:.0}%", result.low_ratio * 100.0)),
            Cell::new(format!("{:.0}%", result.high_ratio * 100.0)),
            Cell::new(format!("{:.2}", result.importance)),
            quadrant_cell(result.quadrant),
            priority_cell(result.priority),
            extraction_cell(result.extraction_type),
        ]);
    }
    println!("{table}");

    if let Some((key, buckets)) = &outcome.distribution {
        println!();
        println!("Distribution: {key}");
        let mut table = Table::new();
        table.set_header(vec![header_cell("Score"), header_cell("Count")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for bucket in buckets {
            table.add_row(vec![Cell::new(bucket.value), Cell::new(bucket.count)]);
        }
        println!("{table}");
    }

    if outcome.show_departments {
        println!();
        print_department_table(&outcome.departments);
    }

    print_issue_table(&outcome.validation);
}

pub fn print_departments_summary(outcome: &DepartmentsOutcome) {
    println!("File: {}", outcome.file.display());
    if outcome.data.overall_department.is_empty() {
        println!("Overall: mean of all departments (no overall column detected)");
    } else {
        println!("Overall column: {}", outcome.data.overall_department);
    }
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }
    print_department_table(&outcome.departments);
}

fn print_department_table(departments: &[DepartmentAnalysis]) {
    if departments.is_empty() {
        println!("No department data.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Department"),
        header_cell("Question"),
        header_cell("Mean"),
        header_cell("Diff"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for entry in departments {
        let department = if entry.department.is_empty() {
            "(no department)".to_string()
        } else {
            entry.department.clone()
        };
        table.add_row(vec![
            Cell::new(department),
            Cell::new(&entry.question_key),
            Cell::new(format!("{:.2}", entry.mean)),
            diff_cell(entry.diff_from_overall),
        ]);
    }
    println!("{table}");
}

fn print_issue_table(validation: &ValidationReport) {
    if validation.issues.is_empty() {
        return;
    }
    println!();
    println!(
        "Validation: {} error(s), {} warning(s)",
        validation.error_count(),
        validation.warning_count()
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Severity"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for issue in &validation.issues {
        table.add_row(vec![
            Cell::new(issue.row),
            Cell::new(&issue.column),
            severity_cell(issue.severity),
            Cell::new(&issue.message),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn quadrant_cell(quadrant: Quadrant) -> Cell {
    match quadrant {
        Quadrant::Improve => Cell::new("improve").fg(Color::Red),
        Quadrant::Maintain => Cell::new("maintain").fg(Color::Green),
        Quadrant::Monitor => Cell::new("monitor").fg(Color::Yellow),
        Quadrant::Excess => Cell::new("excess").fg(Color::Cyan),
    }
}

fn priority_cell(priority: Priority) -> Cell {
    match priority {
        Priority::High => Cell::new("high")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Priority::Medium => Cell::new("medium").fg(Color::Yellow),
        Priority::Low => Cell::new("low").fg(Color::DarkGrey),
    }
}

fn extraction_cell(extraction: ExtractionType) -> Cell {
    match extraction {
        ExtractionType::Issue => Cell::new("issue").fg(Color::Red),
        ExtractionType::Excellent => Cell::new("excellent").fg(Color::Green),
        ExtractionType::Neutral => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("error")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Warning => Cell::new("warning").fg(Color::Yellow),
    }
}

fn diff_cell(diff: f64) -> Cell {
    let text = format!("{diff:+.2}");
    if diff < 0.0 {
        Cell::new(text).fg(Color::Red)
    } else if diff > 0.0 {
        Cell::new(text).fg(Color::Green)
    } else {
        Cell::new(text).fg(Color::DarkGrey)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}
