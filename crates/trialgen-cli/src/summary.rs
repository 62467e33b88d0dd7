//! Terminal tables for cohort summaries, criteria, and reference data.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use trialgen_model::{CriteriaConfig, ReferenceData};
use trialgen_report::{
    AGE_BENCHMARK_MEAN, BMI_BENCHMARK_MEAN, ETHNICITY_BENCHMARK, SEX_BENCHMARK, fraction,
};

use crate::commands::GenerateResult;

pub fn print_generate_summary(result: &GenerateResult) {
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.json_path {
        println!("JSON: {}", path.display());
    }
    if let Some(path) = &result.csv_path {
        println!("CSV: {}", path.display());
    }

    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Cohort"), header_cell("Count"), header_cell("Share")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
        dim_cell(""),
    ]);
    table.add_row(vec![
        Cell::new("Eligible").fg(Color::Green),
        Cell::new(summary.eligible).fg(Color::Green),
        percent_cell(summary.eligible, summary.total),
    ]);
    table.add_row(vec![
        Cell::new("Ineligible").fg(Color::Red),
        Cell::new(summary.ineligible()).fg(Color::Red),
        percent_cell(summary.ineligible(), summary.total),
    ]);
    println!("{table}");

    if !summary.reason_counts.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Ineligibility Reason"), header_cell("Count")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (reason, count) in &summary.reason_counts {
            table.add_row(vec![Cell::new(reason), Cell::new(count).fg(Color::Yellow)]);
        }
        println!();
        println!("Reasons:");
        println!("{table}");
    }

    if result.show_benchmark {
        print_benchmark_tables(result);
    }
}

fn print_benchmark_tables(result: &GenerateResult) {
    let summary = &result.summary;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Synthetic"),
        header_cell("Benchmark"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (sex, count) in &summary.sex_counts {
        let benchmark = SEX_BENCHMARK
            .iter()
            .find(|(candidate, _)| candidate == sex)
            .map(|(_, share)| *share);
        table.add_row(vec![
            Cell::new(sex),
            Cell::new(format_share(fraction(*count, summary.total))),
            benchmark_cell(benchmark),
        ]);
    }
    for (ethnicity, count) in &summary.ethnicity_counts {
        let benchmark = ETHNICITY_BENCHMARK
            .iter()
            .find(|(candidate, _)| candidate == ethnicity)
            .map(|(_, share)| *share);
        table.add_row(vec![
            Cell::new(ethnicity),
            Cell::new(format_share(fraction(*count, summary.total))),
            benchmark_cell(benchmark),
        ]);
    }
    println!();
    println!("Distributions vs CDC benchmark:");
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Synthetic Mean"),
        header_cell("Benchmark Mean"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Age"),
        mean_cell(summary.mean_age),
        Cell::new(format!("{AGE_BENCHMARK_MEAN:.1}")),
    ]);
    table.add_row(vec![
        Cell::new("BMI"),
        mean_cell(summary.mean_bmi),
        Cell::new(format!("{BMI_BENCHMARK_MEAN:.1}")),
    ]);
    table.add_row(vec![
        Cell::new("HbA1c"),
        mean_cell(summary.mean_hba1c),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_criteria(criteria: &CriteriaConfig) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule"), header_cell("Kind"), header_cell("Threshold")]);
    apply_table_style(&mut table);
    let inclusion = &criteria.inclusion;
    table.add_row(vec![
        Cell::new("Age range"),
        kind_cell("Inclusion"),
        Cell::new(format!("{} - {}", inclusion.min_age, inclusion.max_age)),
    ]);
    table.add_row(vec![
        Cell::new("Minimum HbA1c"),
        kind_cell("Inclusion"),
        Cell::new(format!("{}%", inclusion.min_hba1c)),
    ]);
    table.add_row(vec![
        Cell::new("Required condition"),
        kind_cell("Inclusion"),
        Cell::new(&inclusion.required_condition),
    ]);
    table.add_row(vec![
        Cell::new("Maximum BMI"),
        kind_cell("Exclusion"),
        optional_cell(criteria.exclusion.max_bmi.map(|value| value.to_string())),
    ]);
    table.add_row(vec![
        Cell::new("Prohibited medication"),
        kind_cell("Exclusion"),
        optional_cell(criteria.exclusion.prohibited_medication.clone()),
    ]);
    println!("{table}");
}

pub fn print_reference(reference: &ReferenceData) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Condition"), header_cell("ICD-10")]);
    apply_table_style(&mut table);
    for (name, entry) in reference.conditions() {
        table.add_row(vec![Cell::new(name), Cell::new(&entry.icd_10_code)]);
    }
    println!("Conditions:");
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Medication"),
        header_cell("RxNorm"),
        header_cell("Dosage"),
        header_cell("Frequency"),
    ]);
    apply_table_style(&mut table);
    for (name, entry) in reference.medications() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(&entry.rx_norm_code),
            Cell::new(&entry.dosage),
            Cell::new(&entry.frequency),
        ]);
    }
    println!();
    println!("Medications:");
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Lab"),
        header_cell("Test"),
        header_cell("LOINC"),
        header_cell("Units"),
    ]);
    apply_table_style(&mut table);
    for (key, entry) in reference.labs() {
        table.add_row(vec![
            Cell::new(key),
            Cell::new(&entry.test_name),
            Cell::new(&entry.loinc_code),
            Cell::new(&entry.units),
        ]);
    }
    println!();
    println!("Labs:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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

fn kind_cell(kind: &str) -> Cell {
    match kind {
        "Inclusion" => Cell::new(kind).fg(Color::Green),
        _ => Cell::new(kind).fg(Color::Red),
    }
}

fn percent_cell(part: usize, total: usize) -> Cell {
    Cell::new(format_share(fraction(part, total)))
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn benchmark_cell(share: Option<f64>) -> Cell {
    match share {
        Some(share) => Cell::new(format_share(share)),
        None => dim_cell("-"),
    }
}

fn mean_cell(mean: Option<f64>) -> Cell {
    match mean {
        Some(value) => Cell::new(format!("{value:.1}")),
        None => dim_cell("-"),
    }
}

fn format_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
