use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mmm_cli::prepare::PrepareResult;
use mmm_features::FeatureReport;
use mmm_map::MappingReport;

pub fn print_summary(result: &PrepareResult) {
    println!("Input: {}", result.input.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    println!("Prepared: {} rows x {} columns", result.rows, result.columns);

    if let Some(table) = mapping_table(&result.mapping_report) {
        println!();
        println!("Column mapping:");
        println!("{table}");
    }
    if let Some(table) = feature_table(&result.feature_report) {
        println!();
        println!("Feature steps:");
        println!("{table}");
    }

    for path in &result.written {
        println!("Wrote {}", path.display());
    }
}

/// One row per mapped, dropped, or kept-unmapped column. `None` when the
/// report has nothing to show.
fn mapping_table(report: &MappingReport) -> Option<Table> {
    if report.applied_mapping.is_empty()
        && report.dropped_columns.is_empty()
        && report.unmapped_columns.is_empty()
    {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Source"), header_cell("Mapped to")]);
    apply_table_style(&mut table);
    for (source, target) in &report.applied_mapping {
        table.add_row(vec![Cell::new(source), Cell::new(target)]);
    }
    for dropped in &report.dropped_columns {
        table.add_row(vec![Cell::new(dropped), dim_cell("(dropped)")]);
    }
    for unmapped in &report.unmapped_columns {
        table.add_row(vec![Cell::new(unmapped), dim_cell("(unchanged)")]);
    }
    Some(table)
}

fn feature_table(report: &FeatureReport) -> Option<Table> {
    if report.steps.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Transformer"),
        header_cell("Added columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, step) in report.steps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&step.transformer),
            Cell::new(step.added_features.join("\n")),
        ]);
    }
    Some(table)
}

pub fn apply_table_style(table: &mut Table) {
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
