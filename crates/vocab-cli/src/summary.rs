use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vocab_cli::types::{ExportResult, PrintResult, PrintStamp, StatsResult};
use vocab_ingest::ReadStats;

pub fn print_export_summary(result: &ExportResult) {
    println!("Source: {}", result.source.display());
    println!("Exported at: {} UTC", result.report.exported_at);
    if result.dry_run {
        println!("Dry run: no files written");
    }
    for path in &result.written {
        println!("Written: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Rating"), header_cell("Words")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (rating, count) in &result.report.rating_distribution {
        table.add_row(vec![Cell::new(rating), count_cell(*count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.report.total_words).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_read_stats(&result.stats);
}

pub fn print_print_summary(result: &PrintResult) {
    println!("Source: {}", result.source.display());
    match &result.stamp {
        PrintStamp::NothingToPrint => {
            println!("No new (unprinted) cards found.");
            return;
        }
        PrintStamp::DryRun => println!("Dry run: source not stamped"),
        PrintStamp::NoTrackingColumn => {
            eprintln!("warning: no 'printed_at' column; cards will print again next run");
        }
        PrintStamp::Stamped { rows, at } => {
            println!("Stamped printed_at = {at} on {rows} rows");
        }
    }
    if let Some(path) = &result.output {
        println!("Written: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Cards"), header_cell("Pages")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![count_cell(result.cards), count_cell(result.pages)]);
    println!("{table}");
    print_read_stats(&result.stats);
    println!("Open the document in a browser and print it.");
}

pub fn print_stats_summary(result: &StatsResult) {
    println!("Source: {}", result.source.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Rating"), header_cell("Words")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (rating, count) in &result.distribution {
        table.add_row(vec![Cell::new(rating), count_cell(*count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.records).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Unprinted").fg(Color::Yellow),
        count_cell(result.unprinted),
    ]);
    println!("{table}");
    print_read_stats(&result.stats);
}

fn print_read_stats(stats: &ReadStats) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Data rows"), count_cell(stats.data_rows)]);
    table.add_row(vec![
        Cell::new("Skipped (no en)"),
        count_cell(stats.skipped_missing_en),
    ]);
    table.add_row(vec![
        Cell::new("Already printed"),
        count_cell(stats.already_printed),
    ]);
    table.add_row(vec![
        Cell::new("Rating defaulted"),
        count_cell(stats.ratings_defaulted),
    ]);
    table.add_row(vec![
        Cell::new("Rating clamped"),
        count_cell(stats.ratings_clamped),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
