use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use santa_cli::draw::DrawResult;

pub fn print_summary(result: &DrawResult) {
    println!("Source: {}", result.source);
    println!("Seed: {}", result.seed);
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Giver"), header_cell("Receiver")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, pair) in result.pairs.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&pair.giver)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&pair.receiver),
        ]);
    }
    println!("{table}");
    println!("{}", stats_line(result));
}

fn stats_line(result: &DrawResult) -> String {
    let level = match result.stats.starting_level {
        Some(level) => format!("criteria {level}/{}", result.criterion_columns),
        None => "name only".to_string(),
    };
    format!(
        "{} participants, {level}, {} relaxed, {} unconstrained, {} repaired",
        result.participants, result.stats.relaxed, result.stats.unconstrained, result.stats.repairs
    )
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
