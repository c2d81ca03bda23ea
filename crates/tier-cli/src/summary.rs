use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tier_model::{TIER_REWRITES, Tier};
use tier_report::{Describe, TierReport};

pub fn print_report(report: &TierReport) {
    println!(
        "Creatures: {} (joined with attributes: {}, move reference rows: {})",
        report.creature_rows, report.joined_rows, report.move_reference_rows
    );
    println!();
    println!("Tier distribution");
    println!("{}", distribution_table(report));
    println!("Base stat total by tier");
    println!(
        "{}",
        describe_table(
            "Tier",
            report
                .bst_by_tier
                .iter()
                .map(|row| (tier_cell(row.tier), row.stats.as_ref()))
        )
    );
    println!("Move count by tier");
    println!(
        "{}",
        describe_table(
            "Tier",
            report
                .moves_by_tier
                .iter()
                .map(|row| (tier_cell(row.tier), row.stats.as_ref()))
        )
    );
    println!("Base stat total by legendary flag");
    println!(
        "{}",
        describe_table(
            "Legendary",
            report
                .bst_by_legendary
                .iter()
                .map(|row| (legendary_cell(row.is_legendary), row.stats.as_ref()))
        )
    );
    println!("Legendary creatures by tier");
    println!("{}", legendary_table(report));
    if !report.preview.is_empty() {
        println!("Joined preview");
        println!("{}", preview_table(report));
    }
}

/// Canonical tiers with their ranks, then the sub-tier rewrites.
pub fn tiers_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Tier"), header_cell("Rank"), header_cell("Absorbs")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for tier in Tier::ALL {
        let absorbed: Vec<&str> = TIER_REWRITES
            .iter()
            .filter(|rewrite| rewrite.to == tier)
            .map(|rewrite| rewrite.from)
            .collect();
        let absorbs = if absorbed.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(absorbed.join(", "))
        };
        table.add_row(vec![tier_cell(tier), Cell::new(tier.rank()), absorbs]);
    }
    table
}

fn distribution_table(report: &TierReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Tier"), header_cell("Count"), header_cell("Share")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for share in &report.tier_distribution {
        table.add_row(vec![
            tier_cell(share.tier),
            count_cell(share.count),
            Cell::new(format!("{:.1}%", share.percent)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.creature_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

fn describe_table<'a>(
    label: &str,
    rows: impl Iterator<Item = (Cell, Option<&'a Describe>)>,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(label),
        header_cell("Count"),
        header_cell("Mean"),
        header_cell("Std"),
        header_cell("Min"),
        header_cell("25%"),
        header_cell("50%"),
        header_cell("75%"),
        header_cell("Max"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..9 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (key, stats) in rows {
        let mut cells = vec![key];
        match stats {
            Some(stats) => {
                cells.push(Cell::new(stats.count));
                cells.push(float_cell(stats.mean));
                cells.push(stats.std.map_or_else(|| dim_cell("-"), float_cell));
                cells.extend(
                    [stats.min, stats.q25, stats.median, stats.q75, stats.max]
                        .into_iter()
                        .map(float_cell),
                );
            }
            None => {
                cells.push(count_cell(0));
                cells.extend((0..7).map(|_| dim_cell("-")));
            }
        }
        table.add_row(cells);
    }
    table
}

fn legendary_table(report: &TierReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Tier"), header_cell("Legendary")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in &report.legendary_by_tier {
        table.add_row(vec![tier_cell(row.tier), count_cell(row.count)]);
    }
    table
}

fn preview_table(report: &TierReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Tier"),
        header_cell("BST"),
        header_cell("Rank"),
        header_cell("Legendary"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for row in &report.preview {
        table.add_row(vec![
            Cell::new(&row.name),
            tier_cell(row.tier),
            Cell::new(row.bst),
            Cell::new(row.tier_rank),
            legendary_cell(row.is_legendary),
        ]);
    }
    table
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
        .set_width(140);
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

fn tier_cell(tier: Tier) -> Cell {
    Cell::new(tier)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn legendary_cell(is_legendary: bool) -> Cell {
    if is_legendary {
        Cell::new("yes").fg(Color::Yellow)
    } else {
        dim_cell("no")
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn float_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2}"))
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
