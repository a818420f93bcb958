use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Table")]
    table: String,
    #[tabled(rename = "Rows")]
    rows: String,
}

/// Row counts per table, as a rounded two-column table
pub fn stats_table(stats: &[(&str, String)]) -> String {
    if stats.is_empty() {
        return String::new();
    }

    let rows = stats.iter().map(|(table, rows)| CountRow {
        table: table.to_string(),
        rows: rows.clone(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}
