use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use floorforge::grid::Grid;
use floorforge::registry::Candidate;

/// Renders a floor grid, one table row per grid row. Empty cells stay
/// blank.
pub fn print_grid(title: &str, grid: &Grid) {
    println!("\n{} ({}x{}):", title, grid.cols(), grid.rows());
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in 0..grid.rows() {
        let cells: Vec<Cell> = (0..grid.cols())
            .map(|col| {
                let v = grid.get(row, col);
                let s = if v == 0 {
                    " ".to_string()
                } else {
                    v.to_string()
                };
                Cell::new(s).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

/// Renders the registry slot list: index, score and floor size per
/// occupied slot.
pub fn print_slots(slots: &[Option<Candidate>]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Slot").add_attribute(Attribute::Bold),
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Floor").add_attribute(Attribute::Bold),
    ]);

    for (i, slot) in slots.iter().enumerate() {
        match slot {
            Some(c) => {
                table.add_row(vec![
                    Cell::new(i).set_alignment(CellAlignment::Right),
                    Cell::new(c.score()).set_alignment(CellAlignment::Right),
                    Cell::new(format!("{}x{}", c.grid().cols(), c.grid().rows())),
                ]);
            }
            None => {
                table.add_row(vec![
                    Cell::new(i).set_alignment(CellAlignment::Right),
                    Cell::new("-").set_alignment(CellAlignment::Right),
                    Cell::new("empty"),
                ]);
            }
        }
    }
    println!("\n{}", table);
}
