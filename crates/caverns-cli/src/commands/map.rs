use comfy_table::{ContentArrangement, Table};

use caverns_engine::map::{NUM_ROOMS, exit_cell};
use caverns_engine::{Direction, RoomId};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "North", "South", "West", "East", "Description"]);

    for room in RoomId::all() {
        let mut row = vec![room.to_string()];
        row.extend(Direction::ALL.map(|d| exit_cell(room, d).to_string()));
        row.push(room.description().to_string());
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {NUM_ROOMS} rooms, <flag> cells open and close as the world changes");

    Ok(())
}
