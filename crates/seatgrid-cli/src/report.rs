//! Human-readable plan formatting.

use seatgrid_core::{PlanRoom, SeatingPlan};

pub fn format_plan(plan: &SeatingPlan) -> String {
    let mut out = String::new();
    let totals = plan.totals();

    out.push_str("\n╔══════════════════════════════════════════╗\n");
    out.push_str("║  SeatGrid Seating Plan                   ║\n");
    out.push_str("╠══════════════════════════════════════════╣\n");
    out.push_str(&format!("║  Exam:      {:<29}║\n", plan.exam_id));
    if let Some(title) = &plan.title {
        out.push_str(&format!("║  Title:     {:<29}║\n", title));
    }
    out.push_str(&format!("║  Algorithm: {:<29}║\n", plan.algorithm.id()));
    out.push_str(&format!("║  Status:    {:<29}║\n", plan.status.label()));
    out.push_str("╚══════════════════════════════════════════╝\n\n");

    out.push_str(&format!("Rooms ({} total):\n", plan.rooms.len()));
    out.push_str(&format!("  {} seated\n", totals.occupied));
    out.push_str(&format!("  {} empty seats\n", totals.empty));
    out.push_str(&format!(
        "  {} same-group neighbour pairs\n\n",
        totals.same_group_neighbours
    ));

    for room in &plan.rooms {
        format_room(&mut out, room);
    }
    out
}

fn format_room(out: &mut String, room: &PlanRoom) {
    let title = match (&room.name, &room.building) {
        (Some(name), Some(building)) => format!("{name} ({building})"),
        (Some(name), None) => name.clone(),
        _ => room.room_id.clone(),
    };
    out.push_str(&format!(
        "■ {title}: {}x{}, capacity {}\n",
        room.rows, room.columns, room.capacity
    ));
    if !room.invigilators.is_empty() {
        out.push_str(&format!("  Invigilators: {}\n", room.invigilators.join(", ")));
    }

    let width = room
        .grid
        .occupied()
        .filter_map(|s| s.candidate_id.as_deref())
        .map(str::len)
        .max()
        .unwrap_or(1)
        .max(1);

    for row in 1..=room.rows {
        out.push_str("  ");
        for column in 1..=room.columns {
            let cell = room.grid.occupant(row, column).unwrap_or("·");
            out.push_str(&format!("{cell:<width$} "));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "  {} seated, {} empty, {} groups\n\n",
        room.stats.occupied, room.stats.empty, room.stats.groups
    ));
}
