use seatgrid_core::Algorithm;

pub fn algorithms() {
    print!("{}", format_algorithms());
}

fn format_algorithms() -> String {
    Algorithm::ALL
        .iter()
        .map(|algorithm| format!("  {:<20} {}\n", algorithm.id(), algorithm.description()))
        .collect()
}
