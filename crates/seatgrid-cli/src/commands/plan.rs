use std::path::Path;

use seatgrid_core::{Algorithm, SeatingConfig, SeatingError, SeatingPlan};
use seatgrid_placement::{PlanAssembler, distribute};
use tracing::info;

pub fn plan(
    config_path: &str,
    format: &str,
    algorithm: Option<&str>,
    seed: Option<u64>,
    parallel: bool,
) -> anyhow::Result<()> {
    let config = SeatingConfig::from_file(Path::new(config_path))?;
    let plan = build_plan(&config, algorithm, seed, parallel)?;

    match format {
        "json" => println!("{}", plan.to_json_pretty()?),
        _ => print!("{}", crate::report::format_plan(&plan)),
    }
    Ok(())
}

/// Distribute and seat the request, with CLI overrides applied.
pub fn build_plan(
    config: &SeatingConfig,
    algorithm: Option<&str>,
    seed: Option<u64>,
    parallel: bool,
) -> anyhow::Result<SeatingPlan> {
    let algorithm: Algorithm = match algorithm {
        Some(selector) => selector.parse()?,
        None => config.algorithm()?,
    };
    let rooms = config.rooms()?;
    info!(
        exam = %config.exam.id,
        rooms = rooms.len(),
        candidates = config.candidates.len(),
        "exam request loaded"
    );

    let mut dist = distribute(&config.candidates, &rooms);
    if !dist.overflow.is_empty() {
        return Err(SeatingError::CapacityExceeded {
            demand: dist.assigned_count() + dist.overflow.len(),
            supply: dist.supply(),
        }
        .into());
    }
    for (assignment, room) in dist.assignments.iter_mut().zip(&config.rooms) {
        assignment.invigilators = room.invigilators.clone();
    }

    let assembler = PlanAssembler::new(algorithm)
        .seed(seed.or(config.exam.seed).unwrap_or(0))
        .parallel(parallel || config.exam.parallel.unwrap_or(false));
    let mut plan = assembler.assemble(&config.exam.id, &dist.assignments)?;
    plan.title = config.exam.title.clone();
    Ok(plan)
}
