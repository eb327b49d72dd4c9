use std::path::Path;

use seatgrid_core::SeatingConfig;

pub fn init(path: &str, exam_id: &str) -> anyhow::Result<()> {
    let output = Path::new(path);
    if output.exists() {
        anyhow::bail!("{} already exists", output.display());
    }
    let config = SeatingConfig::scaffold(exam_id);
    std::fs::write(output, config.to_toml_string()?)?;
    println!("✓ Generated {}", output.display());
    Ok(())
}
