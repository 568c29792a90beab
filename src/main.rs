use anyhow::{Context, Result};
use gambit_analysis::{MoveTag, PositionTag, Tag};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("gambit starting");
    load()?;
    Ok(())
}

/// Validate the attack tables and build both analysis registries.
fn load() -> Result<()> {
    gambit_core::init_attack_tables().context("loading magic attack tables")?;
    let moves = MoveTag::registry();
    let positions = PositionTag::registry();
    info!(
        move_analyses = moves.analyses().len(),
        move_groups = moves.groups().len(),
        position_analyses = positions.analyses().len(),
        position_groups = positions.groups().len(),
        "analysis registries ready"
    );
    Ok(())
}
