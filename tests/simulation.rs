//! End-to-end tests loading a scenario file and running the simulation.
use std::io::Write;

use anyhow::{bail, ensure, Context, Result};
use approx::relative_eq;
use smoothmove::{
    Admitted, ConfigError, GridPoint, GridPosition, Simulation, SimulationConfig,
};

const SCENARIO: &str = r#"{
    "world": { "width": 20, "height": 10 },
    "ticks": 4,
    "movers": [
        { "x": 2, "y": 2, "speed": 0.5, "direction": 0.0 },
        { "x": 18, "y": 5, "speed": 1.0, "direction": 0.0, "policy": "bounce" },
        { "x": 5, "y": 5, "speed": 1.0, "direction": 90.0, "decay": 0.1 }
    ]
}"#;

fn load_scenario() -> Result<SimulationConfig> {
    let mut file = tempfile::NamedTempFile::new().context("create scenario file")?;
    file.write_all(SCENARIO.as_bytes())
        .context("write scenario file")?;
    SimulationConfig::from_path(file.path()).context("load scenario")
}

#[test]
fn runs_a_scenario_from_disk() -> Result<()> {
    let config = load_scenario()?;
    ensure!(config.ticks == 4, "ticks {}", config.ticks);

    let mut simulation = Simulation::new(&config)?;
    simulation.run(config.ticks);
    ensure!(simulation.ticks() == 4, "ran {} ticks", simulation.ticks());

    let snapshot = simulation.snapshot();
    let [drifting, bouncing, braking] = snapshot.as_slice() else {
        bail!("expected three movers, got {snapshot:?}");
    };

    ensure!(drifting.grid == GridPoint::new(4, 2), "drifting {drifting:?}");
    ensure!(bouncing.grid == GridPoint::new(16, 5), "bouncing {bouncing:?}");
    ensure!(
        relative_eq!(bouncing.direction, 180.0, epsilon = 1e-9),
        "bouncing {bouncing:?}"
    );
    ensure!(braking.grid == GridPoint::new(5, 6), "braking {braking:?}");
    ensure!(braking.speed == 0.0, "braking {braking:?}");
    Ok(())
}

#[test]
fn snapshot_serialises_to_json() -> Result<()> {
    let config = load_scenario()?;
    let mut simulation = Simulation::new(&config)?;
    simulation.tick();
    let json = serde_json::to_value(simulation.snapshot())?;
    let first = json
        .get(0)
        .and_then(|m| m.get("grid"))
        .context("first mover grid")?;
    ensure!(first["x"] == 2 && first["y"] == 2, "grid {first}");
    Ok(())
}

#[test]
fn movers_are_exposed_as_entities() -> Result<()> {
    let config = load_scenario()?;
    let mut simulation = Simulation::new(&config)?;
    simulation.tick();
    let movers = simulation.movers().to_vec();
    ensure!(movers.len() == 3, "movers {movers:?}");

    let world = simulation.app_mut().world_mut();
    for &entity in &movers {
        ensure!(world.get::<Admitted>(entity).is_some(), "{entity:?} not admitted");
    }
    let first = movers.first().context("first mover")?;
    let cell = world
        .get::<GridPosition>(*first)
        .context("first mover should have GridPosition")?
        .0;
    ensure!(cell == GridPoint::new(2, 2), "first {cell:?}");
    Ok(())
}

#[test]
fn missing_scenario_reports_the_path() {
    let err = SimulationConfig::from_path("/definitely/not/here.json")
        .expect_err("file does not exist");
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("not/here.json"));
}
