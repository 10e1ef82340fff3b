//! Headless simulation built from a [`SimulationConfig`].

use bevy_app::App;
use bevy_ecs::entity::Entity;
use log::{debug, info};
use serde::Serialize;

use crate::config::{ConfigError, SimulationConfig};
use crate::host::GridPoint;
use crate::mover::PreciseMover;
use crate::plugin::{Decay, GridPosition, MotionPlugin, WorldBounds};
use crate::vector::Vector;

/// State of one mover at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoverSnapshot {
    /// Cell the host renders the mover at.
    pub grid: GridPoint,
    /// Exact `(x, y)` position.
    pub exact: (f64, f64),
    /// Speed in cells per tick.
    pub speed: f64,
    /// Heading in degrees.
    pub direction: f64,
}

/// A Bevy app running [`MotionPlugin`] over the configured movers.
pub struct Simulation {
    app: App,
    movers: Vec<Entity>,
    ticks: u64,
}

impl Simulation {
    /// Build the app and spawn every configured mover.
    ///
    /// # Errors
    /// Returns [`ConfigError::World`] if the configured world is degenerate.
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let world = config.world_size()?;
        let mut app = App::new();
        app.add_plugins(MotionPlugin).insert_resource(WorldBounds(world));

        let movers = config
            .movers
            .iter()
            .map(|mover| {
                let movement = Vector::from_polar(mover.direction, mover.speed);
                let mut entity = app.world_mut().spawn((
                    PreciseMover::with_movement(movement),
                    GridPosition::new(mover.x, mover.y),
                    mover.policy,
                ));
                if let Some(factor) = mover.decay {
                    entity.insert(Decay(factor));
                }
                entity.id()
            })
            .collect::<Vec<_>>();

        info!(
            "simulation ready: {}x{} world, {} movers",
            world.width(),
            world.height(),
            movers.len()
        );
        Ok(Self {
            app,
            movers,
            ticks: 0,
        })
    }

    /// Run a single frame.
    pub fn tick(&mut self) {
        self.app.update();
        self.ticks += 1;
        debug!("tick {}", self.ticks);
    }

    /// Run `ticks` frames.
    pub fn run(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Number of frames run so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Entities spawned for the configured movers, in configuration order.
    #[must_use]
    pub fn movers(&self) -> &[Entity] {
        &self.movers
    }

    /// Mutable access to the underlying app, e.g. to add more systems.
    pub const fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Current state of every mover, in configuration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<MoverSnapshot> {
        let world = self.app.world();
        self.movers
            .iter()
            .filter_map(|&entity| {
                let mover = world.get::<PreciseMover>(entity)?;
                let position = world.get::<GridPosition>(entity)?;
                Some(MoverSnapshot {
                    grid: position.0,
                    exact: mover.exact_position(),
                    speed: mover.speed(),
                    direction: mover.movement().direction(),
                })
            })
            .collect()
    }
}
