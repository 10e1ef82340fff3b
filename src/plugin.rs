//! Bevy plugin driving [`PreciseMover`] components once per frame.
//!
//! Entities carry a [`GridPosition`] (the host's integer cell) next to their
//! [`PreciseMover`]. The world extent comes from the [`WorldBounds`] resource;
//! movers wait, unseeded and unmoved, until that resource exists.

use bevy_app::{App, Plugin, PreUpdate, Update};
use bevy_ecs::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STEPS;
use crate::error::MotionError;
use crate::host::{GridHost, GridPoint, WorldSize};
use crate::mover::PreciseMover;

/// Integer cell an entity is rendered at.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition(pub GridPoint);

impl GridPosition {
    /// Create a grid position from cell coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(GridPoint::new(x, y))
    }
}

/// Extent of the active world.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldBounds(pub WorldSize);

/// What a mover does when it reaches the edge of the world.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Discard per-axis updates that would leave the world.
    #[default]
    Clamp,
    /// Ignore the world edges entirely.
    Unbounded,
    /// Clamp, then reflect off the edge being touched.
    Bounce,
    /// Clamp, then stop one cell inside the edge being touched.
    Stop,
}

/// Per-frame speed factor applied after moving, e.g. `0.95` for friction.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Decay(pub f64);

/// [`GridHost`] adapter over an entity's [`GridPosition`].
#[derive(Debug)]
pub struct GridHostView<'a> {
    position: &'a mut GridPosition,
    world: Option<WorldSize>,
}

impl<'a> GridHostView<'a> {
    /// Wrap `position` living in `world`.
    pub const fn new(position: &'a mut GridPosition, world: Option<WorldSize>) -> Self {
        Self { position, world }
    }
}

impl GridHost for GridHostView<'_> {
    fn world_size(&self) -> Option<WorldSize> {
        self.world
    }

    fn grid_position(&self) -> GridPoint {
        self.position.0
    }

    fn place(&mut self, point: GridPoint) {
        self.position.0 = point;
    }
}

/// Advance `mover` one frame under `policy`.
///
/// # Errors
/// Returns [`MotionError::OutsideWorld`] for any bounded policy when the host
/// has no world.
pub fn step_mover<H: GridHost + ?Sized>(
    mover: &mut PreciseMover,
    host: &mut H,
    policy: EdgePolicy,
) -> Result<(), MotionError> {
    match policy {
        EdgePolicy::Clamp => mover.advance(host),
        EdgePolicy::Unbounded => {
            mover.advance_unbounded_by(host, DEFAULT_STEPS);
            Ok(())
        }
        EdgePolicy::Bounce => {
            mover.advance(host)?;
            if heading_out_of_world(mover, host)? {
                mover.bounce_at_edge(host)?;
            }
            Ok(())
        }
        EdgePolicy::Stop => {
            mover.advance(host)?;
            mover.stop_at_world_edge(host)
        }
    }
}

/// Returns `true` when the mover touches an edge and its movement points
/// out through that edge.
///
/// A mover slower than one cell per frame stays on the edge cell for a frame
/// after reflecting; it must not be reflected back again while leaving.
fn heading_out_of_world<H: GridHost + ?Sized>(
    mover: &PreciseMover,
    host: &H,
) -> Result<bool, MotionError> {
    let world = host.require_world()?;
    let GridPoint { x, y } = host.grid_position();
    let movement = mover.movement();
    if world.on_horizontal_edge(x) {
        let leaving_left = x <= 0 && movement.x() < 0.0;
        let leaving_right = x >= world.width() - 1 && movement.x() > 0.0;
        return Ok(leaving_left || leaving_right);
    }
    let leaving_top = y <= 0 && movement.y() < 0.0;
    let leaving_bottom = y >= world.height() - 1 && movement.y() > 0.0;
    Ok(leaving_top || leaving_bottom)
}

/// Marks a mover whose exact position has been seeded from its cell.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Admitted;

/// Seeds the exact position of movers that have not entered a world yet.
///
/// Nothing happens until a [`WorldBounds`] resource exists; movers spawned
/// earlier are admitted from their cell at that point.
pub fn admit_movers(
    mut commands: Commands,
    bounds: Option<Res<WorldBounds>>,
    mut movers: Query<(Entity, &mut PreciseMover, &GridPosition), Without<Admitted>>,
) {
    if bounds.is_none() {
        return;
    }
    for (entity, mut mover, position) in &mut movers {
        mover.enter_world_at(position.0);
        commands.entity(entity).insert(Admitted);
    }
}

/// Moves every admitted mover one frame and applies its edge policy and
/// decay.
pub fn advance_movers(
    bounds: Option<Res<WorldBounds>>,
    mut movers: Query<
        (
            Entity,
            &mut PreciseMover,
            &mut GridPosition,
            Option<&EdgePolicy>,
            Option<&Decay>,
        ),
        With<Admitted>,
    >,
) {
    let world = bounds.map(|b| b.0);
    for (entity, mut mover, mut position, policy, decay) in &mut movers {
        let mut host = GridHostView::new(&mut position, world);
        let edge_policy = policy.copied().unwrap_or_default();
        if let Err(e) = step_mover(&mut mover, &mut host, edge_policy) {
            error!("motion failed for {entity:?}: {e}");
            continue;
        }
        if let Some(Decay(factor)) = decay {
            mover.accelerate(*factor);
        }
    }
}

/// Registers the motion systems.
#[derive(Default)]
pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, admit_movers)
            .add_systems(Update, advance_movers);
    }
}
