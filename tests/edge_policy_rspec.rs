//! Behaviour-driven tests using rust-rspec.
//!
//! These suites drive a single mover across a small world for several ticks
//! and check how each edge policy treats it once it reaches the boundary.

use approx::relative_eq;
use smoothmove::plugin::step_mover;
use smoothmove::{EdgePolicy, GridActor, GridHost, GridPoint, PreciseMover, Vector};
use test_utils::{actor_at, admitted_mover, mover_at_exact, world};

#[derive(Clone, Debug)]
struct EdgeWorld {
    mover: PreciseMover,
    actor: GridActor,
    policy: EdgePolicy,
}

impl Default for EdgeWorld {
    fn default() -> Self {
        let actor = actor_at(world(10, 10), 7, 5);
        Self {
            mover: PreciseMover::new(),
            actor,
            policy: EdgePolicy::Clamp,
        }
    }
}

impl EdgeWorld {
    /// Start again from cell (7, 5) heading right at 0.75 cells per tick.
    fn setup(&mut self, policy: EdgePolicy) {
        *self = Self::default();
        self.mover = admitted_mover(&self.actor, 0.75, 0.0);
        self.policy = policy;
    }

    /// Start again at the exact position `(x, y)`, bouncing with a slow
    /// velocity.
    fn setup_slow_bounce(&mut self, x: f64, y: f64, vx: f64, vy: f64) {
        let (mover, actor) = mover_at_exact(world(10, 10), x, y, Vector::new(vx, vy));
        self.mover = mover;
        self.actor = actor;
        self.policy = EdgePolicy::Bounce;
    }

    fn tick(&mut self, ticks: u32) {
        for _ in 0..ticks {
            step_mover(&mut self.mover, &mut self.actor, self.policy)
                .unwrap_or_else(|e| panic!("tick failed: {e}"));
        }
    }

    fn assert_cell(&self, x: i32, y: i32) {
        assert_eq!(self.actor.grid_position(), GridPoint::new(x, y));
    }

    fn assert_velocity(&self, vx: f64, vy: f64) {
        let movement: Vector = self.mover.movement();
        assert!(
            relative_eq!(movement.x(), vx, epsilon = 1e-9)
                && relative_eq!(movement.y(), vy, epsilon = 1e-9),
            "expected velocity ({vx}, {vy}), got ({}, {})",
            movement.x(),
            movement.y()
        );
    }
}

#[test]
fn clamped_mover_waits_at_the_edge() {
    rspec::run(&rspec::given(
        "a mover heading right under the clamp policy",
        EdgeWorld::default(),
        |ctx| {
            ctx.before_each(|env| env.setup(EdgePolicy::Clamp));
            ctx.when("the simulation ticks ten times", |ctx| {
                ctx.before_each(|env| env.tick(10));
                ctx.then("it stays on the last column with its velocity intact", |env| {
                    env.assert_cell(9, 5);
                    env.assert_velocity(0.75, 0.0);
                });
            });
        },
    ));
}

#[test]
fn bouncing_mover_turns_around() {
    rspec::run(&rspec::given(
        "a mover heading right under the bounce policy",
        EdgeWorld::default(),
        |ctx| {
            ctx.before_each(|env| env.setup(EdgePolicy::Bounce));
            ctx.when("it reaches the right edge", |ctx| {
                ctx.before_each(|env| env.tick(3));
                ctx.then("it is snapped to the edge cell and heads left", |env| {
                    env.assert_cell(9, 5);
                    env.assert_velocity(-0.75, 0.0);
                    assert!(relative_eq!(env.mover.exact_x(), 9.0));
                });
            });
            ctx.when("it keeps going after the bounce", |ctx| {
                ctx.before_each(|env| env.tick(5));
                ctx.then("it has moved back towards the middle", |env| {
                    env.assert_cell(7, 5);
                });
            });
        },
    ));
}

#[test]
fn stopping_mover_rests_inside() {
    rspec::run(&rspec::given(
        "a mover heading right under the stop policy",
        EdgeWorld::default(),
        |ctx| {
            ctx.before_each(|env| env.setup(EdgePolicy::Stop));
            ctx.when("it reaches the right edge", |ctx| {
                ctx.before_each(|env| env.tick(4));
                ctx.then("it rests one cell inside with no speed", |env| {
                    env.assert_cell(8, 5);
                    env.assert_velocity(0.0, 0.0);
                });
            });
        },
    ));
}

#[test]
fn slow_mover_escapes_the_near_edges() {
    rspec::run(&rspec::given(
        "a mover slower than one cell per tick under the bounce policy",
        EdgeWorld::default(),
        |ctx| {
            ctx.when("it drifts into the left edge", |ctx| {
                ctx.before_each(|env| {
                    env.setup_slow_bounce(0.5, 5.0, -0.75, 0.0);
                    env.tick(4);
                });
                ctx.then("it reflects once and leaves column zero", |env| {
                    env.assert_cell(2, 5);
                    env.assert_velocity(0.75, 0.0);
                });
            });
            ctx.when("it drifts into the top edge", |ctx| {
                ctx.before_each(|env| {
                    env.setup_slow_bounce(5.0, 0.5, 0.0, -0.75);
                    env.tick(4);
                });
                ctx.then("it reflects once and leaves row zero", |env| {
                    env.assert_cell(5, 2);
                    env.assert_velocity(0.0, 0.75);
                });
            });
            ctx.when("it runs for twenty ticks", |ctx| {
                ctx.before_each(|env| {
                    env.setup_slow_bounce(0.5, 5.0, -0.75, 0.0);
                    env.tick(20);
                });
                ctx.then("it is no longer pinned to column zero", |env| {
                    assert_ne!(env.actor.grid_position().x, 0);
                });
            });
        },
    ));
}
