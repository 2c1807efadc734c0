//! Scene builders shared by the physics benchmarks.

use anyhow::Result;
use glam::Vec2;
use pawprint_physics::{PhysicsBody, PhysicsConfig, PhysicsWorld};

/// Deterministic xorshift so every run builds the same scene.
pub struct SceneRng(u64);

impl SceneRng {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_f32(&mut self) -> f32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 40) as f32 / (1u64 << 24) as f32
    }

    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }
}

/// Floor spanning the play area, id 0.
pub fn floor(width: f32, y: f32) -> PhysicsBody {
    PhysicsBody::new_static(0, Vec2::new(width * 0.5, y), Vec2::new(width * 0.5, 10.0))
}

/// `n` dynamic boxes scattered over a `width` x `width` area above a floor.
pub fn setup_scattered_world(n: usize, width: f32) -> Result<PhysicsWorld> {
    let mut world = PhysicsWorld::new(PhysicsConfig::default())?;
    world.add_body(floor(width, width + 10.0))?;

    let mut rng = SceneRng::new(0x9e37_79b9);
    for i in 0..n {
        let pos = Vec2::new(rng.range(0.0, width), rng.range(0.0, width));
        let half = Vec2::new(rng.range(2.0, 8.0), rng.range(2.0, 8.0));
        world.add_body(
            PhysicsBody::new_dynamic(i as u64 + 1, pos, half)
                .with_velocity(Vec2::new(rng.range(-20.0, 20.0), rng.range(-20.0, 20.0)))
                .with_friction(0.1),
        )?;
    }
    Ok(world)
}

/// Columns of boxes stacked on a floor, so most bodies are in contact.
pub fn setup_stacked_world(columns: usize, height: usize) -> Result<PhysicsWorld> {
    let width = columns as f32 * 12.0;
    let floor_y = height as f32 * 10.0 + 20.0;
    let mut world = PhysicsWorld::new(PhysicsConfig::default())?;
    world.add_body(floor(width, floor_y))?;

    let mut id: u64 = 1;
    for c in 0..columns {
        for r in 0..height {
            let pos = Vec2::new(c as f32 * 12.0 + 6.0, floor_y - 15.0 - r as f32 * 10.0);
            world.add_body(PhysicsBody::new_dynamic(id, pos, Vec2::splat(5.0)))?;
            id += 1;
        }
    }
    Ok(world)
}

/// Step `world` for `frames` fixed ticks.
pub fn run_frames(world: &mut PhysicsWorld, frames: usize) {
    let dt = world.config().time_step;
    for _ in 0..frames {
        world.update(dt);
    }
}
