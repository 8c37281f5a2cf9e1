//! Particle bursts for brick destruction
//!
//! Purely visual: particles never feed back into gameplay. Randomness comes
//! from a seeded PCG stream so a run replays identically from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::color::Rgba;
use crate::consts::{PARTICLE_MIN_SIZE, PARTICLE_SIZE_RANGE};

/// A single fading square
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Rgba,
    /// Opacity, 1.0 at spawn and strictly decreasing
    pub alpha: f32,
    decay: f32,
    shrink: f32,
    age: u32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, color: Rgba, decay: f32, shrink: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            color,
            alpha: 1.0,
            decay,
            shrink,
            age: 0,
        }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.age += 1;
        // Derived from age so the fade ends on tick 1/decay exactly
        self.alpha = 1.0 - self.decay * self.age as f32;
        self.size *= self.shrink;
    }

    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Owner of every live particle
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: Pcg32,
    max_speed: f32,
    decay: f32,
    shrink: f32,
}

impl ParticleSystem {
    pub fn new(seed: u64, max_speed: f32, decay: f32, shrink: f32) -> Self {
        Self {
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            max_speed,
            decay,
            shrink,
        }
    }

    /// Emit `count` particles at `pos` with random velocity and size
    pub fn spawn(&mut self, pos: Vec2, color: Rgba, count: usize) {
        self.particles.reserve(count);
        for _ in 0..count {
            let vel = Vec2::new(self.random_component(), self.random_component());
            let size = PARTICLE_MIN_SIZE + self.rng.random::<f32>() * PARTICLE_SIZE_RANGE;
            self.particles
                .push(Particle::new(pos, vel, size, color, self.decay, self.shrink));
        }
    }

    /// Velocity component in [-max_speed, max_speed)
    fn random_component(&mut self) -> f32 {
        (self.rng.random::<f32>() - 0.5) * 2.0 * self.max_speed
    }

    /// Advance every particle, then drop the dead ones
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|p| !p.is_dead());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
