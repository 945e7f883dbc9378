//! Fixed-capacity particle pool.
//!
//! The pool is allocated once, at the largest count any theme can ask
//! for, and lives for the whole simulation. A theme switch only
//! re-colors slots and moves the active boundary; records are never
//! reallocated. Slots past the boundary stay in memory, skipped by the
//! integrator and emitted hidden by the projector.

use std::ops::Range;

use glam::Vec3;
use rand::Rng;

use crate::theme::ThemeParams;

/// Initial phase range; phase only grows from here.
const PHASE_RANGE: Range<f32> = 0.0..100.0;
/// Per-particle drift amplitude constant.
const ORBIT_FACTOR_RANGE: Range<f32> = 20.0..120.0;
/// Per-particle phase speed before the theme multiplier.
const BASE_SPEED_RANGE: Range<f32> = 0.01..0.015;
/// Half-extent of the initial spawn cube around the origin.
const SPAWN_EXTENT: f32 = 25.0;

/// One slot in the pool.
///
/// `phase`, `orbit_factor` and `base_speed` are drawn once at pool
/// creation; only `position`, `color` and `active` change afterwards,
/// and `phase` only ever advances.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Accumulated motion phase.
    pub phase: f32,
    /// Drift amplitude constant, reserved for spread tuning.
    pub orbit_factor: f32,
    /// Phase speed before the theme multiplier.
    pub base_speed: f32,
    /// World-space position.
    pub position: Vec3,
    /// Current palette color.
    pub color: Vec3,
    /// Whether the slot is simulated and rendered under the current
    /// theme. An explicit flag, never a sentinel color: dark palettes
    /// must not collide with "hidden".
    pub active: bool,
}

/// Fixed-capacity particle storage.
#[derive(Debug)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    /// Allocate `capacity` records with randomized per-particle state.
    ///
    /// Runs exactly once per pool; the same records are mutated in place
    /// for the rest of the simulation. The random source is injected so
    /// a seeded run reproduces the same field.
    pub fn new(capacity: usize, rng: &mut impl Rng) -> Self {
        let particles = (0..capacity)
            .map(|_| Particle {
                phase: rng.gen_range(PHASE_RANGE),
                orbit_factor: rng.gen_range(ORBIT_FACTOR_RANGE),
                base_speed: rng.gen_range(BASE_SPEED_RANGE),
                position: Vec3::new(
                    rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
                    rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
                    rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
                ),
                color: Vec3::ONE,
                active: false,
            })
            .collect();

        log::debug!("allocated particle pool with {capacity} slots");
        Self { particles }
    }

    /// Number of allocated slots. Fixed for the pool's lifetime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// All slots, active and dormant.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Look up a single slot.
    ///
    /// An out-of-range index is a programming error: it asserts in
    /// development builds and returns `None` in release builds.
    pub fn get(&self, index: usize) -> Option<&Particle> {
        debug_assert!(
            index < self.particles.len(),
            "slot index {index} out of range ({} allocated)",
            self.particles.len()
        );
        self.particles.get(index)
    }

    /// Number of slots currently flagged active.
    pub fn active_len(&self) -> usize {
        self.particles.iter().filter(|p| p.active).count()
    }

    /// Apply a theme to the pool.
    ///
    /// Every slot below the theme's active boundary gets a fresh color
    /// drawn uniformly from the palette; every slot past it is
    /// deactivated. Runs once per theme switch, never per frame, and
    /// completes in a single synchronous pass so no frame can observe a
    /// half-recolored pool.
    pub fn apply_theme(&mut self, params: &ThemeParams, rng: &mut impl Rng) {
        debug_assert!(
            params.active_count <= self.particles.len(),
            "theme wants {} active slots but only {} are allocated",
            params.active_count,
            self.particles.len()
        );
        debug_assert!(!params.palette.is_empty(), "theme palette is empty");
        if params.palette.is_empty() {
            return;
        }

        let active = params.active_count.min(self.particles.len());
        for particle in &mut self.particles[..active] {
            particle.color = params.palette[rng.gen_range(0..params.palette.len())];
            particle.active = true;
        }
        for particle in &mut self.particles[active..] {
            particle.active = false;
        }
    }
}
