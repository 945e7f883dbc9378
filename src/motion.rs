//! Per-frame motion integration.
//!
//! Each frame advances every active particle's phase, drifts it along a
//! trigonometric swirl, pushes it away from the pointer when close, and
//! respawns it near the origin once it wanders out of bounds. Positions
//! accumulate frame over frame; they are never recomputed from phase
//! alone. The pulsing scale and rotation the renderer needs are pure
//! functions of phase, exposed here and evaluated by the projector.
//!
//! All per-frame inputs are captured into a [`FrameInput`] before the
//! pass begins, so one integration never observes torn pointer or
//! viewport state.

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::pool::ParticlePool;
use crate::theme::ThemeParams;

/// Swirl drift amplitude per frame.
const SWIRL_SCALE: f32 = 0.01;
/// Planar radius (world units) inside which the pointer repels.
const REPULSION_RADIUS: f32 = 5.0;
/// Strength factor of the repulsion force.
const REPULSION_STRENGTH: f32 = 2.0;
/// Step scaling applied when integrating the repulsion force.
const REPULSION_STEP: f32 = 0.05;
/// Bound on the x and y axes past which a particle respawns. z never
/// triggers a respawn; the host camera's depth handling absorbs the
/// drift, and z is only re-seeded when x or y trip the bound.
const BOUND: f32 = 20.0;
/// Half-extent of the respawn offset around the origin.
const RESPAWN_EXTENT: f32 = 5.0;
/// Amplitude of the pulsing scale.
const PULSE_AMPLITUDE: f32 = 0.05;
/// Rotation accumulated per unit of phase, applied on all three axes.
const ROTATION_RATE: f32 = 0.5;

/// Once-per-frame snapshot of everything the integrator reads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Host clock: seconds since the simulation started.
    pub elapsed: f32,
    /// Host clock: seconds since the previous frame. Nonnegative.
    pub delta: f32,
    /// Pointer position in normalized device coordinates, [-1,1] on
    /// both axes with the origin at the viewport center.
    pub pointer: Vec2,
    /// Viewport dimensions in world units at the particle plane.
    pub viewport: Vec2,
}

/// Advance every active slot by one frame.
///
/// Slots past the theme's active boundary are skipped entirely: no
/// motion cost, no respawns. A particle left out of bounds by the
/// previous frame is respawned before any motion is applied to it this
/// frame, so respawn never stacks on top of a fresh swirl.
pub fn step(
    pool: &mut ParticlePool,
    params: &ThemeParams,
    frame: &FrameInput,
    rng: &mut impl Rng,
) {
    debug_assert!(frame.delta >= 0.0, "frame delta must be nonnegative");

    let pointer_world = frame.pointer * frame.viewport * 0.5;
    let active = params.active_count.min(pool.capacity());

    for particle in &mut pool.particles_mut()[..active] {
        if particle.position.x.abs() > BOUND || particle.position.y.abs() > BOUND {
            particle.position = respawn_offset(rng);
        }

        particle.phase += particle.base_speed * params.speed_multiplier;

        let t = particle.phase;
        let swirl = Vec3::new(
            t.cos() + t.sin() / 10.0,
            t.sin() + (2.0 * t).cos() / 10.0,
            t.cos() + (3.0 * t).sin() / 10.0,
        ) * SWIRL_SCALE;

        let offset = Vec2::new(particle.position.x, particle.position.y) - pointer_world;
        let push = repulsion(offset);

        particle.position.x += swirl.x + push.x;
        particle.position.y += swirl.y + push.y;
        particle.position.z += swirl.z;
    }
}

/// Strength of the pointer repulsion at planar distance `dist`.
///
/// Zero at and beyond the repulsion radius. Also zero at exactly zero
/// distance: a pointer coincident with a particle has no direction to
/// push along, and must not produce NaN.
fn repulsion_strength(dist: f32) -> f32 {
    if dist > 0.0 && dist < REPULSION_RADIUS {
        (REPULSION_RADIUS - dist) * REPULSION_STRENGTH
    } else {
        0.0
    }
}

/// Positional displacement pushing a particle away from the pointer.
///
/// `offset` is the particle's position minus the pointer's world
/// position, in the x/y plane; depth is ignored.
fn repulsion(offset: Vec2) -> Vec2 {
    let dist = offset.length();
    let strength = repulsion_strength(dist);
    if strength > 0.0 {
        offset / dist * strength * REPULSION_STEP
    } else {
        Vec2::ZERO
    }
}

/// Fresh position near the origin for a respawning particle.
fn respawn_offset(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-RESPAWN_EXTENT..RESPAWN_EXTENT),
        rng.gen_range(-RESPAWN_EXTENT..RESPAWN_EXTENT),
        rng.gen_range(-RESPAWN_EXTENT..RESPAWN_EXTENT),
    )
}

/// Pulsing render scale derived from a particle's phase.
#[inline]
pub fn pulse_scale(phase: f32, base_size: f32) -> f32 {
    base_size + phase.sin() * PULSE_AMPLITUDE
}

/// Rotation in radians, identical on all three axes, derived from phase.
#[inline]
pub fn rotation(phase: f32) -> Vec3 {
    Vec3::splat(phase * ROTATION_RATE)
}
