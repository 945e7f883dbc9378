//! Projection of pool state into per-instance render records.
//!
//! The engine performs no drawing. Each frame the host drains a fresh,
//! lazy sequence of [`Instance`] records (one per pool slot, hidden
//! slots included) and uploads it to its instanced renderer however it
//! sees fit. Nothing is cached between frames beyond the pool state
//! that drives the projection.

use bytemuck::{Pod, Zeroable};

use crate::motion::{pulse_scale, rotation};
use crate::pool::ParticlePool;
use crate::theme::ThemeParams;

/// Per-instance transform and color, laid out for direct upload to an
/// instancing buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Instance {
    /// World-space position.
    pub position: [f32; 3],
    /// Uniform scale, pulse already applied.
    pub scale: f32,
    /// Euler rotation in radians, identical on all three axes.
    pub rotation: [f32; 3],
    /// 1.0 for slots that should be drawn, 0.0 for hidden ones.
    pub visible: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
    _pad: f32,
}

impl Instance {
    /// Placeholder emitted for slots past the active boundary. Hidden
    /// slots keep their place in the sequence so the host's instance
    /// buffer never changes length.
    pub const HIDDEN: Instance = Instance {
        position: [0.0; 3],
        scale: 0.0,
        rotation: [0.0; 3],
        visible: 0.0,
        color: [0.0; 3],
        _pad: 0.0,
    };

    /// Whether this instance should be drawn.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible > 0.5
    }
}

/// Project the pool into one render instance per slot.
///
/// Lazy and restartable; call it anew each frame after [`step`] has run.
///
/// [`step`]: crate::motion::step
pub fn project<'a>(
    pool: &'a ParticlePool,
    params: &'a ThemeParams,
) -> impl Iterator<Item = Instance> + 'a {
    pool.particles().iter().map(move |particle| {
        if !particle.active {
            return Instance::HIDDEN;
        }
        Instance {
            position: particle.position.to_array(),
            scale: pulse_scale(particle.phase, params.base_size),
            rotation: rotation(particle.phase).to_array(),
            visible: 1.0,
            color: particle.color.to_array(),
            _pad: 0.0,
        }
    })
}
