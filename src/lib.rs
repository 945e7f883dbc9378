//! # Atmos - Atmosphere Particle Field
//!
//! A themeable field of thousands of drifting, rotating, pulsing solids
//! meant to live behind a user interface, with a subtle repulsion
//! response to the pointer.
//!
//! Atmos owns the simulation and nothing else: the host owns the
//! window, the camera, the frame loop and the renderer, and consumes
//! per-instance transforms for instanced draw submission.
//!
//! ## Quick Start
//!
//! ```ignore
//! use atmos::prelude::*;
//!
//! let mut field = Atmosphere::builder()
//!     .with_theme(Theme::Horror)
//!     .build();
//! let mut clock = Time::new();
//! let mut pointer = Pointer::new();
//!
//! // Forward cursor/resize events from your windowing layer:
//! //   pointer.set_window_size(w, h);
//! //   pointer.cursor_moved(x, y);
//!
//! // In your render loop:
//! let (elapsed, delta) = clock.update();
//! field.step(&FrameInput {
//!     elapsed,
//!     delta,
//!     pointer: pointer.ndc(),
//!     viewport: Vec2::new(30.0, 20.0), // world units at the particle plane
//! });
//! for instance in field.instances() {
//!     // upload to your instancing buffer; skip or discard hidden ones
//! }
//!
//! // From a UI event:
//! field.set_theme_by_name("SCI-FI");
//! ```
//!
//! ## Core Concepts
//!
//! ### Themes
//!
//! A [`Theme`] bundles a palette with the density, speed, dispersion
//! and base size of the whole field. Themes are compiled-in constants;
//! switching one live re-colors the pool in a single pass and moves the
//! active boundary. Unknown theme keys fall back to the default rather
//! than failing.
//!
//! ### The pool
//!
//! The [`ParticlePool`] is allocated once at the largest count any
//! theme can ask for and never resized. Slots past the current theme's
//! active boundary stay allocated but dormant: skipped by the
//! integrator, emitted hidden by the projector.
//!
//! ### Frames
//!
//! One frame is: snapshot inputs into a [`FrameInput`], call
//! [`Atmosphere::step`], drain [`Atmosphere::instances`]. Everything is
//! synchronous CPU work on the caller's thread; the engine performs no
//! I/O and spawns no threads.

pub mod input;
pub mod motion;
pub mod pool;
pub mod render;
mod simulation;
pub mod theme;
pub mod time;

pub use glam::{Vec2, Vec3};
pub use input::Pointer;
pub use motion::FrameInput;
pub use pool::{Particle, ParticlePool};
pub use render::Instance;
pub use simulation::{Atmosphere, AtmosphereBuilder, DEFAULT_CAPACITY};
pub use theme::{Theme, ThemeParams};
pub use time::Time;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use atmos::prelude::*;
/// ```
pub mod prelude {
    pub use crate::input::Pointer;
    pub use crate::motion::FrameInput;
    pub use crate::pool::{Particle, ParticlePool};
    pub use crate::render::Instance;
    pub use crate::simulation::{Atmosphere, AtmosphereBuilder, DEFAULT_CAPACITY};
    pub use crate::theme::{Theme, ThemeParams};
    pub use crate::time::Time;
    pub use crate::{Vec2, Vec3};
}
