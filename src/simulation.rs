//! Engine façade and builder.
//!
//! [`Atmosphere`] owns the pool, the active theme and the injected
//! random source, and wires the per-frame passes together. The host
//! owns the frame loop: it calls [`Atmosphere::step`] once per tick and
//! drains [`Atmosphere::instances`] into its renderer. Everything runs
//! synchronously on the caller's thread; the engine holds no timer and
//! schedules nothing.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::motion::{self, FrameInput};
use crate::pool::ParticlePool;
use crate::render::{self, Instance};
use crate::theme::{Theme, ThemeParams};

/// Default pool capacity: the largest active count across the built-in
/// themes, so any theme fits without clamping.
pub const DEFAULT_CAPACITY: usize = 4000;

/// A live particle field.
///
/// Construct with [`Atmosphere::new`] for the defaults or
/// [`Atmosphere::builder`] to configure capacity, seed and initial
/// theme. The pool is allocated once here and never again.
pub struct Atmosphere {
    pool: ParticlePool,
    theme: Theme,
    rng: SmallRng,
}

impl Atmosphere {
    /// Create a field with default settings: capacity
    /// [`DEFAULT_CAPACITY`], the default theme, an entropy seed.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a field.
    pub fn builder() -> AtmosphereBuilder {
        AtmosphereBuilder::new()
    }

    /// The active theme.
    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Parameters of the active theme.
    #[inline]
    pub fn params(&self) -> &'static ThemeParams {
        self.theme.params()
    }

    /// The underlying pool.
    #[inline]
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Number of allocated slots. Fixed for the field's lifetime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Switch the active theme.
    ///
    /// One synchronous recolor pass over the pool: by the time this
    /// returns, every slot carries either the new theme's state or the
    /// inactive flag, so a frame sees the old theme or the new one but
    /// never a half-recolored pool. Re-applying the current theme
    /// re-rolls the colors, the same as a fresh application.
    pub fn set_theme(&mut self, theme: Theme) {
        let params = theme.params();
        self.pool.apply_theme(params, &mut self.rng);
        self.theme = theme;
        log::debug!(
            "applied theme {theme:?}: {} of {} slots active",
            params.active_count,
            self.pool.capacity()
        );
    }

    /// Switch the theme by its string key.
    ///
    /// Unknown keys fall back to the default theme; see
    /// [`Theme::from_name`].
    pub fn set_theme_by_name(&mut self, name: &str) {
        self.set_theme(Theme::from_name(name));
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self, frame: &FrameInput) {
        motion::step(&mut self.pool, self.theme.params(), frame, &mut self.rng);
    }

    /// Project the current pool state into render instances, one per
    /// slot, hidden slots included.
    pub fn instances(&self) -> impl Iterator<Item = Instance> + '_ {
        render::project(&self.pool, self.theme.params())
    }
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self::new()
    }
}

/// Chainable configuration for [`Atmosphere`].
///
/// ```ignore
/// let field = Atmosphere::builder()
///     .with_capacity(4000)
///     .with_seed(42)
///     .with_theme(Theme::Emotion)
///     .build();
/// ```
pub struct AtmosphereBuilder {
    capacity: usize,
    seed: Option<u64>,
    theme: Theme,
}

impl AtmosphereBuilder {
    fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            seed: None,
            theme: Theme::default(),
        }
    }

    /// Set the pool capacity.
    ///
    /// Fixed for the field's lifetime; must cover the largest
    /// `active_count` the host intends to switch to.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Seed the random source for reproducible runs.
    ///
    /// Colors are still re-rolled on every theme switch; the roll
    /// sequence just becomes deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Theme applied at construction.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Allocate the pool and apply the initial theme.
    pub fn build(self) -> Atmosphere {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let pool = ParticlePool::new(self.capacity, &mut rng);
        let mut field = Atmosphere {
            pool,
            theme: self.theme,
            rng,
        };
        field.set_theme(self.theme);
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Time;
    use glam::Vec2;

    #[test]
    fn test_builder_defaults() {
        let field = Atmosphere::builder().with_seed(1).build();
        assert_eq!(field.capacity(), DEFAULT_CAPACITY);
        assert_eq!(field.theme(), Theme::default());
        assert_eq!(field.pool().active_len(), field.params().active_count);
    }

    #[test]
    fn test_theme_switch_resizes_visible_set_only() {
        let mut field = Atmosphere::builder()
            .with_seed(2)
            .with_theme(Theme::Mystery) // 1000 active
            .build();
        let storage = field.pool().particles().as_ptr();
        assert_eq!(field.instances().filter(|i| i.is_visible()).count(), 1000);

        field.set_theme(Theme::Horror); // 3500 active
        assert_eq!(field.instances().filter(|i| i.is_visible()).count(), 3500);
        assert_eq!(field.instances().count(), DEFAULT_CAPACITY);
        assert_eq!(field.pool().particles().as_ptr(), storage);
    }

    #[test]
    fn test_set_theme_by_name_falls_back() {
        let mut field = Atmosphere::builder().with_seed(3).build();
        field.set_theme_by_name("SCI-FI");
        assert_eq!(field.theme(), Theme::SciFi);
        field.set_theme_by_name("no such theme");
        assert_eq!(field.theme(), Theme::default());
    }

    #[test]
    fn test_seeded_fields_reproduce() {
        let build = || {
            Atmosphere::builder()
                .with_seed(99)
                .with_theme(Theme::Mystery)
                .with_capacity(1000)
                .build()
        };
        let a = build();
        let b = build();
        assert_eq!(a.pool().particles(), b.pool().particles());
    }

    #[test]
    fn test_driven_loop_stays_sane() {
        let mut field = Atmosphere::builder()
            .with_seed(4)
            .with_theme(Theme::SciFi)
            .build();
        let mut clock = Time::new();
        clock.set_fixed_delta(Some(1.0 / 60.0));

        for frame in 0..120 {
            let (elapsed, delta) = clock.update();
            // Sweep the pointer across the viewport as a user would.
            let pointer = Vec2::new(
                (frame as f32 / 60.0).sin(),
                (frame as f32 / 90.0).cos(),
            );
            field.step(&FrameInput {
                elapsed,
                delta,
                pointer,
                viewport: Vec2::new(30.0, 20.0),
            });
            if frame == 60 {
                field.set_theme(Theme::FeelGood);
            }
        }

        assert_eq!(field.instances().count(), DEFAULT_CAPACITY);
        for particle in field.pool().particles() {
            assert!(particle.position.x.is_finite());
            assert!(particle.position.y.is_finite());
            assert!(particle.position.z.is_finite());
        }
    }
}
