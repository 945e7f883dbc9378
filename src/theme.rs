//! Theme definitions for the particle field.
//!
//! A [`Theme`] names a complete visual mood: a color palette plus the
//! density, motion speed, dispersion and base size of the whole field.
//! Themes are compiled-in constants. Switching them live re-colors the
//! pool and moves the active boundary without reallocating anything.
//!
//! # Usage
//!
//! ```ignore
//! let mut field = Atmosphere::builder()
//!     .with_theme(Theme::Horror)
//!     .build();
//!
//! // Later, from a UI event:
//! field.set_theme_by_name("SCI-FI");
//! ```

use glam::Vec3;

/// Named visual themes for the particle field.
///
/// `Mystery` is the landing default and the fallback for unknown keys;
/// the remaining themes are the ones offered in a picker (see
/// [`Theme::selectable`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Silver and fog (default).
    #[default]
    Mystery,

    /// Blood reds over shadow.
    Horror,

    /// Noir grays with a red accent.
    Thriller,

    /// Neon greens, cyans and magentas.
    SciFi,

    /// Pastels and sunshine.
    FeelGood,

    /// Deep purples and gold.
    Emotion,
}

/// The full parameter set for one theme.
///
/// Immutable and process-wide; every theme resolves to exactly one of
/// these via [`Theme::params`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeParams {
    /// Colors a particle may be assigned on theme application (nonempty).
    pub palette: &'static [Vec3],
    /// Number of pool slots simulated and rendered under this theme.
    pub active_count: usize,
    /// Multiplier on each particle's base phase speed.
    pub speed_multiplier: f32,
    /// Spread tuning factor, carried for every theme but not consumed by
    /// the integrator yet.
    pub dispersion: f32,
    /// Render scale before the per-frame pulse is added.
    pub base_size: f32,
}

const MYSTERY_PALETTE: &[Vec3] = &[
    Vec3::new(1.0, 1.0, 1.0),       // White
    Vec3::new(0.627, 0.627, 0.627), // Silver
    Vec3::new(0.251, 0.251, 0.251), // Fog gray
];

const HORROR_PALETTE: &[Vec3] = &[
    Vec3::new(0.0, 0.0, 0.0),   // Black
    Vec3::new(0.102, 0.0, 0.0), // Shadowed red
    Vec3::new(0.541, 0.0, 0.0), // Dried blood
    Vec3::new(1.0, 0.0, 0.0),   // Red
];

const THRILLER_PALETTE: &[Vec3] = &[
    Vec3::new(0.110, 0.110, 0.110), // Near-black gray
    Vec3::new(0.173, 0.243, 0.314), // Slate blue
    Vec3::new(0.906, 0.298, 0.235), // Red accent
];

const SCI_FI_PALETTE: &[Vec3] = &[
    Vec3::new(0.0, 1.0, 0.0), // Green
    Vec3::new(0.0, 1.0, 1.0), // Cyan
    Vec3::new(1.0, 0.0, 1.0), // Magenta
    Vec3::new(1.0, 1.0, 1.0), // White
];

const FEEL_GOOD_PALETTE: &[Vec3] = &[
    Vec3::new(1.0, 0.945, 0.463),   // Pale yellow
    Vec3::new(0.302, 0.816, 0.882), // Sky cyan
    Vec3::new(0.941, 0.384, 0.573), // Pink
    Vec3::new(1.0, 1.0, 1.0),       // White
];

const EMOTION_PALETTE: &[Vec3] = &[
    Vec3::new(0.192, 0.106, 0.573), // Deep indigo
    Vec3::new(0.290, 0.078, 0.549), // Royal purple
    Vec3::new(0.533, 0.055, 0.310), // Wine
    Vec3::new(1.0, 0.843, 0.0),     // Gold
];

static MYSTERY: ThemeParams = ThemeParams {
    palette: MYSTERY_PALETTE,
    active_count: 1000,
    speed_multiplier: 0.2,
    dispersion: 0.5,
    base_size: 0.1,
};

static HORROR: ThemeParams = ThemeParams {
    palette: HORROR_PALETTE,
    active_count: 3500,
    speed_multiplier: 0.5,
    dispersion: 1.5,
    base_size: 0.15,
};

static THRILLER: ThemeParams = ThemeParams {
    palette: THRILLER_PALETTE,
    active_count: 3000,
    speed_multiplier: 2.0,
    dispersion: 0.8,
    base_size: 0.12,
};

static SCI_FI: ThemeParams = ThemeParams {
    palette: SCI_FI_PALETTE,
    active_count: 2500,
    speed_multiplier: 1.2,
    dispersion: 1.0,
    base_size: 0.15,
};

static FEEL_GOOD: ThemeParams = ThemeParams {
    palette: FEEL_GOOD_PALETTE,
    active_count: 2000,
    speed_multiplier: 0.6,
    dispersion: 2.0,
    base_size: 0.2,
};

static EMOTION: ThemeParams = ThemeParams {
    palette: EMOTION_PALETTE,
    active_count: 4000,
    speed_multiplier: 0.4,
    dispersion: 0.5,
    base_size: 0.1,
};

impl Theme {
    /// Every built-in theme.
    pub const ALL: [Theme; 6] = [
        Theme::Mystery,
        Theme::Horror,
        Theme::Thriller,
        Theme::SciFi,
        Theme::FeelGood,
        Theme::Emotion,
    ];

    /// Themes offered in a user-facing picker.
    ///
    /// The landing default is not user-selectable.
    pub fn selectable() -> impl Iterator<Item = Theme> {
        Self::ALL.into_iter().filter(|t| *t != Theme::default())
    }

    /// Look up the parameter set for this theme. Total and pure.
    pub fn params(self) -> &'static ThemeParams {
        match self {
            Theme::Mystery => &MYSTERY,
            Theme::Horror => &HORROR,
            Theme::Thriller => &THRILLER,
            Theme::SciFi => &SCI_FI,
            Theme::FeelGood => &FEEL_GOOD,
            Theme::Emotion => &EMOTION,
        }
    }

    /// The theme's display key.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Mystery => "MYSTERY",
            Theme::Horror => "HORROR",
            Theme::Thriller => "THRILLER",
            Theme::SciFi => "SCI-FI",
            Theme::FeelGood => "FEEL GOOD",
            Theme::Emotion => "EMOTION",
        }
    }

    /// Resolve a theme from its string key, case-insensitively.
    ///
    /// Unknown keys fall back to the default theme rather than failing;
    /// a stale key from the host UI must never take the field down.
    pub fn from_name(name: &str) -> Theme {
        match name.to_ascii_uppercase().as_str() {
            "MYSTERY" => Theme::Mystery,
            "HORROR" => Theme::Horror,
            "THRILLER" => Theme::Thriller,
            "SCI-FI" | "SCIFI" => Theme::SciFi,
            "FEEL GOOD" | "FEELGOOD" => Theme::FeelGood,
            "EMOTION" => Theme::Emotion,
            other => {
                log::debug!("unknown theme key {other:?}, using {:?}", Theme::default());
                Theme::default()
            }
        }
    }

    /// Largest `active_count` across every built-in theme.
    ///
    /// A pool sized to this can hold any theme without clamping.
    pub fn max_active_count() -> usize {
        Self::ALL
            .iter()
            .map(|t| t.params().active_count)
            .max()
            .unwrap_or(0)
    }
}
