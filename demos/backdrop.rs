//! # Headless Backdrop
//!
//! Drives a particle field the way a host application would, without a
//! renderer: a fixed-step clock, a pointer circling the window, and a
//! theme switch partway through each run.
//!
//! ## What This Demonstrates
//!
//! - `Atmosphere::builder()` - capacity, seed and initial theme
//! - The host loop: `Time::update` → `Atmosphere::step` → `instances`
//! - Live theme switching over a pool that is never reallocated
//!
//! ## Try This
//!
//! - Seed the builder differently and compare the printed spreads
//! - Park the pointer at the center and watch the spread grow
//! - Raise the frame count to see the respawn cycle settle in
//!
//! Run with: `cargo run --example backdrop`

use atmos::prelude::*;

const FRAMES_PER_THEME: u32 = 600;
const VIEWPORT: Vec2 = Vec2::new(32.0, 18.0);

fn main() {
    let mut field = Atmosphere::builder().with_seed(7).build();
    let mut clock = Time::new();
    clock.set_fixed_delta(Some(1.0 / 60.0));
    let mut pointer = Pointer::new();
    pointer.set_window_size(1280, 720);

    println!(
        "field: {} slots, themes: {}",
        field.capacity(),
        Theme::ALL.len()
    );

    for theme in Theme::selectable() {
        field.set_theme(theme);

        for frame in 0..FRAMES_PER_THEME {
            // Circle the pointer around the window center.
            let angle = frame as f32 / 50.0;
            pointer.cursor_moved(
                640.0 + angle.cos() * 300.0,
                360.0 + angle.sin() * 200.0,
            );

            let (elapsed, delta) = clock.update();
            field.step(&FrameInput {
                elapsed,
                delta,
                pointer: pointer.ndc(),
                viewport: VIEWPORT,
            });
        }

        let visible = field.instances().filter(|i| i.is_visible()).count();
        let spread = field
            .instances()
            .filter(|i| i.is_visible())
            .map(|i| Vec2::new(i.position[0], i.position[1]).length())
            .sum::<f32>()
            / visible as f32;

        println!(
            "{:>9}: {:>4} visible, mean planar spread {:>5.1}",
            theme.name(),
            visible,
            spread
        );
    }
}
