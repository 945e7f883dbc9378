//! Integration tests driving the engine the way a host would.
//!
//! These exercise the public API only: build a field, feed it frames
//! from a clock and a pointer tracker, switch themes mid-flight, and
//! drain instances as if uploading them to a renderer.

use atmos::prelude::*;

// ============================================================================
// Host Loop
// ============================================================================

#[test]
fn test_host_loop_with_pointer_and_theme_switches() {
    let mut field = Atmosphere::builder()
        .with_seed(7)
        .with_theme(Theme::Mystery)
        .build();
    let mut clock = Time::new();
    clock.set_fixed_delta(Some(1.0 / 60.0));
    let mut pointer = Pointer::new();
    pointer.set_window_size(1280, 720);

    let viewport = Vec2::new(32.0, 18.0);
    for frame in 0..300u32 {
        // Circle the pointer around the window.
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
            viewport,
        });

        match frame {
            100 => field.set_theme(Theme::Horror),
            200 => field.set_theme_by_name("FEEL GOOD"),
            _ => {}
        }
    }

    assert_eq!(clock.frame(), 300);
    assert_eq!(field.theme(), Theme::FeelGood);

    // Every slot still projects, and the visible set matches the theme.
    let instances: Vec<Instance> = field.instances().collect();
    assert_eq!(instances.len(), field.capacity());
    let visible = instances.iter().filter(|i| i.is_visible()).count();
    assert_eq!(visible, field.params().active_count);

    // No frame corrupted the pool.
    for particle in field.pool().particles() {
        assert!(particle.position.x.is_finite());
        assert!(particle.position.y.is_finite());
        assert!(particle.position.z.is_finite());
    }
}

// ============================================================================
// Theme Switching
// ============================================================================

#[test]
fn test_density_follows_theme_on_the_next_projection() {
    let mut field = Atmosphere::builder().with_seed(8).build();

    for theme in Theme::ALL {
        field.set_theme(theme);
        let visible = field.instances().filter(|i| i.is_visible()).count();
        assert_eq!(visible, theme.params().active_count, "{theme:?}");
    }
}

#[test]
fn test_visible_instances_wear_palette_colors() {
    let mut field = Atmosphere::builder().with_seed(9).build();
    field.set_theme(Theme::Emotion);
    let palette = Theme::Emotion.params().palette;

    for instance in field.instances().filter(|i| i.is_visible()) {
        let color = Vec3::from_array(instance.color);
        assert!(palette.contains(&color));
    }
}

// ============================================================================
// Long-Run Behavior
// ============================================================================

#[test]
fn test_phases_only_ever_advance_across_a_long_run() {
    let mut field = Atmosphere::builder()
        .with_seed(10)
        .with_theme(Theme::Thriller)
        .build();
    let frame = FrameInput {
        elapsed: 0.0,
        delta: 1.0 / 60.0,
        pointer: Vec2::ZERO,
        viewport: Vec2::new(40.0, 22.0),
    };

    let mut phases: Vec<f32> = field.pool().particles().iter().map(|p| p.phase).collect();
    for _ in 0..600 {
        field.step(&frame);
        for (particle, old) in field.pool().particles().iter().zip(&phases) {
            assert!(particle.phase >= *old);
        }
        phases = field.pool().particles().iter().map(|p| p.phase).collect();
    }
}

#[test]
fn test_respawns_keep_the_field_bounded_on_x_and_y() {
    let mut field = Atmosphere::builder()
        .with_seed(11)
        .with_theme(Theme::Horror)
        .build();
    let frame = FrameInput {
        elapsed: 0.0,
        delta: 1.0 / 60.0,
        pointer: Vec2::ZERO,
        viewport: Vec2::new(40.0, 22.0),
    };

    for _ in 0..1200 {
        field.step(&frame);
    }

    // A particle may sit just past the bound for one frame, but the
    // swirl can only carry it a fraction of a unit past it before the
    // next step respawns it near the origin.
    let active = field.params().active_count;
    for particle in &field.pool().particles()[..active] {
        assert!(particle.position.x.abs() < 21.0);
        assert!(particle.position.y.abs() < 21.0);
    }
}
