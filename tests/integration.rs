// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the screen's animation contract: the staggered
//! cascade, the pulse shapes, and the effect fallback all derive from the
//! same two progress values, so the scenarios here exercise the public
//! crate API end to end without a renderer.

use fluid_nav::animation::stagger::{self, SATELLITES};
use fluid_nav::animation::{Easing, StaggerWindow, Tween};
use fluid_nav::render_effect::{AlphaMatrix, Capabilities, EffectMode, RenderEffect, TileMode};
use fluid_nav::ui::shapes;
use std::time::{Duration, Instant};

#[test]
fn windowed_interpolation_contract_holds_for_all_windows() {
    // Every stagger window used by the screen, plus the toggle and filler
    // windows, maps 0 -> 0 and 1 -> 1 and never decreases.
    let mut windows: Vec<StaggerWindow> = vec![
        stagger::TOGGLE_ROTATION_WINDOW,
        stagger::FILLER_SCALE_WINDOW,
    ];
    for motion in &SATELLITES {
        windows.push(motion.offset_window);
        windows.push(motion.opacity_window);
    }

    for window in windows {
        for easing in [Easing::Linear, Easing::FastOutSlowIn] {
            assert_eq!(easing.between(window, 0.0), 0.0);
            assert_eq!(easing.between(window, 1.0), 1.0);

            let mut previous = 0.0;
            for i in 0..=100 {
                let v = easing.between(window, i as f32 / 100.0);
                assert!((0.0..=1.0).contains(&v));
                assert!(v >= previous - 1e-4);
                previous = v;
            }
        }
    }
}

#[test]
fn pulse_shape_contract() {
    assert!((shapes::pulse_scale(0.0) - 2.0).abs() < 1e-6);
    assert!((shapes::pulse_scale(0.5) - 1.0).abs() < 1e-6);
    assert!((shapes::pulse_scale(1.0) - 2.0).abs() < 1e-6);
}

#[test]
fn full_open_close_round_trip_through_the_drive() {
    // Drive the layout tween exactly as the screen does: 1 s linear toward
    // 1, then 1 s linear back toward 0, sampling the cascade at both ends.
    let mut layout = Tween::settled(0.0, Duration::from_millis(1000), Easing::Linear);
    let t0 = Instant::now();

    layout.retarget(1.0, t0);
    let open = t0 + Duration::from_millis(1000);
    assert_eq!(layout.value_at(open), 1.0);

    for motion in &SATELLITES {
        let pose = motion.pose(layout.value_at(open));
        assert_eq!(pose.offset, motion.offset);
        assert_eq!(pose.icon_opacity, 1.0);
    }
    assert_eq!(
        stagger::toggle_rotation(layout.value_at(open)),
        stagger::TOGGLE_ROTATION_DEGREES
    );
    assert_eq!(stagger::filler_scale(layout.value_at(open)), 0.0);

    layout.retarget(0.0, open);
    let closed = open + Duration::from_millis(1000);
    assert_eq!(layout.value_at(closed), 0.0);

    for motion in &SATELLITES {
        let pose = motion.pose(layout.value_at(closed));
        assert_eq!(pose.offset, iced::Vector::new(0.0, 0.0));
        assert_eq!(pose.icon_opacity, 0.0);
    }
    assert_eq!(stagger::toggle_rotation(layout.value_at(closed)), 0.0);
    assert_eq!(stagger::filler_scale(layout.value_at(closed)), 1.0);
}

#[test]
fn cascade_stays_ordered_throughout_the_sweep() {
    // At every intermediate progress the camera leads, settings follows,
    // cart trails: the cascade never reorders.
    for i in 1..100 {
        let p = i as f32 / 100.0;
        let travelled: Vec<f32> = SATELLITES
            .iter()
            .map(|m| Easing::FastOutSlowIn.between(m.offset_window, p))
            .collect();
        assert!(travelled[0] >= travelled[1]);
        assert!(travelled[1] >= travelled[2]);
    }
}

#[test]
fn effect_chain_carries_the_exact_remap_constants() {
    let effect = RenderEffect::goo();
    assert_eq!(
        effect.alpha,
        AlphaMatrix {
            scale: 50.0,
            offset: -5000.0,
        }
    );
    assert_eq!(effect.blur.tile_mode, TileMode::Mirror);
    assert_eq!((effect.blur.radius_x, effect.blur.radius_y), (80.0, 80.0));

    // The remap is a hard cutoff at alpha 100 (of 255).
    assert_eq!(effect.alpha.apply(99.0), 0.0);
    assert_eq!(effect.alpha.apply(255.0), 255.0);
    assert_eq!(effect.alpha.threshold(), 100.0);
}

#[test]
fn missing_capability_degrades_to_the_plain_layer() {
    let no_pipeline = Capabilities {
        shader_pipeline: false,
    };
    // Even with effects requested, the screen composes only the plain
    // layer; there is no error path.
    assert_eq!(EffectMode::select(no_pipeline, true), EffectMode::Plain);
}

#[cfg(feature = "render-effects")]
#[test]
fn compiled_pipeline_is_detected() {
    assert!(Capabilities::detect().shader_pipeline);
    assert_eq!(
        EffectMode::select(Capabilities::detect(), true),
        EffectMode::Filtered
    );
}
