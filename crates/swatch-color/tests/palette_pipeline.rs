//! End-to-end checks over the built-in palette.

use swatch_color::{evaluate, gamut, sdr_white_signal};
use swatch_core::{BitDepth, ColorSpec, Palette};
use swatch_math::Vec3;

#[test]
fn every_builtin_color_is_finite_and_in_range() {
    for (name, spec) in Palette::builtin().iter() {
        let hdr = evaluate(spec);
        assert!(hdr.xyz.is_finite(), "{}", name);
        assert!(hdr.linear.min_element() >= 0.0, "{}", name);
        assert!(hdr.signal.min_element() >= 0.0, "{}", name);
        assert!(hdr.signal.max_element() <= 1.0, "{}", name);
    }
}

#[test]
fn boosted_palette_entries_clear_sdr_white() {
    let palette = Palette::builtin();
    for name in ["brand-400-red", "brand-500-red", "brand-400-blue", "brand-500-blue", "white"] {
        let hdr = evaluate(palette.lookup(name).unwrap());
        assert!(hdr.exceeds_sdr_white(), "{} peak {}", name, hdr.signal.max_element());
    }
}

#[test]
fn expected_10bit_codes() {
    let palette = Palette::builtin();
    let expect = [
        ("brand-400-red", [631, 469, 444]),
        ("brand-500-red", [649, 386, 320]),
        ("brand-600-red", [538, 188, 0]),
        ("brand-400-blue", [482, 553, 610]),
        ("brand-500-blue", [456, 546, 629]),
        ("brand-600-blue", [333, 417, 501]),
        ("white", [694, 694, 694]),
    ];
    for (name, codes) in expect {
        let px = evaluate(palette.lookup(name).unwrap()).pixels(BitDepth::U10);
        assert_eq!(px.to_array(), codes, "{}", name);
    }
}

#[test]
fn higher_depth_is_finer_not_different() {
    let hdr = evaluate(&ColorSpec::white(2.5).unwrap());
    let p8 = hdr.pixels(BitDepth::U8).r() as f64 / 255.0;
    let p12 = hdr.pixels(BitDepth::U12).r() as f64 / 4095.0;
    assert!((p8 - p12).abs() < 1.0 / 255.0);
}

#[test]
fn sdr_white_lands_near_pq_reference() {
    // BT.2408: 203 cd/m2 = 58% PQ
    assert!((sdr_white_signal() - 0.58).abs() < 0.001);
    let hdr = evaluate(&ColorSpec::white(1.0).unwrap());
    assert_eq!(hdr.pixels(BitDepth::U10).to_array(), [594, 594, 594]);
}

#[test]
fn clamp_is_idempotent_on_pipeline_output() {
    for (_, spec) in Palette::builtin().iter() {
        let lin = evaluate(spec).linear;
        assert_eq!(gamut::clamp_negative(lin), lin);
    }
    assert_eq!(gamut::clamp_negative(Vec3::ZERO), Vec3::ZERO);
}
