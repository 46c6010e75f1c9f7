//! Per-fragment compositing: fog, alpha blending, and the depth test.
//!
//! All configuration is passed in per frame; nothing in here is global
//! state.

use glint_math::Vec3;

use crate::{Color, FrameBuffer};

/// Fog attenuation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FogKind {
    #[default]
    Off,
    Linear,
    Exponential,
    ExponentialSquared,
}

/// Fog configuration for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FogParams {
    pub kind: FogKind,
    /// Distance where linear fog begins.
    pub start: f32,
    /// Distance where linear fog saturates.
    pub end: f32,
    /// Density for the exponential variants.
    pub density: f32,
    pub color: Color,
}

impl FogParams {
    /// No fog at all.
    pub fn off() -> Self {
        Self {
            kind: FogKind::Off,
            start: 0.0,
            end: 1.0,
            density: 0.0,
            color: Color::ZERO,
        }
    }

    /// The fragment's lit-color weight: 1 means untouched, 0 means all fog.
    pub fn factor(&self, frag_pos: Vec3, eye_pos: Vec3) -> f32 {
        let distance = frag_pos.distance(eye_pos);
        match self.kind {
            FogKind::Off => 1.0,
            FogKind::Linear => ((self.end - distance) / (self.end - self.start)).clamp(0.0, 1.0),
            FogKind::Exponential => (-self.density * distance).exp(),
            FogKind::ExponentialSquared => (-(self.density * distance).powi(2)).exp(),
        }
    }
}

impl Default for FogParams {
    fn default() -> Self {
        Self::off()
    }
}

fn weighted_average(w1: f32, c1: Color, w2: f32, c2: Color) -> Color {
    w1 * c1 + w2 * c2
}

/// Blend a lit color toward the fog color by the fog factor.
pub fn apply_fog(lit: Color, eye_pos: Vec3, frag_pos: Vec3, fog: &FogParams) -> Color {
    let f = fog.factor(frag_pos, eye_pos);
    weighted_average(f, lit, 1.0 - f, fog.color)
}

/// Standard alpha blend: src weighted by alpha over dst weighted by 1-alpha.
pub fn apply_blending(alpha: f32, src: Color, dst: Color) -> Color {
    weighted_average(alpha, src, 1.0 - alpha, dst)
}

/// Buffer-write gates, constructed once per frame.
#[derive(Debug, Clone, Copy)]
pub struct FragmentFlags {
    pub depth_test: bool,
    pub depth_write: bool,
    pub color_write: bool,
}

impl Default for FragmentFlags {
    fn default() -> Self {
        Self {
            depth_test: true,
            depth_write: true,
            color_write: true,
        }
    }
}

/// A shaded sample headed for the frame buffer.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub x: u32,
    pub y: u32,
    /// Eye distance used by the depth test.
    pub depth: f32,
    /// World position used for the fog distance.
    pub world_pos: Vec3,
    pub color: Color,
    pub alpha: f32,
}

/// Composite one fragment into the frame buffer.
///
/// Order is fixed: fog, then alpha blend against the stored color, then the
/// depth-gated writes.
pub fn process_fragment(
    fb: &mut FrameBuffer,
    eye_pos: Vec3,
    fragment: &Fragment,
    fog: &FogParams,
    flags: &FragmentFlags,
) {
    let fogged = apply_fog(fragment.color, eye_pos, fragment.world_pos, fog);
    let blended = apply_blending(fragment.alpha, fogged, fb.color(fragment.x, fragment.y));

    if !flags.depth_test || fragment.depth < fb.depth(fragment.x, fragment.y) {
        if flags.color_write {
            fb.set_color(fragment.x, fragment.y, blended);
        }
        if flags.depth_write {
            fb.set_depth(fragment.x, fragment.y, fragment.depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment_at(depth: f32, color: Color) -> Fragment {
        Fragment {
            x: 0,
            y: 0,
            depth,
            world_pos: Vec3::new(0.0, 0.0, -depth),
            color,
            alpha: 1.0,
        }
    }

    #[test]
    fn test_fog_off_is_identity() {
        let fog = FogParams::off();
        assert_eq!(fog.factor(Vec3::new(0.0, 0.0, -100.0), Vec3::ZERO), 1.0);
    }

    #[test]
    fn test_linear_fog_clamps() {
        let fog = FogParams {
            kind: FogKind::Linear,
            start: 10.0,
            end: 20.0,
            density: 0.0,
            color: Color::ONE,
        };
        // Nearer than start: fully lit
        assert_eq!(fog.factor(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO), 1.0);
        // Farther than end: fully fogged
        assert_eq!(fog.factor(Vec3::new(0.0, 0.0, -30.0), Vec3::ZERO), 0.0);
        // Midway
        let mid = fog.factor(Vec3::new(0.0, 0.0, -15.0), Vec3::ZERO);
        assert!((mid - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_exponential_fog() {
        let fog = FogParams {
            kind: FogKind::Exponential,
            start: 0.0,
            end: 0.0,
            density: 0.1,
            color: Color::ONE,
        };
        let f = fog.factor(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
        assert!((f - (-1.0f32).exp()).abs() < 1e-5);

        let fog2 = FogParams {
            kind: FogKind::ExponentialSquared,
            ..fog
        };
        let f2 = fog2.factor(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
        assert!((f2 - (-1.0f32).exp()).abs() < 1e-5);
    }

    #[test]
    fn test_blending_extremes() {
        let src = Color::new(1.0, 0.0, 0.0);
        let dst = Color::new(0.0, 0.0, 1.0);
        assert_eq!(apply_blending(1.0, src, dst), src);
        assert_eq!(apply_blending(0.0, src, dst), dst);

        let half = apply_blending(0.5, src, dst);
        assert!((half - Color::new(0.5, 0.0, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_depth_test_rejects_farther_fragment() {
        let mut fb = FrameBuffer::new(1, 1, Color::ZERO);
        let fog = FogParams::off();
        let flags = FragmentFlags::default();

        process_fragment(&mut fb, Vec3::ZERO, &fragment_at(5.0, Color::ONE), &fog, &flags);
        assert_eq!(fb.color(0, 0), Color::ONE);
        assert_eq!(fb.depth(0, 0), 5.0);

        // A farther fragment must not overwrite
        let red = Color::new(1.0, 0.0, 0.0);
        process_fragment(&mut fb, Vec3::ZERO, &fragment_at(9.0, red), &fog, &flags);
        assert_eq!(fb.color(0, 0), Color::ONE);
        assert_eq!(fb.depth(0, 0), 5.0);

        // A nearer one replaces both color and depth
        process_fragment(&mut fb, Vec3::ZERO, &fragment_at(2.0, red), &fog, &flags);
        assert_eq!(fb.color(0, 0), red);
        assert_eq!(fb.depth(0, 0), 2.0);
    }

    #[test]
    fn test_write_gates() {
        let mut fb = FrameBuffer::new(1, 1, Color::ZERO);
        let fog = FogParams::off();

        let no_color = FragmentFlags {
            color_write: false,
            ..FragmentFlags::default()
        };
        process_fragment(&mut fb, Vec3::ZERO, &fragment_at(3.0, Color::ONE), &fog, &no_color);
        assert_eq!(fb.color(0, 0), Color::ZERO);
        assert_eq!(fb.depth(0, 0), 3.0);

        let no_depth = FragmentFlags {
            depth_write: false,
            ..FragmentFlags::default()
        };
        process_fragment(&mut fb, Vec3::ZERO, &fragment_at(1.0, Color::ONE), &fog, &no_depth);
        assert_eq!(fb.color(0, 0), Color::ONE);
        assert_eq!(fb.depth(0, 0), 3.0);
    }
}
