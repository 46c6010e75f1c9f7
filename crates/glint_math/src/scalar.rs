//! Scalar helpers shared across the tracer.
//!
//! `EPSILON` is the single tolerance used everywhere: near-zero denominator
//! and discriminant checks, and the offset that moves secondary-ray origins
//! off the surface they spawned from.

use crate::Vec2;

/// Global geometric tolerance.
pub const EPSILON: f32 = 1e-3;

/// True if a and b differ by less than `EPSILON`.
pub fn approximately_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// True if a is within `EPSILON` of zero.
pub fn approximately_zero(a: f32) -> bool {
    approximately_equal(a, 0.0)
}

/// Linearly map x from [from_lo, from_hi] to [to_lo, to_hi].
pub fn map(x: f32, from_lo: f32, from_hi: f32, to_lo: f32, to_hi: f32) -> f32 {
    (x - from_lo) / (from_hi - from_lo) * (to_hi - to_lo) + to_lo
}

/// Angle of the vector from `reference` to `target`, normalized into [0, 2pi).
pub fn direction_in_radians(reference: Vec2, target: Vec2) -> f32 {
    let delta = target - reference;
    let angle = delta.y.atan2(delta.x);
    if angle < 0.0 {
        angle + std::f32::consts::TAU
    } else {
        angle
    }
}

/// The real roots of a quadratic equation, in ascending order.
///
/// At most two roots; `as_slice` yields exactly the ones that exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roots {
    vals: [f32; 2],
    count: usize,
}

impl Roots {
    const NONE: Roots = Roots {
        vals: [0.0; 2],
        count: 0,
    };

    fn one(r: f32) -> Self {
        Self {
            vals: [r, 0.0],
            count: 1,
        }
    }

    fn two(lo: f32, hi: f32) -> Self {
        Self {
            vals: [lo, hi],
            count: 2,
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.vals[..self.count]
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl IntoIterator for Roots {
    type Item = f32;
    type IntoIter = std::iter::Take<std::array::IntoIter<f32, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vals.into_iter().take(self.count)
    }
}

/// Solve A*t^2 + B*t + C = 0 for real t.
///
/// Degenerate cases follow the conventions the quadric intersectors rely on:
/// A == 0 degrades to the linear solution (no roots if B is also near zero),
/// and a near-zero discriminant counts as a single repeated root.
pub fn quadratic(a: f32, b: f32, c: f32) -> Roots {
    if a == 0.0 {
        if approximately_zero(b) {
            return Roots::NONE;
        }
        return Roots::one(-c / b);
    }

    let discriminant = b * b - 4.0 * a * c;

    if approximately_zero(discriminant) {
        Roots::one(-b / (2.0 * a))
    } else if discriminant > 0.0 {
        let root1 = (-b + discriminant.sqrt()) / (2.0 * a);
        let root2 = (-b - discriminant.sqrt()) / (2.0 * a);
        Roots::two(root1.min(root2), root1.max(root2))
    } else {
        Roots::NONE
    }
}
