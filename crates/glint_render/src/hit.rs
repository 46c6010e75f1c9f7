//! Hit records: the contract between geometry and shading.

use std::sync::Arc;

use glint_core::{Color, Material, Texture};
use glint_math::Vec3;

/// Whether a ray is entering or leaving the surface it struck.
///
/// Resolved by comparing the ray direction with the outward geometric
/// normal; drives the refractive-index ratio for dielectric transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaySide {
    Entering,
    Leaving,
}

/// A bare geometric intersection: parameter, point, outward normal.
///
/// `None` from an intersector means the ray missed; when a hit exists its
/// t is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeomHit {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
}

/// An intersection with an opaque, shadeable surface.
///
/// The normal is flipped to face the incident ray; `side` records whether
/// that flip happened. The material is a copy so texture lookups can
/// overwrite its colors per ray.
#[derive(Debug, Clone)]
pub struct OpaqueHit {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub material: Material,
    pub texture: Option<Arc<Texture>>,
    pub u: f32,
    pub v: f32,
    pub side: RaySide,
}

/// An intersection with a translucent volume.
///
/// Carries only a flat transmission color and alpha; these shapes are
/// alpha-composited, never refracted.
#[derive(Debug, Clone, Copy)]
pub struct TranslucentHit {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub color: Color,
    pub alpha: f32,
    pub side: RaySide,
}
