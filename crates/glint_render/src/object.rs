//! Shapes paired with appearance, and the closest-hit reductions the
//! tracer and the shadow tests run against the scene lists.

use std::sync::Arc;

use glint_core::{Color, Material, Texture};
use glint_math::{Ray, Vec3};

use crate::hit::{OpaqueHit, RaySide, TranslucentHit};
use crate::shape::Shape;

/// Flip the outward normal to face the incident ray and record which side
/// the ray is on. Rays are assumed to originate outside closed volumes.
fn orient(ray: &Ray, outward: Vec3) -> (Vec3, RaySide) {
    if ray.dir.dot(outward) > 0.0 {
        (-outward, RaySide::Leaving)
    } else {
        (outward, RaySide::Entering)
    }
}

/// An opaque, shadeable scene object: geometry plus material and an
/// optional texture.
pub struct VisibleShape {
    pub shape: Shape,
    pub material: Material,
    pub texture: Option<Arc<Texture>>,
}

impl VisibleShape {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self {
            shape,
            material,
            texture: None,
        }
    }

    pub fn textured(shape: Shape, material: Material, texture: Arc<Texture>) -> Self {
        Self {
            shape,
            material,
            texture: Some(texture),
        }
    }

    /// Nearest intersection dressed with this object's appearance.
    ///
    /// Surface coordinates are only computed when a texture will consume
    /// them.
    pub fn closest_intersection(&self, ray: &Ray) -> Option<OpaqueHit> {
        let geom = self.shape.intersect(ray)?;
        let (normal, side) = orient(ray, geom.normal);
        let (u, v) = if self.texture.is_some() {
            self.shape.tex_coords(geom.point)
        } else {
            (0.0, 0.0)
        };

        Some(OpaqueHit {
            t: geom.t,
            point: geom.point,
            normal,
            material: self.material,
            texture: self.texture.clone(),
            u,
            v,
            side,
        })
    }
}

/// A translucent volume: geometry plus a flat color and alpha.
pub struct TranslucentShape {
    pub shape: Shape,
    pub color: Color,
    pub alpha: f32,
}

impl TranslucentShape {
    pub fn new(shape: Shape, color: Color, alpha: f32) -> Self {
        Self { shape, color, alpha }
    }

    pub fn closest_intersection(&self, ray: &Ray) -> Option<TranslucentHit> {
        let geom = self.shape.intersect(ray)?;
        let (normal, side) = orient(ray, geom.normal);

        Some(TranslucentHit {
            t: geom.t,
            point: geom.point,
            normal,
            color: self.color,
            alpha: self.alpha,
            side,
        })
    }
}

/// The nearest opaque hit across a scene list.
pub fn closest_opaque_hit(ray: &Ray, objects: &[VisibleShape]) -> Option<OpaqueHit> {
    objects
        .iter()
        .filter_map(|obj| obj.closest_intersection(ray))
        .min_by(|a, b| a.t.total_cmp(&b.t))
}

/// The nearest translucent hit across a scene list.
pub fn closest_translucent_hit(ray: &Ray, objects: &[TranslucentShape]) -> Option<TranslucentHit> {
    objects
        .iter()
        .filter_map(|obj| obj.closest_intersection(ray))
        .min_by(|a, b| a.t.total_cmp(&b.t))
}
