//! Infinite plane.

use glint_math::{approximately_zero, Frame, Ray, Vec3};

use crate::hit::GeomHit;

/// A plane defined by a point on it and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Plane through three points, normal per counterclockwise winding.
    pub fn from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        let normal = (p2 - p1).cross(p0 - p1).normalize();
        Self { point: p1, normal }
    }

    /// Nearest intersection in front of the ray origin.
    ///
    /// Misses when the ray is parallel to the plane or the solution lies
    /// behind the origin.
    pub fn intersect(&self, ray: &Ray) -> Option<GeomHit> {
        let denom = ray.dir.dot(self.normal);
        if approximately_zero(denom) {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t <= 0.0 {
            return None;
        }

        Some(GeomHit {
            t,
            point: ray.at(t),
            normal: self.normal,
        })
    }

    /// Tiling texture coordinates in the plane's local frame.
    pub fn tex_coords(&self, pt: Vec3) -> (f32, f32) {
        let frame = Frame::from_z_axis(self.point, self.normal);
        let local = frame.to_frame(pt);

        // 0.1 scales the texture down so it repeats across the plane
        (local.x * 0.1 + 0.5, local.y * 0.1 + 0.5)
    }
}
