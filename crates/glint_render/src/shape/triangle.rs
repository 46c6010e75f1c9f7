//! Triangle primitive with Möller-Trumbore intersection.

use glint_math::{Ray, Vec3, EPSILON};

use crate::hit::GeomHit;

/// A triangle with a precomputed unit face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    normal: Vec3,
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        Self { v0, v1, v2, normal }
    }

    /// Möller-Trumbore: solve for (t, u, v) directly, rejecting rays
    /// parallel to the triangle's plane and hits outside the barycentric
    /// bounds. t must clear EPSILON so a secondary ray cannot re-hit the
    /// triangle it starts on.
    pub fn intersect(&self, ray: &Ray) -> Option<GeomHit> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.dir.cross(edge2);
        let det = edge1.dot(h);
        if det.abs() < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin - self.v0;
        let u = inv_det * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = inv_det * ray.dir.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = inv_det * edge2.dot(q);
        if t <= EPSILON {
            return None;
        }

        Some(GeomHit {
            t,
            point: ray.at(t),
            normal: self.normal,
        })
    }

    /// Barycentric (u, v) of the query point.
    pub fn tex_coords(&self, pt: Vec3) -> (f32, f32) {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        let p = pt - self.v0;

        let d00 = e1.dot(e1);
        let d01 = e1.dot(e2);
        let d11 = e2.dot(e2);
        let d20 = p.dot(e1);
        let d21 = p.dot(e2);

        let denom = d00 * d11 - d01 * d01;
        let u = (d11 * d20 - d01 * d21) / denom;
        let v = (d00 * d21 - d01 * d20) / denom;
        (u, v)
    }
}
