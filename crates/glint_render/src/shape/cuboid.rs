//! Axis-aligned box, modeled as six bounded faces.

use glint_math::{map, Ray, Vec3, EPSILON};

use crate::hit::GeomHit;

/// One bounded rectangular face: plane data plus an in-plane frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Face {
    normal: Vec3,
    center: Vec3,
    u_axis: Vec3,
    v_axis: Vec3,
    half_u: f32,
    half_v: f32,
}

/// An axis-aligned box centered at a point.
///
/// Intersection iterates the six faces, keeping the nearest candidate that
/// lands inside its face's half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    faces: [Face; 6],
}

impl Cuboid {
    pub fn new(center: Vec3, width: f32, height: f32, depth: f32) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let hd = depth / 2.0;

        let face = |normal: Vec3, offset: Vec3, u_axis: Vec3, v_axis: Vec3, half_u, half_v| Face {
            normal,
            center: center + offset,
            u_axis,
            v_axis,
            half_u,
            half_v,
        };

        Self {
            faces: [
                // Front (+z)
                face(Vec3::Z, Vec3::new(0.0, 0.0, hd), Vec3::X, Vec3::Y, hw, hh),
                // Back (-z)
                face(Vec3::NEG_Z, Vec3::new(0.0, 0.0, -hd), Vec3::NEG_X, Vec3::Y, hw, hh),
                // Right (+x)
                face(Vec3::X, Vec3::new(hw, 0.0, 0.0), Vec3::NEG_Z, Vec3::Y, hd, hh),
                // Left (-x)
                face(Vec3::NEG_X, Vec3::new(-hw, 0.0, 0.0), Vec3::Z, Vec3::Y, hd, hh),
                // Top (+y)
                face(Vec3::Y, Vec3::new(0.0, hh, 0.0), Vec3::X, Vec3::NEG_Z, hw, hd),
                // Bottom (-y)
                face(Vec3::NEG_Y, Vec3::new(0.0, -hh, 0.0), Vec3::X, Vec3::Z, hw, hd),
            ],
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<GeomHit> {
        let mut best: Option<GeomHit> = None;

        for face in &self.faces {
            let denom = ray.dir.dot(face.normal);
            if denom.abs() < EPSILON {
                continue;
            }

            let t = (face.center - ray.origin).dot(face.normal) / denom;
            if t <= 0.0 || best.as_ref().is_some_and(|b| t >= b.t) {
                continue;
            }

            let pt = ray.at(t);
            let local = pt - face.center;
            let u = local.dot(face.u_axis);
            let v = local.dot(face.v_axis);

            if u.abs() <= face.half_u && v.abs() <= face.half_v {
                best = Some(GeomHit {
                    t,
                    point: pt,
                    normal: face.normal,
                });
            }
        }

        best
    }

    /// Resolve the face the point lies on (its center-to-point vector is
    /// perpendicular to the face normal), then map the local coordinates
    /// into [0, 1] with v flipped. Falls back to (0, 0) off-surface.
    pub fn tex_coords(&self, pt: Vec3) -> (f32, f32) {
        for face in &self.faces {
            let to_pt = pt - face.center;
            if to_pt.length() < EPSILON {
                return (0.5, 0.5);
            }
            if face.normal.dot(to_pt.normalize()).abs() > 0.01 {
                continue;
            }

            let local_u = to_pt.dot(face.u_axis);
            let local_v = to_pt.dot(face.v_axis);

            let u = map(local_u, -face.half_u, face.half_u, 0.0, 1.0);
            let v = map(local_v, -face.half_v, face.half_v, 0.0, 1.0);
            return (u, 1.0 - v);
        }

        (0.0, 0.0)
    }
}
