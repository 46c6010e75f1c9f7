//! Flat circular disk.

use glint_math::{map, Frame, Ray, Vec3};

use crate::hit::GeomHit;
use crate::shape::Plane;

/// A disk: a plane intersection clipped to a radius around the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
}

impl Disk {
    pub fn new(center: Vec3, normal: Vec3, radius: f32) -> Self {
        Self {
            center,
            normal: normal.normalize(),
            radius,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<GeomHit> {
        let plane = Plane::new(self.center, self.normal);
        let hit = plane.intersect(ray)?;

        if self.center.distance(hit.point) > self.radius {
            return None;
        }
        Some(hit)
    }

    /// Texture coordinates in the disk's own frame, valid for any
    /// orientation; v is flipped so image rows read top-down.
    pub fn tex_coords(&self, pt: Vec3) -> (f32, f32) {
        let frame = Frame::from_z_axis(self.center, self.normal);
        let local = frame.to_frame(pt);

        let u = map(local.x, -self.radius, self.radius, 0.0, 1.0);
        let v = map(local.y, -self.radius, self.radius, 0.0, 1.0);
        (u, 1.0 - v)
    }
}
