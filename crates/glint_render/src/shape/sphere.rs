//! Sphere primitive, backed by the quadric intersector.

use glint_math::{map, Ray, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

use crate::hit::GeomHit;
use crate::shape::quadric::{QuadricParams, QuadricSurface};

/// A sphere, represented as a quadric so the shared root-finding and
/// gradient-normal machinery applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    quadric: QuadricSurface,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            quadric: QuadricSurface::new(QuadricParams::sphere(radius), center),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.quadric.center
    }

    pub fn intersect(&self, ray: &Ray) -> Option<GeomHit> {
        self.quadric.intersect(ray)
    }

    /// Spherical texture coordinates: azimuth around y, elevation from the
    /// equator, v flipped so image rows read top-down.
    pub fn tex_coords(&self, pt: Vec3) -> (f32, f32) {
        let delta = (pt - self.quadric.center).normalize();
        let azimuth = delta.z.atan2(delta.x);
        let elevation = delta.y.clamp(-1.0, 1.0).asin();

        let u = map(azimuth, -PI, PI, 0.0, 1.0);
        let v = 1.0 - map(elevation, -FRAC_PI_2, FRAC_PI_2, 0.0, 1.0);
        (u, v)
    }
}
