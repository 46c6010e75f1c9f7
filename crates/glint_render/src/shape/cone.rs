//! Cone about the y axis.

use glint_math::{Ray, Vec3};

use crate::hit::GeomHit;
use crate::shape::quadric::{QuadricParams, QuadricSurface};

/// A cone opening along the y axis, apex at its center, no base cap.
///
/// The radius/height pair fixes the opening angle; the quadric itself is
/// unbounded, and the nearest positive root is reported as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeY {
    quadric: QuadricSurface,
    pub radius: f32,
    pub height: f32,
}

impl ConeY {
    pub fn new(center: Vec3, radius: f32, height: f32) -> Self {
        Self {
            quadric: QuadricSurface::new(QuadricParams::cone_y(radius, height), center),
            radius,
            height,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<GeomHit> {
        self.quadric.intersect(ray)
    }
}
