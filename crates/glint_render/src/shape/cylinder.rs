//! Finite cylinders about the y axis, open and capped.

use glint_math::{direction_in_radians, map, Ray, Vec2, Vec3};
use std::f32::consts::TAU;

use crate::hit::GeomHit;
use crate::shape::quadric::{QuadricParams, QuadricSurface};
use crate::shape::Disk;

/// An open (uncapped) cylinder about the y axis, clipped to a finite
/// length centered on its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderY {
    quadric: QuadricSurface,
    pub radius: f32,
    pub length: f32,
}

impl CylinderY {
    pub fn new(center: Vec3, radius: f32, length: f32) -> Self {
        Self {
            quadric: QuadricSurface::new(QuadricParams::cylinder_y(radius), center),
            radius,
            length,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.quadric.center
    }

    /// Nearest quadric root whose height lies within the cylinder; when the
    /// near root falls outside the clip band the far root can still win.
    pub fn intersect(&self, ray: &Ray) -> Option<GeomHit> {
        let half = self.length / 2.0;
        let cy = self.quadric.center.y;
        self.quadric
            .intersections(ray)
            .find(|hit| (hit.point.y - cy).abs() < half)
    }

    /// Wraps u around the barrel, runs v down the height.
    pub fn tex_coords(&self, pt: Vec3) -> (f32, f32) {
        let bottom = self.quadric.center.y - self.length / 2.0;
        let top = bottom + self.length;
        let angle = direction_in_radians(
            Vec2::new(self.quadric.center.x, self.quadric.center.z),
            Vec2::new(pt.x, pt.z),
        );

        let u = map(angle, 0.0, TAU, 0.0, 1.0);
        let v = map(pt.y, bottom, top, 1.0, 0.0);
        (u, v)
    }
}

/// A capped cylinder: the open side composed with two disk caps, the
/// globally nearest of the three winning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedCylinderY {
    side: CylinderY,
    bottom: Disk,
    top: Disk,
}

impl ClosedCylinderY {
    pub fn new(center: Vec3, radius: f32, length: f32) -> Self {
        let half = Vec3::new(0.0, length / 2.0, 0.0);
        Self {
            side: CylinderY::new(center, radius, length),
            bottom: Disk::new(center - half, Vec3::NEG_Y, radius),
            top: Disk::new(center + half, Vec3::Y, radius),
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<GeomHit> {
        [
            self.side.intersect(ray),
            self.bottom.intersect(ray),
            self.top.intersect(ray),
        ]
        .into_iter()
        .flatten()
        .min_by(|a, b| a.t.total_cmp(&b.t))
    }

    pub fn tex_coords(&self, pt: Vec3) -> (f32, f32) {
        self.side.tex_coords(pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_hit() {
        let cyl = CylinderY::new(Vec3::ZERO, 1.0, 4.0);
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X);

        let hit = cyl.intersect(&ray).expect("broadside hit");
        assert!((hit.t - 4.0).abs() < 1e-3);
        assert!((hit.normal - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn test_clipped_above_length() {
        let cyl = CylinderY::new(Vec3::ZERO, 1.0, 4.0);
        // Aimed at the infinite quadric but above the finite band
        let ray = Ray::new(Vec3::new(5.0, 3.0, 0.0), Vec3::NEG_X);
        assert!(cyl.intersect(&ray).is_none());
    }

    #[test]
    fn test_far_root_when_near_clipped() {
        // Enters above the band at a slant; the near root is too high but
        // the exit point drops inside the band.
        let cyl = CylinderY::new(Vec3::ZERO, 1.0, 4.0);
        let ray = Ray::new(
            Vec3::new(3.0, 3.0, 0.0),
            Vec3::new(-1.0, -0.4, 0.0).normalize(),
        );

        let hit = cyl.intersect(&ray).expect("far root inside band");
        // The surviving hit is on the far (negative-x) side of the barrel
        assert!(hit.point.x < 0.0);
        assert!(hit.point.y.abs() < 2.0);
    }

    #[test]
    fn test_open_cylinder_sees_through_ends() {
        let cyl = CylinderY::new(Vec3::ZERO, 1.0, 4.0);
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        assert!(cyl.intersect(&ray).is_none());
    }

    #[test]
    fn test_closed_cylinder_cap_hit() {
        let cyl = ClosedCylinderY::new(Vec3::ZERO, 1.0, 4.0);
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);

        let hit = cyl.intersect(&ray).expect("top cap");
        assert!((hit.t - 8.0).abs() < 1e-3);
        assert!((hit.normal - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_closed_cylinder_side_still_nearest() {
        let cyl = ClosedCylinderY::new(Vec3::ZERO, 1.0, 4.0);
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X);

        let hit = cyl.intersect(&ray).expect("side");
        assert!((hit.t - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_tex_coords_height_maps_v() {
        let cyl = CylinderY::new(Vec3::ZERO, 1.0, 4.0);
        let (_, v_bottom) = cyl.tex_coords(Vec3::new(1.0, -2.0, 0.0));
        let (_, v_top) = cyl.tex_coords(Vec3::new(1.0, 2.0, 0.0));
        assert!((v_bottom - 1.0).abs() < 1e-5);
        assert!(v_top.abs() < 1e-5);
    }
}
