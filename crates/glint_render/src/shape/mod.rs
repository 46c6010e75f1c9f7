//! Implicit shape variants and their dispatch.
//!
//! Shapes are a closed enum rather than trait objects: every variant owns
//! just its own parameters, and the scene lists stay flat values.

mod cone;
mod cuboid;
mod cylinder;
mod disk;
mod plane;
mod quadric;
mod sphere;
mod triangle;

pub use cone::ConeY;
pub use cuboid::Cuboid;
pub use cylinder::{ClosedCylinderY, CylinderY};
pub use disk::Disk;
pub use plane::Plane;
pub use quadric::{QuadricParams, QuadricSurface};
pub use sphere::Sphere;
pub use triangle::Triangle;

use glint_math::{Ray, Vec3};

use crate::hit::GeomHit;

/// Every geometry the tracer can intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Disk(Disk),
    Sphere(Sphere),
    /// A free-form quadric (ellipsoids, off-axis cylinders, ...).
    Quadric(QuadricSurface),
    Cylinder(CylinderY),
    ClosedCylinder(ClosedCylinderY),
    Cone(ConeY),
    Triangle(Triangle),
    Cuboid(Cuboid),
}

impl Shape {
    pub fn plane(point: Vec3, normal: Vec3) -> Self {
        Self::Plane(Plane::new(point, normal))
    }

    pub fn disk(center: Vec3, normal: Vec3, radius: f32) -> Self {
        Self::Disk(Disk::new(center, normal, radius))
    }

    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::Sphere(Sphere::new(center, radius))
    }

    pub fn ellipsoid(center: Vec3, size: Vec3) -> Self {
        Self::Quadric(QuadricSurface::ellipsoid(center, size))
    }

    pub fn cylinder_y(center: Vec3, radius: f32, length: f32) -> Self {
        Self::Cylinder(CylinderY::new(center, radius, length))
    }

    pub fn closed_cylinder_y(center: Vec3, radius: f32, length: f32) -> Self {
        Self::ClosedCylinder(ClosedCylinderY::new(center, radius, length))
    }

    pub fn cone_y(center: Vec3, radius: f32, height: f32) -> Self {
        Self::Cone(ConeY::new(center, radius, height))
    }

    pub fn triangle(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self::Triangle(Triangle::new(v0, v1, v2))
    }

    pub fn cuboid(center: Vec3, width: f32, height: f32, depth: f32) -> Self {
        Self::Cuboid(Cuboid::new(center, width, height, depth))
    }

    /// Nearest strictly-positive-t intersection, or `None` on a miss.
    pub fn intersect(&self, ray: &Ray) -> Option<GeomHit> {
        match self {
            Shape::Plane(plane) => plane.intersect(ray),
            Shape::Disk(disk) => disk.intersect(ray),
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Quadric(quadric) => quadric.intersect(ray),
            Shape::Cylinder(cylinder) => cylinder.intersect(ray),
            Shape::ClosedCylinder(cylinder) => cylinder.intersect(ray),
            Shape::Cone(cone) => cone.intersect(ray),
            Shape::Triangle(triangle) => triangle.intersect(ray),
            Shape::Cuboid(cuboid) => cuboid.intersect(ray),
        }
    }

    /// Surface (u, v) for a point on the shape; (0, 0) when the variant
    /// defines no texturing.
    pub fn tex_coords(&self, pt: Vec3) -> (f32, f32) {
        match self {
            Shape::Plane(plane) => plane.tex_coords(pt),
            Shape::Disk(disk) => disk.tex_coords(pt),
            Shape::Sphere(sphere) => sphere.tex_coords(pt),
            Shape::Cylinder(cylinder) => cylinder.tex_coords(pt),
            Shape::ClosedCylinder(cylinder) => cylinder.tex_coords(pt),
            Shape::Triangle(triangle) => triangle.tex_coords(pt),
            Shape::Cuboid(cuboid) => cuboid.tex_coords(pt),
            Shape::Quadric(_) | Shape::Cone(_) => (0.0, 0.0),
        }
    }
}
