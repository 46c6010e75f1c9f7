//! General quadric surfaces: spheres, ellipsoids, cylinders, cones.
//!
//! A quadric is the zero set of
//! Ax^2 + By^2 + Cz^2 + Dxy + Exz + Fyz + Gx + Hy + Iz + J = 0,
//! evaluated relative to a center offset. Substituting the ray
//! parametrization gives a scalar quadratic in t; the surface normal is the
//! gradient of the implicit form.

use glint_math::{quadratic, Ray, Vec3};

use crate::hit::GeomHit;

/// The ten implicit coefficients of a quadric surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadricParams {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
    pub g: f32,
    pub h: f32,
    pub i: f32,
    pub j: f32,
}

impl QuadricParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, g: f32, h: f32, i: f32, j: f32) -> Self {
        Self { a, b, c, d, e, f, g, h, i, j }
    }

    /// Sphere of the given radius, centered on the origin.
    pub fn sphere(radius: f32) -> Self {
        Self::new(1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -radius * radius)
    }

    /// Ellipsoid with the given semi-axis lengths.
    pub fn ellipsoid(size: Vec3) -> Self {
        let sq = size * size;
        Self::new(1.0 / sq.x, 1.0 / sq.y, 1.0 / sq.z, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0)
    }

    /// Infinite cylinder of the given radius about the x axis.
    pub fn cylinder_x(radius: f32) -> Self {
        let r2 = radius * radius;
        Self::new(0.0, 1.0 / r2, 1.0 / r2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0)
    }

    /// Infinite cylinder of the given radius about the y axis.
    pub fn cylinder_y(radius: f32) -> Self {
        let r2 = radius * radius;
        Self::new(1.0 / r2, 0.0, 1.0 / r2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0)
    }

    /// Infinite cylinder of the given radius about the z axis.
    pub fn cylinder_z(radius: f32) -> Self {
        let r2 = radius * radius;
        Self::new(1.0 / r2, 1.0 / r2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0)
    }

    /// Double cone about the y axis with base radius R at height H.
    pub fn cone_y(radius: f32, height: f32) -> Self {
        let k = (height * height) / (radius * radius);
        Self::new(k, -1.0, k, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }
}

/// A quadric surface positioned at a center offset.
///
/// The doubled A/B/C coefficients are precomputed at construction; both the
/// quadratic setup and the gradient normal reuse them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadricSurface {
    params: QuadricParams,
    pub center: Vec3,
    two_a: f32,
    two_b: f32,
    two_c: f32,
}

impl QuadricSurface {
    pub fn new(params: QuadricParams, center: Vec3) -> Self {
        Self {
            params,
            center,
            two_a: 2.0 * params.a,
            two_b: 2.0 * params.b,
            two_c: 2.0 * params.c,
        }
    }

    /// Ellipsoid with the given center and semi-axis lengths.
    pub fn ellipsoid(center: Vec3, size: Vec3) -> Self {
        Self::new(QuadricParams::ellipsoid(size), center)
    }

    /// The coefficients of Aq*t^2 + Bq*t + Cq = 0 for this ray.
    fn coefficients(&self, ray: &Ray) -> (f32, f32, f32) {
        let ro = ray.origin - self.center;
        let rd = ray.dir;
        let QuadricParams { a, b, c, d, e, f, g, h, i, j } = self.params;

        let aq = a * rd.x * rd.x
            + b * rd.y * rd.y
            + c * rd.z * rd.z
            + d * rd.x * rd.y
            + e * rd.x * rd.z
            + f * rd.y * rd.z;

        let bq = self.two_a * ro.x * rd.x
            + self.two_b * ro.y * rd.y
            + self.two_c * ro.z * rd.z
            + d * (ro.x * rd.y + ro.y * rd.x)
            + e * (ro.x * rd.z + ro.z * rd.x)
            + f * (ro.y * rd.z + ro.z * rd.y)
            + g * rd.x
            + h * rd.y
            + i * rd.z;

        let cq = a * ro.x * ro.x
            + b * ro.y * ro.y
            + c * ro.z * ro.z
            + d * ro.x * ro.y
            + e * ro.x * ro.z
            + f * ro.y * ro.z
            + g * ro.x
            + h * ro.y
            + i * ro.z
            + j;

        (aq, bq, cq)
    }

    /// All strictly-positive-t intersections, nearest first (at most two).
    pub fn intersections<'s>(&'s self, ray: &Ray) -> impl Iterator<Item = GeomHit> + 's {
        let (aq, bq, cq) = self.coefficients(ray);
        let ray = *ray;
        quadratic(aq, bq, cq)
            .into_iter()
            .filter(|&t| t > 0.0)
            .map(move |t| {
                let point = ray.at(t);
                GeomHit {
                    t,
                    point,
                    normal: self.normal_at(point),
                }
            })
    }

    /// The nearest strictly-positive-t intersection.
    pub fn intersect(&self, ray: &Ray) -> Option<GeomHit> {
        self.intersections(ray).next()
    }

    /// Unit surface normal: the gradient of the implicit form at P.
    pub fn normal_at(&self, p: Vec3) -> Vec3 {
        let QuadricParams { d, e, f, g, h, i, .. } = self.params;
        let pt = p - self.center;
        Vec3::new(
            self.two_a * pt.x + d * pt.y + e * pt.z + g,
            self.two_b * pt.y + d * pt.x + f * pt.z + h,
            self.two_c * pt.z + e * pt.x + f * pt.y + i,
        )
        .normalize()
    }
}
