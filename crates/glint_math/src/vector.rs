//! Reflection and refraction of direction vectors.

use crate::Vec3;

/// Reflect a vector about a normal.
///
/// Returns v - 2*(v.n)*n. The input does not need to be unit length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with the given index ratio.
///
/// `eta_ratio` is n_incident / n_transmitted. `uv` must be unit length.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, eta_ratio: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = eta_ratio * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_law() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let n = Vec3::Y;
        let r = reflect(d, n);

        let expected = d - 2.0 * d.dot(n) * n;
        assert!((r - expected).length() < 1e-6);
        // A 45-degree bounce off the ground plane flips y only
        assert!((r - Vec3::new(d.x, -d.y, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_reflect_preserves_length() {
        let d = Vec3::new(0.3, -0.7, 0.2);
        let r = reflect(d, Vec3::Y);
        assert!((r.length() - d.length()).abs() < 1e-6);
    }

    #[test]
    fn test_refract_matched_indices_passes_straight_through() {
        let d = Vec3::new(0.0, -1.0, 0.0);
        let r = refract(d, Vec3::Y, 1.0);
        assert!((r - d).length() < 1e-6);
    }

    #[test]
    fn test_refract_bends_toward_normal_entering_denser() {
        // Entering glass: the transmitted ray makes a smaller angle with -n
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = refract(d, Vec3::Y, 1.0 / 1.5).normalize();

        let incident_cos = (-d.y).abs();
        let transmitted_cos = (-r.y).abs();
        assert!(transmitted_cos > incident_cos);
    }
}
