//! Orthonormal coordinate frames.

use crate::Vec3;

/// An origin plus a right-handed orthonormal basis (u, v, w).
///
/// Used for the camera's eye frame (lights positioned relative to the
/// viewer) and for the local 2D frames that planes and disks use to derive
/// texture coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub origin: Vec3,
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
}

impl Frame {
    /// Create a frame from an origin and an already-orthonormal basis.
    pub fn new(origin: Vec3, u: Vec3, v: Vec3, w: Vec3) -> Self {
        Self { origin, u, v, w }
    }

    /// Build an orthonormal basis whose w axis is the given direction.
    ///
    /// The u and v axes are chosen deterministically; callers that care
    /// about their absolute orientation should construct the frame
    /// explicitly instead.
    pub fn from_z_axis(origin: Vec3, w: Vec3) -> Self {
        let w = w.normalize();
        let helper = if w.x.abs() > 0.9 { Vec3::Y } else { Vec3::X };
        let u = helper.cross(w).normalize();
        let v = w.cross(u);
        Self { origin, u, v, w }
    }

    /// Transform frame-local coordinates into world coordinates.
    pub fn to_world(&self, p: Vec3) -> Vec3 {
        self.origin + p.x * self.u + p.y * self.v + p.z * self.w
    }

    /// Transform world coordinates into frame-local coordinates.
    pub fn to_frame(&self, p: Vec3) -> Vec3 {
        let d = p - self.origin;
        Vec3::new(d.dot(self.u), d.dot(self.v), d.dot(self.w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_is_orthonormal() {
        let frame = Frame::from_z_axis(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.3, -0.8, 0.5));

        assert!((frame.u.length() - 1.0).abs() < 1e-5);
        assert!((frame.v.length() - 1.0).abs() < 1e-5);
        assert!((frame.w.length() - 1.0).abs() < 1e-5);
        assert!(frame.u.dot(frame.v).abs() < 1e-5);
        assert!(frame.u.dot(frame.w).abs() < 1e-5);
        assert!(frame.v.dot(frame.w).abs() < 1e-5);
        // Right-handed
        assert!((frame.u.cross(frame.v) - frame.w).length() < 1e-5);
    }

    #[test]
    fn test_round_trip() {
        let frame = Frame::from_z_axis(Vec3::new(-4.0, 0.5, 9.0), Vec3::new(1.0, 1.0, 0.0));
        let p = Vec3::new(2.0, -7.0, 3.5);

        let local = frame.to_frame(p);
        let back = frame.to_world(local);
        assert!((back - p).length() < 1e-4);
    }

    #[test]
    fn test_axis_aligned_frame() {
        let frame = Frame::from_z_axis(Vec3::ZERO, Vec3::Z);
        let local = frame.to_frame(Vec3::new(3.0, 4.0, 5.0));
        // w is +Z, so the local z coordinate equals the world z coordinate
        assert!((local.z - 5.0).abs() < 1e-5);
    }
}
