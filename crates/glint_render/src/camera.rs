//! Perspective camera for ray generation.

use glint_math::{Frame, Ray, Vec3};
use rand::RngCore;

/// Pinhole camera generating one or more rays per pixel.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,
    /// Vertical field of view in degrees
    vfov: f32,

    // Cached computed values (set by initialize())
    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Create a camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 450,
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            center: Vec3::ZERO,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position and orientation.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        self.center = self.look_from;

        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * (self.image_width as f32 / self.image_height as f32);

        self.w = (self.look_from - self.look_at).normalize();
        self.u = self.vup.cross(self.w).normalize();
        self.v = self.w.cross(self.u);

        let viewport_u = viewport_width * self.u;
        let viewport_v = -viewport_height * self.v;

        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        let viewport_upper_left = self.center - self.w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    /// The deterministic center-of-pixel ray for (x, y).
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let pixel = self.pixel00_loc
            + (x as f32) * self.pixel_delta_u
            + (y as f32) * self.pixel_delta_v;
        Ray::new(self.center, pixel - self.center)
    }

    /// n jittered supersampling rays for (x, y); n <= 1 degrades to the
    /// single center ray.
    pub fn rays_aa(&self, x: u32, y: u32, n: u32, rng: &mut dyn RngCore) -> Vec<Ray> {
        if n <= 1 {
            return vec![self.ray(x, y)];
        }

        (0..n)
            .map(|_| {
                let jitter_x = gen_f32(rng) - 0.5;
                let jitter_y = gen_f32(rng) - 0.5;
                let pixel = self.pixel00_loc
                    + ((x as f32) + jitter_x) * self.pixel_delta_u
                    + ((y as f32) + jitter_y) * self.pixel_delta_v;
                Ray::new(self.center, pixel - self.center)
            })
            .collect()
    }

    /// The eye frame: origin at the camera with its viewing basis. Lights
    /// tied to the camera resolve their positions through this.
    pub fn frame(&self) -> Frame {
        Frame::new(self.center, self.u, self.v, self.w)
    }

    pub fn eye_position(&self) -> Vec3 {
        self.center
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform f32 in [0, 1) from a dyn-compatible rng.
fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * (1.0 / (1 << 24) as f32)
}
