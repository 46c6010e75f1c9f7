//! Bucket-based tile rendering.
//!
//! Divides the image into tiles that rayon renders independently; each
//! bucket produces fragments that the caller's thread composites, so the
//! frame buffer is still written exactly once per pixel per pass.

use glint_core::{process_fragment, Fragment, FrameBuffer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::scene::Scene;
use crate::tracer::{render_pixel, RenderConfig};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets covering the image, sorted center-out so the most
/// interesting region of a progressive render finishes first.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_center_out(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

fn sort_center_out(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    buckets.sort_by(|a, b| {
        let a_dx = a.x as f32 + a.width as f32 / 2.0 - center_x;
        let a_dy = a.y as f32 + a.height as f32 / 2.0 - center_y;
        let b_dx = b.x as f32 + b.width as f32 / 2.0 - center_x;
        let b_dy = b.y as f32 + b.height as f32 / 2.0 - center_y;

        let a_dist = a_dx * a_dx + a_dy * a_dy;
        let b_dist = b_dx * b_dx + b_dy * b_dy;
        a_dist.total_cmp(&b_dist)
    });
}

/// Render one bucket to a fragment list, row-major within the bucket.
///
/// The rng is seeded from the bucket index so a parallel render is
/// deterministic regardless of scheduling.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, config: &RenderConfig) -> Vec<Fragment> {
    let mut rng = StdRng::seed_from_u64(bucket.index as u64);
    let mut fragments = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let x = bucket.x + local_x;
            let y = bucket.y + local_y;
            fragments.push(render_pixel(x, y, scene, config, &mut rng));
        }
    }

    fragments
}

/// Render the whole frame with rayon, one task per bucket.
pub fn render_parallel(fb: &mut FrameBuffer, scene: &Scene, config: &RenderConfig) {
    debug_assert_eq!(fb.width, scene.camera.image_width);
    debug_assert_eq!(fb.height, scene.camera.image_height);

    let buckets = generate_buckets(fb.width, fb.height, DEFAULT_BUCKET_SIZE);
    log::info!(
        "rendering {}x{} in {} buckets at {} spp",
        fb.width,
        fb.height,
        buckets.len(),
        config.samples_per_pixel
    );

    let results: Vec<Vec<Fragment>> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, config))
        .collect();

    let eye = scene.camera.eye_position();
    for fragments in &results {
        for fragment in fragments {
            process_fragment(fb, eye, fragment, &config.fog, &config.flags);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::light::Light;
    use crate::object::VisibleShape;
    use crate::shape::Shape;
    use glint_core::{Color, Material};
    use glint_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 100, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid with partial buckets

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 100);
    }

    #[test]
    fn test_center_out_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9); // 3x3 grid

        let first = &buckets[0];
        assert_eq!((first.x, first.y), (64, 64));
    }

    fn tiny_scene() -> (Scene, RenderConfig) {
        let mut camera = Camera::new()
            .with_resolution(16, 16)
            .with_position(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y)
            .with_vfov(60.0);
        camera.initialize();

        let mut scene = Scene::new(camera);
        scene.add_opaque(VisibleShape::new(
            Shape::sphere(Vec3::ZERO, 2.0),
            Material::from_color(Color::new(0.8, 0.3, 0.3)),
        ));
        scene.add_light(Light::positional(Vec3::new(5.0, 5.0, 10.0), Color::ONE));

        (scene, RenderConfig::default())
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (scene, config) = tiny_scene();

        let mut sequential = FrameBuffer::new(16, 16, Color::ZERO);
        let mut rng = StdRng::seed_from_u64(0);
        crate::tracer::render(&mut sequential, &scene, &config, &mut rng);

        let mut parallel = FrameBuffer::new(16, 16, Color::ZERO);
        render_parallel(&mut parallel, &scene, &config);

        // 1 spp is jitter-free, so both paths are fully deterministic
        for y in 0..16 {
            for x in 0..16 {
                let diff = (sequential.color(x, y) - parallel.color(x, y)).length();
                assert!(diff < 1e-6, "pixel ({x},{y}) diverged by {diff}");
            }
        }
    }
}
