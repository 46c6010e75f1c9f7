//! Recursive ray tracing core.
//!
//! Per ray: nearest opaque and translucent hits, Phong shading over every
//! light with per-light shadow tests, then the recursion step — Fresnel-
//! weighted reflection/refraction for dielectrics, attenuated reflection
//! plus straight-through transparency for everything else, and alpha
//! compositing for translucent volumes.

use glint_core::{
    apply_blending, process_fragment, Color, FogParams, Fragment, FragmentFlags, FrameBuffer,
};
use glint_math::{reflect, refract, Ray, Vec3, EPSILON};
use rand::RngCore;

use crate::hit::{OpaqueHit, RaySide};
use crate::object::{closest_opaque_hit, closest_translucent_hit};
use crate::scene::Scene;

/// Per-frame render configuration, constructed once before a pass.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Supersampling rays per pixel; 1 disables jitter entirely.
    pub samples_per_pixel: u32,
    /// Maximum recursion depth for reflection/refraction.
    pub max_depth: u32,
    /// Color returned by rays that hit nothing.
    pub background: Color,
    pub fog: FogParams,
    pub flags: FragmentFlags,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 1,
            max_depth: 3,
            background: Color::ZERO,
            fog: FogParams::off(),
            flags: FragmentFlags::default(),
        }
    }
}

/// Fraction of light reflected at a dielectric boundary.
///
/// `incident` is the (unit) incoming direction, `normal` faces it, and
/// eta_i/eta_t are the refraction indices of the media being left and
/// entered. Returns exactly 1.0 on total internal reflection; otherwise the
/// mean of the squared S- and P-polarization coefficients. The transmitted
/// fraction is 1 - kr.
pub fn fresnel(incident: Vec3, normal: Vec3, eta_i: f32, eta_t: f32) -> f32 {
    let cos_i = incident.dot(normal).clamp(-1.0, 1.0);

    // Snell's law gives the sine of the transmitted angle
    let sin_t = eta_i / eta_t * (1.0 - cos_i * cos_i).max(0.0).sqrt();
    if sin_t >= 1.0 {
        return 1.0;
    }

    let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();
    let cos_i = cos_i.abs();
    let rs = (eta_t * cos_i - eta_i * cos_t) / (eta_i * cos_t + eta_t * cos_i);
    let rp = (eta_i * cos_i - eta_t * cos_t) / (eta_t * cos_t + eta_i * cos_i);
    (rs * rs + rp * rp) / 2.0
}

/// Trace one ray to a color.
///
/// `level` counts remaining recursion steps; at 0 only direct illumination
/// is returned. Secondary rays spawn from points offset by EPSILON so they
/// cannot immediately re-hit the surface they left.
pub fn trace_ray(ray: &Ray, scene: &Scene, level: u32, config: &RenderConfig) -> Color {
    let opaque_hit = closest_opaque_hit(ray, &scene.opaque);
    let translucent_hit = closest_translucent_hit(ray, &scene.translucent);

    match (opaque_hit, translucent_hit) {
        // Opaque hit that nothing translucent sits in front of
        (Some(hit), trans) if trans.map_or(true, |t| hit.t < t.t) => {
            shade_opaque(ray, hit, scene, level, config)
        }
        (_, Some(hit)) => {
            // Continue past the surface for the background, then composite
            // the volume's flat color over it
            let continued = Ray::new(hit.point + EPSILON * ray.dir, ray.dir);
            let background = trace_ray(&continued, scene, level.saturating_sub(1), config);
            let blended = apply_blending(hit.alpha, hit.color, background);
            blended.clamp(Color::ZERO, Color::ONE)
        }
        _ => config.background,
    }
}

/// Direct illumination plus the recursion step for an opaque hit.
fn shade_opaque(
    ray: &Ray,
    mut hit: OpaqueHit,
    scene: &Scene,
    level: u32,
    config: &RenderConfig,
) -> Color {
    // Texture lookup overrides the material copy's colors
    if let Some(texture) = &hit.texture {
        let texel = texture.sample_uv(hit.u, hit.v);
        hit.material.ambient = 0.15 * texel;
        hit.material.diffuse = texel;
    }

    let eye_frame = scene.camera.frame();
    let mut total = Color::ZERO;
    for light in &scene.lights {
        let in_shadow = light.point_in_shadow(hit.point, hit.normal, &scene.opaque, &eye_frame);
        total += light.illuminate(hit.point, hit.normal, &hit.material, &eye_frame, in_shadow);
    }

    if level > 0 {
        if hit.material.is_dielectric {
            let (eta_i, eta_t) = match hit.side {
                RaySide::Entering => (1.0, hit.material.refraction_index),
                RaySide::Leaving => (hit.material.refraction_index, 1.0),
            };

            let incident = ray.dir.normalize();
            let kr = fresnel(incident, hit.normal, eta_i, eta_t);

            let reflection = reflect(incident, hit.normal).normalize();
            let reflect_ray = Ray::new(hit.point + EPSILON * hit.normal, reflection);
            total += kr * trace_ray(&reflect_ray, scene, level - 1, config);

            // No transmitted ray under total internal reflection
            if kr < 1.0 {
                let refraction = refract(incident, hit.normal, eta_i / eta_t);
                let refract_ray = Ray::new(hit.point - EPSILON * hit.normal, refraction);
                total += (1.0 - kr) * trace_ray(&refract_ray, scene, level - 1, config);
            }
        } else {
            let reflection = reflect(ray.dir, hit.normal).normalize();
            let reflect_ray = Ray::new(hit.point + EPSILON * hit.normal, reflection);
            let weight = 1.0 / (2.0 * config.max_depth as f32);
            total += weight * trace_ray(&reflect_ray, scene, level - 1, config);

            if hit.material.alpha < 1.0 {
                // Straight-through ray; keeps the current recursion level
                // rather than decrementing it
                let through_ray = Ray::new(hit.point - EPSILON * hit.normal, ray.dir);
                let through = trace_ray(&through_ray, scene, level, config);
                total = (1.0 - hit.material.alpha) * total + hit.material.alpha * through;
            }
        }
    }

    total.clamp(Color::ZERO, Color::ONE)
}

/// Shade one pixel into a fragment ready for compositing.
///
/// The color averages the supersampling rays; depth and fog position come
/// from the deterministic center ray's primary hit. A miss carries
/// `f32::MAX` depth (so it still passes the depth test against a cleared
/// buffer) and sits at the eye so fog leaves the background alone.
pub fn render_pixel(
    x: u32,
    y: u32,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Fragment {
    let color = if config.samples_per_pixel > 1 {
        let rays = scene.camera.rays_aa(x, y, config.samples_per_pixel, rng);
        let sum: Color = rays
            .iter()
            .map(|ray| trace_ray(ray, scene, config.max_depth, config))
            .sum();
        sum / rays.len() as f32
    } else {
        trace_ray(&scene.camera.ray(x, y), scene, config.max_depth, config)
    };

    let center = scene.camera.ray(x, y);
    let (depth, world_pos) = match primary_hit(&center, scene) {
        Some(hit) => hit,
        None => (f32::MAX, scene.camera.eye_position()),
    };

    Fragment {
        x,
        y,
        depth,
        world_pos,
        color,
        alpha: 1.0,
    }
}

/// Distance and world point of the nearest hit of either kind, for the
/// depth buffer and fog.
fn primary_hit(ray: &Ray, scene: &Scene) -> Option<(f32, Vec3)> {
    let opaque = closest_opaque_hit(ray, &scene.opaque).map(|h| (h.t, h.point));
    let translucent = closest_translucent_hit(ray, &scene.translucent).map(|h| (h.t, h.point));

    match (opaque, translucent) {
        (Some(o), Some(t)) => Some(if o.0 < t.0 { o } else { t }),
        (hit, None) | (None, hit) => hit,
    }
}

/// Render the whole frame sequentially.
///
/// Every pixel is shaded independently and composited exactly once through
/// the fragment pipeline.
pub fn render(fb: &mut FrameBuffer, scene: &Scene, config: &RenderConfig, rng: &mut dyn RngCore) {
    debug_assert_eq!(fb.width, scene.camera.image_width);
    debug_assert_eq!(fb.height, scene.camera.image_height);

    log::info!(
        "rendering {}x{} at {} spp, depth {}",
        fb.width,
        fb.height,
        config.samples_per_pixel,
        config.max_depth
    );

    let eye = scene.camera.eye_position();
    for y in 0..fb.height {
        for x in 0..fb.width {
            let fragment = render_pixel(x, y, scene, config, rng);
            process_fragment(fb, eye, &fragment, &config.fog, &config.flags);
        }
    }
}
