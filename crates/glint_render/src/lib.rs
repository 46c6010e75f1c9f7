//! Recursive Whitted-style ray tracing.
//!
//! Per pixel: generate camera rays, find the nearest opaque and translucent
//! intersections, shade the opaque hit with every light (each doing its own
//! shadow test), recurse for reflection/refraction, then composite through
//! the fragment pipeline (fog, blending, depth test) into the frame buffer.

mod bucket;
mod camera;
mod hit;
mod light;
mod object;
mod scene;
pub mod shape;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hit::{GeomHit, OpaqueHit, RaySide, TranslucentHit};
pub use light::{
    ambient_color, diffuse_color, specular_color, Attenuation, DirectionalLight, Light,
    PositionalLight, SpotLight,
};
pub use object::{closest_opaque_hit, closest_translucent_hit, TranslucentShape, VisibleShape};
pub use scene::Scene;
pub use shape::Shape;
pub use tracer::{fresnel, render, render_pixel, trace_ray, RenderConfig};

/// Re-export the shared core and math types callers need to drive a render.
pub use glint_core::{
    Color, FogKind, FogParams, FragmentFlags, FrameBuffer, Material, Texture,
};
pub use glint_math::{Frame, Ray, Vec3};
