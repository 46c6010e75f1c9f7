//! Simple ray tracer example.
//!
//! Renders a small showcase scene (glass and mirror spheres, a capped
//! cylinder, a cone, a checkered ground plane, a translucent pane) and
//! saves it to PNG.

use std::f32::consts::PI;
use std::sync::Arc;

use anyhow::Context;
use glint_render::{
    render_parallel, Camera, Color, FogKind, FogParams, FrameBuffer, Light, Material, RenderConfig,
    Scene, Shape, Texture, TranslucentShape, Vec3, VisibleShape,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut camera = Camera::new()
        .with_resolution(800, 450)
        .with_position(Vec3::new(0.0, 4.0, 14.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y)
        .with_vfov(55.0);
    camera.initialize();

    let scene = build_scene(camera);

    let config = RenderConfig {
        samples_per_pixel: 4,
        max_depth: 4,
        background: Color::new(0.05, 0.07, 0.12),
        fog: FogParams {
            kind: FogKind::Exponential,
            start: 0.0,
            end: 0.0,
            density: 0.015,
            color: Color::new(0.5, 0.55, 0.6),
        },
        ..RenderConfig::default()
    };

    let mut fb = FrameBuffer::new(800, 450, config.background);

    let start = std::time::Instant::now();
    render_parallel(&mut fb, &scene, &config);
    println!("rendered in {:?}", start.elapsed());

    image::save_buffer(
        "output.png",
        &fb.to_rgba(),
        fb.width,
        fb.height,
        image::ColorType::Rgba8,
    )
    .context("failed to save output.png")?;
    println!("saved to output.png");

    Ok(())
}

fn build_scene(camera: Camera) -> Scene {
    let mut scene = Scene::new(camera);

    // Checkered ground
    let checker = Arc::new(checker_texture(8, Color::new(0.9, 0.9, 0.9), Color::new(0.2, 0.2, 0.25)));
    scene.add_opaque(VisibleShape::textured(
        Shape::plane(Vec3::ZERO, Vec3::Y),
        Material::from_color(Color::new(0.7, 0.7, 0.7)),
        checker,
    ));

    // Glass sphere front and center
    scene.add_opaque(VisibleShape::new(
        Shape::sphere(Vec3::new(0.0, 2.0, 2.0), 2.0),
        Material::from_color(Color::new(0.95, 0.95, 1.0)).dielectric(1.5),
    ));

    // Matte red sphere behind it
    scene.add_opaque(VisibleShape::new(
        Shape::sphere(Vec3::new(-4.5, 1.5, -3.0), 1.5),
        Material::from_color(Color::new(0.8, 0.2, 0.2)),
    ));

    // Capped cylinder and cone flanking the right side
    scene.add_opaque(VisibleShape::new(
        Shape::closed_cylinder_y(Vec3::new(4.5, 1.5, -2.0), 1.2, 3.0),
        Material::from_color(Color::new(0.2, 0.5, 0.8)),
    ));
    scene.add_opaque(VisibleShape::new(
        Shape::cone_y(Vec3::new(7.5, 3.0, -6.0), 1.5, 3.0),
        Material::from_color(Color::new(0.9, 0.7, 0.2)),
    ));

    // Translucent pane between camera and the red sphere
    scene.add_translucent(TranslucentShape::new(
        Shape::cuboid(Vec3::new(-4.0, 2.0, 1.5), 3.0, 3.0, 0.2),
        Color::new(0.3, 0.9, 0.4),
        0.35,
    ));

    // Key light, cool fill, and a spotlight pinned on the glass sphere
    scene.add_light(Light::positional(Vec3::new(10.0, 12.0, 10.0), Color::ONE));
    scene.add_light(Light::directional(
        Vec3::new(-0.4, -1.0, -0.2),
        Color::new(0.25, 0.28, 0.35),
    ));
    scene.add_light(Light::spot(
        Vec3::new(0.0, 10.0, 2.0),
        Vec3::NEG_Y,
        PI / 5.0,
        Color::new(0.9, 0.85, 0.7),
    ));

    scene
}

fn checker_texture(cells: u32, a: Color, b: Color) -> Texture {
    let size = cells * 8;
    let mut pixels = Vec::with_capacity((size * size) as usize);
    for y in 0..size {
        for x in 0..size {
            let cell = (x / 8 + y / 8) % 2;
            pixels.push(if cell == 0 { a } else { b });
        }
    }
    Texture::new(size, size, pixels)
}
