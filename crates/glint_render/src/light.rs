//! Light sources and the Phong shading model.
//!
//! Each light variant computes its own contribution at a shaded point and
//! runs its own shadow test against the opaque object list. Light positions
//! may be expressed in the viewer's frame; `actual_position` resolves them
//! to world space before any vector math.

use glint_core::{Color, Material};
use glint_math::{reflect, Frame, Ray, Vec3, EPSILON};

use crate::object::{closest_opaque_hit, VisibleShape};

/// Ambient term: the material's ambient reflectance modulated by the light.
pub fn ambient_color(mat_ambient: Color, light_color: Color) -> Color {
    mat_ambient * light_color
}

/// Diffuse term: Lambertian falloff on the light vector.
pub fn diffuse_color(mat_diffuse: Color, light_color: Color, l: Vec3, n: Vec3) -> Color {
    l.dot(n).max(0.0) * mat_diffuse * light_color
}

/// Specular term: Phong highlight on the reflected light vector.
pub fn specular_color(
    mat_specular: Color,
    light_color: Color,
    shininess: f32,
    r: Vec3,
    v: Vec3,
) -> Color {
    light_color * mat_specular * r.dot(v).max(0.0).powf(shininess)
}

/// Distance attenuation parameters: 1 / (c + l*d + q*d^2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

/// Full Phong sum for one light at one point: ambient plus attenuated
/// diffuse and specular, clamped component-wise.
fn phong_total(
    material: &Material,
    light_color: Color,
    v: Vec3,
    n: Vec3,
    light_pos: Vec3,
    point: Vec3,
    attenuation_on: bool,
    at: &Attenuation,
) -> Color {
    let l = (light_pos - point).normalize();
    let r = reflect(-l, n);
    let distance = light_pos.distance(point);

    let factor = if attenuation_on { at.factor(distance) } else { 1.0 };

    let ambient = ambient_color(material.ambient, light_color);
    let diffuse = diffuse_color(material.diffuse, light_color, l, n);
    let specular = specular_color(material.specular, light_color, material.shininess, r, v);

    (ambient + factor * (diffuse + specular)).min(Color::ONE)
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionalLight {
    pub pos: Vec3,
    pub color: Color,
    pub is_on: bool,
    pub attenuation_on: bool,
    pub attenuation: Attenuation,
    /// When false, `pos` is expressed in the viewer's frame and is
    /// transformed into world space per shading call.
    pub tied_to_world: bool,
}

impl PositionalLight {
    pub fn new(pos: Vec3, color: Color) -> Self {
        Self {
            pos,
            color,
            is_on: true,
            attenuation_on: false,
            attenuation: Attenuation::default(),
            tied_to_world: true,
        }
    }

    /// World-space position, resolving the camera-frame tie if set.
    pub fn actual_position(&self, eye_frame: &Frame) -> Vec3 {
        if self.tied_to_world {
            self.pos
        } else {
            eye_frame.to_world(self.pos)
        }
    }

    fn illuminate(
        &self,
        point: Vec3,
        normal: Vec3,
        material: &Material,
        eye_frame: &Frame,
        in_shadow: bool,
    ) -> Color {
        if !self.is_on {
            return Color::ZERO;
        }
        if in_shadow {
            return ambient_color(material.ambient, self.color);
        }

        let v = (eye_frame.origin - point).normalize();
        phong_total(
            material,
            self.color,
            v,
            normal,
            self.actual_position(eye_frame),
            point,
            self.attenuation_on,
            &self.attenuation,
        )
    }

    fn shadow_feeler(&self, point: Vec3, normal: Vec3, eye_frame: &Frame) -> Ray {
        let origin = point + EPSILON * normal;
        let dir = (self.actual_position(eye_frame) - point).normalize();
        Ray::new(origin, dir)
    }

    fn in_shadow(
        &self,
        point: Vec3,
        normal: Vec3,
        objects: &[VisibleShape],
        eye_frame: &Frame,
    ) -> bool {
        let feeler = self.shadow_feeler(point, normal, eye_frame);
        match closest_opaque_hit(&feeler, objects) {
            Some(hit) => hit.t < self.actual_position(eye_frame).distance(point),
            None => false,
        }
    }
}

/// A point light restricted to a cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub base: PositionalLight,
    pub dir: Vec3,
    /// Full opening angle in radians; the cone half-angle is fov / 2.
    pub fov: f32,
}

impl SpotLight {
    pub fn new(pos: Vec3, dir: Vec3, fov: f32, color: Color) -> Self {
        Self {
            base: PositionalLight::new(pos, color),
            dir: dir.normalize(),
            fov,
        }
    }

    pub fn set_dir(&mut self, dir: Vec3) {
        self.dir = dir.normalize();
    }

    /// Hard cone membership: the angle between the spot axis and the
    /// direction to the point must be under half the field of view.
    pub fn is_in_cone(spot_pos: Vec3, spot_dir: Vec3, fov: f32, point: Vec3) -> bool {
        let cutoff_cos = (fov / 2.0).cos();
        let to_point = (point - spot_pos).normalize();
        to_point.dot(spot_dir) > cutoff_cos
    }

    fn illuminate(
        &self,
        point: Vec3,
        normal: Vec3,
        material: &Material,
        eye_frame: &Frame,
        in_shadow: bool,
    ) -> Color {
        let pos = self.base.actual_position(eye_frame);
        if Self::is_in_cone(pos, self.dir, self.fov, point) {
            self.base.illuminate(point, normal, material, eye_frame, in_shadow)
        } else {
            Color::ZERO
        }
    }
}

/// A light infinitely far away: direction only, parallel rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub dir: Vec3,
    pub color: Color,
    pub is_on: bool,
}

impl DirectionalLight {
    pub fn new(dir: Vec3, color: Color) -> Self {
        Self {
            dir: dir.normalize(),
            color,
            is_on: true,
        }
    }

    fn illuminate(
        &self,
        point: Vec3,
        normal: Vec3,
        material: &Material,
        eye_frame: &Frame,
        in_shadow: bool,
    ) -> Color {
        if !self.is_on {
            return Color::ZERO;
        }

        // Ambient contributes even in shadow
        let ambient = ambient_color(material.ambient, self.color);
        if in_shadow {
            return ambient;
        }

        let l = -self.dir.normalize();
        let v = (eye_frame.origin - point).normalize();
        let r = reflect(-l, normal);

        let diffuse = diffuse_color(material.diffuse, self.color, l, normal);
        let specular = specular_color(material.specular, self.color, material.shininess, r, v);

        (ambient + diffuse + specular).min(Color::ONE)
    }

    fn shadow_feeler(&self, point: Vec3, normal: Vec3) -> Ray {
        Ray::new(point + EPSILON * normal, -self.dir.normalize())
    }

    fn in_shadow(&self, point: Vec3, normal: Vec3, objects: &[VisibleShape]) -> bool {
        // The light is infinitely far away: any opaque hit shadows
        closest_opaque_hit(&self.shadow_feeler(point, normal), objects).is_some()
    }
}

/// Every light the tracer can shade with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Positional(PositionalLight),
    Spot(SpotLight),
    Directional(DirectionalLight),
}

impl Light {
    pub fn positional(pos: Vec3, color: Color) -> Self {
        Self::Positional(PositionalLight::new(pos, color))
    }

    pub fn spot(pos: Vec3, dir: Vec3, fov: f32, color: Color) -> Self {
        Self::Spot(SpotLight::new(pos, dir, fov, color))
    }

    pub fn directional(dir: Vec3, color: Color) -> Self {
        Self::Directional(DirectionalLight::new(dir, color))
    }

    /// The color this light contributes at a point.
    pub fn illuminate(
        &self,
        point: Vec3,
        normal: Vec3,
        material: &Material,
        eye_frame: &Frame,
        in_shadow: bool,
    ) -> Color {
        match self {
            Light::Positional(light) => light.illuminate(point, normal, material, eye_frame, in_shadow),
            Light::Spot(light) => light.illuminate(point, normal, material, eye_frame, in_shadow),
            Light::Directional(light) => light.illuminate(point, normal, material, eye_frame, in_shadow),
        }
    }

    /// Whether opaque geometry blocks this light from the point.
    pub fn point_in_shadow(
        &self,
        point: Vec3,
        normal: Vec3,
        objects: &[VisibleShape],
        eye_frame: &Frame,
    ) -> bool {
        match self {
            Light::Positional(light) => light.in_shadow(point, normal, objects, eye_frame),
            Light::Spot(light) => light.base.in_shadow(point, normal, objects, eye_frame),
            Light::Directional(light) => light.in_shadow(point, normal, objects),
        }
    }

    /// The probe ray the shadow test casts toward this light.
    pub fn shadow_feeler(&self, point: Vec3, normal: Vec3, eye_frame: &Frame) -> Ray {
        match self {
            Light::Positional(light) => light.shadow_feeler(point, normal, eye_frame),
            Light::Spot(light) => light.base.shadow_feeler(point, normal, eye_frame),
            Light::Directional(light) => light.shadow_feeler(point, normal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;
    use std::f32::consts::PI;

    fn world_frame() -> Frame {
        Frame::new(Vec3::new(0.0, 0.0, 10.0), Vec3::X, Vec3::Y, Vec3::Z)
    }

    #[test]
    fn test_attenuation_factor() {
        let at = Attenuation::new(1.0, 0.0, 0.0);
        assert_eq!(at.factor(100.0), 1.0);

        let at = Attenuation::new(0.0, 1.0, 0.0);
        assert_eq!(at.factor(4.0), 0.25);

        let at = Attenuation::new(1.0, 2.0, 3.0);
        assert!((at.factor(2.0) - 1.0 / 17.0).abs() < 1e-6);
    }

    #[test]
    fn test_off_light_is_black() {
        let mut light = PositionalLight::new(Vec3::new(0.0, 10.0, 0.0), Color::ONE);
        light.is_on = false;
        let c = Light::Positional(light).illuminate(
            Vec3::ZERO,
            Vec3::Y,
            &Material::default(),
            &world_frame(),
            false,
        );
        assert_eq!(c, Color::ZERO);
    }

    #[test]
    fn test_shadowed_point_gets_ambient_only() {
        let light = Light::positional(Vec3::new(0.0, 10.0, 0.0), Color::ONE);
        let material = Material::default();

        let lit = light.illuminate(Vec3::ZERO, Vec3::Y, &material, &world_frame(), false);
        let shadowed = light.illuminate(Vec3::ZERO, Vec3::Y, &material, &world_frame(), true);

        assert_eq!(shadowed, ambient_color(material.ambient, Color::ONE));
        assert!(shadowed.length() < lit.length());
    }

    #[test]
    fn test_shadow_symmetry() {
        let light = Light::positional(Vec3::new(0.0, 10.0, 0.0), Color::ONE);
        let frame = world_frame();
        let point = Vec3::ZERO;

        // Clear line of sight
        assert!(!light.point_in_shadow(point, Vec3::Y, &[], &frame));

        // Opaque sphere directly between point and light
        let blocker = VisibleShape::new(
            Shape::sphere(Vec3::new(0.0, 5.0, 0.0), 1.0),
            Material::default(),
        );
        assert!(light.point_in_shadow(point, Vec3::Y, &[blocker], &frame));

        // A sphere beyond the light must not shadow
        let beyond = VisibleShape::new(
            Shape::sphere(Vec3::new(0.0, 20.0, 0.0), 1.0),
            Material::default(),
        );
        assert!(!light.point_in_shadow(point, Vec3::Y, &[beyond], &frame));
    }

    #[test]
    fn test_spotlight_cone_membership() {
        let pos = Vec3::new(0.0, 1.0, 0.0);
        let down = Vec3::new(0.0, -1.0, 0.0);

        // Directly below, inside any forward cone
        assert!(SpotLight::is_in_cone(pos, down, PI / 3.0, Vec3::ZERO));
        // 45 degrees off axis: outside a 60-degree cone
        assert!(!SpotLight::is_in_cone(pos, down, PI / 3.0, Vec3::new(1.0, 0.0, 0.0)));
        // ... but inside a 144-degree cone
        assert!(SpotLight::is_in_cone(pos, down, 0.8 * PI, Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_spotlight_outside_cone_is_black() {
        let light = Light::spot(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, PI / 3.0, Color::ONE);
        let material = Material::default();
        let frame = world_frame();

        let inside = light.illuminate(Vec3::ZERO, Vec3::Y, &material, &frame, false);
        let outside = light.illuminate(Vec3::new(1.0, 0.0, 0.0), Vec3::Y, &material, &frame, false);

        assert!(inside.length() > 0.0);
        assert_eq!(outside, Color::ZERO);
    }

    #[test]
    fn test_directional_ambient_survives_shadow() {
        let light = Light::directional(Vec3::new(0.0, -1.0, 0.0), Color::ONE);
        let material = Material::default();
        let frame = world_frame();

        let shadowed = light.illuminate(Vec3::ZERO, Vec3::Y, &material, &frame, true);
        assert_eq!(shadowed, ambient_color(material.ambient, Color::ONE));
    }

    #[test]
    fn test_directional_any_hit_shadows() {
        let light = Light::directional(Vec3::new(0.0, -1.0, 0.0), Color::ONE);
        let frame = world_frame();

        // Occluder is 1000 units up: still a shadow, the light is at infinity
        let blocker = VisibleShape::new(
            Shape::sphere(Vec3::new(0.0, 1000.0, 0.0), 1.0),
            Material::default(),
        );
        assert!(light.point_in_shadow(Vec3::ZERO, Vec3::Y, &[blocker], &frame));
    }

    #[test]
    fn test_camera_tied_position_resolves_through_frame() {
        let mut light = PositionalLight::new(Vec3::new(0.0, 0.0, -5.0), Color::ONE);
        light.tied_to_world = false;

        // Eye at (0,0,10) looking down -z with standard basis
        let frame = world_frame();
        let world_pos = light.actual_position(&frame);
        assert!((world_pos - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn test_facing_light_beats_grazing_light() {
        let light = Light::positional(Vec3::new(0.0, 10.0, 0.0), Color::ONE);
        let material = Material::matte(Color::new(0.8, 0.8, 0.8));
        let frame = world_frame();

        let facing = light.illuminate(Vec3::ZERO, Vec3::Y, &material, &frame, false);
        let tilted = light.illuminate(
            Vec3::ZERO,
            Vec3::new(1.0, 0.1, 0.0).normalize(),
            &material,
            &frame,
            false,
        );
        assert!(facing.length() > tilted.length());
    }
}
