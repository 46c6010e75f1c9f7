//! Scene: object lists, lights, and the camera.

use crate::camera::Camera;
use crate::light::Light;
use crate::object::{TranslucentShape, VisibleShape};

/// Everything a render pass reads: opaque and translucent object lists,
/// lights, and the camera. Built by scene-setup code before the pass and
/// treated as read-only while tracing.
pub struct Scene {
    pub opaque: Vec<VisibleShape>,
    pub translucent: Vec<TranslucentShape>,
    pub lights: Vec<Light>,
    pub camera: Camera,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            opaque: Vec::new(),
            translucent: Vec::new(),
            lights: Vec::new(),
            camera,
        }
    }

    pub fn add_opaque(&mut self, object: VisibleShape) {
        self.opaque.push(object);
    }

    pub fn add_translucent(&mut self, object: TranslucentShape) {
        self.translucent.push(object);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }
}
