//! Surface material properties for Phong shading.

use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Phong material: ambient/diffuse/specular reflectances plus the
/// transparency and dielectric parameters the tracer's recursion reads.
///
/// Materials are copied into hit records, so every ray shades against an
/// immutable snapshot (texture lookups overwrite the copy, never the
/// original).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
    /// Opacity: 1.0 is fully opaque, values below 1 trigger the
    /// straight-through transparency branch in the tracer.
    pub alpha: f32,
    /// True for glass-like materials that both reflect and refract.
    pub is_dielectric: bool,
    /// Refraction index, meaningful only when `is_dielectric` is set.
    pub refraction_index: f32,
}

impl Material {
    /// Create a material from explicit Phong components.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            alpha: 1.0,
            is_dielectric: false,
            refraction_index: 1.0,
        }
    }

    /// Create a material from a single base color.
    ///
    /// Ambient is the base color scaled down, specular is white.
    pub fn from_color(base: Color) -> Self {
        Self::new(0.15 * base, base, Color::ONE, 32.0)
    }

    /// A diffuse-only material: no specular highlight at all.
    pub fn matte(base: Color) -> Self {
        Self::new(0.15 * base, base, Color::ZERO, 1.0)
    }

    /// Set the opacity.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Mark the material as a dielectric with the given refraction index.
    pub fn dielectric(mut self, refraction_index: f32) -> Self {
        self.is_dielectric = true;
        self.refraction_index = refraction_index;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::from_color(Color::new(0.5, 0.5, 0.5))
    }
}
