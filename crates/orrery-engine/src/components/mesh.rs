use serde::{Deserialize, Serialize};

/// RGB color for mesh materials.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self { r: 0.7, g: 0.7, b: 0.7 }
    }
}

/// Geometry primitive understood by the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    Sphere { radius: f32 },
    /// Flat annulus in the orbital plane.
    Ring { inner: f32, outer: f32 },
}

/// Renderable mesh: shape plus material descriptor.
/// The texture is a path key resolved to a slot by the asset registry;
/// unknown paths fall back to the placeholder slot.
#[derive(Debug, Clone)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: MeshColor,
    /// Opacity (1.0 = opaque).
    pub alpha: f32,
    /// HDR glow multiplier (0.0 for non-emissive bodies).
    pub emissive: f32,
    pub texture: Option<String>,
}

impl MeshComponent {
    pub fn sphere(radius: f32, color: MeshColor) -> Self {
        Self {
            shape: MeshShape::Sphere { radius },
            color,
            alpha: 1.0,
            emissive: 0.0,
            texture: None,
        }
    }

    pub fn ring(inner: f32, outer: f32, color: MeshColor) -> Self {
        Self {
            shape: MeshShape::Ring { inner, outer },
            color,
            alpha: 1.0,
            emissive: 0.0,
            texture: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }
}
