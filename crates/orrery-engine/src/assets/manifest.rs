use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Texture manifest for a scene, loaded from a JSON file at runtime.
/// The host loads the listed textures into an array texture; slot 0 is
/// the built-in placeholder, so path `i` occupies slot `i + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Texture paths in slot order.
    pub textures: Vec<String>,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Path → texture-slot lookup built from a manifest. Unknown or missing
/// paths resolve to the placeholder slot, so an absent asset can never
/// break the frame loop.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    slots: HashMap<String, u32>,
}

impl TextureRegistry {
    pub const PLACEHOLDER_SLOT: u32 = 0;

    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let slots = manifest
            .textures
            .iter()
            .enumerate()
            .map(|(i, path)| (path.clone(), i as u32 + 1))
            .collect();
        Self { slots }
    }

    /// Slot for a texture path; the placeholder when absent or unknown.
    pub fn slot_for(&self, path: Option<&str>) -> u32 {
        path.and_then(|p| self.slots.get(p).copied())
            .unwrap_or(Self::PLACEHOLDER_SLOT)
    }

    /// Number of known textures (excluding the placeholder).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_and_assign_slots() {
        let json = r#"{
            "textures": [
                "/textures/sun_map.jpg",
                "/textures/earth_daymap.jpg"
            ]
        }"#;
        let manifest = TextureManifest::from_json(json).unwrap();
        let registry = TextureRegistry::from_manifest(&manifest);

        assert_eq!(registry.slot_for(Some("/textures/sun_map.jpg")), 1);
        assert_eq!(registry.slot_for(Some("/textures/earth_daymap.jpg")), 2);
    }

    #[test]
    fn unknown_paths_fall_back_to_placeholder() {
        let registry = TextureRegistry::default();
        assert_eq!(
            registry.slot_for(Some("/textures/missing.jpg")),
            TextureRegistry::PLACEHOLDER_SLOT
        );
        assert_eq!(registry.slot_for(None), TextureRegistry::PLACEHOLDER_SLOT);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TextureManifest::from_json("{not json").is_err());
    }
}
