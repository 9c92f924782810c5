//! Body registry — static configuration per celestial body.
//!
//! Configs form a tree (a moon nests under its planet) and are validated
//! and flattened once at startup. A malformed config is a fatal
//! misconfiguration, reported with the offending body's key; nothing in
//! the registry can fail after load.

use std::collections::HashSet;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::types::BodyId;
use crate::components::mesh::MeshColor;

/// Annulus carried by a body (e.g. Saturn's ring), in body-local units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RingGeometry {
    pub inner: f32,
    pub outer: f32,
}

/// Immutable static description of one celestial body's geometry, motion
/// parameters, and display metadata. Never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Unique lookup key, e.g. "mercury".
    pub key: String,
    pub display_name: String,
    pub description: String,
    #[serde(default)]
    pub facts: Vec<String>,
    /// Body radius in world units.
    pub radius: f32,
    /// Self-rotation in radians per tick.
    #[serde(default)]
    pub spin_rate: f32,
    /// Revolution in radians per tick. 0 for a body that does not
    /// revolve (the star, or a child anchored to its parent).
    #[serde(default)]
    pub orbital_speed: f32,
    /// Radius of the circular orbit in world units.
    #[serde(default)]
    pub orbital_radius: f32,
    /// Base material tint; also the placeholder when no texture loads.
    #[serde(default)]
    pub color: MeshColor,
    /// HDR glow (the star).
    #[serde(default)]
    pub emissive: f32,
    /// Texture path resolved through the asset manifest.
    #[serde(default)]
    pub texture: Option<String>,
    /// Ring carried by the body itself.
    #[serde(default)]
    pub ring: Option<RingGeometry>,
    /// Texture for the carried ring.
    #[serde(default)]
    pub ring_texture: Option<String>,
    /// Color of the decorative orbit-guide ring, drawn at
    /// `orbital_radius` when present.
    #[serde(default)]
    pub orbit_color: Option<MeshColor>,
    /// Parent-relative offset for a child anchored to its parent.
    #[serde(default)]
    pub anchor_offset: [f32; 3],
    /// Static tilt (radians, about X) applied once to the anchor offset.
    #[serde(default)]
    pub inclination: f32,
    #[serde(default)]
    pub children: Vec<BodyConfig>,
}

impl BodyConfig {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        radius: f32,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            description: String::new(),
            facts: Vec::new(),
            radius,
            spin_rate: 0.0,
            orbital_speed: 0.0,
            orbital_radius: 0.0,
            color: MeshColor::default(),
            emissive: 0.0,
            texture: None,
            ring: None,
            ring_texture: None,
            orbit_color: None,
            anchor_offset: [0.0; 3],
            inclination: 0.0,
            children: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_facts<S: Into<String>>(mut self, facts: impl IntoIterator<Item = S>) -> Self {
        self.facts = facts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_spin_rate(mut self, spin_rate: f32) -> Self {
        self.spin_rate = spin_rate;
        self
    }

    pub fn with_orbit(mut self, orbital_speed: f32, orbital_radius: f32) -> Self {
        self.orbital_speed = orbital_speed;
        self.orbital_radius = orbital_radius;
        self
    }

    pub fn with_color(mut self, color: MeshColor) -> Self {
        self.color = color;
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

    pub fn with_ring(mut self, inner: f32, outer: f32) -> Self {
        self.ring = Some(RingGeometry { inner, outer });
        self
    }

    pub fn with_ring_texture(mut self, texture: impl Into<String>) -> Self {
        self.ring_texture = Some(texture.into());
        self
    }

    pub fn with_orbit_color(mut self, color: MeshColor) -> Self {
        self.orbit_color = Some(color);
        self
    }

    pub fn with_anchor(mut self, offset: Vec3, inclination: f32) -> Self {
        self.anchor_offset = offset.to_array();
        self.inclination = inclination;
        self
    }

    pub fn with_child(mut self, child: BodyConfig) -> Self {
        self.children.push(child);
        self
    }

    /// Anchor offset as a vector.
    pub fn offset_vec(&self) -> Vec3 {
        Vec3::from_array(self.anchor_offset)
    }
}

/// Startup configuration failure. Fatal: scene construction aborts with
/// the offending body named.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("body `{key}`: radius must be positive (got {value})")]
    NonPositiveRadius { key: String, value: f32 },
    #[error("body `{key}`: {field} must not be negative (got {value})")]
    NegativeRate {
        key: String,
        field: &'static str,
        value: f32,
    },
    #[error("body `{key}`: ring must satisfy 0 < inner < outer (got {inner}..{outer})")]
    DegenerateRing {
        key: String,
        inner: f32,
        outer: f32,
    },
    #[error("body with empty key (display name `{display_name}`)")]
    EmptyKey { display_name: String },
    #[error("duplicate body key `{key}`")]
    DuplicateKey { key: String },
}

/// One validated body in the flattened registry. `children` have been
/// hoisted into entries of their own; the tree survives as parent links.
#[derive(Debug, Clone)]
pub struct BodyEntry {
    pub id: BodyId,
    pub parent: Option<BodyId>,
    pub config: BodyConfig,
}

/// Validated, flattened body configuration. Entries are in depth-first
/// order over the root list, so a parent always precedes its children.
#[derive(Debug)]
pub struct BodyRegistry {
    entries: Vec<BodyEntry>,
}

impl BodyRegistry {
    pub fn new(roots: Vec<BodyConfig>) -> Result<Self, RegistryError> {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();
        for root in roots {
            Self::flatten(root, None, &mut entries, &mut seen)?;
        }
        log::debug!("body registry: {} bodies", entries.len());
        Ok(Self { entries })
    }

    fn flatten(
        mut config: BodyConfig,
        parent: Option<BodyId>,
        entries: &mut Vec<BodyEntry>,
        seen: &mut HashSet<String>,
    ) -> Result<(), RegistryError> {
        validate(&config)?;
        if !seen.insert(config.key.clone()) {
            return Err(RegistryError::DuplicateKey {
                key: config.key,
            });
        }

        let id = BodyId(entries.len() as u32);
        let children = std::mem::take(&mut config.children);
        entries.push(BodyEntry { id, parent, config });

        for child in children {
            Self::flatten(child, Some(id), entries, seen)?;
        }
        Ok(())
    }

    /// All bodies, depth-first, parents before children.
    pub fn entries(&self) -> &[BodyEntry] {
        &self.entries
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyEntry> {
        self.entries.get(id.index())
    }

    pub fn find(&self, key: &str) -> Option<&BodyEntry> {
        self.entries.iter().find(|e| e.config.key == key)
    }

    /// Top-level bodies only.
    pub fn roots(&self) -> impl Iterator<Item = &BodyEntry> {
        self.entries.iter().filter(|e| e.parent.is_none())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(config: &BodyConfig) -> Result<(), RegistryError> {
    if config.key.is_empty() {
        return Err(RegistryError::EmptyKey {
            display_name: config.display_name.clone(),
        });
    }
    if config.radius <= 0.0 {
        return Err(RegistryError::NonPositiveRadius {
            key: config.key.clone(),
            value: config.radius,
        });
    }
    for (field, value) in [
        ("spin_rate", config.spin_rate),
        ("orbital_speed", config.orbital_speed),
        ("orbital_radius", config.orbital_radius),
    ] {
        if value < 0.0 {
            return Err(RegistryError::NegativeRate {
                key: config.key.clone(),
                field,
                value,
            });
        }
    }
    if let Some(ring) = config.ring {
        if ring.inner <= 0.0 || ring.inner >= ring.outer {
            return Err(RegistryError::DegenerateRing {
                key: config.key.clone(),
                inner: ring.inner,
                outer: ring.outer,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(key: &str, radius: f32) -> BodyConfig {
        BodyConfig::new(key, key.to_uppercase(), radius)
    }

    #[test]
    fn flattens_depth_first_with_parent_links() {
        let roots = vec![
            planet("sun", 3.0),
            planet("earth", 1.0).with_child(planet("moon", 0.3)),
            planet("mars", 0.5),
        ];
        let registry = BodyRegistry::new(roots).unwrap();

        let keys: Vec<&str> = registry
            .entries()
            .iter()
            .map(|e| e.config.key.as_str())
            .collect();
        assert_eq!(keys, ["sun", "earth", "moon", "mars"]);

        let earth = registry.find("earth").unwrap();
        let moon = registry.find("moon").unwrap();
        assert_eq!(moon.parent, Some(earth.id));
        assert_eq!(registry.roots().count(), 3);
    }

    #[test]
    fn id_matches_entry_index() {
        let registry =
            BodyRegistry::new(vec![planet("a", 1.0), planet("b", 1.0)]).unwrap();
        for (i, entry) in registry.entries().iter().enumerate() {
            assert_eq!(entry.id.index(), i);
            assert_eq!(registry.get(entry.id).unwrap().config.key, entry.config.key);
        }
    }

    #[test]
    fn rejects_non_positive_radius_naming_the_body() {
        let err = BodyRegistry::new(vec![planet("venus", 0.0)]).unwrap_err();
        assert!(err.to_string().contains("venus"), "diagnostic: {err}");
    }

    #[test]
    fn rejects_negative_orbital_speed() {
        let bad = planet("mars", 0.5).with_orbit(-0.01, 13.0);
        let err = BodyRegistry::new(vec![bad]).unwrap_err();
        assert!(err.to_string().contains("orbital_speed"));
    }

    #[test]
    fn rejects_duplicate_keys_across_nesting() {
        let roots = vec![planet("earth", 1.0).with_child(planet("earth", 0.3))];
        let err = BodyRegistry::new(roots).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateKey { .. }));
    }

    #[test]
    fn rejects_degenerate_ring() {
        let bad = planet("saturn", 1.8).with_ring(3.5, 2.2);
        let err = BodyRegistry::new(vec![bad]).unwrap_err();
        assert!(err.to_string().contains("saturn"));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = planet("earth", 1.0)
            .with_orbit(0.003, 10.0)
            .with_facts(["Has one natural satellite: the Moon"])
            .with_child(
                planet("moon", 0.3).with_anchor(Vec3::new(2.0, 0.0, 0.0), 0.087),
            );
        let json = serde_json::to_string(&config).unwrap();
        let back: BodyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.children.len(), 1);
        assert_eq!(back.children[0].key, "moon");
        assert!((back.orbital_speed - 0.003).abs() < 1e-9);
    }
}
