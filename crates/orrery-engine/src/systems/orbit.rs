//! Scene graph adapter — turns body states into renderable transforms.
//!
//! The only place where simulation state touches render state: the
//! formulas are pure and tested directly, `sync_scene` just writes the
//! results into entities.

use glam::Vec3;

use crate::core::scene::Scene;
use crate::registry::{BodyConfig, BodyRegistry};
use crate::sim::{BodyState, SimulationState};

/// Position on the circular orbit in the orbital (XZ) plane.
pub fn orbit_position(orbital_radius: f32, orbital_angle: f32) -> Vec3 {
    Vec3::new(
        orbital_radius * orbital_angle.cos(),
        0.0,
        orbital_radius * orbital_angle.sin(),
    )
}

/// Parent-relative position of an anchored child: the fixed offset under
/// its static inclination (a one-time rotation about X, never advanced).
pub fn anchored_offset(offset: Vec3, inclination: f32) -> Vec3 {
    let (sin, cos) = inclination.sin_cos();
    Vec3::new(
        offset.x,
        offset.y * cos - offset.z * sin,
        offset.y * sin + offset.z * cos,
    )
}

/// Renderable transform for one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    pub position: Vec3,
    pub rotation_y: f32,
}

/// Parent-local transform derived from one body's state and config.
pub fn project(state: &BodyState, config: &BodyConfig) -> BodyTransform {
    BodyTransform {
        position: orbit_position(config.orbital_radius, state.orbital_angle),
        rotation_y: state.spin_angle,
    }
}

/// Write world transforms for every body entity, then reposition
/// anchor-following entities (planetary rings) onto their bodies.
/// Registry order is depth-first, so a parent's world position is always
/// resolved before its children need it. Decorative orbit-guide rings
/// carry neither a body nor an anchor and are never touched here.
pub fn sync_scene(registry: &BodyRegistry, sim: &SimulationState, scene: &mut Scene) {
    let mut world = vec![Vec3::ZERO; registry.len()];
    let mut spin = vec![0.0f32; registry.len()];

    for entry in registry.entries() {
        let state = sim.get(entry.id).copied().unwrap_or_default();
        let transform = project(&state, &entry.config);
        let base = match entry.parent {
            Some(parent) => world[parent.index()],
            None => Vec3::ZERO,
        };
        let local = if entry.parent.is_some() && entry.config.orbital_speed == 0.0 {
            anchored_offset(entry.config.offset_vec(), entry.config.inclination)
        } else {
            transform.position
        };
        world[entry.id.index()] = base + local;
        spin[entry.id.index()] = transform.rotation_y;
    }

    for entity in scene.iter_mut() {
        if let Some(body) = entity.body {
            if let Some(&pos) = world.get(body.index()) {
                entity.pos = pos;
                entity.rotation_y = spin[body.index()];
            }
        } else if let Some(anchor) = entity.anchor {
            if let Some(&pos) = world.get(anchor.index()) {
                entity.pos = pos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::entity::Entity;
    use crate::components::mesh::{MeshColor, MeshComponent};
    use crate::registry::BodyConfig;

    fn registry() -> BodyRegistry {
        BodyRegistry::new(vec![
            BodyConfig::new("sun", "The Sun", 3.0).with_spin_rate(0.002),
            BodyConfig::new("earth", "Earth", 1.0)
                .with_spin_rate(0.02)
                .with_orbit(0.003, 10.0)
                .with_child(
                    BodyConfig::new("moon", "The Moon", 0.3)
                        .with_anchor(Vec3::new(2.0, 0.0, 0.0), 0.0873),
                ),
        ])
        .unwrap()
    }

    #[test]
    fn position_lies_on_the_orbit_circle() {
        for angle in [0.0f32, 0.7, 2.0, 4.0, 6.0] {
            let p = orbit_position(10.0, angle);
            assert_eq!(p.y, 0.0);
            assert!((p.x * p.x + p.z * p.z - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn zero_radius_pins_to_origin() {
        assert_eq!(orbit_position(0.0, 1.234), Vec3::ZERO);
    }

    #[test]
    fn project_carries_spin_into_rotation() {
        let config = BodyConfig::new("earth", "Earth", 1.0).with_orbit(0.003, 10.0);
        let state = BodyState {
            spin_angle: 1.5,
            orbital_angle: 0.0,
        };
        let t = project(&state, &config);
        assert_eq!(t.rotation_y, 1.5);
        assert!((t.position.x - 10.0).abs() < 1e-6);
    }

    #[test]
    fn anchored_child_follows_parent_with_fixed_offset() {
        let registry = registry();
        let earth = registry.find("earth").unwrap().id;
        let moon = registry.find("moon").unwrap().id;

        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_body(earth));
        scene.spawn(Entity::new(EntityId(2)).with_body(moon));

        let mut sim = SimulationState::new(&registry, 42);
        sim.get_mut(earth).unwrap().orbital_angle = 0.0;
        sync_scene(&registry, &sim, &mut scene);

        let earth_pos = scene.get(EntityId(1)).unwrap().pos;
        let moon_pos = scene.get(EntityId(2)).unwrap().pos;
        let offset = moon_pos - earth_pos;
        // Fixed offset length regardless of parent's orbital angle.
        assert!((offset.length() - 2.0).abs() < 1e-4);

        for _ in 0..50 {
            sim.tick_all(&registry);
        }
        sync_scene(&registry, &sim, &mut scene);
        let offset2 =
            scene.get(EntityId(2)).unwrap().pos - scene.get(EntityId(1)).unwrap().pos;
        assert!((offset2.length() - 2.0).abs() < 1e-4);
        assert!((offset - offset2).length() < 1e-4, "anchor offset must not advance");
    }

    #[test]
    fn anchored_offset_applies_static_inclination() {
        let tilted = anchored_offset(Vec3::new(0.0, 0.0, 2.0), std::f32::consts::FRAC_PI_2);
        assert!((tilted.y - -2.0).abs() < 1e-6);
        assert!(tilted.z.abs() < 1e-6);
        // X component is on the rotation axis and passes through.
        let along_x = anchored_offset(Vec3::new(2.0, 0.0, 0.0), 0.5);
        assert!((along_x - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn ring_follower_tracks_its_body() {
        let registry = registry();
        let earth = registry.find("earth").unwrap().id;

        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_body(earth));
        scene.spawn(
            Entity::new(EntityId(2))
                .with_anchor(earth)
                .with_mesh(MeshComponent::ring(2.2, 3.5, MeshColor::default())),
        );
        // Static guide ring: neither body nor anchor.
        scene.spawn(
            Entity::new(EntityId(3))
                .with_pos(Vec3::ZERO)
                .with_mesh(MeshComponent::ring(10.0, 10.02, MeshColor::default())),
        );

        let mut sim = SimulationState::new(&registry, 42);
        for _ in 0..25 {
            sim.tick_all(&registry);
        }
        sync_scene(&registry, &sim, &mut scene);

        assert_eq!(scene.get(EntityId(2)).unwrap().pos, scene.get(EntityId(1)).unwrap().pos);
        assert_eq!(scene.get(EntityId(3)).unwrap().pos, Vec3::ZERO);
    }
}
