//! Flat instance buffers read by the render collaborator.
//!
//! The host reads these through raw-pointer accessors on the wasm
//! bridge; layout is part of the wire format and never changes.

use bytemuck::{Pod, Zeroable};

use crate::assets::manifest::TextureRegistry;
use crate::components::entity::Entity;
use crate::components::mesh::MeshShape;

/// Geometry kind discriminants in the instance stream.
pub const KIND_SPHERE: f32 = 0.0;
pub const KIND_RING: f32 = 1.0;

/// Per-entity render data: transform, geometry descriptor, material
/// descriptor. 16 floats = 64 bytes per instance.
/// For spheres `p0` is the radius; for rings `p0..p1` is inner..outer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SceneInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rotation_y: f32,
    pub kind: f32,
    pub p0: f32,
    pub p1: f32,
    pub texture_slot: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    pub emissive: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl SceneInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One point of the decorative starfield. Written once at init.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StarVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub brightness: f32,
}

impl StarVertex {
    pub const FLOATS: usize = 4;
}

/// Buffer of scene instances, rebuilt every frame.
pub struct InstanceBuffer {
    instances: Vec<SceneInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SceneInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the instance buffer from the scene's entities, in scene order.
/// Inactive and mesh-less entities are skipped; textures resolve through
/// the registry (unknown paths land on the placeholder slot).
pub fn build_instances<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    textures: &TextureRegistry,
    buffer: &mut InstanceBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let (kind, p0, p1) = match mesh.shape {
            MeshShape::Sphere { radius } => (KIND_SPHERE, radius, 0.0),
            MeshShape::Ring { inner, outer } => (KIND_RING, inner, outer),
        };
        buffer.push(SceneInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            rotation_y: entity.rotation_y,
            kind,
            p0,
            p1,
            texture_slot: textures.slot_for(mesh.texture.as_deref()) as f32,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            alpha: mesh.alpha,
            emissive: mesh.emissive,
            ..Default::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::mesh::{MeshColor, MeshComponent};
    use glam::Vec3;

    #[test]
    fn scene_instance_is_64_bytes() {
        assert_eq!(std::mem::size_of::<SceneInstance>(), 64);
        assert_eq!(SceneInstance::FLOATS, 16);
    }

    #[test]
    fn star_vertex_is_16_bytes() {
        assert_eq!(std::mem::size_of::<StarVertex>(), 16);
    }

    #[test]
    fn build_skips_inactive_and_meshless() {
        let textures = TextureRegistry::default();
        let mut buffer = InstanceBuffer::new();
        let mut inactive = Entity::new(EntityId(2))
            .with_mesh(MeshComponent::sphere(1.0, MeshColor::default()));
        inactive.active = false;

        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec3::new(4.0, 0.0, 0.0))
                .with_mesh(MeshComponent::sphere(0.4, MeshColor::default())),
            inactive,
            Entity::new(EntityId(3)), // no mesh
        ];
        build_instances(entities.iter(), &textures, &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }

    #[test]
    fn ring_packs_inner_and_outer() {
        let textures = TextureRegistry::default();
        let mut buffer = InstanceBuffer::new();
        let entities = vec![Entity::new(EntityId(1))
            .with_mesh(MeshComponent::ring(2.2, 3.5, MeshColor::default()).with_alpha(0.8))];
        build_instances(entities.iter(), &textures, &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        // Read back through the raw layout, as the host would.
        let floats =
            unsafe { std::slice::from_raw_parts(buffer.instances_ptr(), SceneInstance::FLOATS) };
        assert_eq!(floats[4], KIND_RING);
        assert_eq!(floats[5], 2.2);
        assert_eq!(floats[6], 3.5);
        assert_eq!(floats[11], 0.8);
    }
}
