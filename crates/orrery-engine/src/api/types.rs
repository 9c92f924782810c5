use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Identifier for a celestial body, assigned by the registry in
/// depth-first walk order. Stable for the registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Index form for buffer/event payloads.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An overlay event communicated from Rust to the UI layer via
/// SharedArrayBuffer. Generic container: `kind` identifies the event,
/// `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct OverlayEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl OverlayEvent {
    pub const FLOATS: usize = 4;
}
