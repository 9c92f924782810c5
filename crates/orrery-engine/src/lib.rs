pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod registry;
pub mod renderer;
pub mod selection;
pub mod sim;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::app::{AppConfig, EngineContext, SceneApp};
pub use api::types::{BodyId, EntityId, OverlayEvent};
pub use assets::manifest::{TextureManifest, TextureRegistry};
pub use components::entity::Entity;
pub use components::mesh::{MeshColor, MeshComponent, MeshShape};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::TickClock;
pub use input::queue::{InputEvent, InputQueue};
pub use input::router::{InteractionRouter, PickTarget, SceneEvent};
pub use registry::{BodyConfig, BodyEntry, BodyRegistry, RegistryError, RingGeometry};
pub use renderer::camera::{OrbitCamera, Projected};
pub use renderer::instance::{build_instances, InstanceBuffer, SceneInstance, StarVertex};
pub use selection::{OverlayContent, Selection, SelectionPolicy, SelectionState};
pub use sim::{tick, BodyState, SimulationState};
pub use systems::orbit::{anchored_offset, orbit_position, project, sync_scene, BodyTransform};
