use crate::api::types::{EntityId, OverlayEvent};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::registry::RegistryError;
use crate::renderer::instance::StarVertex;

/// Configuration for the engine, provided by the scene app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed tick duration in seconds (default: 1/60).
    pub tick_dt: f32,
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
    /// Maximum number of scene instances (default: 128).
    pub max_instances: usize,
    /// Maximum number of overlay events per frame (default: 32).
    pub max_events: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_dt: 1.0 / 60.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            max_instances: 128,
            max_events: 32,
        }
    }
}

/// The contract every scene app must fulfill.
pub trait SceneApp {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Build the registry, spawn entities, scatter the starfield.
    /// A malformed body configuration aborts startup here; nothing else
    /// can fail.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), RegistryError>;

    /// One simulation tick: route input, advance kinematics, sync
    /// transforms, emit overlay events. Must return promptly — no I/O,
    /// no suspension.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable engine state, passed to SceneApp::init and SceneApp::update.
pub struct EngineContext {
    pub scene: Scene,
    /// Overlay events for the UI layer, cleared every frame.
    pub events: Vec<OverlayEvent>,
    /// Decorative starfield, written once at init.
    pub stars: Vec<StarVertex>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            events: Vec::new(),
            stars: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit an overlay event to be forwarded to the UI layer.
    pub fn emit_event(&mut self, event: OverlayEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
