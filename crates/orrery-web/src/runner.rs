use orrery_engine::{
    build_instances, AppConfig, EngineContext, InputEvent, InputQueue, InstanceBuffer,
    RegistryError, SceneApp, TextureManifest, TextureRegistry, TickClock,
};

/// Generic scene runner that wires up the engine loop.
///
/// Each concrete scene (e.g. `solar-scene`) creates a `thread_local!`
/// SceneRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct SceneRunner<A: SceneApp> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    instances: InstanceBuffer,
    textures: TextureRegistry,
    clock: TickClock,
    config: AppConfig,
    initialized: bool,
}

impl<A: SceneApp> SceneRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let clock = TickClock::new(config.tick_dt);
        let instances = InstanceBuffer::with_capacity(config.max_instances);

        Self {
            app,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            instances,
            textures: TextureRegistry::default(),
            clock,
            config,
            initialized: false,
        }
    }

    /// Initialize the scene. Call once after construction; a malformed
    /// body registry aborts here with the offending body named.
    pub fn init(&mut self) -> Result<(), RegistryError> {
        self.config = self.app.config();
        self.app.init(&mut self.ctx)?;
        self.initialized = true;
        Ok(())
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Load the texture manifest JSON. A malformed manifest is logged
    /// and ignored; every body then renders with the placeholder slot.
    pub fn load_manifest(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => {
                self.textures = TextureRegistry::from_manifest(&manifest);
                log::info!("texture manifest: {} textures", self.textures.len());
            }
            Err(err) => {
                log::warn!("ignoring malformed texture manifest: {err}");
            }
        }
    }

    /// Run one frame: fixed-step updates, drain input, rebuild the
    /// instance buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.clock.advance(dt);
        for _ in 0..steps {
            self.app.update(&mut self.ctx, &self.input);
        }

        // Drain input after the updates have observed it.
        self.input.drain();

        build_instances(self.ctx.scene.iter(), &self.textures, &mut self.instances);
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.instance_count() as u32
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.ctx.stars.as_ptr() as *const f32
    }

    pub fn star_count(&self) -> u32 {
        self.ctx.stars.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.config.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.config.viewport_height
    }

    // ---- Capacity accessors (read by the host to size buffers) ----

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{BodyConfig, BodyRegistry, MeshColor, MeshComponent, Entity, OverlayEvent};

    struct MiniScene;

    impl MiniScene {
        fn new() -> Self {
            Self
        }
    }

    impl SceneApp for MiniScene {
        fn init(&mut self, ctx: &mut EngineContext) -> Result<(), RegistryError> {
            let registry = BodyRegistry::new(vec![
                BodyConfig::new("sun", "The Sun", 3.0).with_spin_rate(0.002)
            ])?;
            let entry = &registry.entries()[0];
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("sun")
                    .with_mesh(MeshComponent::sphere(3.0, MeshColor::default()))
                    .with_body(entry.id),
            );
            Ok(())
        }

        fn update(&mut self, ctx: &mut EngineContext, _input: &InputQueue) {
            ctx.emit_event(OverlayEvent {
                kind: 1.0,
                ..Default::default()
            });
        }
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = SceneRunner::new(MiniScene::new());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.instance_count(), 0);
    }

    #[test]
    fn tick_builds_instances_and_events() {
        let mut runner = SceneRunner::new(MiniScene::new());
        runner.init().unwrap();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.instance_count(), 1);
        assert_eq!(runner.events_len(), 1);
    }

    #[test]
    fn input_drains_after_frame() {
        let mut runner = SceneRunner::new(MiniScene::new());
        runner.init().unwrap();
        runner.push_input(InputEvent::PointerDown { x: 1.0, y: 2.0 });
        runner.tick(1.0 / 60.0);
        runner.push_input(InputEvent::PointerUp { x: 1.0, y: 2.0 });
        runner.tick(1.0 / 60.0);
        // No panic, queue drains each frame; nothing to assert beyond
        // the runner staying consistent.
        assert_eq!(runner.instance_count(), 1);
    }

    #[test]
    fn malformed_manifest_is_tolerated() {
        let mut runner = SceneRunner::new(MiniScene::new());
        runner.init().unwrap();
        runner.load_manifest("{broken");
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.instance_count(), 1);
    }
}
