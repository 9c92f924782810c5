//! The solar system scene — wires registry, simulation, picking and
//! selection into one `SceneApp`.

use glam::Vec2;
use orrery_engine::{
    sync_scene, AppConfig, BodyRegistry, EngineContext, Entity, InputEvent, InputQueue,
    InteractionRouter, MeshComponent, OrbitCamera, OverlayEvent, PickTarget, RegistryError,
    Rng, SceneApp, SceneEvent, SelectionPolicy, SelectionState, SimulationState,
};

use crate::bodies::{
    self, CAMERA_DISTANCE, CAMERA_ELEVATION, GUIDE_RING_ALPHA, GUIDE_RING_WIDTH,
    SATURN_RING_ALPHA,
};
use crate::starfield;

// ── Viewport ────────────────────────────────────────────────────────

const VIEWPORT_W: f32 = 1280.0;
const VIEWPORT_H: f32 = 720.0;

// ── Custom event kinds from the host ────────────────────────────────

/// Camera pose report from the host orbit control:
/// a = azimuth, b = elevation, c = distance.
pub const CUSTOM_CAMERA_POSE: u32 = 1;
/// Viewport resize: a = width, b = height.
pub const CUSTOM_RESIZE: u32 = 99;

// ── Overlay event kinds to the UI layer ─────────────────────────────

/// Exclusive selection: a = body index (-1 none), b/c = anchor.
pub const EVENT_SELECTION: f32 = 1.0;
/// Hover signal: a = body index (-1 none). The host owns the cursor.
pub const EVENT_HOVER: f32 = 2.0;
/// Toggle-policy visibility: a = body index, one event per visible body.
pub const EVENT_TOGGLE: f32 = 3.0;

pub struct SolarScene {
    registry: Option<BodyRegistry>,
    sim: Option<SimulationState>,
    selection: SelectionState,
    router: InteractionRouter,
    camera: OrbitCamera,
    /// Per-frame pick targets, rebuilt from the scene before routing.
    targets: Vec<PickTarget>,
    /// Scratch for events routed this frame.
    routed: Vec<SceneEvent>,
    seed: u64,
}

impl SolarScene {
    pub fn new() -> Self {
        Self::with_policy(SelectionPolicy::ExclusiveSingleSelect)
    }

    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Self {
            registry: None,
            sim: None,
            selection: SelectionState::new(policy),
            router: InteractionRouter::new(),
            camera: OrbitCamera::new(VIEWPORT_W, VIEWPORT_H).with_pose(
                0.0,
                CAMERA_ELEVATION,
                CAMERA_DISTANCE,
            ),
            targets: Vec::new(),
            routed: Vec::new(),
            seed: bodies::DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SolarScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneApp for SolarScene {
    fn config(&self) -> AppConfig {
        AppConfig {
            tick_dt: 1.0 / 60.0,
            viewport_width: VIEWPORT_W,
            viewport_height: VIEWPORT_H,
            max_instances: 64,
            max_events: 32,
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), RegistryError> {
        let registry = BodyRegistry::new(bodies::solar_registry())?;
        let sim = SimulationState::new(&registry, self.seed);
        log::info!("solar scene: {} bodies", registry.len());

        for entry in registry.entries() {
            let config = &entry.config;

            // The body itself.
            let mut mesh =
                MeshComponent::sphere(config.radius, config.color).with_emissive(config.emissive);
            if let Some(texture) = &config.texture {
                mesh = mesh.with_texture(texture.clone());
            }
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(config.key.clone())
                    .with_mesh(mesh)
                    .with_body(entry.id),
            );

            // Its carried ring, following the body every tick.
            if let Some(ring) = config.ring {
                let mut ring_mesh = MeshComponent::ring(ring.inner, ring.outer, config.color)
                    .with_alpha(SATURN_RING_ALPHA);
                if let Some(texture) = &config.ring_texture {
                    ring_mesh = ring_mesh.with_texture(texture.clone());
                }
                let id = ctx.next_id();
                ctx.scene.spawn(
                    Entity::new(id)
                        .with_tag(format!("{}-ring", config.key))
                        .with_anchor(entry.id)
                        .with_mesh(ring_mesh),
                );
            }

            // Static orbit guide at the orbital radius.
            if entry.parent.is_none() && config.orbital_radius > 0.0 {
                if let Some(color) = config.orbit_color {
                    let guide = MeshComponent::ring(
                        config.orbital_radius,
                        config.orbital_radius + GUIDE_RING_WIDTH,
                        color,
                    )
                    .with_alpha(GUIDE_RING_ALPHA);
                    let id = ctx.next_id();
                    ctx.scene.spawn(
                        Entity::new(id)
                            .with_tag(format!("{}-orbit", config.key))
                            .with_mesh(guide),
                    );
                }
            }
        }

        let mut star_rng = Rng::new(self.seed.wrapping_add(1));
        ctx.stars = starfield::scatter(&mut star_rng);

        // First frame sees real transforms, not spawn defaults.
        sync_scene(&registry, &sim, &mut ctx.scene);

        self.registry = Some(registry);
        self.sim = Some(sim);
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let (Some(registry), Some(sim)) = (&self.registry, &mut self.sim) else {
            return;
        };

        // ── Pick targets from what the viewer currently sees ─────────
        self.targets.clear();
        for entity in ctx.scene.iter() {
            if !entity.active {
                continue;
            }
            if let Some(body) = entity.body {
                if let Some(entry) = registry.get(body) {
                    self.targets.push(PickTarget {
                        body,
                        position: entity.pos,
                        radius: entry.config.radius,
                    });
                }
            }
        }

        // ── Route input ──────────────────────────────────────────────
        self.routed.clear();
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind: CUSTOM_CAMERA_POSE, a, b, c } => {
                    self.camera.set_pose(a, b, c);
                }
                InputEvent::Custom { kind: CUSTOM_RESIZE, a, b, .. } => {
                    self.camera.set_viewport(a, b);
                }
                InputEvent::Custom { .. } => {}
                ref pointer => {
                    self.router
                        .route(pointer, &self.targets, &self.camera, &mut self.routed);
                }
            }
        }
        for event in &self.routed {
            self.selection.apply(event);
        }

        // ── Advance the simulation, unconditionally ──────────────────
        sim.tick_all(registry);
        sync_scene(registry, sim, &mut ctx.scene);

        // ── Overlay state for the UI layer ───────────────────────────
        let (sel_idx, anchor) = match self.selection.current_selection() {
            Some(sel) => (sel.body.index() as f32, sel.anchor),
            None => (-1.0, Vec2::ZERO),
        };
        ctx.emit_event(OverlayEvent {
            kind: EVENT_SELECTION,
            a: sel_idx,
            b: anchor.x,
            c: anchor.y,
        });

        let hover_idx = self
            .router
            .hovered()
            .map(|b| b.index() as f32)
            .unwrap_or(-1.0);
        ctx.emit_event(OverlayEvent {
            kind: EVENT_HOVER,
            a: hover_idx,
            ..Default::default()
        });

        if self.selection.policy() == SelectionPolicy::IndependentToggle {
            for (body, visible) in self.selection.visibility_flags() {
                if *visible {
                    ctx.emit_event(OverlayEvent {
                        kind: EVENT_TOGGLE,
                        a: body.index() as f32,
                        b: 1.0,
                        ..Default::default()
                    });
                }
            }
        }
    }
}
