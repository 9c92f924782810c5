//! Orbital kinematics — per-body motion state and the per-tick update.
//!
//! Motion is frame-coupled on purpose: one tick advances every angle by
//! exactly its per-tick rate, with no delta-time scaling. The tick clock
//! upstream decides how many ticks a rendered frame contributes.

use std::collections::HashMap;
use std::f32::consts::TAU;

use crate::api::types::BodyId;
use crate::core::rng::Rng;
use crate::registry::{BodyConfig, BodyRegistry};

/// Mutable per-body motion state, advanced once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyState {
    /// Rotation about the body's own axis, radians.
    pub spin_angle: f32,
    /// Angular position along the circular orbit, radians.
    pub orbital_angle: f32,
}

/// Advance one body by one tick. Total over well-formed input; cannot
/// fail.
pub fn tick(state: &mut BodyState, config: &BodyConfig) {
    state.spin_angle += config.spin_rate;
    state.orbital_angle += config.orbital_speed;
}

/// Simulation state for every mounted body, keyed by id.
pub struct SimulationState {
    states: HashMap<BodyId, BodyState>,
}

impl SimulationState {
    /// Create state for every registry body. Revolving bodies start at a
    /// seeded-random orbital phase in [0, 2π) so the scene never opens
    /// phase-aligned; non-revolving bodies (the star, anchored children)
    /// start at zero.
    pub fn new(registry: &BodyRegistry, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let mut states = HashMap::with_capacity(registry.len());
        for entry in registry.entries() {
            let orbital_angle = if entry.config.orbital_speed > 0.0 {
                rng.next_angle()
            } else {
                0.0
            };
            states.insert(
                entry.id,
                BodyState {
                    spin_angle: 0.0,
                    orbital_angle,
                },
            );
        }
        Self { states }
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyState> {
        self.states.get(&id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut BodyState> {
        self.states.get_mut(&id)
    }

    /// Advance every body by one tick, then normalize angles into
    /// [0, 2π). Normalization bounds angle magnitude so long sessions
    /// never bleed floating-point precision; only trigonometric
    /// consumers read these values, so the wrap is invisible.
    pub fn tick_all(&mut self, registry: &BodyRegistry) {
        for entry in registry.entries() {
            if let Some(state) = self.states.get_mut(&entry.id) {
                tick(state, &entry.config);
                state.spin_angle = state.spin_angle.rem_euclid(TAU);
                state.orbital_angle = state.orbital_angle.rem_euclid(TAU);
            }
        }
    }

    /// Drop a body's state when it unmounts; it will no longer be
    /// ticked.
    pub fn remove(&mut self, id: BodyId) -> Option<BodyState> {
        self.states.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
