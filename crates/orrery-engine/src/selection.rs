//! Selection/overlay state machine.
//!
//! Two policies share one machine, chosen once at construction:
//! exclusive single-select (an overlay panel anchored at the click, at
//! most one body selected; a background click clears) and independent
//! toggle (per-body sticky visibility flags; background clicks change
//! nothing). Long-lived for the viewport's lifetime; there is no
//! terminal state.

use std::collections::HashMap;

use glam::Vec2;

use crate::api::types::BodyId;
use crate::input::router::SceneEvent;
use crate::registry::BodyRegistry;

/// Rule governing how many bodies may show an overlay at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// At most one selected body; selecting another replaces it and a
    /// background click clears.
    ExclusiveSingleSelect,
    /// Per-body flags flipped only by that body's own clicks; background
    /// clicks are ignored.
    IndependentToggle,
}

/// The current exclusive selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub body: BodyId,
    /// Screen-space point the overlay is anchored to.
    pub anchor: Vec2,
}

/// Overlay content for the UI layer, resolved against the registry.
#[derive(Debug, Clone, Copy)]
pub struct OverlayContent<'r> {
    pub display_name: &'r str,
    pub description: &'r str,
    pub facts: &'r [String],
    pub anchor: Vec2,
}

pub struct SelectionState {
    policy: SelectionPolicy,
    selected: Option<Selection>,
    visible: HashMap<BodyId, bool>,
}

impl SelectionState {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            selected: None,
            visible: HashMap::new(),
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Apply one routed scene event. Hover changes are not selection
    /// transitions and pass through untouched.
    pub fn apply(&mut self, event: &SceneEvent) {
        match (self.policy, event) {
            (SelectionPolicy::ExclusiveSingleSelect, SceneEvent::BodySelected { body, anchor }) => {
                self.selected = Some(Selection {
                    body: *body,
                    anchor: *anchor,
                });
            }
            (SelectionPolicy::ExclusiveSingleSelect, SceneEvent::SelectionCleared) => {
                self.selected = None;
            }
            (SelectionPolicy::IndependentToggle, SceneEvent::BodySelected { body, .. }) => {
                let flag = self.visible.entry(*body).or_insert(false);
                *flag = !*flag;
            }
            // Toggles are sticky: background clicks change nothing.
            (SelectionPolicy::IndependentToggle, SceneEvent::SelectionCleared) => {}
            (_, SceneEvent::HoverChanged { .. }) => {}
        }
    }

    /// Current exclusive selection (always `None` under the toggle
    /// policy).
    pub fn current_selection(&self) -> Option<Selection> {
        self.selected
    }

    /// Whether a body's overlay is visible under the toggle policy.
    pub fn is_visible(&self, body: BodyId) -> bool {
        self.visible.get(&body).copied().unwrap_or(false)
    }

    /// Per-body visibility flags (toggle policy).
    pub fn visibility_flags(&self) -> &HashMap<BodyId, bool> {
        &self.visible
    }

    /// Overlay content for the current exclusive selection.
    pub fn overlay<'r>(&self, registry: &'r BodyRegistry) -> Option<OverlayContent<'r>> {
        let selection = self.selected?;
        let entry = registry.get(selection.body)?;
        Some(OverlayContent {
            display_name: &entry.config.display_name,
            description: &entry.config.description,
            facts: &entry.config.facts,
            anchor: selection.anchor,
        })
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.visible.clear();
    }
}
