//! Pointer interaction router.
//!
//! Routes raw pointer events into selection events by explicit
//! hit-testing: a released click dispatches exactly one of
//! `BodySelected` or `SelectionCleared`, so a click on a body can never
//! also reach the background path. Hover is exposed as a signal; the UI
//! layer owns the cursor.

use glam::{Vec2, Vec3};

use crate::api::types::BodyId;
use crate::input::queue::InputEvent;
use crate::renderer::camera::OrbitCamera;

/// Selection-affecting event produced by the router.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    BodySelected { body: BodyId, anchor: Vec2 },
    SelectionCleared,
    HoverChanged { body: Option<BodyId> },
}

/// One pickable body for this frame's hit tests.
#[derive(Debug, Clone, Copy)]
pub struct PickTarget {
    pub body: BodyId,
    pub position: Vec3,
    pub radius: f32,
}

pub struct InteractionRouter {
    pointer_down: bool,
    press_origin: Vec2,
    drag_moved: bool,
    hovered: Option<BodyId>,
}

impl InteractionRouter {
    /// Screen-pixel travel before a press becomes a drag (camera orbit,
    /// handled by the host control) instead of a click.
    const DRAG_THRESHOLD: f32 = 5.0;
    /// Extra pick slack in pixels so small bodies stay clickable.
    const HIT_SLACK: f32 = 12.0;

    pub fn new() -> Self {
        Self {
            pointer_down: false,
            press_origin: Vec2::ZERO,
            drag_moved: false,
            hovered: None,
        }
    }

    /// Currently hovered body, if any.
    pub fn hovered(&self) -> Option<BodyId> {
        self.hovered
    }

    /// Route one input event, appending any resulting scene events.
    pub fn route(
        &mut self,
        event: &InputEvent,
        targets: &[PickTarget],
        camera: &OrbitCamera,
        out: &mut Vec<SceneEvent>,
    ) {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.pointer_down = true;
                self.drag_moved = false;
                self.press_origin = Vec2::new(x, y);
            }
            InputEvent::PointerMove { x, y } => {
                let point = Vec2::new(x, y);
                if self.pointer_down
                    && point.distance(self.press_origin) > Self::DRAG_THRESHOLD
                {
                    self.drag_moved = true;
                }
                let hit = self.hit_test(targets, camera, point);
                if hit != self.hovered {
                    self.hovered = hit;
                    out.push(SceneEvent::HoverChanged { body: hit });
                }
            }
            InputEvent::PointerUp { x, y } => {
                if self.pointer_down && !self.drag_moved {
                    let point = Vec2::new(x, y);
                    match self.hit_test(targets, camera, point) {
                        Some(body) => out.push(SceneEvent::BodySelected {
                            body,
                            anchor: point,
                        }),
                        None => out.push(SceneEvent::SelectionCleared),
                    }
                }
                self.pointer_down = false;
                self.drag_moved = false;
            }
            InputEvent::PointerLeave => {
                self.pointer_down = false;
                self.drag_moved = false;
                if self.hovered.is_some() {
                    self.hovered = None;
                    out.push(SceneEvent::HoverChanged { body: None });
                }
            }
            // Custom events belong to the scene app.
            InputEvent::Custom { .. } => {}
        }
    }

    /// Hit-test the pick targets, returning the body whose projected
    /// center is nearest the pointer among those within projected radius
    /// plus slack.
    pub fn hit_test(
        &self,
        targets: &[PickTarget],
        camera: &OrbitCamera,
        point: Vec2,
    ) -> Option<BodyId> {
        let mut best: Option<(BodyId, f32)> = None;
        for target in targets {
            let Some(projected) = camera.project(target.position) else {
                continue;
            };
            let hit_radius =
                camera.screen_radius(target.radius, projected.depth) + Self::HIT_SLACK;
            let dist = point.distance(projected.screen);
            if dist < hit_radius && best.map_or(true, |(_, d)| dist < d) {
                best = Some((target.body, dist));
            }
        }
        best.map(|(body, _)| body)
    }
}

impl Default for InteractionRouter {
    fn default() -> Self {
        Self::new()
    }
}
