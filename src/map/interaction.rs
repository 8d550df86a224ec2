//! Hover and click interaction state
//!
//! Hover is an explicit two-state machine with a pure transition function;
//! the egui layer is a thin adapter that feeds it pointer events and
//! re-renders from the returned state.

use egui::{pos2, Pos2};

use crate::assets::AssetNode;
use crate::constants::interaction::TOOLTIP_OFFSET;

/// At most one node is hovered at a time, tracked by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    Hovering(String),
}

impl HoverState {
    pub fn hovered_id(&self) -> Option<&str> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering(id) => Some(id),
        }
    }
}

/// Pure transition applied on every pointer-move: the new state depends
/// only on the current hit, never on history.
pub fn transition(hit: Option<&AssetNode>) -> HoverState {
    match hit {
        Some(node) => HoverState::Hovering(node.id.clone()),
        None => HoverState::Idle,
    }
}

/// Owns hover state and the last observed pointer position, and decides
/// when a click becomes a node-selected notification.
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: HoverState,
    pointer: Option<Pos2>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            state: HoverState::Idle,
            pointer: None,
        }
    }

    /// Feed a pointer-move event with the current hit-test result
    pub fn pointer_move(&mut self, pointer: Pos2, hit: Option<&AssetNode>) {
        self.pointer = Some(pointer);
        self.state = transition(hit);
    }

    /// Pointer left the render surface
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        self.state = HoverState::Idle;
    }

    /// A click selects the hovered node, if any, and leaves hover state
    /// unchanged. Clicks while idle are a no-op.
    pub fn click(&self) -> Option<&str> {
        self.state.hovered_id()
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.state.hovered_id()
    }

    /// Screen position for the tooltip, offset so it does not occlude the
    /// pointer. None while the pointer is off the surface or nothing is
    /// hovered.
    pub fn tooltip_pos(&self) -> Option<Pos2> {
        if self.state == HoverState::Idle {
            return None;
        }
        self.pointer
            .map(|p| pos2(p.x + TOOLTIP_OFFSET[0], p.y + TOOLTIP_OFFSET[1]))
    }

    /// Drop all interaction state, e.g. after the node set is regenerated
    pub fn reset(&mut self) {
        self.state = HoverState::Idle;
        self.pointer = None;
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetKind;

    fn node(id: &str) -> AssetNode {
        AssetNode {
            id: id.into(),
            kind: AssetKind::Server,
            risk_score: 10,
            open_ports: vec![],
            patch_age_days: 0,
            active_alerts: vec![],
            position: pos2(0.0, 0.0),
        }
    }

    #[test]
    fn test_move_sequence_hit_hit_miss_hit() {
        let a = node("node-a");
        let b = node("node-b");
        let mut ctl = InteractionController::new();
        let p = pos2(10.0, 10.0);

        ctl.pointer_move(p, Some(&a));
        assert_eq!(ctl.state(), &HoverState::Hovering("node-a".into()));
        ctl.pointer_move(p, Some(&a));
        assert_eq!(ctl.state(), &HoverState::Hovering("node-a".into()));
        ctl.pointer_move(p, None);
        assert_eq!(ctl.state(), &HoverState::Idle);
        ctl.pointer_move(p, Some(&b));
        assert_eq!(ctl.state(), &HoverState::Hovering("node-b".into()));
    }

    #[test]
    fn test_click_while_hovering_selects_the_node() {
        let a = node("node-a");
        let mut ctl = InteractionController::new();
        ctl.pointer_move(pos2(5.0, 5.0), Some(&a));

        assert_eq!(ctl.click(), Some("node-a"));
        // Hover state is unchanged by the click.
        assert_eq!(ctl.state(), &HoverState::Hovering("node-a".into()));
    }

    #[test]
    fn test_click_while_idle_is_a_no_op() {
        let ctl = InteractionController::new();
        assert_eq!(ctl.click(), None);
    }

    #[test]
    fn test_pointer_leave_clears_hover() {
        let a = node("node-a");
        let mut ctl = InteractionController::new();
        ctl.pointer_move(pos2(5.0, 5.0), Some(&a));
        ctl.pointer_leave();
        assert_eq!(ctl.state(), &HoverState::Idle);
        assert_eq!(ctl.tooltip_pos(), None);
    }

    #[test]
    fn test_tooltip_offsets_away_from_the_pointer() {
        let a = node("node-a");
        let mut ctl = InteractionController::new();
        ctl.pointer_move(pos2(100.0, 200.0), Some(&a));
        assert_eq!(ctl.tooltip_pos(), Some(pos2(110.0, 190.0)));
    }
}
