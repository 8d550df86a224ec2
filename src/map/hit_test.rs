//! Pointer hit-testing against the node set

use egui::Pos2;

use crate::assets::AssetNode;
use crate::constants::interaction::HIT_RADIUS;
use super::coords::CanvasMapping;

/// Find the node under the pointer, if any.
///
/// A node qualifies when its render-space distance to the pointer is below
/// [`HIT_RADIUS`]. When several qualify, the first in sequence order wins;
/// the scan never looks for the nearest of all. Returns the index into
/// `nodes` so callers can keep borrowing the slice.
pub fn find_hit(pointer: Pos2, nodes: &[AssetNode], mapping: &CanvasMapping) -> Option<usize> {
    nodes
        .iter()
        .position(|node| mapping.to_render(node.position).distance(pointer) < HIT_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetKind;
    use egui::{pos2, vec2, Rect};

    fn mapping() -> CanvasMapping {
        CanvasMapping::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0)), false)
    }

    fn node(id: &str, x: f32, y: f32) -> AssetNode {
        AssetNode {
            id: id.into(),
            kind: AssetKind::Server,
            risk_score: 50,
            open_ports: vec![],
            patch_age_days: 10,
            active_alerts: vec![],
            position: pos2(x, y),
        }
    }

    #[test]
    fn test_hit_within_radius() {
        let nodes = vec![node("node-0", 100.0, 100.0)];
        assert_eq!(find_hit(pos2(110.0, 100.0), &nodes, &mapping()), Some(0));
    }

    #[test]
    fn test_miss_outside_radius() {
        let nodes = vec![node("node-0", 100.0, 100.0)];
        assert_eq!(find_hit(pos2(100.0, 116.0), &nodes, &mapping()), None);
    }

    #[test]
    fn test_first_in_sequence_wins_on_overlap() {
        // The second node is nearer, but the scan stops at the first match.
        let nodes = vec![node("node-0", 105.0, 100.0), node("node-1", 100.0, 100.0)];
        assert_eq!(find_hit(pos2(100.0, 100.0), &nodes, &mapping()), Some(0));
    }

    #[test]
    fn test_empty_node_set_resolves_to_none() {
        assert_eq!(find_hit(pos2(100.0, 100.0), &[], &mapping()), None);
    }

    #[test]
    fn test_hit_testing_is_idempotent() {
        let nodes = vec![node("node-0", 100.0, 100.0), node("node-1", 400.0, 300.0)];
        let pointer = pos2(398.0, 301.0);
        let first = find_hit(pointer, &nodes, &mapping());
        let second = find_hit(pointer, &nodes, &mapping());
        assert_eq!(first, second);
        assert_eq!(first, Some(1));
    }

    #[test]
    fn test_split_view_moves_the_hit_target() {
        let nodes = vec![node("node-0", 800.0, 300.0)];
        let split = CanvasMapping::new(
            Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0)),
            true,
        );
        // In split view the node renders at x = 400, not x = 800.
        assert_eq!(find_hit(pos2(400.0, 300.0), &nodes, &split), Some(0));
        assert_eq!(find_hit(pos2(800.0, 300.0), &nodes, &split), None);
    }
}
