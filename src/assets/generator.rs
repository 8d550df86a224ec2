//! Synthetic asset generation
//!
//! The generator is a pure function of its parameters and the injected
//! random source, so tests can seed it for deterministic output.

use egui::pos2;
use rand::Rng;

use crate::constants::canvas;
use super::node::{AssetMode, AssetNode, ZoomScope};

/// Generate a fresh batch of asset nodes for the given mode and scope.
///
/// The returned set fully replaces any previous batch; nodes are never
/// merged or diffed across regenerations.
pub fn generate(mode: AssetMode, scope: ZoomScope, rng: &mut impl Rng) -> Vec<AssetNode> {
    let kinds = mode.admissible_kinds();

    (0..scope.node_count())
        .map(|i| {
            let port_count = rng.random_range(0..5);
            let alert_count = rng.random_range(0..3);

            AssetNode {
                id: format!("node-{i}"),
                kind: kinds[rng.random_range(0..kinds.len())],
                risk_score: rng.random_range(0..100),
                open_ports: (0..port_count).map(|_| rng.random::<u16>()).collect(),
                patch_age_days: rng.random_range(0..365),
                active_alerts: (0..alert_count)
                    .map(|a| format!("Alert {}", a + 1))
                    .collect(),
                position: pos2(
                    rng.random_range(0.0..canvas::LOGICAL_WIDTH),
                    rng.random_range(0.0..canvas::LOGICAL_HEIGHT),
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::node::AssetKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0x5e_c0_4e)
    }

    #[test]
    fn test_org_wide_scope_produces_150_nodes() {
        let nodes = generate(AssetMode::Network, ZoomScope::OrgWide, &mut seeded());
        assert_eq!(nodes.len(), 150);
    }

    #[test]
    fn test_team_scope_produces_50_nodes() {
        let nodes = generate(AssetMode::Network, ZoomScope::TeamScope, &mut seeded());
        assert_eq!(nodes.len(), 50);
    }

    #[test]
    fn test_endpoint_mode_only_yields_servers() {
        let nodes = generate(AssetMode::Endpoint, ZoomScope::OrgWide, &mut seeded());
        assert!(nodes.iter().all(|n| n.kind == AssetKind::Server));
    }

    #[test]
    fn test_network_mode_yields_servers_and_iot() {
        let nodes = generate(AssetMode::Network, ZoomScope::OrgWide, &mut seeded());
        assert!(nodes
            .iter()
            .all(|n| matches!(n.kind, AssetKind::Server | AssetKind::Iot)));
    }

    #[test]
    fn test_cloud_mode_yields_saas_and_servers() {
        let nodes = generate(AssetMode::Cloud, ZoomScope::OrgWide, &mut seeded());
        assert!(nodes
            .iter()
            .all(|n| matches!(n.kind, AssetKind::Saas | AssetKind::Server)));
    }

    #[test]
    fn test_field_bounds_hold_for_every_node() {
        let nodes = generate(AssetMode::Cloud, ZoomScope::OrgWide, &mut seeded());
        for node in &nodes {
            assert!(node.risk_score < 100);
            assert!(node.patch_age_days < 365);
            assert!(node.open_ports.len() <= 4);
            assert!(node.active_alerts.len() <= 2);
            assert!(node.position.x >= 0.0 && node.position.x < 800.0);
            assert!(node.position.y >= 0.0 && node.position.y < 600.0);
        }
    }

    #[test]
    fn test_alert_labels_are_positional() {
        let nodes = generate(AssetMode::Network, ZoomScope::OrgWide, &mut seeded());
        for node in &nodes {
            for (i, alert) in node.active_alerts.iter().enumerate() {
                assert_eq!(alert, &format!("Alert {}", i + 1));
            }
        }
    }

    #[test]
    fn test_ids_are_unique_within_a_batch() {
        let nodes = generate(AssetMode::Network, ZoomScope::TeamScope, &mut seeded());
        let mut ids: Vec<_> = nodes.iter().map(|n| n.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), nodes.len());
    }

    #[test]
    fn test_generation_is_deterministic_under_a_seed() {
        let a = generate(AssetMode::Cloud, ZoomScope::TeamScope, &mut seeded());
        let b = generate(AssetMode::Cloud, ZoomScope::TeamScope, &mut seeded());
        assert_eq!(a, b);
    }
}
