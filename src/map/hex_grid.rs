//! Hexagonal background grid layout
//!
//! The grid is purely decorative: it never participates in hit-testing or
//! node layout, and it only changes when the viewport (or world extent)
//! changes, never when asset data changes.

use egui::{pos2, Pos2};

use crate::constants::grid;

/// Lazily yields hexagon centers covering a `width` x `height` rectangle,
/// with a one-tile overscan margin so edge tiles are not clipped.
///
/// Row `r`, column `c` maps to `x = c * hex_w * 0.75`,
/// `y = r * hex_h + (c % 2) * hex_h / 2` with `hex_w = 2 * size` and
/// `hex_h = sqrt(3) * size`.
pub fn tile(width: f32, height: f32, hex_size: f32) -> impl Iterator<Item = Pos2> {
    let hex_w = hex_size * 2.0;
    let hex_h = 3.0_f32.sqrt() * hex_size;
    let rows = (height / hex_h + 2.0).ceil() as u32;
    // Columns advance by three quarters of a hex, not a full one
    let cols = (width / (hex_w * 0.75) + 2.0).ceil() as u32;

    (0..rows).flat_map(move |r| {
        (0..cols).map(move |c| {
            pos2(
                c as f32 * hex_w * 0.75,
                r as f32 * hex_h + (c % 2) as f32 * hex_h / 2.0,
            )
        })
    })
}

/// The six outline vertices of a regular hexagon, vertex `i` at `i * 60`
/// degrees from the center.
pub fn hexagon_points(center: Pos2, size: f32) -> [Pos2; 6] {
    std::array::from_fn(|i| {
        let angle = i as f32 * std::f32::consts::PI / 3.0;
        pos2(
            center.x + size * angle.cos(),
            center.y + size * angle.sin(),
        )
    })
}

/// Lazily yields instanced-grid centers on the ground plane, covering the
/// centered `[-half_width, half_width] x [-half_depth, half_depth]` extent
/// plus one tile of overscan. Columns sit at pitch 1.75, bands at pitch
/// 1.5, with alternating bands shifted by 0.875.
pub fn tile_world(half_width: f32, half_depth: f32) -> impl Iterator<Item = (f32, f32)> {
    let col_min = ((-half_width - grid::WORLD_PITCH_X) / grid::WORLD_PITCH_X).floor() as i32;
    let col_max = ((half_width + grid::WORLD_PITCH_X) / grid::WORLD_PITCH_X).ceil() as i32;
    let band_min = ((-half_depth - grid::WORLD_PITCH_Z) / grid::WORLD_PITCH_Z).floor() as i32;
    let band_max = ((half_depth + grid::WORLD_PITCH_Z) / grid::WORLD_PITCH_Z).ceil() as i32;

    (band_min..=band_max).flat_map(move |band| {
        let offset = if band.rem_euclid(2) == 1 {
            grid::WORLD_BAND_OFFSET
        } else {
            0.0
        };
        (col_min..=col_max).map(move |col| {
            (
                col as f32 * grid::WORLD_PITCH_X + offset,
                band as f32 * grid::WORLD_PITCH_Z,
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centers_follow_the_offset_scheme() {
        let centers: Vec<Pos2> = tile(800.0, 600.0, 30.0).collect();
        let hex_h = 3.0_f32.sqrt() * 30.0;

        // Row 0: even columns sit on y = 0, odd columns half a hex lower.
        assert_eq!(centers[0], pos2(0.0, 0.0));
        assert_eq!(centers[1], pos2(45.0, hex_h / 2.0));
        assert_eq!(centers[2], pos2(90.0, 0.0));
    }

    #[test]
    fn test_tiling_covers_the_rect_with_overscan() {
        let centers: Vec<Pos2> = tile(800.0, 600.0, 30.0).collect();
        let max_x = centers.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        let max_y = centers.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!(max_x >= 800.0);
        assert!(max_y >= 600.0);
    }

    #[test]
    fn test_hexagon_vertices_lie_on_the_radius() {
        let center = pos2(100.0, 100.0);
        let points = hexagon_points(center, 30.0);
        for p in points {
            let d = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert!((d - 30.0).abs() < 1e-3);
        }
        // Vertex 0 sits at angle zero, vertex 3 diametrically opposite.
        assert!((points[0].x - 130.0).abs() < 1e-3);
        assert!((points[3].x - 70.0).abs() < 1e-3);
    }

    #[test]
    fn test_world_tiling_alternates_band_offsets() {
        let centers: Vec<(f32, f32)> = tile_world(10.0, 5.0).collect();

        let even: Vec<_> = centers.iter().filter(|(_, z)| *z == 0.0).collect();
        let odd: Vec<_> = centers.iter().filter(|(_, z)| *z == 1.5).collect();
        assert!(even.iter().any(|(x, _)| *x == 0.0));
        assert!(odd.iter().any(|(x, _)| *x == 0.875));
    }

    #[test]
    fn test_world_tiling_covers_the_extent() {
        let centers: Vec<(f32, f32)> = tile_world(10.0, 5.0).collect();
        let min_x = centers.iter().map(|(x, _)| *x).fold(f32::MAX, f32::min);
        let max_x = centers.iter().map(|(x, _)| *x).fold(f32::MIN, f32::max);
        let max_z = centers.iter().map(|(_, z)| *z).fold(f32::MIN, f32::max);
        assert!(min_x <= -10.0);
        assert!(max_x >= 10.0);
        assert!(max_z >= 5.0);
    }
}
