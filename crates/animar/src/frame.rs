//! Frame-layout utilities: fitting world viewports to video dimensions.
//!
//! A video frame has a fixed pixel aspect ratio, but the world-coordinate
//! bounds of a scene rarely match it. These helpers widen a viewport to a
//! target ratio without cropping, and carve a viewport into a margin-aware
//! grid when several sub-scenes share one frame.

use crate::geometry::{Rectangle, Vector};

/// Grow `rect` symmetrically until its aspect ratio (width / height) equals
/// `aspect_ratio`. The rectangle only ever grows, never shrinks, so the
/// original region stays fully visible.
pub fn extend_to_aspect_ratio(rect: &mut Rectangle, aspect_ratio: f64) {
    let dx = ((aspect_ratio * rect.height() - rect.width()) / 2.0).max(0.0);
    let dy = ((rect.width() / aspect_ratio - rect.height()) / 2.0).max(0.0);
    rect.grow(dx, dy);
}

/// Grow `rect` to match the aspect ratio of `target`.
pub fn extend_to_match(rect: &mut Rectangle, target: &Rectangle) {
    extend_to_aspect_ratio(rect, target.aspect_ratio());
}

/// Split `rect` into a `columns` x `rows` grid of equally sized cells.
///
/// `outer_margin` is kept between the grid and all four edges of `rect`;
/// `inner_margin` between neighboring cells. The result is column-major:
/// `partition(..)[c][r]` is the cell in column `c` (left to right) and row
/// `r` (bottom to top).
#[must_use]
pub fn partition(
    rect: &Rectangle,
    columns: usize,
    rows: usize,
    outer_margin: f64,
    inner_margin: f64,
) -> Vec<Vec<Rectangle>> {
    let cell_width = (rect.width() - 2.0 * outer_margin - (columns as f64 - 1.0) * inner_margin)
        / columns as f64;
    let cell_height =
        (rect.height() - 2.0 * outer_margin - (rows as f64 - 1.0) * inner_margin) / rows as f64;

    let mut result = Vec::with_capacity(columns);
    let mut left = rect.min_x() + outer_margin;
    for _ in 0..columns {
        let mut column = Vec::with_capacity(rows);
        let mut bottom = rect.min_y() + outer_margin;
        for _ in 0..rows {
            column.push(Rectangle::by_corner_and_size(
                Vector::new(left, bottom),
                cell_width,
                cell_height,
            ));
            bottom += cell_height + inner_margin;
        }
        result.push(column);
        left += cell_width + inner_margin;
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_widens_tall_viewport() {
        let mut r = Rectangle::by_center_and_size(Vector::ZERO, 2.0, 4.0);
        extend_to_aspect_ratio(&mut r, 16.0 / 9.0);
        assert!((r.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
        assert_eq!(r.height(), 4.0);
        assert_eq!(r.center(), Vector::ZERO);
    }

    #[test]
    fn test_extend_heightens_wide_viewport() {
        let mut r = Rectangle::by_center_and_size(Vector::ZERO, 16.0, 2.0);
        extend_to_aspect_ratio(&mut r, 2.0);
        assert_eq!(r.width(), 16.0);
        assert_eq!(r.height(), 8.0);
    }

    #[test]
    fn test_extend_never_shrinks_matching_viewport() {
        let mut r = Rectangle::by_center_and_size(Vector::new(1.0, 1.0), 8.0, 4.0);
        let before = r;
        extend_to_aspect_ratio(&mut r, 2.0);
        assert_eq!(r, before);
    }

    #[test]
    fn test_extend_to_match_target() {
        let mut r = Rectangle::by_center_and_size(Vector::ZERO, 3.0, 3.0);
        let target = Rectangle::by_center_and_size(Vector::ZERO, 1920.0, 1080.0);
        extend_to_match(&mut r, &target);
        assert!((r.aspect_ratio() - 1920.0 / 1080.0).abs() < 1e-12);
    }

    #[test]
    fn test_partition_dimensions() {
        let r = Rectangle::by_corner_and_size(Vector::ZERO, 100.0, 50.0);
        let grid = partition(&r, 4, 2, 0.0, 0.0);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[0].len(), 2);
        assert_eq!(grid[0][0].width(), 25.0);
        assert_eq!(grid[0][0].height(), 25.0);
    }

    #[test]
    fn test_partition_margins() {
        let r = Rectangle::by_corner_and_size(Vector::ZERO, 32.0, 20.0);
        let grid = partition(&r, 3, 2, 1.0, 1.0);
        // width: 32 - 2*1 - 2*1 = 28 over 3 columns
        let expected_w = 28.0 / 3.0;
        // height: 20 - 2*1 - 1*1 = 17 over 2 rows
        let expected_h = 17.0 / 2.0;
        assert!((grid[0][0].width() - expected_w).abs() < 1e-12);
        assert!((grid[0][0].height() - expected_h).abs() < 1e-12);
        // First cell is inset by the outer margin.
        assert_eq!(grid[0][0].min_x(), 1.0);
        assert_eq!(grid[0][0].min_y(), 1.0);
        // Neighbor cells are separated by the inner margin.
        assert!((grid[1][0].min_x() - (1.0 + expected_w + 1.0)).abs() < 1e-12);
        assert!((grid[0][1].min_y() - (1.0 + expected_h + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_partition_cells_stay_inside() {
        let r = Rectangle::by_corner_and_size(Vector::new(-5.0, -5.0), 30.0, 30.0);
        let grid = partition(&r, 2, 3, 2.0, 1.0);
        for column in &grid {
            for cell in column {
                assert!(cell.min_x() >= r.min_x());
                assert!(cell.min_y() >= r.min_y());
                assert!(cell.max_x() <= r.max_x() + 1e-12);
                assert!(cell.max_y() <= r.max_y() + 1e-12);
            }
        }
    }
}
