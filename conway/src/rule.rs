// rule.rs - Conway's B3/S23 rule, shared by every grid strategy

use crate::grid::{Cell, Dimensions};

/// Moore neighborhood offsets `(dx, dy)`, center excluded.
#[rustfmt::skip]
pub const MOORE: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Next state of a cell given its current state and live-neighbor count.
pub fn next_state(is_alive: bool, neighbors: u8) -> bool {
    match (is_alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Moore neighbors of `cell`, clipped to `bounds` when one is given.
/// Neighbors past the edge of the `i64` range are skipped.
pub fn neighbors(cell: Cell, bounds: Option<Dimensions>) -> impl Iterator<Item = Cell> {
    MOORE
        .iter()
        .filter_map(move |&(dx, dy)| cell.checked_offset(dx, dy))
        .filter(move |&n| bounds.is_none_or(|dims| dims.contains(n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_survives_with_two_or_three() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
    }

    #[test]
    fn live_cell_dies_otherwise() {
        assert!(!next_state(true, 0)); // Underpopulation
        assert!(!next_state(true, 1));
        for n in 4..=8 {
            assert!(!next_state(true, n), "overcrowded with {n}");
        }
    }

    #[test]
    fn dead_cell_is_born_only_with_three() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3);
        }
    }

    #[test]
    fn moore_excludes_center_and_is_unique() {
        assert!(!MOORE.contains(&(0, 0)));
        let mut sorted = MOORE.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    #[test]
    fn neighbors_clip_at_corner() {
        let dims = Dimensions::new(5, 5).unwrap();
        let corner: Vec<_> = neighbors(Cell::new(0, 0), Some(dims)).collect();
        assert_eq!(corner.len(), 3);
        assert_eq!(neighbors(Cell::new(0, 0), None).count(), 8);
        assert_eq!(neighbors(Cell::new(2, 2), Some(dims)).count(), 8);
    }

    #[test]
    fn neighbors_stop_at_i64_edge() {
        assert_eq!(neighbors(Cell::new(i64::MAX, 0), None).count(), 5);
        assert_eq!(neighbors(Cell::new(i64::MIN, i64::MIN), None).count(), 3);
    }
}
