//! Random barrier placement.

use pathviz_paths::{Board, CellState};
use rand::Rng;

/// Turn each empty cell of `board` into a barrier with probability
/// `density`, clamped to `[0, 1]`. Border cells and the markers are never
/// touched. Returns the number of barriers added.
pub fn scatter<R: Rng + ?Sized>(board: &mut Board, density: f64, rng: &mut R) -> usize {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let cells: Vec<_> = board
        .grid()
        .cells()
        .filter(|&p| board.cell_state(p) == CellState::Empty)
        .collect();
    let mut added = 0;
    for p in cells {
        if rng.random_bool(density) && matches!(board.add_barrier(p), Ok(true)) {
            added += 1;
        }
    }
    log::debug!("scattered {added} barriers at density {density}");
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Point;
    use pathviz_paths::BoardConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board() -> Board {
        Board::new(BoardConfig {
            start: Some(Point::new(1, 1)),
            end: Some(Point::new(10, 6)),
            ..BoardConfig::with_cells(12, 8)
        })
        .unwrap()
    }

    #[test]
    fn full_density_fills_everything_but_markers() {
        let mut b = board();
        let n = scatter(&mut b, 1.0, &mut StdRng::seed_from_u64(1));
        // 10x6 interior minus the two markers.
        assert_eq!(n, 58);
        assert_eq!(b.cell_state(Point::new(1, 1)), CellState::Start);
        assert_eq!(b.cell_state(Point::new(10, 6)), CellState::End);
    }

    #[test]
    fn zero_density_adds_nothing() {
        let mut b = board();
        assert_eq!(scatter(&mut b, 0.0, &mut StdRng::seed_from_u64(1)), 0);
        assert_eq!(scatter(&mut b, -3.0, &mut StdRng::seed_from_u64(1)), 0);
        assert_eq!(scatter(&mut b, f64::NAN, &mut StdRng::seed_from_u64(1)), 0);
    }

    #[test]
    fn same_seed_same_board() {
        let (mut a, mut b) = (board(), board());
        scatter(&mut a, 0.3, &mut StdRng::seed_from_u64(7));
        scatter(&mut b, 0.3, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.obstacles(), b.obstacles());
    }
}
