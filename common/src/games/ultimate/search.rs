use super::board::{Board, Sector};
use super::sector_rule::next_sector;
use super::types::{Player, Score};
use super::win_detector::evaluate;

/// Per-search counters, threaded through the recursion as an accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub iterations: u64,
    pub depth_reached: usize,
}

impl SearchStats {
    fn record_visit(&mut self, depth: usize) {
        self.iterations += 1;
        if depth > self.depth_reached {
            self.depth_reached = depth;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub machine: Player,
    pub max_depth: usize,
}

impl SearchParams {
    pub fn new(machine: Player, max_depth: usize) -> Self {
        assert!(max_depth >= 1, "search depth must be at least 1");
        Self { machine, max_depth }
    }
}

/// Full-width minimax below a move that was just played at `last_move`.
///
/// Leaves are either decided sub-boards (scored from the machine's side) or
/// the depth budget, which yields `Score::Unknown`. There is no static
/// evaluation and no pruning.
pub fn minimax(
    board: Board,
    maximizing: bool,
    last_move: usize,
    depth: usize,
    params: &SearchParams,
    stats: &mut SearchStats,
) -> Score {
    stats.record_visit(depth);

    let outcome = evaluate(&board, params.machine, Sector::containing(last_move));
    if outcome.is_terminal() {
        return outcome.into();
    }

    if depth >= params.max_depth {
        return Score::Unknown;
    }

    let mover = if maximizing {
        params.machine
    } else {
        params.machine.opponent()
    };

    let mut value = if maximizing { Score::Lose } else { Score::Win };

    // An exhausted sector adds no children and `value` stays at its seed.
    for index in board.empty_cells_in(next_sector(last_move)) {
        let child = board.with_mark(index, mover.mark());
        let score = minimax(child, !maximizing, index, depth + 1, params, stats);
        value = if maximizing {
            value.max(score)
        } else {
            value.min(score)
        };
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ultimate::types::Mark;

    fn run(
        board: Board,
        maximizing: bool,
        last_move: usize,
        max_depth: usize,
    ) -> (Score, SearchStats) {
        let params = SearchParams::new(Player::X, max_depth);
        let mut stats = SearchStats::default();
        let score = minimax(board, maximizing, last_move, 1, &params, &mut stats);
        (score, stats)
    }

    #[test]
    fn test_completed_line_is_win_leaf() {
        let board = Board::from_marks(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        let (score, stats) = run(board, false, 2, 5);
        assert_eq!(score, Score::Win);
        assert_eq!(stats.iterations, 1);
        assert_eq!(stats.depth_reached, 1);
    }

    #[test]
    fn test_opponent_line_is_lose_leaf() {
        let board = Board::from_marks(&[(30, Mark::O), (40, Mark::O), (50, Mark::O)]);
        let (score, _) = run(board, true, 40, 5);
        assert_eq!(score, Score::Lose);
    }

    #[test]
    fn test_depth_cutoff_returns_unknown() {
        let board = Board::from_marks(&[(40, Mark::X)]);
        let (score, stats) = run(board, false, 40, 1);
        assert_eq!(score, Score::Unknown);
        assert_eq!(stats.iterations, 1);
    }

    #[test]
    fn test_iterations_count_every_node() {
        // X just played at 40 (sector (1,1), offset 4), so O answers in the
        // centre sector's eight free cells; each reply is a depth-2 cutoff.
        let board = Board::from_marks(&[(40, Mark::X)]);
        let (score, stats) = run(board, false, 40, 2);
        assert_eq!(score, Score::Unknown);
        assert_eq!(stats.iterations, 1 + 8);
        assert_eq!(stats.depth_reached, 2);
    }

    #[test]
    fn test_depth_bound_respected() {
        let board = Board::from_marks(&[(0, Mark::X)]);
        for max_depth in 1..=4 {
            let (_, stats) = run(board, false, 0, max_depth);
            assert!(stats.depth_reached <= max_depth);
            assert_eq!(stats.depth_reached, max_depth);
        }
    }

    #[test]
    fn test_opponent_takes_immediate_win() {
        // X plays at 0 (offset 0), which sends O to sector (0,0) where O already
        // holds offsets 3 and 4 and can complete the middle row at 5.
        let board = Board::from_marks(&[(9, Mark::O), (10, Mark::O), (0, Mark::X)]);
        let (score, _) = run(board, false, 0, 2);
        assert_eq!(score, Score::Lose);
    }

    #[test]
    fn test_maximizer_finds_forced_win() {
        // O just played at 9 (offset 3) which sends X to sector (1,0), where
        // X holds offsets 0 and 1 (cells 27 and 28) and can finish at 29.
        let board = Board::from_marks(&[(27, Mark::X), (28, Mark::X), (9, Mark::O)]);
        let (score, _) = run(board, true, 9, 2);
        assert_eq!(score, Score::Win);
    }

    #[test]
    fn test_exhausted_sector_returns_seed_value() {
        // Sector (0,2) is full without a line. O's move at 32 (offset 2 of the
        // centre sector) routes the next move into it.
        let filled = [
            (6, Mark::X),
            (7, Mark::O),
            (8, Mark::X),
            (15, Mark::X),
            (16, Mark::O),
            (17, Mark::O),
            (24, Mark::O),
            (25, Mark::X),
            (26, Mark::X),
        ];
        let mut marks = filled.to_vec();
        marks.push((32, Mark::O));
        let board = Board::from_marks(&marks);

        let (max_score, _) = run(board, true, 32, 5);
        assert_eq!(max_score, Score::Lose);
        let (min_score, _) = run(board, false, 32, 5);
        assert_eq!(min_score, Score::Win);
    }
}
