use super::board::{Board, Sector};
use super::types::{GameOutcome, Mark, Player};

/// Rows, columns, then diagonals, as local offsets within a sub-board.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [6, 4, 2],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

/// Judges a single sub-board. Any decided sub-board decides the whole game,
/// so this never looks past `sector`.
pub fn evaluate(board: &Board, perspective: Player, sector: Sector) -> GameOutcome {
    evaluate_with_line(board, perspective, sector).0
}

pub fn evaluate_with_line(
    board: &Board,
    perspective: Player,
    sector: Sector,
) -> (GameOutcome, Option<WinningLine>) {
    if let Some(line) = find_line(board, sector) {
        let outcome = if line.mark == perspective.mark() {
            GameOutcome::Win
        } else {
            GameOutcome::Lose
        };
        return (outcome, Some(line));
    }

    let has_empty = sector
        .cells()
        .into_iter()
        .any(|index| board.get(index) == Mark::Empty);

    if has_empty {
        (GameOutcome::InProgress, None)
    } else {
        (GameOutcome::Tie, None)
    }
}

fn find_line(board: &Board, sector: Sector) -> Option<WinningLine> {
    WIN_PATTERNS.iter().find_map(|&pattern| {
        let cells = pattern.map(|offset| sector.cell(offset));
        let mark = board.get(cells[0]);
        if mark != Mark::Empty && board.get(cells[1]) == mark && board.get(cells[2]) == mark {
            Some(WinningLine { mark, cells })
        } else {
            None
        }
    })
}
