use super::board::{Board, CellCoords, Sector};

/// The sub-board the opponent is sent to: the local position of the last move
/// becomes the next sector coordinate. No emptiness check here; a full target
/// would mean the game already ended.
pub fn next_sector(last_move: usize) -> Sector {
    let coords = CellCoords::from_index(last_move);
    Sector::new(coords.local_row, coords.local_col)
}

/// Cells the next mover may take. Before the first move of a game every
/// empty cell is open.
pub fn legal_moves(board: &Board, last_move: Option<usize>) -> Vec<usize> {
    match last_move {
        Some(last_move) => board.empty_cells_in(next_sector(last_move)),
        None => board.empty_cells(),
    }
}
