mod board;
mod bot_controller;
mod error;
mod search;
mod sector_rule;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{
    BOARD_CELLS, Board, CENTER_OFFSET, CORNER_OFFSETS, CellCoords, SECTOR_CELLS, Sector,
    is_valid_index,
};
pub use bot_controller::{
    BotDecision, BotInput, CandidateScore, NoopObserver, SearchObserver, SearchProgress,
    calculate_move,
};
pub use error::{MoveRejection, SettingsError};
pub use search::{SearchParams, SearchStats, minimax};
pub use sector_rule::{legal_moves, next_sector};
pub use session::{GameSession, GameStatus, MoveReport, Scoreboard};
pub use settings::{
    DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH, SessionSettings,
    validate_search_depth,
};
pub use types::{FirstPlayerMode, GameOutcome, Mark, Participant, Player, Score};
pub use win_detector::{WIN_PATTERNS, WinningLine, evaluate, evaluate_with_line};
