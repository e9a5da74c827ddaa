use crate::games::ultimate::{DEFAULT_SEARCH_DEPTH, FirstPlayerMode, Player, SessionSettings};

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            first_player: FirstPlayerMode::Human,
            machine_player: Player::X,
        }
    }
}
