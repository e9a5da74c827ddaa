use common::ultimate::{BotDecision, GameSession, GameStatus, Mark, Participant, SearchProgress};

const SECTOR_RULE: &str = "---------+----------+---------";

/// Board with sector separators; legal cells show their index so the human
/// can type it.
pub fn render_board(session: &GameSession) -> String {
    let board = session.board();
    let legal = match session.current_participant() {
        Participant::Human => session.legal_moves(),
        Participant::Machine => Vec::new(),
    };
    let mut out = String::new();

    for row in 0..9 {
        if row > 0 && row % 3 == 0 {
            out.push_str(SECTOR_RULE);
            out.push('\n');
        }
        let mut cells = Vec::with_capacity(9);
        for col in 0..9 {
            let index = row * 9 + col;
            let cell = match board.get(index) {
                Mark::Empty if legal.contains(&index) => format!("{:>2}", index),
                Mark::Empty => " .".to_string(),
                mark => format!(" {}", mark.symbol()),
            };
            cells.push(cell);
        }
        out.push_str(&format!(
            "{} | {} | {}\n",
            cells[0..3].join(" "),
            cells[3..6].join(" "),
            cells[6..9].join(" ")
        ));
    }
    out
}

pub fn render_scores(session: &GameSession) -> String {
    let tally = session.scoreboard();
    format!(
        "Human {}  |  Draws {}  |  Machine {}",
        tally.human_wins, tally.ties, tally.machine_wins
    )
}

pub fn render_status(session: &GameSession) -> String {
    let human = session.player_of(Participant::Human);
    match session.status() {
        GameStatus::InProgress => match session.current_participant() {
            Participant::Human => match session.required_sector() {
                Some(sector) => format!("Your move ({}) in sector {}", human, sector),
                None => format!("Your move ({}) anywhere", human),
            },
            Participant::Machine => "Machine is thinking...".to_string(),
        },
        GameStatus::Won {
            winner: Participant::Human,
            line,
        } => {
            format!("Human player WINS! Line {:?}", line.cells)
        }
        GameStatus::Won {
            winner: Participant::Machine,
            line,
        } => {
            format!("Machine player WINS! Line {:?}", line.cells)
        }
        GameStatus::Tie => "It's a TIE!".to_string(),
    }
}

pub fn render_progress(progress: &SearchProgress) -> String {
    format!(
        "  [{:>3.0}%] cell {:>2} (offset {}) -> {:<4} iterations {}",
        progress.fraction() * 100.0,
        progress.candidate.index,
        progress.candidate.local_offset,
        progress.candidate.score.label(),
        progress.stats.iterations
    )
}

pub fn render_decision(decision: &BotDecision) -> String {
    format!(
        "Machine plays {}  (iterations {}, max depth {}, best score {}{})",
        decision.index,
        decision.stats.iterations,
        decision.stats.depth_reached,
        decision.best_score,
        if decision.cancelled { ", search cut short" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::SessionRng;
    use common::ultimate::SessionSettings;

    #[test]
    fn test_board_marks_legal_cells() {
        let mut session = GameSession::new(SessionSettings::default(), SessionRng::new(1)).unwrap();
        session.play_human_move(40).unwrap();

        let rendered = render_board(&session);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[3], SECTOR_RULE);
        // Row 4 holds the centre cell, now taken by the human's O.
        assert!(lines[5].contains(" O"));
        // Machine is to move, so no cell is offered.
        assert!(!rendered.contains("30"));
    }

    #[test]
    fn test_status_mentions_sector() {
        let mut session = GameSession::new(SessionSettings::default(), SessionRng::new(1)).unwrap();
        assert_eq!(render_status(&session), "Your move (O) anywhere");
        session.start_new_game(Participant::Machine);
        assert_eq!(render_status(&session), "Machine is thinking...");
    }

    #[test]
    fn test_scores_line() {
        let session = GameSession::new(SessionSettings::default(), SessionRng::new(1)).unwrap();
        assert_eq!(render_scores(&session), "Human 0  |  Draws 0  |  Machine 0");
    }
}
