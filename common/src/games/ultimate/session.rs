use super::board::{Board, Sector, is_valid_index};
use super::bot_controller::{BotDecision, BotInput, SearchObserver, calculate_move};
use super::error::{MoveRejection, SettingsError};
use super::sector_rule::{legal_moves, next_sector};
use super::settings::{SessionSettings, validate_search_depth};
use super::types::{FirstPlayerMode, GameOutcome, Participant, Player};
use super::win_detector::{WinningLine, evaluate_with_line};
use crate::games::SessionRng;
use crate::{debug_log, log};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub machine_wins: u32,
    pub human_wins: u32,
    pub ties: u32,
}

impl Scoreboard {
    fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won {
                winner: Participant::Machine,
                ..
            } => self.machine_wins += 1,
            GameStatus::Won {
                winner: Participant::Human,
                ..
            } => self.human_wins += 1,
            GameStatus::Tie => self.ties += 1,
            GameStatus::InProgress => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won {
        winner: Participant,
        line: WinningLine,
    },
    Tie,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// What a presentation layer needs after one accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub participant: Participant,
    pub index: usize,
    pub move_number: usize,
    pub board: Board,
    pub status: GameStatus,
    pub decision: Option<BotDecision>,
}

pub struct GameSession {
    settings: SessionSettings,
    board: Board,
    current: Participant,
    first: Participant,
    move_number: usize,
    last_move: Option<usize>,
    history: Vec<usize>,
    status: GameStatus,
    scoreboard: Scoreboard,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(settings: SessionSettings, rng: SessionRng) -> Result<Self, SettingsError> {
        settings.check()?;

        let mut session = Self {
            settings,
            board: Board::new(),
            current: Participant::Human,
            first: Participant::Human,
            move_number: 1,
            last_move: None,
            history: Vec::new(),
            status: GameStatus::InProgress,
            scoreboard: Scoreboard::default(),
            rng,
        };

        let first = session.resolve_first_player(session.settings.first_player);
        session.start_new_game(first);
        Ok(session)
    }

    pub fn resolve_first_player(&mut self, mode: FirstPlayerMode) -> Participant {
        match mode {
            FirstPlayerMode::Human => Participant::Human,
            FirstPlayerMode::Machine => Participant::Machine,
            FirstPlayerMode::Random => {
                if self.rng.random_bool() {
                    Participant::Human
                } else {
                    Participant::Machine
                }
            }
        }
    }

    /// Clears the board and starts over; tallies carry across games.
    pub fn start_new_game(&mut self, first: Participant) {
        self.board = Board::new();
        self.current = first;
        self.first = first;
        self.move_number = 1;
        self.last_move = None;
        self.history.clear();
        self.status = GameStatus::InProgress;

        log!(
            "New game: {} moves first, machine plays {}, search depth {}, seed {}",
            first,
            self.settings.machine_player,
            self.settings.search_depth,
            self.rng.seed()
        );
    }

    /// Zeroes the tallies and starts a fresh game with the configured opener.
    pub fn reset(&mut self) {
        self.scoreboard = Scoreboard::default();
        let first = self.resolve_first_player(self.settings.first_player);
        self.start_new_game(first);
    }

    pub fn set_search_depth(&mut self, depth: usize) -> Result<(), SettingsError> {
        validate_search_depth(depth)?;
        self.settings.search_depth = depth;
        debug_log!("Search depth set to {}", depth);
        Ok(())
    }

    pub fn validate_human_move(&self, index: usize) -> Result<(), MoveRejection> {
        if self.status.is_over() {
            return Err(MoveRejection::GameOver);
        }
        if self.current != Participant::Human {
            return Err(MoveRejection::NotYourTurn {
                expected: self.current,
            });
        }
        if !is_valid_index(index) {
            return Err(MoveRejection::OutOfBounds { index });
        }
        if !self.board.is_empty_cell(index) {
            return Err(MoveRejection::Occupied { index });
        }
        if let Some(required) = self.required_sector()
            && Sector::containing(index) != required
        {
            return Err(MoveRejection::WrongSector { index, required });
        }
        Ok(())
    }

    pub fn play_human_move(&mut self, index: usize) -> Result<MoveReport, MoveRejection> {
        self.validate_human_move(index)?;
        Ok(self.apply_move(index, None))
    }

    /// Runs the move selector on the calling thread and plays its choice.
    pub fn play_machine_move(
        &mut self,
        observer: &mut impl SearchObserver,
    ) -> Result<MoveReport, MoveRejection> {
        if self.status.is_over() {
            return Err(MoveRejection::GameOver);
        }
        if self.current != Participant::Machine {
            return Err(MoveRejection::NotYourTurn {
                expected: self.current,
            });
        }

        let input = BotInput {
            board: self.board,
            last_move: self.last_move,
            machine: self.settings.machine_player,
            max_depth: self.settings.search_depth,
        };
        let decision =
            calculate_move(&input, &mut self.rng, observer).ok_or(MoveRejection::NoLegalMoves)?;

        log!(
            "Machine chose {} (best score {}, {} iterations, depth reached {}{})",
            decision.index,
            decision.best_score,
            decision.stats.iterations,
            decision.stats.depth_reached,
            if decision.cancelled { ", cancelled" } else { "" }
        );

        let index = decision.index;
        Ok(self.apply_move(index, Some(decision)))
    }

    fn apply_move(&mut self, index: usize, decision: Option<BotDecision>) -> MoveReport {
        let participant = self.current;
        let player = self.player_of(participant);
        let move_number = self.move_number;

        self.board.place(index, player.mark());
        self.last_move = Some(index);
        self.history.push(index);
        debug_log!("Move {}: {} ({}) played {}", move_number, participant, player, index);

        let (outcome, line) = evaluate_with_line(&self.board, player, Sector::containing(index));
        self.status = match (outcome, line) {
            (GameOutcome::Win, Some(line)) => GameStatus::Won {
                winner: participant,
                line,
            },
            (GameOutcome::Lose, Some(line)) => GameStatus::Won {
                winner: participant.other(),
                line,
            },
            (GameOutcome::Tie, _) => GameStatus::Tie,
            _ => GameStatus::InProgress,
        };

        if self.status.is_over() {
            self.scoreboard.record(&self.status);
            match self.status {
                GameStatus::Won { winner, line } => log!(
                    "Game over after {} moves: {} wins with {:?}",
                    move_number,
                    winner,
                    line.cells
                ),
                _ => log!("Game over after {} moves: tie", move_number),
            }
        } else {
            self.move_number += 1;
            self.current = participant.other();
        }

        MoveReport {
            participant,
            index,
            move_number,
            board: self.board,
            status: self.status,
            decision,
        }
    }

    pub fn player_of(&self, participant: Participant) -> Player {
        match participant {
            Participant::Machine => self.settings.machine_player,
            Participant::Human => self.settings.machine_player.opponent(),
        }
    }

    /// Cells the current mover may take; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.status.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.last_move)
    }

    /// `None` before the first move, when any sector is open.
    pub fn required_sector(&self) -> Option<Sector> {
        self.last_move.map(next_sector)
    }

    pub fn outcome_for(&self, participant: Participant) -> GameOutcome {
        match self.status {
            GameStatus::InProgress => GameOutcome::InProgress,
            GameStatus::Tie => GameOutcome::Tie,
            GameStatus::Won { winner, .. } if winner == participant => GameOutcome::Win,
            GameStatus::Won { .. } => GameOutcome::Lose,
        }
    }

    pub fn winner(&self) -> Option<Participant> {
        match self.status {
            GameStatus::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_participant(&self) -> Participant {
        self.current
    }

    pub fn first_participant(&self) -> Participant {
        self.first
    }

    pub fn move_number(&self) -> usize {
        self.move_number
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}
