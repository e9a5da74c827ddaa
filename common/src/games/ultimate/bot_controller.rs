use super::board::{Board, CENTER_OFFSET, CORNER_OFFSETS, CellCoords};
use super::search::{SearchParams, SearchStats, minimax};
use super::sector_rule::legal_moves;
use super::types::{Player, Score};
use crate::games::SessionRng;

pub struct BotInput {
    pub board: Board,
    pub last_move: Option<usize>,
    pub machine: Player,
    pub max_depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateScore {
    pub index: usize,
    pub local_offset: usize,
    pub score: Score,
}

/// Snapshot handed to the observer after each root candidate is scored.
#[derive(Debug, Clone, Copy)]
pub struct SearchProgress {
    pub candidate: CandidateScore,
    pub completed: usize,
    pub total: usize,
    pub best_score: Score,
    pub stats: SearchStats,
}

impl SearchProgress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed as f64 / self.total as f64
    }
}

pub trait SearchObserver {
    fn on_candidate_scored(&mut self, progress: &SearchProgress);

    /// Checked between root candidates; returning true stops the search and
    /// the choice is made among the candidates scored so far.
    fn is_cancelled(&self) -> bool {
        false
    }
}

pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_candidate_scored(&mut self, _progress: &SearchProgress) {}
}

impl<F> SearchObserver for F
where
    F: FnMut(&SearchProgress),
{
    fn on_candidate_scored(&mut self, progress: &SearchProgress) {
        self(progress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotDecision {
    pub index: usize,
    pub best_score: Score,
    pub candidates: Vec<CandidateScore>,
    pub stats: SearchStats,
    pub cancelled: bool,
}

pub fn calculate_move(
    input: &BotInput,
    rng: &mut SessionRng,
    observer: &mut impl SearchObserver,
) -> Option<BotDecision> {
    match input.last_move {
        Some(last_move) => calculate_minimax_move(input, last_move, rng, observer),
        None => calculate_opening_move(input, rng),
    }
}

/// Opening with no prior move: any empty cell, uniformly, without searching.
fn calculate_opening_move(input: &BotInput, rng: &mut SessionRng) -> Option<BotDecision> {
    let available_moves = legal_moves(&input.board, None);
    let &index = rng.pick(&available_moves)?;

    Some(BotDecision {
        index,
        best_score: Score::Unknown,
        candidates: Vec::new(),
        stats: SearchStats::default(),
        cancelled: false,
    })
}

fn calculate_minimax_move(
    input: &BotInput,
    last_move: usize,
    rng: &mut SessionRng,
    observer: &mut impl SearchObserver,
) -> Option<BotDecision> {
    let available_moves = legal_moves(&input.board, Some(last_move));
    if available_moves.is_empty() {
        return None;
    }

    let params = SearchParams::new(input.machine, input.max_depth);
    let mut stats = SearchStats::default();
    let mut candidates = Vec::with_capacity(available_moves.len());
    let mut best_score = Score::Lose;
    let mut cancelled = false;

    for &index in &available_moves {
        let board = input.board.with_mark(index, input.machine.mark());
        let score = minimax(board, false, index, 1, &params, &mut stats);

        if score > best_score {
            best_score = score;
        }

        let candidate = CandidateScore {
            index,
            local_offset: CellCoords::from_index(index).local_offset(),
            score,
        };
        candidates.push(candidate);

        observer.on_candidate_scored(&SearchProgress {
            candidate,
            completed: candidates.len(),
            total: available_moves.len(),
            best_score,
            stats,
        });

        if candidates.len() < available_moves.len() && observer.is_cancelled() {
            cancelled = true;
            break;
        }
    }

    let finalists = pick_finalists(&candidates, best_score);
    let &index = rng.pick(&finalists)?;

    Some(BotDecision {
        index,
        best_score,
        candidates,
        stats,
        cancelled,
    })
}

/// Best-scoring candidates, narrowed to the centre cell if it is among them,
/// otherwise to the corners if any are.
fn pick_finalists(candidates: &[CandidateScore], best_score: Score) -> Vec<usize> {
    let best: Vec<&CandidateScore> = candidates
        .iter()
        .filter(|c| c.score == best_score)
        .collect();

    if let Some(center) = best.iter().find(|c| c.local_offset == CENTER_OFFSET) {
        return vec![center.index];
    }

    let corners: Vec<usize> = best
        .iter()
        .filter(|c| CORNER_OFFSETS.contains(&c.local_offset))
        .map(|c| c.index)
        .collect();
    if !corners.is_empty() {
        return corners;
    }

    best.iter().map(|c| c.index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ultimate::board::Sector;
    use crate::games::ultimate::types::Mark;

    fn input(board: Board, last_move: Option<usize>, max_depth: usize) -> BotInput {
        BotInput {
            board,
            last_move,
            machine: Player::X,
            max_depth,
        }
    }

    fn decide(board: Board, last_move: Option<usize>, max_depth: usize, seed: u64) -> BotDecision {
        let mut rng = SessionRng::new(seed);
        calculate_move(&input(board, last_move, max_depth), &mut rng, &mut NoopObserver).unwrap()
    }

    #[test]
    fn test_completes_line_with_depth_one() {
        // O's move at 27 (offset 0 of sector (1,0)) sends X to sector (0,0)
        // where X already holds cells 0 and 1.
        let board = Board::from_marks(&[(0, Mark::X), (1, Mark::X), (27, Mark::O)]);
        let decision = decide(board, Some(27), 1, 3);

        assert_eq!(decision.index, 2);
        assert_eq!(decision.best_score, Score::Win);
        assert!(!decision.cancelled);
    }

    #[test]
    fn test_shallow_search_prefers_center() {
        let board = Board::from_marks(&[(30, Mark::O)]);
        let decision = decide(board, Some(30), 1, 11);

        assert_eq!(decision.candidates.len(), 9);
        assert!(decision.candidates.iter().all(|c| c.score == Score::Unknown));
        assert_eq!(decision.best_score, Score::Unknown);
        assert_eq!(decision.index, Sector::new(0, 0).cell(CENTER_OFFSET));
    }

    #[test]
    fn test_shallow_search_falls_back_to_corners() {
        // Centre of sector (0,0) is taken, so the tie is broken among corners.
        let board = Board::from_marks(&[(10, Mark::O), (30, Mark::O)]);
        let corners: Vec<usize> = CORNER_OFFSETS
            .iter()
            .map(|&offset| Sector::new(0, 0).cell(offset))
            .collect();

        for seed in 0..16 {
            let decision = decide(board, Some(30), 1, seed);
            assert!(corners.contains(&decision.index));
        }
    }

    #[test]
    fn test_shallow_search_falls_back_to_edges() {
        let board = Board::from_marks(&[
            (0, Mark::O),
            (2, Mark::X),
            (10, Mark::X),
            (18, Mark::O),
            (20, Mark::O),
            (30, Mark::O),
        ]);
        for seed in 0..16 {
            let decision = decide(board, Some(30), 1, seed);
            assert!([1, 9, 11, 19].contains(&decision.index));
        }
    }

    #[test]
    fn test_pick_finalists_only_best_scores() {
        let candidates = [
            CandidateScore {
                index: 0,
                local_offset: 0,
                score: Score::Unknown,
            },
            CandidateScore {
                index: 1,
                local_offset: 1,
                score: Score::Tie,
            },
            CandidateScore {
                index: 10,
                local_offset: 4,
                score: Score::Unknown,
            },
        ];
        assert_eq!(pick_finalists(&candidates, Score::Tie), vec![1]);
        assert_eq!(pick_finalists(&candidates, Score::Unknown), vec![10]);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::from_marks(&[(10, Mark::O), (30, Mark::O)]);
        let first = decide(board, Some(30), 3, 99);
        for _ in 0..4 {
            let again = decide(board, Some(30), 3, 99);
            assert_eq!(again.index, first.index);
            assert_eq!(again.stats, first.stats);
        }
    }

    #[test]
    fn test_observer_sees_each_candidate() {
        let board = Board::from_marks(&[(30, Mark::O)]);
        let mut seen = Vec::new();
        let mut observer = |progress: &SearchProgress| {
            seen.push((progress.candidate.index, progress.completed, progress.total));
        };
        let mut rng = SessionRng::new(5);
        let decision = calculate_move(&input(board, Some(30), 2), &mut rng, &mut observer).unwrap();

        assert_eq!(seen.len(), 9);
        assert_eq!(seen.first(), Some(&(0, 1, 9)));
        assert_eq!(seen.last(), Some(&(20, 9, 9)));
        assert!(decision.stats.depth_reached <= 2);
        assert!(decision.stats.iterations >= 9);
    }

    struct StopAfter {
        limit: usize,
        seen: usize,
    }

    impl SearchObserver for StopAfter {
        fn on_candidate_scored(&mut self, _progress: &SearchProgress) {
            self.seen += 1;
        }

        fn is_cancelled(&self) -> bool {
            self.seen >= self.limit
        }
    }

    #[test]
    fn test_cancellation_stops_between_candidates() {
        let board = Board::from_marks(&[(30, Mark::O)]);
        let mut observer = StopAfter { limit: 3, seen: 0 };
        let mut rng = SessionRng::new(5);
        let decision = calculate_move(&input(board, Some(30), 2), &mut rng, &mut observer).unwrap();

        assert!(decision.cancelled);
        assert_eq!(decision.candidates.len(), 3);
        assert!(decision.candidates.iter().any(|c| c.index == decision.index));
    }

    #[test]
    fn test_opening_move_anywhere() {
        let board = Board::new();
        let decision = decide(board, None, 5, 8);
        assert!(decision.index < 81);
        assert!(decision.candidates.is_empty());
        assert_eq!(decision.stats, SearchStats::default());
    }
}
