//! Game engine: the authoritative state machine.
//!
//! Owns the board, the active and next pieces, the bag queue, the score, and
//! the fall timer. The embedding loop drives it with `advance(dt)` for time
//! and `apply_command` for input, and drains the queued [`GameEvent`]s each
//! frame to feed display, sound, and highscore collaborators.
//!
//! The engine is single-threaded and performs no I/O; the two mutators must
//! not be called concurrently on the same value.

use blockdrop_types::{Command, Phase, PieceKind, RotationDir, SCORE_TABLE};

use crate::bag::BagQueue;
use crate::board::{Board, ClearedRows};
use crate::piece::Piece;
use crate::speed;

/// Events emitted by the engine, in emission order.
///
/// `FetchHighscore` and `SubmitHighscore` are request values: the engine
/// never talks to the network itself, it asks the surrounding loop to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece was committed to the board.
    Locked { kind: PieceKind },
    /// One or more rows were completed and removed (indices top to bottom).
    LinesCleared { rows: ClearedRows },
    /// The freshly spawned piece did not fit: terminal until reset.
    GameOver,
    /// Ask the highscore collaborator for the current stored value.
    FetchHighscore,
    /// Offer the final score to the highscore collaborator.
    SubmitHighscore { score: u32 },
}

/// Points for clearing `cleared` rows in a single lock.
///
/// Counts above 4 are unreachable with a single 4-cell piece; anything
/// unmapped scores 0.
pub fn score_for_rows(cleared: usize) -> u32 {
    SCORE_TABLE.get(cleared).copied().unwrap_or(0)
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    current: Piece,
    next: Piece,
    bag: BagQueue,
    score: u32,
    fall_timer_ms: u32,
    soft_drop: bool,
    phase: Phase,
    events: Vec<GameEvent>,
}

impl Engine {
    /// Create a fresh game with the given RNG seed.
    ///
    /// Emits `FetchHighscore` so the embedding loop can prime the display.
    pub fn new(seed: u32) -> Self {
        let mut bag = BagQueue::new(seed);
        let current = Piece::spawn(bag.next());
        let next = Piece::spawn(bag.next());
        Self {
            board: Board::new(),
            current,
            next,
            bag,
            score: 0,
            fall_timer_ms: 0,
            soft_drop: false,
            phase: Phase::Playing,
            events: vec![GameEvent::FetchHighscore],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next.kind
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    /// Current fall interval under the active soft-drop state.
    pub fn fall_interval_ms(&self) -> u32 {
        speed::interval_ms(self.score, self.soft_drop)
    }

    /// Apply one input command. Returns whether it changed anything.
    ///
    /// Illegal moves and rotations are not errors: the candidate simply
    /// fails the board check and the piece stays put.
    pub fn apply_command(&mut self, cmd: Command) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        match cmd {
            Command::MoveLeft => self.try_commit(self.current.moved(-1, 0)),
            Command::MoveRight => self.try_commit(self.current.moved(1, 0)),
            Command::RotateCw => self.try_commit(self.current.rotated(RotationDir::Cw)),
            Command::RotateCcw => self.try_commit(self.current.rotated(RotationDir::Ccw)),
            Command::SoftDropOn => {
                self.soft_drop = true;
                true
            }
            Command::SoftDropOff => {
                self.soft_drop = false;
                true
            }
            Command::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Advance game time by `dt_ms`.
    ///
    /// Accumulates into the fall timer and performs one fall-step per whole
    /// interval, so a long frame catches up instead of losing gravity. A
    /// blocked step runs the lock sequence.
    pub fn advance(&mut self, dt_ms: u32) {
        if self.phase == Phase::GameOver {
            return;
        }
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(dt_ms);
        loop {
            let interval = self.fall_interval_ms();
            if self.fall_timer_ms < interval {
                break;
            }
            self.fall_timer_ms -= interval;

            let down = self.current.moved(0, 1);
            if self.board.is_valid(&down) {
                self.current = down;
            } else {
                self.lock_current();
                if self.phase == Phase::GameOver {
                    break;
                }
            }
        }
    }

    /// Reinitialize: empty board, fresh bag, score 0, `Playing`.
    ///
    /// The only transition out of `GameOver`. The bag continues the RNG
    /// sequence rather than replaying the previous game.
    pub fn reset(&mut self) {
        *self = Self::new(self.bag.rng_state());
    }

    /// Drain all pending events in emission order.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    fn try_commit(&mut self, candidate: Piece) -> bool {
        if self.board.is_valid(&candidate) {
            self.current = candidate;
            true
        } else {
            false
        }
    }

    fn hard_drop(&mut self) {
        // Synchronous: drop to rest and lock in the same command.
        loop {
            let down = self.current.moved(0, 1);
            if self.board.is_valid(&down) {
                self.current = down;
            } else {
                break;
            }
        }
        self.lock_current();
    }

    /// Lock sequence shared by hard drop and blocked natural fall.
    fn lock_current(&mut self) {
        self.board.lock(&self.current);
        self.events.push(GameEvent::Locked {
            kind: self.current.kind,
        });

        let rows = self.board.clear_full_rows();
        if !rows.is_empty() {
            self.score = self.score.saturating_add(score_for_rows(rows.len()));
            self.events.push(GameEvent::LinesCleared { rows });
        }

        self.fall_timer_ms = 0;
        self.current = self.next;
        self.next = Piece::spawn(self.bag.next());

        if !self.board.is_valid(&self.current) {
            self.phase = Phase::GameOver;
            self.events.push(GameEvent::GameOver);
            self.events.push(GameEvent::SubmitHighscore { score: self.score });
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdrop_types::COLS;

    fn drain(engine: &mut Engine) -> Vec<GameEvent> {
        engine.drain_events().collect()
    }

    fn fill_row_except(engine: &mut Engine, y: i8, gap: &[i8]) {
        for x in 0..COLS as i8 {
            if !gap.contains(&x) {
                engine.board.set(x, y, Some(PieceKind::J));
            }
        }
    }

    #[test]
    fn new_engine_requests_the_stored_highscore() {
        let mut engine = Engine::new(1);
        assert_eq!(drain(&mut engine), vec![GameEvent::FetchHighscore]);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.phase(), Phase::Playing);
    }

    #[test]
    fn moves_commit_only_when_valid() {
        let mut engine = Engine::new(1);
        let x = engine.current().x;

        assert!(engine.apply_command(Command::MoveRight));
        assert_eq!(engine.current().x, x + 1);
        assert!(engine.apply_command(Command::MoveLeft));
        assert_eq!(engine.current().x, x);

        // Walk into the left wall; the piece stops without error.
        for _ in 0..COLS {
            engine.apply_command(Command::MoveLeft);
        }
        let stuck = engine.current();
        assert!(!engine.apply_command(Command::MoveLeft));
        assert_eq!(engine.current(), stuck);
    }

    #[test]
    fn rotation_against_a_wall_is_rejected_not_kicked() {
        let mut engine = Engine::new(1);
        // Find a seed whose opening piece is an I.
        let mut seed = 1;
        while engine.current().kind != PieceKind::I {
            seed += 1;
            engine = Engine::new(seed);
        }

        // Vertical I occupies only column x+2, so it can slide to x = -2.
        assert!(engine.apply_command(Command::RotateCw));
        while engine.apply_command(Command::MoveLeft) {}
        assert_eq!(engine.current().x, -2);

        // Rotating back to horizontal would need cells at x = -2..=1.
        let before = engine.current();
        assert!(!engine.apply_command(Command::RotateCw));
        assert_eq!(engine.current(), before);
    }

    #[test]
    fn advance_steps_once_per_whole_interval() {
        let mut engine = Engine::new(1);
        let y = engine.current().y;

        engine.advance(649);
        assert_eq!(engine.current().y, y, "no step before a full interval");
        engine.advance(1);
        assert_eq!(engine.current().y, y + 1);

        // Two intervals in one call are two steps.
        engine.advance(1300);
        assert_eq!(engine.current().y, y + 3);
    }

    #[test]
    fn soft_drop_shortens_the_interval() {
        let mut engine = Engine::new(1);
        let y = engine.current().y;

        engine.apply_command(Command::SoftDropOn);
        engine.advance(49);
        assert_eq!(engine.current().y, y);
        engine.advance(1);
        assert_eq!(engine.current().y, y + 1);

        engine.apply_command(Command::SoftDropOff);
        engine.advance(50);
        assert_eq!(engine.current().y, y + 1, "back to the slow interval");
    }

    #[test]
    fn hard_drop_locks_immediately_and_spawns_the_next_piece() {
        let mut engine = Engine::new(1);
        drain(&mut engine);
        let dropped = engine.current().kind;
        let upcoming = engine.next_kind();

        assert!(engine.apply_command(Command::HardDrop));

        let events = drain(&mut engine);
        assert_eq!(events, vec![GameEvent::Locked { kind: dropped }]);
        assert_eq!(engine.current().kind, upcoming);
        assert_eq!(engine.current(), Piece::spawn(upcoming));
        assert!(engine.board().cells().iter().any(|c| c.is_some()));
    }

    #[test]
    fn single_clear_scores_100_twice_not_300() {
        let mut engine = Engine::new(1);
        drain(&mut engine);

        // An O dropped at x=3 fills columns 4 and 5; leave exactly that gap.
        fill_row_except(&mut engine, 19, &[4, 5]);
        engine.current = Piece {
            kind: PieceKind::O,
            rotation: 0,
            x: 3,
            y: -2,
        };
        engine.apply_command(Command::HardDrop);
        assert_eq!(engine.score(), 100);

        let events = drain(&mut engine);
        assert_eq!(events[0], GameEvent::Locked { kind: PieceKind::O });
        match &events[1] {
            GameEvent::LinesCleared { rows } => assert_eq!(rows.as_slice(), &[19]),
            other => panic!("expected LinesCleared, got {other:?}"),
        }

        // Second single: the leftover O cells from row 18 landed on row 19.
        fill_row_except(&mut engine, 19, &[4, 5]);
        engine.current = Piece {
            kind: PieceKind::O,
            rotation: 0,
            x: 3,
            y: -2,
        };
        engine.apply_command(Command::HardDrop);
        assert_eq!(engine.score(), 200);
    }

    #[test]
    fn double_clear_scores_300() {
        let mut engine = Engine::new(1);
        fill_row_except(&mut engine, 18, &[4, 5]);
        fill_row_except(&mut engine, 19, &[4, 5]);
        engine.current = Piece {
            kind: PieceKind::O,
            rotation: 0,
            x: 3,
            y: -2,
        };
        engine.apply_command(Command::HardDrop);
        assert_eq!(engine.score(), 300);
    }

    #[test]
    fn triple_clear_scores_500() {
        let mut engine = Engine::new(1);
        for y in 17..20 {
            fill_row_except(&mut engine, y, &[6]);
        }
        // Vertical I at x=4 drops into the column-6 slot; its top cell lands
        // on row 16 and survives the clear.
        engine.current = Piece {
            kind: PieceKind::I,
            rotation: 1,
            x: 4,
            y: -2,
        };
        engine.apply_command(Command::HardDrop);
        assert_eq!(engine.score(), 500);
        assert_eq!(engine.board().get(6, 19), Some(Some(PieceKind::I)));
    }

    #[test]
    fn four_row_clear_scores_800_as_one_event() {
        let mut engine = Engine::new(1);
        drain(&mut engine);
        for y in 16..20 {
            fill_row_except(&mut engine, y, &[6]);
        }
        // Vertical I occupies column x+2; x=4 fills the gap at column 6.
        engine.current = Piece {
            kind: PieceKind::I,
            rotation: 1,
            x: 4,
            y: -2,
        };
        engine.apply_command(Command::HardDrop);
        assert_eq!(engine.score(), 800);

        let cleared: Vec<_> = drain(&mut engine)
            .into_iter()
            .filter(|e| matches!(e, GameEvent::LinesCleared { .. }))
            .collect();
        assert_eq!(cleared.len(), 1, "a four-row clear is one event, not four");
    }

    #[test]
    fn score_table_handles_unmapped_counts() {
        assert_eq!(score_for_rows(0), 0);
        assert_eq!(score_for_rows(1), 100);
        assert_eq!(score_for_rows(2), 300);
        assert_eq!(score_for_rows(3), 500);
        assert_eq!(score_for_rows(4), 800);
        assert_eq!(score_for_rows(5), 0);
    }

    #[test]
    fn blocked_spawn_ends_the_game_with_one_game_over_event() {
        let mut engine = Engine::new(1);
        drain(&mut engine);

        // The O spawn occupies (5, 0); a single blocker there is enough.
        engine.board.set(5, 0, Some(PieceKind::J));
        engine.next = Piece::spawn(PieceKind::O);
        // Drop a piece that never crosses the blocker on the way down.
        engine.current = Piece {
            kind: PieceKind::I,
            rotation: 0,
            x: 3,
            y: 10,
        };
        engine.apply_command(Command::HardDrop);

        assert_eq!(engine.phase(), Phase::GameOver);
        let events = drain(&mut engine);
        let game_overs = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver))
            .count();
        assert_eq!(game_overs, 1);
        assert!(events.contains(&GameEvent::SubmitHighscore { score: 0 }));

        // Terminal: commands and time no longer mutate anything.
        let frozen = engine.current();
        assert!(!engine.apply_command(Command::MoveLeft));
        assert!(!engine.apply_command(Command::HardDrop));
        engine.advance(10_000);
        assert_eq!(engine.current(), frozen);
        assert!(drain(&mut engine).is_empty());
    }

    #[test]
    fn reset_is_the_only_way_out_of_game_over() {
        let mut engine = Engine::new(1);
        engine.board.set(5, 0, Some(PieceKind::J));
        engine.next = Piece::spawn(PieceKind::O);
        engine.current = Piece {
            kind: PieceKind::I,
            rotation: 0,
            x: 3,
            y: 10,
        };
        engine.apply_command(Command::HardDrop);
        assert_eq!(engine.phase(), Phase::GameOver);

        engine.reset();
        assert_eq!(engine.phase(), Phase::Playing);
        assert_eq!(engine.score(), 0);
        assert!(engine.board().cells().iter().all(|c| c.is_none()));
        // Fresh game asks for the stored highscore again.
        assert!(drain(&mut engine).contains(&GameEvent::FetchHighscore));
    }

    #[test]
    fn lock_resets_the_fall_timer() {
        let mut engine = Engine::new(1);
        engine.fall_timer_ms = 400;
        engine.apply_command(Command::HardDrop);
        assert_eq!(engine.fall_timer_ms, 0);
    }

    #[test]
    fn natural_fall_to_the_floor_locks() {
        let mut engine = Engine::new(1);
        drain(&mut engine);
        // Enough time for any piece to reach the floor and lock.
        for _ in 0..40 {
            engine.advance(650);
        }
        let events = drain(&mut engine);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::Locked { .. })));
    }
}
