//! Game state management for the Othello GUI

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Color, Pos};
use crate::engine::{Othello, Outcome};
use crate::rules::SlotChange;
use crate::search::{SearchResult, Searcher};

/// Smallest board offered on the settings screen
pub const MIN_UI_BOARD_SIZE: usize = 6;
/// Largest board offered on the settings screen
pub const MAX_UI_BOARD_SIZE: usize = 12;

/// Who plays White
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Human is Black, the engine answers as White
    #[default]
    Computer,
    /// Two humans share the board
    Friend,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Computer => "Play against the computer",
            GameMode::Friend => "Play against your friend",
        }
    }
}

/// Choices made before a match starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub size: usize,
    pub mode: GameMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: MIN_UI_BOARD_SIZE,
            mode: GameMode::default(),
        }
    }
}

impl Settings {
    /// Next board size, stopping at the largest
    pub fn increase_size(&mut self) {
        self.size = (self.size + 2).min(MAX_UI_BOARD_SIZE);
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<SearchResult>,
        start_time: Instant,
    },
}

/// Matches won per color across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub black: u32,
    pub white: u32,
}

impl Tally {
    fn record(&mut self, outcome: &Outcome) {
        match outcome.winner {
            Some(Color::Black) => self.black += 1,
            Some(Color::White) => self.white += 1,
            None => {}
        }
    }
}

/// Main game state
pub struct GameState {
    pub settings: Settings,
    pub engine: Othello,
    pub current_turn: Color,
    pub outcome: Option<Outcome>,
    pub tally: Tally,
    pub ai_state: AiState,
    pub last_ai_result: Option<SearchResult>,
    pub last_ai_time: Option<Duration>,
    pub message: Option<String>,
    /// Slots changed by the most recent move, filled by the engine callback
    changed: Rc<RefCell<Vec<SlotChange>>>,
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        let changed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changed);
        let engine = Othello::with_callback(settings.size, move |change| {
            sink.borrow_mut().push(change);
        });

        let state = Self {
            settings,
            engine,
            current_turn: Color::Black,
            outcome: None,
            tally: Tally::default(),
            ai_state: AiState::Idle,
            last_ai_result: None,
            last_ai_time: None,
            message: None,
            changed,
        };
        state.changed.borrow_mut().clear();
        state
    }

    /// Start another round on the same settings, keeping the tally
    pub fn new_round(&mut self) {
        self.engine.restart();
        self.changed.borrow_mut().clear();
        self.current_turn = Color::Black;
        self.outcome = None;
        self.ai_state = AiState::Idle;
        self.last_ai_result = None;
        self.last_ai_time = None;
        self.message = None;
    }

    /// Slots that changed color on the last move
    pub fn changed_slots(&self) -> Vec<Pos> {
        self.changed.borrow().iter().map(|c| c.pos).collect()
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.settings.mode {
            GameMode::Computer => self.current_turn == Color::Black,
            GameMode::Friend => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.outcome.is_none() && !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to play the clicked slot for the side to move
    pub fn try_place_piece(&mut self, pos: Pos) -> Result<(), String> {
        if self.outcome.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let row = usize::from(pos.row) + 1;
        let col = usize::from(pos.col) + 1;
        self.changed.borrow_mut().clear();
        self.engine
            .try_execute_move(self.current_turn, row, col)
            .map_err(|err| err.to_string())?;

        self.message = None;
        self.advance_turn();
        Ok(())
    }

    /// Hand the turn over, passing a side without moves and detecting the end
    fn advance_turn(&mut self) {
        let due = self.current_turn.opponent();
        match self.engine.next_to_move(due) {
            Some(color) => {
                if color != due {
                    self.message = Some(format!("{due} has no legal move and passes"));
                }
                self.current_turn = color;
            }
            None => {
                if let Some(outcome) = self.engine.outcome() {
                    self.tally.record(&outcome);
                    log::info!(
                        "match over: black {} white {} ({:?})",
                        outcome.black,
                        outcome.white,
                        outcome.winner
                    );
                    self.outcome = Some(outcome);
                }
            }
        }
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let position = self.engine.position().clone();
        let color = self.current_turn;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut searcher = Searcher::new();
            let result = searcher.search(&position, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((result, elapsed)) = result else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.last_ai_time = Some(elapsed);

        match result.best_move {
            Some(pos) => {
                self.changed.borrow_mut().clear();
                match self.engine.play(self.current_turn, pos) {
                    Ok(_) => self.advance_turn(),
                    Err(err) => self.message = Some(err.to_string()),
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
        self.last_ai_result = Some(result);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend_game(size: usize) -> GameState {
        GameState::new(Settings {
            size,
            mode: GameMode::Friend,
        })
    }

    #[test]
    fn test_increase_size_saturates() {
        let mut settings = Settings::default();
        let sizes: Vec<usize> = (0..5)
            .map(|_| {
                settings.increase_size();
                settings.size
            })
            .collect();
        assert_eq!(sizes, vec![8, 10, 12, 12, 12]);
    }

    #[test]
    fn test_click_plays_and_switches_turn() {
        let mut state = friend_game(6);
        assert!(state.changed_slots().is_empty());

        state.try_place_piece(Pos::new(1, 2)).unwrap();
        assert_eq!(state.current_turn, Color::White);
        assert_eq!(state.changed_slots(), vec![Pos::new(1, 2), Pos::new(2, 2)]);
    }

    #[test]
    fn test_illegal_click_reports_error() {
        let mut state = friend_game(6);
        assert!(state.try_place_piece(Pos::new(0, 0)).is_err());
        assert_eq!(state.current_turn, Color::Black);
        assert_eq!(state.engine.score(Color::Black), 2);
    }

    #[test]
    fn test_played_out_match_updates_tally() {
        let mut state = friend_game(6);
        while state.outcome.is_none() {
            let pos = state.engine.legal_moves(state.current_turn)[0];
            state.try_place_piece(pos).unwrap();
        }

        let outcome = state.outcome.unwrap();
        let wins = state.tally.black + state.tally.white;
        assert_eq!(wins, u32::from(outcome.winner.is_some()));
        assert!(state.try_place_piece(Pos::new(0, 0)).is_err());

        state.new_round();
        assert!(state.outcome.is_none());
        assert_eq!(state.engine.score(Color::Black), 2);
        assert_eq!(state.tally.black + state.tally.white, wins);
    }

    #[test]
    fn test_computer_answers_human() {
        let mut state = GameState::new(Settings::default());
        state.try_place_piece(Pos::new(1, 2)).unwrap();
        assert!(state.is_ai_turn());
        assert!(state.try_place_piece(Pos::new(0, 0)).is_err());

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
            state.check_ai_result();
        }

        assert!(!state.is_ai_thinking());
        assert!(state.last_ai_result.is_some());
        assert_eq!(state.engine.score(Color::Black) + state.engine.score(Color::White), 6);
        assert_eq!(state.current_turn, Color::Black);
    }
}
