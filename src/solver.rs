//! An agent to solve the game of Tic-Tac-Toe

use crate::{board::*, lines::*, WIN_SCORE};

/// An agent to solve Tic-Tac-Toe positions
///
/// # Notes
/// This agent runs a plain minimax search over every remaining assignment of
/// empty cells, with no pruning and no memoisation, so it is only practical on
/// boards up to 3x3
///
/// # Position Scoring
/// A position is scored from player one's point of view: `10` if player one
/// wins, `-10` if player two wins and `0` for a draw. Wins score the same no
/// matter how many moves away they are, so the search has no preference for
/// winning sooner or losing later
#[derive(Clone)]
pub struct Solver {
    lines: Lines,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` for a `size` x `size` board
    pub fn new(size: usize) -> Self {
        Self::with_lines(generate_win_combinations(size))
    }

    /// Creates a new `Solver` reusing an existing set of winning lines
    pub fn with_lines(lines: Lines) -> Self {
        Self {
            lines,
            node_count: 0,
        }
    }

    pub fn lines(&self) -> &Lines {
        &self.lines
    }

    /// Performs game tree search
    ///
    /// Returns the score of the position (see [Position Scoring]) with the
    /// maximizing player to move if `maximizing_turn` is set. The board is left
    /// exactly as it was passed in.
    ///
    /// [Position Scoring]: #position-scoring
    pub fn minimax(&mut self, board: &mut Board, maximizing_turn: bool) -> i32 {
        debug_assert_eq!(board.size(), self.lines.size());
        self.node_count += 1;

        if self.lines.has_won(board, Player::PlayerOne) {
            return WIN_SCORE;
        }
        if self.lines.has_won(board, Player::PlayerTwo) {
            return -WIN_SCORE;
        }
        if board.is_full() {
            return 0;
        }

        let mover = if maximizing_turn {
            Player::PlayerOne
        } else {
            Player::PlayerTwo
        };
        let mut best_score = if maximizing_turn { i32::MIN } else { i32::MAX };

        for index in 0..board.cells().len() {
            if !board.is_empty(index) {
                continue;
            }
            // the mark is lifted again when `placed` goes out of scope
            let mut placed = board.place_scoped(index, mover);
            let score = self.minimax(&mut placed, !maximizing_turn);

            best_score = if maximizing_turn {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        best_score
    }

    /// Finds the best move for `player` together with its score
    ///
    /// Ties are broken towards the lowest cell index. Returns `None` if the
    /// board has no empty cell.
    pub fn score(&mut self, board: &mut Board, player: Player) -> Option<(i32, usize)> {
        let maximizing = player.is_maximizing();
        let mut best: Option<(i32, usize)> = None;

        for index in 0..board.cells().len() {
            if !board.is_empty(index) {
                continue;
            }
            let score = {
                let mut placed = board.place_scoped(index, player);
                self.minimax(&mut placed, !maximizing)
            };

            // strict comparison keeps the earliest of equally good cells
            let improves = match best {
                None => true,
                Some((best_score, _)) if maximizing => score > best_score,
                Some((best_score, _)) => score < best_score,
            };
            if improves {
                best = Some((score, index));
            }
        }

        best
    }

    /// Finds the best cell for `player` to play, or `None` on a full board
    pub fn best_move(&mut self, board: &mut Board, player: Player) -> Option<usize> {
        self.score(board, player).map(|(_, index)| index)
    }

    /// Returns true if `player` holds a complete line on `board`
    pub fn has_won(&self, board: &Board, player: Player) -> bool {
        self.lines.has_won(board, player)
    }

    pub fn state(&self, board: &Board) -> GameState {
        board.state(&self.lines)
    }
}
