//! Winning lines of an N x N board

use crate::board::{Board, Player};

/// Every set of cell indices that wins the game when filled by one player
///
/// Built once per board size and shared by the whole search, it never
/// depends on the contents of a board.
#[derive(Clone, Debug)]
pub struct Lines {
    size: usize,
    lines: Vec<Vec<usize>>,
}

/// Generates the `2 * n + 2` winning lines of an `n` x `n` board
///
/// Rows come first (top to bottom), then columns (left to right), then the
/// main diagonal and finally the anti-diagonal.
pub fn generate_win_combinations(n: usize) -> Lines {
    let mut lines = Vec::with_capacity(2 * n + 2);

    for row in 0..n {
        lines.push((0..n).map(|column| row * n + column).collect());
    }
    for column in 0..n {
        lines.push((0..n).map(|row| row * n + column).collect());
    }
    lines.push((0..n).map(|i| i * n + i).collect());
    lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());

    Lines { size: n, lines }
}

impl Lines {
    /// The side length of the board these lines belong to
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.lines.iter().map(|line| line.as_slice())
    }

    /// Returns true if `player` holds every cell of at least one line
    pub fn has_won(&self, board: &Board, player: Player) -> bool {
        let target = player.cell();
        self.lines
            .iter()
            .any(|line| line.iter().all(|&index| board.get(index) == target))
    }
}

/// Returns true if `player` holds every cell of at least one of `lines`
pub fn has_won(board: &Board, player: Player, lines: &Lines) -> bool {
    lines.has_won(board, player)
}
