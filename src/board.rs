use anyhow::{anyhow, Result};

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::lines::Lines;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn glyph(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::PlayerOne => Player::PlayerOne.glyph(),
            Cell::PlayerTwo => Player::PlayerTwo.glyph(),
        }
    }
}

/// One of the two sides of the game
///
/// Player one moves first and is the maximizing side of the search,
/// player two is the minimizing side
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// The mark this player leaves on the board
    pub fn cell(&self) -> Cell {
        match self {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Player::PlayerOne => 'X',
            Player::PlayerTwo => 'O',
        }
    }

    pub fn is_maximizing(&self) -> bool {
        *self == Player::PlayerOne
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// A square board stored as a flat row-major array of cells
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Parses a board from a row-major string of `X`, `O` and `_`/`.`/` ` for empty cells
    ///
    /// Newlines, tabs and `/` may separate rows and are ignored. The number of
    /// cells must be a perfect square.
    pub fn from_str(notation: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(notation.len());
        for (position, character) in notation.chars().enumerate() {
            match character {
                'X' | 'x' => cells.push(Cell::PlayerOne),
                'O' | 'o' => cells.push(Cell::PlayerTwo),
                '_' | '.' | ' ' => cells.push(Cell::Empty),
                '/' | '\n' | '\r' | '\t' => {}
                _ => {
                    return Err(anyhow!(
                        "could not parse '{}' at position {} as a cell",
                        character,
                        position
                    ))
                }
            }
        }

        let size = (0..=cells.len())
            .find(|side| side * side >= cells.len())
            .unwrap_or(0);
        if size == 0 || size * size != cells.len() {
            return Err(anyhow!(
                "Invalid board, {} cells do not form a square",
                cells.len()
            ));
        }

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index].is_empty()
    }

    /// Indices of the empty cells in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    pub fn play_checked(&mut self, index: usize, player: Player) -> Result<()> {
        if index >= self.cells.len() {
            return Err(anyhow!(
                "Invalid move, cell {} out of range. Cells must be between 0 and {}",
                index,
                self.cells.len() - 1
            ));
        }
        if !self.is_empty(index) {
            return Err(anyhow!("Invalid move, cell {} occupied", index));
        }
        self.play(index, player);
        Ok(())
    }

    pub fn play(&mut self, index: usize, player: Player) {
        self.cells[index] = player.cell();
    }

    /// Places `player`'s mark on `index` for as long as the returned guard lives
    ///
    /// The cell is reset to empty when the guard is dropped, so the board is
    /// always restored on every exit path of whatever borrows it through the guard.
    pub fn place_scoped(&mut self, index: usize, player: Player) -> Placement<'_> {
        debug_assert!(self.is_empty(index), "cell {} is occupied", index);
        self.play(index, player);
        Placement { board: self, index }
    }

    pub fn state(&self, lines: &Lines) -> GameState {
        if lines.has_won(self, Player::PlayerOne) {
            GameState::PlayerOneWin
        } else if lines.has_won(self, Player::PlayerTwo) {
            GameState::PlayerTwoWin
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        }
    }
}

/// Returns true if no cell of the board is empty
pub fn is_full(board: &Board) -> bool {
    board.cells.iter().all(|cell| !cell.is_empty())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.size) {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A provisional move, undone when dropped
pub struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Placement<'_> {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Cell::Empty;
    }
}
