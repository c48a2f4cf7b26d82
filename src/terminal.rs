use anyhow::Result;
use crossterm::{cursor::MoveTo, style::Print, QueueableCommand};

use std::io::{stdout, Write};

use tictactoe_ai::{Board, GameState};

/// Redraws the board over the previous one from the top left of the terminal
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    stdout
        .queue(MoveTo(0, 0))?
        .queue(Print(board.to_string()))?;
    stdout.flush()?;
    Ok(())
}

/// Prints the outcome line of a finished game, nothing while it is still being played
pub fn display_outcome(state: GameState) -> Result<()> {
    let outcome = match state {
        GameState::PlayerOneWin => "Winner: Player",
        GameState::PlayerTwoWin => "Winner: Opponent",
        GameState::Draw => "Tie!",
        GameState::Playing => return Ok(()),
    };

    let mut stdout = stdout();
    stdout.queue(Print(format!("\n{}\n", outcome)))?;
    stdout.flush()?;
    Ok(())
}
