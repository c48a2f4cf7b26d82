use anyhow::{anyhow, Result};
use log::{debug, info};

use tictactoe_ai::*;

mod terminal;

fn main() -> Result<()> {
    env_logger::init();

    let mut board = Board::new(BOARD_SIZE);
    // the lines never change, so one solver serves the whole game
    let mut solver = Solver::new(BOARD_SIZE);
    let mut player = Player::PlayerOne;

    // game loop
    loop {
        terminal::display(&board)?;

        match solver.state(&board) {
            GameState::Playing => {
                solver.node_count = 0;
                let (score, next_move) = solver
                    .score(&mut board, player)
                    .ok_or_else(|| anyhow!("no empty cell left for {:?}", player))?;
                debug!(
                    "{:?} ({}) plays cell {}, score {}, {} positions searched",
                    player,
                    player.glyph(),
                    next_move,
                    score,
                    solver.node_count
                );

                board.play_checked(next_move, player)?;
                player = player.other();

                std::thread::sleep(MOVE_DELAY);
            }

            // end states
            state => {
                terminal::display_outcome(state)?;
                info!("game over after {} moves: {:?}", board.num_moves(), state);
                break;
            }
        }
    }
    Ok(())
}
