use common::games::GameBroadcaster;
use common::games::tictactoe::TicTacToeSession;
use common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::state::{ClientCommand, HELP_TEXT, parse_command};

/// Feeds commands from `input` into the session until `quit` or end of input.
pub async fn run_tictactoe_game<R, B>(
    input: R,
    session: &mut TicTacToeSession<B>,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    B: GameBroadcaster,
{
    session.start().await;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            ClientCommand::PlaceMark { row, col } => {
                if let Err(e) = session.request_move(row, col).await {
                    println!("{}", e);
                }
            }
            ClientCommand::Reset => session.reset().await,
            ClientCommand::SelectMode(mode) => session.select_mode(mode).await,
            ClientCommand::Help => println!("{}", HELP_TEXT),
            ClientCommand::Quit => {
                log!("Quit requested");
                break;
            }
        }
    }

    Ok(())
}
