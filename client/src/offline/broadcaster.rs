use common::games::GameBroadcaster;
use common::games::tictactoe::{GameEvent, GameSnapshot};

use crate::ui::{describe_event, render_board, render_status};

/// Prints every state change straight to the terminal.
#[derive(Clone, Default)]
pub struct ConsoleBroadcaster;

impl ConsoleBroadcaster {
    pub fn new() -> Self {
        Self
    }
}

impl GameBroadcaster for ConsoleBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        println!();
        print!("{}", render_board(&snapshot));
        println!("{}", render_status(&snapshot));
    }

    async fn broadcast_event(&self, event: GameEvent) {
        if let Some(line) = describe_event(&event) {
            println!("{}", line);
        }
    }
}
