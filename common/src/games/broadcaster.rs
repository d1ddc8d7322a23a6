use std::future::Future;

use crate::games::tictactoe::{GameEvent, GameSnapshot};

/// Outbound seam towards whatever renders the game.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_event(&self, event: GameEvent) -> impl Future<Output = ()> + Send;
}
