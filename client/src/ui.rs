use common::games::tictactoe::{GameEvent, GameMode, GameOutcome, GameSnapshot, GameStatus};

pub fn mode_label(mode: GameMode) -> &'static str {
    match mode {
        GameMode::HumanVsHuman => "human vs human",
        GameMode::HumanVsComputer => "human vs computer",
    }
}

pub fn render_board(snapshot: &GameSnapshot) -> String {
    let mut out = String::from("    0   1   2\n");
    for (row_index, row) in snapshot.board.rows().enumerate() {
        let cells: Vec<String> = row.iter().map(|mark| format!(" {} ", mark.symbol())).collect();
        out.push_str(&format!("{}  {}\n", row_index, cells.join("|")));
        if row_index < 2 {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

pub fn render_status(snapshot: &GameSnapshot) -> String {
    match snapshot.status {
        GameStatus::InProgress => format!(
            "[{}] {} to move",
            mode_label(snapshot.mode),
            snapshot.current_mark.symbol()
        ),
        GameStatus::Won(mark) => format!("[{}] {} won", mode_label(snapshot.mode), mark.symbol()),
        GameStatus::Draw => format!("[{}] draw", mode_label(snapshot.mode)),
    }
}

/// Board cells are printed from snapshots, so `CellMarked` has no line of its own.
pub fn describe_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::CellMarked { .. } => None,
        GameEvent::TurnChanged { mark, is_computer } => Some(if *is_computer {
            format!("Turn: {} (computer is thinking...)", mark.symbol())
        } else {
            format!("Turn: {}", mark.symbol())
        }),
        GameEvent::GameEnded { outcome, winning_line } => Some(match (outcome, winning_line) {
            (GameOutcome::Won(mark), Some(line)) => format!(
                "Player {} wins! ({},{}) to ({},{})",
                mark.symbol(),
                line.start.row,
                line.start.col,
                line.end.row,
                line.end.col
            ),
            (GameOutcome::Won(mark), None) => format!("Player {} wins!", mark.symbol()),
            (GameOutcome::Draw, _) => "It's a tie!".to_string(),
        }),
    }
}
