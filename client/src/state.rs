use common::games::tictactoe::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark { row: usize, col: usize },
    Reset,
    SelectMode(GameMode),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  <row> <col>    mark a cell, both 0-2 (e.g. `1 1` for the center)
  reset          start a new game in the current mode
  mode pvp|pva   switch to human vs human or human vs computer
  help           show this text
  quit           leave";

pub fn parse_mode(value: &str) -> Option<GameMode> {
    match value.to_ascii_lowercase().as_str() {
        "pvp" | "hvh" | "human" => Some(GameMode::HumanVsHuman),
        "pva" | "hvc" | "computer" | "ai" => Some(GameMode::HumanVsComputer),
        _ => None,
    }
}

pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [] => Err("Empty command, type `help` for the list".to_string()),
        ["reset"] | ["r"] => Ok(ClientCommand::Reset),
        ["help"] | ["h"] | ["?"] => Ok(ClientCommand::Help),
        ["quit"] | ["q"] | ["exit"] => Ok(ClientCommand::Quit),
        ["mode", value] => parse_mode(value)
            .map(ClientCommand::SelectMode)
            .ok_or_else(|| format!("Unknown mode `{}`, expected pvp or pva", value)),
        [row, col] => {
            let row = row
                .parse::<usize>()
                .map_err(|_| format!("Row `{}` is not a number", row))?;
            let col = col
                .parse::<usize>()
                .map_err(|_| format!("Column `{}` is not a number", col))?;
            Ok(ClientCommand::PlaceMark { row, col })
        }
        _ => Err(format!("Unknown command `{}`, type `help` for the list", line.trim())),
    }
}
