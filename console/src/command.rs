use common::ultimate::{Participant, is_valid_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    NewGame(Option<Participant>),
    Reset,
    Depth(usize),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err("Empty input".to_string());
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(format!("Too many arguments in '{}'", line.trim()));
    }

    match (head.to_ascii_lowercase().as_str(), arg) {
        ("quit" | "exit" | "q", None) => Ok(Command::Quit),
        ("help" | "?", None) => Ok(Command::Help),
        ("reset", None) => Ok(Command::Reset),
        ("new", None) => Ok(Command::NewGame(None)),
        ("new", Some("me" | "human")) => Ok(Command::NewGame(Some(Participant::Human))),
        ("new", Some("cpu" | "machine")) => Ok(Command::NewGame(Some(Participant::Machine))),
        ("new", Some(other)) => Err(format!("Unknown starting player '{}'", other)),
        ("depth", Some(value)) => value
            .parse::<usize>()
            .map(Command::Depth)
            .map_err(|_| format!("Invalid depth '{}'", value)),
        ("depth", None) => Err("Usage: depth <1-9>".to_string()),
        (cell, None) => {
            let index = cell
                .parse::<usize>()
                .map_err(|_| format!("Unknown command '{}'", cell))?;
            if !is_valid_index(index) {
                return Err(format!("Cell {} is out of range (0-80)", index));
            }
            Ok(Command::Play(index))
        }
        (other, Some(_)) => Err(format!("Unknown command '{}'", other)),
    }
}

pub const HELP: &str = "\
Commands:
  <0-80>            play that cell
  new [me|cpu]      start a new game (default: configured opener)
  reset             clear the tallies and start over
  depth <1-9>       set the machine's search depth
  help              show this text
  quit              leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_command("13"), Ok(Command::Play(13)));
        assert_eq!(parse_command("  80 \n"), Ok(Command::Play(80)));
        assert!(parse_command("81").is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("RESET"), Ok(Command::Reset));
        assert_eq!(parse_command("new"), Ok(Command::NewGame(None)));
        assert_eq!(parse_command("new cpu"), Ok(Command::NewGame(Some(Participant::Machine))));
        assert_eq!(parse_command("depth 7"), Ok(Command::Depth(7)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("depth").is_err());
        assert!(parse_command("depth x").is_err());
        assert!(parse_command("new someone").is_err());
        assert!(parse_command("play 3 4").is_err());
        assert!(parse_command("jump").is_err());
    }
}
