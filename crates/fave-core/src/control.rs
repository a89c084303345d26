use strum::{Display as StrumDisplay, EnumIter, EnumString};

pub const SOCKET_PATH: &str = "/tmp/fave.sock";

/// One line on the control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum Command {
    Toggle,
    Select,
    Deselect,
    SelectNow,
    DeselectNow,
}

impl Command {
    /// `(selected, animated)` for commands that set an explicit state.
    pub fn target(&self) -> Option<(bool, bool)> {
        match self {
            Self::Toggle => None,
            Self::Select => Some((true, true)),
            Self::Deselect => Some((false, true)),
            Self::SelectNow => Some((true, false)),
            Self::DeselectNow => Some((false, false)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_command_parsing() {
        let cases = vec![
            ("toggle", Command::Toggle),
            ("TOGGLE", Command::Toggle),
            ("select", Command::Select),
            ("select-now", Command::SelectNow),
            ("deselect-now", Command::DeselectNow),
        ];
        for (line, expected) in cases {
            assert_eq!(line.parse::<Command>().unwrap(), expected);
        }
        assert!("favorite".parse::<Command>().is_err());
    }

    #[test]
    fn test_every_command_round_trips() {
        for command in Command::iter() {
            assert_eq!(command.to_string().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn test_targets() {
        assert_eq!(Command::Toggle.target(), None);
        assert_eq!(Command::SelectNow.target(), Some((true, false)));
        assert_eq!(Command::Deselect.target(), Some((false, true)));
    }
}
