use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnknownColourNotation(String),
    WrongNumberOfChannels {
        notation: &'static str,
        expected: usize,
        found: usize,
    },
    WrongNumberOfHexDigits(usize),
    InvalidChannelValue(String),
    EmptyPalette,
    WorkerDisconnected,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownColourNotation(text) => {
                write!(
                    f,
                    "Unknown colour notation '{}'. Expected grey:V, rgb:R,G,B, rgba:R,G,B,A or #RRGGBB[AA]",
                    text
                )
            }
            Self::WrongNumberOfChannels {
                notation,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Colour notation '{}' expects {} channels, but got {}",
                    notation, expected, found
                )
            }
            Self::WrongNumberOfHexDigits(found) => {
                write!(
                    f,
                    "Hex colour notation expects 6 or 8 digits, but got {}",
                    found
                )
            }
            Self::InvalidChannelValue(token) => {
                write!(
                    f,
                    "Channel value '{}' is not in range of 0 to 255",
                    token
                )
            }
            Self::EmptyPalette => write!(f, "Palette does not contain any colours"),
            Self::WorkerDisconnected => {
                write!(f, "Worker thread disconnected before sending its matches")
            }
        }
    }
}

impl std::error::Error for Error {}
