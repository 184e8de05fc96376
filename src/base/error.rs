use std::fmt::{Display, Formatter};

/// The error type shared by all serialization interfaces.
///
/// Any error is terminal for the document being written: the output produced so far is not
/// well-formed and the whole write needs to be redone from scratch.
#[derive(Debug)]
pub enum Error {
    IO(std::io::Error),
    Encode(&'static str)
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IO(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IO(err) => write!(f, "IO error: {err}"),
            Error::Encode(msg) => f.write_str(msg)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(err) => Some(err),
            Error::Encode(_) => None
        }
    }
}
