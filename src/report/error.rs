use log::SetLoggerError;
use std::error;
use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::result;

/// Convenience `Error` enum for `report`.
#[derive(Debug)]
pub enum Error {
    UnknownArgument(String),
    MissingValue(String),
    InvalidNumber(ParseIntError),
    InvalidLogLevel(String),
    EmptySizes,
    SizeTooLarge(u32),
    Logger(SetLoggerError),
    Worker(io::Error),
    WorkerPanicked,
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Error {
        Error::InvalidNumber(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Worker(err)
    }
}

impl From<SetLoggerError> for Error {
    fn from(err: SetLoggerError) -> Error {
        Error::Logger(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidNumber(error) => Some(error),
            Error::Logger(error) => Some(error),
            Error::Worker(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownArgument(arg) => write!(f, "unknown argument `{}`", arg),
            Error::MissingValue(arg) => write!(f, "missing value for `{}`", arg),
            Error::InvalidNumber(error) => write!(f, "invalid number: {}", error),
            Error::InvalidLogLevel(level) => write!(f, "invalid log level `{}`", level),
            Error::EmptySizes => write!(f, "at least one tree size is required"),
            Error::SizeTooLarge(size) => {
                write!(f, "tree size {} does not fit in a student id", size)
            },
            Error::Logger(error) => write!(f, "{}", error),
            Error::Worker(error) => write!(f, "could not start the report thread: {}", error),
            Error::WorkerPanicked => write!(f, "the report thread panicked"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
