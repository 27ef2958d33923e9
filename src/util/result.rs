//! Standard error and result types for the library.
use hex::FromHexError;
use std::io;

/// Standard error type used in the library
#[derive(Debug)]
pub enum Error {
    /// An argument provided is invalid
    BadArgument(String),
    /// The data given is not valid
    BadData(String),
    /// Hex string could not be decoded
    FromHexError(FromHexError),
    /// The input being signed does not exist in the transaction
    InputIndexOutOfRange {
        /// Requested input index
        index: usize,
        /// Number of inputs in the transaction
        inputs: usize,
    },
    /// Standard library IO error
    IOError(io::Error),
    /// The unlocking script is too short to hold the 22-byte witness program placeholder
    MalformedPlaceholder(usize),
    /// The SINGLE rule selected an output that does not exist
    OutputIndexOutOfRange {
        /// Requested output index
        index: usize,
        /// Number of outputs in the transaction
        outputs: usize,
    },
    /// The data or functionality is not supported by this library
    Unsupported(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::BadArgument(s) => write!(f, "Bad argument: {}", s),
            Error::BadData(s) => write!(f, "Bad data: {}", s),
            Error::FromHexError(e) => write!(f, "Hex decoding error: {}", e),
            Error::InputIndexOutOfRange { index, inputs } => {
                write!(f, "Input index {} out of range ({} inputs)", index, inputs)
            }
            Error::IOError(e) => write!(f, "IO error: {}", e),
            Error::MalformedPlaceholder(len) => {
                write!(f, "Malformed placeholder: {} bytes, need at least 22", len)
            }
            Error::OutputIndexOutOfRange { index, outputs } => {
                write!(f, "Output index {} out of range ({} outputs)", index, outputs)
            }
            Error::Unsupported(s) => write!(f, "Unsupported: {}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FromHexError(e) => Some(e),
            Error::IOError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FromHexError> for Error {
    fn from(e: FromHexError) -> Self {
        Error::FromHexError(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IOError(e)
    }
}

/// Standard Result used in the library
pub type Result<T> = std::result::Result<T, Error>;
