use core::fmt;
use std::io;

#[derive(Debug)]
pub enum RealignError {
    Io(io::Error),
    UnknownClass(u8),
    OffsetOverflow { index: u16 }
}

pub type Result<T> = core::result::Result<T, RealignError>;

impl fmt::Display for RealignError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RealignError::Io(err) => write!(f, "{}", err),
            RealignError::UnknownClass(class) => write!(f, "Unknown ELF class {}", class),
            RealignError::OffsetOverflow { index } => {
                write!(f, "Program header {} lies past the end of the addressable range", index)
            }
        }
    }
}

impl std::error::Error for RealignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RealignError::Io(err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for RealignError {
    fn from(err: io::Error) -> Self {
        RealignError::Io(err)
    }
}
