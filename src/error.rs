use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to write demo output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Position {index} is past the end of a container holding {len} elements")]
    PositionOutOfRange { index: usize, len: usize },

    /// The container changed shape after the position was taken from it.
    #[error("Stale position: taken when the container held {expected_len} elements, it now holds {actual_len}")]
    StalePosition {
        expected_len: usize,
        actual_len: usize,
    },

    #[error("Handle #{0} does not belong to this shelf")]
    DanglingHandle(usize),
}

impl DemoError {
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::PositionOutOfRange { index, len }
    }

    pub fn stale(expected_len: usize, actual_len: usize) -> Self {
        Self::StalePosition {
            expected_len,
            actual_len,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_position() {
        let err = DemoError::out_of_range(7, 3);
        assert_eq!(
            err.to_string(),
            "Position 7 is past the end of a container holding 3 elements"
        );

        let err = DemoError::stale(4, 5);
        assert!(err.to_string().contains("held 4 elements"));
        assert!(err.to_string().contains("now holds 5"));
    }

    #[test]
    fn io_errors_convert() {
        let err: DemoError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, DemoError::Io(_)));
    }
}
