//! What values go through on their way into containers: copies on by-value
//! insertion, none on by-reference insertion, and a single construction when
//! they are emplaced.

pub mod arena;
pub mod book;
pub mod config;
pub mod demos;
pub mod error;
pub mod logging;
pub mod sequence;
pub mod trace;

pub use book::Book;
pub use config::DemoConfig;
pub use error::{DemoError, Result};
pub use sequence::{Position, Sequence};
pub use trace::{Event, TraceSummary, Tracer};
