mod error;
mod header;
mod line;
mod number;
mod parser;
mod summary;

pub use error::ParseError;
pub use parser::{parse_from_path, parse_from_reader};
