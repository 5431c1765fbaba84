mod duration;
mod result;

pub use duration::parse_duration;
