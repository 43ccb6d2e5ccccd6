pub mod collections;
pub mod numeric;
pub mod parse;
pub mod text;
pub mod time;
pub mod uri;
pub mod wait;

// Re-export commonly used types
pub use numeric::NumberLocale;
pub use time::{Clock, FixedClock, SystemClock};
