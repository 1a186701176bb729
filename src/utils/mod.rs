pub mod colors;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod table;

pub use formatting::{format_duration, mins2readable};
