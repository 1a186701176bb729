//! Pure aggregation over a slice of sessions. Nothing here touches the store
//! or reads the clock: "now" is always passed in.

pub mod daily;
pub mod expected;
pub mod surplus;
pub mod worked;
