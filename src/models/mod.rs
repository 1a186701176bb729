pub mod session;
pub mod summary;

pub use session::{Session, SessionState};
pub use summary::{Summary, SummaryEntry, SummaryLabel};
