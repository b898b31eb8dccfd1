//! Daily message selection.
//!
//! A provider turns today's calendar day into the text shown after the
//! sparkle reveal. Lookups never fail: every repository error degrades to
//! the bundled local list.

pub mod calendar;
pub mod local;
pub mod remote;
pub mod snapshot;

pub use calendar::CalendarDay;
pub use local::LocalMessages;
pub use remote::{MessageRepository, RemoteMessages};
pub use snapshot::{RepositoryState, SnapshotRepository};

use thiserror::Error;

/// Failures of a remote message store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    #[error("message document not found")]
    NotFound,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("timed out waiting for messages")]
    TimedOut,
    #[error("malformed message data: {0}")]
    Malformed(String),
    #[error("messages not loaded yet")]
    Pending,
}

/// First day of the message rotation.
pub fn message_epoch() -> CalendarDay {
    CalendarDay::from_civil(2026, 2, 8)
}

/// Rotation index for `today` over `count` messages. Days before the epoch
/// clamp to the first message.
pub fn day_index(today: CalendarDay, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let days = today.days_since(message_epoch()).max(0);
    (days as u64 % count as u64) as usize
}

/// Something that can name today's message.
pub trait MessageProvider {
    fn todays_message(&mut self, today: CalendarDay) -> String;

    /// Advance any out-of-band loading by `dt` seconds.
    fn poll(&mut self, _dt: f32) {}
}

impl MessageProvider for LocalMessages {
    fn todays_message(&mut self, today: CalendarDay) -> String {
        self.message_for_index(day_index(today, self.len()) as i64)
    }
}
