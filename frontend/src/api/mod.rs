pub mod attendance;
mod auth;
pub mod client;
pub mod session;
pub mod types;

pub use attendance::{AttendanceQuery, AttendanceSource, MockAttendanceSource};
pub use client::*;
pub use session::{BrowserSessionStore, MemorySessionStore, SessionStore};
pub use types::*;

#[cfg(test)]
pub mod test_support;
