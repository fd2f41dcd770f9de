use std::rc::Rc;

use chrono::{Duration, Utc};

use super::{
    attendance::{AttendanceSource, MockAttendanceSource},
    session::SessionStore,
    types::{Notification, UserProfile},
};
use crate::config::{self, RuntimeConfig};

#[derive(Clone)]
pub struct ApiClient {
    attendance: Rc<dyn AttendanceSource>,
    sessions: Rc<dyn SessionStore>,
    session_key: Rc<str>,
    sign_in_delay_ms: u32,
}

impl ApiClient {
    /// Client for the resolved runtime config; call after `config::init`.
    pub fn new() -> Self {
        Self::from_config(&config::current())
    }

    pub fn from_config(runtime: &RuntimeConfig) -> Self {
        let key = runtime.session_storage_key.as_str();
        Self {
            session_key: Rc::from(key),
            ..Self::with_parts(Rc::new(MockAttendanceSource), default_session_store(key))
        }
        .with_sign_in_delay(runtime.sign_in_delay_ms)
    }

    pub fn with_parts(
        attendance: Rc<dyn AttendanceSource>,
        sessions: Rc<dyn SessionStore>,
    ) -> Self {
        Self {
            attendance,
            sessions,
            session_key: Rc::from(config::DEFAULT_SESSION_STORAGE_KEY),
            sign_in_delay_ms: 0,
        }
    }

    pub fn with_sign_in_delay(mut self, delay_ms: u32) -> Self {
        self.sign_in_delay_ms = delay_ms;
        self
    }

    pub(crate) fn attendance_source(&self) -> &dyn AttendanceSource {
        self.attendance.as_ref()
    }

    pub(crate) fn session_store(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    pub(crate) fn sign_in_delay_ms(&self) -> u32 {
        self.sign_in_delay_ms
    }

    pub fn current_user(&self) -> UserProfile {
        UserProfile {
            name: "Jane Cooper".into(),
            email: "jane@example.com".into(),
            role: "Admin".into(),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        let now = Utc::now();
        vec![
            Notification {
                id: "leave-request".into(),
                message: "New leave request submitted".into(),
                created_at: now - Duration::minutes(5),
            },
            Notification {
                id: "performance-review".into(),
                message: "Performance review completed".into(),
                created_at: now - Duration::hours(1),
            },
            Notification {
                id: "profile-update".into(),
                message: "Employee profile updated".into(),
                created_at: now - Duration::hours(2),
            },
        ]
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn default_session_store(key: &str) -> Rc<dyn SessionStore> {
    Rc::new(super::session::BrowserSessionStore::new(key))
}

// Host builds have no localStorage; sessions live for the process.
#[cfg(not(target_arch = "wasm32"))]
fn default_session_store(_key: &str) -> Rc<dyn SessionStore> {
    Rc::new(super::session::MemorySessionStore::new())
}
