use chrono::{DateTime, Utc};
use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Display date every weekend record carries instead of its real day number.
pub const WEEKEND_DATE_LABEL: &str = "01/08";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttendanceCategory {
    Present,
    Early,
    Late,
    ShortDay,
    Leave,
}

impl AttendanceCategory {
    pub const ALL: [AttendanceCategory; 5] = [
        AttendanceCategory::Present,
        AttendanceCategory::Early,
        AttendanceCategory::Late,
        AttendanceCategory::ShortDay,
        AttendanceCategory::Leave,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceCategory::Present => "Present",
            AttendanceCategory::Early => "Early",
            AttendanceCategory::Late => "Late",
            AttendanceCategory::ShortDay => "Short Day",
            AttendanceCategory::Leave => "Leave",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AttendanceCategory::Present => "#70B0FC",
            AttendanceCategory::Early => "#2AA68D",
            AttendanceCategory::Late => "#ED2626",
            AttendanceCategory::ShortDay => "#FFB325",
            AttendanceCategory::Leave => "#A83885",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub date: String,
    pub present: u8,
    pub early: u8,
    pub late: u8,
    pub short_day: u8,
    pub leave: u8,
}

impl AttendanceRecord {
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn weekend() -> Self {
        Self::empty(WEEKEND_DATE_LABEL)
    }

    pub fn with_value(mut self, category: AttendanceCategory, value: u8) -> Self {
        *self.slot_mut(category) = value;
        self
    }

    pub fn value(&self, category: AttendanceCategory) -> u8 {
        match category {
            AttendanceCategory::Present => self.present,
            AttendanceCategory::Early => self.early,
            AttendanceCategory::Late => self.late,
            AttendanceCategory::ShortDay => self.short_day,
            AttendanceCategory::Leave => self.leave,
        }
    }

    fn slot_mut(&mut self, category: AttendanceCategory) -> &mut u8 {
        match category {
            AttendanceCategory::Present => &mut self.present,
            AttendanceCategory::Early => &mut self.early,
            AttendanceCategory::Late => &mut self.late,
            AttendanceCategory::ShortDay => &mut self.short_day,
            AttendanceCategory::Leave => &mut self.leave,
        }
    }

    /// Categories with a non-zero value, in legend order.
    pub fn active_categories(&self) -> Vec<AttendanceCategory> {
        AttendanceCategory::ALL
            .into_iter()
            .filter(|category| self.value(*category) > 0)
            .collect()
    }

    /// A weekend sentinel has no values and the fixed weekend date label.
    /// Working day 8 shares the label but always carries a value.
    pub fn is_weekend_sentinel(&self) -> bool {
        self.date == WEEKEND_DATE_LABEL && self.active_categories().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendItem {
    pub label: String,
    pub color: String,
}

impl From<AttendanceCategory> for LegendItem {
    fn from(category: AttendanceCategory) -> Self {
        Self {
            label: category.label().to_string(),
            color: category.color().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserProfile {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "STORAGE_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        assert_eq!(ApiError::storage("no storage").code, "STORAGE_ERROR");
        assert_eq!(ApiError::unknown("something failed").code, "UNKNOWN");
    }

    #[test]
    fn api_error_converts_to_string_and_view() {
        let error = ApiError::unknown("boom");
        assert_eq!(error.to_string(), "boom");
        let as_string: String = error.clone().into();
        assert_eq!(as_string, "boom");
        let runtime = leptos::create_runtime();
        let _ = error.into_view();
        runtime.dispose();
    }
}
