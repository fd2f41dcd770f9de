pub mod attendance_summary;
pub mod filters;
pub mod legend;
pub mod quick_actions;
pub mod welcome;

mod bar;

pub use attendance_summary::AttendanceSummary;
pub use filters::AttendanceFilterBar;
pub use legend::Legend;
pub use quick_actions::QuickActions;
pub use welcome::WelcomeHeader;
