pub mod dashboard;
pub mod home;
pub mod placeholder;
pub mod signin;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use placeholder::SectionPlaceholder;
pub use signin::SignInPage;
