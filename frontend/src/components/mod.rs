pub mod common;
pub mod dropdown;
pub mod error;
pub mod guard;
pub mod header;
pub mod layout;
pub mod sidebar;
