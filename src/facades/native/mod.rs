pub mod admin;

pub use admin::AdminNotifications;
