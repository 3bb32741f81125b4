//! Page components for the admin interface

pub mod dashboard;
pub mod login;

pub use dashboard::AdminDashboard;
pub use login::AdminLogin;
