//! Page controllers
//!
//! Controllers hold page state outside the view layer. Pages copy a snapshot
//! into a signal after every step.

pub mod dashboard;
pub mod login;
pub mod ticket;

pub use dashboard::{
    DashboardContent, DashboardController, DashboardState, DashboardView, LoadEffect, LoadRequest,
};
pub use login::{Credentials, LoginController, LoginEffect, LoginForm};
pub use ticket::{LoadTicket, RequestSequence};
