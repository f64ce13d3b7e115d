//! Pages
//!
//! One component per route.

mod dashboard;
mod login;
mod register;
mod welcome;

pub use dashboard::Dashboard;
pub use login::Login;
pub use register::Register;
pub use welcome::Welcome;
