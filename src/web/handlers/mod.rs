//! HTML template rendering handlers for the presentation shell.

mod home;

pub use home::home_handler;
