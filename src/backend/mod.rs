//! Backend of the application.

pub mod splash;
pub mod utils;
