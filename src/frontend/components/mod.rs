//! UI components. The splash component lives in `splash`, shared pieces in `common`.

pub mod common;
pub mod splash;
