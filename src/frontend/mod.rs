//! Frontend module for the `DreamSplash` application.

pub mod components;
pub mod pages;
