// HotRoute shared type definitions
// Each submodule defines types used across the application.

pub mod display;
pub mod errors;
pub mod link;
pub mod settings;
