//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the remote services.

mod extraction_cmd;
mod recipe_cmd;

pub use extraction_cmd::*;
pub use recipe_cmd::*;
