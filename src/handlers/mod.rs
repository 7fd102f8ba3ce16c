//! HTTP handlers for opening CRUD and the API document.

pub mod docs;
pub mod opening;
pub use docs::*;
pub use opening::*;
