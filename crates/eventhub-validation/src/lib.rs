//! Event Hub Validation
//!
//! Pure predicate functions over raw input strings.
//! Used by the form engine on the server side and by the WASM bindings in the browser.

pub mod date;
pub mod email;
pub mod numeric;
pub mod phone;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use numeric::*;
pub use phone::*;
