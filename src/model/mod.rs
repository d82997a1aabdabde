//! Domain model types (pure).
//!
//! Frame geometry handed over by the host list, group identity, and the
//! shell's top-level error.

pub mod error;
pub mod group_key;
pub mod types;

// Re-export for convenience
pub use error::AppError;
pub use group_key::{GroupKey, Level};
pub use types::{OverlayConstraints, Position, Viewport, VisibleItem};
