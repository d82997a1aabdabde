//! stickyband
//!
//! Sticky group headers (and optional sub-headers) for virtualized lists.
//!
//! The core is [`decoration::HeaderDecoration`]: given per-frame snapshots of
//! the visible items, it reserves layout space at group starts, keeps the
//! current group's overlay pinned to the top edge, and pushes it off as the
//! next group arrives. Overlays are created once per group id and cached.
//!
//! The remaining modules are the demo shell around it: configuration,
//! logging, a virtualized list and a ratatui front end.

pub mod config;
pub mod decoration;
pub mod logging;
pub mod model;
pub mod view;
pub mod view_state;
