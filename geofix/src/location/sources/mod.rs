//! Device permission and position source abstraction.
//!
//! Real permission dialogs and GPS hardware are platform services; they
//! enter the crate through the [`PermissionSource`] and [`PositionSource`]
//! traits. Embedders supply platform adapters; this module ships the
//! adapters the CLI and tests use.

mod fixed;
mod permission;
mod types;

pub use fixed::{FixedPositionSource, UnavailablePositionSource};
pub use permission::StaticPermissionSource;
pub use types::{PermissionSource, PermissionStatus, Position, PositionError, PositionSource};
