//! Name-reservation facade for the kette workspace.
//!
//! The containers live in the workspace modules; see `kette-collections-core-rs` under
//! `modules/collections-core`.


/// Returns the facade crate's version.
#[must_use]
pub fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}

/// Returns a short note pointing at the workspace modules.
#[must_use]
pub fn readiness_message() -> String {
  format!("kette {} reserves the project name; the containers live in the workspace modules", crate_version())
}
