//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point: it layers default config files,
//! explicit `--config` files and environment variables, applies CLI
//! overrides, and validates the result into a [`ResolvedSettings`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedSettings;
