//! Infrastructure layer: file-system adapters.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `settings_core`, but MUST NOT be imported by the `application` layer.

pub mod fs;
pub mod storage;
