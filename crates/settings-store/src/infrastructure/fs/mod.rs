//! File-system helpers shared by the storage adapter and the CLI.

pub mod paths;
