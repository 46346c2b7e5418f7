//! Command implementations invoked from `main`.

pub mod rename;
