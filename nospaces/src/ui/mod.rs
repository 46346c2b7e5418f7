//! Console presentation: colour theme and themed message writers.

pub mod output_format;
pub mod theme;
