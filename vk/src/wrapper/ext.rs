//! Wrapper for the EXT extensions
mod debug_report;
pub use debug_report::*;
