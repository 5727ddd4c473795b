//! Row translation and table rendering.

#[cfg(feature = "tables")]
pub use bigfoot_tables::*;
