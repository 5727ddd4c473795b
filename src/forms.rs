//! Form definitions, bound fields and field rendering.

#[cfg(feature = "forms")]
pub use bigfoot_forms::*;
