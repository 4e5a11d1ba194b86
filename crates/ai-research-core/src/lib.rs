// region:       -- Modules
pub mod ais;
mod error;
mod researcher;

pub use self::error::{Error, Result};

pub use crate::researcher::*;
// endregion:    -- Modules
