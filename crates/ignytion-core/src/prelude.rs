//! Common imports for the core modules

pub use crate::error::{Error, Result};
pub use tracing::{debug, info, warn};
