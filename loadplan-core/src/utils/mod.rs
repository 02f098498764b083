//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod parallel;
pub use self::parallel::*;

mod timing;
pub use self::timing::*;

/// Alias to a scalar floating type used across geometry and scoring.
pub type Float = f64;
