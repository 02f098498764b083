//! Solution domain models.

mod failures;
pub use self::failures::*;

mod group;
pub use self::group::*;

mod plan;
pub use self::plan::*;
