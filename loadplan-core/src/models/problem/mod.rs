//! Problem domain models.

mod catalog;
pub use self::catalog::*;

mod fleet;
pub use self::fleet::*;

mod locations;
pub use self::locations::*;

mod orders;
pub use self::orders::*;
