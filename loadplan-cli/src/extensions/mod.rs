//! Contains extensions used by cli commands.

pub mod check;
pub mod solve;
