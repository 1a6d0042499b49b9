//! Provides a collection of combinatorial and special functions used by
//! the distributions

pub mod erf;
pub mod factorial;
