//! Provides traits shared by every distribution and single-pass
//! reductions over sample data

pub use self::reductor::*;
pub use self::traits::*;

mod reductor;
mod traits;
