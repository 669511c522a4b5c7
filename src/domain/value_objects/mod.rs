//! Domain Value Objects
//!
//! Small value types that make implicit UI conventions explicit.

mod expansion;
mod ownership;

pub use expansion::Expansion;
pub use ownership::Ownership;
