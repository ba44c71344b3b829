pub mod aggregate;
pub mod query;

pub use aggregate::*;
pub use query::*;
