//! Balance resolution, daily history reconstruction and net-worth aggregation.
//!
//! Everything here is synchronous and pure: callers pass the full input
//! collections and "today" explicitly.

mod aggregate;
mod filter;
mod models;
mod reconstruct;
mod resolver;
mod summary;

pub use aggregate::*;
pub use filter::*;
pub use models::*;
pub use reconstruct::*;
pub use resolver::*;
pub use summary::*;
