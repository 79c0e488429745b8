//! Document store access: generated ids, collections, and the gateway
//! that owns the process-wide store session.

mod collection;
mod gateway;
mod id;

pub use collection::Collection;
pub use gateway::Gateway;
pub use id::DocId;
