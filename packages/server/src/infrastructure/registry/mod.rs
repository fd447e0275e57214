//! Actor-based implementation of the client registry.
//!
//! One task owns the client map and the history buffer. Everything else
//! talks to it through [`RegistryHandle`], so the map and the buffer are
//! only ever touched from that task.

mod actor;
mod command;
mod handle;

pub use actor::RegistryActor;
pub use command::RegistryCommand;
pub use handle::RegistryHandle;
