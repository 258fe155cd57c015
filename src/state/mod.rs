//! Shared chat state and the per-connection session.

mod hub;
mod registry;
mod session;
#[cfg(test)]
pub(crate) mod testing;
mod uid;

pub use hub::Hub;
pub use registry::Registry;
pub use session::Session;
pub use uid::{SessionId, SessionIdGenerator};
