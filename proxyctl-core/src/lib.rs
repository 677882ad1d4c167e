//! Proxyctl Core Library
//!
//! Provides the backend-independent core of the proxyctl operator console:
//! - Entity resolution (identifier -> exactly one managed account)
//! - Structured credential record storage (line-oriented dialect)
//! - Directory traits abstracting the panel / tunnel / proxy-login backends
//!
//! The panel HTTP client, service-manager invocations and command dispatch
//! live outside this crate and reach it only through the traits in
//! [`traits`].

pub mod backend;
pub mod error;
pub mod records;
pub mod resolver;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use backend::{PanelDirectory, ProxyLoginFile, TunnelUserFile};
pub use error::{CoreError, CoreResult};
pub use resolver::{resolve, resolve_in};
pub use traits::{IdFormat, PanelApi, Selectable, UserDirectory};
pub use types::{PanelUser, ProxyLoginUser, StructuredRecord, TunnelUser, UserKind};
