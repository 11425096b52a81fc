//! td-core: shared foundation for tdmeta.
//!
//! Contains:
//! - key (component keys used as graph indices)
//! - platform (target OS / compiler / arch model)
//! - config (build configuration supplied by the invoking build)
//! - error (shared error types)

pub mod config;
pub mod error;
pub mod key;
pub mod platform;

// Re-exports: nice ergonomics for downstream crates
pub use config::BuildConfig;
pub use error::{TdError, TdResult};
pub use key::ComponentKey;
pub use platform::{Arch, CompilerFamily, Os, TargetPlatform};
