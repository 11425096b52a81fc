//! td-emit: per-component package metadata for downstream build exporters.
//!
//! Walks a `ComponentGraph` once, applies platform link rules and produces a
//! `PackageDescriptor` listing one `ComponentDescriptor` per component in
//! graph order.

pub mod descriptor;
pub mod emitter;
pub mod error;
pub mod hash;
pub mod platform;

pub use descriptor::{ComponentDescriptor, PackageDescriptor, PackageNaming};
pub use emitter::MetadataEmitter;
pub use error::{EmitError, EmitResult};
pub use hash::fingerprint;
pub use platform::{ComponentRule, PlatformRuleEngine, SystemLib};
