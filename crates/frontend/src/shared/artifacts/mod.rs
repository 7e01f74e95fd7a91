//! Artifact rendering pipeline
//!
//! - registry.rs: closed map type tag → renderer + layout
//! - dispatcher.rs: resolves a message's artifacts, reconciles callbacks
//! - renderers/: generic renderers shared by many tags

pub mod dispatcher;
pub mod registry;
pub mod renderers;

pub use dispatcher::{dispatch, ArtifactEvent, ArtifactHandlers, MessageArtifacts, ResolvedArtifact};
pub use registry::{ArtifactRegistry, RegistryEntry, RendererKind};
