//! Prepdeck - headless core for an interview practice client.
//!
//! This crate holds the host-agnostic logic of the client: the avatar
//! editing lifecycle (preview resources, validation, save), interview
//! setup, and dashboard stats. Hosts supply the rendering surface and
//! the external collaborators through the domain ports.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for the domain ports.
pub mod infrastructure;

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = "prepdeck";
