//! Domain Layer
//!
//! Pure types and port definitions, free of process and network I/O.
//!
//! ## Structure
//!
//! - `entities/` - Working trees and fleet instances
//! - `value_objects/` - Artifact names, storage keys, remote targets, exclusions
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod value_objects;
