//! Common test utilities for shipit CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment (project, home, artifact directories)
//! - Git repository fixtures
//! - Tool detection so tests skip when `git` or GNU `tar` are missing

#![allow(dead_code)]

pub mod env;
pub mod repo;

pub use env::*;
pub use repo::*;
