//! Remote execution adapters

mod ssh;

pub use ssh::{SshOptions, SshSession, SshSessionFactory};
