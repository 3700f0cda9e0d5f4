//! Domain Entities
//!
//! - `WorkingTree` - A git checkout snapshot used to build an artifact
//! - `Instance` - A running compute instance in the fleet

mod instance;
mod working_tree;

pub use instance::{Instance, Uptime};
pub use working_tree::WorkingTree;
