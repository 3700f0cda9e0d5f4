//! Instance inventory adapters

mod aws_cli;

pub use aws_cli::AwsCliInventory;
