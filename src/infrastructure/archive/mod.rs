//! Archive adapters

mod tar;

pub use tar::TarArchiver;
