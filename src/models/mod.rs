//! Data models

pub mod bundle;
pub mod classifier;
pub mod verdict;

pub use bundle::*;
pub use classifier::*;
pub use verdict::*;
