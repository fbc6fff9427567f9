//! Repository Layer
//!
//! Storage abstraction for the product snapshot and its backends.

mod file;
mod memory;
pub mod snapshot;
mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::ProductStorage;
