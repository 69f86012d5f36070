//! Record store layer.

pub mod memory;

pub use memory::MemoryStore;
