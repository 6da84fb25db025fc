//! Storage implementations for actor records.
//!
//! Available backends:
//! - `MemoryStore` - In-memory storage (always available)

pub mod memory;

pub use memory::MemoryStore;
