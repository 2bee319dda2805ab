//! Storage implementations for the cat service

pub mod in_memory;

pub use in_memory::InMemoryCatService;
