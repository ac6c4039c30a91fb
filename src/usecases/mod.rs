//! # Use Cases
//!
//! Feature-level business logic consumed by store handlers. Each use case
//! is an `async_trait` so tests can swap in a synchronous fake.

pub mod divide;

pub use divide::{DivideUseCase, HalvingUseCase};
