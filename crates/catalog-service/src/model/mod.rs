//! Pure data structures: the [`Product`] record and the payloads that create, patch and query it.

pub mod product;

pub use product::*;
