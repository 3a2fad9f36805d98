//! Fluent builders for [`Product`] and its derived value [`Book`].
//!
//! Setters take `&mut self` and return `&mut Self`, so a chain can start from
//! a temporary and end in `build()` within one statement. `build()` borrows the
//! builder, which leaves it untouched for further edits and rebuilds.

mod book;
mod product;

pub use book::{Book, BookBuilder};
pub use product::{Product, ProductBuilder};
