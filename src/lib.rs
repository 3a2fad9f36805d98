//! # Generics Report
//!
//! Small, independent demonstrations of how Rust expresses a few
//! object-construction and generics idioms:
//!
//! ## Fluent Builder
//! - Non-consuming builder whose setters return `&mut Self`
//! - Derived builder that composes the base builder and adds one field
//! - Derived value that embeds the base value by composition
//!
//! ## Generic Constraint
//! - One capability trait, two unrelated implementors
//! - Static dispatch through a bound, dynamic dispatch through `dyn`
//!
//! ## Per-Type Formatting
//! - A `Describe` capability per element type instead of runtime type switches
//!
//! ## Monomorphisation
//! - Generic slots that report the concrete type of their field
//!
//! Run demos with: `cargo run --bin <name>`

pub mod acquire;
pub mod builder;
pub mod config;
pub mod describe;
pub mod erasure;
pub mod error;
pub mod logging;
pub mod render;

pub use builder::{Book, BookBuilder, Product, ProductBuilder};
pub use error::ReportError;
