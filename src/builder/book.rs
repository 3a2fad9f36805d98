use super::product::{Product, ProductBuilder};
use serde::Serialize;
use std::fmt;

/// A [`Product`] with an author attached.
///
/// The product is held as a named field rather than promoted; the shared
/// accessors below delegate to it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    #[serde(flatten)]
    product: Product,
    author: String,
}

impl Book {
    pub fn builder() -> BookBuilder {
        BookBuilder::new()
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn name(&self) -> &str {
        self.product.name()
    }

    pub fn price(&self) -> i64 {
        self.product.price()
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book{{name='{}', price={}, author='{}'}}",
            self.name(),
            self.price(),
            self.author
        )
    }
}

// Setters return `&mut BookBuilder` rather than going through `Deref` to the
// inner builder, which would hand back `&mut ProductBuilder` and lose `author`.
#[derive(Debug, Clone, Default)]
#[must_use = "a builder does nothing unless you call `.build()`"]
pub struct BookBuilder {
    product: ProductBuilder,
    author: String,
}

impl BookBuilder {
    pub fn new() -> Self {
        BookBuilder {
            product: ProductBuilder::new(),
            author: String::new(),
        }
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.product.name(name);
        self
    }

    pub fn price(&mut self, price: i64) -> &mut Self {
        self.product.price(price);
        self
    }

    pub fn author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = author.into();
        self
    }

    /// Builds the embedded [`Product`] first, then attaches the author.
    pub fn build(&self) -> Book {
        let product = self.product.build();
        tracing::trace!(author = %self.author, "building book");
        Book {
            product,
            author: self.author.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_render_book() {
        let book = Book::builder()
            .name("Deep learning from scratch")
            .price(3740)
            .author("Seth Weidman")
            .build();
        assert_eq!(
            book.to_string(),
            "Book{name='Deep learning from scratch', price=3740, author='Seth Weidman'}"
        );
    }

    #[test]
    fn test_author_can_come_first() {
        let book = Book::builder()
            .author("Seth Weidman")
            .name("Deep learning from scratch")
            .price(3740)
            .build();
        assert_eq!(book.author(), "Seth Weidman");
        assert_eq!(book.price(), 3740);
    }

    #[test]
    fn test_missing_author_defaults_to_empty() {
        let book = Book::builder().name("Anonymous").price(1).build();
        assert_eq!(book.author(), "");
        assert_eq!(book.to_string(), "Book{name='Anonymous', price=1, author=''}");
    }

    #[test]
    fn test_empty_builder() {
        let book = BookBuilder::default().build();
        assert_eq!(book.product(), &Product::builder().build());
        assert_eq!(book.author(), "");
    }

    #[test]
    fn test_serializes_flat() {
        let book = Book::builder().name("Rust").price(10).author("Ferris").build();
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Rust", "price": 10, "author": "Ferris" })
        );
    }

    proptest! {
        #[test]
        fn prop_book_embeds_product(name in ".*", price in any::<i64>(), author in ".*") {
            let book = Book::builder()
                .name(name.clone())
                .price(price)
                .author(author.clone())
                .build();
            let expected = Product::builder().name(name).price(price).build();
            prop_assert_eq!(book.product(), &expected);
            prop_assert_eq!(book.author(), author.as_str());
        }

        #[test]
        fn prop_book_last_write_wins(a1 in ".*", a2 in ".*") {
            let book = Book::builder().author(a1).author(a2.clone()).build();
            prop_assert_eq!(book.author(), a2.as_str());
        }
    }
}
