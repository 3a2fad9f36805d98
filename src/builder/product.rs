use serde::Serialize;
use std::fmt;

/// A named item with a price. Fields are private and only ever set through
/// [`ProductBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    price: i64,
}

impl Product {
    pub fn builder() -> ProductBuilder {
        ProductBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> i64 {
        self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product{{name='{}', price={}}}", self.name, self.price)
    }
}

#[derive(Debug, Clone, Default)]
#[must_use = "a builder does nothing unless you call `.build()`"]
pub struct ProductBuilder {
    name: String,
    price: i64,
}

impl ProductBuilder {
    pub fn new() -> Self {
        ProductBuilder {
            name: String::new(),
            price: 0,
        }
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn price(&mut self, price: i64) -> &mut Self {
        self.price = price;
        self
    }

    /// Builds a new, independent [`Product`] from the current fields.
    ///
    /// Unset fields keep their defaults (`""` and `0`).
    pub fn build(&self) -> Product {
        tracing::trace!(name = %self.name, price = self.price, "building product");
        Product {
            name: self.name.clone(),
            price: self.price,
        }
    }
}
