//! One capability trait shared by two types that have nothing else in common.

/// Something that can hand out an integer value.
pub trait Acquire {
    fn acquire_value(&self) -> i64;
}

/// Keeps its number in a field called `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stored {
    pub value: i64,
}

/// Keeps its number in a field called `content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packaged {
    pub content: i64,
}

impl Acquire for Stored {
    fn acquire_value(&self) -> i64 {
        self.value
    }
}

impl Acquire for Packaged {
    fn acquire_value(&self) -> i64 {
        self.content
    }
}

// Lets `get_value` take borrows as well as owned values.
impl<T: Acquire + ?Sized> Acquire for &T {
    fn acquire_value(&self) -> i64 {
        (**self).acquire_value()
    }
}

/// Statically dispatched: one copy per concrete `T`.
pub fn get_value<T: Acquire>(item: T) -> i64 {
    item.acquire_value()
}

/// Dynamically dispatched over a mixed slice.
pub fn sum_values(items: &[&dyn Acquire]) -> i64 {
    items.iter().map(|item| item.acquire_value()).sum()
}
