//! Generic slots that can name the concrete type of their field.
//!
//! Generics are monomorphised: a `Slot<String>` is its own type with a real
//! `String` field, so the parameter is still known after compilation.

use std::any::type_name;

mod sealed {
    pub trait Sealed {}
}

/// Primitive numeric types. Sealed, so the set stays closed.
pub trait Number: sealed::Sealed + Copy {}

macro_rules! impl_number {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Number for $t {}
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[derive(Debug, Clone, Default)]
pub struct Slot<T> {
    value: Option<T>,
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Slot { value: None }
    }

    pub fn set_value(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn field_type(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Like [`Slot`], but only for [`Number`] types.
#[derive(Debug, Clone, Default)]
pub struct NumberSlot<T: Number> {
    value: Option<T>,
}

impl<T: Number> NumberSlot<T> {
    pub fn new() -> Self {
        NumberSlot { value: None }
    }

    pub fn set_value(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn value(&self) -> Option<T> {
        self.value
    }

    pub fn field_type(&self) -> &'static str {
        type_name::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keeps_parameter_type() {
        let mut slot = Slot::new();
        assert!(slot.value().is_none());
        slot.set_value("abc".to_string());

        assert_eq!(slot.value().map(String::as_str), Some("abc"));
        assert!(slot.field_type().ends_with("String"));
    }

    #[test]
    fn test_number_slot_keeps_parameter_type() {
        let mut slot = NumberSlot::new();
        slot.set_value(123.0_f64);

        assert_eq!(slot.value(), Some(123.0));
        assert_eq!(slot.field_type(), "f64");
        assert_eq!(NumberSlot::<u8>::new().field_type(), "u8");
    }
}
