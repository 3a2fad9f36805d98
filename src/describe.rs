//! Per-type formatting of homogeneous lists.
//!
//! Each element type states how it describes itself, and `list_to_string`
//! picks that implementation at compile time. No runtime type inspection.

pub trait Describe {
    fn describe(&self) -> String;
}

impl Describe for i32 {
    fn describe(&self) -> String {
        format!("Integer({})", self)
    }
}

impl Describe for i64 {
    fn describe(&self) -> String {
        format!("Integer({})", self)
    }
}

impl Describe for String {
    fn describe(&self) -> String {
        format!("String({})", self)
    }
}

impl Describe for &str {
    fn describe(&self) -> String {
        format!("String({})", self)
    }
}

/// Describes every element, each followed by `", "` (trailing separator included).
pub fn list_to_string<T: Describe>(items: &[T]) -> String {
    items.iter().fold(String::new(), |mut acc, item| {
        acc.push_str(&item.describe());
        acc.push_str(", ");
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(list_to_string(&[1, 2, 3]), "Integer(1), Integer(2), Integer(3), ");
        assert_eq!(list_to_string(&[-5i64]), "Integer(-5), ");
    }

    #[test]
    fn test_strings() {
        assert_eq!(list_to_string(&["a", "b", "c"]), "String(a), String(b), String(c), ");

        let owned = vec!["x".to_string(), String::new()];
        assert_eq!(list_to_string(&owned), "String(x), String(), ");
    }

    #[test]
    fn test_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(list_to_string(&empty), "");
    }
}
