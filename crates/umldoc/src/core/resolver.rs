//! Field type resolution
//!
//! Extracts the type a field refers to from its raw type text, unwrapping a
//! single level of generic parameterization: `List<Order>` resolves to
//! `Order`.
//!
//! Resolution is deliberately shallow. The span between the first `<` and
//! the last `>` is taken as a whole, so `Map<String, Order>` resolves to
//! `String, Order` and `List<Set<Order>>` to `Set<Order>`. Callers wanting
//! per-parameter resolution must split the result themselves.

/// Locate the generic span as (open, close) byte offsets
fn generic_span(raw: &str) -> Option<(usize, usize)> {
    let open = raw.find('<')?;
    let close = raw.rfind('>')?;
    (close > open).then_some((open, close))
}

fn strip_terminator(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end()
}

/// Resolve the effective referenced type name of a raw field type
pub fn resolve(raw: &str) -> String {
    let raw = strip_terminator(raw);
    match generic_span(raw) {
        Some((open, close)) => raw[open + 1..close].to_string(),
        None => raw.to_string(),
    }
}

/// Whether the raw type carries a generic span
pub fn is_generic(raw: &str) -> bool {
    generic_span(strip_terminator(raw)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwraps_generic_and_terminator() {
        assert_eq!(resolve("List<Order>;"), "Order");
        assert_eq!(resolve("Optional<Customer>"), "Customer");
    }

    #[test]
    fn test_plain_type_unchanged() {
        assert_eq!(resolve("int"), "int");
        assert_eq!(resolve("  Order  "), "Order");
        assert_eq!(resolve("Order;"), "Order");
    }

    #[test]
    fn test_multiple_parameters_not_split() {
        assert_eq!(resolve("Map<String, Order>"), "String, Order");
    }

    #[test]
    fn test_nested_generic_unwrapped_once() {
        assert_eq!(resolve("List<Set<Order>>"), "Set<Order>");
    }

    #[test]
    fn test_unbalanced_brackets_left_alone() {
        assert_eq!(resolve("Weird>Type<"), "Weird>Type<");
        assert_eq!(resolve("List<"), "List<");
    }

    #[test]
    fn test_is_generic() {
        assert!(is_generic("List<Order>"));
        assert!(is_generic("Set<Order>;"));
        assert!(!is_generic("Order"));
        assert!(!is_generic("a>b<"));
    }
}
