//! Record field access for property-based operators.
//!
//! `pluck`, `where_fields`, and `find_where` operate on sequences of
//! "records": elements with named fields of a uniform value type. The
//! [`Field`] trait is that capability, implemented out of the box for the
//! standard string-keyed maps and for pair lists.

use std::collections::{BTreeMap, HashMap};

/// Access to an element's fields by name.
pub trait Field {
    /// The type of the field values.
    type Value: Clone + PartialEq;

    /// The value of the named field, or `None` when absent.
    fn field(&self, name: &str) -> Option<Self::Value>;
}

impl<V: Clone + PartialEq> Field for BTreeMap<String, V> {
    type Value = V;

    fn field(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V: Clone + PartialEq> Field for HashMap<String, V> {
    type Value = V;

    fn field(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V: Clone + PartialEq> Field for Vec<(String, V)> {
    type Value = V;

    fn field(&self, name: &str) -> Option<V> {
        self.iter().find(|(key, _)| key == name).map(|(_, value)| value.clone())
    }
}
