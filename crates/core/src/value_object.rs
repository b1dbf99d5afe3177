//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Addresses copied onto a cart, shipping rates and phrases have no identity of
/// their own; two of them with the same attributes are interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
