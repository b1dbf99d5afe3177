//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Customers, products, carts and orders are entities: two records with the
/// same id are the same record, whatever their attribute values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
