//! Shared traits for anything that can be charted or reported on.

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Exposes the current signed balance of an entity.
pub trait Balanced {
    fn balance(&self) -> f64;
}

impl<T: NamedEntity + ?Sized> NamedEntity for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Balanced + ?Sized> Balanced for &T {
    fn balance(&self) -> f64 {
        (**self).balance()
    }
}
