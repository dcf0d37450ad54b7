//! The geometry trait.

use std::fmt;

/// Anything with an area and a perimeter.
///
/// `Display` is a supertrait so a consumer holding only `&dyn Geometry` can
/// still print the value it was given.
pub trait Geometry: fmt::Display {
    fn area(&self) -> f64;

    fn perim(&self) -> f64;

    /// Short name of the implementing type, e.g. `"Rect"`.
    ///
    /// Module path and generic arguments are dropped: `Wrap<a::B>` is `"Wrap"`.
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Strip the module path and any generic arguments from a type name.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
