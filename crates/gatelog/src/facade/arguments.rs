//! Argument adapters used by the facade macros
//!
//! Two decisions are made per interpolated argument, both at compile time
//! through method resolution on nested references (the most specific impl
//! sits behind the most references):
//!
//! - how it enters the message: `Option<T: Display>` becomes [`Nullable`],
//!   anything else is passed through by reference so every format trait the
//!   value implements stays usable
//! - how it appears as a structured property: `Display`, else `Debug`, else
//!   the type name
//!
//! The chosen value is then wrapped in [`Rendered`], so a plain `{}`
//! placeholder formats it once for both the message and the property.
//!
//! These only resolve correctly on concrete types, which is always the case
//! inside a macro expansion.

use gatelog_core_types::schema::NULL_MARKER;
use std::cell::OnceCell;
use std::fmt::{self, Write as _};

/// Renders an `Option` as its value or as `null`
///
/// Width, fill and precision apply to whichever is printed.
pub struct Nullable<'a, T>(&'a Option<T>);

/// Wrap an optional value for interpolation
pub fn nullable<T>(value: &Option<T>) -> Nullable<'_, T> {
    Nullable(value)
}

impl<T: fmt::Display> fmt::Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.pad(NULL_MARKER),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Debug::fmt(value, f),
            None => f.pad(NULL_MARKER),
        }
    }
}

#[doc(hidden)]
pub struct Probe<'a, T: ?Sized>(pub &'a T);

#[doc(hidden)]
pub trait AdaptOption {
    type Output;
    fn adapt(&self) -> Self::Output;
}

impl<'a, T: fmt::Display> AdaptOption for &Probe<'a, Option<T>> {
    type Output = Nullable<'a, T>;

    fn adapt(&self) -> Nullable<'a, T> {
        Nullable(self.0)
    }
}

#[doc(hidden)]
pub trait AdaptPlain {
    type Output;
    fn adapt(&self) -> Self::Output;
}

impl<'a, T: ?Sized> AdaptPlain for Probe<'a, T> {
    type Output = &'a T;

    fn adapt(&self) -> &'a T {
        self.0
    }
}

/// An interpolated argument that remembers its plain `Display` text
///
/// When `keep` is set, a placeholder without width, precision or flags
/// formats the value into the cache and the message copies it from there.
/// Placeholders with a spec, and every other format trait, go straight to
/// the value.
#[doc(hidden)]
pub struct Rendered<V> {
    value: V,
    keep: bool,
    plain: OnceCell<String>,
}

impl<V> Rendered<V> {
    pub fn new(value: V, keep: bool) -> Self {
        Self {
            value,
            keep,
            plain: OnceCell::new(),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Plain `Display` text, if a placeholder already produced it
    pub fn plain(&self) -> Option<&str> {
        self.plain.get().map(String::as_str)
    }
}

fn is_plain(f: &fmt::Formatter<'_>) -> bool {
    f.width().is_none()
        && f.precision().is_none()
        && !f.alternate()
        && !f.sign_plus()
        && !f.sign_minus()
        && !f.sign_aware_zero_pad()
}

impl<V: fmt::Display> fmt::Display for Rendered<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.keep || !is_plain(f) {
            return fmt::Display::fmt(&self.value, f);
        }
        if let Some(text) = self.plain.get() {
            return f.write_str(text);
        }
        let mut text = String::new();
        write!(text, "{}", self.value)?;
        f.write_str(self.plain.get_or_init(|| text))
    }
}

macro_rules! forward_format {
    ($($trait:ident),+) => {$(
        impl<V: fmt::$trait> fmt::$trait for Rendered<V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$trait::fmt(&self.value, f)
            }
        }
    )+};
}

forward_format!(Debug, LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp, Pointer);

#[doc(hidden)]
pub trait DisplayProperty {
    fn to_property(&self) -> String;
}

impl<T: fmt::Display + ?Sized> DisplayProperty for &&Probe<'_, T> {
    fn to_property(&self) -> String {
        self.0.to_string()
    }
}

#[doc(hidden)]
pub trait DebugProperty {
    fn to_property(&self) -> String;
}

impl<T: fmt::Debug + ?Sized> DebugProperty for &Probe<'_, T> {
    fn to_property(&self) -> String {
        format!("{:?}", self.0)
    }
}

#[doc(hidden)]
pub trait OpaqueProperty {
    fn to_property(&self) -> String;
}

impl<T: ?Sized> OpaqueProperty for Probe<'_, T> {
    fn to_property(&self) -> String {
        format!("<{}>", std::any::type_name::<T>())
    }
}
