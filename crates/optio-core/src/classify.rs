//! Presence classification
//!
//! A value enters the container through [`IntoOptional`], which decides
//! whether it is present or absent. Null-equivalent inputs are the ones that
//! carry their own "nothing" state:
//! - `Option::None`
//! - `Optional::Absent` (re-classification is idempotent)
//! - `serde_json::Value::Null`
//!
//! Wrappers classify through what they wrap: `Some(Value::Null)` and
//! `&Value::Null` are absent just like `Value::Null`. Every other type is
//! present by construction and opts in through the [`AlwaysPresent`] marker.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::Optional;

/// Conversion into an [`Optional`], classifying the input by nullability.
pub trait IntoOptional {
    /// Type held when the input classifies as present
    type Value;

    fn into_optional(self) -> Optional<Self::Value>;
}

/// Marker for types that have no null-equivalent state.
///
/// Any value of such a type classifies as present. Use
/// [`always_present!`](crate::always_present) to mark downstream types.
pub trait AlwaysPresent {}

impl<T: AlwaysPresent> IntoOptional for T {
    type Value = T;

    #[inline]
    fn into_optional(self) -> Optional<T> {
        Optional::Present(self)
    }
}

impl<T: IntoOptional> IntoOptional for Option<T> {
    type Value = T::Value;

    #[inline]
    fn into_optional(self) -> Optional<T::Value> {
        match self {
            Some(value) => value.into_optional(),
            None => Optional::Absent,
        }
    }
}

impl<'a, T> IntoOptional for &'a Option<T>
where
    &'a T: IntoOptional,
{
    type Value = <&'a T as IntoOptional>::Value;

    #[inline]
    fn into_optional(self) -> Optional<Self::Value> {
        self.as_ref().into_optional()
    }
}

impl<T> IntoOptional for Optional<T> {
    type Value = T;

    #[inline]
    fn into_optional(self) -> Optional<T> {
        self
    }
}

impl<'a, T> IntoOptional for &'a Optional<T> {
    type Value = &'a T;

    #[inline]
    fn into_optional(self) -> Optional<&'a T> {
        self.as_ref()
    }
}

impl IntoOptional for Value {
    type Value = Value;

    #[inline]
    fn into_optional(self) -> Optional<Value> {
        match self {
            Value::Null => Optional::Absent,
            other => Optional::Present(other),
        }
    }
}

impl<'a> IntoOptional for &'a Value {
    type Value = &'a Value;

    #[inline]
    fn into_optional(self) -> Optional<&'a Value> {
        match self {
            Value::Null => Optional::Absent,
            other => Optional::Present(other),
        }
    }
}

/// Mark one or more types as [`AlwaysPresent`].
///
/// ```rust
/// use optio_core::{always_present, Optional};
///
/// #[derive(Debug, PartialEq)]
/// struct UserId(u64);
/// always_present!(UserId);
///
/// assert!(Optional::of(UserId(7)).is_present());
/// ```
#[macro_export]
macro_rules! always_present {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::AlwaysPresent for $ty {})+
    };
}

always_present!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
    PathBuf,
    Duration,
);

// Pointers are only as present as their pointee
impl<'a, T: AlwaysPresent + ?Sized> AlwaysPresent for &'a T {}
impl<'a, T: AlwaysPresent + ?Sized> AlwaysPresent for &'a mut T {}
impl<T: AlwaysPresent + ?Sized> AlwaysPresent for Box<T> {}
impl<T: AlwaysPresent + ?Sized> AlwaysPresent for Rc<T> {}
impl<T: AlwaysPresent + ?Sized> AlwaysPresent for Arc<T> {}
impl<'a, B: AlwaysPresent + ToOwned + ?Sized> AlwaysPresent for Cow<'a, B> {}
impl<T> AlwaysPresent for [T] {}
impl<T> AlwaysPresent for Vec<T> {}
impl<T> AlwaysPresent for VecDeque<T> {}
impl<T, const N: usize> AlwaysPresent for [T; N] {}
impl<K, V, S> AlwaysPresent for HashMap<K, V, S> {}
impl<T, S> AlwaysPresent for HashSet<T, S> {}
impl<K, V> AlwaysPresent for BTreeMap<K, V> {}
impl<T> AlwaysPresent for BTreeSet<T> {}
impl<T, E> AlwaysPresent for Result<T, E> {}
impl<A, B> AlwaysPresent for (A, B) {}
impl<A, B, C> AlwaysPresent for (A, B, C) {}
impl<A, B, C, D> AlwaysPresent for (A, B, C, D) {}
