//! Optional Laws
//!
//! The algebraic laws both containers commit to. Combinator changes that
//! break any of them change what `Optional` means.
//!
//! # The Seven Laws
//!
//! | Code  | Law                | Statement                                              |
//! |-------|--------------------|--------------------------------------------------------|
//! | LAW-1 | Functor identity   | `m.map(id) == m`                                       |
//! | LAW-2 | Functor composition| `m.map(f).map(g) == m.map(g ∘ f)` for non-null `f`, `g` |
//! | LAW-3 | Left identity      | `present(a).flat_map(f) == f(a)`                       |
//! | LAW-4 | Right identity     | `m.flat_map(present) == m`                             |
//! | LAW-5 | Associativity      | `m.flat_map(f).flat_map(g) == m.flat_map(x => f(x).flat_map(g))` |
//! | LAW-6 | Null collapse      | `present(v).map(_ => None)` is absent                  |
//! | LAW-7 | Idempotent `of`    | `of(of(v)) == of(v)`                                   |
//!
//! The async container is a lifting of the sync one, so each law also holds
//! after awaiting both sides.
//!
//! # Usage
//!
//! ```rust
//! use optio_core::laws::{left_identity, Law};
//! use optio_core::Optional;
//!
//! let half = |n: i32| if n % 2 == 0 { Optional::present(n / 2) } else { Optional::empty() };
//! assert!(left_identity(8, half));
//! assert_eq!(Law::LeftIdentity.code(), "LAW-3");
//! ```

use std::fmt;

use crate::{AlwaysPresent, IntoOptional, Optional};

/// Laws every optional combinator preserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Law {
    /// LAW-1: mapping the identity function changes nothing
    FunctorIdentity = 1,

    /// LAW-2: two maps equal one map of the composition, as long as neither
    /// function returns a null-equivalent
    FunctorComposition = 2,

    /// LAW-3: wrapping then chaining equals applying
    LeftIdentity = 3,

    /// LAW-4: chaining the wrapping constructor changes nothing
    RightIdentity = 4,

    /// LAW-5: the nesting of chained transforms does not matter
    Associativity = 5,

    /// LAW-6: a map that returns a null-equivalent yields absent.
    ///
    /// This is why `map` is not a lawful functor for null-returning
    /// transforms, and why LAW-2 carries its side condition.
    NullCollapse = 6,

    /// LAW-7: classification applied twice equals classification once
    Idempotence = 7,
}

impl Law {
    /// Get the law code (e.g., "LAW-1")
    pub fn code(&self) -> &'static str {
        match self {
            Law::FunctorIdentity => "LAW-1",
            Law::FunctorComposition => "LAW-2",
            Law::LeftIdentity => "LAW-3",
            Law::RightIdentity => "LAW-4",
            Law::Associativity => "LAW-5",
            Law::NullCollapse => "LAW-6",
            Law::Idempotence => "LAW-7",
        }
    }

    /// Get the short name of the law
    pub fn name(&self) -> &'static str {
        match self {
            Law::FunctorIdentity => "Functor Identity",
            Law::FunctorComposition => "Functor Composition",
            Law::LeftIdentity => "Left Identity",
            Law::RightIdentity => "Right Identity",
            Law::Associativity => "Associativity",
            Law::NullCollapse => "Null Collapse",
            Law::Idempotence => "Idempotent Classification",
        }
    }

    /// Get all laws
    pub fn all() -> &'static [Law] {
        &[
            Law::FunctorIdentity,
            Law::FunctorComposition,
            Law::LeftIdentity,
            Law::RightIdentity,
            Law::Associativity,
            Law::NullCollapse,
            Law::Idempotence,
        ]
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.name())
    }
}

/// Law violation error
#[derive(Debug, Clone)]
pub struct LawViolation {
    pub law: Law,
    pub context: String,
}

impl fmt::Display for LawViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Optional law violation: {} - {}", self.law, self.context)
    }
}

impl std::error::Error for LawViolation {}

/// LAW-1 for one input
pub fn functor_identity<T>(m: &Optional<T>) -> bool
where
    T: IntoOptional<Value = T> + Clone + PartialEq,
{
    m.clone().map(|x| x) == *m
}

/// LAW-2 for one input
pub fn functor_composition<A, B, C, F, G>(m: &Optional<A>, f: F, g: G) -> bool
where
    A: Clone,
    B: IntoOptional<Value = B>,
    C: IntoOptional<Value = C> + PartialEq,
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    m.clone().map(&f).map(&g) == m.clone().map(|x| g(f(x)))
}

/// LAW-3 for one input
pub fn left_identity<A, B, F>(a: A, f: F) -> bool
where
    A: AlwaysPresent + Clone,
    B: PartialEq,
    F: Fn(A) -> Optional<B>,
{
    Optional::present(a.clone()).flat_map(&f) == f(a)
}

/// LAW-4 for one input
pub fn right_identity<T>(m: &Optional<T>) -> bool
where
    T: AlwaysPresent + Clone + PartialEq,
{
    m.clone().flat_map(Optional::present) == *m
}

/// LAW-5 for one input
pub fn associativity<A, B, C, F, G>(m: &Optional<A>, f: F, g: G) -> bool
where
    A: Clone,
    C: PartialEq,
    F: Fn(A) -> Optional<B>,
    G: Fn(B) -> Optional<C>,
{
    m.clone().flat_map(&f).flat_map(&g) == m.clone().flat_map(|x| f(x).flat_map(&g))
}

/// LAW-6 for one input
pub fn null_collapse<T: Clone>(m: &Optional<T>) -> bool {
    m.clone().map(|_| serde_json::Value::Null).is_absent()
}

/// LAW-7 for one input
pub fn idempotence<V>(value: V) -> bool
where
    V: IntoOptional + Clone,
    V::Value: PartialEq,
{
    Optional::of(Optional::of(value.clone())) == Optional::of(value)
}

/// Assert that a law holds, panicking if violated.
///
/// # Panics
///
/// Panics if the check returns `false`.
#[track_caller]
pub fn assert_law<F>(law: Law, context: &str, check: F)
where
    F: FnOnce() -> bool,
{
    if !check() {
        panic!(
            "{}",
            LawViolation {
                law,
                context: context.to_string(),
            }
        );
    }
}

/// Run `checker` for every law and collect the violations.
pub fn check_all_laws<F>(mut checker: F) -> Vec<LawViolation>
where
    F: FnMut(Law) -> Result<(), String>,
{
    let mut violations = Vec::new();

    for &law in Law::all() {
        if let Err(context) = checker(law) {
            violations.push(LawViolation { law, context });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use proptest::prelude::*;

    use crate::AsyncOptional;

    fn half(n: i64) -> Optional<i64> {
        if n % 2 == 0 {
            Optional::present(n / 2)
        } else {
            Optional::empty()
        }
    }

    fn positive(n: i64) -> Optional<i64> {
        Optional::present(n).filter(|v| *v > 0)
    }

    fn arb_optional() -> impl Strategy<Value = Optional<i64>> {
        proptest::option::of(-1_000_000i64..1_000_000).prop_map(Optional::from)
    }

    /// Law check wired for the checker-style API
    fn check(law: Law, m: Optional<i64>, v: Option<i64>) -> Result<(), String> {
        let holds = match law {
            Law::FunctorIdentity => functor_identity(&m),
            Law::FunctorComposition => functor_composition(&m, |x| x + 1, |x| x * 3),
            Law::LeftIdentity => left_identity(m.or_else(0), half),
            Law::RightIdentity => right_identity(&m),
            Law::Associativity => associativity(&m, half, positive),
            Law::NullCollapse => null_collapse(&m),
            Law::Idempotence => idempotence(v),
        };
        if holds {
            Ok(())
        } else {
            Err(format!("input {:?}", m))
        }
    }

    #[test]
    fn test_law_codes() {
        assert_eq!(Law::FunctorIdentity.code(), "LAW-1");
        assert_eq!(Law::Associativity.code(), "LAW-5");
        assert_eq!(Law::Idempotence.code(), "LAW-7");
    }

    #[test]
    fn test_all_laws() {
        assert_eq!(Law::all().len(), 7);
    }

    #[test]
    fn test_law_display() {
        let display = format!("{}", Law::LeftIdentity);
        assert!(display.contains("LAW-3"));
        assert!(display.contains("Left Identity"));
    }

    #[test]
    #[should_panic(expected = "Optional law violation")]
    fn test_assert_law_panics() {
        assert_law(Law::RightIdentity, "Test violation", || false);
    }

    #[test]
    fn test_check_all_laws_reports_violations() {
        let violations = check_all_laws(|law| {
            if law == Law::NullCollapse {
                Err("Test violation".to_string())
            } else {
                Ok(())
            }
        });

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].law, Law::NullCollapse);
    }

    #[test]
    fn test_null_collapse_on_absent() {
        assert!(null_collapse(&Optional::<i64>::empty()));
    }

    proptest! {
        #[test]
        fn prop_all_laws_hold(m in arb_optional(), v in proptest::option::of(any::<i64>())) {
            let violations = check_all_laws(|law| check(law, m, v));
            prop_assert!(violations.is_empty(), "{:?}", violations);
        }

        #[test]
        fn prop_of_matches_nullability(v in proptest::option::of(any::<i64>())) {
            let classified = Optional::of(v);
            prop_assert_eq!(classified.is_present(), v.is_some());
            prop_assert_eq!(classified.is_absent(), v.is_none());
            prop_assert_eq!(classified.get().ok(), v);
        }

        #[test]
        fn prop_lifted_map_agrees_with_sync(m in arb_optional()) {
            let sync = m.map(|x| x.checked_mul(2)).flat_map(half);
            let lifted = block_on(
                AsyncOptional::from_optional(m)
                    .map_async(|x| async move { x.checked_mul(2) })
                    .flat_map(half),
            );
            assert_law(Law::FunctorComposition, "lifted map_async then flat_map", || sync == lifted);
        }

        #[test]
        fn prop_lifted_associativity(m in arb_optional()) {
            let left = block_on(
                AsyncOptional::from_optional(m)
                    .flat_map_async(|x| async move { half(x) })
                    .flat_map(positive),
            );
            let right = block_on(
                AsyncOptional::from_optional(m)
                    .flat_map_async(|x| async move { half(x).flat_map(positive) }),
            );
            assert_law(Law::Associativity, "lifted flat_map_async", || left == right);
        }
    }
}
