//! Approximate equality.

mod impls;

use std::{fmt, panic::Location};

/// Returns `true` when `a` and `b` differ by strictly less than [`f32::EPSILON`].
///
/// This is the scalar comparison the rest of the crate's equality checks are calibrated
/// against. It is *not* a general-purpose tolerance function: callers that need a looser
/// bound (eg. for values far from 1.0) must implement their own.
///
/// # Examples
///
/// ```
/// # use la::feq;
/// assert!(feq(1.0, 1.0));
/// assert!(!feq(1.0, 1.001));
/// ```
pub fn feq(a: f32, b: f32) -> bool {
    (a - b).abs() < f32::EPSILON
}

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their
/// elements are.
///
/// For more information on the subtleties of approximate floating-point number
/// comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to
    /// `abs_tolerance`, the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: f32) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to the
    /// largest of the two values times `rel_tolerance`, the values are considered to be
    /// equal.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: f32) -> bool;
}

/// Assertion guard returned by the [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne] macros.
///
/// This type will check the assertion when dropped, and has methods that allow
/// configuring the comparison and the tolerances to use:
///
/// - [`Asserter::abs`] compares the values' *absolute difference* via
///   [`ApproxEq::abs_diff_eq`].
/// - [`Asserter::rel`] compares the values' *relative difference* via
///   [`ApproxEq::rel_diff_eq`].
///
/// If both methods are called, the values are considered equal if *either* comparison
/// considers them equal (ie. the results are ORed together).
///
/// If neither method is called, a *default comparison* is performed: an absolute
/// comparison with a tolerance of [`f32::EPSILON`], ORed with a relative comparison
/// with a tolerance of [`f32::EPSILON`].
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<f32>,
    rel: Option<f32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
        }
    }

    /// Perform an *absolute comparison* of the values with the given tolerance.
    ///
    /// This type of comparison is typically a good choice when comparing values that
    /// are relatively close to zero and potentially have opposing signs.
    pub fn abs(&mut self, abs: f32) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Perform a *relative comparison* of the values with the given tolerance.
    ///
    /// This type of comparison is a good default for numbers that aren't very close to
    /// zero. For numbers close to zero, a very large relative tolerance might be
    /// required (eg. any non-zero number will only compare equal to 0.0 with a relative
    /// tolerance of at least 1.0).
    pub fn rel(&mut self, rel: f32) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    fn equal(&mut self) -> bool {
        if let Some(abs) = self.abs.take() {
            if T::abs_diff_eq(self.left, self.right, abs) {
                return true;
            }
        }
        if let Some(rel) = self.rel.take() {
            if T::rel_diff_eq(self.left, self.right, rel) {
                return true;
            }
        }

        false
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // FIXME: `#[track_caller]` does not work on destructors, so the assertion location
    // is captured in `new` and printed manually.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() {
            // Configure default behavior.
            self.abs = Some(f32::EPSILON);
            self.rel = Some(f32::EPSILON);
        }

        let equal = self.equal();
        if (!equal && self.kind == AssertionKind::Eq) || (equal && self.kind == AssertionKind::Ne) {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        // If the panic output takes you here, you've probably clicked on the wrong
        // location. `#[track_caller]` doesn't work correctly on `drop`, so we manually
        // print the correct location of the assertion.
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using
/// [`ApproxEq`]).
///
/// This macro functions identically to [`assert_eq!`], except in that it uses the
/// [`ApproxEq`] trait to perform an approximate comparison, and returns an [`Asserter`]
/// that can be used to configure the exact type of comparison, as well as the tolerance
/// values to use.
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// Default approximate comparison:
///
/// ```
/// # use la::assert_approx_eq;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1f32);
/// assert_approx_eq!(one, 1.0);
/// ```
///
/// Perform absolute and relative comparisons with custom tolerance values:
///
/// ```
/// # use la::assert_approx_eq;
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using
/// [`ApproxEq`]).
///
/// This macro functions identically to [`assert_ne!`], except in that it uses the
/// [`ApproxEq`] trait to perform an approximate comparison, and returns an [`Asserter`]
/// that can be used to configure the exact type of comparison, as well as the tolerance
/// values to use.
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use la::assert_approx_ne;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+))
        )
    };
}
