//! A module containing the interval set types, the mutable [`Set`] and the
//! read-only [`SetView`].
//!
//! Both hold a sequence of intervals which is always:
//!
//! - sorted in ascending order by [`Interval::before()`]
//! - disjoint, no two members overlap or even touch
//! - free of empty intervals
//!
//! so that any set of points has exactly one representation, and two sets
//! are equal exactly when their interval sequences are equal.
//!
//! The two types share one set of merge algorithms. A [`Set`] replaces its
//! own sequence with the result, while a [`SetView`] never changes and
//! hands back a new [`Set`] instead. Every operation taking "another set"
//! accepts anything that converts into a [`SetView`], so `&Set` and
//! `&SetView` can be mixed freely.
//!
//! [`Interval::before()`]: crate::Interval::before

pub(crate) mod algebra;
pub mod owned;
pub mod view;

pub use owned::Set;
pub use view::SetView;
