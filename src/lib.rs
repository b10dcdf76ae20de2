//! This crate provides [`Set`] and [`SetView`], Data Structures for storing
//! a subset of a totally ordered domain as a sorted sequence of disjoint
//! intervals, along with set algebra (union, difference and intersection)
//! and range queries over them.
//!
//! The set never looks at point values directly, it only calls the
//! methods of the [`Interval`] trait. The crate ships three domains built on
//! that:
//!
//! - [`Span<T>`], a half-open `[start, end)` interval over any [`PointType`]
//! - [`RealInterval`], a plain integer interval
//! - [`TimeSpan`], a [`Span`] of [`chrono::DateTime<Utc>`](chrono::DateTime)
//!
//! along with [`IntInterval`], an interval over a cyclic integer domain
//! which may wrap around its modulus, and [`ModularSet`], a set of them.
//!
//! ## Example using an Inclusive-Exclusive interval
//!
//! ```rust
//! use intervalset::interval::ie;
//! use intervalset::Set;
//!
//! let mut set = Set::from([ie(20, 40)]);
//!
//! set.add(&Set::from([ie(60, 111)]));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.extent(), Some(ie(20, 111)));
//!
//! set.sub(&Set::from([ie(30, 70)]));
//!
//! assert_eq!(set.to_string(), "{[20, 30), [70, 111)}");
//! assert_eq!(set.contains(&ie(80, 90)), true);
//! assert_eq!(set.contains(&ie(25, 75)), false);
//! ```
//!
//! ## Example using a modular interval
//!
//! ```rust
//! use intervalset::{IntInterval, Modulus};
//!
//! // 9, 0, 1 and 2 on a clock with ten positions
//! let interval = IntInterval::from_start_size(Modulus::new(10), 9, 4)?;
//!
//! assert_eq!(interval.end(), 3);
//! assert_eq!(interval.contains(2), true);
//! assert_eq!(interval.contains(12), true);
//! assert_eq!(interval.contains(3), false);
//! assert_eq!(interval.to_string(), "<mod=10; [9, 9], [0, 2]>");
//! # Ok::<(), intervalset::IntervalError>(())
//! ```
//!
//! ## Example using read-only views
//!
//! A [`SetView`] can be taken from a [`Set`] without copying, or wrapped
//! around any sorted slice, and used wherever a right-hand operand is
//! expected:
//!
//! ```rust
//! use intervalset::interval::ie;
//! use intervalset::{Set, SetView};
//!
//! let holidays = [ie(0, 2), ie(10, 12)];
//! let holidays = SetView::from_sorted_unchecked(&holidays);
//!
//! let mut working = Set::from([ie(0, 14)]);
//! working.sub(&holidays);
//!
//! assert_eq!(working.as_slice(), [ie(2, 10), ie(12, 14)]);
//! assert_eq!(holidays.union(&working), Set::from([ie(0, 14)]));
//! ```
//!
//! # Key Understandings and Philosophies
//!
//! ## Sorted, Disjoint and Non-Adjacent
//!
//! Every [`Set`] keeps its intervals in ascending order, with no two of them
//! overlapping or even touching: `[0, 2)` and `[2, 4)` are always merged into
//! `[0, 4)`. This means any subset of the domain has exactly one
//! representation, so two sets are equal exactly when their interval
//! sequences are equal.
//!
//! ## Empty and Complete Modular Intervals
//!
//! On a cyclic domain an interval's start and end coincide both when it is
//! empty and when it covers the whole domain. [`IntInterval`] therefore
//! stores a size instead of an end, use [`IntInterval::is_empty()`] and
//! [`IntInterval::is_complete()`] rather than comparing positions.
//!
//! ## Linear Time
//!
//! The algebra is implemented as merge-style scans over the two sorted
//! sequences, so every operation runs in time linear in their combined
//! length.

#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;

pub(crate) mod utils;

pub mod error;
pub mod interval;
pub mod modular;
pub mod real;
pub mod set;
pub mod timespan;

pub use crate::error::IntervalError;
pub use crate::interval::{Interval, PointType, Span};
pub use crate::modular::{IntInterval, ModularSet, Modulus};
pub use crate::real::RealInterval;
pub use crate::set::{Set, SetView};
pub use crate::timespan::{TimeSpan, TimeSpanSet};
