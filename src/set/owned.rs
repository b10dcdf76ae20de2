//! A module containing [`Set`].

use alloc::vec::Vec;
use core::fmt;
use core::ops::ControlFlow;

use crate::set::algebra;
use crate::utils::is_sorted_disjoint;
use crate::{Interval, SetView};

/// A mutable set of points stored as a sorted sequence of disjoint
/// intervals.
///
/// `K` is the interval type, anything implementing [`Interval`]. The set
/// only ever talks to its intervals through that trait, so the same `Set`
/// serves plain integers ([`RealInterval`](crate::RealInterval)), any
/// ordered point type ([`Span`](crate::Span)) and timestamps
/// ([`TimeSpan`](crate::TimeSpan)).
///
/// Every mutation keeps the members sorted, disjoint and non-empty, merging
/// intervals that overlap or touch.
///
/// # Examples
/// ```
/// use intervalset::interval::ie;
/// use intervalset::Set;
///
/// let mut set = Set::new();
///
/// set.insert(ie(0, 5));
/// set.insert(ie(10, 15));
/// set.insert(ie(5, 7));
///
/// assert_eq!(set.as_slice(), [ie(0, 7), ie(10, 15)]);
///
/// set.sub(&Set::from([ie(3, 12)]));
///
/// assert_eq!(set.as_slice(), [ie(0, 3), ie(12, 15)]);
/// assert_eq!(set.to_string(), "{[0, 3), [12, 15)}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Set<K> {
	intervals: Vec<K>,
}

impl<K> Set<K>
where
	K: Interval,
{
	/// Makes a new, empty [`Set`].
	///
	/// # Examples
	/// ```
	/// use intervalset::{Set, Span};
	///
	/// let set: Set<Span<i8>> = Set::new();
	///
	/// assert!(set.is_empty());
	/// ```
	pub fn new() -> Self {
		Set {
			intervals: Vec::new(),
		}
	}

	/// Makes a [`Set`] directly from intervals which are already sorted,
	/// disjoint (not even touching) and non-empty, without any merging.
	///
	/// # Panics
	///
	/// Panics in debug builds if `intervals` is not sorted and disjoint.
	#[track_caller]
	pub fn from_sorted_unchecked(intervals: Vec<K>) -> Self {
		debug_assert!(
			is_sorted_disjoint(&intervals),
			"intervals must be sorted, disjoint and non-empty"
		);
		Set { intervals }
	}

	/// Returns a [`SetView`] borrowing this set's intervals, no copy is made.
	///
	/// The set cannot be mutated while the view is alive.
	pub fn view(&self) -> SetView<'_, K> {
		SetView::from_sorted_unchecked(&self.intervals)
	}

	/// Returns a [`SetView`] owning a copy of this set's current intervals.
	///
	/// Later mutations of the set are never visible through the snapshot.
	///
	/// # Examples
	/// ```
	/// use intervalset::interval::ie;
	/// use intervalset::Set;
	///
	/// let mut set = Set::from([ie(0, 5)]);
	/// let snapshot = set.snapshot();
	///
	/// set.insert(ie(8, 9));
	///
	/// assert_eq!(snapshot.as_slice(), [ie(0, 5)]);
	/// assert_eq!(set.len(), 2);
	/// ```
	pub fn snapshot(&self) -> SetView<'static, K>
	where
		K: 'static,
	{
		SetView::from_owned(self.intervals.clone())
	}

	/// Adds every point of `interval` to the set, merging it with any
	/// members it overlaps or touches. Empty intervals are ignored.
	///
	/// # Examples
	/// ```
	/// use intervalset::interval::ie;
	/// use intervalset::Set;
	///
	/// let mut set = Set::from([ie(0, 2), ie(4, 6), ie(8, 10)]);
	///
	/// set.insert(ie(1, 9));
	///
	/// assert_eq!(set.as_slice(), [ie(0, 10)]);
	/// ```
	pub fn insert(&mut self, interval: K) {
		if interval.is_empty() {
			return;
		}
		self.intervals =
			algebra::union(&self.intervals, core::slice::from_ref(&interval));
	}

	/// Adds every point of `other` to the set.
	pub fn add<'a>(&mut self, other: impl Into<SetView<'a, K>>)
	where
		K: 'a,
	{
		let other = other.into();
		self.intervals = algebra::union(&self.intervals, other.as_slice());
	}

	/// Removes every point of `other` from the set.
	pub fn sub<'a>(&mut self, other: impl Into<SetView<'a, K>>)
	where
		K: 'a,
	{
		let other = other.into();
		self.intervals = algebra::difference(&self.intervals, other.as_slice());
	}

	/// Removes every point not also in `other` from the set.
	pub fn intersect<'a>(&mut self, other: impl Into<SetView<'a, K>>)
	where
		K: 'a,
	{
		let other = other.into();
		self.intervals = algebra::intersection(&self.intervals, other.as_slice());
	}

	/// See [`SetView::contains()`] for more details.
	pub fn contains(&self, interval: &K) -> bool {
		self.view().contains(interval)
	}

	/// See [`SetView::extent()`] for more details.
	pub fn extent(&self) -> Option<K> {
		self.view().extent()
	}

	/// See [`SetView::between()`] for more details.
	pub fn between<'b>(
		&'b self,
		bounds: &'b K,
	) -> impl Iterator<Item = K> + 'b {
		algebra::between(&self.intervals, bounds)
	}

	/// See [`SetView::intervals_between()`] for more details.
	pub fn intervals_between<F>(&self, bounds: &K, visit: F) -> ControlFlow<()>
	where
		F: FnMut(K) -> ControlFlow<()>,
	{
		self.between(bounds).try_for_each(visit)
	}

	/// Returns the intervals as a slice in ascending order.
	pub fn as_slice(&self) -> &[K] {
		&self.intervals
	}

	/// Returns an iterator over the intervals in ascending order.
	pub fn iter(&self) -> core::slice::Iter<'_, K> {
		self.intervals.iter()
	}

	/// Returns the number of disjoint intervals in the set.
	pub fn len(&self) -> usize {
		self.intervals.len()
	}

	/// Returns `true` if the set contains no points.
	pub fn is_empty(&self) -> bool {
		self.intervals.is_empty()
	}

	/// Consumes the set, returning its intervals in ascending order.
	pub fn into_vec(self) -> Vec<K> {
		self.intervals
	}
}

impl<K> Default for Set<K> {
	fn default() -> Self {
		Set {
			intervals: Vec::new(),
		}
	}
}

impl<K> FromIterator<K> for Set<K>
where
	K: Interval,
{
	fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
		Set {
			intervals: algebra::union_all(iter),
		}
	}
}

impl<K> Extend<K> for Set<K>
where
	K: Interval,
{
	fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
		let others = algebra::union_all(iter);
		self.intervals = algebra::union(&self.intervals, &others);
	}
}

impl<const N: usize, K> From<[K; N]> for Set<K>
where
	K: Interval,
{
	fn from(intervals: [K; N]) -> Self {
		Set::from_iter(intervals)
	}
}

impl<K> IntoIterator for Set<K> {
	type Item = K;
	type IntoIter = alloc::vec::IntoIter<K>;

	fn into_iter(self) -> Self::IntoIter {
		self.intervals.into_iter()
	}
}

impl<'a, K> IntoIterator for &'a Set<K> {
	type Item = &'a K;
	type IntoIter = core::slice::Iter<'a, K>;

	fn into_iter(self) -> Self::IntoIter {
		self.intervals.iter()
	}
}

impl<K> fmt::Display for Set<K>
where
	K: Interval + fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.view(), f)
	}
}
