//! A module containing [`SetView`].

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;
use core::ops::ControlFlow;

use itertools::Itertools;

use crate::set::algebra;
use crate::utils::is_sorted_disjoint;
use crate::{Interval, Set};

/// A read-only interval set.
///
/// A `SetView` either borrows its intervals (from a [`Set`] via
/// [`Set::view()`], or from any sorted slice via
/// [`SetView::from_sorted_unchecked()`]) or owns a private copy of them
/// (via [`Set::snapshot()`]). Either way nothing can change its contents
/// for as long as it lives: a borrowing view holds a shared borrow of its
/// source, and a snapshot shares its copy with no one.
///
/// The algebra methods [`SetView::union()`], [`SetView::difference()`] and
/// [`SetView::intersection()`] leave the view untouched and return a new
/// [`Set`].
///
/// # Examples
/// ```
/// use intervalset::interval::ie;
/// use intervalset::{Set, SetView};
///
/// let weekdays = Set::from([ie(0, 5), ie(7, 12)]);
/// let mornings = Set::from([ie(0, 1), ie(5, 6), ie(11, 12)]);
///
/// let view = weekdays.view();
/// let weekday_mornings = view.intersection(&mornings);
///
/// assert_eq!(weekday_mornings, Set::from([ie(0, 1), ie(11, 12)]));
/// assert_eq!(view.to_string(), "{[0, 5), [7, 12)}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetView<'a, K>
where
	K: Interval,
{
	intervals: Cow<'a, [K]>,
}

impl<'a, K> SetView<'a, K>
where
	K: Interval,
{
	/// Wraps a slice of intervals without copying it.
	///
	/// The slice must already be sorted, disjoint (not even touching) and
	/// free of empty intervals, this is only checked in debug builds.
	///
	/// # Panics
	///
	/// Panics in debug builds if `intervals` is not sorted and disjoint.
	///
	/// # Examples
	/// ```
	/// use intervalset::interval::ie;
	/// use intervalset::SetView;
	///
	/// let intervals = [ie(0, 2), ie(4, 6)];
	/// let view = SetView::from_sorted_unchecked(&intervals);
	///
	/// assert_eq!(view.len(), 2);
	/// assert!(view.contains(&ie(4, 5)));
	/// ```
	#[track_caller]
	pub fn from_sorted_unchecked(intervals: &'a [K]) -> Self {
		debug_assert!(
			is_sorted_disjoint(intervals),
			"intervals must be sorted, disjoint and non-empty"
		);
		SetView {
			intervals: Cow::Borrowed(intervals),
		}
	}

	pub(crate) fn from_owned(intervals: Vec<K>) -> Self {
		SetView {
			intervals: Cow::Owned(intervals),
		}
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

	/// Returns `true` if a single member of the set covers the whole of
	/// `interval`. The empty interval is contained in every set.
	///
	/// Because members never touch, an interval spanning two of them is not
	/// contained: the gap between them is missing.
	pub fn contains(&self, interval: &K) -> bool {
		interval.is_empty()
			|| self
				.intervals
				.iter()
				.any(|member| member.contains_interval(interval))
	}

	/// Returns the smallest interval covering every member, or [`None`] if
	/// the set is empty.
	///
	/// # Examples
	/// ```
	/// use intervalset::interval::ie;
	/// use intervalset::Set;
	///
	/// assert_eq!(Set::from([ie(2, 4), ie(8, 9)]).view().extent(), Some(ie(2, 9)));
	/// assert_eq!(Set::<intervalset::Span<u8>>::new().view().extent(), None);
	/// ```
	pub fn extent(&self) -> Option<K> {
		let (first, rest) = self.intervals.split_first()?;
		Some(match rest.last() {
			Some(last) => first.encompass(last),
			None => first.clone(),
		})
	}

	/// Returns an iterator over the non-empty overlaps of the members with
	/// `bounds`, in ascending order.
	pub fn between<'b>(
		&'b self,
		bounds: &'b K,
	) -> impl Iterator<Item = K> + 'b {
		algebra::between(&self.intervals, bounds)
	}

	/// Calls `visit` with each non-empty overlap of the members with
	/// `bounds`, in ascending order, stopping as soon as `visit` returns
	/// [`ControlFlow::Break`].
	///
	/// Returns [`ControlFlow::Break`] if `visit` stopped the walk early.
	///
	/// # Examples
	/// ```
	/// use core::ops::ControlFlow;
	///
	/// use intervalset::interval::ie;
	/// use intervalset::Set;
	///
	/// let set = Set::from([ie(0, 2), ie(4, 6), ie(8, 10)]);
	///
	/// let mut seen = Vec::new();
	/// let flow = set.view().intervals_between(&ie(1, 9), |overlap| {
	/// 	seen.push(overlap);
	/// 	ControlFlow::Continue(())
	/// });
	///
	/// assert_eq!(flow, ControlFlow::Continue(()));
	/// assert_eq!(seen, [ie(1, 2), ie(4, 6), ie(8, 9)]);
	/// ```
	pub fn intervals_between<F>(&self, bounds: &K, visit: F) -> ControlFlow<()>
	where
		F: FnMut(K) -> ControlFlow<()>,
	{
		self.between(bounds).try_for_each(visit)
	}

	/// Returns a new [`Set`] containing every point in `self` or `other`.
	pub fn union<'b>(&self, other: impl Into<SetView<'b, K>>) -> Set<K>
	where
		K: 'b,
	{
		let other = other.into();
		Set::from_sorted_unchecked(algebra::union(&self.intervals, &other.intervals))
	}

	/// Returns a new [`Set`] containing every point in `self` but not in
	/// `other`.
	pub fn difference<'b>(&self, other: impl Into<SetView<'b, K>>) -> Set<K>
	where
		K: 'b,
	{
		let other = other.into();
		Set::from_sorted_unchecked(algebra::difference(
			&self.intervals,
			&other.intervals,
		))
	}

	/// Returns a new [`Set`] containing every point in both `self` and
	/// `other`.
	pub fn intersection<'b>(&self, other: impl Into<SetView<'b, K>>) -> Set<K>
	where
		K: 'b,
	{
		let other = other.into();
		Set::from_sorted_unchecked(algebra::intersection(
			&self.intervals,
			&other.intervals,
		))
	}

	/// Copies the intervals into a new, independently mutable [`Set`].
	pub fn to_set(&self) -> Set<K> {
		Set::from_sorted_unchecked(self.intervals.to_vec())
	}

	/// Converts the view into one that owns its intervals, copying them if
	/// they were borrowed.
	pub fn into_owned(self) -> SetView<'static, K>
	where
		K: 'static,
	{
		SetView::from_owned(self.intervals.into_owned())
	}
}

impl<'a, K> From<&'a Set<K>> for SetView<'a, K>
where
	K: Interval,
{
	fn from(set: &'a Set<K>) -> Self {
		set.view()
	}
}

impl<'a, 'b, K> From<&'b SetView<'a, K>> for SetView<'b, K>
where
	K: Interval,
{
	fn from(view: &'b SetView<'a, K>) -> Self {
		SetView {
			intervals: Cow::Borrowed(&view.intervals),
		}
	}
}

impl<'a, 'b, K> IntoIterator for &'b SetView<'a, K>
where
	K: Interval,
{
	type Item = &'b K;
	type IntoIter = core::slice::Iter<'b, K>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<K> fmt::Display for SetView<'_, K>
where
	K: Interval + fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{{}}}", self.intervals.iter().format(", "))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interval::ie;
	use crate::Span;

	fn set<const N: usize>(intervals: [Span<i32>; N]) -> Set<Span<i32>> {
		Set::from(intervals)
	}

	#[test]
	fn from_sorted_unchecked_borrows() {
		let intervals = [ie(0, 2), ie(4, 6)];
		let view = SetView::from_sorted_unchecked(&intervals);

		assert!(matches!(view.intervals, Cow::Borrowed(_)));
		assert_eq!(view.as_slice(), &intervals);
	}

	#[test]
	#[cfg(debug_assertions)]
	#[should_panic]
	fn from_sorted_unchecked_checks_in_debug() {
		let intervals = [ie(4, 6), ie(0, 2)];
		SetView::from_sorted_unchecked(&intervals);
	}

	#[test]
	fn union_tests() {
		let view = set([ie(20, 40)]).snapshot();

		assert_eq!(view.union(&set([ie(60, 111)])), set([ie(20, 40), ie(60, 111)]));
		assert_eq!(view.union(&set([ie(30, 111)])), set([ie(20, 111)]));
		assert_eq!(view.union(&set([])), set([ie(20, 40)]));

		// the view itself never changes
		assert_eq!(view.as_slice(), &[ie(20, 40)]);
	}

	#[test]
	fn difference_tests() {
		let view = set([ie(20, 40)]).snapshot();
		assert_eq!(view.difference(&set([ie(30, 111)])), set([ie(20, 30)]));

		let view = set([ie(0, 2), ie(4, 6), ie(8, 10)]).snapshot();
		assert_eq!(
			view.difference(&set([ie(1, 2), ie(5, 6), ie(9, 10)])),
			set([ie(0, 1), ie(4, 5), ie(8, 9)])
		);
		assert_eq!(view.len(), 3);
	}

	#[test]
	fn intersection_tests() {
		let a = set([ie(0, 2), ie(5, 7)]);
		let b = set([ie(1, 6)]);
		let want = set([ie(1, 2), ie(5, 6)]);

		assert_eq!(a.view().intersection(&b), want);
		assert_eq!(b.view().intersection(&a), want);
		assert_eq!(a.view().intersection(&a.view()), a);
	}

	#[test]
	fn contains_tests() {
		let empty = set([]);
		assert!(empty.view().contains(&Span::empty_at(0)));
		assert!(!empty.view().contains(&ie(0, 1)));

		let view = set([ie(0, 5), ie(10, 15)]).snapshot();
		assert!(view.contains(&ie(0, 5)));
		assert!(view.contains(&ie(11, 12)));
		assert!(!view.contains(&ie(0, 6)));
		assert!(!view.contains(&ie(4, 11)));
		assert!(view.contains(&Span::empty_at(7)));
	}

	#[test]
	fn extent_tests() {
		assert_eq!(set([]).view().extent(), None);
		assert_eq!(set([ie(3, 4)]).view().extent(), Some(ie(3, 4)));
		assert_eq!(
			set([ie(0, 2), ie(4, 6), ie(8, 10)]).view().extent(),
			Some(ie(0, 10))
		);
	}

	#[test]
	fn intervals_between_tests() {
		let view = set([ie(0, 2), ie(4, 6), ie(8, 10)]).snapshot();

		let mut seen = Vec::new();
		let flow = view.intervals_between(&ie(5, 20), |overlap| {
			seen.push(overlap);
			ControlFlow::Break(())
		});
		assert_eq!(flow, ControlFlow::Break(()));
		assert_eq!(seen, [ie(5, 6)]);

		assert_eq!(view.between(&ie(2, 4)).count(), 0);
		assert_eq!(view.between(&Span::empty_at(5)).count(), 0);
		assert_eq!(
			view.between(&ie(-10, 100)).collect::<Vec<_>>(),
			view.as_slice()
		);
	}

	#[test]
	fn into_owned_copies() {
		let intervals = [ie(0, 2)];
		let view = SetView::from_sorted_unchecked(&intervals).into_owned();

		assert!(matches!(view.intervals, Cow::Owned(_)));
		assert_eq!(view.to_set(), set([ie(0, 2)]));
	}

	#[test]
	fn display_tests() {
		assert_eq!(set([]).view().to_string(), "{}");
		assert_eq!(
			set([ie(0, 2), ie(4, 6)]).view().to_string(),
			"{[0, 2), [4, 6)}"
		);
	}
}
