//! A module containing the time domain: [`TimeSpan`], [`TimeSpanSet`] and
//! the start/end convenience methods on every [`Set`] of [`Span`]s.
//!
//! Timestamps are [`chrono::DateTime<Utc>`], which are totally ordered, so
//! time needs nothing beyond the generic [`Span`] and [`Set`].

use core::ops::ControlFlow;

use chrono::{DateTime, Utc};

use crate::{PointType, Set, Span};

/// A half-open span of time `[start, end)`.
pub type TimeSpan = Span<DateTime<Utc>>;

/// A set of disjoint spans of time.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use intervalset::TimeSpanSet;
///
/// let june = |day| Utc.with_ymd_and_hms(2015, 6, day, 0, 0, 0).unwrap();
///
/// let mut set = TimeSpanSet::new();
/// set.insert_span(june(1), june(8));
/// set.insert_span(june(15), june(22));
///
/// assert!(set.contains_span(june(2), june(3)));
/// assert!(!set.contains_span(june(2), june(16)));
/// assert_eq!(set.extent_span(), Some((june(1), june(22))));
/// ```
pub type TimeSpanSet = Set<TimeSpan>;

impl<T> Set<Span<T>>
where
	T: PointType,
{
	/// Adds every point in `[start, end)` to the set. Nothing is added if
	/// `start >= end`.
	pub fn insert_span(&mut self, start: T, end: T) {
		self.insert(Span::new(start, end));
	}

	/// Returns `true` if every point in `[start, end)` is in the set.
	pub fn contains_span(&self, start: T, end: T) -> bool {
		self.contains(&Span::new(start, end))
	}

	/// Returns `true` if `point` is in the set.
	pub fn contains_point(&self, point: T) -> bool {
		let after = self.as_slice().partition_point(|span| span.end() <= point);
		self.as_slice()
			.get(after)
			.is_some_and(|span| span.contains(point))
	}

	/// Returns the start of the first member and the end of the last, or
	/// [`None`] if the set is empty.
	pub fn extent_span(&self) -> Option<(T, T)> {
		self.extent().map(|extent| (extent.start(), extent.end()))
	}

	/// Calls `visit` with the start and end of each non-empty overlap of the
	/// set with `[start, end)`, in ascending order, stopping as soon as
	/// `visit` returns [`ControlFlow::Break`].
	///
	/// See [`SetView::intervals_between()`](crate::SetView::intervals_between)
	/// for more details.
	pub fn spans_between<F>(&self, start: T, end: T, mut visit: F) -> ControlFlow<()>
	where
		F: FnMut(T, T) -> ControlFlow<()>,
	{
		self.intervals_between(&Span::new(start, end), |overlap| {
			visit(overlap.start(), overlap.end())
		})
	}
}
