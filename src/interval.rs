//! A module containing the [`Interval`] capability trait, the [`PointType`]
//! marker trait, and [`Span`], a generic half-open interval type along with
//! its constructor function [`ie()`].

use core::fmt;

/// The marker trait for valid point types, a blanket implementation is
/// provided for all types which implement this traits' super-traits so you
/// shouldn't need to implement this yourself.
pub trait PointType: Ord + Copy {}
impl<T> PointType for T where T: Ord + Copy {}

/// The capabilities an interval type must provide to be stored in a
/// [`Set`](crate::Set).
///
/// The set algorithms never look at point values directly, they only ever
/// call these methods. That is what lets one [`Set`](crate::Set)
/// implementation serve integers, timestamps, or any other totally ordered
/// domain.
///
/// Implementations are treated as immutable values: every method returns a
/// new value rather than mutating `self`. Every implementation must have at
/// least one "empty" value (one for which [`Interval::is_empty()`] returns
/// `true`) which is returned whenever a result contains no points.
///
/// # Examples
/// ```
/// use intervalset::interval::ie;
/// use intervalset::Interval;
///
/// let a = ie(0, 10);
/// let b = ie(5, 15);
///
/// assert_eq!(a.intersect(&b), ie(5, 10));
/// assert_eq!(a.encompass(&ie(20, 30)), ie(0, 30));
/// assert_eq!(a.adjoin(&ie(10, 12)), ie(0, 12));
/// assert!(a.adjoin(&b).is_empty());
/// assert!(a.before(&ie(10, 12)));
/// ```
pub trait Interval: Clone {
	/// Returns the overlap of `self` and `other`, or an empty interval if
	/// they do not overlap.
	fn intersect(&self, other: &Self) -> Self;

	/// Returns `true` if `self` ends at or before the point where `other`
	/// begins.
	fn before(&self, other: &Self) -> bool;

	/// Splits `self` into the portion strictly before its overlap with
	/// `other` and the portion strictly after it. Either may be empty.
	///
	/// If the two do not overlap then `self` is returned whole on whichever
	/// side of `other` it lies.
	fn bisect(&self, other: &Self) -> (Self, Self);

	/// Returns the union of `self` and `other` if they are exactly
	/// edge-adjacent (no gap and no overlap), otherwise an empty interval.
	fn adjoin(&self, other: &Self) -> Self;

	/// Returns the smallest interval containing both `self` and `other`,
	/// including any gap between them.
	fn encompass(&self, other: &Self) -> Self;

	/// Returns `true` if the interval contains no points.
	fn is_empty(&self) -> bool;

	/// Returns `true` if `self` and `other` overlap or are edge-adjacent,
	/// that is if they would merge into one interval inside a set.
	fn touches(&self, other: &Self) -> bool {
		!self.intersect(other).is_empty() || !self.adjoin(other).is_empty()
	}

	/// Returns `true` if every point of `other` is also in `self`.
	///
	/// An empty `other` is contained in everything.
	fn contains_interval(&self, other: &Self) -> bool {
		if other.is_empty() {
			return true;
		}
		let (before, after) = other.bisect(self);
		before.is_empty() && after.is_empty()
	}
}

/// A half-open interval `[start, end)` over any [`PointType`].
///
/// A `Span` is empty whenever `start >= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span<T> {
	start: T,
	end: T,
}

impl<T> Span<T>
where
	T: PointType,
{
	/// Makes a new [`Span`] containing every point `p` with
	/// `start <= p < end`.
	///
	/// # Examples
	/// ```
	/// use intervalset::Span;
	///
	/// let span = Span::new(2, 5);
	///
	/// assert_eq!(span.contains(2), true);
	/// assert_eq!(span.contains(5), false);
	/// ```
	pub fn new(start: T, end: T) -> Self {
		Span { start, end }
	}

	/// The empty span positioned at `point`.
	pub fn empty_at(point: T) -> Self {
		Span {
			start: point,
			end: point,
		}
	}

	/// The inclusive start of the span.
	pub fn start(&self) -> T {
		self.start
	}

	/// The exclusive end of the span.
	pub fn end(&self) -> T {
		self.end
	}

	/// Returns `true` if `point` lies inside the span.
	pub fn contains(&self, point: T) -> bool {
		self.start <= point && point < self.end
	}
}

/// An included-excluded span, `[start, end)`.
pub fn ie<T>(start: T, end: T) -> Span<T>
where
	T: PointType,
{
	Span::new(start, end)
}

impl<T> Interval for Span<T>
where
	T: PointType,
{
	fn intersect(&self, other: &Self) -> Self {
		let start = self.start.max(other.start);
		let end = self.end.min(other.end);
		if start < end {
			Span { start, end }
		} else {
			Span::empty_at(start)
		}
	}

	fn before(&self, other: &Self) -> bool {
		self.end <= other.start
	}

	fn bisect(&self, other: &Self) -> (Self, Self) {
		let overlap = self.intersect(other);
		if overlap.is_empty() {
			return match self.before(other) {
				true => (*self, Span::empty_at(self.end)),
				false => (Span::empty_at(self.start), *self),
			};
		}

		(
			Span::new(self.start, overlap.start),
			Span::new(overlap.end, self.end),
		)
	}

	fn adjoin(&self, other: &Self) -> Self {
		if self.is_empty() || other.is_empty() {
			return Span::empty_at(self.start);
		}
		if self.end == other.start {
			Span::new(self.start, other.end)
		} else if other.end == self.start {
			Span::new(other.start, self.end)
		} else {
			Span::empty_at(self.start)
		}
	}

	fn encompass(&self, other: &Self) -> Self {
		match (self.is_empty(), other.is_empty()) {
			(true, _) => *other,
			(false, true) => *self,
			(false, false) => Span::new(
				self.start.min(other.start),
				self.end.max(other.end),
			),
		}
	}

	fn is_empty(&self) -> bool {
		self.start >= self.end
	}
}

impl<T> fmt::Display for Span<T>
where
	T: PointType + fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("[empty)");
		}
		write!(f, "[{}, {})", self.start, self.end)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	//a bit wider than the spans so that points either side get checked
	const NUMBERS_DOMAIN: &[i8] = &[-1, 0, 1, 2, 3, 4, 5, 6, 7];

	fn all_valid_test_spans() -> Vec<Span<i8>> {
		let mut output = Vec::new();
		for start in 0..=6 {
			for end in (start + 1)..=6 {
				output.push(ie(start, end));
			}
		}
		output
	}

	#[test]
	fn intersect_tests() {
		for a in all_valid_test_spans() {
			for b in all_valid_test_spans() {
				let result = a.intersect(&b);
				for x in NUMBERS_DOMAIN {
					let expected = a.contains(*x) && b.contains(*x);
					if result.contains(*x) != expected {
						dbg!(a, b, result, x);
						panic!("Discrepancy in intersect() detected!");
					}
				}
				assert_eq!(result.is_empty(), !NUMBERS_DOMAIN
					.iter()
					.any(|x| a.contains(*x) && b.contains(*x)));
			}
		}
	}

	#[test]
	fn bisect_tests() {
		for base in all_valid_test_spans() {
			for cut in all_valid_test_spans() {
				let (lower, upper) = base.bisect(&cut);

				let mut on_left = true;
				// The definition of a bisection is: A && NOT B, split around B
				for x in NUMBERS_DOMAIN {
					let base_contains = base.contains(*x);
					let cut_contains = cut.contains(*x);
					if cut_contains {
						on_left = false;
					}

					let invariant = match (base_contains, cut_contains) {
						(false, _) => !lower.contains(*x) && !upper.contains(*x),
						(true, true) => !lower.contains(*x) && !upper.contains(*x),
						(true, false) => match on_left {
							true => lower.contains(*x) && !upper.contains(*x),
							false => !lower.contains(*x) && upper.contains(*x),
						},
					};

					if !invariant {
						dbg!(base, cut, lower, upper, x, on_left);
						panic!("Invariant Broken!");
					}
				}
			}
		}
	}

	#[test]
	fn bisect_non_overlapping() {
		assert_eq!(ie(0, 2).bisect(&ie(5, 6)).0, ie(0, 2));
		assert!(ie(0, 2).bisect(&ie(5, 6)).1.is_empty());
		assert!(ie(5, 6).bisect(&ie(0, 2)).0.is_empty());
		assert_eq!(ie(5, 6).bisect(&ie(0, 2)).1, ie(5, 6));
	}

	#[test]
	fn adjoin_tests() {
		assert_eq!(ie(1, 3).adjoin(&ie(3, 5)), ie(1, 5));
		assert_eq!(ie(3, 5).adjoin(&ie(1, 3)), ie(1, 5));
		assert!(ie(1, 3).adjoin(&ie(4, 5)).is_empty());
		assert!(ie(1, 4).adjoin(&ie(3, 5)).is_empty());
		assert!(ie(3, 3).adjoin(&ie(3, 5)).is_empty());
	}

	#[test]
	fn encompass_tests() {
		assert_eq!(ie(1, 3).encompass(&ie(6, 8)), ie(1, 8));
		assert_eq!(ie(6, 8).encompass(&ie(1, 3)), ie(1, 8));
		assert_eq!(ie(2, 8).encompass(&ie(3, 4)), ie(2, 8));
		assert_eq!(ie(2, 8).encompass(&ie(0, 0)), ie(2, 8));
		assert_eq!(ie(0, 0).encompass(&ie(2, 8)), ie(2, 8));
	}

	#[test]
	fn before_tests() {
		assert!(ie(1, 3).before(&ie(3, 5)));
		assert!(ie(1, 3).before(&ie(4, 5)));
		assert!(!ie(1, 4).before(&ie(3, 5)));
		assert!(!ie(3, 5).before(&ie(1, 3)));
	}

	#[test]
	fn touches_tests() {
		for a in all_valid_test_spans() {
			for b in all_valid_test_spans() {
				let mathematical_definition_of_touching = a.end() >= b.start()
					&& b.end() >= a.start();
				assert_eq!(a.touches(&b), mathematical_definition_of_touching);
			}
		}
	}

	#[test]
	fn contains_interval_tests() {
		assert!(ie(0, 10).contains_interval(&ie(2, 4)));
		assert!(ie(0, 10).contains_interval(&ie(0, 10)));
		assert!(ie(0, 10).contains_interval(&ie(7, 7)));
		assert!(!ie(0, 10).contains_interval(&ie(5, 11)));
		assert!(!ie(0, 10).contains_interval(&ie(12, 14)));
	}

	#[test]
	fn display_tests() {
		assert_eq!(ie(1, 3).to_string(), "[1, 3)");
		assert_eq!(ie(3, 3).to_string(), "[empty)");
	}
}
