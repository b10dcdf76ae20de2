//! A module containing [`RealInterval`].

use core::fmt;

use crate::Interval;

/// A non-modular integer interval `[start, end)`.
///
/// The ends are stored as they are, so any pair of `i64`s can be held
/// without overflowing. Since the end is exclusive, `i64::MAX` itself is
/// never inside a [`RealInterval`].
///
/// This is the type [`IntInterval::real_intervals()`] decomposes a modular
/// interval into, and since it implements [`Interval`] it is also the
/// interval type for plain integer [`Set`](crate::Set)s.
///
/// [`IntInterval::real_intervals()`]: crate::IntInterval::real_intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RealInterval {
	start: i64,
	end: i64,
}

impl RealInterval {
	/// The empty interval.
	pub const EMPTY: RealInterval = RealInterval { start: 0, end: 0 };

	/// Makes a new [`RealInterval`] from a starting position and a size.
	///
	/// A negative `size` gives the empty interval. The end saturates at
	/// `i64::MAX`.
	///
	/// # Examples
	/// ```
	/// use intervalset::RealInterval;
	///
	/// let interval = RealInterval::from_start_size(3, 3);
	///
	/// assert_eq!(interval.end(), 6);
	/// assert_eq!(interval.to_string(), "[3, 5]");
	/// ```
	pub const fn from_start_size(start: i64, size: i64) -> Self {
		if size <= 0 {
			return RealInterval::EMPTY;
		}
		RealInterval::from_start_end(start, start.saturating_add(size))
	}

	/// Makes a new [`RealInterval`] covering `[start, end)`.
	///
	/// `end <= start` gives the empty interval.
	///
	/// # Examples
	/// ```
	/// use intervalset::RealInterval;
	///
	/// let below_zero = RealInterval::from_start_end(i64::MIN, 0);
	///
	/// assert!(below_zero.contains(-1));
	/// assert!(!below_zero.contains(0));
	/// assert_eq!(below_zero.end(), 0);
	/// ```
	pub const fn from_start_end(start: i64, end: i64) -> Self {
		if end <= start {
			return RealInterval::EMPTY;
		}
		RealInterval { start, end }
	}

	/// The inclusive starting position of the interval. The value is
	/// meaningless for an empty interval.
	pub fn start(&self) -> i64 {
		self.start
	}

	/// The exclusive ending position of the interval. The value is
	/// meaningless for an empty interval.
	pub fn end(&self) -> i64 {
		self.end
	}

	/// The number of integers in the interval, saturating at `i64::MAX`.
	pub fn size(&self) -> i64 {
		self.end.saturating_sub(self.start)
	}

	/// Returns `true` if the interval contains no integers.
	pub fn is_empty(&self) -> bool {
		self.end <= self.start
	}

	/// Returns `true` if `point` is within the interval.
	pub fn contains(&self, point: i64) -> bool {
		self.start() <= point && point < self.end()
	}

	/// Returns `true` if every integer in `other` is within the interval.
	pub fn contains_interval(&self, other: &RealInterval) -> bool {
		other.is_empty()
			|| (self.start() <= other.start() && self.end() >= other.end())
	}

	/// Returns the integers in both `self` and `other`.
	pub fn intersection(&self, other: &RealInterval) -> RealInterval {
		let start = self.start().max(other.start());
		let end = self.end().min(other.end());
		RealInterval::from_start_end(start, end)
	}

	/// Returns the smallest interval containing `self` and every one of the
	/// given values.
	///
	/// # Examples
	/// ```
	/// use intervalset::RealInterval;
	///
	/// assert_eq!(
	/// 	RealInterval::EMPTY.expand(&[3, 5]),
	/// 	RealInterval::from_start_end(3, 6)
	/// );
	/// assert_eq!(
	/// 	RealInterval::from_start_end(3, 6).expand(&[0]),
	/// 	RealInterval::from_start_end(0, 6)
	/// );
	/// ```
	pub fn expand(&self, values: &[i64]) -> RealInterval {
		let Some((&first, _)) = values.split_first() else {
			return *self;
		};

		let (mut min, mut max) = match self.is_empty() {
			true => (first, first),
			false => (self.start(), self.end() - 1),
		};
		for &value in values {
			min = min.min(value);
			max = max.max(value);
		}

		RealInterval::from_start_end(min, max.saturating_add(1))
	}

	/// Returns the interval translated by `offset`. Both ends saturate at
	/// the bounds of `i64`.
	pub fn shift(&self, offset: i64) -> RealInterval {
		if self.is_empty() {
			return *self;
		}
		RealInterval::from_start_end(
			self.start.saturating_add(offset),
			self.end.saturating_add(offset),
		)
	}
}

impl Interval for RealInterval {
	fn intersect(&self, other: &Self) -> Self {
		self.intersection(other)
	}

	fn before(&self, other: &Self) -> bool {
		self.end() <= other.start()
	}

	fn bisect(&self, other: &Self) -> (Self, Self) {
		let overlap = self.intersection(other);
		if overlap.is_empty() {
			return match self.before(other) {
				true => (*self, RealInterval::EMPTY),
				false => (RealInterval::EMPTY, *self),
			};
		}

		(
			RealInterval::from_start_end(self.start(), overlap.start()),
			RealInterval::from_start_end(overlap.end(), self.end()),
		)
	}

	fn adjoin(&self, other: &Self) -> Self {
		if self.is_empty() || other.is_empty() {
			return RealInterval::EMPTY;
		}
		if self.end() == other.start() {
			RealInterval::from_start_end(self.start(), other.end())
		} else if other.end() == self.start() {
			RealInterval::from_start_end(other.start(), self.end())
		} else {
			RealInterval::EMPTY
		}
	}

	fn encompass(&self, other: &Self) -> Self {
		match (self.is_empty(), other.is_empty()) {
			(true, _) => *other,
			(false, true) => *self,
			(false, false) => RealInterval::from_start_end(
				self.start().min(other.start()),
				self.end().max(other.end()),
			),
		}
	}

	fn is_empty(&self) -> bool {
		RealInterval::is_empty(self)
	}
}

/// Renders the interval with both ends included, `[first, last]`, or
/// `[empty]`.
impl fmt::Display for RealInterval {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("[empty]");
		}
		write!(f, "[{}, {}]", self.start(), self.end() - 1)
	}
}
