//! A module containing [`IntInterval`].

use core::fmt;

use itertools::Itertools;
use smallvec::{smallvec, SmallVec};

use crate::{IntervalError, Modulus, RealInterval};

/// An integer interval in modular arithmetic, represented as a modulus, a
/// start, and a size.
///
/// Invariants: `modulus >= 0`, `0 <= size <= modulus`, and `start` is always
/// normalized into `[0, modulus)` with [`Modulus::array_offset()`], even when
/// the interval is empty.
///
/// # Examples
/// ```
/// use intervalset::{IntInterval, Modulus};
///
/// let interval = IntInterval::from_start_size(Modulus::new(10), 9, 4)?;
///
/// assert_eq!(interval.to_string(), "<mod=10; [9, 9], [0, 2]>");
/// assert_eq!(interval.contains(2), true);
/// assert_eq!(interval.contains(9), true);
/// assert_eq!(interval.contains(3), false);
/// # Ok::<(), intervalset::IntervalError>(())
/// ```
///
/// To combine modular intervals with set algebra, collect them into a
/// [`ModularSet`](crate::ModularSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntInterval {
	modulus: Modulus,
	start: i64,
	size: i64,
}

impl IntInterval {
	/// Makes a new [`IntInterval`] from a starting location and a size.
	///
	/// If `size > modulus` the size is clamped to the modulus, giving the
	/// complete interval; this is not an error.
	///
	/// The returned interval's [`IntInterval::start()`] is always
	/// `modulus.array_offset(start)`, even if the interval is empty or
	/// complete.
	///
	/// # Errors
	///
	/// Returns [`IntervalError::NegativeModulus`] if the modulus is negative
	/// and [`IntervalError::NegativeSize`] if `size` is negative.
	///
	/// # Examples
	/// ```
	/// use intervalset::{IntInterval, IntervalError, Modulus};
	///
	/// let complete = IntInterval::from_start_size(Modulus::new(3), 0, 50)?;
	/// assert_eq!(complete.size(), 3);
	/// assert_eq!(complete.is_complete(), true);
	///
	/// assert_eq!(
	/// 	IntInterval::from_start_size(Modulus::new(3), 0, -1),
	/// 	Err(IntervalError::NegativeSize { size: -1 })
	/// );
	/// # Ok::<(), IntervalError>(())
	/// ```
	pub fn from_start_size(
		modulus: Modulus,
		start: i64,
		size: i64,
	) -> Result<Self, IntervalError> {
		if modulus.get() < 0 {
			return Err(IntervalError::NegativeModulus {
				modulus: modulus.get(),
			});
		}
		if size < 0 {
			return Err(IntervalError::NegativeSize { size });
		}
		Ok(IntInterval::clamped(modulus, start, size))
	}

	/// Makes the non-empty interval travelling forward from `start` to the
	/// exclusive `end`.
	///
	/// If `start` and `end` normalize to the same position the complete
	/// interval is returned, since an empty interval is never produced here.
	///
	/// # Errors
	///
	/// Returns [`IntervalError::NegativeModulus`] if the modulus is negative.
	pub fn from_start_end(
		modulus: Modulus,
		start: i64,
		end: i64,
	) -> Result<Self, IntervalError> {
		let size = match modulus.interval_size_forward(start, end) {
			0 => modulus.get(),
			size => size,
		};
		IntInterval::from_start_size(modulus, start, size)
	}

	// Callers must already have checked that the modulus is non-negative
	// and the size is non-negative.
	pub(crate) fn clamped(modulus: Modulus, start: i64, size: i64) -> Self {
		IntInterval {
			modulus,
			start: modulus.array_offset(start),
			size: size.min(modulus.get()),
		}
	}

	/// The modulus of the domain the interval lives in.
	pub fn modulus(&self) -> Modulus {
		self.modulus
	}

	/// The number of integers in the interval.
	pub fn size(&self) -> i64 {
		self.size
	}

	/// The first position in the interval. For an empty interval this is the
	/// normalized start it was built with.
	pub fn start(&self) -> i64 {
		self.start
	}

	/// The exclusive end position of the interval, which is less than
	/// [`IntInterval::start()`] if the interval wraps.
	///
	/// The end equals the start for both the empty and the complete interval,
	/// use [`IntInterval::is_empty()`] or [`IntInterval::is_complete()`] to
	/// tell them apart.
	pub fn end(&self) -> i64 {
		self.modulus.advance(self.start, self.size)
	}

	/// Returns `true` if the interval contains no integers.
	pub fn is_empty(&self) -> bool {
		self.size == 0
	}

	/// Returns `true` if the interval contains every integer in its domain.
	pub fn is_complete(&self) -> bool {
		self.size == self.modulus.get()
	}

	/// Returns an interval with an earlier start, so that it contains every
	/// one of the given positions while keeping the same end.
	///
	/// Each position is normalized with [`Modulus::array_offset()`] first.
	/// Positions already inside the interval need no growth. An empty interval
	/// grows backwards from the start it was built with.
	///
	/// # Examples
	/// ```
	/// use intervalset::{IntInterval, Modulus};
	///
	/// let m = Modulus::new(10);
	/// let interval = IntInterval::from_start_size(m, 5, 3)?.expand_start(&[4, 2]);
	///
	/// assert_eq!(interval.start(), 2);
	/// assert_eq!(interval.size(), 6);
	/// # Ok::<(), intervalset::IntervalError>(())
	/// ```
	pub fn expand_start(&self, positions: &[i64]) -> IntInterval {
		if self.is_complete() || positions.is_empty() {
			return *self;
		}

		let m = self.modulus.get();
		let mut growth = 0;
		for &position in positions {
			if self.contains(position) {
				continue;
			}
			// distance travelled backwards from start to reach position, a
			// position sitting at an empty interval's start needs a full turn
			let backwards = match (self.start - self.modulus.array_offset(position))
				.rem_euclid(m)
			{
				0 => m,
				distance => distance,
			};
			growth = growth.max(backwards);
		}

		IntInterval::clamped(
			self.modulus,
			self.start - growth,
			self.size.saturating_add(growth),
		)
	}

	/// Returns an interval with a later end, so that it contains every one of
	/// the given positions while keeping the same start.
	///
	/// Each position is normalized with [`Modulus::array_offset()`] first.
	/// Positions already inside the interval need no growth. An empty interval
	/// grows forwards from the start it was built with.
	///
	/// # Examples
	/// ```
	/// use intervalset::{IntInterval, Modulus};
	///
	/// let m = Modulus::new(7);
	/// let interval = IntInterval::from_start_size(m, 0, 1)?.expand_end(&[5]);
	///
	/// assert_eq!(interval.start(), 0);
	/// assert_eq!(interval.size(), 6);
	/// # Ok::<(), intervalset::IntervalError>(())
	/// ```
	pub fn expand_end(&self, positions: &[i64]) -> IntInterval {
		if self.is_complete() || positions.is_empty() {
			return *self;
		}

		let m = self.modulus.get();
		let end = self.end();
		let mut growth = 0;
		for &position in positions {
			if self.contains(position) {
				continue;
			}
			// steps forward from end until position is covered
			let forwards =
				(self.modulus.array_offset(position) - end).rem_euclid(m) + 1;
			growth = growth.max(forwards);
		}

		IntInterval::clamped(
			self.modulus,
			self.start,
			self.size.saturating_add(growth),
		)
	}

	/// Returns an interval expanded by the smallest amount possible so that it
	/// contains every one of the given positions, by trying both
	/// [`IntInterval::expand_start()`] and [`IntInterval::expand_end()`] and
	/// keeping the smaller result. Ties keep the start expansion.
	pub fn expand_minimal(&self, positions: &[i64]) -> IntInterval {
		let by_start = self.expand_start(positions);
		let by_end = self.expand_end(positions);
		match by_start.size > by_end.size {
			true => by_end,
			false => by_start,
		}
	}

	/// Returns `true` if the interval contains the normalized `position`.
	pub fn contains(&self, position: i64) -> bool {
		self.contains_exact(self.modulus.array_offset(position))
	}

	/// Returns `true` if the interval contains `position` without
	/// normalizing it first, so positions outside `[0, modulus)` are never
	/// contained.
	pub fn contains_exact(&self, position: i64) -> bool {
		self.real_intervals()
			.iter()
			.any(|part| part.contains(position))
	}

	/// Decomposes the interval into zero, one, or two non-modular intervals
	/// that together contain exactly the same integers.
	///
	/// An empty interval gives no parts. An interval that does not cross the
	/// `m -> 0` boundary gives one part starting at [`IntInterval::start()`].
	/// An interval that does gives `[start, m)` followed by `[0, end)`.
	///
	/// # Examples
	/// ```
	/// use intervalset::{IntInterval, Modulus, RealInterval};
	///
	/// let interval = IntInterval::from_start_size(Modulus::new(10), 9, 4)?;
	///
	/// assert_eq!(
	/// 	interval.real_intervals().as_slice(),
	/// 	[
	/// 		RealInterval::from_start_end(9, 10),
	/// 		RealInterval::from_start_end(0, 3)
	/// 	]
	/// );
	/// # Ok::<(), intervalset::IntervalError>(())
	/// ```
	pub fn real_intervals(&self) -> SmallVec<[RealInterval; 2]> {
		if self.is_empty() {
			return SmallVec::new();
		}

		let same_start_size = self.size.min(self.modulus.get() - self.start);
		let same_start = RealInterval::from_start_size(self.start, same_start_size);
		let zero_start = RealInterval::from_start_size(0, self.size - same_start_size);

		match zero_start.is_empty() {
			true => smallvec![same_start],
			false => smallvec![same_start, zero_start],
		}
	}

	/// Returns `true` if both intervals contain exactly the same integers.
	///
	/// The moduli of the two intervals are ignored, only their sizes and
	/// starts are compared, where complete intervals count as starting at
	/// `0`.
	pub fn equal_sets(&self, other: &IntInterval) -> bool {
		if self.size != other.size {
			return false;
		}
		if self.is_empty() {
			return true;
		}
		self.normalized_start() == other.normalized_start()
	}

	fn normalized_start(&self) -> i64 {
		match self.is_complete() {
			true => 0,
			false => self.start,
		}
	}
}

/// Renders as `<mod=m; [a, b], [c, d]>` listing the inclusive real
/// decomposition, or `<mod=m; empty>`.
impl fmt::Display for IntInterval {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return write!(f, "<mod={}; empty>", self.modulus.get());
		}
		write!(
			f,
			"<mod={}; {}>",
			self.modulus.get(),
			self.real_intervals().iter().format(", ")
		)
	}
}
