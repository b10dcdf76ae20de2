//! A module containing the modular-arithmetic interval types: [`Modulus`],
//! [`IntInterval`] and [`ModularSet`].
//!
//! A modular interval lives in a cyclic integer domain of size `m`, so it may
//! wrap past `m - 1` back around to `0`. Because of this an interval's start
//! and end alone cannot tell the empty interval apart from the complete one
//! (both have `start == end`), so intervals are stored as a start and a size
//! instead.
//!
//! See <https://fgiesen.wordpress.com/2015/09/24/intervals-in-modular-arithmetic/>
//! for a discussion of intervals in modular arithmetic.

pub mod interval;
pub mod set;

pub use interval::IntInterval;
pub use set::ModularSet;

/// An integer modulus, the size of a cyclic domain.
///
/// A modulus of `0` is the empty domain: every position normalizes to `0`
/// and no interval over it contains anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Modulus(i64);

impl Modulus {
	/// Makes a new [`Modulus`].
	///
	/// Negative moduli are only rejected once an interval is built over them,
	/// see [`IntInterval::from_start_size()`].
	pub const fn new(modulus: i64) -> Self {
		Modulus(modulus)
	}

	/// Returns the modulus as a normal integer.
	pub const fn get(self) -> i64 {
		self.0
	}

	/// The raw truncating remainder of `a` by the modulus. Unlike
	/// [`Modulus::array_offset()`] this can be negative for negative `a`.
	pub fn truncated_rem(self, a: i64) -> i64 {
		a.checked_rem(self.0).unwrap_or(0)
	}

	/// Returns the offset into an array of length `m` for the given position:
	///
	/// 1. If `0 <= position < m`, `position` is returned as is.
	/// 2. If `position >= m`, `position % m` is returned.
	/// 3. If `position < 0`, `(position % m) + m` is returned, so the result is
	///    never negative.
	///
	/// # Examples
	/// ```
	/// use intervalset::Modulus;
	///
	/// let m = Modulus::new(10);
	///
	/// assert_eq!(m.array_offset(-1), 9);
	/// assert_eq!(m.array_offset(-11), 9);
	/// assert_eq!(m.array_offset(1), 1);
	/// assert_eq!(m.array_offset(10), 0);
	/// assert_eq!(m.array_offset(11), 1);
	/// ```
	pub fn array_offset(self, position: i64) -> i64 {
		position.checked_rem_euclid(self.0).unwrap_or(0)
	}

	/// The size of the interval that starts at `a` and travels forward to
	/// `b`, both normalized first.
	///
	/// If `a == b` this is `0`, if `a < b` it is `b - a`, otherwise
	/// `b - a + m`.
	///
	/// # Examples
	/// ```
	/// use intervalset::Modulus;
	///
	/// let m = Modulus::new(10);
	///
	/// assert_eq!(m.interval_size_forward(10, 14), 4);
	/// assert_eq!(m.interval_size_forward(9, 7), 8);
	/// assert_eq!(m.interval_size_forward(10, 100), 0);
	/// ```
	pub fn interval_size_forward(self, a: i64, b: i64) -> i64 {
		self.forward_distance(self.array_offset(a), self.array_offset(b))
	}

	/// The shorter of the two forward distances between `a` and `b`.
	///
	/// # Examples
	/// ```
	/// use intervalset::Modulus;
	///
	/// let m = Modulus::new(10);
	///
	/// assert_eq!(m.interval_size_min(9, 7), 2);
	/// assert_eq!(m.interval_size_min(10, 14), 4);
	/// ```
	pub fn interval_size_min(self, a: i64, b: i64) -> i64 {
		let a = self.array_offset(a);
		let b = self.array_offset(b);
		self.forward_distance(a, b).min(self.forward_distance(b, a))
	}

	// both must already be normalized
	fn forward_distance(self, a: i64, b: i64) -> i64 {
		match b < a {
			true => self.0 - (a - b),
			false => b - a,
		}
	}

	// the normalized position `distance` steps after the normalized
	// `position`, for `0 <= distance <= m`
	pub(crate) fn advance(self, position: i64, distance: i64) -> i64 {
		let until_wrap = self.0 - position;
		match distance >= until_wrap {
			true => distance - until_wrap,
			false => position + distance,
		}
	}
}

impl From<i64> for Modulus {
	fn from(modulus: i64) -> Self {
		Modulus(modulus)
	}
}
