//! A module containing [`ModularSet`].

use alloc::vec::Vec;
use core::fmt;

use itertools::Itertools;

use crate::{IntInterval, IntervalError, Modulus, RealInterval, Set, SetView};

/// A set of positions in one cyclic domain, built from [`IntInterval`]s.
///
/// Modular intervals have no total order (a wrapping interval is both
/// "before" and "after" its neighbours), so the set stores each one as its
/// [`IntInterval::real_intervals()`] decomposition in a plain
/// [`Set<RealInterval>`] over `[0, modulus)`. A wrapping interval is
/// rejoined on the way back out by [`ModularSet::intervals()`].
///
/// Every operation taking an interval or another set requires it to share
/// this set's modulus.
///
/// # Examples
/// ```
/// use intervalset::{IntInterval, ModularSet, Modulus};
///
/// let m = Modulus::new(24);
///
/// let mut night = ModularSet::from_interval(&IntInterval::from_start_end(m, 22, 6)?);
/// let maintenance = ModularSet::from_interval(&IntInterval::from_start_end(m, 4, 8)?);
///
/// night.sub(&maintenance);
///
/// assert_eq!(night.intervals(), [IntInterval::from_start_end(m, 22, 4)?]);
/// assert!(night.contains(-1));
/// assert!(!night.contains(5));
/// # Ok::<(), intervalset::IntervalError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModularSet {
	modulus: Modulus,
	inner: Set<RealInterval>,
}

impl ModularSet {
	/// Makes a new, empty [`ModularSet`] over the given modulus.
	///
	/// # Errors
	///
	/// Returns [`IntervalError::NegativeModulus`] if the modulus is negative.
	pub fn empty(modulus: Modulus) -> Result<Self, IntervalError> {
		if modulus.get() < 0 {
			return Err(IntervalError::NegativeModulus {
				modulus: modulus.get(),
			});
		}
		Ok(ModularSet {
			modulus,
			inner: Set::new(),
		})
	}

	/// Makes a new [`ModularSet`] containing exactly the positions of
	/// `interval`, over its modulus.
	pub fn from_interval(interval: &IntInterval) -> Self {
		ModularSet {
			modulus: interval.modulus(),
			inner: interval.real_intervals().into_iter().collect(),
		}
	}

	/// The modulus of the domain the set lives in.
	pub fn modulus(&self) -> Modulus {
		self.modulus
	}

	/// Adds every position of `interval` to the set.
	///
	/// # Panics
	///
	/// Panics if `interval` has a different modulus to the set.
	#[track_caller]
	pub fn insert(&mut self, interval: &IntInterval) {
		self.assert_same_modulus(interval.modulus());
		self.inner.extend(interval.real_intervals());
	}

	/// Adds every position of `other` to the set.
	///
	/// # Panics
	///
	/// Panics if `other` has a different modulus to the set.
	#[track_caller]
	pub fn add(&mut self, other: &ModularSet) {
		self.assert_same_modulus(other.modulus);
		self.inner.add(&other.inner);
	}

	/// Removes every position of `other` from the set.
	///
	/// # Panics
	///
	/// Panics if `other` has a different modulus to the set.
	#[track_caller]
	pub fn sub(&mut self, other: &ModularSet) {
		self.assert_same_modulus(other.modulus);
		self.inner.sub(&other.inner);
	}

	/// Removes every position not also in `other` from the set.
	///
	/// # Panics
	///
	/// Panics if `other` has a different modulus to the set.
	#[track_caller]
	pub fn intersect(&mut self, other: &ModularSet) {
		self.assert_same_modulus(other.modulus);
		self.inner.intersect(&other.inner);
	}

	/// Returns `true` if the normalized `position` is in the set.
	pub fn contains(&self, position: i64) -> bool {
		let position = self.modulus.array_offset(position);
		self.inner.contains(&RealInterval::from_start_size(position, 1))
	}

	/// Returns `true` if every position of `interval` is in the set.
	///
	/// # Panics
	///
	/// Panics if `interval` has a different modulus to the set.
	#[track_caller]
	pub fn contains_interval(&self, interval: &IntInterval) -> bool {
		self.assert_same_modulus(interval.modulus());
		interval
			.real_intervals()
			.iter()
			.all(|part| self.inner.contains(part))
	}

	/// Returns `true` if the set contains no positions.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns `true` if the set contains every position of its domain.
	///
	/// As with [`IntInterval::is_complete()`], a set over the empty domain
	/// is both empty and complete.
	pub fn is_complete(&self) -> bool {
		let covered: i64 = self.inner.iter().map(RealInterval::size).sum();
		covered == self.modulus.get()
	}

	/// Returns the members of the set as modular intervals in ascending
	/// order of start, except that a member wrapping past `modulus - 1`
	/// comes last.
	///
	/// # Examples
	/// ```
	/// use intervalset::{IntInterval, ModularSet, Modulus};
	///
	/// let m = Modulus::new(10);
	/// let mut set = ModularSet::from_interval(&IntInterval::from_start_size(m, 8, 4)?);
	/// set.insert(&IntInterval::from_start_size(m, 4, 2)?);
	///
	/// assert_eq!(set.to_string(), "{<mod=10; [4, 5]>, <mod=10; [8, 9], [0, 1]>}");
	/// # Ok::<(), intervalset::IntervalError>(())
	/// ```
	pub fn intervals(&self) -> Vec<IntInterval> {
		let m = self.modulus;
		let parts = self.inner.as_slice();

		let to_modular =
			|part: &RealInterval| IntInterval::clamped(m, part.start(), part.size());

		match parts {
			[first, middle @ .., last]
				if first.start() == 0 && last.end() == m.get() =>
			{
				let wrapping =
					IntInterval::clamped(m, last.start(), last.size() + first.size());
				middle
					.iter()
					.map(to_modular)
					.chain(core::iter::once(wrapping))
					.collect()
			}
			_ => parts.iter().map(to_modular).collect(),
		}
	}

	/// Returns a read-only view of the underlying [`RealInterval`]s over
	/// `[0, modulus)`, with wrapping members split in two.
	pub fn as_set(&self) -> SetView<'_, RealInterval> {
		self.inner.view()
	}

	#[track_caller]
	fn assert_same_modulus(&self, other: Modulus) {
		assert_eq!(
			self.modulus,
			other,
			"cannot combine intervals over different moduli"
		);
	}
}

/// Renders as `{<mod=m; ...>, ...}` listing [`ModularSet::intervals()`].
impl fmt::Display for ModularSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{{}}}", self.intervals().iter().format(", "))
	}
}
