//! The linear merge algorithms behind the set operations.
//!
//! Every function here takes two slices that are already sorted and
//! disjoint (see [`is_sorted_disjoint()`](crate::utils::is_sorted_disjoint))
//! and returns a new sorted, disjoint `Vec`, in time linear in the combined
//! lengths. Nothing here inspects points, only [`Interval`] methods are used.

use alloc::vec::Vec;

use crate::Interval;

/// Every interval in either `a` or `b`.
pub(crate) fn union<K>(a: &[K], b: &[K]) -> Vec<K>
where
	K: Interval,
{
	let mut output = Vec::with_capacity(a.len() + b.len());
	let mut accumulator: Option<K> = None;

	let (mut i, mut j) = (0, 0);
	loop {
		// the next candidate in position order, overlapping heads are taken
		// together so nothing later can start before the accumulator
		let candidate = match (a.get(i), b.get(j)) {
			(Some(x), Some(y)) if x.before(y) => {
				i += 1;
				x.clone()
			}
			(Some(x), Some(y)) if y.before(x) => {
				j += 1;
				y.clone()
			}
			(Some(x), Some(y)) => {
				i += 1;
				j += 1;
				x.encompass(y)
			}
			(Some(x), None) => {
				i += 1;
				x.clone()
			}
			(None, Some(y)) => {
				j += 1;
				y.clone()
			}
			(None, None) => break,
		};

		accumulator = Some(match accumulator.take() {
			Some(current) if current.touches(&candidate) => {
				current.encompass(&candidate)
			}
			Some(current) => {
				output.push(current);
				candidate
			}
			None => candidate,
		});
	}
	output.extend(accumulator);

	output
}

/// Every interval yielded by `intervals`, in any order, as one sorted,
/// disjoint `Vec`.
///
/// The input is split into runs that are already sorted and disjoint, which
/// are then merged pairwise with [`union()`]. This is linear for sorted input
/// and `O(n log n)` otherwise.
pub(crate) fn union_all<K, I>(intervals: I) -> Vec<K>
where
	K: Interval,
	I: IntoIterator<Item = K>,
{
	let mut runs: Vec<Vec<K>> = Vec::new();
	for interval in intervals {
		if interval.is_empty() {
			continue;
		}
		match runs.last_mut() {
			Some(run)
				if run.last().is_some_and(|last| {
					last.before(&interval) && !last.touches(&interval)
				}) =>
			{
				run.push(interval)
			}
			_ => runs.push(alloc::vec![interval]),
		}
	}

	while runs.len() > 1 {
		let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
		let mut pending = runs.into_iter();
		while let Some(first) = pending.next() {
			merged.push(match pending.next() {
				Some(second) => union(&first, &second),
				None => first,
			});
		}
		runs = merged;
	}

	runs.pop().unwrap_or_default()
}

/// Every interval in `a` with the parts overlapping `b` cut out.
pub(crate) fn difference<K>(a: &[K], b: &[K]) -> Vec<K>
where
	K: Interval,
{
	let mut output = Vec::with_capacity(a.len());
	let mut others = b.iter().peekable();

	for interval in a {
		let mut remainder = interval.clone();

		while !remainder.is_empty() {
			let Some(other) = others.peek() else {
				break;
			};
			if other.before(&remainder) {
				others.next();
				continue;
			}
			if remainder.before(other) {
				break;
			}

			let (lower, upper) = remainder.bisect(other);
			// nothing later in b can reach back before other
			if !lower.is_empty() {
				output.push(lower);
			}
			remainder = upper;
			// other ended inside this interval so it can't cut the next one
			if !remainder.is_empty() {
				others.next();
			}
		}

		if !remainder.is_empty() {
			output.push(remainder);
		}
	}

	output
}

/// Every interval in both `a` and `b`.
pub(crate) fn intersection<K>(a: &[K], b: &[K]) -> Vec<K>
where
	K: Interval,
{
	let mut output = Vec::new();

	let (mut i, mut j) = (0, 0);
	while let (Some(x), Some(y)) = (a.get(i), b.get(j)) {
		let overlap = x.intersect(y);
		if !overlap.is_empty() {
			output.push(overlap);
		}

		// whichever ends first can't overlap anything further along the
		// other sequence
		let x_ends_first = x.bisect(y).1.is_empty();
		let y_ends_first = y.bisect(x).1.is_empty();
		match (x_ends_first, y_ends_first) {
			(true, false) => i += 1,
			(false, true) => j += 1,
			_ => {
				i += 1;
				j += 1;
			}
		}
	}

	output
}

/// The non-empty overlaps of `intervals` with `bounds`, without visiting
/// members entirely past `bounds`.
pub(crate) fn between<'a, K>(
	intervals: &'a [K],
	bounds: &'a K,
) -> impl Iterator<Item = K> + 'a
where
	K: Interval,
{
	intervals
		.iter()
		.skip_while(move |interval| interval.before(bounds))
		.take_while(move |interval| !bounds.before(interval))
		.map(move |interval| interval.intersect(bounds))
		.filter(|overlap| !overlap.is_empty())
}
