use itertools::Itertools;

use crate::Interval;

/// Returns `true` if the intervals are non-empty, strictly ascending, and no
/// two neighbours overlap or touch.
pub(crate) fn is_sorted_disjoint<K>(intervals: &[K]) -> bool
where
	K: Interval,
{
	intervals.iter().all(|interval| !interval.is_empty())
		&& intervals
			.iter()
			.tuple_windows()
			.all(|(first, second)| first.before(second) && !first.touches(second))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::interval::ie;

	#[test]
	fn is_sorted_disjoint_tests() {
		assert!(is_sorted_disjoint::<crate::Span<i8>>(&[]));
		assert!(is_sorted_disjoint(&[ie(0, 2)]));
		assert!(is_sorted_disjoint(&[ie(0, 2), ie(3, 5), ie(9, 10)]));

		//touching
		assert!(!is_sorted_disjoint(&[ie(0, 2), ie(2, 5)]));
		//overlapping
		assert!(!is_sorted_disjoint(&[ie(0, 3), ie(2, 5)]));
		//out of order
		assert!(!is_sorted_disjoint(&[ie(3, 5), ie(0, 2)]));
		//empty member
		assert!(!is_sorted_disjoint(&[ie(0, 2), ie(4, 4)]));
	}
}
