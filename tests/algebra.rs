//! Checks the set algebra exhaustively against bitmasks over a small domain.
//!
//! Every subset of `0..8` is a `u8`, so every pair of sets can be combined
//! and the result compared against the same operation done on the bits.

use core::ops::ControlFlow;

use intervalset::interval::ie;
use intervalset::{IntInterval, ModularSet, Modulus, Set, Span};
use itertools::{iproduct, Itertools};
use pretty_assertions::assert_eq;

const POINTS: i8 = 8;

fn masks() -> impl Iterator<Item = u8> + Clone {
	0..=u8::MAX
}

fn bit(point: i8) -> u8 {
	1 << point
}

// one interval per point so building a set also exercises merging
fn set_of(mask: u8) -> Set<Span<i8>> {
	(0..POINTS)
		.filter(|&point| mask & bit(point) != 0)
		.map(|point| ie(point, point + 1))
		.collect()
}

// the maximal runs of set bits, built directly
fn canonical(mask: u8) -> Vec<Span<i8>> {
	let mut output = Vec::new();
	let mut start = None;
	for point in 0..=POINTS {
		let inside = point < POINTS && mask & bit(point) != 0;
		match (start, inside) {
			(None, true) => start = Some(point),
			(Some(run_start), false) => {
				output.push(ie(run_start, point));
				start = None;
			}
			_ => {}
		}
	}
	output
}

fn mask_of(set: &Set<Span<i8>>) -> u8 {
	(0..POINTS)
		.filter(|&point| set.contains_point(point))
		.fold(0, |mask, point| mask | bit(point))
}

fn span_mask(span: Span<i8>) -> u8 {
	(span.start()..span.end()).fold(0, |mask, point| mask | bit(point))
}

fn all_spans() -> impl Iterator<Item = Span<i8>> + Clone {
	(0..=POINTS).flat_map(|start| (start..=POINTS).map(move |end| ie(start, end)))
}

fn assert_invariants(set: &Set<Span<i8>>) {
	assert!(set.iter().all(|span| span.start() < span.end()), "{set}");
	assert!(
		set.iter()
			.tuple_windows()
			.all(|(first, second)| first.end() < second.start()),
		"{set}"
	);
}

fn assert_matches(set: &Set<Span<i8>>, mask: u8) {
	assert_invariants(set);
	assert_eq!(set.as_slice(), canonical(mask).as_slice());
}

#[test]
fn building_gives_the_canonical_form() {
	for mask in masks() {
		let set = set_of(mask);
		assert_matches(&set, mask);
		assert_eq!(mask_of(&set), mask);
	}
}

#[test]
fn add_matches_bitwise_or() {
	for (a, b) in iproduct!(masks(), masks()) {
		let mut set = set_of(a);
		set.add(&set_of(b));
		assert_matches(&set, a | b);
		assert_eq!(set_of(a).view().union(&set_of(b)), set);
	}
}

#[test]
fn sub_matches_bitwise_and_not() {
	for (a, b) in iproduct!(masks(), masks()) {
		let mut set = set_of(a);
		set.sub(&set_of(b));
		assert_matches(&set, a & !b);
		assert_eq!(set_of(a).view().difference(&set_of(b)), set);
	}
}

#[test]
fn intersect_matches_bitwise_and() {
	for (a, b) in iproduct!(masks(), masks()) {
		let mut set = set_of(a);
		set.intersect(&set_of(b));
		assert_matches(&set, a & b);
		assert_eq!(set_of(a).view().intersection(&set_of(b)), set);
	}
}

#[test]
fn add_and_intersect_commute() {
	for (a, b) in iproduct!(masks(), masks()) {
		let (x, y) = (set_of(a), set_of(b));

		let mut xy = x.clone();
		xy.add(&y);
		let mut yx = y.clone();
		yx.add(&x);
		assert_eq!(xy, yx);

		let mut xy = x.clone();
		xy.intersect(&y);
		let mut yx = y;
		yx.intersect(&x);
		assert_eq!(xy, yx);
	}
}

#[test]
fn idempotence() {
	for mask in masks() {
		let set = set_of(mask);

		let mut added = set.clone();
		added.add(&set);
		assert_eq!(added, set);

		let mut intersected = set.clone();
		intersected.intersect(&set);
		assert_eq!(intersected, set);

		let mut subbed = set.clone();
		subbed.sub(&set);
		assert!(subbed.is_empty());
	}
}

#[test]
fn difference_then_intersection_round_trips() {
	for (a, b) in iproduct!(masks(), masks()) {
		let (x, y) = (set_of(a), set_of(b));

		let mut common = x.clone();
		common.intersect(&y);

		let mut round_trip = x.clone();
		round_trip.sub(&y);
		round_trip.add(&common);

		assert_eq!(round_trip, x);
	}
}

#[test]
fn contains_matches_subset() {
	for (mask, span) in iproduct!(masks(), all_spans()) {
		let want = span_mask(span) & !mask == 0;
		assert_eq!(set_of(mask).contains(&span), want, "{mask:08b} {span}");
	}
}

#[test]
fn extent_matches_lowest_and_highest_bits() {
	for mask in masks() {
		let want = match mask {
			0 => None,
			_ => Some(ie(
				mask.trailing_zeros() as i8,
				8 - mask.leading_zeros() as i8,
			)),
		};
		assert_eq!(set_of(mask).extent(), want, "{mask:08b}");
	}
}

#[test]
fn intervals_between_matches_masked_bits() {
	for (mask, bounds) in iproduct!(masks(), all_spans()) {
		let set = set_of(mask);

		let mut seen = Vec::new();
		let flow = set.intervals_between(&bounds, |overlap| {
			seen.push(overlap);
			ControlFlow::Continue(())
		});
		assert_eq!(flow, ControlFlow::Continue(()));
		assert_eq!(seen, canonical(mask & span_mask(bounds)));

		let mut calls = 0;
		let flow = set.intervals_between(&bounds, |_| {
			calls += 1;
			ControlFlow::Break(())
		});
		let any = mask & span_mask(bounds) != 0;
		assert_eq!(calls, usize::from(any));
		assert_eq!(flow.is_break(), any);
	}
}

#[test]
fn snapshots_never_change() {
	for (a, b) in iproduct!(masks(), masks()) {
		let mut set = set_of(a);
		let snapshot = set.snapshot();

		set.add(&set_of(b));
		set.sub(&set_of(a));

		assert_eq!(snapshot.as_slice(), canonical(a).as_slice());
	}
}

// every interval over a modulus of 8, as (start, size)
fn modular_intervals() -> impl Iterator<Item = IntInterval> + Clone {
	iproduct!(0..8, 0..=8).map(|(start, size)| {
		IntInterval::from_start_size(Modulus::new(8), start, size).unwrap()
	})
}

fn modular_mask(set: &ModularSet) -> u8 {
	(0..8)
		.filter(|&point| set.contains(point))
		.fold(0, |mask, point| mask | 1 << point)
}

fn interval_mask(interval: &IntInterval) -> u8 {
	(0..8)
		.filter(|&point| interval.contains(point))
		.fold(0, |mask, point| mask | 1 << point)
}

#[test]
fn modular_sets_match_bitwise_operations() {
	for (x, y) in iproduct!(modular_intervals(), modular_intervals()) {
		let (a, b) = (interval_mask(&x), interval_mask(&y));
		let other = ModularSet::from_interval(&y);

		let mut set = ModularSet::from_interval(&x);
		set.add(&other);
		assert_eq!(modular_mask(&set), a | b, "{x} + {y}");

		let mut set = ModularSet::from_interval(&x);
		set.sub(&other);
		assert_eq!(modular_mask(&set), a & !b, "{x} - {y}");

		let mut set = ModularSet::from_interval(&x);
		set.intersect(&other);
		assert_eq!(modular_mask(&set), a & b, "{x} & {y}");

		// the intervals read back cover exactly the same positions
		let read_back = set.intervals().iter().fold(0, |mask, interval| {
			mask | interval_mask(interval)
		});
		assert_eq!(read_back, a & b, "{x} & {y}");
	}
}

#[test]
fn modular_intervals_read_back_whole() {
	for interval in modular_intervals() {
		let want = match (interval.is_empty(), interval.is_complete()) {
			(true, _) => vec![],
			(false, true) => {
				vec![IntInterval::from_start_size(Modulus::new(8), 0, 8).unwrap()]
			}
			(false, false) => vec![interval],
		};
		assert_eq!(
			ModularSet::from_interval(&interval).intervals(),
			want,
			"{interval}"
		);
	}
}
