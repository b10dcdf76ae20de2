//! A module containing [`IntervalError`].

use thiserror::Error;

/// The error returned when constructing a modular interval from invalid
/// arguments.
///
/// This is the only recoverable failure in the crate, every set operation is
/// total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
	/// The modulus was negative.
	#[error("invalid modulus = {modulus} is less than 0")]
	NegativeModulus {
		/// The rejected modulus.
		modulus: i64,
	},
	/// The size was negative.
	#[error("invalid size = {size} is less than 0")]
	NegativeSize {
		/// The rejected size.
		size: i64,
	},
}
