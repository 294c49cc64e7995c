/*!
# Argmap: Errors.

Nothing in this crate actually _fails_; malformed numbers degrade to zero and
missing keys degrade to defaults. [`ArgError`] exists so callers who care can
find out _why_ a value was degraded, via [`ArgMap::checked_int`](crate::ArgMap::checked_int).
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Error!
pub enum ArgError {
	/// # Empty Value.
	///
	/// The key was present but had no value, e.g. `-threads`.
	Empty,

	/// # Not a Number.
	///
	/// The value did not begin with any digits, e.g. `-threads=NaN`.
	NotANumber,

	/// # Number Out of Range.
	///
	/// The value does not fit in an `i64`.
	Overflow,

	/// # Trailing Garbage.
	///
	/// The value started out numeric but then went off the rails, e.g.
	/// `-threads=12abc`.
	TrailingGarbage,
}

impl AsRef<str> for ArgError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl std::error::Error for ArgError {}

impl fmt::Display for ArgError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ArgError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Empty => "Missing value.",
			Self::NotANumber => "Value is not a number.",
			Self::Overflow => "Value is out of range.",
			Self::TrailingGarbage => "Value has trailing non-numeric characters.",
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_display() {
		for e in [
			ArgError::Empty,
			ArgError::NotANumber,
			ArgError::Overflow,
			ArgError::TrailingGarbage,
		] {
			assert_eq!(e.to_string(), e.as_str(), "Display/as_str mismatch for {e:?}.");
			assert!(e.as_str().ends_with('.'), "Error text should be a sentence: {e:?}.");
		}
	}
}
