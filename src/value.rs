/*!
# Argmap: Value Interpretation.

Every value is stored as a string; these helpers decide what that string
means when a caller asks for a number or a boolean instead.
*/

use crate::ArgError;



/// # Integer Scan.
///
/// The raw result of reading an integer off the front of a string, `atoi`
/// style. Both the lenient and checked parsers work from this.
struct Scan<'a> {
	/// # Value (saturated).
	value: i64,

	/// # Number of Digits Read.
	digits: usize,

	/// # Overflowed?
	overflow: bool,

	/// # Whatever Follows the Digits.
	rest: &'a [u8],
}

impl<'a> Scan<'a> {
	/// # Scan.
	///
	/// Skip leading whitespace, accept a single optional sign, then read as
	/// many ASCII digits as there are. Values beyond the range of `i64`
	/// saturate.
	fn new(mut src: &'a [u8]) -> Self {
		while let [b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C', rest @ ..] = src {
			src = rest;
		}

		let neg = match src {
			[b'-', rest @ ..] => { src = rest; true },
			[b'+', rest @ ..] => { src = rest; false },
			_ => false,
		};

		let mut value: i64 = 0;
		let mut digits: usize = 0;
		let mut overflow = false;
		while let [d @ b'0'..=b'9', rest @ ..] = src {
			if ! overflow {
				let d = i64::from(*d - b'0');
				let next = value.checked_mul(10).and_then(|v|
					if neg { v.checked_sub(d) } else { v.checked_add(d) }
				);
				if let Some(next) = next { value = next; }
				else {
					overflow = true;
					value = if neg { i64::MIN } else { i64::MAX };
				}
			}
			digits += 1;
			src = rest;
		}

		Self { value, digits, overflow, rest: src }
	}
}



#[must_use]
/// # Parse Integer (Lenient).
///
/// Read an integer from the start of `src` the way C's `atoi` would:
/// leading whitespace is skipped, trailing junk is ignored, and anything
/// that doesn't start out numeric is simply zero. Out-of-range values
/// saturate at `i64::MIN`/`i64::MAX`.
///
/// This never fails. If you want to know whether a value was _actually_ a
/// number, use [`parse_int_checked`] instead.
///
/// ## Examples
///
/// ```
/// use argmap::parse_int_or_zero;
///
/// assert_eq!(parse_int_or_zero("11"), 11);
/// assert_eq!(parse_int_or_zero(" -3"), -3);
/// assert_eq!(parse_int_or_zero("12abc"), 12);
/// assert_eq!(parse_int_or_zero("NaN"), 0);
/// assert_eq!(parse_int_or_zero(""), 0);
/// ```
pub fn parse_int_or_zero(src: &str) -> i64 { Scan::new(src.as_bytes()).value }

/// # Parse Integer (Checked).
///
/// This reads the same way as [`parse_int_or_zero`], but instead of papering
/// over problems, returns an error explaining what was wrong with the
/// value.
///
/// ## Examples
///
/// ```
/// use argmap::{ArgError, parse_int_checked};
///
/// assert_eq!(parse_int_checked("11"), Ok(11));
/// assert_eq!(parse_int_checked("12abc"), Err(ArgError::TrailingGarbage));
/// assert_eq!(parse_int_checked("NaN"), Err(ArgError::NotANumber));
/// ```
///
/// ## Errors
///
/// Returns an error if the value is empty, lacks digits, overflows, or has
/// non-numeric characters after the digits.
pub fn parse_int_checked(src: &str) -> Result<i64, ArgError> {
	if src.trim().is_empty() { return Err(ArgError::Empty); }

	let scan = Scan::new(src.as_bytes());
	if scan.digits == 0 { Err(ArgError::NotANumber) }
	else if scan.overflow { Err(ArgError::Overflow) }
	else if ! scan.rest.is_empty() { Err(ArgError::TrailingGarbage) }
	else { Ok(scan.value) }
}

#[must_use]
/// # Interpret as Boolean.
///
/// An empty value (a bare `-key`) is `true`. Otherwise the value is
/// `true` if its lenient integer value is non-zero, which makes `"0"` and
/// anything non-numeric `false`.
///
/// ## Examples
///
/// ```
/// use argmap::interpret_bool;
///
/// assert!(interpret_bool(""));
/// assert!(interpret_bool("1"));
/// assert!(interpret_bool("-5"));
/// assert!(! interpret_bool("0"));
/// assert!(! interpret_bool("yes"));
/// ```
pub fn interpret_bool(src: &str) -> bool {
	src.is_empty() || parse_int_or_zero(src) != 0
}

#[must_use]
/// # Boolean as Stored Value.
pub(crate) const fn bool_str(v: bool) -> &'static str { if v { "1" } else { "0" } }



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_parse_int_or_zero() {
		for (raw, expected) in [
			("", 0),
			("0", 0),
			("11", 11),
			("+11", 11),
			("-11", -11),
			("   42", 42),
			("\t-7", -7),
			("12abc", 12),
			("1 2", 1),
			("NaN", 0),
			("NotANumber", 0),
			("-", 0),
			("+-1", 0),
			("abc12", 0),
			("007", 7),
			("9223372036854775807", i64::MAX),
			("9223372036854775808", i64::MAX),
			("-9223372036854775808", i64::MIN),
			("-99999999999999999999999", i64::MIN),
		] {
			assert_eq!(
				parse_int_or_zero(raw),
				expected,
				"Lenient parse of {raw:?} is wrong.",
			);
		}
	}

	#[test]
	fn t_parse_int_checked() {
		assert_eq!(parse_int_checked("11"), Ok(11));
		assert_eq!(parse_int_checked(" -11"), Ok(-11));
		assert_eq!(parse_int_checked("-9223372036854775808"), Ok(i64::MIN));

		assert_eq!(parse_int_checked(""), Err(ArgError::Empty));
		assert_eq!(parse_int_checked("  "), Err(ArgError::Empty));
		assert_eq!(parse_int_checked("NaN"), Err(ArgError::NotANumber));
		assert_eq!(parse_int_checked("-"), Err(ArgError::NotANumber));
		assert_eq!(parse_int_checked("12abc"), Err(ArgError::TrailingGarbage));
		assert_eq!(parse_int_checked("12 "), Err(ArgError::TrailingGarbage));
		assert_eq!(parse_int_checked("9223372036854775808"), Err(ArgError::Overflow));

		// Whatever the checked parse says, the lenient parse should agree on
		// the value when there's no error.
		for raw in ["0", "1", "-1", "+300", "  65535"] {
			assert_eq!(
				parse_int_checked(raw),
				Ok(parse_int_or_zero(raw)),
				"Checked/lenient disagreement for {raw:?}.",
			);
		}
	}

	#[test]
	fn t_interpret_bool() {
		for (raw, expected) in [
			("", true),
			("1", true),
			("2", true),
			("-1", true),
			("1abc", true),
			("0", false),
			("00", false),
			("-0", false),
			("NaN", false),
			("true", false),
			(" ", false),
		] {
			assert_eq!(interpret_bool(raw), expected, "Bool interpretation of {raw:?} is wrong.");
		}

		assert_eq!(bool_str(true), "1");
		assert_eq!(bool_str(false), "0");
		assert!(interpret_bool(bool_str(true)));
		assert!(! interpret_bool(bool_str(false)));
	}
}
