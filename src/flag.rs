/*!
# Argmap: Flags.
*/

use crate::value::{
	bool_str,
	interpret_bool,
};



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Flag.
///
/// A single raw argument, split into its canonical key and value.
///
/// The rules are simple:
/// * Anything not starting with a `-` is not a flag;
/// * A leading `--` is treated as `-`, so `--key` and `-key` are the same thing;
/// * The first `=`, if any, separates the key from the value;
/// * A flag without an `=` has an empty value;
///
/// Note that an empty value is still a value. `-key` and `-key=` are
/// equivalent, but both are very different from the key not being there at
/// all.
///
/// ## Examples
///
/// ```
/// use argmap::Flag;
///
/// let flag = Flag::new("--threads=4").unwrap();
/// assert_eq!(flag.key(), "-threads");
/// assert_eq!(flag.value(), "4");
///
/// // Only the first = counts.
/// let flag = Flag::new("-eq=a=b").unwrap();
/// assert_eq!(flag.key(), "-eq");
/// assert_eq!(flag.value(), "a=b");
///
/// // Not a flag.
/// assert!(Flag::new("/foo/bar").is_none());
/// ```
pub struct Flag<'a> {
	/// # Key (with one leading dash).
	key: &'a str,

	/// # Value.
	value: &'a str,
}

impl<'a> Flag<'a> {
	#[must_use]
	/// # New.
	///
	/// Parse a raw token, returning `None` if it isn't dash-prefixed.
	pub fn new(token: &'a str) -> Option<Self> {
		let token = match token.as_bytes() {
			[b'-', b'-', ..] => &token[1..],
			[b'-', ..] => token,
			_ => return None,
		};

		let (key, value) = token.split_once('=').unwrap_or((token, ""));
		Some(Self { key, value })
	}

	#[must_use]
	/// # Key.
	pub const fn key(&self) -> &'a str { self.key }

	#[must_use]
	/// # Value.
	pub const fn value(&self) -> &'a str { self.value }

	#[must_use]
	/// # Negated Key.
	///
	/// If this is a `-noKEY` flag, return the positive `-KEY` it negates.
	///
	/// A bare `-no` has nothing to negate, so is just a flag named "no".
	///
	/// ## Examples
	///
	/// ```
	/// use argmap::Flag;
	///
	/// assert_eq!(
	///     Flag::new("-nocolor").unwrap().negated().as_deref(),
	///     Some("-color"),
	/// );
	/// assert!(Flag::new("-no").unwrap().negated().is_none());
	/// assert!(Flag::new("-color").unwrap().negated().is_none());
	/// ```
	pub fn negated(&self) -> Option<String> {
		let rest = self.key.strip_prefix("-no")?;
		if rest.is_empty() { None }
		else {
			let mut out = String::with_capacity(rest.len() + 1);
			out.push('-');
			out.push_str(rest);
			Some(out)
		}
	}

	#[must_use]
	/// # Negated Value.
	///
	/// The stored value implied for the positive key by a `-noKEY` flag:
	/// the boolean inverse of this flag's own value, as `"1"` or `"0"`.
	///
	/// ## Examples
	///
	/// ```
	/// use argmap::Flag;
	///
	/// assert_eq!(Flag::new("-nocolor").unwrap().negated_value(), "0");
	/// assert_eq!(Flag::new("-nocolor=1").unwrap().negated_value(), "0");
	/// assert_eq!(Flag::new("-nocolor=0").unwrap().negated_value(), "1");
	/// ```
	pub fn negated_value(&self) -> &'static str {
		bool_str(! interpret_bool(self.value))
	}
}
