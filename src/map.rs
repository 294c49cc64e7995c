/*!
# Argmap: Argument Map.
*/

use crate::{
	ArgError,
	Flag,
	value::{
		bool_str,
		interpret_bool,
		parse_int_checked,
		parse_int_or_zero,
	},
};
use std::{
	collections::{
		btree_map::Entry,
		BTreeMap,
	},
	ffi::OsStr,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Argument Map.
///
/// `ArgMap` is a lenient, schema-free store of `-key=value` arguments. It
/// doesn't know or care which keys your app expects; it just parses whatever
/// it is given and lets you ask for things by name afterwards, supplying a
/// default for anything that isn't there.
///
/// ## Parsing
///
/// Every raw argument is handled independently, in order:
/// * Arguments not beginning with `-` are ignored;
/// * `--key` is treated exactly like `-key`;
/// * `-key=value` stores `value` under `-key`;
/// * `-key` stores an empty string under `-key`;
/// * Repeated keys overwrite one another, so the last one wins;
///
/// ### Negation
///
/// A `-noKEY` argument is also stored verbatim, but additionally implies the
/// boolean opposite for `-KEY`. (`-nocolor` implies `-color=0`, `-nocolor=0`
/// implies `-color=1`.)
///
/// The implied value is only a fallback. A literal `-KEY` anywhere in the
/// set always takes precedence over a `-noKEY`, regardless of which came
/// first.
///
/// ## Lookups
///
/// Values are strings, but can be read back as integers or booleans. Neither
/// conversion ever fails:
/// * Integers are parsed `atoi`-style, so anything non-numeric is `0`;
/// * Booleans are `true` if the value is empty (a bare `-key`) or a non-zero number;
///
/// If you need to know whether an integer was _really_ an integer, see
/// [`ArgMap::checked_int`].
///
/// ## Examples
///
/// ```
/// use argmap::ArgMap;
///
/// let args: ArgMap = [
///     "-verbose",
///     "--threads=4",
///     "-nocolor",
///     "/some/path",
/// ].into_iter().collect();
///
/// assert!(args.get_bool("-verbose"));
/// assert_eq!(args.get_int("-threads", 1), 4);
/// assert!(! args.get_bool_or("-color", true));
/// assert_eq!(args.get_string("-output", "out.txt"), "out.txt");
/// ```
pub struct ArgMap {
	/// # Values by Key.
	values: BTreeMap<String, String>,

	/// # All Literal Values by Key.
	///
	/// This holds every value explicitly passed for a key, in order. Implied
	/// negation values are not included.
	multi: BTreeMap<String, Vec<String>>,
}

impl<S: AsRef<OsStr>> FromIterator<S> for ArgMap {
	/// # From Raw Arguments.
	///
	/// Every entry is treated as a potential flag; if your source includes
	/// the program path at index zero, skip it first (or use
	/// [`ArgMap::from_env`]).
	fn from_iter<I: IntoIterator<Item=S>>(src: I) -> Self {
		let mut out = Self::default();
		for raw in src {
			let raw = raw.as_ref();
			if let Some(raw) = raw.to_str() {
				if let Some(flag) = Flag::new(raw) { out.insert_flag(flag); }
			}
			// Non-dash values don't matter, but a flag we can't read might.
			else if raw.to_string_lossy().starts_with('-') {
				log::warn!("Ignoring non-UTF-8 argument: {raw:?}");
			}
		}

		log::debug!("Parsed {} argument key(s).", out.values.len());
		out
	}
}

impl ArgMap {
	#[must_use]
	/// # From Environment.
	///
	/// Parse the arguments passed to the current process, skipping the
	/// first (program path) entry.
	///
	/// ## Examples
	///
	/// ```no_run
	/// let args = argmap::ArgMap::from_env();
	/// let debug = args.get_bool("-debug");
	/// ```
	pub fn from_env() -> Self { std::env::args_os().skip(1).collect() }

	/// # Insert Flag.
	///
	/// A `-noKEY` flag first fills in `-KEY` if (and only if) nothing has
	/// claimed it yet. The flag itself is then stored unconditionally.
	fn insert_flag(&mut self, flag: Flag<'_>) {
		if let Some(positive) = flag.negated() {
			if let Entry::Vacant(e) = self.values.entry(positive) {
				e.insert(flag.negated_value().to_owned());
			}
		}

		let key = flag.key();
		let value = flag.value();
		self.values.insert(key.to_owned(), value.to_owned());
		self.multi.entry(key.to_owned()).or_default().push(value.to_owned());
	}
}

/// ## Lookups.
impl ArgMap {
	#[must_use]
	/// # Get Raw Value.
	///
	/// Return the stored value for `key`, if any. Remember that a bare
	/// `-key` is stored as an empty string, so `Some("")` and `None` mean
	/// very different things.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.values.get(key).map(String::as_str)
	}

	#[must_use]
	/// # Get All Values.
	///
	/// Return every value explicitly passed for `key`, in the order given.
	/// This is useful for keys that are meant to be repeated, like
	/// `-include=a -include=b`.
	///
	/// Values implied by negation or added with [`ArgMap::soft_set`] are not
	/// included.
	///
	/// ## Examples
	///
	/// ```
	/// use argmap::ArgMap;
	///
	/// let args: ArgMap = ["-add=a", "-add=b", "--add=c"].into_iter().collect();
	/// assert_eq!(args.get_all("-add"), ["a", "b", "c"]);
	/// assert_eq!(args.get_string("-add", ""), "c");
	/// assert!(args.get_all("-remove").is_empty());
	/// ```
	pub fn get_all(&self, key: &str) -> &[String] {
		self.multi.get(key).map_or(&[], Vec::as_slice)
	}

	#[must_use]
	/// # Get Boolean.
	///
	/// Return `true` if `key` is present and either empty or non-zero;
	/// otherwise `false`.
	pub fn get_bool(&self, key: &str) -> bool { self.get_bool_or(key, false) }

	#[must_use]
	/// # Get Boolean (With Default).
	///
	/// Same as [`ArgMap::get_bool`], except `default` is returned when the
	/// key is missing.
	///
	/// ## Examples
	///
	/// ```
	/// use argmap::ArgMap;
	///
	/// let args: ArgMap = ["-a", "-b=0", "-noc"].into_iter().collect();
	/// assert!(args.get_bool_or("-a", false));
	/// assert!(! args.get_bool_or("-b", true));
	/// assert!(! args.get_bool_or("-c", true));
	/// assert!(args.get_bool_or("-d", true));
	/// ```
	pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
		self.get(key).map_or(default, interpret_bool)
	}

	#[must_use]
	/// # Get Integer.
	///
	/// Return the value for `key` as an integer, or `default` if the key is
	/// missing.
	///
	/// Present values that aren't valid numbers are read as leniently as
	/// possible; `-key` and `-key=abc` are both `0`, and `-key=12abc` is
	/// `12`. (A warning is logged when this happens.)
	///
	/// ## Examples
	///
	/// ```
	/// use argmap::ArgMap;
	///
	/// let args: ArgMap = ["-a=11", "-b=NaN", "-c"].into_iter().collect();
	/// assert_eq!(args.get_int("-a", 0), 11);
	/// assert_eq!(args.get_int("-b", 1), 0);
	/// assert_eq!(args.get_int("-c", 1), 0);
	/// assert_eq!(args.get_int("-d", 1), 1);
	/// ```
	pub fn get_int(&self, key: &str, default: i64) -> i64 {
		let Some(raw) = self.get(key) else { return default; };
		parse_int_checked(raw).unwrap_or_else(|e| {
			let out = parse_int_or_zero(raw);
			log::warn!("{key}={raw:?}: {e} Reading it as {out}.");
			out
		})
	}

	#[must_use]
	/// # Get String.
	///
	/// Return the value for `key` verbatim, or `default` if the key is
	/// missing.
	pub fn get_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
		self.get(key).unwrap_or(default)
	}

	#[must_use]
	/// # Checked Integer.
	///
	/// This is a stricter alternative to [`ArgMap::get_int`] for callers who
	/// want to report bad input rather than silently accept it. It returns
	/// `None` if the key is missing, otherwise the parse result.
	///
	/// ## Examples
	///
	/// ```
	/// use argmap::{ArgError, ArgMap};
	///
	/// let args: ArgMap = ["-a=11", "-b=NaN"].into_iter().collect();
	/// assert_eq!(args.checked_int("-a"), Some(Ok(11)));
	/// assert_eq!(args.checked_int("-b"), Some(Err(ArgError::NotANumber)));
	/// assert_eq!(args.checked_int("-c"), None);
	/// ```
	pub fn checked_int(&self, key: &str) -> Option<Result<i64, ArgError>> {
		self.get(key).map(parse_int_checked)
	}

	#[must_use]
	/// # Is Set?
	pub fn is_set(&self, key: &str) -> bool { self.values.contains_key(key) }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.values.is_empty() }

	#[must_use]
	/// # Length.
	///
	/// Return the number of distinct keys.
	pub fn len(&self) -> usize { self.values.len() }

	/// # Iterate.
	///
	/// Iterate through all key/value pairs, sorted by key.
	pub fn iter(&self) -> impl ExactSizeIterator<Item=(&str, &str)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

/// ## Soft Setters.
impl ArgMap {
	/// # Soft Set.
	///
	/// Store `value` under `key`, but only if the key isn't already set.
	/// This is handy for programmatic defaults that should never override
	/// what the user actually passed.
	///
	/// Returns `true` if the value was stored.
	///
	/// ## Examples
	///
	/// ```
	/// use argmap::ArgMap;
	///
	/// let mut args: ArgMap = ["-listen=0"].into_iter().collect();
	/// assert!(! args.soft_set("-listen", "1"));
	/// assert!(args.soft_set("-port", "8333"));
	/// assert_eq!(args.get_int("-listen", 1), 0);
	/// assert_eq!(args.get_int("-port", 0), 8333);
	/// ```
	pub fn soft_set(&mut self, key: &str, value: &str) -> bool {
		if let Entry::Vacant(e) = self.values.entry(key.to_owned()) {
			e.insert(value.to_owned());
			true
		}
		else { false }
	}

	/// # Soft Set Boolean.
	///
	/// Same as [`ArgMap::soft_set`], but for booleans, stored as `"1"` or
	/// `"0"`.
	pub fn soft_set_bool(&mut self, key: &str, value: bool) -> bool {
		self.soft_set(key, bool_str(value))
	}
}
