/*!
# Argmap: Process-Wide Arguments.

Most programs parse their arguments exactly once, at startup, then query
them from all over the place. The functions in this module hold onto a
single, shared [`ArgMap`] for exactly that purpose.

The shared map is never modified in place. Parsing (or soft-setting) builds
a complete replacement first, then swaps it in all at once, so concurrent
readers only ever see the old map or the new one, never anything in
between.

Until [`parse_args`] or [`parse_env`] is called, every lookup simply
returns its default.
*/

use crate::ArgMap;
use std::{
	ffi::OsStr,
	sync::{
		Arc,
		PoisonError,
		RwLock,
	},
};



/// # Shared Arguments.
static ARGS: RwLock<Option<Arc<ArgMap>>> = RwLock::new(None);



/// # Parse Arguments.
///
/// Parse `argv` (the _full_ argument list, including the program path at
/// index zero, which is skipped) and make the result the process-wide
/// argument map, replacing whatever was there before.
///
/// ## Examples
///
/// ```
/// argmap::parse_args(["myapp", "-verbose", "--threads=4"]);
///
/// assert!(argmap::get_bool_arg("-verbose"));
/// assert_eq!(argmap::get_int_arg("-threads", 1), 4);
/// ```
pub fn parse_args<I, S>(argv: I)
where I: IntoIterator<Item=S>, S: AsRef<OsStr> {
	replace(Some(argv.into_iter().skip(1).collect()));
}

/// # Parse Environment Arguments.
///
/// Parse the arguments passed to the current process and make the result
/// the process-wide argument map.
pub fn parse_env() { replace(Some(ArgMap::from_env())); }

/// # Clear.
///
/// Discard the process-wide argument map, returning things to their
/// pre-parse state.
pub fn clear() { replace(None); }

#[must_use]
/// # Current Map.
///
/// Return a snapshot of the process-wide argument map. This is cheap, and
/// useful if you have a lot of lookups to do and want them all answered by
/// the same parse.
///
/// If nothing has been parsed yet, the snapshot will be empty.
pub fn current() -> Arc<ArgMap> { snapshot().unwrap_or_default() }



#[must_use]
/// # Get String Argument.
///
/// See [`ArgMap::get_string`] for details.
pub fn get_arg(key: &str, default: &str) -> String {
	snapshot().map_or_else(
		|| default.to_owned(),
		|m| m.get_string(key, default).to_owned(),
	)
}

#[must_use]
/// # Get Integer Argument.
///
/// See [`ArgMap::get_int`] for details.
pub fn get_int_arg(key: &str, default: i64) -> i64 {
	snapshot().map_or(default, |m| m.get_int(key, default))
}

#[must_use]
/// # Get Boolean Argument.
///
/// See [`ArgMap::get_bool`] for details.
pub fn get_bool_arg(key: &str) -> bool { get_bool_arg_or(key, false) }

#[must_use]
/// # Get Boolean Argument (With Default).
///
/// See [`ArgMap::get_bool_or`] for details.
pub fn get_bool_arg_or(key: &str, default: bool) -> bool {
	snapshot().map_or(default, |m| m.get_bool_or(key, default))
}

#[must_use]
/// # Get All Values for Argument.
///
/// See [`ArgMap::get_all`] for details.
pub fn get_multi_arg(key: &str) -> Vec<String> {
	snapshot().map_or_else(Vec::new, |m| m.get_all(key).to_vec())
}

#[must_use]
/// # Is Argument Set?
pub fn is_arg_set(key: &str) -> bool {
	snapshot().is_some_and(|m| m.is_set(key))
}



/// # Soft Set Argument.
///
/// Set `key` to `value` in the process-wide map, but only if it isn't
/// already set. Returns `true` if the value was stored.
///
/// See [`ArgMap::soft_set`] for details.
///
/// ## Examples
///
/// ```
/// argmap::parse_args(["myapp", "-port=9000"]);
///
/// assert!(! argmap::soft_set_arg("-port", "8333"));
/// assert!(argmap::soft_set_arg("-bind", "127.0.0.1"));
///
/// assert_eq!(argmap::get_int_arg("-port", 0), 9000);
/// assert_eq!(argmap::get_arg("-bind", ""), "127.0.0.1");
/// ```
pub fn soft_set_arg(key: &str, value: &str) -> bool {
	soft_set_with(key, |m| m.soft_set(key, value))
}

/// # Soft Set Boolean Argument.
///
/// Same as [`soft_set_arg`], but for booleans.
pub fn soft_set_bool_arg(key: &str, value: bool) -> bool {
	soft_set_with(key, |m| m.soft_set_bool(key, value))
}

/// # Soft Set (Copy and Swap).
///
/// The write lock is held for the duration so two soft sets can't trample
/// one another.
fn soft_set_with<F>(key: &str, cb: F) -> bool
where F: FnOnce(&mut ArgMap) -> bool {
	let mut lock = ARGS.write().unwrap_or_else(PoisonError::into_inner);
	if lock.as_ref().is_some_and(|m| m.is_set(key)) { return false; }

	let mut next = lock.as_deref().cloned().unwrap_or_default();
	let res = cb(&mut next);
	if res { *lock = Some(Arc::new(next)); }
	res
}

/// # Replace Map.
fn replace(map: Option<ArgMap>) {
	let map = map.map(Arc::new);
	*ARGS.write().unwrap_or_else(PoisonError::into_inner) = map;
}

/// # Snapshot.
fn snapshot() -> Option<Arc<ArgMap>> {
	ARGS.read().unwrap_or_else(PoisonError::into_inner).clone()
}



#[cfg(test)]
mod test {
	use super::*;
	use serial_test::serial;

	/// # Reset Arguments.
	///
	/// Split on whitespace and parse, inserting a dummy program name to make
	/// sure it gets skipped.
	fn reset(raw: &str) {
		parse_args(std::iter::once("testargmap").chain(raw.split_whitespace()));
	}

	#[test]
	#[serial]
	fn t_unparsed() {
		clear();
		assert!(current().is_empty());
		assert_eq!(get_arg("-KPX", "eleven"), "eleven");
		assert_eq!(get_int_arg("-KPX", 11), 11);
		assert!(! get_bool_arg("-KPX"));
		assert!(get_bool_arg_or("-KPX", true));
		assert!(! is_arg_set("-KPX"));
		assert!(get_multi_arg("-KPX").is_empty());
	}

	#[test]
	#[serial]
	fn t_program_name() {
		parse_args(["-KPX", "-bar"]);
		assert!(! is_arg_set("-KPX"), "The program name should be skipped.");
		assert!(is_arg_set("-bar"));
	}

	#[test]
	#[serial]
	fn t_boolarg() {
		reset("-KPX");
		assert!(get_bool_arg("-KPX"));
		assert!(get_bool_arg_or("-KPX", false));
		assert!(get_bool_arg_or("-KPX", true));

		assert!(! get_bool_arg("-fo"));
		assert!(! get_bool_arg_or("-fo", false));
		assert!(get_bool_arg_or("-fo", true));

		assert!(! get_bool_arg("-KPXo"));
		assert!(! get_bool_arg_or("-KPXo", false));
		assert!(get_bool_arg_or("-KPXo", true));

		for (raw, expected) in [
			("-KPX=0", false),
			("-KPX=1", true),
			("-noKPX", false),
			("-noKPX=1", false),
			("-noKPX=0", true),
			("-KPX -noKPX", true),
			("-noKPX -KPX", true),
			("-KPX=1 -noKPX=1", true),
			("-KPX=0 -noKPX=0", false),
			("--KPX", true),
			("--KPX=1", true),
			("--noKPX=1", false),
			("-KPX --noKPX", true),
		] {
			reset(raw);
			assert_eq!(get_bool_arg("-KPX"), expected, "Wrong bool for {raw:?}.");
			assert_eq!(get_bool_arg_or("-KPX", false), expected, "Wrong bool for {raw:?}.");
			assert_eq!(get_bool_arg_or("-KPX", true), expected, "Wrong bool for {raw:?}.");
		}
	}

	#[test]
	#[serial]
	fn t_stringarg() {
		reset("");
		assert_eq!(get_arg("-KPX", ""), "");
		assert_eq!(get_arg("-KPX", "eleven"), "eleven");

		for (raw, expected) in [
			("-KPX -bar", ""),
			("-KPX=", ""),
			("-KPX=11", "11"),
			("-KPX=eleven", "eleven"),
			("--KPX=verbose --bar=1", "verbose"),
		] {
			reset(raw);
			assert_eq!(get_arg("-KPX", ""), expected, "Wrong string for {raw:?}.");
			assert_eq!(get_arg("-KPX", "eleven"), expected, "Wrong string for {raw:?}.");
		}
	}

	#[test]
	#[serial]
	fn t_intarg() {
		reset("");
		assert_eq!(get_int_arg("-KPX", 11), 11);
		assert_eq!(get_int_arg("-KPX", 0), 0);

		reset("-KPX -bar");
		assert_eq!(get_int_arg("-KPX", 11), 0);
		assert_eq!(get_int_arg("-bar", 11), 0);

		reset("-KPX=11 -bar=12");
		assert_eq!(get_int_arg("-KPX", 0), 11);
		assert_eq!(get_int_arg("-bar", 11), 12);

		reset("-KPX=NaN -bar=NotANumber");
		assert_eq!(get_int_arg("-KPX", 1), 0);
		assert_eq!(get_int_arg("-bar", 11), 0);

		reset("--KPX=verbose --bar=1");
		assert_eq!(get_int_arg("-bar", 0), 1);
	}

	#[test]
	#[serial]
	fn t_reparse() {
		reset("-a=1 -b=2 -c");
		assert_eq!(current().len(), 3);

		// Nothing from the first parse should survive the second.
		reset("-d");
		assert!(! is_arg_set("-a"));
		assert!(! is_arg_set("-b"));
		assert!(! is_arg_set("-c"));
		assert!(get_bool_arg("-d"));
		assert_eq!(current().len(), 1);
	}

	#[test]
	#[serial]
	fn t_multiarg() {
		reset("-connect=a -connect=b -noconnect");
		assert_eq!(get_multi_arg("-connect"), ["a", "b"]);
		assert_eq!(get_arg("-connect", ""), "b");
	}

	#[test]
	#[serial]
	fn t_soft_set() {
		clear();
		assert!(soft_set_arg("-a", "1"));
		assert!(! soft_set_arg("-a", "2"));
		assert_eq!(get_int_arg("-a", 0), 1);

		reset("-listen=0 -noupnp");
		assert!(! soft_set_arg("-listen", "1"));
		assert!(! soft_set_bool_arg("-upnp", true));
		assert!(soft_set_bool_arg("-discover", false));
		assert_eq!(get_int_arg("-listen", 1), 0);
		assert!(! get_bool_arg_or("-upnp", true));
		assert!(! get_bool_arg_or("-discover", true));

		// Soft setting shouldn't disturb an existing snapshot.
		let before = current();
		assert!(soft_set_arg("-port", "8333"));
		assert!(! before.is_set("-port"));
		assert!(current().is_set("-port"));
	}

	#[test]
	#[serial]
	fn t_swap() {
		// Readers should only ever see one complete map or the other.
		reset("-a=0 -b=0 -c=0");
		std::thread::scope(|s| {
			for _ in 0..4 {
				s.spawn(|| {
					for _ in 0..500 {
						let map = current();
						let a = map.get_int("-a", -1);
						assert_eq!(a, map.get_int("-b", -2), "Torn read!");
						assert_eq!(a, map.get_int("-c", -3), "Torn read!");
					}
				});
			}

			s.spawn(|| {
				for i in 1..=500 {
					reset(&format!("-a={i} -b={i} -c={i}"));
				}
			});
		});

		assert_eq!(get_int_arg("-a", 0), 500);
	}
}
