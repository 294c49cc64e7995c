/*!
# Argmap

This crate provides a tiny, lenient CLI argument store called [`ArgMap`]. It
turns `-key` and `-key=value` arguments into a map you can query by name
(as a string, integer, or boolean) with a default for anything missing.

There is no schema to declare, no validation, and nothing ever fails:
* Arguments not beginning with a dash are ignored;
* `--key` is treated the same as `-key`;
* A bare `-key` has an empty value, which reads as `true`;
* Non-numeric values read as `0` when an integer is wanted;
* `-nokey` implies `-key=0`, unless `-key` is also present, in which case `-key` wins;

If that sounds too loose, just use [clap](https://crates.io/crates/clap)
instead. Haha.



## Usage

Parse once, query anywhere:

```
// Normally you'd call argmap::parse_env() instead.
argmap::parse_args(["myapp", "-verbose", "--threads=4", "-nocolor"]);

assert!(argmap::get_bool_arg("-verbose"));
assert_eq!(argmap::get_int_arg("-threads", 1), 4);
assert!(! argmap::get_bool_arg_or("-color", true));
assert_eq!(argmap::get_arg("-output", "out.txt"), "out.txt");
```

Or skip the process-wide state altogether and keep an [`ArgMap`] of your
own:

```
use argmap::ArgMap;

let args: ArgMap = ["-listen=0", "-port=8333"].into_iter().collect();
assert!(! args.get_bool("-listen"));
assert_eq!(args.get_int("-port", 0), 8333);
```



## Logging

Diagnostics, such as skipped non-UTF-8 arguments or leniently-read
integers, are sent to the [`log`](https://crates.io/crates/log) facade. Install whatever
logger you like to see them; they are otherwise silent.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod error;
mod flag;
mod global;
mod map;
mod value;

pub use error::ArgError;
pub use flag::Flag;
pub use global::{
	clear,
	current,
	get_arg,
	get_bool_arg,
	get_bool_arg_or,
	get_int_arg,
	get_multi_arg,
	is_arg_set,
	parse_args,
	parse_env,
	soft_set_arg,
	soft_set_bool_arg,
};
pub use map::ArgMap;
pub use value::{
	interpret_bool,
	parse_int_checked,
	parse_int_or_zero,
};
