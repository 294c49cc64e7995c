/*!
# Argmap: Debug

This example parses any arbitrary arguments fed to it and displays the
resulting map.
*/

fn main() {
	argmap::parse_env();

	let args = argmap::current();
	if args.is_empty() {
		println!("\x1b[91mNo flags passed.\x1b[0m");
		return;
	}

	for (k, v) in args.iter() {
		println!("\x1b[2m-----\x1b[0m");
		println!("{k} = {v:?}");
		println!("  \x1b[2mstring:\x1b[0m {}", args.get_string(k, ""));
		println!("  \x1b[2mint:\x1b[0m    {}", args.get_int(k, 0));
		println!("  \x1b[2mbool:\x1b[0m   {}", args.get_bool(k));

		let all = args.get_all(k);
		if 1 < all.len() {
			println!("  \x1b[2mall:\x1b[0m    {all:?}");
		}
	}
	println!("\x1b[2m-----\x1b[0m");
}
