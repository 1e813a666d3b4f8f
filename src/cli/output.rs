use std::fmt::Write;

const COLUMN_WIDTH: usize = 30;
const MAX_COLUMNS: usize = 5;

/// Lay `names` out column-major in up to five padded columns.
pub(crate) fn format_columns<S: AsRef<str>>(names: &[S]) -> String {
	let mut out = String::new();
	if names.is_empty() {
		return out;
	}

	let rows = names.len().div_ceil(MAX_COLUMNS);
	for row in 0..rows {
		let mut line = String::new();
		for col in 0..MAX_COLUMNS {
			if let Some(name) = names.get(col * rows + row) {
				let _ = write!(line, "{:<COLUMN_WIDTH$}", name.as_ref());
			}
		}
		let _ = writeln!(out, "{}", line.trim_end());
	}
	out
}

/// Print a heading followed by one script name per line.
pub(crate) fn print_script_list<S: AsRef<str>>(heading: &str, names: &[S]) {
	println!("{heading}");
	for name in names {
		println!("{}", name.as_ref());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn columns_fill_top_to_bottom() {
		let names: Vec<String> = (0..7).map(|idx| format!("s{idx}")).collect();
		let out = format_columns(&names);
		let lines: Vec<&str> = out.lines().collect();
		assert_eq!(lines.len(), 2);
		assert!(lines[0].starts_with("s0"));
		assert_eq!(&lines[0][COLUMN_WIDTH..COLUMN_WIDTH + 2], "s2");
		assert!(lines[1].starts_with("s1"));
		assert!(lines[1].ends_with("s5"));
	}

	#[test]
	fn no_names_print_nothing() {
		assert!(format_columns::<&str>(&[]).is_empty());
	}
}
