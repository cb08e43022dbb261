//! Validators for field and method descriptors.
//!
//! The grammar, from the [Java Virtual Machine Specification, section 4.3](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-4.html#jvms-4.3):
//!
//! ```text
//! FieldDescriptor:
//!   FieldType
//!
//! MethodDescriptor:
//!   "(" FieldType* ")" ReturnDescriptor
//!
//! ReturnDescriptor:
//!   FieldType | "V"
//!
//! FieldType:
//!   "B" | "C" | "D" | "F" | "I" | "J" | "S" | "Z" |
//!   "L" ClassName ";" |
//!   "[" FieldType
//! ```
//!
//! The validators work on the raw pool bytes, since descriptors live in
//! `Utf8` entries that this crate never decodes to strings. At most 255
//! array dimensions are allowed, and a class name is one or more bytes out
//! of `A`-`Z`, `a`-`z` and `/`, with `/` neither first nor last.

/// The most `[` characters a field type may start with.
const MAX_ARRAY_DIMENSION: usize = 255;

/// Whether `descriptor` is exactly one valid field descriptor.
///
/// ```
/// use kaffee::tree::descriptor::is_valid_field_descriptor;
///
/// assert!(is_valid_field_descriptor(b"I"));
/// assert!(is_valid_field_descriptor(b"[[[D"));
/// assert!(is_valid_field_descriptor(b"Ljava/lang/Object;"));
///
/// assert!(!is_valid_field_descriptor(b""));
/// assert!(!is_valid_field_descriptor(b"L;"));
/// assert!(!is_valid_field_descriptor(b"II")); // trailing characters
/// ```
pub fn is_valid_field_descriptor(descriptor: &[u8]) -> bool {
	match scan_field_type(descriptor, 0) {
		Some(end) => end == descriptor.len(),
		None => false,
	}
}

/// Whether `descriptor` is exactly one valid method descriptor.
///
/// A void return is only allowed in the return position:
///
/// ```
/// use kaffee::tree::descriptor::is_valid_method_descriptor;
///
/// assert!(is_valid_method_descriptor(b"()V"));
/// assert!(is_valid_method_descriptor(b"(IDLjava/lang/Thread;)Ljava/lang/Object;"));
///
/// assert!(!is_valid_method_descriptor(b"(V)I"));
/// assert!(!is_valid_method_descriptor(b"()"));
/// ```
pub fn is_valid_method_descriptor(descriptor: &[u8]) -> bool {
	if descriptor.first() != Some(&b'(') {
		return false;
	}

	let mut pos = 1;
	while descriptor.get(pos) != Some(&b')') {
		// this also rejects an abrupt end before the ')'
		match scan_field_type(descriptor, pos) {
			Some(end) => pos = end,
			None => return false,
		}
	}
	pos += 1;

	if descriptor.get(pos) == Some(&b'V') {
		pos + 1 == descriptor.len()
	} else {
		matches!(scan_field_type(descriptor, pos), Some(end) if end == descriptor.len())
	}
}

/// Scans one `FieldType` starting at `start`, returning the position one
/// past its end.
///
/// Callers decide whether trailing bytes are acceptable: the top-level
/// validators require the scan to end at the end of the input, while the
/// method parameter loop keeps scanning from the returned position.
fn scan_field_type(bytes: &[u8], start: usize) -> Option<usize> {
	let mut pos = start;

	let mut dimension = 0;
	while bytes.get(pos) == Some(&b'[') {
		dimension += 1;
		if dimension > MAX_ARRAY_DIMENSION {
			return None;
		}
		pos += 1;
	}

	match bytes.get(pos)? {
		b'B' | b'C' | b'D' | b'F' | b'I' | b'J' | b'S' | b'Z' => Some(pos + 1),
		b'L' => {
			let name_start = pos + 1;
			pos = name_start;
			loop {
				match bytes.get(pos)? {
					b';' => break,
					byte if byte.is_ascii_alphabetic() || *byte == b'/' => pos += 1,
					_ => return None,
				}
			}

			let name = &bytes[name_start..pos];
			if name.is_empty() || name.starts_with(b"/") || name.ends_with(b"/") {
				return None;
			}

			Some(pos + 1)
		},
		_ => None,
	}
}

#[cfg(test)]
mod testing {
	use super::*;

	#[test]
	fn valid_field_descriptors() {
		let valid = [
			&b"B"[..],
			b"C",
			b"D",
			b"F",
			b"I",
			b"J",
			b"S",
			b"Z",
			b"[I",
			b"[[[D",
			b"Ljava/lang/Object;",
			b"[Ljava/lang/Object;",
			b"Lorg/example/MyClassName;",
		];

		for descriptor in valid {
			assert!(
				is_valid_field_descriptor(descriptor),
				"{} is a valid field descriptor", String::from_utf8_lossy(descriptor)
			);
		}
	}

	#[test]
	fn invalid_field_descriptors() {
		let invalid = [
			&b""[..],
			b"V",
			b"(",
			b")",
			b"()",
			b"[",
			b"[V",
			b"L;",
			b"L/;",
			b"L/a;",
			b"La/;",
			b"Ljava/lang.String;",
			b"()V",
			b"foo",
			b"(D)I",
			b"L;DV",
			b"II",
			b"ID",
		];

		for descriptor in invalid {
			assert!(
				!is_valid_field_descriptor(descriptor),
				"{} is not a valid field descriptor", String::from_utf8_lossy(descriptor)
			);
		}
	}

	#[test]
	fn array_dimension_is_capped() {
		let mut descriptor = vec![b'['; 255];
		descriptor.push(b'I');
		assert!(is_valid_field_descriptor(&descriptor));

		let mut descriptor = vec![b'['; 256];
		descriptor.push(b'I');
		assert!(!is_valid_field_descriptor(&descriptor));
	}

	#[test]
	fn valid_method_descriptors() {
		let valid = [
			&b"()V"[..],
			b"()I",
			b"(IDLjava/lang/Thread;)Ljava/lang/Object;",
			b"(Ljava/lang/Thread;Ljava/lang/Object;)V",
			b"([[[D)[I",
			b"(BCDFIJSZ)V",
		];

		for descriptor in valid {
			assert!(
				is_valid_method_descriptor(descriptor),
				"{} is a valid method descriptor", String::from_utf8_lossy(descriptor)
			);
		}
	}

	#[test]
	fn invalid_method_descriptors() {
		let invalid = [
			&b""[..],
			b"(",
			b"(D",
			b"(V",
			b"()",
			b"(I)",
			b"(V)D",
			b"(D)[",
			b"(D)[V",
			b"[(D)V",
			b"(L;;)V",
			b"()VV",
			b"()II",
			b"I",
		];

		for descriptor in invalid {
			assert!(
				!is_valid_method_descriptor(descriptor),
				"{} is not a valid method descriptor", String::from_utf8_lossy(descriptor)
			);
		}
	}

	#[test]
	fn validation_is_a_pure_function() {
		// same input, same answer
		for descriptor in [&b"Ljava/lang/Object;"[..], b"L;", b"[[[D", b""] {
			assert_eq!(
				is_valid_field_descriptor(descriptor),
				is_valid_field_descriptor(descriptor),
			);
		}
	}
}
