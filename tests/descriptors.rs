use kaffee::tree::descriptor::{is_valid_field_descriptor, is_valid_method_descriptor};

#[test]
fn accepted_field_descriptors() {
	let accepted = [
		&b"Ljava/lang/Object;"[..],
		b"[[[D",
		b"[Ljava/lang/Object;",
		b"I",
		b"[I",
		b"Lorg/example/MyClassName;",
		b"Z",
	];

	for descriptor in accepted {
		assert!(
			is_valid_field_descriptor(descriptor),
			"{:?} is a valid field descriptor", String::from_utf8_lossy(descriptor)
		);
	}
}

#[test]
fn rejected_field_descriptors() {
	let rejected = [
		&b"Ljava/lang.String;"[..],
		b"L;",
		b"[",
		b"",
		b"L/;",
		b"V",
		b"()V",
		b"IJ",
		b"Ljava/lang/Object",
	];

	for descriptor in rejected {
		assert!(
			!is_valid_field_descriptor(descriptor),
			"{:?} is not a valid field descriptor", String::from_utf8_lossy(descriptor)
		);
	}
}

#[test]
fn void_is_only_a_return_type() {
	assert!(is_valid_method_descriptor(b"()V"));
	assert!(is_valid_method_descriptor(b"(I)V"));

	assert!(!is_valid_method_descriptor(b"(V)V"));
	assert!(!is_valid_method_descriptor(b"([V)V"));
	assert!(!is_valid_field_descriptor(b"V"));
}

#[test]
fn method_descriptors() {
	assert!(is_valid_method_descriptor(b"(IDLjava/lang/Thread;)Ljava/lang/Object;"));
	assert!(is_valid_method_descriptor(b"()[[[D"));

	assert!(!is_valid_method_descriptor(b""));
	assert!(!is_valid_method_descriptor(b"()"));
	assert!(!is_valid_method_descriptor(b"(I"));
	assert!(!is_valid_method_descriptor(b"(I)DD"));
}
