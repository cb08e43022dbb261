use thiserror::Error;

/// Everything that can go wrong while decoding a class file.
///
/// The decoder never recovers locally: the first error aborts the decode and
/// travels up to [`crate::read_class_file`]. Any partially assembled tree is
/// dropped on the way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
	/// A read wanted more bytes than the input has left.
	#[error("unexpected end of class file: wanted {wanted} more byte(s) at offset {offset}")]
	UnexpectedEof {
		offset: usize,
		wanted: usize,
	},

	/// The first four bytes were not `0xCAFEBABE`.
	#[error("wrong magic: got {got:#010x}, expected 0xCAFEBABE")]
	InvalidHeader {
		got: u32,
	},

	/// The major version is outside the supported window of 45 through 65
	/// (JDK 1.1 through Java SE 21).
	#[error("unsupported major version {major}, supported are 45 through 65")]
	InvalidMajorVersion {
		major: u16,
	},

	/// A constant pool index is zero, past the end of the pool, or the
	/// unusable upper slot of a `Long` or `Double` entry.
	#[error("constant pool index {index} is zero, out of range, or the upper slot of a long or double")]
	InvalidCpIndex {
		index: u16,
	},

	/// A constant pool entry has a different variant than the typed pointer
	/// to it promised.
	#[error("constant pool entry {index} is a `{got}`, expected a `{expected}`")]
	WrongCpType {
		index: u16,
		expected: &'static str,
		got: &'static str,
	},

	/// An access flag `u16` has a bit set that is not defined for its
	/// context (class, field, method, inner class, module, ...).
	#[error("undefined access flag bit(s) in {context} flags {flags:#06x}")]
	InvalidAccessFlags {
		context: &'static str,
		flags: u16,
	},

	/// A constant pool entry starts with a tag byte outside the defined set.
	#[error("unknown constant pool tag {tag} at pool index {index}")]
	UnknownConstantPoolTag {
		tag: u8,
		index: u16,
	},

	/// A `MethodHandle` pool entry has a reference kind outside 1 through 9.
	#[error("unknown `MethodHandle` reference kind {kind}")]
	UnknownReferenceKind {
		kind: u8,
	},

	/// A `verification_type_info` tag outside 0 through 8.
	#[error("unknown verification type info tag {tag}")]
	UnknownVerificationTypeInfoTag {
		tag: u8,
	},

	/// A stack map frame tag in the reserved range 128 through 246.
	#[error("reserved stack map frame type {tag}")]
	ReservedFrameType {
		tag: u8,
	},

	/// A stack map frame tag outside every defined family.
	#[error("unknown stack map frame type {tag}")]
	UnknownFrameType {
		tag: u8,
	},

	/// An `element_value` tag outside `B C D F I J S Z s e c @ [`.
	#[error("unknown element value tag {tag}")]
	UnknownElementValueTag {
		tag: u8,
	},

	/// A type annotation `target_type` byte outside the sanctioned set.
	#[error("invalid type annotation target type {target_type:#04x}")]
	InvalidTargetType {
		target_type: u8,
	},

	/// A type path entry with a kind outside 0 through 3, or a non-zero
	/// type argument index on a path kind that requires zero.
	#[error("invalid type path kind {kind} (type argument index {type_argument_index})")]
	InvalidPathKind {
		kind: u8,
		type_argument_index: u8,
	},

	/// A bytecode byte that is no opcode at all (`0xCB` through `0xFD`).
	#[error("unknown opcode {opcode:#04x}")]
	UnknownOpcode {
		opcode: u8,
	},

	/// A well-formedness check expected an attribute that is not there.
	///
	/// The decoder itself never requires any attribute; this variant is for
	/// callers building checks on top of a decoded class file.
	#[error("missing attribute `{name}`")]
	MissingAttribute {
		name: &'static str,
	},
}

pub type Result<T, E = DecodeError> = std::result::Result<T, E>;
