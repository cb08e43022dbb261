//! A decoder for [Java class files](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-4.html).
//!
//! Takes the bytes of a single `.class` file (major versions 45 through 65,
//! i.e. JDK 1.1 through Java SE 21) and decodes them into a
//! [`ClassFile`] tree for inspection, verification or pretty-printing.
//!
//! The decoder is zero-copy where the format allows it: `Utf8` constants,
//! bytecode arrays and `SourceDebugExtension` payloads are borrowed slices
//! into the input buffer, so the buffer has to outlive the decoded value.
//! Constant pool references stay the raw typed pointers
//! ([`tree::pool::CpIndex`]) the format stores, resolved on demand through
//! the pool.
//!
//! ```
//! use kaffee::read_class_file;
//!
//! // the smallest legal class file: magic, version 52.0, an empty pool,
//! // and all counts zero
//! let bytes = [
//!     0xca, 0xfe, 0xba, 0xbe,
//!     0x00, 0x00, 0x00, 0x34,
//!     0x00, 0x01,
//!     0x00, 0x20,
//!     0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//! ];
//!
//! let class = read_class_file(&bytes)?;
//! assert_eq!(class.version.major, 52);
//! assert!(class.access.is_super);
//! assert!(class.fields.is_empty());
//! # Ok::<(), kaffee::DecodeError>(())
//! ```
//!
//! Bytecode is not executed, and not even split into instructions: a `Code`
//! attribute hands out its raw bytes, and [`insn::instruction_length`] is
//! the supporting table for anyone walking them.
//!
//! Errors are the closed [`DecodeError`] taxonomy; the first problem aborts
//! the decode. Trailing bytes after the class structure are ignored.

pub mod insn;
pub mod tree;

mod class_constants;
mod class_reader;
mod cursor;
mod error;

use log::trace;
use crate::cursor::Cursor;
use crate::tree::class::ClassFile;

pub use crate::error::DecodeError;

/// Decodes a single class file from `bytes`.
///
/// The returned [`ClassFile`] borrows from `bytes`. Decoding runs to
/// completion synchronously and touches nothing but the given slice.
pub fn read_class_file(bytes: &[u8]) -> Result<ClassFile<'_>, DecodeError> {
	trace!("decoding a class file of {} byte(s)", bytes.len());

	let mut cursor = Cursor::new(bytes);
	class_reader::read(&mut cursor)
}
