use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use crate::class_constants::method_handle_reference;
use crate::error::{DecodeError, Result};

/// One constant pool entry.
///
/// `Utf8` borrows its bytes from the class file buffer; everything else is a
/// couple of numbers and typed pointers, so the whole enum is [`Copy`].
///
/// The three member reference tags share the [`MemberRef`] shape, and
/// `Dynamic` / `InvokeDynamic` share [`DynamicInfo`]; they stay distinct
/// variants because the tag matters to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolEntry<'a> {
	/// Modified UTF-8 bytes, preserved verbatim. Never decoded to a rust
	/// string by this crate.
	Utf8(&'a [u8]),
	/// The raw big-endian bytes of an `int`; signedness is the consumer's
	/// business.
	Integer { bytes: u32 },
	/// The raw bits of a `float`.
	Float { bytes: u32 },
	/// The two halves of a `long`. Occupies two pool slots.
	Long { high_bytes: u32, low_bytes: u32 },
	/// The two halves of a `double`. Occupies two pool slots.
	Double { high_bytes: u32, low_bytes: u32 },
	/// A class, pointing at its name in internal form (`java/lang/Thread`).
	Class { name: CpIndex<kind::Utf8> },
	/// A `java.lang.String` literal, pointing at its contents.
	String { string: CpIndex<kind::Utf8> },
	FieldRef(MemberRef),
	MethodRef(MemberRef),
	InterfaceMethodRef(MemberRef),
	NameAndType(NameAndType),
	MethodHandle(MethodHandle),
	/// A method descriptor, pointing at its text.
	MethodType { descriptor: CpIndex<kind::Utf8> },
	Dynamic(DynamicInfo),
	InvokeDynamic(DynamicInfo),
	Module { name: CpIndex<kind::Utf8> },
	Package { name: CpIndex<kind::Utf8> },
}

impl PoolEntry<'_> {
	/// The variant name, as used in [`DecodeError::WrongCpType`].
	pub fn variant_name(&self) -> &'static str {
		match self {
			PoolEntry::Utf8(_) => "Utf8",
			PoolEntry::Integer { .. } => "Integer",
			PoolEntry::Float { .. } => "Float",
			PoolEntry::Long { .. } => "Long",
			PoolEntry::Double { .. } => "Double",
			PoolEntry::Class { .. } => "Class",
			PoolEntry::String { .. } => "String",
			PoolEntry::FieldRef(_) => "FieldRef",
			PoolEntry::MethodRef(_) => "MethodRef",
			PoolEntry::InterfaceMethodRef(_) => "InterfaceMethodRef",
			PoolEntry::NameAndType(_) => "NameAndType",
			PoolEntry::MethodHandle(_) => "MethodHandle",
			PoolEntry::MethodType { .. } => "MethodType",
			PoolEntry::Dynamic(_) => "Dynamic",
			PoolEntry::InvokeDynamic(_) => "InvokeDynamic",
			PoolEntry::Module { .. } => "Module",
			PoolEntry::Package { .. } => "Package",
		}
	}
}

/// The shared shape of `FieldRef`, `MethodRef` and `InterfaceMethodRef`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberRef {
	pub class: CpIndex<kind::Class>,
	pub name_and_type: CpIndex<kind::NameAndType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameAndType {
	pub name: CpIndex<kind::Utf8>,
	pub descriptor: CpIndex<kind::Utf8>,
}

/// The shared shape of `Dynamic` and `InvokeDynamic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicInfo {
	/// Index into the `BootstrapMethods` attribute of the class, not into
	/// the constant pool.
	pub bootstrap_method_attr: u16,
	pub name_and_type: CpIndex<kind::NameAndType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodHandle {
	pub kind: ReferenceKind,
	/// Which pool variant this must point at depends on `kind`: a field
	/// reference for the four field kinds, a method or interface method
	/// reference for the invoke kinds. Kept raw here.
	pub reference: u16,
}

/// The nine `reference_kind` values of a `MethodHandle` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
	GetField,
	GetStatic,
	PutField,
	PutStatic,
	InvokeVirtual,
	InvokeStatic,
	InvokeSpecial,
	NewInvokeSpecial,
	InvokeInterface,
}

impl ReferenceKind {
	pub(crate) fn from_u8(kind: u8) -> Result<ReferenceKind> {
		Ok(match kind {
			method_handle_reference::GET_FIELD => ReferenceKind::GetField,
			method_handle_reference::GET_STATIC => ReferenceKind::GetStatic,
			method_handle_reference::PUT_FIELD => ReferenceKind::PutField,
			method_handle_reference::PUT_STATIC => ReferenceKind::PutStatic,
			method_handle_reference::INVOKE_VIRTUAL => ReferenceKind::InvokeVirtual,
			method_handle_reference::INVOKE_STATIC => ReferenceKind::InvokeStatic,
			method_handle_reference::INVOKE_SPECIAL => ReferenceKind::InvokeSpecial,
			method_handle_reference::NEW_INVOKE_SPECIAL => ReferenceKind::NewInvokeSpecial,
			method_handle_reference::INVOKE_INTERFACE => ReferenceKind::InvokeInterface,
			kind => return Err(DecodeError::UnknownReferenceKind { kind }),
		})
	}
}

/// Marker types naming the pool variant a [`CpIndex`] points at.
///
/// These are never constructed; they only live in the type parameter of
/// [`CpIndex`].
pub mod kind {
	pub enum Utf8 {}
	pub enum Integer {}
	pub enum Float {}
	pub enum Long {}
	pub enum Double {}
	pub enum Class {}
	pub enum String {}
	pub enum FieldRef {}
	pub enum MethodRef {}
	pub enum InterfaceMethodRef {}
	pub enum NameAndType {}
	pub enum MethodHandle {}
	pub enum MethodType {}
	pub enum Dynamic {}
	pub enum InvokeDynamic {}
	pub enum Module {}
	pub enum Package {}
	/// For the few sites where the format allows several variants, like the
	/// target of a `ConstantValue` attribute. Resolving yields the whole
	/// [`PoolEntry`][super::PoolEntry].
	pub enum Any {}
}

mod sealed {
	pub trait Sealed {}
}

/// Connects a [`kind`] marker with the value resolving it produces.
pub trait EntryKind: sealed::Sealed {
	/// What [`ConstantPool::get`] returns for pointers of this kind.
	type Value<'a>: Copy;
	/// Variant name used in [`DecodeError::WrongCpType`].
	const NAME: &'static str;
	fn select<'a>(entry: &PoolEntry<'a>) -> Option<Self::Value<'a>>;
}

macro_rules! entry_kind {
	($kind:ty, $name:literal, <$l:lifetime> $value:ty, |$entry:ident| $select:expr) => {
		impl sealed::Sealed for $kind {}
		impl EntryKind for $kind {
			type Value<$l> = $value;
			const NAME: &'static str = $name;
			fn select<$l>($entry: &PoolEntry<$l>) -> Option<Self::Value<$l>> {
				$select
			}
		}
	};
}

entry_kind!(kind::Utf8, "Utf8", <'a> &'a [u8], |entry| match *entry {
	PoolEntry::Utf8(bytes) => Some(bytes),
	_ => None,
});
entry_kind!(kind::Integer, "Integer", <'a> u32, |entry| match *entry {
	PoolEntry::Integer { bytes } => Some(bytes),
	_ => None,
});
entry_kind!(kind::Float, "Float", <'a> u32, |entry| match *entry {
	PoolEntry::Float { bytes } => Some(bytes),
	_ => None,
});
entry_kind!(kind::Long, "Long", <'a> (u32, u32), |entry| match *entry {
	PoolEntry::Long { high_bytes, low_bytes } => Some((high_bytes, low_bytes)),
	_ => None,
});
entry_kind!(kind::Double, "Double", <'a> (u32, u32), |entry| match *entry {
	PoolEntry::Double { high_bytes, low_bytes } => Some((high_bytes, low_bytes)),
	_ => None,
});
entry_kind!(kind::Class, "Class", <'a> CpIndex<kind::Utf8>, |entry| match *entry {
	PoolEntry::Class { name } => Some(name),
	_ => None,
});
entry_kind!(kind::String, "String", <'a> CpIndex<kind::Utf8>, |entry| match *entry {
	PoolEntry::String { string } => Some(string),
	_ => None,
});
entry_kind!(kind::FieldRef, "FieldRef", <'a> MemberRef, |entry| match *entry {
	PoolEntry::FieldRef(member) => Some(member),
	_ => None,
});
entry_kind!(kind::MethodRef, "MethodRef", <'a> MemberRef, |entry| match *entry {
	PoolEntry::MethodRef(member) => Some(member),
	_ => None,
});
entry_kind!(kind::InterfaceMethodRef, "InterfaceMethodRef", <'a> MemberRef, |entry| match *entry {
	PoolEntry::InterfaceMethodRef(member) => Some(member),
	_ => None,
});
entry_kind!(kind::NameAndType, "NameAndType", <'a> NameAndType, |entry| match *entry {
	PoolEntry::NameAndType(name_and_type) => Some(name_and_type),
	_ => None,
});
entry_kind!(kind::MethodHandle, "MethodHandle", <'a> MethodHandle, |entry| match *entry {
	PoolEntry::MethodHandle(handle) => Some(handle),
	_ => None,
});
entry_kind!(kind::MethodType, "MethodType", <'a> CpIndex<kind::Utf8>, |entry| match *entry {
	PoolEntry::MethodType { descriptor } => Some(descriptor),
	_ => None,
});
entry_kind!(kind::Dynamic, "Dynamic", <'a> DynamicInfo, |entry| match *entry {
	PoolEntry::Dynamic(dynamic) => Some(dynamic),
	_ => None,
});
entry_kind!(kind::InvokeDynamic, "InvokeDynamic", <'a> DynamicInfo, |entry| match *entry {
	PoolEntry::InvokeDynamic(dynamic) => Some(dynamic),
	_ => None,
});
entry_kind!(kind::Module, "Module", <'a> CpIndex<kind::Utf8>, |entry| match *entry {
	PoolEntry::Module { name } => Some(name),
	_ => None,
});
entry_kind!(kind::Package, "Package", <'a> CpIndex<kind::Utf8>, |entry| match *entry {
	PoolEntry::Package { name } => Some(name),
	_ => None,
});
entry_kind!(kind::Any, "any entry", <'a> PoolEntry<'a>, |entry| Some(*entry));

/// A typed constant pool index.
///
/// In memory this is nothing but the `u16` the class file stores; the kind
/// parameter only exists at compile time and records which [`PoolEntry`]
/// variant the pointee must be. [`ConstantPool::get`] checks that claim at
/// access time.
///
/// A raw index of zero means "deliberately absent" at the handful of places
/// the format allows that (super class, enclosing method, catch-all handler,
/// ...) and must never be resolved.
pub struct CpIndex<K: EntryKind> {
	index: u16,
	kind: PhantomData<fn() -> K>,
}

impl<K: EntryKind> CpIndex<K> {
	pub fn new(index: u16) -> CpIndex<K> {
		CpIndex { index, kind: PhantomData }
	}

	/// The raw index as stored in the class file.
	pub fn index(self) -> u16 {
		self.index
	}

	/// Whether this is the zero index denoting absence.
	pub fn is_absent(self) -> bool {
		self.index == 0
	}
}

// The manual impls avoid a `K: Clone` style bound; the kind is phantom.
impl<K: EntryKind> Clone for CpIndex<K> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<K: EntryKind> Copy for CpIndex<K> {}
impl<K: EntryKind> PartialEq for CpIndex<K> {
	fn eq(&self, other: &Self) -> bool {
		self.index == other.index
	}
}
impl<K: EntryKind> Eq for CpIndex<K> {}
impl<K: EntryKind> Debug for CpIndex<K> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{} ({})", self.index, K::NAME)
	}
}

/// The constant pool of a class file.
///
/// The pool is 1-indexed and its logical length is `constant_pool_count - 1`.
/// Index 0 and the slot following each `Long`/`Double` hold no entry; both
/// resolve to [`DecodeError::InvalidCpIndex`].
pub struct ConstantPool<'a> {
	/// `None` at index 0 and at the unusable upper slot of each long/double.
	entries: Vec<Option<PoolEntry<'a>>>,
}

impl<'a> ConstantPool<'a> {
	pub(crate) fn from_entries(entries: Vec<Option<PoolEntry<'a>>>) -> ConstantPool<'a> {
		debug_assert!(entries.first().map_or(false, Option::is_none));
		ConstantPool { entries }
	}

	/// The number of logical entries, i.e. `constant_pool_count - 1`.
	/// Unusable upper slots count too.
	pub fn len(&self) -> usize {
		self.entries.len() - 1
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn entry(&self, index: u16) -> Result<&PoolEntry<'a>> {
		match self.entries.get(index as usize) {
			Some(Some(entry)) => Ok(entry),
			_ => Err(DecodeError::InvalidCpIndex { index }),
		}
	}

	/// Resolves a typed pointer, checking both the index and the variant.
	pub fn get<K: EntryKind>(&self, index: CpIndex<K>) -> Result<K::Value<'a>> {
		let entry = self.entry(index.index())?;
		K::select(entry).ok_or(DecodeError::WrongCpType {
			index: index.index(),
			expected: K::NAME,
			got: entry.variant_name(),
		})
	}

	/// Resolves a typed pointer that is already known to be valid.
	///
	/// Panics where [`ConstantPool::get`] would report an error. Meant for
	/// consumers walking a successfully decoded class file, whose own
	/// pointers have all been produced by the decoder.
	pub fn resolve<K: EntryKind>(&self, index: CpIndex<K>) -> K::Value<'a> {
		match self.get(index) {
			Ok(value) => value,
			Err(err) => panic!("constant pool access failed: {err}"),
		}
	}

	/// All slots in pool order, starting at index 1. Unusable slots yield
	/// `None`.
	pub fn iter<'p>(&'p self) -> impl Iterator<Item = (u16, Option<&'p PoolEntry<'a>>)> + 'p {
		self.entries.iter()
			.enumerate()
			.skip(1)
			.map(|(index, entry)| (index as u16, entry.as_ref()))
	}
}

impl Debug for ConstantPool<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut d = f.debug_map();
		for (index, entry) in self.iter() {
			match entry {
				Some(entry) => d.entry(&index, entry),
				None => d.entry(&index, &"(unusable)"),
			};
		}
		d.finish()
	}
}

#[cfg(test)]
mod testing {
	use pretty_assertions::assert_eq;
	use super::*;

	fn pool_with_long<'a>() -> ConstantPool<'a> {
		// count = 4: a long at 1 (occupying 2 as well) and a class at 3
		ConstantPool::from_entries(vec![
			None,
			Some(PoolEntry::Long { high_bytes: 0, low_bytes: 42 }),
			None,
			Some(PoolEntry::Class { name: CpIndex::new(4) }),
		])
	}

	#[test]
	fn pointer_is_wire_sized() {
		assert_eq!(std::mem::size_of::<CpIndex<kind::Utf8>>(), std::mem::size_of::<u16>());
	}

	#[test]
	fn upper_slot_of_long_is_unusable() {
		let pool = pool_with_long();

		assert_eq!(
			pool.get(CpIndex::<kind::Any>::new(2)),
			Err(DecodeError::InvalidCpIndex { index: 2 })
		);
		// ...no matter the expected kind: the index check comes first
		assert_eq!(
			pool.get(CpIndex::<kind::Long>::new(2)),
			Err(DecodeError::InvalidCpIndex { index: 2 })
		);
	}

	#[test]
	fn zero_and_out_of_range_are_invalid() {
		let pool = pool_with_long();

		assert_eq!(
			pool.get(CpIndex::<kind::Utf8>::new(0)),
			Err(DecodeError::InvalidCpIndex { index: 0 })
		);
		assert_eq!(
			pool.get(CpIndex::<kind::Utf8>::new(4)),
			Err(DecodeError::InvalidCpIndex { index: 4 })
		);
	}

	#[test]
	fn variant_mismatch_is_reported() {
		let pool = pool_with_long();

		assert_eq!(
			pool.get(CpIndex::<kind::Utf8>::new(1)),
			Err(DecodeError::WrongCpType { index: 1, expected: "Utf8", got: "Long" })
		);
		assert_eq!(pool.get(CpIndex::<kind::Long>::new(1)), Ok((0, 42)));
	}

	#[test]
	#[should_panic = "constant pool access failed"]
	fn resolving_a_bad_pointer_panics() {
		let pool = pool_with_long();
		pool.resolve(CpIndex::<kind::Utf8>::new(1));
	}
}
