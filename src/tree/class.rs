use std::fmt::{Debug, Formatter};
use crate::error::{DecodeError, Result};
use crate::tree::attribute::Attribute;
use crate::tree::field::Field;
use crate::tree::method::Method;
use crate::tree::pool::{kind, ConstantPool, CpIndex};
use crate::tree::version::Version;

/// A decoded class file.
///
/// Owns its constant pool and every sequence below it; the byte-slice leaves
/// (Utf8 bodies, bytecode arrays, debug extensions) borrow from the buffer
/// the class file was decoded from, which therefore has to outlive this
/// value.
///
/// All constant pool references are kept as the raw typed pointers the wire
/// format stores; resolve them through [`ClassFile::pool`] as needed.
#[derive(Debug)]
pub struct ClassFile<'a> {
	pub version: Version,
	pub pool: ConstantPool<'a>,
	pub access: ClassAccess,
	pub this_class: CpIndex<kind::Class>,
	/// Zero for `java/lang/Object` itself (and for module-info classes).
	pub super_class: CpIndex<kind::Class>,
	/// The direct superinterfaces, in declaration order.
	pub interfaces: Vec<CpIndex<kind::Class>>,
	pub fields: Vec<Field<'a>>,
	pub methods: Vec<Method<'a>>,
	pub attributes: Vec<Attribute<'a>>,
}

impl<'a> ClassFile<'a> {
	/// Reads a `Utf8` pool entry as its raw modified UTF-8 bytes.
	pub fn utf8(&self, index: CpIndex<kind::Utf8>) -> Result<&'a [u8]> {
		self.pool.get(index)
	}

	/// The name of this class, in internal form.
	pub fn this_class_name(&self) -> Result<&'a [u8]> {
		let name = self.pool.get(self.this_class)?;
		self.pool.get(name)
	}

	/// The name of the super class, in internal form.
	///
	/// A zero super class pointer means the class is `java/lang/Object`
	/// itself, whose implicit super class is reported as
	/// `java/lang/Object` here.
	pub fn super_class_name(&self) -> Result<&'a [u8]> {
		if self.super_class.is_absent() {
			return Ok(b"java/lang/Object");
		}
		let name = self.pool.get(self.super_class)?;
		self.pool.get(name)
	}

	/// Finds a field by its unqualified name.
	pub fn find_field(&self, name: &[u8]) -> Option<&Field<'a>> {
		self.fields.iter()
			.find(|field| self.pool.get(field.name).is_ok_and(|n| n == name))
	}

	/// Finds a method by its unqualified name.
	///
	/// Overloads make method names ambiguous; this returns the first match
	/// in class file order.
	pub fn find_method(&self, name: &[u8]) -> Option<&Method<'a>> {
		self.methods.iter()
			.find(|method| self.pool.get(method.name).is_ok_and(|n| n == name))
	}

	/// Finds the first class-level attribute with the given wire-format
	/// name, e.g. `b"SourceFile"`.
	pub fn find_attribute(&self, name: &[u8]) -> Option<&Attribute<'a>> {
		self.attributes.iter()
			.find(|attribute| attribute.name() == name)
	}
}

/// The access flags a class can have.
///
/// Take a look at the [Java Virtual Machine Specification](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-4.html#jvms-4.1-200-E.1)
/// for the meanings of these fields, and which combinations are legal.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct ClassAccess {
	pub is_public: bool,
	pub is_final: bool,
	pub is_super: bool,
	pub is_interface: bool,
	pub is_abstract: bool,
	pub is_synthetic: bool,
	pub is_annotation: bool,
	pub is_enum: bool,
	pub is_module: bool,
}

impl ClassAccess {
	const MASK: u16 = 0x0001 | 0x0010 | 0x0020 | 0x0200 | 0x0400 | 0x1000 | 0x2000 | 0x4000 | 0x8000;
}

impl Debug for ClassAccess {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("ClassAccess { ")?;
		if self.is_public     { f.write_str("public ")?; }
		if self.is_final      { f.write_str("final ")?; }
		if self.is_super      { f.write_str("super ")?; }
		if self.is_interface  { f.write_str("interface ")?; }
		if self.is_abstract   { f.write_str("abstract ")?; }
		if self.is_synthetic  { f.write_str("synthetic ")?; }
		if self.is_annotation { f.write_str("annotation ")?; }
		if self.is_enum       { f.write_str("enum ")?; }
		if self.is_module     { f.write_str("module ")?; }
		f.write_str("}")
	}
}

/// Interprets an `u16` as the `access_flags` item of the `ClassFile`
/// structure, rejecting bits that name no class flag.
impl TryFrom<u16> for ClassAccess {
	type Error = DecodeError;

	fn try_from(value: u16) -> Result<ClassAccess> {
		if value & !ClassAccess::MASK != 0 {
			return Err(DecodeError::InvalidAccessFlags { context: "class", flags: value });
		}
		Ok(ClassAccess {
			is_public:     value & 0x0001 != 0,
			is_final:      value & 0x0010 != 0,
			is_super:      value & 0x0020 != 0,
			is_interface:  value & 0x0200 != 0,
			is_abstract:   value & 0x0400 != 0,
			is_synthetic:  value & 0x1000 != 0,
			is_annotation: value & 0x2000 != 0,
			is_enum:       value & 0x4000 != 0,
			is_module:     value & 0x8000 != 0,
		})
	}
}

/// One entry of the `InnerClasses` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InnerClass {
	pub inner_class: CpIndex<kind::Class>,
	/// Zero if the inner class is not a member of its outer class (local
	/// and anonymous classes).
	pub outer_class: CpIndex<kind::Class>,
	/// The simple source name; zero for anonymous classes.
	pub inner_name: CpIndex<kind::Utf8>,
	pub flags: InnerClassFlags,
}

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct InnerClassFlags {
	pub is_public: bool,
	pub is_private: bool,
	pub is_protected: bool,
	pub is_static: bool,
	pub is_final: bool,
	pub is_interface: bool,
	pub is_abstract: bool,
	pub is_synthetic: bool,
	pub is_annotation: bool,
	pub is_enum: bool,
}

impl InnerClassFlags {
	const MASK: u16 = 0x0001 | 0x0002 | 0x0004 | 0x0008 | 0x0010 | 0x0200 | 0x0400 | 0x1000 | 0x2000 | 0x4000;
}

impl Debug for InnerClassFlags {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("InnerClassFlags { ")?;
		if self.is_public     { f.write_str("public ")?; }
		if self.is_private    { f.write_str("private ")?; }
		if self.is_protected  { f.write_str("protected ")?; }
		if self.is_static     { f.write_str("static ")?; }
		if self.is_final      { f.write_str("final ")?; }
		if self.is_interface  { f.write_str("interface ")?; }
		if self.is_abstract   { f.write_str("abstract ")?; }
		if self.is_synthetic  { f.write_str("synthetic ")?; }
		if self.is_annotation { f.write_str("annotation ")?; }
		if self.is_enum       { f.write_str("enum ")?; }
		f.write_str("}")
	}
}

impl TryFrom<u16> for InnerClassFlags {
	type Error = DecodeError;

	fn try_from(value: u16) -> Result<InnerClassFlags> {
		if value & !InnerClassFlags::MASK != 0 {
			return Err(DecodeError::InvalidAccessFlags { context: "inner class", flags: value });
		}
		Ok(InnerClassFlags {
			is_public:     value & 0x0001 != 0,
			is_private:    value & 0x0002 != 0,
			is_protected:  value & 0x0004 != 0,
			is_static:     value & 0x0008 != 0,
			is_final:      value & 0x0010 != 0,
			is_interface:  value & 0x0200 != 0,
			is_abstract:   value & 0x0400 != 0,
			is_synthetic:  value & 0x1000 != 0,
			is_annotation: value & 0x2000 != 0,
			is_enum:       value & 0x4000 != 0,
		})
	}
}

/// The payload of the `EnclosingMethod` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnclosingMethod {
	pub class: CpIndex<kind::Class>,
	/// Zero if the class is not immediately enclosed by a method or
	/// constructor.
	pub method: CpIndex<kind::NameAndType>,
}
