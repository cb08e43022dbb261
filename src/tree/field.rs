use std::fmt::{Debug, Formatter};
use crate::error::{DecodeError, Result};
use crate::tree::attribute::Attribute;
use crate::tree::pool::{kind, CpIndex};

/// A field of a class.
#[derive(Debug)]
pub struct Field<'a> {
	pub access: FieldAccess,
	pub name: CpIndex<kind::Utf8>,
	pub descriptor: CpIndex<kind::Utf8>,
	pub attributes: Vec<Attribute<'a>>,
}

impl<'a> Field<'a> {
	/// Finds the first attribute of this field with the given wire-format
	/// name, e.g. `b"ConstantValue"`.
	pub fn find_attribute(&self, name: &[u8]) -> Option<&Attribute<'a>> {
		self.attributes.iter()
			.find(|attribute| attribute.name() == name)
	}
}

/// The access flags a field can have.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct FieldAccess {
	pub is_public: bool,
	pub is_private: bool,
	pub is_protected: bool,
	pub is_static: bool,
	pub is_final: bool,
	pub is_volatile: bool,
	pub is_transient: bool,
	pub is_synthetic: bool,
	pub is_enum: bool,
}

impl FieldAccess {
	const MASK: u16 = 0x0001 | 0x0002 | 0x0004 | 0x0008 | 0x0010 | 0x0040 | 0x0080 | 0x1000 | 0x4000;
}

impl Debug for FieldAccess {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("FieldAccess { ")?;
		if self.is_public    { f.write_str("public ")?; }
		if self.is_private   { f.write_str("private ")?; }
		if self.is_protected { f.write_str("protected ")?; }
		if self.is_static    { f.write_str("static ")?; }
		if self.is_final     { f.write_str("final ")?; }
		if self.is_volatile  { f.write_str("volatile ")?; }
		if self.is_transient { f.write_str("transient ")?; }
		if self.is_synthetic { f.write_str("synthetic ")?; }
		if self.is_enum      { f.write_str("enum ")?; }
		f.write_str("}")
	}
}

impl TryFrom<u16> for FieldAccess {
	type Error = DecodeError;

	fn try_from(value: u16) -> Result<FieldAccess> {
		if value & !FieldAccess::MASK != 0 {
			return Err(DecodeError::InvalidAccessFlags { context: "field", flags: value });
		}
		Ok(FieldAccess {
			is_public:    value & 0x0001 != 0,
			is_private:   value & 0x0002 != 0,
			is_protected: value & 0x0004 != 0,
			is_static:    value & 0x0008 != 0,
			is_final:     value & 0x0010 != 0,
			is_volatile:  value & 0x0040 != 0,
			is_transient: value & 0x0080 != 0,
			is_synthetic: value & 0x1000 != 0,
			is_enum:      value & 0x4000 != 0,
		})
	}
}
