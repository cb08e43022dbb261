use std::fmt::{Debug, Formatter};
use crate::error::{DecodeError, Result};
use crate::tree::attribute::Attribute;
use crate::tree::pool::{kind, CpIndex};

pub mod code;

/// A method of a class.
#[derive(Debug)]
pub struct Method<'a> {
	pub access: MethodAccess,
	pub name: CpIndex<kind::Utf8>,
	pub descriptor: CpIndex<kind::Utf8>,
	pub attributes: Vec<Attribute<'a>>,
}

impl<'a> Method<'a> {
	/// Finds the first attribute of this method with the given wire-format
	/// name, e.g. `b"Code"`.
	pub fn find_attribute(&self, name: &[u8]) -> Option<&Attribute<'a>> {
		self.attributes.iter()
			.find(|attribute| attribute.name() == name)
	}
}

/// The access flags a method can have.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct MethodAccess {
	pub is_public: bool,
	pub is_private: bool,
	pub is_protected: bool,
	pub is_static: bool,
	pub is_final: bool,
	pub is_synchronized: bool,
	pub is_bridge: bool,
	pub is_varargs: bool,
	pub is_native: bool,
	pub is_abstract: bool,
	pub is_strict: bool,
	pub is_synthetic: bool,
}

impl MethodAccess {
	const MASK: u16 = 0x0001 | 0x0002 | 0x0004 | 0x0008 | 0x0010 | 0x0020 | 0x0040 | 0x0080 | 0x0100 | 0x0400 | 0x0800 | 0x1000;
}

impl Debug for MethodAccess {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("MethodAccess { ")?;
		if self.is_public       { f.write_str("public ")?; }
		if self.is_private      { f.write_str("private ")?; }
		if self.is_protected    { f.write_str("protected ")?; }
		if self.is_static       { f.write_str("static ")?; }
		if self.is_final        { f.write_str("final ")?; }
		if self.is_synchronized { f.write_str("synchronized ")?; }
		if self.is_bridge       { f.write_str("bridge ")?; }
		if self.is_varargs      { f.write_str("varargs ")?; }
		if self.is_native       { f.write_str("native ")?; }
		if self.is_abstract     { f.write_str("abstract ")?; }
		if self.is_strict       { f.write_str("strict ")?; }
		if self.is_synthetic    { f.write_str("synthetic ")?; }
		f.write_str("}")
	}
}

impl TryFrom<u16> for MethodAccess {
	type Error = DecodeError;

	fn try_from(value: u16) -> Result<MethodAccess> {
		if value & !MethodAccess::MASK != 0 {
			return Err(DecodeError::InvalidAccessFlags { context: "method", flags: value });
		}
		Ok(MethodAccess {
			is_public:       value & 0x0001 != 0,
			is_private:      value & 0x0002 != 0,
			is_protected:    value & 0x0004 != 0,
			is_static:       value & 0x0008 != 0,
			is_final:        value & 0x0010 != 0,
			is_synchronized: value & 0x0020 != 0,
			is_bridge:       value & 0x0040 != 0,
			is_varargs:      value & 0x0080 != 0,
			is_native:       value & 0x0100 != 0,
			is_abstract:     value & 0x0400 != 0,
			is_strict:       value & 0x0800 != 0,
			is_synthetic:    value & 0x1000 != 0,
		})
	}
}

/// One entry of the `MethodParameters` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodParameter {
	/// Zero for a formal parameter with no name.
	pub name: CpIndex<kind::Utf8>,
	pub flags: MethodParameterFlags,
}

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct MethodParameterFlags {
	pub is_final: bool,
	pub is_synthetic: bool,
	pub is_mandated: bool,
}

impl MethodParameterFlags {
	const MASK: u16 = 0x0010 | 0x1000 | 0x8000;
}

impl Debug for MethodParameterFlags {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("MethodParameterFlags { ")?;
		if self.is_final     { f.write_str("final ")?; }
		if self.is_synthetic { f.write_str("synthetic ")?; }
		if self.is_mandated  { f.write_str("mandated ")?; }
		f.write_str("}")
	}
}

impl TryFrom<u16> for MethodParameterFlags {
	type Error = DecodeError;

	fn try_from(value: u16) -> Result<MethodParameterFlags> {
		if value & !MethodParameterFlags::MASK != 0 {
			return Err(DecodeError::InvalidAccessFlags { context: "method parameter", flags: value });
		}
		Ok(MethodParameterFlags {
			is_final:     value & 0x0010 != 0,
			is_synthetic: value & 0x1000 != 0,
			is_mandated:  value & 0x8000 != 0,
		})
	}
}
