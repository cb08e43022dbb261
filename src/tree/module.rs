use std::fmt::{Debug, Formatter};
use crate::error::{DecodeError, Result};
use crate::tree::pool::{kind, CpIndex};

/// The payload of the `Module` attribute.
///
/// Unless the module is `java.base` itself, a well-formed module has exactly
/// one `requires` entry naming `java.base`; that is a well-formedness rule
/// for callers, not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
	pub name: CpIndex<kind::Module>,
	pub flags: ModuleFlags,
	/// Zero if no version information is present.
	pub version: CpIndex<kind::Utf8>,
	pub requires: Vec<ModuleRequires>,
	pub exports: Vec<ModuleExports>,
	pub opens: Vec<ModuleOpens>,
	/// The service interfaces this module uses.
	pub uses: Vec<CpIndex<kind::Class>>,
	pub provides: Vec<ModuleProvides>,
}

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct ModuleFlags {
	pub is_open: bool,
	pub is_synthetic: bool,
	pub is_mandated: bool,
}

impl ModuleFlags {
	const MASK: u16 = 0x0020 | 0x1000 | 0x8000;
}

impl Debug for ModuleFlags {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("ModuleFlags { ")?;
		if self.is_open      { f.write_str("open ")?; }
		if self.is_synthetic { f.write_str("synthetic ")?; }
		if self.is_mandated  { f.write_str("mandated ")?; }
		f.write_str("}")
	}
}

impl TryFrom<u16> for ModuleFlags {
	type Error = DecodeError;

	fn try_from(value: u16) -> Result<ModuleFlags> {
		if value & !ModuleFlags::MASK != 0 {
			return Err(DecodeError::InvalidAccessFlags { context: "module", flags: value });
		}
		Ok(ModuleFlags {
			is_open:      value & 0x0020 != 0,
			is_synthetic: value & 0x1000 != 0,
			is_mandated:  value & 0x8000 != 0,
		})
	}
}

/// One `requires` entry of a `Module` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleRequires {
	pub module: CpIndex<kind::Module>,
	pub flags: ModuleRequiresFlags,
	/// Zero if no version information is present.
	pub version: CpIndex<kind::Utf8>,
}

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct ModuleRequiresFlags {
	pub is_transitive: bool,
	pub is_static_phase: bool,
	pub is_synthetic: bool,
	pub is_mandated: bool,
}

impl ModuleRequiresFlags {
	const MASK: u16 = 0x0020 | 0x0040 | 0x1000 | 0x8000;
}

impl Debug for ModuleRequiresFlags {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("ModuleRequiresFlags { ")?;
		if self.is_transitive   { f.write_str("transitive ")?; }
		if self.is_static_phase { f.write_str("static-phase ")?; }
		if self.is_synthetic    { f.write_str("synthetic ")?; }
		if self.is_mandated     { f.write_str("mandated ")?; }
		f.write_str("}")
	}
}

impl TryFrom<u16> for ModuleRequiresFlags {
	type Error = DecodeError;

	fn try_from(value: u16) -> Result<ModuleRequiresFlags> {
		if value & !ModuleRequiresFlags::MASK != 0 {
			return Err(DecodeError::InvalidAccessFlags { context: "module requires", flags: value });
		}
		Ok(ModuleRequiresFlags {
			is_transitive:   value & 0x0020 != 0,
			is_static_phase: value & 0x0040 != 0,
			is_synthetic:    value & 0x1000 != 0,
			is_mandated:     value & 0x8000 != 0,
		})
	}
}

/// One `exports` entry of a `Module` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleExports {
	pub package: CpIndex<kind::Package>,
	pub flags: ModuleExportsFlags,
	/// The modules the package is exported to; empty for an unqualified
	/// export.
	pub exports_to: Vec<CpIndex<kind::Module>>,
}

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct ModuleExportsFlags {
	pub is_synthetic: bool,
	pub is_mandated: bool,
}

impl ModuleExportsFlags {
	const MASK: u16 = 0x1000 | 0x8000;
}

impl Debug for ModuleExportsFlags {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("ModuleExportsFlags { ")?;
		if self.is_synthetic { f.write_str("synthetic ")?; }
		if self.is_mandated  { f.write_str("mandated ")?; }
		f.write_str("}")
	}
}

impl TryFrom<u16> for ModuleExportsFlags {
	type Error = DecodeError;

	fn try_from(value: u16) -> Result<ModuleExportsFlags> {
		if value & !ModuleExportsFlags::MASK != 0 {
			return Err(DecodeError::InvalidAccessFlags { context: "module exports", flags: value });
		}
		Ok(ModuleExportsFlags {
			is_synthetic: value & 0x1000 != 0,
			is_mandated:  value & 0x8000 != 0,
		})
	}
}

/// One `opens` entry of a `Module` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleOpens {
	pub package: CpIndex<kind::Package>,
	pub flags: ModuleOpensFlags,
	/// The modules the package is opened to; empty for an unqualified open.
	pub opens_to: Vec<CpIndex<kind::Module>>,
}

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct ModuleOpensFlags {
	pub is_synthetic: bool,
	pub is_mandated: bool,
}

impl ModuleOpensFlags {
	const MASK: u16 = 0x1000 | 0x8000;
}

impl Debug for ModuleOpensFlags {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("ModuleOpensFlags { ")?;
		if self.is_synthetic { f.write_str("synthetic ")?; }
		if self.is_mandated  { f.write_str("mandated ")?; }
		f.write_str("}")
	}
}

impl TryFrom<u16> for ModuleOpensFlags {
	type Error = DecodeError;

	fn try_from(value: u16) -> Result<ModuleOpensFlags> {
		if value & !ModuleOpensFlags::MASK != 0 {
			return Err(DecodeError::InvalidAccessFlags { context: "module opens", flags: value });
		}
		Ok(ModuleOpensFlags {
			is_synthetic: value & 0x1000 != 0,
			is_mandated:  value & 0x8000 != 0,
		})
	}
}

/// One `provides` entry of a `Module` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleProvides {
	/// The provided service interface.
	pub service: CpIndex<kind::Class>,
	/// The implementation classes.
	pub provides_with: Vec<CpIndex<kind::Class>>,
}
