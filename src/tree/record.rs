use crate::tree::attribute::Attribute;
use crate::tree::pool::{kind, CpIndex};

/// One component of a `Record` attribute.
///
/// Record components carry their own attributes (`Signature` and the
/// annotation attributes occur in practice).
#[derive(Debug)]
pub struct RecordComponent<'a> {
	pub name: CpIndex<kind::Utf8>,
	pub descriptor: CpIndex<kind::Utf8>,
	pub attributes: Vec<Attribute<'a>>,
}

impl<'a> RecordComponent<'a> {
	/// Finds the first attribute of this component with the given
	/// wire-format name.
	pub fn find_attribute(&self, name: &[u8]) -> Option<&Attribute<'a>> {
		self.attributes.iter()
			.find(|attribute| attribute.name() == name)
	}
}
