use crate::tree::pool::{kind, CpIndex};

/// A single annotation, e.g. `@Deprecated(since = "17")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
	/// The field descriptor of the annotation interface, e.g.
	/// `Ljava/lang/Deprecated;`.
	pub type_descriptor: CpIndex<kind::Utf8>,
	pub element_value_pairs: Vec<ElementValuePair>,
}

/// One `name = value` pair of an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementValuePair {
	pub element_name: CpIndex<kind::Utf8>,
	pub value: ElementValue,
}

/// The value side of an annotation element, a tagged union over the
/// constant kinds, enums, classes, nested annotations and arrays.
///
/// The primitive variants keep the constant pool pointer instead of the
/// resolved value; `B C I S Z` all point at an `Integer` entry, differing
/// only in how the consumer narrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementValue {
	/// Tag `B`.
	Byte(CpIndex<kind::Integer>),
	/// Tag `C`.
	Char(CpIndex<kind::Integer>),
	/// Tag `D`.
	Double(CpIndex<kind::Double>),
	/// Tag `F`.
	Float(CpIndex<kind::Float>),
	/// Tag `I`.
	Int(CpIndex<kind::Integer>),
	/// Tag `J`.
	Long(CpIndex<kind::Long>),
	/// Tag `S`.
	Short(CpIndex<kind::Integer>),
	/// Tag `Z`.
	Boolean(CpIndex<kind::Integer>),
	/// Tag `s`.
	String(CpIndex<kind::Utf8>),
	/// Tag `e`: an enum constant, as the field descriptor of the enum type
	/// plus the simple name of the constant.
	Enum {
		type_name: CpIndex<kind::Utf8>,
		const_name: CpIndex<kind::Utf8>,
	},
	/// Tag `c`: a class literal, as a return descriptor (`V` encodes
	/// `void.class`).
	Class(CpIndex<kind::Utf8>),
	/// Tag `@`.
	Annotation(Annotation),
	/// Tag `[`.
	Array(Vec<ElementValue>),
}
