use crate::class_constants::attribute;
use crate::tree::annotation::{Annotation, ElementValue};
use crate::tree::class::{EnclosingMethod, InnerClass};
use crate::tree::method::code::{ExceptionHandler, LineNumber, LocalVariable, StackMapFrame};
use crate::tree::method::MethodParameter;
use crate::tree::module::Module;
use crate::tree::pool::{kind, CpIndex};
use crate::tree::record::RecordComponent;
use crate::tree::type_annotation::TypeAnnotation;

/// An attribute of a class, field, method, `Code` block or record
/// component.
///
/// Which variants may legally appear where is a matter for a verifier; the
/// decoder parses whatever it finds by name. Names outside the predefined
/// set land in [`Attribute::Unknown`] with their payload untouched, so that
/// class files from future format versions still decode.
#[derive(Debug)]
pub enum Attribute<'a> {
	/// The constant initializer of a `static final` field. Which pool
	/// variant it points at (`Integer`, `Float`, `Long`, `Double` or
	/// `String`) is implied by the field's descriptor and not checked here.
	ConstantValue {
		value: CpIndex<kind::Any>,
	},
	/// The bytecode and supporting tables of a non-abstract, non-native
	/// method.
	Code {
		max_stack: u16,
		max_locals: u16,
		/// The raw bytecode, borrowed from the input buffer. Walk it with
		/// [`crate::insn::instruction_length`].
		code: &'a [u8],
		exception_table: Vec<ExceptionHandler>,
		attributes: Vec<Attribute<'a>>,
	},
	StackMapTable {
		frames: Vec<StackMapFrame>,
	},
	/// The checked exceptions a method declares with `throws`.
	Exceptions {
		exceptions: Vec<CpIndex<kind::Class>>,
	},
	InnerClasses {
		classes: Vec<InnerClass>,
	},
	EnclosingMethod(EnclosingMethod),
	Synthetic,
	Signature {
		signature: CpIndex<kind::Utf8>,
	},
	SourceFile {
		source_file: CpIndex<kind::Utf8>,
	},
	/// Extra debugging information, a modified UTF-8 string kept verbatim.
	SourceDebugExtension {
		debug_extension: &'a [u8],
	},
	LineNumberTable {
		entries: Vec<LineNumber>,
	},
	LocalVariableTable {
		entries: Vec<LocalVariable>,
	},
	LocalVariableTypeTable {
		entries: Vec<LocalVariable>,
	},
	Deprecated,
	RuntimeVisibleAnnotations {
		annotations: Vec<Annotation>,
	},
	RuntimeInvisibleAnnotations {
		annotations: Vec<Annotation>,
	},
	RuntimeVisibleParameterAnnotations {
		/// One annotation list per formal parameter.
		parameters: Vec<Vec<Annotation>>,
	},
	RuntimeInvisibleParameterAnnotations {
		parameters: Vec<Vec<Annotation>>,
	},
	RuntimeVisibleTypeAnnotations {
		annotations: Vec<TypeAnnotation>,
	},
	RuntimeInvisibleTypeAnnotations {
		annotations: Vec<TypeAnnotation>,
	},
	/// The default value of an annotation interface element.
	AnnotationDefault {
		value: ElementValue,
	},
	BootstrapMethods {
		methods: Vec<BootstrapMethod>,
	},
	MethodParameters {
		parameters: Vec<MethodParameter>,
	},
	Module(Module),
	ModulePackages {
		packages: Vec<CpIndex<kind::Package>>,
	},
	ModuleMainClass {
		main_class: CpIndex<kind::Class>,
	},
	NestHost {
		host_class: CpIndex<kind::Class>,
	},
	NestMembers {
		classes: Vec<CpIndex<kind::Class>>,
	},
	Record {
		components: Vec<RecordComponent<'a>>,
	},
	PermittedSubclasses {
		classes: Vec<CpIndex<kind::Class>>,
	},
	/// An attribute with a name outside the predefined set. The payload is
	/// the declared `attribute_length` bytes, borrowed from the input.
	Unknown {
		name: &'a [u8],
		info: &'a [u8],
	},
}

/// One entry of the `BootstrapMethods` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapMethod {
	pub method_handle: CpIndex<kind::MethodHandle>,
	/// The static arguments, as raw pool indices: each must be a loadable
	/// entry, but an argument may reference a bootstrap method again, so
	/// they stay unresolved here.
	pub arguments: Vec<u16>,
}

impl Attribute<'_> {
	/// The wire-format name of this attribute, e.g. `b"Code"`.
	///
	/// For [`Attribute::Unknown`] this is the name found in the class file.
	pub fn name(&self) -> &[u8] {
		match self {
			Attribute::ConstantValue { .. } => attribute::CONSTANT_VALUE,
			Attribute::Code { .. } => attribute::CODE,
			Attribute::StackMapTable { .. } => attribute::STACK_MAP_TABLE,
			Attribute::Exceptions { .. } => attribute::EXCEPTIONS,
			Attribute::InnerClasses { .. } => attribute::INNER_CLASSES,
			Attribute::EnclosingMethod(_) => attribute::ENCLOSING_METHOD,
			Attribute::Synthetic => attribute::SYNTHETIC,
			Attribute::Signature { .. } => attribute::SIGNATURE,
			Attribute::SourceFile { .. } => attribute::SOURCE_FILE,
			Attribute::SourceDebugExtension { .. } => attribute::SOURCE_DEBUG_EXTENSION,
			Attribute::LineNumberTable { .. } => attribute::LINE_NUMBER_TABLE,
			Attribute::LocalVariableTable { .. } => attribute::LOCAL_VARIABLE_TABLE,
			Attribute::LocalVariableTypeTable { .. } => attribute::LOCAL_VARIABLE_TYPE_TABLE,
			Attribute::Deprecated => attribute::DEPRECATED,
			Attribute::RuntimeVisibleAnnotations { .. } => attribute::RUNTIME_VISIBLE_ANNOTATIONS,
			Attribute::RuntimeInvisibleAnnotations { .. } => attribute::RUNTIME_INVISIBLE_ANNOTATIONS,
			Attribute::RuntimeVisibleParameterAnnotations { .. } => attribute::RUNTIME_VISIBLE_PARAMETER_ANNOTATIONS,
			Attribute::RuntimeInvisibleParameterAnnotations { .. } => attribute::RUNTIME_INVISIBLE_PARAMETER_ANNOTATIONS,
			Attribute::RuntimeVisibleTypeAnnotations { .. } => attribute::RUNTIME_VISIBLE_TYPE_ANNOTATIONS,
			Attribute::RuntimeInvisibleTypeAnnotations { .. } => attribute::RUNTIME_INVISIBLE_TYPE_ANNOTATIONS,
			Attribute::AnnotationDefault { .. } => attribute::ANNOTATION_DEFAULT,
			Attribute::BootstrapMethods { .. } => attribute::BOOTSTRAP_METHODS,
			Attribute::MethodParameters { .. } => attribute::METHOD_PARAMETERS,
			Attribute::Module(_) => attribute::MODULE,
			Attribute::ModulePackages { .. } => attribute::MODULE_PACKAGES,
			Attribute::ModuleMainClass { .. } => attribute::MODULE_MAIN_CLASS,
			Attribute::NestHost { .. } => attribute::NEST_HOST,
			Attribute::NestMembers { .. } => attribute::NEST_MEMBERS,
			Attribute::Record { .. } => attribute::RECORD,
			Attribute::PermittedSubclasses { .. } => attribute::PERMITTED_SUBCLASSES,
			Attribute::Unknown { name, .. } => name,
		}
	}
}
