//! The fixed numbers and names of the class file format.
//!
//! Everything in here comes straight out of the tables of the
//! [Java Virtual Machine Specification, Chapter 4](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-4.html).

pub(crate) const MAGIC: u32 = 0xCAFE_BABE;

/// Constant pool entry tags, see JVMS table 4.4-B.
pub(crate) mod pool {
	pub(crate) const UTF8: u8 = 1;
	pub(crate) const INTEGER: u8 = 3;
	pub(crate) const FLOAT: u8 = 4;
	pub(crate) const LONG: u8 = 5;
	pub(crate) const DOUBLE: u8 = 6;
	pub(crate) const CLASS: u8 = 7;
	pub(crate) const STRING: u8 = 8;
	pub(crate) const FIELD_REF: u8 = 9;
	pub(crate) const METHOD_REF: u8 = 10;
	pub(crate) const INTERFACE_METHOD_REF: u8 = 11;
	pub(crate) const NAME_AND_TYPE: u8 = 12;
	pub(crate) const METHOD_HANDLE: u8 = 15;
	pub(crate) const METHOD_TYPE: u8 = 16;
	pub(crate) const DYNAMIC: u8 = 17;
	pub(crate) const INVOKE_DYNAMIC: u8 = 18;
	pub(crate) const MODULE: u8 = 19;
	pub(crate) const PACKAGE: u8 = 20;
}

/// The `reference_kind` values of a `MethodHandle` pool entry, JVMS table 5.4.3.5-A.
pub(crate) mod method_handle_reference {
	pub(crate) const GET_FIELD: u8 = 1;
	pub(crate) const GET_STATIC: u8 = 2;
	pub(crate) const PUT_FIELD: u8 = 3;
	pub(crate) const PUT_STATIC: u8 = 4;
	pub(crate) const INVOKE_VIRTUAL: u8 = 5;
	pub(crate) const INVOKE_STATIC: u8 = 6;
	pub(crate) const INVOKE_SPECIAL: u8 = 7;
	pub(crate) const NEW_INVOKE_SPECIAL: u8 = 8;
	pub(crate) const INVOKE_INTERFACE: u8 = 9;
}

/// The predefined attribute names, JVMS section 4.7.
///
/// These are the byte contents of the `Utf8` entries the
/// `attribute_name_index` of each attribute points at. Names outside this
/// set are decoded as [`Attribute::Unknown`][crate::tree::attribute::Attribute::Unknown].
pub(crate) mod attribute {
	pub(crate) const CONSTANT_VALUE: &[u8] = b"ConstantValue";
	pub(crate) const CODE: &[u8] = b"Code";
	pub(crate) const STACK_MAP_TABLE: &[u8] = b"StackMapTable";
	pub(crate) const EXCEPTIONS: &[u8] = b"Exceptions";
	pub(crate) const INNER_CLASSES: &[u8] = b"InnerClasses";
	pub(crate) const ENCLOSING_METHOD: &[u8] = b"EnclosingMethod";
	pub(crate) const SYNTHETIC: &[u8] = b"Synthetic";
	pub(crate) const SIGNATURE: &[u8] = b"Signature";
	pub(crate) const SOURCE_FILE: &[u8] = b"SourceFile";
	pub(crate) const SOURCE_DEBUG_EXTENSION: &[u8] = b"SourceDebugExtension";
	pub(crate) const LINE_NUMBER_TABLE: &[u8] = b"LineNumberTable";
	pub(crate) const LOCAL_VARIABLE_TABLE: &[u8] = b"LocalVariableTable";
	pub(crate) const LOCAL_VARIABLE_TYPE_TABLE: &[u8] = b"LocalVariableTypeTable";
	pub(crate) const DEPRECATED: &[u8] = b"Deprecated";
	pub(crate) const RUNTIME_VISIBLE_ANNOTATIONS: &[u8] = b"RuntimeVisibleAnnotations";
	pub(crate) const RUNTIME_INVISIBLE_ANNOTATIONS: &[u8] = b"RuntimeInvisibleAnnotations";
	pub(crate) const RUNTIME_VISIBLE_PARAMETER_ANNOTATIONS: &[u8] = b"RuntimeVisibleParameterAnnotations";
	pub(crate) const RUNTIME_INVISIBLE_PARAMETER_ANNOTATIONS: &[u8] = b"RuntimeInvisibleParameterAnnotations";
	pub(crate) const RUNTIME_VISIBLE_TYPE_ANNOTATIONS: &[u8] = b"RuntimeVisibleTypeAnnotations";
	pub(crate) const RUNTIME_INVISIBLE_TYPE_ANNOTATIONS: &[u8] = b"RuntimeInvisibleTypeAnnotations";
	pub(crate) const ANNOTATION_DEFAULT: &[u8] = b"AnnotationDefault";
	pub(crate) const BOOTSTRAP_METHODS: &[u8] = b"BootstrapMethods";
	pub(crate) const METHOD_PARAMETERS: &[u8] = b"MethodParameters";
	pub(crate) const MODULE: &[u8] = b"Module";
	pub(crate) const MODULE_PACKAGES: &[u8] = b"ModulePackages";
	pub(crate) const MODULE_MAIN_CLASS: &[u8] = b"ModuleMainClass";
	pub(crate) const NEST_HOST: &[u8] = b"NestHost";
	pub(crate) const NEST_MEMBERS: &[u8] = b"NestMembers";
	pub(crate) const RECORD: &[u8] = b"Record";
	pub(crate) const PERMITTED_SUBCLASSES: &[u8] = b"PermittedSubclasses";
}

/// The `target_type` values of a type annotation, JVMS tables 4.7.20-A through C.
pub(crate) mod type_annotation {
	pub(crate) const CLASS_TYPE_PARAMETER: u8 = 0x00;
	pub(crate) const METHOD_TYPE_PARAMETER: u8 = 0x01;
	pub(crate) const CLASS_EXTENDS: u8 = 0x10;
	pub(crate) const CLASS_TYPE_PARAMETER_BOUND: u8 = 0x11;
	pub(crate) const METHOD_TYPE_PARAMETER_BOUND: u8 = 0x12;
	pub(crate) const FIELD: u8 = 0x13;
	pub(crate) const METHOD_RETURN: u8 = 0x14;
	pub(crate) const METHOD_RECEIVER: u8 = 0x15;
	pub(crate) const METHOD_FORMAL_PARAMETER: u8 = 0x16;
	pub(crate) const THROWS: u8 = 0x17;
	pub(crate) const LOCAL_VARIABLE: u8 = 0x40;
	pub(crate) const RESOURCE_VARIABLE: u8 = 0x41;
	pub(crate) const EXCEPTION_PARAMETER: u8 = 0x42;
	pub(crate) const INSTANCE_OF: u8 = 0x43;
	pub(crate) const NEW: u8 = 0x44;
	pub(crate) const CONSTRUCTOR_REFERENCE: u8 = 0x45;
	pub(crate) const METHOD_REFERENCE: u8 = 0x46;
	pub(crate) const CAST: u8 = 0x47;
	pub(crate) const CONSTRUCTOR_INVOCATION_TYPE_ARGUMENT: u8 = 0x48;
	pub(crate) const METHOD_INVOCATION_TYPE_ARGUMENT: u8 = 0x49;
	pub(crate) const CONSTRUCTOR_REFERENCE_TYPE_ARGUMENT: u8 = 0x4A;
	pub(crate) const METHOD_REFERENCE_TYPE_ARGUMENT: u8 = 0x4B;
}

/// The `type_path_kind` values of a type path entry, JVMS table 4.7.20.2-A.
pub(crate) mod type_path {
	pub(crate) const ARRAY_TYPE: u8 = 0;
	pub(crate) const NESTED_TYPE: u8 = 1;
	pub(crate) const WILDCARD: u8 = 2;
	pub(crate) const PARAMETERIZED: u8 = 3;
}
