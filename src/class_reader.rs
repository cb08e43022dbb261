use log::trace;
use crate::class_constants::{attribute, type_annotation, type_path, MAGIC};
use crate::cursor::Cursor;
use crate::error::{DecodeError, Result};
use crate::tree::annotation::{Annotation, ElementValue, ElementValuePair};
use crate::tree::attribute::{Attribute, BootstrapMethod};
use crate::tree::class::{ClassAccess, ClassFile, EnclosingMethod, InnerClass, InnerClassFlags};
use crate::tree::field::{Field, FieldAccess};
use crate::tree::method::code::{ExceptionHandler, LineNumber, LocalVariable, StackMapFrame, VerificationTypeInfo};
use crate::tree::method::{Method, MethodAccess, MethodParameter, MethodParameterFlags};
use crate::tree::module::{Module, ModuleExports, ModuleExportsFlags, ModuleFlags, ModuleOpens, ModuleOpensFlags, ModuleProvides, ModuleRequires, ModuleRequiresFlags};
use crate::tree::pool::{kind, ConstantPool, CpIndex, EntryKind};
use crate::tree::record::RecordComponent;
use crate::tree::type_annotation::{LocalVarTargetEntry, Target, TypeAnnotation, TypePathEntry, TypePathKind};
use crate::tree::version::Version;

mod pool;

/// Reads a whole class file, in the fixed order of the format: header,
/// constant pool, access flags, this/super/interfaces, fields, methods,
/// class attributes.
///
/// Bytes after the last class attribute are ignored.
pub(crate) fn read<'a>(cursor: &mut Cursor<'a>) -> Result<ClassFile<'a>> {
	let magic = cursor.read_u32()?;
	if magic != MAGIC {
		return Err(DecodeError::InvalidHeader { got: magic });
	}

	let minor = cursor.read_u16()?;
	let major = cursor.read_u16()?;
	let version = Version::new(major, minor);
	if !version.is_supported() {
		return Err(DecodeError::InvalidMajorVersion { major });
	}

	let pool = pool::read_pool(cursor)?;
	trace!("decoded constant pool with {} entries", pool.len());

	let access = ClassAccess::try_from(cursor.read_u16()?)?;
	let this_class = read_index(cursor)?;
	let super_class = read_index(cursor)?;
	let interfaces = cursor.read_vec(
		|c| c.read_u16_as_usize(),
		|c| read_index(c),
	)?;

	let fields = cursor.read_vec(
		|c| c.read_u16_as_usize(),
		|c| read_field(c, &pool),
	)?;
	let methods = cursor.read_vec(
		|c| c.read_u16_as_usize(),
		|c| read_method(c, &pool),
	)?;
	let attributes = read_attributes(cursor, &pool)?;

	trace!(
		"assembled class file: {} field(s), {} method(s), {} class attribute(s)",
		fields.len(), methods.len(), attributes.len()
	);

	Ok(ClassFile {
		version,
		pool,
		access,
		this_class,
		super_class,
		interfaces,
		fields,
		methods,
		attributes,
	})
}

fn read_index<K: EntryKind>(cursor: &mut Cursor<'_>) -> Result<CpIndex<K>> {
	Ok(CpIndex::new(cursor.read_u16()?))
}

fn read_field<'a>(cursor: &mut Cursor<'a>, pool: &ConstantPool<'a>) -> Result<Field<'a>> {
	Ok(Field {
		access: FieldAccess::try_from(cursor.read_u16()?)?,
		name: read_index(cursor)?,
		descriptor: read_index(cursor)?,
		attributes: read_attributes(cursor, pool)?,
	})
}

fn read_method<'a>(cursor: &mut Cursor<'a>, pool: &ConstantPool<'a>) -> Result<Method<'a>> {
	Ok(Method {
		access: MethodAccess::try_from(cursor.read_u16()?)?,
		name: read_index(cursor)?,
		descriptor: read_index(cursor)?,
		attributes: read_attributes(cursor, pool)?,
	})
}

fn read_attributes<'a>(cursor: &mut Cursor<'a>, pool: &ConstantPool<'a>) -> Result<Vec<Attribute<'a>>> {
	cursor.read_vec(
		|c| c.read_u16_as_usize(),
		|c| read_attribute(c, pool),
	)
}

/// Reads one attribute: name index, length, then a payload dispatched on
/// the resolved name. The pool is only needed to resolve that name.
fn read_attribute<'a>(cursor: &mut Cursor<'a>, pool: &ConstantPool<'a>) -> Result<Attribute<'a>> {
	let name_index: CpIndex<kind::Utf8> = read_index(cursor)?;
	let name = pool.get(name_index)?;
	let length = cursor.read_u32_as_usize()?;

	// Whatever the payload looks like, the file must still hold the
	// declared number of bytes.
	if cursor.remaining() < length {
		return Err(DecodeError::UnexpectedEof {
			offset: cursor.pos(),
			wanted: length - cursor.remaining(),
		});
	}

	// The fixed-size attributes below read their payload with the
	// unchecked cursor calls. That is only sound once `require_length`
	// has verified the declared length covers the bytes they consume;
	// the check above alone would let a lying length (say, a SourceFile
	// declaring 1) run the reads past the end of the buffer.

	Ok(match name {
		name if name == attribute::CONSTANT_VALUE => Attribute::ConstantValue {
			value: read_index_in_length(cursor, length)?,
		},
		name if name == attribute::CODE => {
			let max_stack = cursor.read_u16()?;
			let max_locals = cursor.read_u16()?;
			let code_length = cursor.read_u32_as_usize()?;
			let code = cursor.read_slice(code_length)?;
			let exception_table = cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| Ok(ExceptionHandler {
					start_pc: c.read_u16()?,
					end_pc: c.read_u16()?,
					handler_pc: c.read_u16()?,
					catch_type: read_index(c)?,
				}),
			)?;
			let attributes = read_attributes(cursor, pool)?;

			Attribute::Code { max_stack, max_locals, code, exception_table, attributes }
		},
		name if name == attribute::STACK_MAP_TABLE => Attribute::StackMapTable {
			frames: cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| read_stack_map_frame(c),
			)?,
		},
		name if name == attribute::EXCEPTIONS => Attribute::Exceptions {
			exceptions: cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| read_index(c),
			)?,
		},
		name if name == attribute::INNER_CLASSES => Attribute::InnerClasses {
			classes: cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| Ok(InnerClass {
					inner_class: read_index(c)?,
					outer_class: read_index(c)?,
					inner_name: read_index(c)?,
					flags: InnerClassFlags::try_from(c.read_u16()?)?,
				}),
			)?,
		},
		name if name == attribute::ENCLOSING_METHOD => {
			require_length(cursor, length, 4)?;
			Attribute::EnclosingMethod(EnclosingMethod {
				class: CpIndex::new(cursor.read_u16_unchecked()),
				method: CpIndex::new(cursor.read_u16_unchecked()),
			})
		},
		name if name == attribute::SYNTHETIC => Attribute::Synthetic,
		name if name == attribute::SIGNATURE => Attribute::Signature {
			signature: read_index_in_length(cursor, length)?,
		},
		name if name == attribute::SOURCE_FILE => Attribute::SourceFile {
			source_file: read_index_in_length(cursor, length)?,
		},
		name if name == attribute::SOURCE_DEBUG_EXTENSION => Attribute::SourceDebugExtension {
			debug_extension: cursor.read_slice(length)?,
		},
		name if name == attribute::LINE_NUMBER_TABLE => Attribute::LineNumberTable {
			entries: cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| Ok(LineNumber {
					start_pc: c.read_u16()?,
					line_number: c.read_u16()?,
				}),
			)?,
		},
		name if name == attribute::LOCAL_VARIABLE_TABLE => Attribute::LocalVariableTable {
			entries: read_local_variables(cursor)?,
		},
		name if name == attribute::LOCAL_VARIABLE_TYPE_TABLE => Attribute::LocalVariableTypeTable {
			entries: read_local_variables(cursor)?,
		},
		name if name == attribute::DEPRECATED => Attribute::Deprecated,
		name if name == attribute::RUNTIME_VISIBLE_ANNOTATIONS => Attribute::RuntimeVisibleAnnotations {
			annotations: read_annotations(cursor)?,
		},
		name if name == attribute::RUNTIME_INVISIBLE_ANNOTATIONS => Attribute::RuntimeInvisibleAnnotations {
			annotations: read_annotations(cursor)?,
		},
		name if name == attribute::RUNTIME_VISIBLE_PARAMETER_ANNOTATIONS => Attribute::RuntimeVisibleParameterAnnotations {
			parameters: read_parameter_annotations(cursor)?,
		},
		name if name == attribute::RUNTIME_INVISIBLE_PARAMETER_ANNOTATIONS => Attribute::RuntimeInvisibleParameterAnnotations {
			parameters: read_parameter_annotations(cursor)?,
		},
		name if name == attribute::RUNTIME_VISIBLE_TYPE_ANNOTATIONS => Attribute::RuntimeVisibleTypeAnnotations {
			annotations: read_type_annotations(cursor)?,
		},
		name if name == attribute::RUNTIME_INVISIBLE_TYPE_ANNOTATIONS => Attribute::RuntimeInvisibleTypeAnnotations {
			annotations: read_type_annotations(cursor)?,
		},
		name if name == attribute::ANNOTATION_DEFAULT => Attribute::AnnotationDefault {
			value: read_element_value(cursor)?,
		},
		name if name == attribute::BOOTSTRAP_METHODS => Attribute::BootstrapMethods {
			methods: cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| Ok(BootstrapMethod {
					method_handle: read_index(c)?,
					arguments: c.read_vec(
						|c| c.read_u16_as_usize(),
						|c| c.read_u16(),
					)?,
				}),
			)?,
		},
		name if name == attribute::METHOD_PARAMETERS => Attribute::MethodParameters {
			parameters: cursor.read_vec(
				|c| c.read_u8_as_usize(),
				|c| Ok(MethodParameter {
					name: read_index(c)?,
					flags: MethodParameterFlags::try_from(c.read_u16()?)?,
				}),
			)?,
		},
		name if name == attribute::MODULE => Attribute::Module(read_module(cursor)?),
		name if name == attribute::MODULE_PACKAGES => Attribute::ModulePackages {
			packages: cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| read_index(c),
			)?,
		},
		name if name == attribute::MODULE_MAIN_CLASS => Attribute::ModuleMainClass {
			main_class: read_index_in_length(cursor, length)?,
		},
		name if name == attribute::NEST_HOST => Attribute::NestHost {
			host_class: read_index_in_length(cursor, length)?,
		},
		name if name == attribute::NEST_MEMBERS => Attribute::NestMembers {
			classes: cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| read_index(c),
			)?,
		},
		name if name == attribute::RECORD => Attribute::Record {
			components: cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| Ok(RecordComponent {
					name: read_index(c)?,
					descriptor: read_index(c)?,
					attributes: read_attributes(c, pool)?,
				}),
			)?,
		},
		name if name == attribute::PERMITTED_SUBCLASSES => Attribute::PermittedSubclasses {
			classes: cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| read_index(c),
			)?,
		},
		_ => Attribute::Unknown {
			name,
			info: cursor.read_slice(length)?,
		},
	})
}

/// Checks that an attribute's declared length covers the `wanted` bytes a
/// fixed-size payload is about to consume.
///
/// A declared length that is too small is an unexpected end of the
/// attribute, even when more bytes (belonging to whatever comes after it)
/// happen to remain in the buffer.
fn require_length(cursor: &Cursor<'_>, length: usize, wanted: usize) -> Result<()> {
	if length < wanted {
		return Err(DecodeError::UnexpectedEof {
			offset: cursor.pos(),
			wanted: wanted - length,
		});
	}
	Ok(())
}

/// Reads the single pool index making up the whole payload of the
/// fixed-size attributes (`ConstantValue`, `Signature`, `SourceFile`, ...).
fn read_index_in_length<K: EntryKind>(cursor: &mut Cursor<'_>, length: usize) -> Result<CpIndex<K>> {
	require_length(cursor, length, 2)?;
	Ok(CpIndex::new(cursor.read_u16_unchecked()))
}

fn read_local_variables(cursor: &mut Cursor<'_>) -> Result<Vec<LocalVariable>> {
	cursor.read_vec(
		|c| c.read_u16_as_usize(),
		|c| Ok(LocalVariable {
			start_pc: c.read_u16()?,
			length: c.read_u16()?,
			name: read_index(c)?,
			descriptor: read_index(c)?,
			index: c.read_u16()?,
		}),
	)
}

fn read_stack_map_frame(cursor: &mut Cursor<'_>) -> Result<StackMapFrame> {
	Ok(match cursor.read_u8()? {
		offset_delta @ 0..=63 => StackMapFrame::Same { offset_delta },
		frame_type @ 64..=127 => StackMapFrame::SameLocals1StackItem {
			offset_delta: frame_type - 64,
			stack: read_verification_type_info(cursor)?,
		},
		tag @ 128..=246 => return Err(DecodeError::ReservedFrameType { tag }),
		247 => StackMapFrame::SameLocals1StackItemExtended {
			offset_delta: cursor.read_u16()?,
			stack: read_verification_type_info(cursor)?,
		},
		frame_type @ 248..=250 => StackMapFrame::Chop {
			k: 251 - frame_type,
			offset_delta: cursor.read_u16()?,
		},
		251 => StackMapFrame::SameExtended {
			offset_delta: cursor.read_u16()?,
		},
		frame_type @ 252..=254 => {
			let offset_delta = cursor.read_u16()?;
			let count = (frame_type - 251) as usize;
			let locals = cursor.read_vec(
				|_| Ok(count),
				|c| read_verification_type_info(c),
			)?;
			StackMapFrame::Append { offset_delta, locals }
		},
		255 => {
			let offset_delta = cursor.read_u16()?;
			let locals = cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| read_verification_type_info(c),
			)?;
			let stack = cursor.read_vec(
				|c| c.read_u16_as_usize(),
				|c| read_verification_type_info(c),
			)?;
			StackMapFrame::Full { offset_delta, locals, stack }
		},
	})
}

fn read_verification_type_info(cursor: &mut Cursor<'_>) -> Result<VerificationTypeInfo> {
	Ok(match cursor.read_u8()? {
		0 => VerificationTypeInfo::Top,
		1 => VerificationTypeInfo::Integer,
		2 => VerificationTypeInfo::Float,
		3 => VerificationTypeInfo::Double,
		4 => VerificationTypeInfo::Long,
		5 => VerificationTypeInfo::Null,
		6 => VerificationTypeInfo::UninitializedThis,
		7 => VerificationTypeInfo::Object(read_index(cursor)?),
		8 => VerificationTypeInfo::Uninitialized {
			offset: cursor.read_u16()?,
		},
		tag => return Err(DecodeError::UnknownVerificationTypeInfoTag { tag }),
	})
}

fn read_annotations(cursor: &mut Cursor<'_>) -> Result<Vec<Annotation>> {
	cursor.read_vec(
		|c| c.read_u16_as_usize(),
		|c| read_annotation(c),
	)
}

fn read_annotation(cursor: &mut Cursor<'_>) -> Result<Annotation> {
	Ok(Annotation {
		type_descriptor: read_index(cursor)?,
		element_value_pairs: cursor.read_vec(
			|c| c.read_u16_as_usize(),
			|c| Ok(ElementValuePair {
				element_name: read_index(c)?,
				value: read_element_value(c)?,
			}),
		)?,
	})
}

fn read_element_value(cursor: &mut Cursor<'_>) -> Result<ElementValue> {
	Ok(match cursor.read_u8()? {
		b'B' => ElementValue::Byte(read_index(cursor)?),
		b'C' => ElementValue::Char(read_index(cursor)?),
		b'D' => ElementValue::Double(read_index(cursor)?),
		b'F' => ElementValue::Float(read_index(cursor)?),
		b'I' => ElementValue::Int(read_index(cursor)?),
		b'J' => ElementValue::Long(read_index(cursor)?),
		b'S' => ElementValue::Short(read_index(cursor)?),
		b'Z' => ElementValue::Boolean(read_index(cursor)?),
		b's' => ElementValue::String(read_index(cursor)?),
		b'e' => ElementValue::Enum {
			type_name: read_index(cursor)?,
			const_name: read_index(cursor)?,
		},
		b'c' => ElementValue::Class(read_index(cursor)?),
		b'@' => ElementValue::Annotation(read_annotation(cursor)?),
		b'[' => ElementValue::Array(cursor.read_vec(
			|c| c.read_u16_as_usize(),
			|c| read_element_value(c),
		)?),
		tag => return Err(DecodeError::UnknownElementValueTag { tag }),
	})
}

fn read_parameter_annotations(cursor: &mut Cursor<'_>) -> Result<Vec<Vec<Annotation>>> {
	cursor.read_vec(
		|c| c.read_u8_as_usize(),
		|c| read_annotations(c),
	)
}

fn read_type_annotations(cursor: &mut Cursor<'_>) -> Result<Vec<TypeAnnotation>> {
	cursor.read_vec(
		|c| c.read_u16_as_usize(),
		|c| {
			// the wire order is target, path, then the annotation itself
			let target = read_target(c)?;
			let type_path = read_type_path(c)?;
			let annotation = read_annotation(c)?;
			Ok(TypeAnnotation { target, type_path, annotation })
		},
	)
}

fn read_target(cursor: &mut Cursor<'_>) -> Result<Target> {
	Ok(match cursor.read_u8()? {
		type_annotation::CLASS_TYPE_PARAMETER => Target::ClassTypeParameter {
			index: cursor.read_u8()?.into(),
		},
		type_annotation::METHOD_TYPE_PARAMETER => Target::MethodTypeParameter {
			index: cursor.read_u8()?.into(),
		},
		type_annotation::CLASS_EXTENDS => Target::ClassExtends {
			index: cursor.read_u16()?,
		},
		type_annotation::CLASS_TYPE_PARAMETER_BOUND => Target::ClassTypeParameterBound {
			type_parameter: cursor.read_u8()?.into(),
			bound: cursor.read_u8()?.into(),
		},
		type_annotation::METHOD_TYPE_PARAMETER_BOUND => Target::MethodTypeParameterBound {
			type_parameter: cursor.read_u8()?.into(),
			bound: cursor.read_u8()?.into(),
		},
		type_annotation::FIELD => Target::Field,
		type_annotation::METHOD_RETURN => Target::MethodReturn,
		type_annotation::METHOD_RECEIVER => Target::MethodReceiver,
		type_annotation::METHOD_FORMAL_PARAMETER => Target::MethodFormalParameter {
			index: cursor.read_u8()?.into(),
		},
		type_annotation::THROWS => Target::Throws {
			index: cursor.read_u16()?,
		},
		type_annotation::LOCAL_VARIABLE => Target::LocalVariable {
			table: read_local_var_target_table(cursor)?,
		},
		type_annotation::RESOURCE_VARIABLE => Target::ResourceVariable {
			table: read_local_var_target_table(cursor)?,
		},
		type_annotation::EXCEPTION_PARAMETER => Target::ExceptionParameter {
			index: cursor.read_u16()?,
		},
		type_annotation::INSTANCE_OF => Target::Instanceof {
			offset: cursor.read_u16()?,
		},
		type_annotation::NEW => Target::New {
			offset: cursor.read_u16()?,
		},
		type_annotation::CONSTRUCTOR_REFERENCE => Target::ConstructorReference {
			offset: cursor.read_u16()?,
		},
		type_annotation::METHOD_REFERENCE => Target::MethodReference {
			offset: cursor.read_u16()?,
		},
		type_annotation::CAST => Target::Cast {
			offset: cursor.read_u16()?,
			index: cursor.read_u8()?.into(),
		},
		type_annotation::CONSTRUCTOR_INVOCATION_TYPE_ARGUMENT => Target::ConstructorInvocationTypeArgument {
			offset: cursor.read_u16()?,
			index: cursor.read_u8()?.into(),
		},
		type_annotation::METHOD_INVOCATION_TYPE_ARGUMENT => Target::MethodInvocationTypeArgument {
			offset: cursor.read_u16()?,
			index: cursor.read_u8()?.into(),
		},
		type_annotation::CONSTRUCTOR_REFERENCE_TYPE_ARGUMENT => Target::ConstructorReferenceTypeArgument {
			offset: cursor.read_u16()?,
			index: cursor.read_u8()?.into(),
		},
		type_annotation::METHOD_REFERENCE_TYPE_ARGUMENT => Target::MethodReferenceTypeArgument {
			offset: cursor.read_u16()?,
			index: cursor.read_u8()?.into(),
		},
		target_type => return Err(DecodeError::InvalidTargetType { target_type }),
	})
}

fn read_local_var_target_table(cursor: &mut Cursor<'_>) -> Result<Vec<LocalVarTargetEntry>> {
	cursor.read_vec(
		|c| c.read_u16_as_usize(),
		|c| Ok(LocalVarTargetEntry {
			start_pc: c.read_u16()?,
			length: c.read_u16()?,
			index: c.read_u16()?,
		}),
	)
}

fn read_type_path(cursor: &mut Cursor<'_>) -> Result<Vec<TypePathEntry>> {
	cursor.read_vec(
		|c| c.read_u8_as_usize(),
		|c| {
			let raw_kind = c.read_u8()?;
			let type_argument_index = c.read_u8()?;

			let kind = match raw_kind {
				type_path::ARRAY_TYPE => TypePathKind::ArrayType,
				type_path::NESTED_TYPE => TypePathKind::NestedType,
				type_path::WILDCARD => TypePathKind::Wildcard,
				type_path::PARAMETERIZED => TypePathKind::Parameterized,
				kind => return Err(DecodeError::InvalidPathKind { kind, type_argument_index }),
			};

			// only a type argument path step selects among several types
			if kind != TypePathKind::Parameterized && type_argument_index != 0 {
				return Err(DecodeError::InvalidPathKind { kind: raw_kind, type_argument_index });
			}

			Ok(TypePathEntry { kind, type_argument_index })
		},
	)
}

fn read_module(cursor: &mut Cursor<'_>) -> Result<Module> {
	Ok(Module {
		name: read_index(cursor)?,
		flags: ModuleFlags::try_from(cursor.read_u16()?)?,
		version: read_index(cursor)?,
		requires: cursor.read_vec(
			|c| c.read_u16_as_usize(),
			|c| Ok(ModuleRequires {
				module: read_index(c)?,
				flags: ModuleRequiresFlags::try_from(c.read_u16()?)?,
				version: read_index(c)?,
			}),
		)?,
		exports: cursor.read_vec(
			|c| c.read_u16_as_usize(),
			|c| Ok(ModuleExports {
				package: read_index(c)?,
				flags: ModuleExportsFlags::try_from(c.read_u16()?)?,
				exports_to: c.read_vec(
					|c| c.read_u16_as_usize(),
					|c| read_index(c),
				)?,
			}),
		)?,
		opens: cursor.read_vec(
			|c| c.read_u16_as_usize(),
			|c| Ok(ModuleOpens {
				package: read_index(c)?,
				flags: ModuleOpensFlags::try_from(c.read_u16()?)?,
				opens_to: c.read_vec(
					|c| c.read_u16_as_usize(),
					|c| read_index(c),
				)?,
			}),
		)?,
		uses: cursor.read_vec(
			|c| c.read_u16_as_usize(),
			|c| read_index(c),
		)?,
		provides: cursor.read_vec(
			|c| c.read_u16_as_usize(),
			|c| Ok(ModuleProvides {
				service: read_index(c)?,
				provides_with: c.read_vec(
					|c| c.read_u16_as_usize(),
					|c| read_index(c),
				)?,
			}),
		)?,
	})
}
