use crate::class_constants::pool;
use crate::cursor::Cursor;
use crate::error::{DecodeError, Result};
use crate::tree::pool::{ConstantPool, CpIndex, DynamicInfo, MemberRef, MethodHandle, NameAndType, PoolEntry, ReferenceKind};

/// Reads the constant pool. The first thing read is the `u16`
/// `constant_pool_count`; the pool holds `count - 1` logical entries.
///
/// A `None` is stored for the zero index and pushed after every `Long` and
/// `Double`, since those occupy two slots and the upper one must never be
/// referenced.
pub(crate) fn read_pool<'a>(cursor: &mut Cursor<'a>) -> Result<ConstantPool<'a>> {
	let constant_pool_count = cursor.read_u16_as_usize()?;

	let mut entries = vec![None];
	while entries.len() < constant_pool_count {
		let entry = match cursor.read_u8()? {
			pool::UTF8 => {
				let length = cursor.read_u16_as_usize()?;
				PoolEntry::Utf8(cursor.read_slice(length)?)
			},
			pool::INTEGER => PoolEntry::Integer {
				bytes: cursor.read_u32()?,
			},
			pool::FLOAT => PoolEntry::Float {
				bytes: cursor.read_u32()?,
			},
			pool::LONG => PoolEntry::Long {
				high_bytes: cursor.read_u32()?,
				low_bytes: cursor.read_u32()?,
			},
			pool::DOUBLE => PoolEntry::Double {
				high_bytes: cursor.read_u32()?,
				low_bytes: cursor.read_u32()?,
			},
			pool::CLASS => PoolEntry::Class {
				name: read_index(cursor)?,
			},
			pool::STRING => PoolEntry::String {
				string: read_index(cursor)?,
			},
			pool::FIELD_REF => PoolEntry::FieldRef(read_member_ref(cursor)?),
			pool::METHOD_REF => PoolEntry::MethodRef(read_member_ref(cursor)?),
			pool::INTERFACE_METHOD_REF => PoolEntry::InterfaceMethodRef(read_member_ref(cursor)?),
			pool::NAME_AND_TYPE => PoolEntry::NameAndType(NameAndType {
				name: read_index(cursor)?,
				descriptor: read_index(cursor)?,
			}),
			pool::METHOD_HANDLE => PoolEntry::MethodHandle(MethodHandle {
				kind: ReferenceKind::from_u8(cursor.read_u8()?)?,
				reference: cursor.read_u16()?,
			}),
			pool::METHOD_TYPE => PoolEntry::MethodType {
				descriptor: read_index(cursor)?,
			},
			pool::DYNAMIC => PoolEntry::Dynamic(read_dynamic_info(cursor)?),
			pool::INVOKE_DYNAMIC => PoolEntry::InvokeDynamic(read_dynamic_info(cursor)?),
			pool::MODULE => PoolEntry::Module {
				name: read_index(cursor)?,
			},
			pool::PACKAGE => PoolEntry::Package {
				name: read_index(cursor)?,
			},
			tag => return Err(DecodeError::UnknownConstantPoolTag { tag, index: entries.len() as u16 }),
		};

		let takes_two_slots = matches!(entry, PoolEntry::Long { .. } | PoolEntry::Double { .. });
		entries.push(Some(entry));
		if takes_two_slots {
			entries.push(None);
		}
	}

	Ok(ConstantPool::from_entries(entries))
}

fn read_index<K: crate::tree::pool::EntryKind>(cursor: &mut Cursor<'_>) -> Result<CpIndex<K>> {
	Ok(CpIndex::new(cursor.read_u16()?))
}

fn read_member_ref(cursor: &mut Cursor<'_>) -> Result<MemberRef> {
	Ok(MemberRef {
		class: read_index(cursor)?,
		name_and_type: read_index(cursor)?,
	})
}

fn read_dynamic_info(cursor: &mut Cursor<'_>) -> Result<DynamicInfo> {
	Ok(DynamicInfo {
		bootstrap_method_attr: cursor.read_u16()?,
		name_and_type: read_index(cursor)?,
	})
}

#[cfg(test)]
mod testing {
	use pretty_assertions::assert_eq;
	use crate::tree::pool::kind;
	use super::*;

	#[test]
	fn long_takes_two_slots() -> Result<()> {
		// count = 4: a long at 1 (and 2), a class at 3
		let bytes = [
			0x00, 0x04,
			0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2a, // Long 42
			0x07, 0x00, 0x04, // Class, name at 4
		];
		let pool = read_pool(&mut Cursor::new(&bytes))?;

		assert_eq!(pool.len(), 3);
		assert_eq!(pool.get(CpIndex::<kind::Long>::new(1))?, (0, 42));
		assert_eq!(
			pool.get(CpIndex::<kind::Any>::new(2)),
			Err(DecodeError::InvalidCpIndex { index: 2 })
		);
		assert_eq!(pool.get(CpIndex::<kind::Class>::new(3))?, CpIndex::new(4));

		Ok(())
	}

	#[test]
	fn utf8_borrows_from_the_input() -> Result<()> {
		let bytes = [
			0x00, 0x02,
			0x01, 0x00, 0x04, b'C', b'o', b'd', b'e',
		];
		let pool = read_pool(&mut Cursor::new(&bytes))?;

		assert_eq!(pool.get(CpIndex::<kind::Utf8>::new(1))?, b"Code");

		Ok(())
	}

	#[test]
	fn unknown_tags_are_reported_with_their_slot() {
		let bytes = [0x00, 0x03, 0x03, 0x00, 0x00, 0x00, 0x07, 0x02];
		assert_eq!(
			read_pool(&mut Cursor::new(&bytes)).unwrap_err(),
			DecodeError::UnknownConstantPoolTag { tag: 2, index: 2 }
		);
	}

	#[test]
	fn bad_method_handle_kinds_are_reported() {
		let bytes = [0x00, 0x02, 0x0f, 0x0a, 0x00, 0x01];
		assert_eq!(
			read_pool(&mut Cursor::new(&bytes)).unwrap_err(),
			DecodeError::UnknownReferenceKind { kind: 10 }
		);
	}
}
