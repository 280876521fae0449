//! Field codecs shared by every structure decoder.
//!
//! [`StructureReader`] is the single place that touches the formatted area of a [`RawStructure`]. Every read is
//! bounds-checked, and a read past the end of the formatted area surfaces as [`SmbiosDecodeError::Truncated`].
//! Offsets handed to the reader are structure offsets as listed in the DMTF SMBIOS tables (DSP0134), i.e. the
//! 4 byte header is counted.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use alloc::{string::String, vec::Vec};
use core::mem;

use scroll::{Pread, ctx::TryFromCtx};

use crate::{
    error::SmbiosDecodeError,
    structure::{RawStructure, SMBIOS_STRUCTURE_HEADER_LEN, SmbiosHandle},
    tables::FlagTable,
};

/// Bounds-checked view over one raw structure.
#[derive(Clone, Copy)]
pub struct StructureReader<'a> {
    structure: &'a RawStructure,
}

impl<'a> StructureReader<'a> {
    pub fn new(structure: &'a RawStructure) -> Self {
        Self { structure }
    }

    pub fn declared_length(&self) -> u16 {
        self.structure.declared_length()
    }

    pub fn handle(&self) -> SmbiosHandle {
        self.structure.handle()
    }

    /// Returns true when the declared length is large enough to carry a field starting at `offset`.
    ///
    /// Each SMBIOS revision appends fields to the end of a structure, so a field introduced by a
    /// revision is present exactly when the declared length exceeds the field's offset.
    pub fn has_field(&self, offset: usize) -> bool {
        self.declared_length() as usize > offset
    }

    fn truncated(&self, offset: usize, width: usize) -> SmbiosDecodeError {
        SmbiosDecodeError::Truncated {
            offset,
            width,
            length: self.structure.formatted().len() + SMBIOS_STRUCTURE_HEADER_LEN,
        }
    }

    fn read<T>(&self, offset: usize) -> Result<T, SmbiosDecodeError>
    where
        T: TryFromCtx<'a, scroll::Endian, [u8], Error = scroll::Error>,
    {
        let width = mem::size_of::<T>();
        let local = offset.checked_sub(SMBIOS_STRUCTURE_HEADER_LEN).ok_or_else(|| self.truncated(offset, width))?;
        let formatted: &'a [u8] = self.structure.formatted();
        formatted.pread_with::<T>(local, scroll::LE).map_err(|_| self.truncated(offset, width))
    }

    pub fn u8(&self, offset: usize) -> Result<u8, SmbiosDecodeError> {
        self.read::<u8>(offset)
    }

    pub fn u16(&self, offset: usize) -> Result<u16, SmbiosDecodeError> {
        self.read::<u16>(offset)
    }

    pub fn u32(&self, offset: usize) -> Result<u32, SmbiosDecodeError> {
        self.read::<u32>(offset)
    }

    pub fn u64(&self, offset: usize) -> Result<u64, SmbiosDecodeError> {
        self.read::<u64>(offset)
    }

    /// Copies `N` bytes starting at `offset` in on-the-wire order.
    pub fn bytes<const N: usize>(&self, offset: usize) -> Result<[u8; N], SmbiosDecodeError> {
        offset
            .checked_sub(SMBIOS_STRUCTURE_HEADER_LEN)
            .and_then(|local| self.structure.formatted().get(local..local.checked_add(N)?))
            .and_then(|slice| <[u8; N]>::try_from(slice).ok())
            .ok_or_else(|| self.truncated(offset, N))
    }

    /// Resolves the string number stored at `offset`.
    ///
    /// A string number of zero, or one past the end of the string-set, yields an empty string.
    pub fn string(&self, offset: usize) -> Result<String, SmbiosDecodeError> {
        let number = self.u8(offset)?;
        match self.structure.string(number) {
            Some(value) => Ok(String::from(value.trim())),
            None => {
                if number != 0 {
                    log::debug!(
                        "SMBIOS: structure {:#06x} references string {} of {}",
                        self.handle(),
                        number,
                        self.structure.strings().len()
                    );
                }
                Ok(String::new())
            }
        }
    }

    /// Reads a field introduced by a later revision, or `T::default()` when the structure predates it.
    pub fn gated<T, F>(&self, offset: usize, read: F) -> Result<T, SmbiosDecodeError>
    where
        T: Default,
        F: FnOnce(&Self) -> Result<T, SmbiosDecodeError>,
    {
        Ok(self.optional(offset, read)?.unwrap_or_default())
    }

    /// Reads a field introduced by a later revision, or `None` when the structure predates it.
    pub fn optional<T, F>(&self, offset: usize, read: F) -> Result<Option<T>, SmbiosDecodeError>
    where
        F: FnOnce(&Self) -> Result<T, SmbiosDecodeError>,
    {
        if self.has_field(offset) { read(self).map(Some) } else { Ok(None) }
    }
}

/// Expands the set bits of `value` into their labels.
///
/// Labels are returned in table order, which lists bits from least to most significant. Set bits without a table
/// entry are skipped.
pub fn expand_flags<T: Into<u64>>(value: T, table: &FlagTable) -> Vec<&'static str> {
    let value = value.into();
    table.iter().filter(|(bit, _)| *bit < 64 && value & (1u64 << bit) != 0).map(|(_, label)| *label).collect()
}

/// Resolves a field whose maximum encodable value defers to a wider field elsewhere in the structure.
///
/// The extended value is used only when `primary` equals `sentinel` and the extended field is present.
pub fn resolve_overflow<P, E>(primary: P, sentinel: P, extended: Option<E>) -> u64
where
    P: Into<u64> + PartialEq,
    E: Into<u64>,
{
    match extended {
        Some(extended) if primary == sentinel => extended.into(),
        _ => primary.into(),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::{string::ToString, vec};

    fn structure(formatted: Vec<u8>) -> RawStructure {
        RawStructure::from_parts(0x80, 0x0042, formatted, vec!["  Padded  ".to_string(), "Plain".to_string()])
    }

    #[test]
    fn test_little_endian_reads() {
        let raw = structure(vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
        let reader = StructureReader::new(&raw);
        assert_eq!(reader.u8(4).unwrap(), 0x01);
        assert_eq!(reader.u16(4).unwrap(), 0x0201);
        assert_eq!(reader.u32(6).unwrap(), 0x0605_0403);
        assert_eq!(reader.u64(4).unwrap(), 0x0807_0605_0403_0201);
        assert_eq!(reader.bytes::<3>(9).unwrap(), [0x06, 0x07, 0x08]);
    }

    #[test]
    fn test_reads_past_the_end_are_truncated() {
        let raw = structure(vec![0xAA, 0xBB, 0xCC]);
        let reader = StructureReader::new(&raw);
        assert_eq!(reader.u16(5).unwrap(), 0xCCBB);
        assert_eq!(reader.u16(6).unwrap_err(), SmbiosDecodeError::Truncated { offset: 6, width: 2, length: 7 });
        assert_eq!(reader.u16(7).unwrap_err(), SmbiosDecodeError::Truncated { offset: 7, width: 2, length: 7 });
        assert_eq!(reader.u32(4).unwrap_err(), SmbiosDecodeError::Truncated { offset: 4, width: 4, length: 7 });
        assert!(matches!(reader.bytes::<4>(5), Err(SmbiosDecodeError::Truncated { offset: 5, width: 4, .. })));
        assert!(matches!(reader.u8(2), Err(SmbiosDecodeError::Truncated { offset: 2, width: 1, .. })));
    }

    #[test]
    fn test_string_numbers() {
        let raw = structure(vec![0x01, 0x02, 0x00, 0x07]);
        let reader = StructureReader::new(&raw);
        assert_eq!(reader.string(4).unwrap(), "Padded");
        assert_eq!(reader.string(5).unwrap(), "Plain");
        assert_eq!(reader.string(6).unwrap(), "");
        assert_eq!(reader.string(7).unwrap(), "");
    }

    #[test]
    fn test_gated_reads_use_declared_length() {
        let raw = structure(vec![0x11, 0x22, 0x33, 0x44]);
        let reader = StructureReader::new(&raw);
        assert!(reader.has_field(7));
        assert!(!reader.has_field(8));
        assert_eq!(reader.gated(7, |r| r.u8(7)).unwrap(), 0x44);
        assert_eq!(reader.gated(8, |r| r.u16(8)).unwrap(), 0);
        assert_eq!(reader.optional(8, |r| r.u16(8)).unwrap(), None);
    }

    #[test]
    fn test_expand_flags_in_table_order() {
        static TABLE: &FlagTable = &[(0, "zero"), (2, "two"), (5, "five"), (40, "forty")];
        assert_eq!(expand_flags(0b0010_0101u8, TABLE), vec!["zero", "two", "five"]);
        assert_eq!(expand_flags(0b0000_0010u16, TABLE), Vec::<&str>::new());
        assert_eq!(expand_flags(1u64 << 40 | 1 << 2, TABLE), vec!["two", "forty"]);
    }

    #[test]
    fn test_resolve_overflow() {
        assert_eq!(resolve_overflow(0x12u8, 0xFF, Some(0x0100u16)), 0x12);
        assert_eq!(resolve_overflow(0xFFu8, 0xFF, Some(0x0100u16)), 0x0100);
        assert_eq!(resolve_overflow(0xFFu8, 0xFF, None::<u16>), 0xFF);
    }
}
