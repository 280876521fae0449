//! Typed SMBIOS records and their decoders.
//!
//! Each record type implements [`SmbiosRecord`]. Decoding is a pure function of the raw structure: the decoder checks
//! the structure type, then reads every field through a [`StructureReader`]. Fields introduced by later revisions of
//! the SMBIOS specification are read only when the structure's declared length carries them and otherwise keep their
//! default value.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

mod baseboard;
mod bios;
mod enclosure;
mod memory_device;
mod processor;
mod system;

pub use baseboard::BaseboardInformation;
pub use bios::BiosInformation;
pub use enclosure::SystemEnclosure;
pub use memory_device::MemoryDevice;
pub use processor::{ProcessorInformation, ProcessorStatus};
pub use system::SystemInformation;

use crate::{
    codec::StructureReader,
    error::SmbiosDecodeError,
    structure::{RawStructure, SmbiosType},
};

/// Base trait for typed SMBIOS records.
pub trait SmbiosRecord: Sized {
    /// The SMBIOS structure type this record decodes.
    const RECORD_TYPE: SmbiosType;

    /// Reads the record's fields. The structure type has already been checked.
    fn parse(reader: &StructureReader<'_>) -> Result<Self, SmbiosDecodeError>;

    /// Decodes `structure` into this record type.
    fn decode(structure: &RawStructure) -> Result<Self, SmbiosDecodeError> {
        if structure.structure_type() != Self::RECORD_TYPE {
            return Err(SmbiosDecodeError::TypeMismatch {
                expected: Self::RECORD_TYPE,
                found: structure.structure_type(),
            });
        }
        let record = Self::parse(&StructureReader::new(structure))?;
        log::trace!(
            "SMBIOS: decoded type {} structure {:#06x} ({} bytes)",
            Self::RECORD_TYPE,
            structure.handle(),
            structure.declared_length()
        );
        Ok(record)
    }
}

/// Decodes an optional structure, failing with [`SmbiosDecodeError::MissingInput`] when none is supplied.
///
/// ## Example
///
/// ```rust
/// use patina_smbios_inventory::{records::{self, MemoryDevice}, SmbiosDecodeError};
///
/// assert_eq!(records::decode::<MemoryDevice>(None).unwrap_err(), SmbiosDecodeError::MissingInput);
/// ```
pub fn decode<T: SmbiosRecord>(structure: Option<&RawStructure>) -> Result<T, SmbiosDecodeError> {
    T::decode(structure.ok_or(SmbiosDecodeError::MissingInput)?)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::vec;

    #[test]
    fn test_missing_input() {
        assert_eq!(decode::<BiosInformation>(None).unwrap_err(), SmbiosDecodeError::MissingInput);
        assert_eq!(decode::<ProcessorInformation>(None).unwrap_err(), SmbiosDecodeError::MissingInput);
    }

    #[test]
    fn test_type_mismatch_for_every_decoder() {
        let raw = RawStructure::from_parts(0x80, 0x0001, vec![0u8; 0x60], vec![]);
        let mismatch = |expected| SmbiosDecodeError::TypeMismatch { expected, found: 0x80 };
        assert_eq!(BiosInformation::decode(&raw).unwrap_err(), mismatch(0));
        assert_eq!(SystemInformation::decode(&raw).unwrap_err(), mismatch(1));
        assert_eq!(BaseboardInformation::decode(&raw).unwrap_err(), mismatch(2));
        assert_eq!(SystemEnclosure::decode(&raw).unwrap_err(), mismatch(3));
        assert_eq!(ProcessorInformation::decode(&raw).unwrap_err(), mismatch(4));
        assert_eq!(MemoryDevice::decode(&raw).unwrap_err(), mismatch(17));
    }

    #[test]
    fn test_decode_forwards_present_structure() {
        let raw = RawStructure::from_parts(1, 0x0100, vec![0u8; 4], vec![]);
        let record = decode::<SystemInformation>(Some(&raw)).unwrap();
        assert_eq!(record.handle, 0x0100);
    }
}
