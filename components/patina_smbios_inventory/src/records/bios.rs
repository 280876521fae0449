//! BIOS Information (Type 0).
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use alloc::{string::String, vec::Vec};

use crate::{
    codec::{StructureReader, expand_flags, resolve_overflow},
    error::SmbiosDecodeError,
    structure::{SMBIOS_TYPE_BIOS_INFORMATION, SmbiosHandle, SmbiosType},
    tables::{BIOS_CHARACTERISTICS, BIOS_CHARACTERISTICS_EXTENSION},
};

use super::SmbiosRecord;

const ROM_SIZE_GRANULARITY_KIB: u64 = 64;
const ROM_SIZE_USE_EXTENDED: u8 = 0xFF;

/// BIOS Information (Type 0)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BiosInformation {
    pub handle: SmbiosHandle,
    pub vendor: String,
    pub version: String,
    /// Segment location of the BIOS starting address. Zero on UEFI systems.
    pub starting_address_segment: u16,
    pub release_date: String,
    /// Size of the physical device containing the BIOS, in KiB.
    pub rom_size_kib: u64,
    pub characteristics: Vec<&'static str>,
    /// Raw characteristics extension bytes 1 and 2 (2.4+).
    pub characteristics_extension_bytes: u16,
    pub characteristics_extension: Vec<&'static str>,
    pub system_bios_major_release: u8,
    pub system_bios_minor_release: u8,
    pub embedded_controller_major_release: u8,
    pub embedded_controller_minor_release: u8,
    /// Raw extended BIOS ROM size field (3.1+).
    pub extended_rom_size: u16,
}

impl BiosInformation {
    pub fn rom_size_bytes(&self) -> u64 {
        self.rom_size_kib * 1024
    }
}

impl SmbiosRecord for BiosInformation {
    const RECORD_TYPE: SmbiosType = SMBIOS_TYPE_BIOS_INFORMATION;

    fn parse(reader: &StructureReader<'_>) -> Result<Self, SmbiosDecodeError> {
        let mut record = Self {
            handle: reader.handle(),
            vendor: reader.string(0x04)?,
            version: reader.string(0x05)?,
            starting_address_segment: reader.u16(0x06)?,
            release_date: reader.string(0x08)?,
            characteristics: expand_flags(reader.u64(0x0A)?, BIOS_CHARACTERISTICS),
            ..Default::default()
        };

        // 2.4+
        if reader.has_field(0x12) {
            record.characteristics_extension_bytes = reader.u16(0x12)?;
            record.characteristics_extension =
                expand_flags(record.characteristics_extension_bytes, BIOS_CHARACTERISTICS_EXTENSION);
            record.system_bios_major_release = reader.u8(0x14)?;
            record.system_bios_minor_release = reader.u8(0x15)?;
            record.embedded_controller_major_release = reader.u8(0x16)?;
            record.embedded_controller_minor_release = reader.u8(0x17)?;
        }

        // 3.1+
        let extended = reader.optional(0x18, |r| r.u16(0x18))?;
        record.extended_rom_size = extended.unwrap_or_default();

        let rom_size = resolve_overflow(reader.u8(0x09)?, ROM_SIZE_USE_EXTENDED, extended);
        record.rom_size_kib = (rom_size + 1) * ROM_SIZE_GRANULARITY_KIB;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::structure::RawStructure;
    use alloc::{string::ToString, vec};

    fn bios_strings() -> Vec<String> {
        vec!["Patina Firmware ".to_string(), "1.2.3".to_string(), "10/18/2026".to_string()]
    }

    /// Formatted area of a 2.0 structure (declared length 0x12).
    fn base_formatted() -> Vec<u8> {
        let mut formatted = vec![
            0x01, // vendor
            0x02, // version
            0x00, 0xE8, // starting segment
            0x03, // release date
            0x0F, // ROM size: 1 MiB
        ];
        // characteristics: PCI (7), BIOS is upgradeable (11), selectable boot (16)
        formatted.extend_from_slice(&((1u64 << 7) | (1 << 11) | (1 << 16)).to_le_bytes());
        formatted
    }

    #[test]
    fn test_base_fields() {
        let raw = RawStructure::from_parts(0, 0x0000, base_formatted(), bios_strings());
        let bios = BiosInformation::decode(&raw).unwrap();
        assert_eq!(bios.vendor, "Patina Firmware");
        assert_eq!(bios.version, "1.2.3");
        assert_eq!(bios.release_date, "10/18/2026");
        assert_eq!(bios.starting_address_segment, 0xE800);
        assert_eq!(bios.rom_size_kib, 1024);
        assert_eq!(bios.rom_size_bytes(), 1024 * 1024);
        assert_eq!(
            bios.characteristics,
            vec!["PCI is supported", "BIOS is upgradeable", "Selectable boot is supported"]
        );
    }

    #[test]
    fn test_short_structure_keeps_extension_defaults() {
        let raw = RawStructure::from_parts(0, 0x0000, base_formatted(), bios_strings());
        assert_eq!(raw.declared_length(), 18);
        let bios = BiosInformation::decode(&raw).unwrap();
        assert_eq!(bios.characteristics_extension_bytes, 0);
        assert!(bios.characteristics_extension.is_empty());
        assert_eq!(bios.system_bios_major_release, 0);
        assert_eq!(bios.system_bios_minor_release, 0);
        assert_eq!(bios.embedded_controller_major_release, 0);
        assert_eq!(bios.embedded_controller_minor_release, 0);
        assert_eq!(bios.extended_rom_size, 0);
    }

    #[test]
    fn test_release_block() {
        let mut formatted = base_formatted();
        // ACPI (0), USB legacy (1), UEFI (11), virtual machine (12)
        formatted.extend_from_slice(&0b0001_1000_0000_0011u16.to_le_bytes());
        formatted.extend_from_slice(&[0x05, 0x1B, 0x01, 0x02]);
        let raw = RawStructure::from_parts(0, 0x0000, formatted, bios_strings());
        let bios = BiosInformation::decode(&raw).unwrap();
        assert_eq!(
            bios.characteristics_extension,
            vec!["ACPI is supported", "USB legacy is supported", "UEFI is supported", "System is a virtual machine"]
        );
        assert_eq!((bios.system_bios_major_release, bios.system_bios_minor_release), (5, 0x1B));
        assert_eq!((bios.embedded_controller_major_release, bios.embedded_controller_minor_release), (1, 2));
        assert_eq!(bios.rom_size_kib, 1024);
    }

    #[test]
    fn test_extended_rom_size_used_only_on_sentinel() {
        let mut formatted = base_formatted();
        formatted.extend_from_slice(&[0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]);
        formatted.extend_from_slice(&0x00FFu16.to_le_bytes());

        let raw = RawStructure::from_parts(0, 0x0000, formatted.clone(), bios_strings());
        let bios = BiosInformation::decode(&raw).unwrap();
        assert_eq!(bios.extended_rom_size, 0x00FF);
        assert_eq!(bios.rom_size_kib, 1024);

        formatted[0x09 - 4] = 0xFF;
        let raw = RawStructure::from_parts(0, 0x0000, formatted, bios_strings());
        let bios = BiosInformation::decode(&raw).unwrap();
        assert_eq!(bios.rom_size_kib, (0xFF + 1) * 64);
    }

    #[test]
    fn test_rom_size_sentinel_without_extended_field() {
        let mut formatted = base_formatted();
        formatted[0x09 - 4] = 0xFF;
        let raw = RawStructure::from_parts(0, 0x0000, formatted, bios_strings());
        assert_eq!(BiosInformation::decode(&raw).unwrap().rom_size_kib, 16 * 1024);
    }

    #[test]
    fn test_extended_rom_size_needs_length_past_0x18() {
        let mut formatted = base_formatted();
        formatted[0x09 - 4] = 0xFF;
        formatted.extend_from_slice(&[0x00, 0x00, 0x01, 0x00, 0x00, 0x00]);

        let raw = RawStructure::from_parts(0, 0x0000, formatted.clone(), bios_strings());
        assert_eq!(raw.declared_length(), 0x18);
        let bios = BiosInformation::decode(&raw).unwrap();
        assert_eq!(bios.rom_size_kib, 16 * 1024);
        assert_eq!(bios.extended_rom_size, 0);

        formatted.extend_from_slice(&0x0010u16.to_le_bytes());
        let raw = RawStructure::from_parts(0, 0x0000, formatted, bios_strings());
        assert_eq!(raw.declared_length(), 0x1A);
        let bios = BiosInformation::decode(&raw).unwrap();
        assert_eq!(bios.rom_size_kib, (0x10 + 1) * 64);
        assert_eq!(bios.extended_rom_size, 0x10);
    }

    #[test]
    fn test_truncated_base_fields() {
        let raw = RawStructure::from_parts(0, 0x0000, vec![0x01, 0x02, 0x00, 0xE8, 0x03, 0x0F], vec![]);
        assert!(matches!(BiosInformation::decode(&raw), Err(SmbiosDecodeError::Truncated { offset: 0x0A, .. })));
    }

    #[test]
    fn test_decode_is_idempotent() {
        let raw = RawStructure::from_parts(0, 0x0000, base_formatted(), bios_strings());
        assert_eq!(BiosInformation::decode(&raw).unwrap(), BiosInformation::decode(&raw).unwrap());
    }
}
