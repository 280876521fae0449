//! Raw SMBIOS structure input.
//!
//! A [`RawStructure`] is the already-delimited form of one structure from the SMBIOS structure table: the 4 byte
//! header, the formatted area that follows it, and the string-set that trails the formatted area. Locating the
//! table and splitting it into structures is the job of the table source, not of this crate.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use alloc::{string::String, vec::Vec};
use core::fmt;

/// Types 0 through 127 (7Fh) are reserved for and defined by the SMBIOS specification. Types 128 through 255
/// (80h to FFh) are available for system- and OEM-specific information.
pub type SmbiosType = u8;

/// A unique 16-bit number identifying a structure within the table. Handles are reported as-is and are never
/// resolved against other structures.
pub type SmbiosHandle = u16;

/// Size of the structure header (type, length, handle) in bytes.
pub const SMBIOS_STRUCTURE_HEADER_LEN: usize = 4;

/// BIOS Information (Type 0)
pub const SMBIOS_TYPE_BIOS_INFORMATION: SmbiosType = 0;
/// System Information (Type 1)
pub const SMBIOS_TYPE_SYSTEM_INFORMATION: SmbiosType = 1;
/// Baseboard Information (Type 2)
pub const SMBIOS_TYPE_BASEBOARD_INFORMATION: SmbiosType = 2;
/// System Enclosure (Type 3)
pub const SMBIOS_TYPE_SYSTEM_ENCLOSURE: SmbiosType = 3;
/// Processor Information (Type 4)
pub const SMBIOS_TYPE_PROCESSOR_INFORMATION: SmbiosType = 4;
/// Memory Device (Type 17)
pub const SMBIOS_TYPE_MEMORY_DEVICE: SmbiosType = 17;
/// Inactive (Type 126). Software should bypass it like any unrecognized type.
pub const SMBIOS_TYPE_INACTIVE: SmbiosType = 126;
/// End-of-table (Type 127)
pub const SMBIOS_TYPE_END_OF_TABLE: SmbiosType = 127;

/// SMBIOS structure header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SmbiosStructureHeader {
    /// Structure type
    pub structure_type: SmbiosType,
    /// Declared length of the formatted area, header included
    pub length: u16,
    /// Structure handle
    pub handle: SmbiosHandle,
}

impl SmbiosStructureHeader {
    pub fn new(structure_type: SmbiosType, length: u16, handle: SmbiosHandle) -> Self {
        Self { structure_type, length, handle }
    }
}

/// One structure of the SMBIOS table, split into its header, formatted area and string-set.
///
/// `formatted` holds the bytes that follow the header, so a field documented at structure offset `o` lives at
/// `formatted[o - 4]`. Strings are referenced from the formatted area by 1-based string number; a string number of
/// zero means the field references no string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawStructure {
    header: SmbiosStructureHeader,
    formatted: Vec<u8>,
    strings: Vec<String>,
}

impl RawStructure {
    /// Creates a structure from an explicit header.
    ///
    /// The declared length is taken from the header as-is so that the decoders see exactly what firmware reported.
    pub fn new(header: SmbiosStructureHeader, formatted: Vec<u8>, strings: Vec<String>) -> Self {
        if header.length as usize != formatted.len() + SMBIOS_STRUCTURE_HEADER_LEN {
            log::debug!(
                "SMBIOS: structure {:#06x} (type {}) declares length {} but carries {} formatted bytes",
                header.handle,
                header.structure_type,
                header.length,
                formatted.len()
            );
        }
        Self { header, formatted, strings }
    }

    /// Creates a structure whose declared length matches the formatted area.
    ///
    /// A formatted area too long for the 16-bit length field saturates the declared length at `u16::MAX`.
    pub fn from_parts(
        structure_type: SmbiosType,
        handle: SmbiosHandle,
        formatted: Vec<u8>,
        strings: Vec<String>,
    ) -> Self {
        let length = u16::try_from(formatted.len() + SMBIOS_STRUCTURE_HEADER_LEN).unwrap_or_else(|_| {
            log::debug!(
                "SMBIOS: structure {:#06x} (type {}) carries {} formatted bytes, declared length saturated",
                handle,
                structure_type,
                formatted.len()
            );
            u16::MAX
        });
        Self { header: SmbiosStructureHeader::new(structure_type, length, handle), formatted, strings }
    }

    pub fn header(&self) -> &SmbiosStructureHeader {
        &self.header
    }

    pub fn structure_type(&self) -> SmbiosType {
        self.header.structure_type
    }

    pub fn declared_length(&self) -> u16 {
        self.header.length
    }

    pub fn handle(&self) -> SmbiosHandle {
        self.header.handle
    }

    /// The formatted area, header excluded.
    pub fn formatted(&self) -> &[u8] {
        &self.formatted
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// Returns the string referenced by a 1-based string number.
    pub fn string(&self, number: u8) -> Option<&str> {
        match number {
            0 => None,
            n => self.strings.get(n as usize - 1).map(String::as_str),
        }
    }
}

/// SMBIOS specification version reported by the table entry point.
///
/// Informational only; field presence is always decided from each structure's declared length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SmbiosVersion {
    pub major: u8,
    pub minor: u8,
    pub revision: u8,
}

impl SmbiosVersion {
    pub const fn new(major: u8, minor: u8, revision: u8) -> Self {
        Self { major, minor, revision }
    }
}

impl fmt::Display for SmbiosVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}
