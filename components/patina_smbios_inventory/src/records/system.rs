//! System Information (Type 1).
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use alloc::string::{String, ToString};

use uuid::Uuid;

use crate::{
    codec::StructureReader,
    error::SmbiosDecodeError,
    structure::{SMBIOS_TYPE_SYSTEM_INFORMATION, SmbiosHandle, SmbiosType},
    tables::WAKE_UP_TYPE,
};

use super::SmbiosRecord;

/// System Information (Type 1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInformation {
    pub handle: SmbiosHandle,
    pub manufacturer: String,
    pub product_name: String,
    pub version: String,
    pub serial_number: String,
    /// Lowercase hyphenated UUID (2.1+), or empty when the structure predates it.
    pub uuid: String,
    pub wake_up_type: &'static str,
    pub sku_number: String,
    pub family: String,
}

/// Formats the 16 byte UUID field.
///
/// The first three groups are stored little-endian and the last two in wire order, which is how RFC 4122 field
/// encoding maps onto the "mixed endian" layout firmware uses.
fn format_uuid(bytes: [u8; 16]) -> String {
    Uuid::from_bytes_le(bytes).hyphenated().to_string()
}

impl SmbiosRecord for SystemInformation {
    const RECORD_TYPE: SmbiosType = SMBIOS_TYPE_SYSTEM_INFORMATION;

    fn parse(reader: &StructureReader<'_>) -> Result<Self, SmbiosDecodeError> {
        let mut record = Self {
            handle: reader.handle(),
            manufacturer: reader.string(0x04)?,
            product_name: reader.string(0x05)?,
            version: reader.string(0x06)?,
            serial_number: reader.string(0x07)?,
            uuid: String::new(),
            wake_up_type: WAKE_UP_TYPE.fallback(),
            sku_number: String::new(),
            family: String::new(),
        };

        // 2.1+
        if reader.has_field(0x08) {
            record.uuid = format_uuid(reader.bytes::<16>(0x08)?);
            record.wake_up_type = WAKE_UP_TYPE.label(reader.u8(0x18)?);
        }

        // 2.4+
        if reader.has_field(0x19) {
            record.sku_number = reader.string(0x19)?;
            record.family = reader.string(0x1A)?;
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::structure::RawStructure;
    use alloc::{vec, vec::Vec};

    const UUID_BYTES: [u8; 16] =
        [0x04, 0x03, 0x02, 0x01, 0x06, 0x05, 0x08, 0x07, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10];

    fn strings() -> Vec<String> {
        ["Contoso", "Surface Lab", "Rev B", "SN-0001", "SKU-42", "Lab Systems"].iter().map(|s| s.to_string()).collect()
    }

    fn formatted_v24() -> Vec<u8> {
        let mut formatted = vec![0x01, 0x02, 0x03, 0x04];
        formatted.extend_from_slice(&UUID_BYTES);
        formatted.extend_from_slice(&[0x06, 0x05, 0x06]);
        formatted
    }

    #[test]
    fn test_uuid_mixed_endian_layout() {
        assert_eq!(format_uuid(UUID_BYTES), "01020304-0506-0708-090a-0b0c0d0e0f10");
    }

    #[test]
    fn test_full_structure() {
        let raw = RawStructure::from_parts(1, 0x0001, formatted_v24(), strings());
        assert_eq!(raw.declared_length(), 0x1B);
        let system = SystemInformation::decode(&raw).unwrap();
        assert_eq!(system.handle, 0x0001);
        assert_eq!(system.manufacturer, "Contoso");
        assert_eq!(system.product_name, "Surface Lab");
        assert_eq!(system.version, "Rev B");
        assert_eq!(system.serial_number, "SN-0001");
        assert_eq!(system.uuid, "01020304-0506-0708-090a-0b0c0d0e0f10");
        assert_eq!(system.wake_up_type, "Power Switch");
        assert_eq!(system.sku_number, "SKU-42");
        assert_eq!(system.family, "Lab Systems");
    }

    #[test]
    fn test_version_2_0_structure() {
        let raw = RawStructure::from_parts(1, 0x0001, vec![0x01, 0x02, 0x00, 0x00], strings());
        let system = SystemInformation::decode(&raw).unwrap();
        assert_eq!(system.version, "");
        assert_eq!(system.uuid, "");
        assert_eq!(system.wake_up_type, "Unknown");
        assert_eq!(system.sku_number, "");
    }

    #[test]
    fn test_unknown_wake_up_type() {
        let mut formatted = formatted_v24();
        formatted[0x18 - 4] = 0x42;
        let raw = RawStructure::from_parts(1, 0x0001, formatted, strings());
        assert_eq!(SystemInformation::decode(&raw).unwrap().wake_up_type, "Unknown");
    }

    #[test]
    fn test_truncated_uuid() {
        let mut formatted = formatted_v24();
        formatted.truncate(12);
        let raw = RawStructure::from_parts(1, 0x0001, formatted, strings());
        assert!(matches!(
            SystemInformation::decode(&raw),
            Err(SmbiosDecodeError::Truncated { offset: 0x08, width: 16, .. })
        ));
    }
}
