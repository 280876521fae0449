//! System Enclosure or Chassis (Type 3).
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use alloc::string::String;

use crate::{
    codec::StructureReader,
    error::SmbiosDecodeError,
    structure::{SMBIOS_TYPE_SYSTEM_ENCLOSURE, SmbiosHandle, SmbiosType},
    tables::{CHASSIS_SECURITY_STATUS, CHASSIS_STATE, CHASSIS_TYPE},
};

use super::SmbiosRecord;

const CHASSIS_LOCK_PRESENT: u8 = 0x80;
const CONTAINED_ELEMENTS_OFFSET: usize = 0x15;

/// System Enclosure or Chassis (Type 3)
///
/// Contained element records are not decoded; only their count and record length are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemEnclosure {
    pub handle: SmbiosHandle,
    pub manufacturer: String,
    /// Chassis type label. The type byte is looked up as-is, so a set lock bit resolves to the fallback.
    pub chassis_type: &'static str,
    pub chassis_lock_present: bool,
    pub version: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub boot_up_state: &'static str,
    pub power_supply_state: &'static str,
    pub thermal_state: &'static str,
    pub security_status: &'static str,
    pub oem_defined: u32,
    /// Height in rack units (1U = 1.75 in). Zero when unspecified.
    pub height: u8,
    pub number_of_power_cords: u8,
    pub contained_element_count: u8,
    pub contained_element_record_length: u8,
    pub sku_number: String,
}

impl SmbiosRecord for SystemEnclosure {
    const RECORD_TYPE: SmbiosType = SMBIOS_TYPE_SYSTEM_ENCLOSURE;

    fn parse(reader: &StructureReader<'_>) -> Result<Self, SmbiosDecodeError> {
        let chassis_type = reader.u8(0x05)?;
        let mut record = Self {
            handle: reader.handle(),
            manufacturer: reader.string(0x04)?,
            chassis_type: CHASSIS_TYPE.label(chassis_type),
            chassis_lock_present: chassis_type & CHASSIS_LOCK_PRESENT != 0,
            version: reader.string(0x06)?,
            serial_number: reader.string(0x07)?,
            asset_tag: reader.string(0x08)?,
            boot_up_state: CHASSIS_STATE.fallback(),
            power_supply_state: CHASSIS_STATE.fallback(),
            thermal_state: CHASSIS_STATE.fallback(),
            security_status: CHASSIS_SECURITY_STATUS.fallback(),
            oem_defined: 0,
            height: 0,
            number_of_power_cords: 0,
            contained_element_count: 0,
            contained_element_record_length: 0,
            sku_number: String::new(),
        };

        // 2.1+
        if reader.has_field(0x09) {
            record.boot_up_state = CHASSIS_STATE.label(reader.u8(0x09)?);
            record.power_supply_state = CHASSIS_STATE.label(reader.u8(0x0A)?);
            record.thermal_state = CHASSIS_STATE.label(reader.u8(0x0B)?);
            record.security_status = CHASSIS_SECURITY_STATUS.label(reader.u8(0x0C)?);
        }

        // 2.3+
        if reader.has_field(0x0D) {
            record.oem_defined = reader.u32(0x0D)?;
            record.height = reader.u8(0x11)?;
            record.number_of_power_cords = reader.u8(0x12)?;
            record.contained_element_count = reader.u8(0x13)?;
            record.contained_element_record_length = reader.u8(0x14)?;
        }

        // 2.7+, located after the contained element records.
        let sku_offset = CONTAINED_ELEMENTS_OFFSET
            + record.contained_element_count as usize * record.contained_element_record_length as usize;
        record.sku_number = reader.gated(sku_offset, |r| r.string(sku_offset))?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::structure::RawStructure;
    use alloc::{string::ToString, vec, vec::Vec};

    fn strings() -> Vec<String> {
        ["Contoso", "Chassis 2", "CSN-5", "Tag 12", "CH-SKU"].iter().map(|s| s.to_string()).collect()
    }

    fn formatted(chassis_type: u8) -> Vec<u8> {
        vec![
            0x01, chassis_type, 0x02, 0x03, 0x04, // 2.0
            0x03, 0x03, 0x04, 0x03, // 2.1: safe, safe, warning, none
            0x78, 0x56, 0x34, 0x12, // OEM defined
            0x02, 0x01, // height, power cords
            0x02, 0x03, // two contained elements of three bytes
            0x91, 0x01, 0x02, 0x03, 0x01, 0x01, // contained elements
            0x05, // SKU
        ]
    }

    #[test]
    fn test_full_structure() {
        let raw = RawStructure::from_parts(3, 0x0003, formatted(0x17), strings());
        let chassis = SystemEnclosure::decode(&raw).unwrap();
        assert_eq!(chassis.manufacturer, "Contoso");
        assert_eq!(chassis.chassis_type, "Rack Mount Chassis");
        assert!(!chassis.chassis_lock_present);
        assert_eq!(chassis.version, "Chassis 2");
        assert_eq!(chassis.serial_number, "CSN-5");
        assert_eq!(chassis.asset_tag, "Tag 12");
        assert_eq!(chassis.boot_up_state, "Safe");
        assert_eq!(chassis.power_supply_state, "Safe");
        assert_eq!(chassis.thermal_state, "Warning");
        assert_eq!(chassis.security_status, "None");
        assert_eq!(chassis.oem_defined, 0x1234_5678);
        assert_eq!(chassis.height, 2);
        assert_eq!(chassis.number_of_power_cords, 1);
        assert_eq!(chassis.contained_element_count, 2);
        assert_eq!(chassis.contained_element_record_length, 3);
        assert_eq!(chassis.sku_number, "CH-SKU");
    }

    #[test]
    fn test_out_of_range_chassis_type() {
        for code in [0x00u8, 0x25, 0x83, 0xFF] {
            let raw = RawStructure::from_parts(3, 0x0003, formatted(code), strings());
            assert_eq!(SystemEnclosure::decode(&raw).unwrap().chassis_type, "Unknown", "code {code:#04x}");
        }
        let raw = RawStructure::from_parts(3, 0x0003, formatted(0x83), strings());
        assert!(SystemEnclosure::decode(&raw).unwrap().chassis_lock_present);
    }

    #[test]
    fn test_version_2_0_structure() {
        let mut formatted = formatted(0x03);
        formatted.truncate(5);
        let raw = RawStructure::from_parts(3, 0x0003, formatted, strings());
        let chassis = SystemEnclosure::decode(&raw).unwrap();
        assert_eq!(chassis.chassis_type, "Desktop");
        assert_eq!(chassis.boot_up_state, "Unknown");
        assert_eq!(chassis.security_status, "Unknown");
        assert_eq!(chassis.oem_defined, 0);
        assert_eq!(chassis.sku_number, "");
    }

    #[test]
    fn test_sku_absent_without_2_7_fields() {
        let mut formatted = formatted(0x03);
        formatted.truncate(formatted.len() - 1);
        let raw = RawStructure::from_parts(3, 0x0003, formatted, strings());
        let chassis = SystemEnclosure::decode(&raw).unwrap();
        assert_eq!(chassis.contained_element_count, 2);
        assert_eq!(chassis.sku_number, "");
    }
}
