//! Processor Information (Type 4).
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use alloc::{format, string::String, vec::Vec};

use bitfield::bitfield;

use crate::{
    codec::{StructureReader, expand_flags, resolve_overflow},
    error::SmbiosDecodeError,
    structure::{SMBIOS_TYPE_PROCESSOR_INFORMATION, SmbiosHandle, SmbiosType},
    tables::processor::{
        PROCESSOR_CHARACTERISTICS, PROCESSOR_CPU_STATUS, PROCESSOR_FAMILY, PROCESSOR_FAMILY_USE_FAMILY_2,
        PROCESSOR_TYPE, PROCESSOR_UPGRADE, PROCESSOR_VOLTAGE_CAPABILITY,
    },
};

use super::SmbiosRecord;

/// Count value that defers to the matching 16-bit count 2 field.
const COUNT_USE_COUNT_2: u8 = 0xFF;

bitfield! {
    /// Processor status byte (offset 18h)
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessorStatus(u8);
    impl Debug;
    /// CPU status, bits 2:0
    pub cpu_status, _: 2, 0;
    /// CPU socket populated
    pub socket_populated, _: 6;
}

impl ProcessorStatus {
    pub fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u8 {
        self.0
    }
}

bitfield! {
    /// Voltage byte (offset 11h)
    struct ProcessorVoltage(u8);
    legacy_capabilities, _: 3, 0;
    tenths_of_volt, _: 6, 0;
    current_voltage, _: 7;
}

/// Renders the voltage byte either as the current voltage or as the list of legacy supported voltages.
fn format_voltage(raw: u8) -> String {
    let voltage = ProcessorVoltage(raw);
    if voltage.current_voltage() {
        let tenths = voltage.tenths_of_volt();
        return format!("{}.{} V", tenths / 10, tenths % 10);
    }
    let supported = expand_flags(voltage.legacy_capabilities(), PROCESSOR_VOLTAGE_CAPABILITY);
    if supported.is_empty() { String::from("Unknown") } else { supported.join(", ") }
}

/// Renders the 8 byte processor ID as it appears in memory.
fn format_processor_id(id: [u8; 8]) -> String {
    id.iter().map(|byte| format!("{byte:02X}")).collect::<Vec<_>>().join(" ")
}

/// Processor Information (Type 4)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorInformation {
    pub handle: SmbiosHandle,
    pub socket_designation: String,
    pub processor_type: &'static str,
    /// Resolved processor family. Uses Processor Family 2 when the 8-bit code is FEh.
    pub processor_family: &'static str,
    pub processor_manufacturer: String,
    /// Processor ID bytes as uppercase hex pairs separated by spaces.
    pub processor_id: String,
    pub processor_version: String,
    pub voltage: String,
    /// External clock frequency in MHz.
    pub external_clock: u16,
    /// Maximum processor speed in MHz.
    pub max_speed: u16,
    /// Current processor speed in MHz.
    pub current_speed: u16,
    pub status: ProcessorStatus,
    pub cpu_status: &'static str,
    pub processor_upgrade: &'static str,
    pub l1_cache_handle: SmbiosHandle,
    pub l2_cache_handle: SmbiosHandle,
    pub l3_cache_handle: SmbiosHandle,
    pub serial_number: String,
    pub asset_tag: String,
    pub part_number: String,
    pub core_count: u16,
    pub core_enabled: u16,
    pub thread_count: u16,
    pub processor_characteristics: Vec<&'static str>,
    pub processor_family2: &'static str,
    pub core_count2: u16,
    pub core_enabled2: u16,
    pub thread_count2: u16,
}

impl ProcessorInformation {
    /// Returns true when the socket holds a processor.
    pub fn is_populated(&self) -> bool {
        self.status.socket_populated()
    }
}

impl SmbiosRecord for ProcessorInformation {
    const RECORD_TYPE: SmbiosType = SMBIOS_TYPE_PROCESSOR_INFORMATION;

    fn parse(reader: &StructureReader<'_>) -> Result<Self, SmbiosDecodeError> {
        let status = ProcessorStatus::from_raw(reader.u8(0x18)?);
        let mut record = Self {
            handle: reader.handle(),
            socket_designation: reader.string(0x04)?,
            processor_type: PROCESSOR_TYPE.label(reader.u8(0x05)?),
            processor_family: PROCESSOR_FAMILY.fallback(),
            processor_manufacturer: reader.string(0x07)?,
            processor_id: format_processor_id(reader.bytes::<8>(0x08)?),
            processor_version: reader.string(0x10)?,
            voltage: format_voltage(reader.u8(0x11)?),
            external_clock: reader.u16(0x12)?,
            max_speed: reader.u16(0x14)?,
            current_speed: reader.u16(0x16)?,
            status,
            cpu_status: PROCESSOR_CPU_STATUS.label(status.cpu_status()),
            processor_upgrade: PROCESSOR_UPGRADE.label(reader.u8(0x19)?),
            l1_cache_handle: 0,
            l2_cache_handle: 0,
            l3_cache_handle: 0,
            serial_number: String::new(),
            asset_tag: String::new(),
            part_number: String::new(),
            core_count: 0,
            core_enabled: 0,
            thread_count: 0,
            processor_characteristics: Vec::new(),
            processor_family2: PROCESSOR_FAMILY.fallback(),
            core_count2: 0,
            core_enabled2: 0,
            thread_count2: 0,
        };

        // 2.1+
        if reader.has_field(0x1A) {
            record.l1_cache_handle = reader.u16(0x1A)?;
            record.l2_cache_handle = reader.u16(0x1C)?;
            record.l3_cache_handle = reader.u16(0x1E)?;
        }

        // 2.3+
        if reader.has_field(0x20) {
            record.serial_number = reader.string(0x20)?;
            record.asset_tag = reader.string(0x21)?;
            record.part_number = reader.string(0x22)?;
        }

        // 2.6+
        let family2 = reader.optional(0x28, |r| r.u16(0x28))?;
        if let Some(family2) = family2 {
            record.processor_family2 = PROCESSOR_FAMILY.label(family2);
        }
        let family = reader.u8(0x06)?;
        record.processor_family = match family2 {
            Some(family2) if family == PROCESSOR_FAMILY_USE_FAMILY_2 => PROCESSOR_FAMILY.label(family2),
            _ => PROCESSOR_FAMILY.label(family),
        };

        // 3.0+
        let counts2 = reader.optional(0x2A, |r| Ok((r.u16(0x2A)?, r.u16(0x2C)?, r.u16(0x2E)?)))?;
        if let Some((core_count2, core_enabled2, thread_count2)) = counts2 {
            record.core_count2 = core_count2;
            record.core_enabled2 = core_enabled2;
            record.thread_count2 = thread_count2;
        }

        // 2.5+
        if reader.has_field(0x23) {
            record.core_count =
                resolve_overflow(reader.u8(0x23)?, COUNT_USE_COUNT_2, counts2.map(|c| c.0)) as u16;
            record.core_enabled =
                resolve_overflow(reader.u8(0x24)?, COUNT_USE_COUNT_2, counts2.map(|c| c.1)) as u16;
            record.thread_count =
                resolve_overflow(reader.u8(0x25)?, COUNT_USE_COUNT_2, counts2.map(|c| c.2)) as u16;
            record.processor_characteristics = expand_flags(reader.u16(0x26)?, PROCESSOR_CHARACTERISTICS);
        }

        Ok(record)
    }
}

impl core::fmt::Display for ProcessorStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let populated = if self.socket_populated() { "populated" } else { "unpopulated" };
        write!(f, "{} ({})", PROCESSOR_CPU_STATUS.label(self.cpu_status()), populated)
    }
}
