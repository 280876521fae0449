//! Memory Device (Type 17).
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
    structure::{SMBIOS_TYPE_MEMORY_DEVICE, SmbiosHandle, SmbiosType},
    tables::memory::{
        MEMORY_FORM_FACTOR, MEMORY_OPERATING_MODE_CAPABILITY, MEMORY_TECHNOLOGY, MEMORY_TYPE, MEMORY_TYPE_DETAIL,
    },
};

use super::SmbiosRecord;

/// Size value that defers to the Extended Size field.
const SIZE_USE_EXTENDED: u16 = 0x7FFF;
/// Size value reported when the size is unknown.
const SIZE_UNKNOWN: u16 = 0xFFFF;
/// Bit 15 of Size selects KiB (set) or MiB (clear) granularity.
const SIZE_GRANULARITY_KIB: u16 = 0x8000;
const SIZE_VALUE_MASK: u16 = 0x7FFF;
/// Bit 31 of Extended Size is reserved.
const EXTENDED_SIZE_MASK: u32 = 0x7FFF_FFFF;

/// Resolves the Size and Extended Size fields to KiB.
///
/// The granularity bit is taken from the 16-bit Size field even when the value itself comes from Extended Size.
fn resolve_size_kib(size: u16, extended_size: Option<u32>) -> u64 {
    if size == SIZE_UNKNOWN {
        return 0;
    }
    let value = resolve_overflow(size, SIZE_USE_EXTENDED, extended_size.map(|extended| extended & EXTENDED_SIZE_MASK));
    if size & SIZE_GRANULARITY_KIB != 0 { value & SIZE_VALUE_MASK as u64 } else { value * 1024 }
}

/// Memory Device (Type 17)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDevice {
    pub handle: SmbiosHandle,
    pub physical_memory_array_handle: SmbiosHandle,
    /// FFFEh when not provided, FFFFh when no error was detected.
    pub memory_error_information_handle: SmbiosHandle,
    /// Total width in bits, including any check or error-correction bits.
    pub total_width: u16,
    /// Data width in bits.
    pub data_width: u16,
    /// Raw Size field. Zero means no module is installed and FFFFh means the size is unknown.
    pub size: u16,
    /// Resolved module size in KiB.
    pub size_kib: u64,
    pub form_factor: &'static str,
    pub device_set: u8,
    pub device_locator: String,
    pub bank_locator: String,
    pub memory_type: &'static str,
    pub type_detail: Vec<&'static str>,
    /// Maximum capable speed in MT/s.
    pub speed: u16,
    pub manufacturer: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub part_number: String,
    pub attributes: u8,
    /// Raw Extended Size field, in MiB.
    pub extended_size: u32,
    /// Configured memory speed in MT/s.
    pub configured_memory_speed: u16,
    /// Voltages in millivolts.
    pub minimum_voltage: u16,
    pub maximum_voltage: u16,
    pub configured_voltage: u16,
    pub memory_technology: &'static str,
    pub memory_operating_mode_capability: Vec<&'static str>,
    pub firmware_version: String,
    pub module_manufacturer_id: u16,
    pub module_product_id: u16,
    pub memory_subsystem_controller_manufacturer_id: u16,
    pub memory_subsystem_controller_product_id: u16,
    /// Region sizes in bytes.
    pub non_volatile_size: u64,
    pub volatile_size: u64,
    pub cache_size: u64,
    pub logical_size: u64,
    pub extended_speed: u32,
    pub extended_configured_memory_speed: u32,
}

impl MemoryDevice {
    pub fn is_installed(&self) -> bool {
        self.size != 0
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_kib * 1024
    }

    /// Rank from bits 3:0 of Attributes, zero when unknown.
    pub fn rank(&self) -> u8 {
        self.attributes & 0x0F
    }
}

impl SmbiosRecord for MemoryDevice {
    const RECORD_TYPE: SmbiosType = SMBIOS_TYPE_MEMORY_DEVICE;

    fn parse(reader: &StructureReader<'_>) -> Result<Self, SmbiosDecodeError> {
        let mut record = Self {
            handle: reader.handle(),
            physical_memory_array_handle: reader.u16(0x04)?,
            memory_error_information_handle: reader.u16(0x06)?,
            total_width: reader.u16(0x08)?,
            data_width: reader.u16(0x0A)?,
            size: reader.u16(0x0C)?,
            size_kib: 0,
            form_factor: MEMORY_FORM_FACTOR.label(reader.u8(0x0E)?),
            device_set: reader.u8(0x0F)?,
            device_locator: reader.string(0x10)?,
            bank_locator: reader.string(0x11)?,
            memory_type: MEMORY_TYPE.label(reader.u8(0x12)?),
            type_detail: expand_flags(reader.u16(0x13)?, MEMORY_TYPE_DETAIL),
            speed: 0,
            manufacturer: String::new(),
            serial_number: String::new(),
            asset_tag: String::new(),
            part_number: String::new(),
            attributes: 0,
            extended_size: 0,
            configured_memory_speed: 0,
            minimum_voltage: 0,
            maximum_voltage: 0,
            configured_voltage: 0,
            memory_technology: MEMORY_TECHNOLOGY.fallback(),
            memory_operating_mode_capability: Vec::new(),
            firmware_version: String::new(),
            module_manufacturer_id: 0,
            module_product_id: 0,
            memory_subsystem_controller_manufacturer_id: 0,
            memory_subsystem_controller_product_id: 0,
            non_volatile_size: 0,
            volatile_size: 0,
            cache_size: 0,
            logical_size: 0,
            extended_speed: 0,
            extended_configured_memory_speed: 0,
        };

        // 2.3+
        if reader.has_field(0x15) {
            record.speed = reader.u16(0x15)?;
            record.manufacturer = reader.string(0x17)?;
            record.serial_number = reader.string(0x18)?;
            record.asset_tag = reader.string(0x19)?;
            record.part_number = reader.string(0x1A)?;
        }

        // 2.6+
        record.attributes = reader.gated(0x1B, |r| r.u8(0x1B))?;

        // 2.7+
        let extended_size = reader.optional(0x1C, |r| r.u32(0x1C))?;
        if let Some(extended_size) = extended_size {
            record.extended_size = extended_size;
            record.configured_memory_speed = reader.u16(0x20)?;
        }
        record.size_kib = resolve_size_kib(record.size, extended_size);

        // 2.8+
        if reader.has_field(0x22) {
            record.minimum_voltage = reader.u16(0x22)?;
            record.maximum_voltage = reader.u16(0x24)?;
            record.configured_voltage = reader.u16(0x26)?;
        }

        // 3.2+
        if reader.has_field(0x28) {
            record.memory_technology = MEMORY_TECHNOLOGY.label(reader.u8(0x28)?);
            record.memory_operating_mode_capability =
                expand_flags(reader.u16(0x29)?, MEMORY_OPERATING_MODE_CAPABILITY);
            record.firmware_version = reader.string(0x2B)?;
            record.module_manufacturer_id = reader.u16(0x2C)?;
            record.module_product_id = reader.u16(0x2E)?;
            record.memory_subsystem_controller_manufacturer_id = reader.u16(0x30)?;
            record.memory_subsystem_controller_product_id = reader.u16(0x32)?;
            record.non_volatile_size = reader.u64(0x34)?;
            record.volatile_size = reader.u64(0x3C)?;
            record.cache_size = reader.u64(0x44)?;
            record.logical_size = reader.u64(0x4C)?;
        }

        // 3.3+
        if reader.has_field(0x54) {
            record.extended_speed = reader.u32(0x54)?;
            record.extended_configured_memory_speed = reader.u32(0x58)?;
        }

        Ok(record)
    }
}
