//! Baseboard (or Module) Information (Type 2).
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use alloc::{string::String, vec::Vec};

use crate::{
    codec::{StructureReader, expand_flags},
    error::SmbiosDecodeError,
    structure::{SMBIOS_TYPE_BASEBOARD_INFORMATION, SmbiosHandle, SmbiosType},
    tables::{BASEBOARD_FEATURE_FLAGS, BOARD_TYPE},
};

use super::SmbiosRecord;

/// Baseboard (or Module) Information (Type 2)
///
/// Only the number of contained object handles is reported; the handle list itself is not decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseboardInformation {
    pub handle: SmbiosHandle,
    pub manufacturer: String,
    pub product: String,
    pub version: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub feature_flags: Vec<&'static str>,
    pub location_in_chassis: String,
    pub chassis_handle: SmbiosHandle,
    pub board_type: &'static str,
    pub contained_object_handles: u8,
}

impl SmbiosRecord for BaseboardInformation {
    const RECORD_TYPE: SmbiosType = SMBIOS_TYPE_BASEBOARD_INFORMATION;

    fn parse(reader: &StructureReader<'_>) -> Result<Self, SmbiosDecodeError> {
        // Firmware commonly trims the structure after any field following the first four strings.
        Ok(Self {
            handle: reader.handle(),
            manufacturer: reader.string(0x04)?,
            product: reader.string(0x05)?,
            version: reader.string(0x06)?,
            serial_number: reader.string(0x07)?,
            asset_tag: reader.gated(0x08, |r| r.string(0x08))?,
            feature_flags: reader.gated(0x09, |r| Ok(expand_flags(r.u8(0x09)?, BASEBOARD_FEATURE_FLAGS)))?,
            location_in_chassis: reader.gated(0x0A, |r| r.string(0x0A))?,
            chassis_handle: reader.gated(0x0B, |r| r.u16(0x0B))?,
            board_type: reader
                .optional(0x0D, |r| r.u8(0x0D))?
                .map_or(BOARD_TYPE.fallback(), |code| BOARD_TYPE.label(code)),
            contained_object_handles: reader.gated(0x0E, |r| r.u8(0x0E))?,
        })
    }
}
