//! SMBIOS Inventory Configuration
//!
//! ## Configuration Example
//!
//! ```rust
//! use patina_smbios_inventory::{
//!     config::{InventoryConfig, RecordKinds},
//!     RawStructure, SmbiosInventory, SmbiosVersion,
//! };
//!
//! // Only collect processors and memory devices.
//! let config = InventoryConfig { enabled_records: RecordKinds::PROCESSOR | RecordKinds::MEMORY_DEVICE };
//! let structures: Vec<RawStructure> = Vec::new();
//! let inventory = SmbiosInventory::with_config(SmbiosVersion::new(3, 3, 0), &structures, &config);
//! assert!(inventory.processors().is_empty());
//! ```
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use bitflags::bitflags;

use crate::structure::{
    SMBIOS_TYPE_BASEBOARD_INFORMATION, SMBIOS_TYPE_BIOS_INFORMATION, SMBIOS_TYPE_MEMORY_DEVICE,
    SMBIOS_TYPE_PROCESSOR_INFORMATION, SMBIOS_TYPE_SYSTEM_ENCLOSURE, SMBIOS_TYPE_SYSTEM_INFORMATION, SmbiosType,
};

bitflags! {
    /// Record kinds the inventory decodes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RecordKinds: u32 {
        const BIOS_INFORMATION = 1 << 0;
        const SYSTEM_INFORMATION = 1 << 1;
        const BASEBOARD_INFORMATION = 1 << 2;
        const SYSTEM_ENCLOSURE = 1 << 3;
        const PROCESSOR = 1 << 4;
        const MEMORY_DEVICE = 1 << 5;
    }
}

impl RecordKinds {
    /// Returns the kind that decodes `structure_type`, if the inventory models it.
    pub fn from_structure_type(structure_type: SmbiosType) -> Option<Self> {
        match structure_type {
            SMBIOS_TYPE_BIOS_INFORMATION => Some(Self::BIOS_INFORMATION),
            SMBIOS_TYPE_SYSTEM_INFORMATION => Some(Self::SYSTEM_INFORMATION),
            SMBIOS_TYPE_BASEBOARD_INFORMATION => Some(Self::BASEBOARD_INFORMATION),
            SMBIOS_TYPE_SYSTEM_ENCLOSURE => Some(Self::SYSTEM_ENCLOSURE),
            SMBIOS_TYPE_PROCESSOR_INFORMATION => Some(Self::PROCESSOR),
            SMBIOS_TYPE_MEMORY_DEVICE => Some(Self::MEMORY_DEVICE),
            _ => None,
        }
    }
}

/// Default: every modelled record kind is decoded.
pub const DEFAULT_ENABLED_RECORDS: RecordKinds = RecordKinds::all();

/// The configuration for an inventory pass.
#[derive(Debug, Clone, Copy)]
pub struct InventoryConfig {
    /// Record kinds to decode. Structures of other kinds are skipped like unrecognized types.
    pub enabled_records: RecordKinds,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { enabled_records: DEFAULT_ENABLED_RECORDS }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::structure::{SMBIOS_TYPE_END_OF_TABLE, SMBIOS_TYPE_INACTIVE};

    #[test]
    fn test_default_enables_everything() {
        let config = InventoryConfig::default();
        for structure_type in [0u8, 1, 2, 3, 4, 17] {
            let kind = RecordKinds::from_structure_type(structure_type).unwrap();
            assert!(config.enabled_records.contains(kind));
        }
    }

    #[test]
    fn test_unmodelled_types_have_no_kind() {
        assert_eq!(RecordKinds::from_structure_type(7), None);
        assert_eq!(RecordKinds::from_structure_type(SMBIOS_TYPE_INACTIVE), None);
        assert_eq!(RecordKinds::from_structure_type(SMBIOS_TYPE_END_OF_TABLE), None);
        assert_eq!(RecordKinds::from_structure_type(0x80), None);
    }
}
