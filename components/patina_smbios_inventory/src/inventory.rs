//! Inventory aggregation.
//!
//! [`SmbiosInventory`] dispatches each raw structure to the decoder for its type and collects the results. A
//! structure that fails to decode is recorded in [`SmbiosInventory::failures`] and never stops the pass; structure
//! types without a decoder are skipped.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use alloc::vec::Vec;
use core::fmt;

use crate::{
    config::{InventoryConfig, RecordKinds},
    error::SmbiosDecodeError,
    records::{
        BaseboardInformation, BiosInformation, MemoryDevice, ProcessorInformation, SmbiosRecord, SystemEnclosure,
        SystemInformation,
    },
    structure::{RawStructure, SmbiosHandle, SmbiosType, SmbiosVersion},
};

/// A structure that could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureFailure {
    pub handle: SmbiosHandle,
    pub structure_type: SmbiosType,
    pub error: SmbiosDecodeError,
}

impl fmt::Display for StructureFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {} structure {:#06x}: {}", self.structure_type, self.handle, self.error)
    }
}

/// Decoded snapshot of one SMBIOS table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmbiosInventory {
    version: SmbiosVersion,
    bios_information: Option<BiosInformation>,
    system_information: Option<SystemInformation>,
    baseboards: Vec<BaseboardInformation>,
    enclosures: Vec<SystemEnclosure>,
    processors: Vec<ProcessorInformation>,
    memory_devices: Vec<MemoryDevice>,
    failures: Vec<StructureFailure>,
}

impl SmbiosInventory {
    /// Builds an inventory from every structure the crate can decode.
    pub fn from_structures<'a, I>(version: SmbiosVersion, structures: I) -> Self
    where
        I: IntoIterator<Item = &'a RawStructure>,
    {
        Self::with_config(version, structures, &InventoryConfig::default())
    }

    /// Builds an inventory from the structures whose kind is enabled in `config`.
    pub fn with_config<'a, I>(version: SmbiosVersion, structures: I, config: &InventoryConfig) -> Self
    where
        I: IntoIterator<Item = &'a RawStructure>,
    {
        let mut inventory = Self { version, ..Default::default() };

        for structure in structures {
            let Some(kind) = RecordKinds::from_structure_type(structure.structure_type()) else {
                log::debug!(
                    "SMBIOS: skipping unrecognized type {} structure {:#06x}",
                    structure.structure_type(),
                    structure.handle()
                );
                continue;
            };
            if !config.enabled_records.contains(kind) {
                log::debug!(
                    "SMBIOS: skipping disabled type {} structure {:#06x}",
                    structure.structure_type(),
                    structure.handle()
                );
                continue;
            }
            inventory.add(kind, structure);
        }

        log::info!(
            "SMBIOS {}: {} baseboard(s), {} enclosure(s), {} processor(s), {} memory device(s), {} failure(s)",
            inventory.version,
            inventory.baseboards.len(),
            inventory.enclosures.len(),
            inventory.processors.len(),
            inventory.memory_devices.len(),
            inventory.failures.len()
        );

        inventory
    }

    fn add(&mut self, kind: RecordKinds, structure: &RawStructure) {
        if kind == RecordKinds::BIOS_INFORMATION {
            if let Some(bios) = self.decode::<BiosInformation>(structure) {
                Self::set_singleton(&mut self.bios_information, bios, structure);
            }
        } else if kind == RecordKinds::SYSTEM_INFORMATION {
            if let Some(system) = self.decode::<SystemInformation>(structure) {
                Self::set_singleton(&mut self.system_information, system, structure);
            }
        } else if kind == RecordKinds::BASEBOARD_INFORMATION {
            if let Some(baseboard) = self.decode::<BaseboardInformation>(structure) {
                self.baseboards.push(baseboard);
            }
        } else if kind == RecordKinds::SYSTEM_ENCLOSURE {
            if let Some(enclosure) = self.decode::<SystemEnclosure>(structure) {
                self.enclosures.push(enclosure);
            }
        } else if kind == RecordKinds::PROCESSOR {
            if let Some(processor) = self.decode::<ProcessorInformation>(structure) {
                self.processors.push(processor);
            }
        } else if kind == RecordKinds::MEMORY_DEVICE {
            if let Some(device) = self.decode::<MemoryDevice>(structure) {
                self.memory_devices.push(device);
            }
        }
    }

    fn decode<T: SmbiosRecord>(&mut self, structure: &RawStructure) -> Option<T> {
        match T::decode(structure) {
            Ok(record) => Some(record),
            Err(error) => {
                let failure =
                    StructureFailure { handle: structure.handle(), structure_type: structure.structure_type(), error };
                log::warn!("SMBIOS: failed to decode {failure}");
                self.failures.push(failure);
                None
            }
        }
    }

    fn set_singleton<T>(slot: &mut Option<T>, record: T, structure: &RawStructure) {
        if slot.is_some() {
            log::warn!(
                "SMBIOS: ignoring duplicate type {} structure {:#06x}",
                structure.structure_type(),
                structure.handle()
            );
            return;
        }
        *slot = Some(record);
    }

    /// SMBIOS version reported by the entry point.
    pub fn version(&self) -> SmbiosVersion {
        self.version
    }

    pub fn bios_information(&self) -> Option<&BiosInformation> {
        self.bios_information.as_ref()
    }

    pub fn system_information(&self) -> Option<&SystemInformation> {
        self.system_information.as_ref()
    }

    pub fn baseboards(&self) -> &[BaseboardInformation] {
        &self.baseboards
    }

    pub fn enclosures(&self) -> &[SystemEnclosure] {
        &self.enclosures
    }

    pub fn processors(&self) -> &[ProcessorInformation] {
        &self.processors
    }

    pub fn memory_devices(&self) -> &[MemoryDevice] {
        &self.memory_devices
    }

    /// Structures that failed to decode, in table order.
    pub fn failures(&self) -> &[StructureFailure] {
        &self.failures
    }

    /// Sum of the sizes of all installed memory devices, in KiB.
    pub fn total_memory_kib(&self) -> u64 {
        self.memory_devices.iter().filter(|device| device.is_installed()).map(|device| device.size_kib).sum()
    }
}
