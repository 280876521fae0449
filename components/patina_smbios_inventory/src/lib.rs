//! SMBIOS Inventory
//!
//! Decodes the structures of a System Management BIOS (SMBIOS) table into typed hardware inventory records, as
//! described in the DMTF SMBIOS Reference Specification (DSP0134).
//!
//! The table source hands over structures already split into header, formatted area and string-set
//! ([`RawStructure`]). Each supported structure type has a decoder implementing [`records::SmbiosRecord`]:
//!
//! | Type | Record |
//! |------|--------|
//! | 0    | [`BiosInformation`] |
//! | 1    | [`SystemInformation`] |
//! | 2    | [`BaseboardInformation`] |
//! | 3    | [`SystemEnclosure`] |
//! | 4    | [`ProcessorInformation`] |
//! | 17   | [`MemoryDevice`] |
//!
//! [`SmbiosInventory`] runs the decoders over a whole table and collects per-structure failures without aborting.
//!
//! ## Example
//!
//! ```rust
//! use patina_smbios_inventory::{RawStructure, SmbiosInventory, SmbiosVersion};
//!
//! let chassis = RawStructure::from_parts(3, 0x0003, vec![0x01, 0x17, 0x00, 0x00, 0x00], vec!["Contoso".into()]);
//! let inventory = SmbiosInventory::from_structures(SmbiosVersion::new(3, 3, 0), [&chassis]);
//!
//! assert_eq!(inventory.enclosures()[0].chassis_type, "Rack Mount Chassis");
//! ```
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod codec;
pub mod config;
pub mod error;
pub mod inventory;
pub mod records;
pub mod structure;
pub mod tables;

pub use error::SmbiosDecodeError;
pub use inventory::{SmbiosInventory, StructureFailure};
pub use records::{
    BaseboardInformation, BiosInformation, MemoryDevice, ProcessorInformation, SmbiosRecord, SystemEnclosure,
    SystemInformation,
};
pub use structure::{RawStructure, SmbiosHandle, SmbiosStructureHeader, SmbiosType, SmbiosVersion};
