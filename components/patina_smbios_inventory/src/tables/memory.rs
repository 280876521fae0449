//! Memory Device (Type 17) tables.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use super::{CodeTable, FlagTable};

/// Memory Device - Form Factor (7.18.1)
pub static MEMORY_FORM_FACTOR: CodeTable = CodeTable::dense(
    0x01,
    &[
        "Other",
        "Unknown",
        "SIMM",
        "SIP",
        "Chip",
        "DIP",
        "ZIP",
        "Proprietary Card",
        "DIMM",
        "TSOP",
        "Row Of Chips",
        "RIMM",
        "SODIMM",
        "SRIMM",
        "FB-DIMM",
        "Die",
    ],
    "Unknown",
);

/// Memory Device - Type (7.18.2)
pub static MEMORY_TYPE: CodeTable = CodeTable::dense(
    0x01,
    &[
        "Other",
        "Unknown",
        "DRAM",
        "EDRAM",
        "VRAM",
        "SRAM",
        "RAM",
        "ROM",
        "Flash",
        "EEPROM",
        "FEPROM",
        "EPROM",
        "CDRAM",
        "3DRAM",
        "SDRAM",
        "SGRAM",
        "RDRAM",
        "DDR",
        "DDR2",
        "DDR2 FB-DIMM",
        "Reserved",
        "Reserved",
        "Reserved",
        "DDR3",
        "FBD2",
        "DDR4",
        "LPDDR",
        "LPDDR2",
        "LPDDR3",
        "LPDDR4",
        "Logical non-volatile device",
        "HBM",
        "HBM2",
        "DDR5",
        "LPDDR5",
        "HBM3",
    ],
    "Unknown",
);

/// Memory Device - Type Detail (7.18.3). Bit 0 is reserved.
pub static MEMORY_TYPE_DETAIL: &FlagTable = &[
    (1, "Other"),
    (2, "Unknown"),
    (3, "Fast-paged"),
    (4, "Static Column"),
    (5, "Pseudo-static"),
    (6, "RAMBus"),
    (7, "Synchronous"),
    (8, "CMOS"),
    (9, "EDO"),
    (10, "Window DRAM"),
    (11, "Cache DRAM"),
    (12, "Non-Volatile"),
    (13, "Registered (Buffered)"),
    (14, "Unbuffered (Unregistered)"),
    (15, "LRDIMM"),
];

/// Memory Device - Memory Technology (7.18.6)
pub static MEMORY_TECHNOLOGY: CodeTable = CodeTable::dense(
    0x01,
    &["Other", "Unknown", "DRAM", "NVDIMM-N", "NVDIMM-F", "NVDIMM-P", "Intel persistent memory"],
    "Unknown",
);

/// Memory Device - Memory Operating Mode Capability (7.18.7). Bit 0 is reserved.
pub static MEMORY_OPERATING_MODE_CAPABILITY: &FlagTable = &[
    (1, "Other"),
    (2, "Unknown"),
    (3, "Volatile memory"),
    (4, "Byte-accessible persistent memory"),
    (5, "Block-accessible persistent memory"),
];

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_memory_type_codes() {
        assert_eq!(MEMORY_TYPE.label(0x1Au8), "DDR4");
        assert_eq!(MEMORY_TYPE.label(0x22u8), "DDR5");
        assert_eq!(MEMORY_TYPE.label(0x00u8), "Unknown");
        // Out of range codes must not index past the table.
        assert_eq!(MEMORY_TYPE.label(0x25u8), "Unknown");
        assert_eq!(MEMORY_TYPE.label(0xFFu8), "Unknown");
    }

    #[test]
    fn test_form_factor_and_technology() {
        assert_eq!(MEMORY_FORM_FACTOR.label(0x09u8), "DIMM");
        assert_eq!(MEMORY_FORM_FACTOR.label(0x0Du8), "SODIMM");
        assert_eq!(MEMORY_FORM_FACTOR.label(0x11u8), "Unknown");
        assert_eq!(MEMORY_TECHNOLOGY.label(0x03u8), "DRAM");
        assert_eq!(MEMORY_TECHNOLOGY.label(0x08u8), "Unknown");
    }
}
