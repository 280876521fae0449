//! Static lookup tables for enumerated and bit-flag fields.
//!
//! Every enumerated field resolves through a [`CodeTable`] that carries its own fallback label, so a code outside the
//! table never fails a decode. Bit-flag fields resolve through a [`FlagTable`] listing `(bit, label)` pairs from the
//! least significant bit upwards.
//!
//! Section numbers refer to the DMTF SMBIOS Reference Specification (DSP0134).
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

pub mod memory;
pub mod processor;

/// `(bit position, label)` pairs, least significant bit first.
pub type FlagTable = [(u8, &'static str)];

#[derive(Debug)]
enum Codes {
    /// Contiguous codes starting at `first`.
    Dense { first: u16, labels: &'static [&'static str] },
    /// Codes with gaps, keyed by the exact DMTF code.
    Sparse(&'static phf::Map<u16, &'static str>),
}

/// Maps an enumerated code to its label.
#[derive(Debug)]
pub struct CodeTable {
    codes: Codes,
    fallback: &'static str,
}

impl CodeTable {
    pub const fn dense(first: u16, labels: &'static [&'static str], fallback: &'static str) -> Self {
        Self { codes: Codes::Dense { first, labels }, fallback }
    }

    pub const fn sparse(codes: &'static phf::Map<u16, &'static str>, fallback: &'static str) -> Self {
        Self { codes: Codes::Sparse(codes), fallback }
    }

    /// Returns the label for `code`, or the table's fallback label when the code is not listed.
    pub fn label(&self, code: impl Into<u16>) -> &'static str {
        self.get(code.into()).unwrap_or(self.fallback)
    }

    /// Returns the label for `code` only when the table lists it.
    pub fn get(&self, code: u16) -> Option<&'static str> {
        match &self.codes {
            Codes::Dense { first, labels } => {
                code.checked_sub(*first).and_then(|index| labels.get(index as usize)).copied()
            }
            Codes::Sparse(codes) => codes.get(&code).copied(),
        }
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}

/// BIOS Characteristics (7.1.1). Bits 32..63 are reserved for BIOS and system vendors.
pub static BIOS_CHARACTERISTICS: &FlagTable = &[
    (2, "Unknown"),
    (3, "BIOS characteristics not supported"),
    (4, "ISA is supported"),
    (5, "MCA is supported"),
    (6, "EISA is supported"),
    (7, "PCI is supported"),
    (8, "PC Card (PCMCIA) is supported"),
    (9, "PNP is supported"),
    (10, "APM is supported"),
    (11, "BIOS is upgradeable"),
    (12, "BIOS shadowing is allowed"),
    (13, "VLB is supported"),
    (14, "ESCD support is available"),
    (15, "Boot from CD is supported"),
    (16, "Selectable boot is supported"),
    (17, "BIOS ROM is socketed"),
    (18, "Boot from PC Card (PCMCIA) is supported"),
    (19, "EDD is supported"),
    (20, "Japanese floppy for NEC 9800 1.2 MB is supported (int 13h)"),
    (21, "Japanese floppy for Toshiba 1.2 MB is supported (int 13h)"),
    (22, "5.25\"/360 kB floppy services are supported (int 13h)"),
    (23, "5.25\"/1.2 MB floppy services are supported (int 13h)"),
    (24, "3.5\"/720 kB floppy services are supported (int 13h)"),
    (25, "3.5\"/2.88 MB floppy services are supported (int 13h)"),
    (26, "Print screen service is supported (int 5h)"),
    (27, "8042 keyboard services are supported (int 9h)"),
    (28, "Serial services are supported (int 14h)"),
    (29, "Printer services are supported (int 17h)"),
    (30, "CGA/mono video services are supported (int 10h)"),
    (31, "NEC PC-98"),
];

/// BIOS Characteristics Extension Bytes 1 and 2 (7.1.2), read as one little-endian word.
pub static BIOS_CHARACTERISTICS_EXTENSION: &FlagTable = &[
    (0, "ACPI is supported"),
    (1, "USB legacy is supported"),
    (2, "AGP is supported"),
    (3, "I2O boot is supported"),
    (4, "LS-120 boot is supported"),
    (5, "ATAPI Zip drive boot is supported"),
    (6, "IEEE 1394 boot is supported"),
    (7, "Smart battery is supported"),
    (8, "BIOS boot specification is supported"),
    (9, "Function key-initiated network boot is supported"),
    (10, "Targeted content distribution is supported"),
    (11, "UEFI is supported"),
    (12, "System is a virtual machine"),
    (13, "Manufacturing mode is supported"),
    (14, "Manufacturing mode is enabled"),
];

/// System Information - Wake-up Type (7.2.2)
pub static WAKE_UP_TYPE: CodeTable = CodeTable::dense(
    0x00,
    &[
        "Reserved",
        "Other",
        "Unknown",
        "APM Timer",
        "Modem Ring",
        "LAN Remote",
        "Power Switch",
        "PCI PME#",
        "AC Power Restored",
    ],
    "Unknown",
);

/// Baseboard - Feature Flags (7.3.1)
pub static BASEBOARD_FEATURE_FLAGS: &FlagTable = &[
    (0, "Board is a hosting board"),
    (1, "Board requires at least one daughter board"),
    (2, "Board is removable"),
    (3, "Board is replaceable"),
    (4, "Board is hot swappable"),
];

/// Baseboard - Board Type (7.3.2)
pub static BOARD_TYPE: CodeTable = CodeTable::dense(
    0x01,
    &[
        "Unknown",
        "Other",
        "Server Blade",
        "Connectivity Switch",
        "System Management Module",
        "Processor Module",
        "I/O Module",
        "Memory Module",
        "Daughter Board",
        "Motherboard",
        "Processor+Memory Module",
        "Processor+I/O Module",
        "Interconnect Board",
    ],
    "Unknown",
);

/// System Enclosure or Chassis Types (7.4.1)
pub static CHASSIS_TYPE: CodeTable = CodeTable::dense(
    0x01,
    &[
        "Other",
        "Unknown",
        "Desktop",
        "Low Profile Desktop",
        "Pizza Box",
        "Mini Tower",
        "Tower",
        "Portable",
        "Laptop",
        "Notebook",
        "Hand Held",
        "Docking Station",
        "All In One",
        "Sub Notebook",
        "Space-saving",
        "Lunch Box",
        "Main Server Chassis",
        "Expansion Chassis",
        "Sub Chassis",
        "Bus Expansion Chassis",
        "Peripheral Chassis",
        "RAID Chassis",
        "Rack Mount Chassis",
        "Sealed-case PC",
        "Multi-system",
        "CompactPCI",
        "AdvancedTCA",
        "Blade",
        "Blade Enclosing",
        "Tablet",
        "Convertible",
        "Detachable",
        "IoT Gateway",
        "Embedded PC",
        "Mini PC",
        "Stick PC",
    ],
    "Unknown",
);

/// System Enclosure or Chassis States (7.4.2), shared by boot-up, power supply and thermal state.
pub static CHASSIS_STATE: CodeTable =
    CodeTable::dense(0x01, &["Other", "Unknown", "Safe", "Warning", "Critical", "Non-recoverable"], "Unknown");

/// System Enclosure or Chassis Security Status (7.4.3)
pub static CHASSIS_SECURITY_STATUS: CodeTable = CodeTable::dense(
    0x01,
    &["Other", "Unknown", "None", "External Interface Locked Out", "External Interface Enabled"],
    "Unknown",
);

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_dense_table_bounds() {
        assert_eq!(CHASSIS_TYPE.label(0x00u8), "Unknown");
        assert_eq!(CHASSIS_TYPE.label(0x01u8), "Other");
        assert_eq!(CHASSIS_TYPE.label(0x03u8), "Desktop");
        assert_eq!(CHASSIS_TYPE.label(0x24u8), "Stick PC");
        assert_eq!(CHASSIS_TYPE.label(0x25u8), "Unknown");
        assert_eq!(CHASSIS_TYPE.label(0xFFu8), "Unknown");
        assert_eq!(CHASSIS_TYPE.get(0x25), None);
    }

    #[test]
    fn test_zero_based_table() {
        assert_eq!(WAKE_UP_TYPE.label(0x00u8), "Reserved");
        assert_eq!(WAKE_UP_TYPE.label(0x06u8), "Power Switch");
        assert_eq!(WAKE_UP_TYPE.label(0x09u8), "Unknown");
    }

    #[test]
    fn test_fallback_is_exposed() {
        assert_eq!(BOARD_TYPE.fallback(), "Unknown");
        assert_eq!(CHASSIS_SECURITY_STATUS.label(0x05u8), "External Interface Enabled");
        assert_eq!(CHASSIS_STATE.label(0x07u8), CHASSIS_STATE.fallback());
    }

    #[test]
    fn test_flag_tables_are_ordered_low_bit_first() {
        for table in [BIOS_CHARACTERISTICS, BIOS_CHARACTERISTICS_EXTENSION, BASEBOARD_FEATURE_FLAGS] {
            assert!(table.windows(2).all(|pair| pair[0].0 < pair[1].0));
        }
    }
}
