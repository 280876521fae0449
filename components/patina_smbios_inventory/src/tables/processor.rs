//! Processor Information (Type 4) tables.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use phf::phf_map;

use super::{CodeTable, FlagTable};

/// Processor Family value that defers to the Processor Family 2 field.
pub const PROCESSOR_FAMILY_USE_FAMILY_2: u8 = 0xFE;

/// Processor Type (7.5.1)
pub static PROCESSOR_TYPE: CodeTable = CodeTable::dense(
    0x01,
    &["Other", "Unknown", "Central Processor", "Math Processor", "DSP Processor", "Video Processor"],
    "Unknown",
);

// Processor Family (7.5.2). Codes above 0xFF are only reachable through Processor Family 2.
// 0xBE is ambiguous between vendors and is left to the fallback.
static PROCESSOR_FAMILY_CODES: phf::Map<u16, &'static str> = phf_map! {
    0x01u16 => "Other",
    0x02u16 => "Unknown",
    0x03u16 => "8086",
    0x04u16 => "80286",
    0x05u16 => "80386",
    0x06u16 => "80486",
    0x07u16 => "8087",
    0x08u16 => "80287",
    0x09u16 => "80387",
    0x0Au16 => "80487",
    0x0Bu16 => "Pentium",
    0x0Cu16 => "Pentium Pro",
    0x0Du16 => "Pentium II",
    0x0Eu16 => "Pentium MMX",
    0x0Fu16 => "Celeron",
    0x10u16 => "Pentium II Xeon",
    0x11u16 => "Pentium III",
    0x12u16 => "M1",
    0x13u16 => "M2",
    0x14u16 => "Celeron M",
    0x15u16 => "Pentium 4 HT",
    0x18u16 => "Duron",
    0x19u16 => "K5",
    0x1Au16 => "K6",
    0x1Bu16 => "K6-2",
    0x1Cu16 => "K6-3",
    0x1Du16 => "Athlon",
    0x1Eu16 => "AMD29000",
    0x1Fu16 => "K6-2+",
    0x20u16 => "Power PC",
    0x21u16 => "Power PC 601",
    0x22u16 => "Power PC 603",
    0x23u16 => "Power PC 603+",
    0x24u16 => "Power PC 604",
    0x25u16 => "Power PC 620",
    0x26u16 => "Power PC x704",
    0x27u16 => "Power PC 750",
    0x28u16 => "Core Duo",
    0x29u16 => "Core Duo Mobile",
    0x2Au16 => "Core Solo Mobile",
    0x2Bu16 => "Atom",
    0x2Cu16 => "Core M",
    0x2Du16 => "Core m3",
    0x2Eu16 => "Core m5",
    0x2Fu16 => "Core m7",
    0x30u16 => "Alpha",
    0x31u16 => "Alpha 21064",
    0x32u16 => "Alpha 21066",
    0x33u16 => "Alpha 21164",
    0x34u16 => "Alpha 21164PC",
    0x35u16 => "Alpha 21164a",
    0x36u16 => "Alpha 21264",
    0x37u16 => "Alpha 21364",
    0x38u16 => "Turion II Ultra Dual-Core Mobile M",
    0x39u16 => "Turion II Dual-Core Mobile M",
    0x3Au16 => "Athlon II Dual-Core M",
    0x3Bu16 => "Opteron 6100",
    0x3Cu16 => "Opteron 4100",
    0x3Du16 => "Opteron 6200",
    0x3Eu16 => "Opteron 4200",
    0x3Fu16 => "FX",
    0x40u16 => "MIPS",
    0x41u16 => "MIPS R4000",
    0x42u16 => "MIPS R4200",
    0x43u16 => "MIPS R4400",
    0x44u16 => "MIPS R4600",
    0x45u16 => "MIPS R10000",
    0x46u16 => "C-Series",
    0x47u16 => "E-Series",
    0x48u16 => "A-Series",
    0x49u16 => "G-Series",
    0x4Au16 => "Z-Series",
    0x4Bu16 => "R-Series",
    0x4Cu16 => "Opteron 4300",
    0x4Du16 => "Opteron 6300",
    0x4Eu16 => "Opteron 3300",
    0x4Fu16 => "FirePro",
    0x50u16 => "SPARC",
    0x51u16 => "SuperSPARC",
    0x52u16 => "MicroSPARC II",
    0x53u16 => "MicroSPARC IIep",
    0x54u16 => "UltraSPARC",
    0x55u16 => "UltraSPARC II",
    0x56u16 => "UltraSPARC IIi",
    0x57u16 => "UltraSPARC III",
    0x58u16 => "UltraSPARC IIIi",
    0x60u16 => "68040",
    0x61u16 => "68xxx",
    0x62u16 => "68000",
    0x63u16 => "68010",
    0x64u16 => "68020",
    0x65u16 => "68030",
    0x66u16 => "Athlon X4",
    0x67u16 => "Opteron X1000",
    0x68u16 => "Opteron X2000",
    0x69u16 => "Opteron A-Series",
    0x6Au16 => "Opteron X3000",
    0x6Bu16 => "Zen",
    0x70u16 => "Hobbit",
    0x78u16 => "Crusoe TM5000",
    0x79u16 => "Crusoe TM3000",
    0x7Au16 => "Efficeon TM8000",
    0x80u16 => "Weitek",
    0x82u16 => "Itanium",
    0x83u16 => "Athlon 64",
    0x84u16 => "Opteron",
    0x85u16 => "Sempron",
    0x86u16 => "Turion 64",
    0x87u16 => "Dual-Core Opteron",
    0x88u16 => "Athlon 64 X2",
    0x89u16 => "Turion 64 X2",
    0x8Au16 => "Quad-Core Opteron",
    0x8Bu16 => "Third-Generation Opteron",
    0x8Cu16 => "Phenom FX",
    0x8Du16 => "Phenom X4",
    0x8Eu16 => "Phenom X2",
    0x8Fu16 => "Athlon X2",
    0x90u16 => "PA-RISC",
    0x91u16 => "PA-RISC 8500",
    0x92u16 => "PA-RISC 8000",
    0x93u16 => "PA-RISC 7300LC",
    0x94u16 => "PA-RISC 7200",
    0x95u16 => "PA-RISC 7100LC",
    0x96u16 => "PA-RISC 7100",
    0xA0u16 => "V30",
    0xA1u16 => "Quad-Core Xeon 3200",
    0xA2u16 => "Dual-Core Xeon 3000",
    0xA3u16 => "Quad-Core Xeon 5300",
    0xA4u16 => "Dual-Core Xeon 5100",
    0xA5u16 => "Dual-Core Xeon 5000",
    0xA6u16 => "Dual-Core Xeon LV",
    0xA7u16 => "Dual-Core Xeon ULV",
    0xA8u16 => "Dual-Core Xeon 7100",
    0xA9u16 => "Quad-Core Xeon 5400",
    0xAAu16 => "Quad-Core Xeon",
    0xABu16 => "Dual-Core Xeon 5200",
    0xACu16 => "Dual-Core Xeon 7200",
    0xADu16 => "Quad-Core Xeon 7300",
    0xAEu16 => "Quad-Core Xeon 7400",
    0xAFu16 => "Multi-Core Xeon 7400",
    0xB0u16 => "Pentium III Xeon",
    0xB1u16 => "Pentium III Speedstep",
    0xB2u16 => "Pentium 4",
    0xB3u16 => "Xeon",
    0xB4u16 => "AS400",
    0xB5u16 => "Xeon MP",
    0xB6u16 => "Athlon XP",
    0xB7u16 => "Athlon MP",
    0xB8u16 => "Itanium 2",
    0xB9u16 => "Pentium M",
    0xBAu16 => "Celeron D",
    0xBBu16 => "Pentium D",
    0xBCu16 => "Pentium EE",
    0xBDu16 => "Core Solo",
    0xBFu16 => "Core 2 Duo",
    0xC0u16 => "Core 2 Solo",
    0xC1u16 => "Core 2 Extreme",
    0xC2u16 => "Core 2 Quad",
    0xC3u16 => "Core 2 Extreme Mobile",
    0xC4u16 => "Core 2 Duo Mobile",
    0xC5u16 => "Core 2 Solo Mobile",
    0xC6u16 => "Core i7",
    0xC7u16 => "Dual-Core Celeron",
    0xC8u16 => "IBM390",
    0xC9u16 => "G4",
    0xCAu16 => "G5",
    0xCBu16 => "ESA/390 G6",
    0xCCu16 => "z/Architecture",
    0xCDu16 => "Core i5",
    0xCEu16 => "Core i3",
    0xCFu16 => "Core i9",
    0xD2u16 => "C7-M",
    0xD3u16 => "C7-D",
    0xD4u16 => "C7",
    0xD5u16 => "Eden",
    0xD6u16 => "Multi-Core Xeon",
    0xD7u16 => "Dual-Core Xeon 3xxx",
    0xD8u16 => "Quad-Core Xeon 3xxx",
    0xD9u16 => "Nano",
    0xDAu16 => "Dual-Core Xeon 5xxx",
    0xDBu16 => "Quad-Core Xeon 5xxx",
    0xDDu16 => "Dual-Core Xeon 7xxx",
    0xDEu16 => "Quad-Core Xeon 7xxx",
    0xDFu16 => "Multi-Core Xeon 7xxx",
    0xE0u16 => "Multi-Core Xeon 3400",
    0xE4u16 => "Opteron 3000",
    0xE5u16 => "Sempron II",
    0xE6u16 => "Embedded Opteron Quad-Core",
    0xE7u16 => "Phenom Triple-Core",
    0xE8u16 => "Turion Ultra Dual-Core Mobile",
    0xE9u16 => "Turion Dual-Core Mobile",
    0xEAu16 => "Athlon Dual-Core",
    0xEBu16 => "Sempron SI",
    0xECu16 => "Phenom II",
    0xEDu16 => "Athlon II",
    0xEEu16 => "Six-Core Opteron",
    0xEFu16 => "Sempron M",
    0xFAu16 => "i860",
    0xFBu16 => "i960",
    0x100u16 => "ARMv7",
    0x101u16 => "ARMv8",
    0x102u16 => "ARMv9",
    0x104u16 => "SH-3",
    0x105u16 => "SH-4",
    0x118u16 => "ARM",
    0x119u16 => "StrongARM",
    0x12Cu16 => "6x86",
    0x12Du16 => "MediaGX",
    0x12Eu16 => "MII",
    0x140u16 => "WinChip",
    0x15Eu16 => "DSP",
    0x1F4u16 => "Video Processor",
    0x200u16 => "RV32",
    0x201u16 => "RV64",
    0x202u16 => "RV128",
    0x258u16 => "LoongArch",
};

/// Processor Family and Processor Family 2 (7.5.2)
pub static PROCESSOR_FAMILY: CodeTable = CodeTable::sparse(&PROCESSOR_FAMILY_CODES, "Unknown");

/// Legacy voltage capability bits of the Voltage field (7.5.4), used when bit 7 is clear.
pub static PROCESSOR_VOLTAGE_CAPABILITY: &FlagTable = &[(0, "5.0 V"), (1, "3.3 V"), (2, "2.9 V")];

/// CPU Status, bits 2:0 of the Status field.
pub static PROCESSOR_CPU_STATUS: CodeTable = CodeTable::dense(
    0x00,
    &["Unknown", "Enabled", "Disabled By User", "Disabled By BIOS", "Idle", "Unknown", "Unknown", "Other"],
    "Unknown",
);

/// Processor Upgrade (7.5.5)
pub static PROCESSOR_UPGRADE: CodeTable = CodeTable::dense(
    0x01,
    &[
        "Other",
        "Unknown",
        "Daughter Board",
        "ZIF Socket",
        "Replaceable Piggy Back",
        "None",
        "LIF Socket",
        "Slot 1",
        "Slot 2",
        "370-pin Socket",
        "Slot A",
        "Slot M",
        "Socket 423",
        "Socket A (Socket 462)",
        "Socket 478",
        "Socket 754",
        "Socket 940",
        "Socket 939",
        "Socket mPGA604",
        "Socket LGA771",
        "Socket LGA775",
        "Socket S1",
        "Socket AM2",
        "Socket F (1207)",
        "Socket LGA1366",
        "Socket G34",
        "Socket AM3",
        "Socket C32",
        "Socket LGA1156",
        "Socket LGA1567",
        "Socket PGA988A",
        "Socket BGA1288",
        "Socket rPGA988B",
        "Socket BGA1023",
        "Socket BGA1224",
        "Socket BGA1155",
        "Socket LGA1356",
        "Socket LGA2011",
        "Socket FS1",
        "Socket FS2",
        "Socket FM1",
        "Socket FM2",
        "Socket LGA2011-3",
        "Socket LGA1356-3",
        "Socket LGA1150",
        "Socket BGA1168",
        "Socket BGA1234",
        "Socket BGA1364",
        "Socket AM4",
        "Socket LGA1151",
        "Socket BGA1356",
        "Socket BGA1440",
        "Socket BGA1515",
        "Socket LGA3647-1",
        "Socket SP3",
        "Socket SP3r2",
        "Socket LGA2066",
        "Socket BGA1392",
        "Socket BGA1510",
        "Socket BGA1528",
        "Socket LGA4189",
        "Socket LGA1200",
        "Socket LGA4677",
        "Socket LGA1700",
        "Socket BGA1744",
        "Socket BGA1781",
        "Socket BGA1211",
        "Socket BGA2422",
        "Socket LGA1211",
        "Socket LGA2422",
        "Socket LGA5773",
        "Socket BGA5773",
    ],
    "Unknown",
);

/// Processor Characteristics (7.5.9). Bit 0 is reserved.
pub static PROCESSOR_CHARACTERISTICS: &FlagTable = &[
    (1, "Unknown"),
    (2, "64-bit capable"),
    (3, "Multi-Core"),
    (4, "Hardware Thread"),
    (5, "Execute Protection"),
    (6, "Enhanced Virtualization"),
    (7, "Power/Performance Control"),
    (8, "128-bit Capable"),
    (9, "Arm64 SoC ID"),
];

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_family_lookup_is_keyed_by_code() {
        assert_eq!(PROCESSOR_FAMILY.label(0x0Bu8), "Pentium");
        // 0x16 and 0x17 are gaps; the entries after them must not shift.
        assert_eq!(PROCESSOR_FAMILY.label(0x16u8), "Unknown");
        assert_eq!(PROCESSOR_FAMILY.label(0x18u8), "Duron");
        assert_eq!(PROCESSOR_FAMILY.label(0xB3u8), "Xeon");
        assert_eq!(PROCESSOR_FAMILY.label(0xBEu8), "Unknown");
        assert_eq!(PROCESSOR_FAMILY.label(0x0101u16), "ARMv8");
        assert_eq!(PROCESSOR_FAMILY.label(0xFFFFu16), "Unknown");
    }

    #[test]
    fn test_processor_type_and_upgrade() {
        assert_eq!(PROCESSOR_TYPE.label(0x03u8), "Central Processor");
        assert_eq!(PROCESSOR_TYPE.label(0x00u8), "Unknown");
        assert_eq!(PROCESSOR_TYPE.label(0x07u8), "Unknown");
        assert_eq!(PROCESSOR_UPGRADE.label(0x01u8), "Other");
        assert_eq!(PROCESSOR_UPGRADE.label(0x31u8), "Socket AM4");
        assert_eq!(PROCESSOR_UPGRADE.label(0x3Cu8), "Socket BGA1528");
        assert_eq!(PROCESSOR_UPGRADE.label(0xFFu8), "Unknown");
    }

    #[test]
    fn test_cpu_status_covers_all_three_bit_values() {
        for code in 0u8..8 {
            assert!(PROCESSOR_CPU_STATUS.get(code as u16).is_some());
        }
        assert_eq!(PROCESSOR_CPU_STATUS.label(0x01u8), "Enabled");
        assert_eq!(PROCESSOR_CPU_STATUS.label(0x07u8), "Other");
    }
}
