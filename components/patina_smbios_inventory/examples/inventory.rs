use patina_smbios_inventory::{RawStructure, SmbiosInventory, SmbiosVersion, structure::SMBIOS_TYPE_END_OF_TABLE};
use std::string::String;
use std::vec::Vec;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| String::from(*value)).collect()
}

// A small table as a QEMU q35 guest reports it
fn canned_table() -> Vec<RawStructure> {
    let mut bios = vec![0x01, 0x02, 0x00, 0xE8, 0x03, 0x00];
    bios.extend_from_slice(&(1u64 << 3).to_le_bytes());
    bios.extend_from_slice(&0x1000u16.to_le_bytes());
    bios.extend_from_slice(&[0x00, 0x00, 0xFF, 0xFF]);

    let mut system = vec![0x01, 0x02, 0x03, 0x00];
    system.extend_from_slice(&[0u8; 16]);
    system.extend_from_slice(&[0x06, 0x00, 0x00]);

    let mut processor = vec![0x01, 0x03, 0xFE, 0x02];
    processor.extend_from_slice(&[0x63, 0x06, 0x00, 0x00, 0xFF, 0xFB, 0x8B, 0x07]);
    processor.extend_from_slice(&[0x03, 0x00]);
    processor.extend_from_slice(&0u16.to_le_bytes());
    processor.extend_from_slice(&2000u16.to_le_bytes());
    processor.extend_from_slice(&2000u16.to_le_bytes());
    processor.extend_from_slice(&[0x41, 0x01]);
    processor.extend_from_slice(&[0xFF; 6]);
    processor.extend_from_slice(&[0x00, 0x00, 0x00]);
    processor.extend_from_slice(&[0x04, 0x04, 0x04]);
    processor.extend_from_slice(&0x0002u16.to_le_bytes());
    processor.extend_from_slice(&0x0001u16.to_le_bytes());
    processor.extend_from_slice(&[0x04, 0x00, 0x04, 0x00, 0x04, 0x00]);

    let mut memory = Vec::new();
    memory.extend_from_slice(&0x1000u16.to_le_bytes());
    memory.extend_from_slice(&0xFFFEu16.to_le_bytes());
    memory.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
    memory.extend_from_slice(&4096u16.to_le_bytes());
    memory.extend_from_slice(&[0x09, 0x00, 0x01, 0x00, 0x07]);
    memory.extend_from_slice(&(1u16 << 1).to_le_bytes());
    memory.extend_from_slice(&0u16.to_le_bytes());
    memory.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x00]);
    memory.extend_from_slice(&0u32.to_le_bytes());
    memory.extend_from_slice(&0u16.to_le_bytes());

    let chassis = vec![0x01, 0x01, 0x02, 0x00, 0x00, 0x03, 0x03, 0x03, 0x02];
    // Physical Memory Array has no decoder and is skipped.
    let memory_array = vec![0x01, 0x03, 0x03, 0x00, 0x00, 0x40, 0x00, 0xFE, 0xFF, 0x01, 0x00];

    vec![
        RawStructure::from_parts(0, 0x0000, bios, strings(&["EFI Development Kit II / OVMF", "0.0.0", "02/06/2015"])),
        RawStructure::from_parts(1, 0x0100, system, strings(&["QEMU", "Standard PC (Q35 + ICH9, 2009)", "pc-q35-8.2"])),
        RawStructure::from_parts(3, 0x0300, chassis, strings(&["QEMU", "pc-q35-8.2"])),
        RawStructure::from_parts(4, 0x0400, processor, strings(&["CPU 0", "QEMU", "pc-q35-8.2"])),
        RawStructure::from_parts(16, 0x1000, memory_array, Vec::new()),
        RawStructure::from_parts(17, 0x1100, memory, strings(&["DIMM 0", "QEMU"])),
        RawStructure::from_parts(SMBIOS_TYPE_END_OF_TABLE, 0xFEFF, Vec::new(), Vec::new()),
    ]
}

fn main() {
    env_logger::init();

    let table = canned_table();
    let inventory = SmbiosInventory::from_structures(SmbiosVersion::new(3, 0, 0), &table);

    println!("SMBIOS {}", inventory.version());
    if let Some(bios) = inventory.bios_information() {
        println!("BIOS: {} {} ({}), {} KiB ROM", bios.vendor, bios.version, bios.release_date, bios.rom_size_kib);
    }
    if let Some(system) = inventory.system_information() {
        println!(
            "System: {} {} [{}], wake-up: {}",
            system.manufacturer, system.product_name, system.uuid, system.wake_up_type
        );
    }
    for chassis in inventory.enclosures() {
        println!("Chassis: {} {}", chassis.manufacturer, chassis.chassis_type);
    }
    for cpu in inventory.processors() {
        println!(
            "{}: {} {} ({}), {} cores / {} threads, {}",
            cpu.socket_designation,
            cpu.processor_manufacturer,
            cpu.processor_family,
            cpu.processor_id,
            cpu.core_count,
            cpu.thread_count,
            cpu.status
        );
    }
    for dimm in inventory.memory_devices() {
        println!("{}: {} KiB {} {}", dimm.device_locator, dimm.size_kib, dimm.form_factor, dimm.memory_type);
    }
    println!("Installed memory: {} MiB", inventory.total_memory_kib() / 1024);
    for failure in inventory.failures() {
        println!("Failed: {failure}");
    }
}
