// libntag/src/identify/table.rs
//! Vendor-published lookup tables. Adding a subtype is a table edit.

use crate::identify::profile::{Capabilities, MemoryLayout, TagFamily};
use crate::types::{Atqa, Sak};

/// One storage-size code within a family.
#[derive(Debug, Clone, Copy)]
pub struct SubtypeEntry {
    pub storage_code: u8,
    pub name: &'static str,
    pub memory: MemoryLayout,
}

/// One GET_VERSION product type.
#[derive(Debug, Clone, Copy)]
pub struct FamilyEntry {
    pub product_type: u8,
    pub family: TagFamily,
    /// Name reported for a storage code missing from `subtypes`
    pub unknown_name: &'static str,
    pub counters: u8,
    pub capabilities: Capabilities,
    pub subtypes: &'static [SubtypeEntry],
}

impl FamilyEntry {
    pub fn subtype(&self, storage_code: u8) -> Option<&'static SubtypeEntry> {
        self.subtypes.iter().find(|s| s.storage_code == storage_code)
    }
}

pub const NTAG21X_SUBTYPES: &[SubtypeEntry] = &[
    SubtypeEntry {
        storage_code: 0x0F,
        name: "NTAG213",
        memory: MemoryLayout::paged(144, 39, 44, 41),
    },
    SubtypeEntry {
        storage_code: 0x11,
        name: "NTAG215",
        memory: MemoryLayout::paged(504, 129, 134, 131),
    },
    SubtypeEntry {
        storage_code: 0x13,
        name: "NTAG216",
        memory: MemoryLayout::paged(888, 225, 230, 227),
    },
];

pub const ULTRALIGHT_EV1_SUBTYPES: &[SubtypeEntry] = &[
    SubtypeEntry {
        storage_code: 0x0B,
        name: "MF0UL11",
        memory: MemoryLayout::paged(48, 15, 19, 16),
    },
    SubtypeEntry {
        storage_code: 0x0E,
        name: "MF0UL21",
        memory: MemoryLayout::paged(128, 35, 40, 37),
    },
];

pub const DESFIRE_SUBTYPES: &[SubtypeEntry] = &[
    SubtypeEntry {
        storage_code: 0x16,
        name: "2K",
        memory: MemoryLayout::bytes_only(2048),
    },
    SubtypeEntry {
        storage_code: 0x18,
        name: "4K",
        memory: MemoryLayout::bytes_only(4096),
    },
    SubtypeEntry {
        storage_code: 0x1A,
        name: "8K",
        memory: MemoryLayout::bytes_only(8192),
    },
    SubtypeEntry {
        storage_code: 0x1C,
        name: "16K",
        memory: MemoryLayout::bytes_only(16384),
    },
    SubtypeEntry {
        storage_code: 0x1E,
        name: "32K",
        memory: MemoryLayout::bytes_only(32768),
    },
];

/// DESFire Light has one size whatever its storage code says.
pub const DESFIRE_LIGHT_MEMORY: MemoryLayout = MemoryLayout::bytes_only(640);

pub const FAMILIES: &[FamilyEntry] = &[
    FamilyEntry {
        product_type: 0x04,
        family: TagFamily::Ntag21x,
        unknown_name: "NTAG21x Unknown",
        counters: 1,
        capabilities: Capabilities::PAGED,
        subtypes: NTAG21X_SUBTYPES,
    },
    FamilyEntry {
        product_type: 0x03,
        family: TagFamily::UltralightEv1,
        unknown_name: "MF0ULx Unknown",
        counters: 3,
        capabilities: Capabilities::PAGED,
        subtypes: ULTRALIGHT_EV1_SUBTYPES,
    },
    FamilyEntry {
        product_type: 0x01,
        family: TagFamily::Desfire,
        unknown_name: "unknown memory",
        counters: 0,
        capabilities: Capabilities::NONE,
        subtypes: DESFIRE_SUBTYPES,
    },
    FamilyEntry {
        product_type: 0x08,
        family: TagFamily::Desfire,
        unknown_name: "DESFire light 640 bytes",
        counters: 0,
        capabilities: Capabilities::NONE,
        subtypes: &[],
    },
];

/// DESFire generation by hardware major version.
pub const DESFIRE_GENERATIONS: &[(u8, &str)] = &[(0x01, "EV1"), (0x12, "EV2"), (0x33, "EV3")];

pub const DESFIRE_LIGHT_PRODUCT_TYPE: u8 = 0x08;

pub fn family_for(product_type: u8) -> Option<&'static FamilyEntry> {
    FAMILIES.iter().find(|f| f.product_type == product_type)
}

pub fn desfire_generation(major: u8) -> &'static str {
    DESFIRE_GENERATIONS
        .iter()
        .find(|(m, _)| *m == major)
        .map(|(_, name)| *name)
        .unwrap_or("EVx (unknown)")
}

/// ATQA/SAK pairs known to the fallback lookup.
#[derive(Debug, Clone, Copy)]
pub struct FallbackEntry {
    pub atqa: [u8; 2],
    pub sak: u8,
    pub family: TagFamily,
    pub name: &'static str,
}

pub const FALLBACK: &[FallbackEntry] = &[
    FallbackEntry {
        atqa: [0x44, 0x00],
        sak: 0x00,
        family: TagFamily::Ntag21x,
        name: "NTAG21x / Ultralight class",
    },
    FallbackEntry {
        atqa: [0x44, 0x03],
        sak: 0x20,
        family: TagFamily::Desfire,
        name: "DESFire class",
    },
];

pub fn fallback_for(atqa: Atqa, sak: Sak) -> Option<&'static FallbackEntry> {
    FALLBACK
        .iter()
        .find(|e| &e.atqa == atqa.as_bytes() && e.sak == sak.as_u8())
}
