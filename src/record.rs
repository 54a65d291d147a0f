// Package room record: assembly, derived fields, and the persisted shape

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::availability::compute_availability;
use crate::hotel::{AdditionalHotel, HotelRoomSet, PackageRoomsInput};
use crate::occupancy::{ClassMap, OccupancyClass};
use crate::roomlist::parse_room_list;
use crate::slots::generate_slot_identifiers;

// Error types for the persistence boundary. The computation itself never
// fails: malformed or sparse text degrades to empty lists and zero
// availability.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("JSON serialize error: {0}")]
    SerializeError(String),
}

// The room-inventory aggregate owned by one package. Built or fully replaced
// on every admin submit, read-only to every other component; the derived
// fields are recomputed in full each time, never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRoomRecord {
    pub medinah: HotelRoomSet,
    pub makkah: HotelRoomSet,
    pub additional: Vec<AdditionalHotel>,
    pub availability: ClassMap<usize>,
    pub slot_identifiers: Vec<String>,
}

impl PackageRoomRecord {
    // Entry point for package create/update: raw admin text in, full record
    // out.
    pub fn build(input: &PackageRoomsInput) -> Self {
        let medinah = HotelRoomSet::from_input(&input.medinah);
        let makkah = HotelRoomSet::from_input(&input.makkah);
        let additional = input
            .additional
            .iter()
            .map(AdditionalHotel::from_input)
            .collect();
        Self::from_hotels(medinah, makkah, additional)
    }

    // Assembly from already-parsed hotels, shared by the build and re-load
    // paths.
    pub fn from_hotels(
        medinah: HotelRoomSet,
        makkah: HotelRoomSet,
        additional: Vec<AdditionalHotel>,
    ) -> Self {
        let availability = compute_availability(&medinah, &makkah, &additional);
        let slot_identifiers = generate_slot_identifiers(&availability);
        debug!(
            quad = availability.quad,
            triple = availability.triple,
            double = availability.double,
            slots = slot_identifiers.len(),
            "assembled package room record"
        );
        Self {
            medinah,
            makkah,
            additional,
            availability,
            slot_identifiers,
        }
    }

    // The derived fields are a cache over the room lists; recomputing from
    // the same lists must reproduce them exactly.
    pub fn recompute(&mut self) {
        self.availability = compute_availability(&self.medinah, &self.makkah, &self.additional);
        self.slot_identifiers = generate_slot_identifiers(&self.availability);
    }

    pub fn availability_for(&self, class: OccupancyClass) -> usize {
        *self.availability.get(class)
    }

    pub fn total_slots(&self) -> usize {
        self.slot_identifiers.len()
    }

    // Comma-joined slot sequence for the admin list views.
    pub fn summary(&self) -> String {
        self.slot_identifiers.join(",")
    }

    // Encodes the record into its persisted JSON shape. Room lists are the
    // source of truth; the summary field is written alongside them as the
    // structured identifier array.
    pub fn to_stored_json(&self) -> Result<String, InventoryError> {
        serde_json::to_string(&StoredPackageRooms::from(self))
            .map_err(|e| InventoryError::SerializeError(e.to_string()))
    }

    // Decodes a persisted record and recomputes the derived fields from the
    // stored room lists.
    pub fn from_stored_json(json: &str) -> Result<Self, InventoryError> {
        let stored: StoredPackageRooms =
            serde_json::from_str(json).map_err(|e| InventoryError::JsonParseError(e.to_string()))?;
        Ok(stored.into_record())
    }
}

// Persisted shape: per-hotel per-class arrays plus the ordered additional
// hotel list and the derived summary field. Missing keys decode as empty so
// sparse legacy rows load cleanly.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoredPackageRooms {
    pub medinah: StoredRoomSet,
    pub makkah: StoredRoomSet,
    #[serde(default)]
    pub additional: Vec<StoredAdditionalHotel>,
    #[serde(default)]
    pub room_numbers: RoomNumbersField,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StoredRoomSet {
    pub quad: Vec<String>,
    pub triple: Vec<String>,
    pub double: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoredAdditionalHotel {
    pub name: String,
    #[serde(default)]
    pub rooms: StoredRoomSet,
}

// Summary field: current records store the structured identifier array,
// legacy records a plain comma-joined string. Both decode; the legacy form
// goes through the same splitter as the raw admin fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RoomNumbersField {
    Structured(Vec<String>),
    Legacy(String),
}

impl Default for RoomNumbersField {
    fn default() -> Self {
        RoomNumbersField::Structured(Vec::new())
    }
}

impl RoomNumbersField {
    pub fn into_slot_identifiers(self) -> Vec<String> {
        match self {
            RoomNumbersField::Structured(identifiers) => identifiers,
            RoomNumbersField::Legacy(joined) => parse_room_list(&joined),
        }
    }
}

impl From<&PackageRoomRecord> for StoredPackageRooms {
    fn from(record: &PackageRoomRecord) -> Self {
        Self {
            medinah: StoredRoomSet::from(&record.medinah),
            makkah: StoredRoomSet::from(&record.makkah),
            additional: record
                .additional
                .iter()
                .map(|hotel| StoredAdditionalHotel {
                    name: hotel.name.clone(),
                    rooms: StoredRoomSet::from(&hotel.rooms),
                })
                .collect(),
            room_numbers: RoomNumbersField::Structured(record.slot_identifiers.clone()),
        }
    }
}

impl From<&HotelRoomSet> for StoredRoomSet {
    fn from(set: &HotelRoomSet) -> Self {
        Self {
            quad: set.rooms.quad.clone(),
            triple: set.rooms.triple.clone(),
            double: set.rooms.double.clone(),
        }
    }
}

impl StoredRoomSet {
    fn into_room_set(self) -> HotelRoomSet {
        HotelRoomSet::from_parts(ClassMap {
            quad: self.quad,
            triple: self.triple,
            double: self.double,
        })
    }
}

impl StoredPackageRooms {
    // Rebuilds the working record. Derived fields come from the room lists,
    // not from the stored summary, so stale summaries cannot leak through.
    pub fn into_record(self) -> PackageRoomRecord {
        let medinah = self.medinah.into_room_set();
        let makkah = self.makkah.into_room_set();
        let additional = self
            .additional
            .into_iter()
            .map(|hotel| AdditionalHotel {
                name: hotel.name,
                rooms: hotel.rooms.into_room_set(),
            })
            .collect();
        PackageRoomRecord::from_hotels(medinah, makkah, additional)
    }
}

// A small stored record for inline testing
pub const SMALL_SAMPLE_STORED: &str = r#"{
  "medinah": {"quad": ["101", "102", "103"], "triple": ["301", "302", "303", "304"], "double": []},
  "makkah": {"quad": ["201", "202"], "triple": ["401", "402", "403"], "double": ["501", "502"]},
  "additional": [],
  "room_numbers": ["Q1", "Q2", "T1", "T2", "T3"]
}"#;
