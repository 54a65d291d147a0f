// Input DTOs from the admin CRUD layer and the parsed per-hotel room sets

use serde::{Deserialize, Serialize};

use crate::occupancy::{ClassMap, OccupancyClass};
use crate::roomlist::{normalize_room_list, parse_room_list};

// Display names of the two mandatory hotels every package carries.
pub const MEDINAH: &str = "Medinah";
pub const MAKKAH: &str = "Makkah";

// Raw form fields for one hotel: three comma-separated text fields, one per
// occupancy class. Absent fields are treated as empty strings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HotelRoomsInput {
    pub quad: Option<String>,
    pub triple: Option<String>,
    pub double: Option<String>,
}

impl HotelRoomsInput {
    fn raw(&self, class: OccupancyClass) -> &str {
        let field = match class {
            OccupancyClass::Quad => &self.quad,
            OccupancyClass::Triple => &self.triple,
            OccupancyClass::Double => &self.double,
        };
        field.as_deref().unwrap_or("")
    }
}

// An additional hotel beyond the two mandatory ones, with its own name.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdditionalHotelInput {
    pub name: String,
    pub rooms: HotelRoomsInput,
}

// The single explicit input object for one package submit: both mandatory
// hotels plus the ordered list of additional hotels. This replaces the
// ambient request state the engine's inputs used to arrive through.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PackageRoomsInput {
    pub medinah: HotelRoomsInput,
    pub makkah: HotelRoomsInput,
    #[serde(default)]
    pub additional: Vec<AdditionalHotelInput>,
}

// Parsed per-class room lists for exactly one hotel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelRoomSet {
    pub rooms: ClassMap<Vec<String>>,
}

impl HotelRoomSet {
    // Parses the three raw text fields of one hotel.
    pub fn from_input(input: &HotelRoomsInput) -> Self {
        Self {
            rooms: ClassMap::from_fn(|class| parse_room_list(input.raw(class))),
        }
    }

    // Re-load path: structured data that may still carry padding or empty
    // tokens from older records gets the same normalization as raw text.
    pub fn from_parts(rooms: ClassMap<Vec<String>>) -> Self {
        Self {
            rooms: ClassMap {
                quad: normalize_room_list(rooms.quad),
                triple: normalize_room_list(rooms.triple),
                double: normalize_room_list(rooms.double),
            },
        }
    }

    pub fn rooms_for(&self, class: OccupancyClass) -> &[String] {
        self.rooms.get(class)
    }

    pub fn room_count(&self, class: OccupancyClass) -> usize {
        self.rooms.get(class).len()
    }
}

// A named hotel attached to a package beyond the two mandatory ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdditionalHotel {
    pub name: String,
    pub rooms: HotelRoomSet,
}

impl AdditionalHotel {
    pub fn from_input(input: &AdditionalHotelInput) -> Self {
        Self {
            name: input.name.clone(),
            rooms: HotelRoomSet::from_input(&input.rooms),
        }
    }
}
