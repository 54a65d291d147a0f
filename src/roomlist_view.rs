// Derived roomlist/manifest rows and per-hotel counts for the admin views

use serde::Serialize;

use crate::hotel::{MAKKAH, MEDINAH};
use crate::occupancy::{ClassMap, OccupancyClass};
use crate::record::PackageRoomRecord;

// One cell of a roomlist row: the room number a specific hotel contributes
// to the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomCell {
    pub hotel: String,
    pub room_number: String,
}

// One row per slot: the slot identifier plus one cell per participating
// hotel, Medinah and Makkah first, then the additional hotels in stored
// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomlistRow {
    pub slot: String,
    pub class: OccupancyClass,
    pub cells: Vec<RoomCell>,
}

// Per-hotel room counts for the availability display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelRoomCounts {
    pub hotel: String,
    pub counts: ClassMap<usize>,
}

// Flattens a record into manifest rows. Availability is the minimum list
// length, so index i exists in every hotel's list for every emitted row;
// surplus rooms beyond the minimum never appear here.
pub fn roomlist_rows(record: &PackageRoomRecord) -> Vec<RoomlistRow> {
    let mut rows = Vec::with_capacity(record.total_slots());

    for class in OccupancyClass::ALL {
        let count = record.availability_for(class);
        for index in 0..count {
            let mut cells = Vec::with_capacity(2 + record.additional.len());
            cells.push(RoomCell {
                hotel: MEDINAH.to_string(),
                room_number: record.medinah.rooms_for(class)[index].clone(),
            });
            cells.push(RoomCell {
                hotel: MAKKAH.to_string(),
                room_number: record.makkah.rooms_for(class)[index].clone(),
            });
            for hotel in &record.additional {
                cells.push(RoomCell {
                    hotel: hotel.name.clone(),
                    room_number: hotel.rooms.rooms_for(class)[index].clone(),
                });
            }
            rows.push(RoomlistRow {
                slot: format!("{}{}", class.prefix(), index + 1),
                class,
                cells,
            });
        }
    }

    rows
}

// Raw per-hotel counts, before the minimum is taken. The availability
// display shows these next to the package-wide availability so data-entry
// mismatches stay visible.
pub fn per_hotel_counts(record: &PackageRoomRecord) -> Vec<HotelRoomCounts> {
    let mut counts = Vec::with_capacity(2 + record.additional.len());
    counts.push(HotelRoomCounts {
        hotel: MEDINAH.to_string(),
        counts: record.medinah.rooms.map(|_, rooms| rooms.len()),
    });
    counts.push(HotelRoomCounts {
        hotel: MAKKAH.to_string(),
        counts: record.makkah.rooms.map(|_, rooms| rooms.len()),
    });
    for hotel in &record.additional {
        counts.push(HotelRoomCounts {
            hotel: hotel.name.clone(),
            counts: hotel.rooms.rooms.map(|_, rooms| rooms.len()),
        });
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel::{AdditionalHotelInput, HotelRoomsInput, PackageRoomsInput};

    fn hotel_input(quad: &str, triple: &str, double: &str) -> HotelRoomsInput {
        HotelRoomsInput {
            quad: Some(quad.to_string()),
            triple: Some(triple.to_string()),
            double: Some(double.to_string()),
        }
    }

    fn sample_record() -> PackageRoomRecord {
        PackageRoomRecord::build(&PackageRoomsInput {
            medinah: hotel_input("101,102,103", "301,302", ""),
            makkah: hotel_input("201,202", "401,402,403", "501"),
            additional: vec![AdditionalHotelInput {
                name: "Hotel Aziziah".to_string(),
                rooms: hotel_input("601,602", "701,702", ""),
            }],
        })
    }

    #[test]
    fn test_one_row_per_slot_in_slot_order() {
        let record = sample_record();
        let rows = roomlist_rows(&record);

        assert_eq!(rows.len(), record.total_slots());
        let slots: Vec<_> = rows.iter().map(|row| row.slot.as_str()).collect();
        assert_eq!(slots, record.slot_identifiers);
    }

    #[test]
    fn test_rows_align_with_every_hotel_list() {
        let record = sample_record();
        let rows = roomlist_rows(&record);

        // Q2 pairs the second quad room of every hotel
        let q2 = rows.iter().find(|row| row.slot == "Q2").unwrap();
        assert_eq!(q2.class, OccupancyClass::Quad);
        assert_eq!(
            q2.cells,
            vec![
                RoomCell {
                    hotel: "Medinah".to_string(),
                    room_number: "102".to_string()
                },
                RoomCell {
                    hotel: "Makkah".to_string(),
                    room_number: "202".to_string()
                },
                RoomCell {
                    hotel: "Hotel Aziziah".to_string(),
                    room_number: "602".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_surplus_rooms_do_not_appear() {
        let record = sample_record();
        let rows = roomlist_rows(&record);

        // Medinah has a third quad room but availability is 2
        assert!(rows.iter().all(|row| row.slot != "Q3"));
        assert!(!rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .any(|cell| cell.room_number == "103"));
    }

    #[test]
    fn test_zero_class_contributes_no_rows() {
        let record = sample_record();
        let rows = roomlist_rows(&record);
        assert!(rows.iter().all(|row| row.class != OccupancyClass::Double));
    }

    #[test]
    fn test_per_hotel_counts_keep_raw_lengths() {
        let record = sample_record();
        let counts = per_hotel_counts(&record);

        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0].hotel, "Medinah");
        assert_eq!(counts[0].counts.quad, 3, "surplus stays visible");
        assert_eq!(counts[1].hotel, "Makkah");
        assert_eq!(counts[1].counts.double, 1);
        assert_eq!(counts[2].hotel, "Hotel Aziziah");
        assert_eq!(counts[2].counts.triple, 2);
    }

    #[test]
    fn test_rows_serialize_for_the_export_layer() {
        let record = sample_record();
        let rows = roomlist_rows(&record);
        let json = serde_json::to_value(&rows[0]).unwrap();

        assert_eq!(json["slot"], "Q1");
        assert_eq!(json["class"], "quad");
        assert_eq!(json["cells"][0]["hotel"], "Medinah");
        assert_eq!(json["cells"][0]["room_number"], "101");
    }
}
