// Availability: complete room slots per occupancy class across all hotels

use crate::hotel::{AdditionalHotel, HotelRoomSet};
use crate::occupancy::{ClassMap, OccupancyClass};

// For each class the package-wide availability is the minimum room-list
// length across every participating hotel: a slot only exists if every hotel
// has a room for it. A hotel with no rooms in a class therefore zeroes that
// class for the whole package, which is a normal outcome rather than an
// error. Pure function: no input is mutated.
pub fn compute_availability(
    medinah: &HotelRoomSet,
    makkah: &HotelRoomSet,
    additional: &[AdditionalHotel],
) -> ClassMap<usize> {
    ClassMap::from_fn(|class| {
        // Seeded from the two mandatory hotels, so zero additional hotels
        // still yields a defined minimum.
        let seed = medinah.room_count(class).min(makkah.room_count(class));
        additional
            .iter()
            .fold(seed, |min, hotel| min.min(hotel.rooms.room_count(class)))
    })
}

// Total number of slots across all classes.
pub fn total_slots(availability: &ClassMap<usize>) -> usize {
    availability.iter().map(|(_, &count)| count).sum()
}
