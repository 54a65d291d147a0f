// Main library file for the package room-inventory engine

// Export modules for each part of the engine
pub mod availability;
pub mod hotel;
pub mod occupancy;
pub mod record;
pub mod roomlist;
pub mod roomlist_view;
pub mod slots;

// Re-export key types for convenience
pub use availability::{compute_availability, total_slots};
pub use hotel::{
    AdditionalHotel, AdditionalHotelInput, HotelRoomSet, HotelRoomsInput, PackageRoomsInput,
    MAKKAH, MEDINAH,
};
pub use occupancy::{ClassMap, OccupancyClass};
pub use record::{
    InventoryError, PackageRoomRecord, RoomNumbersField, StoredAdditionalHotel,
    StoredPackageRooms, StoredRoomSet,
};
pub use roomlist::{normalize_room_list, parse_room_list};
pub use roomlist_view::{per_hotel_counts, roomlist_rows, HotelRoomCounts, RoomCell, RoomlistRow};
pub use slots::generate_slot_identifiers;
