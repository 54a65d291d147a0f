// Room list parsing: raw admin text fields into ordered room-number tokens

// Splits a comma-separated room field into tokens. Surrounding whitespace is
// trimmed and tokens that end up empty are dropped; everything else is
// accepted as an opaque string, duplicates included. An empty field yields
// an empty list, never an error.
pub fn parse_room_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

// Applies the same trim/drop-empty rules to a list that is already
// structured, e.g. room lists reloaded from storage. Order is preserved.
pub fn normalize_room_list(rooms: Vec<String>) -> Vec<String> {
    rooms
        .into_iter()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}
