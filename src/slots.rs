// Canonical slot identifiers derived from per-class availability counts

use crate::availability::total_slots;
use crate::occupancy::{ClassMap, OccupancyClass};

// Generates the ordered slot-identifier sequence: Q1..Qn, then T1..Tn, then
// D1..Dn, numbered from 1 within each class. The identifiers depend only on
// the counts, never on the room numbers themselves, so two packages with the
// same availability share the same slot shape. Classes with zero
// availability contribute nothing.
pub fn generate_slot_identifiers(availability: &ClassMap<usize>) -> Vec<String> {
    let mut identifiers = Vec::with_capacity(total_slots(availability));
    for class in OccupancyClass::ALL {
        let count = *availability.get(class);
        for number in 1..=count {
            identifiers.push(format!("{}{}", class.prefix(), number));
        }
    }
    identifiers
}
