// Occupancy classes and the per-class record used throughout the engine

use serde::{Deserialize, Serialize};

// Closed set of room occupancy classes. The order Quad, Triple, Double is
// significant: availability is reported and slot identifiers are emitted in
// this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyClass {
    Quad,
    Triple,
    Double,
}

impl OccupancyClass {
    pub const ALL: [OccupancyClass; 3] = [
        OccupancyClass::Quad,
        OccupancyClass::Triple,
        OccupancyClass::Double,
    ];

    // One-letter prefix used in slot identifiers (Q1, T2, D3, ...)
    pub fn prefix(&self) -> &'static str {
        match self {
            OccupancyClass::Quad => "Q",
            OccupancyClass::Triple => "T",
            OccupancyClass::Double => "D",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OccupancyClass::Quad => "Quad",
            OccupancyClass::Triple => "Triple",
            OccupancyClass::Double => "Double",
        }
    }
}

// One value per occupancy class. Replaces the loosely-typed per-class maps
// of the original data: every class is always present, no string keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMap<T> {
    pub quad: T,
    pub triple: T,
    pub double: T,
}

impl<T> ClassMap<T> {
    pub fn get(&self, class: OccupancyClass) -> &T {
        match class {
            OccupancyClass::Quad => &self.quad,
            OccupancyClass::Triple => &self.triple,
            OccupancyClass::Double => &self.double,
        }
    }

    pub fn get_mut(&mut self, class: OccupancyClass) -> &mut T {
        match class {
            OccupancyClass::Quad => &mut self.quad,
            OccupancyClass::Triple => &mut self.triple,
            OccupancyClass::Double => &mut self.double,
        }
    }

    // Builds a map by calling `f` once per class, in Quad, Triple, Double
    // order.
    pub fn from_fn(mut f: impl FnMut(OccupancyClass) -> T) -> Self {
        Self {
            quad: f(OccupancyClass::Quad),
            triple: f(OccupancyClass::Triple),
            double: f(OccupancyClass::Double),
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(OccupancyClass, &T) -> U) -> ClassMap<U> {
        ClassMap {
            quad: f(OccupancyClass::Quad, &self.quad),
            triple: f(OccupancyClass::Triple, &self.triple),
            double: f(OccupancyClass::Double, &self.double),
        }
    }

    // Iterates in the fixed class order.
    pub fn iter(&self) -> impl Iterator<Item = (OccupancyClass, &T)> + '_ {
        OccupancyClass::ALL
            .into_iter()
            .map(move |class| (class, self.get(class)))
    }
}
