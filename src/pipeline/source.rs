use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SightingTime(pub String);

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for SightingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the pipeline's "fetched" data comes from.
pub trait SightingSource: Send + Sync {
    fn locate(&self) -> Location;
    fn geocode(&self, location: &Location) -> Coordinates;
    fn predict(&self, coords: &Coordinates) -> SightingTime;
}

/// Fixed placeholder answers standing in for real lookups.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderSource;

impl PlaceholderSource {
    pub const LOCATION: &'static str = "Boston";
    pub const COORDINATES: &'static str = "42/71";
    pub const SIGHTING_TIME: &'static str = "Thu Oct 5, 7:33 PM";
}

impl SightingSource for PlaceholderSource {
    fn locate(&self) -> Location {
        Location(Self::LOCATION.to_string())
    }

    fn geocode(&self, _location: &Location) -> Coordinates {
        Coordinates(Self::COORDINATES.to_string())
    }

    fn predict(&self, _coords: &Coordinates) -> SightingTime {
        SightingTime(Self::SIGHTING_TIME.to_string())
    }
}
