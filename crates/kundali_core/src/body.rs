//! The nine chart bodies and the five Keplerian planets.

use serde::{Deserialize, Serialize};

/// A body placed in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All 9 bodies in traditional (graha) order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    /// All bodies in traditional order.
    pub const fn all() -> &'static [Body; 9] {
        &ALL_BODIES
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Sanskrit (graha) name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Budha",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// The Keplerian planet behind this body, if any.
    pub const fn as_planet(self) -> Option<Planet> {
        match self {
            Self::Mercury => Some(Planet::Mercury),
            Self::Venus => Some(Planet::Venus),
            Self::Mars => Some(Planet::Mars),
            Self::Jupiter => Some(Planet::Jupiter),
            Self::Saturn => Some(Planet::Saturn),
            Self::Sun | Self::Moon | Self::Rahu | Self::Ketu => None,
        }
    }

    /// True for Rahu and Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A planet whose position comes from mean orbital elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All 5 planets in heliocentric distance order.
pub const ALL_PLANETS: [Planet; 5] = [
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
];

impl Planet {
    pub const fn all() -> &'static [Planet; 5] {
        &ALL_PLANETS
    }

    pub const fn body(self) -> Body {
        match self {
            Self::Mercury => Body::Mercury,
            Self::Venus => Body::Venus,
            Self::Mars => Body::Mars,
            Self::Jupiter => Body::Jupiter,
            Self::Saturn => Body::Saturn,
        }
    }

    pub const fn name(self) -> &'static str {
        self.body().name()
    }
}
