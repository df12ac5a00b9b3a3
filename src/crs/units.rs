//! Linear units and the two origins a CRS selection can come from.

use std::fmt;

/// Meters per international foot.
pub const FEET_TO_METERS: f64 = 0.3048;

/// Meters per US survey foot.
pub const SURVEY_FEET_TO_METERS: f64 = 0.3048006096012;

/// A linear unit, for horizontal coordinates or for elevations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinearUnit {
    /// Meters, EPSG 9001.
    Meter,
    /// International feet, EPSG 9002.
    Foot,
    /// US survey feet, EPSG 9003.
    SurveyFoot,
}

impl LinearUnit {
    /// Returns the unit for a linear units geokey value.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::LinearUnit;
    /// assert_eq!(Some(LinearUnit::SurveyFoot), LinearUnit::from_geokey(9003));
    /// assert_eq!(None, LinearUnit::from_geokey(9004));
    /// ```
    pub fn from_geokey(value: u16) -> Option<LinearUnit> {
        match value {
            9001 => Some(LinearUnit::Meter),
            9002 => Some(LinearUnit::Foot),
            9003 => Some(LinearUnit::SurveyFoot),
            _ => None,
        }
    }

    /// Returns the length of one unit in meters.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::LinearUnit;
    /// assert_eq!(1.0, LinearUnit::Meter.meters());
    /// assert_eq!(0.3048, LinearUnit::Foot.meters());
    /// ```
    pub fn meters(&self) -> f64 {
        match *self {
            LinearUnit::Meter => 1.0,
            LinearUnit::Foot => FEET_TO_METERS,
            LinearUnit::SurveyFoot => SURVEY_FEET_TO_METERS,
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LinearUnit::Meter => write!(f, "meter"),
            LinearUnit::Foot => write!(f, "foot"),
            LinearUnit::SurveyFoot => write!(f, "US survey foot"),
        }
    }
}

/// Where a selection came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Decoded from the file's geokeys.
    GeoKeys,
    /// Declared by the user, overriding the file.
    User,
}

impl Origin {
    pub(crate) fn index(self) -> usize {
        match self {
            Origin::GeoKeys => 0,
            Origin::User => 1,
        }
    }
}
