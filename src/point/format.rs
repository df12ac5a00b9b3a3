use crate::{Error, Result};
use std::fmt;

const MAX_FORMAT: u8 = 10;
const LEGACY_BASE_LENGTH: u16 = 20;
const EXTENDED_BASE_LENGTH: u16 = 30;
const GPS_TIME_LENGTH: u16 = 8;
const COLOR_LENGTH: u16 = 6;
const NIR_LENGTH: u16 = 2;
const WAVEFORM_LENGTH: u16 = 29;

/// Point record format type.
///
/// Only formats 0 through 10 exist, so a `Format` can only be created through [Format::new].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Format(u8);

impl Format {
    /// Creates a new point format.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::point::Format;
    /// assert!(Format::new(10).is_ok());
    /// assert!(Format::new(11).is_err());
    /// ```
    pub fn new(n: u8) -> Result<Format> {
        if n > MAX_FORMAT {
            Err(Error::UnsupportedPointFormat(n))
        } else {
            Ok(Format(n))
        }
    }

    /// Does this point format have a gps_time field?
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::point::Format;
    /// assert!(!Format::new(0).unwrap().has_gps_time());
    /// assert!(Format::new(1).unwrap().has_gps_time());
    /// assert!(Format::new(6).unwrap().has_gps_time());
    /// ```
    pub fn has_gps_time(&self) -> bool {
        !matches!(self.0, 0 | 2)
    }

    /// Does this point format have color fields?
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::point::Format;
    /// assert!(!Format::new(1).unwrap().has_color());
    /// assert!(Format::new(2).unwrap().has_color());
    /// ```
    pub fn has_color(&self) -> bool {
        matches!(self.0, 2 | 3 | 5 | 7 | 8 | 10)
    }

    /// Does this point format have a near infrared channel?
    pub fn has_nir(&self) -> bool {
        matches!(self.0, 8 | 10)
    }

    /// Does this point format carry a waveform packet descriptor?
    pub fn has_waveform(&self) -> bool {
        matches!(self.0, 4 | 5 | 9 | 10)
    }

    /// Does this point format use the 1.4 extended layout, with four bit return numbers?
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::point::Format;
    /// assert!(!Format::new(5).unwrap().is_extended());
    /// assert!(Format::new(6).unwrap().is_extended());
    /// ```
    pub fn is_extended(&self) -> bool {
        self.0 >= 6
    }

    /// The length of a standard point in this format.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::point::Format;
    /// assert_eq!(20, Format::new(0).unwrap().record_length());
    /// assert_eq!(67, Format::new(10).unwrap().record_length());
    /// ```
    pub fn record_length(&self) -> u16 {
        let mut length = if self.is_extended() {
            EXTENDED_BASE_LENGTH
        } else {
            LEGACY_BASE_LENGTH
        };
        if self.has_gps_time() && !self.is_extended() {
            length += GPS_TIME_LENGTH;
        }
        if self.has_color() {
            length += COLOR_LENGTH;
        }
        if self.has_nir() {
            length += NIR_LENGTH;
        }
        if self.has_waveform() {
            length += WAVEFORM_LENGTH;
        }
        length
    }
}

/// Returns the smallest legal record length for a point format id, including ids that aren't
/// formats at all (those get the format 0 length).
///
/// # Examples
///
/// ```
/// # use las_validate::point::minimum_record_length;
/// assert_eq!(57, minimum_record_length(4));
/// assert_eq!(20, minimum_record_length(42));
/// ```
pub fn minimum_record_length(id: u8) -> u16 {
    Format::new(id)
        .map(|format| format.record_length())
        .unwrap_or(LEGACY_BASE_LENGTH)
}

impl From<Format> for u8 {
    fn from(format: Format) -> u8 {
        format.0
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point format {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(n: u8) -> Format {
        Format::new(n).unwrap()
    }

    #[test]
    fn has_gps_time() {
        for n in [0, 2] {
            assert!(!format(n).has_gps_time(), "{}", n);
        }
        for n in [1, 3, 4, 5, 6, 7, 8, 9, 10] {
            assert!(format(n).has_gps_time(), "{}", n);
        }
    }

    #[test]
    fn has_color() {
        for n in [2, 3, 5, 7, 8, 10] {
            assert!(format(n).has_color(), "{}", n);
        }
        for n in [0, 1, 4, 6, 9] {
            assert!(!format(n).has_color(), "{}", n);
        }
    }

    #[test]
    fn record_length() {
        let expected = [20, 28, 26, 34, 57, 63, 30, 36, 38, 59, 67];
        for (n, length) in expected.into_iter().enumerate() {
            assert_eq!(length, format(n as u8).record_length(), "{}", n);
        }
    }

    #[test]
    fn unknown_formats() {
        assert!(Format::new(11).is_err());
        assert_eq!(20, minimum_record_length(11));
        assert_eq!(20, minimum_record_length(u8::MAX));
    }

    #[test]
    fn display() {
        assert_eq!("point format 3", format(3).to_string());
    }
}
