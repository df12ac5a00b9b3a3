//! Global properties about LAS data.

use std::fmt;

const GPS_STANDARD_TIME: u16 = 1;
const INTERNAL_WAVEFORMS: u16 = 2;
const EXTERNAL_WAVEFORMS: u16 = 4;
const SYNTHETIC_RETURN_NUMBERS: u16 = 8;
const WKT: u16 = 16;

/// The largest global encoding with only defined bits set.
pub const MAX_DEFINED: u16 = 31;

/// The global encoding bit field, as stored.
///
/// | Bit | Meaning | Defined since |
/// | --- | ------- | ------------- |
/// | 0 | GPS time is standard GPS time minus 1e9 | 1.1 |
/// | 1 | Waveform data packets are internal | 1.3 |
/// | 2 | Waveform data packets are external | 1.3 |
/// | 3 | Return numbers are synthetic | 1.3 |
/// | 4 | The CRS is OGC WKT | 1.4 |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlobalEncoding(u16);

impl GlobalEncoding {
    /// Returns the gps time type declared by bit 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{GlobalEncoding, GpsTime};
    /// assert_eq!(GpsTime::Week, GlobalEncoding::from(0).gps_time());
    /// assert_eq!(GpsTime::Standard, GlobalEncoding::from(1).gps_time());
    /// ```
    pub fn gps_time(&self) -> GpsTime {
        if self.0 & GPS_STANDARD_TIME == GPS_STANDARD_TIME {
            GpsTime::Standard
        } else {
            GpsTime::Week
        }
    }

    /// Is bit 1 set?
    pub fn has_internal_waveforms(&self) -> bool {
        self.0 & INTERNAL_WAVEFORMS == INTERNAL_WAVEFORMS
    }

    /// Is bit 2 set?
    pub fn has_external_waveforms(&self) -> bool {
        self.0 & EXTERNAL_WAVEFORMS == EXTERNAL_WAVEFORMS
    }

    /// Is bit 3 set?
    pub fn has_synthetic_return_numbers(&self) -> bool {
        self.0 & SYNTHETIC_RETURN_NUMBERS == SYNTHETIC_RETURN_NUMBERS
    }

    /// Is bit 4 set?
    pub fn has_wkt_crs(&self) -> bool {
        self.0 & WKT == WKT
    }

    /// Are any of the reserved bits 5 through 15 set?
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::GlobalEncoding;
    /// assert!(!GlobalEncoding::from(31).has_reserved_bits());
    /// assert!(GlobalEncoding::from(32).has_reserved_bits());
    /// ```
    pub fn has_reserved_bits(&self) -> bool {
        self.0 > MAX_DEFINED
    }
}

impl From<u16> for GlobalEncoding {
    fn from(n: u16) -> GlobalEncoding {
        GlobalEncoding(n)
    }
}

impl From<GlobalEncoding> for u16 {
    fn from(global_encoding: GlobalEncoding) -> u16 {
        global_encoding.0
    }
}

/// The GPS time type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GpsTime {
    /// GPS time in the point records in GPS week time.
    ///
    /// This is the same as all time records in LAS 1.0 and 1.1.
    Week,
    /// GPS time is standard GPS time (satellite GPS time) minus 1e9.
    Standard,
}

impl fmt::Display for GpsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GpsTime::Week => write!(f, "GPS week time"),
            GpsTime::Standard => write!(f, "GPS standard time"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gps_time_type() {
        assert_eq!(GpsTime::Week, GlobalEncoding::from(0).gps_time());
        assert_eq!(GpsTime::Standard, GlobalEncoding::from(1).gps_time());
        assert_eq!(GpsTime::Standard, GlobalEncoding::from(17).gps_time());
    }

    #[test]
    fn bits() {
        let encoding = GlobalEncoding::from(0b11110);
        assert!(encoding.has_internal_waveforms());
        assert!(encoding.has_external_waveforms());
        assert!(encoding.has_synthetic_return_numbers());
        assert!(encoding.has_wkt_crs());
        assert!(!encoding.has_reserved_bits());
        assert_eq!(30u16, encoding.into());
    }
}
