use crate::feature::{Feature, LargeFiles, Waveforms};
use std::fmt;

const MINIMUM_HEADER_SIZE: u16 = 227;

/// LAS version.
///
/// Versions compare by major, then minor.
///
/// ```
/// use las_validate::Version;
/// assert!(Version::new(1, 2) < Version::new(1, 4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// The major version.
    ///
    /// Should always be 1.
    pub major: u8,
    /// The minor version.
    pub minor: u8,
}

impl Version {
    /// Creates a new version.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Version;
    /// let version = Version::new(1, 2);
    /// ```
    pub fn new(major: u8, minor: u8) -> Version {
        Version { major, minor }
    }

    /// Does this version support the feature?
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Version;
    /// use las_validate::feature::Waveforms;
    /// assert!(Version::new(1, 3).supports::<Waveforms>());
    /// assert!(!Version::new(1, 2).supports::<Waveforms>());
    /// ```
    pub fn supports<F: Feature>(&self) -> bool {
        F::is_supported_by(*self)
    }

    /// Returns true if this is a 1.x version with a minor version of at least `minor`.
    ///
    /// Major versions other than 1 never pass, which keeps every version-gated rule quiet for
    /// them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Version;
    /// assert!(Version::new(1, 4).is_at_least(3));
    /// assert!(!Version::new(2, 4).is_at_least(3));
    /// ```
    pub fn is_at_least(&self, minor: u8) -> bool {
        self.major == 1 && self.minor >= minor
    }

    /// Returns true if this is a 1.x version with a minor version of at most `minor`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Version;
    /// assert!(Version::new(1, 2).is_at_most(2));
    /// assert!(!Version::new(2, 0).is_at_most(2));
    /// ```
    pub fn is_at_most(&self, minor: u8) -> bool {
        self.major == 1 && self.minor <= minor
    }

    /// Returns the smallest legal size of the public header block.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Version;
    /// assert_eq!(227, Version::new(1, 2).minimum_header_size());
    /// assert_eq!(235, Version::new(1, 3).minimum_header_size());
    /// assert_eq!(375, Version::new(1, 4).minimum_header_size());
    /// ```
    pub fn minimum_header_size(&self) -> u16 {
        let mut size = MINIMUM_HEADER_SIZE;
        if self.supports::<Waveforms>() {
            size += 8;
        }
        if self.supports::<LargeFiles>() {
            size += 40;
        }
        size
    }

    /// Returns the largest point data format defined by this version.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Version;
    /// assert_eq!(1, Version::new(1, 1).max_point_format());
    /// assert_eq!(3, Version::new(1, 2).max_point_format());
    /// assert_eq!(10, Version::new(1, 4).max_point_format());
    /// ```
    pub fn max_point_format(&self) -> u8 {
        match (self.major, self.minor) {
            (1, 2) => 3,
            (1, 3) => 5,
            (1, 4) => 10,
            _ => 1,
        }
    }
}

impl Default for Version {
    fn default() -> Version {
        Version::new(1, 2)
    }
}

impl From<(u8, u8)> for Version {
    fn from((major, minor): (u8, u8)) -> Version {
        Version::new(major, minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
