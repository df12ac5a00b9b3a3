//! Programmatically determine whether a las version supports a feature.
//!
//! Features are structures that implement the [Feature] trait. Each feature is introduced by a
//! minor version and stays defined for every later 1.x version. The most common way to use
//! features is via [Version::supports]:
//!
//! ```
//! use las_validate::feature::Waveforms;
//! use las_validate::Version;
//!
//! assert!(!Version::new(1, 2).supports::<Waveforms>());
//! assert!(Version::new(1, 4).supports::<Waveforms>());
//! ```

use crate::Version;

const MAJOR: u8 = 1;

/// A trait implemented by each feature.
pub trait Feature {
    /// Is this feature supported by this version?
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::feature::{Waveforms, Feature};
    /// use las_validate::Version;
    /// assert!(!Waveforms::is_supported_by(Version::new(1, 2)));
    /// assert!(Waveforms::is_supported_by(Version::new(1, 4)));
    /// ```
    fn is_supported_by(version: Version) -> bool;

    /// Returns the name of this feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::feature::{Waveforms, Feature};
    /// assert_eq!("Waveforms", Waveforms::name());
    /// ```
    fn name() -> &'static str;
}

macro_rules! features {
    (   $(
            $(#[$meta:meta])*
            $name:ident ($since:expr);
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug)]
            pub struct $name {}

            impl Feature for $name {
                fn is_supported_by(version: Version) -> bool {
                    version.major == MAJOR && version.minor >= $since
                }

                fn name() -> &'static str {
                    stringify!($name)
                }
            }
        )+
    }
}

features! {
    /// Is bit 0 of the global encoding (GPS standard time) defined?
    GpsStandardTime(1);
    /// Are bits 1 and 2 of the global encoding (internal and external waveforms) defined, and
    /// does the header carry the start of the waveform data packet record?
    Waveforms(3);
    /// Is bit 3 of the global encoding (synthetic return numbers) defined?
    SyntheticReturnNumbers(3);
    /// Is bit 4 of the global encoding (OGC WKT coordinate reference system) defined?
    Wkt(4);
    /// Does this file support 64-bit point counts?
    LargeFiles(4);
    /// Does this file support extended variable length records?
    Evlrs(4);
}
