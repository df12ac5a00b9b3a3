//! Variable length records are used to store additional metadata not defined in the header.
//!
//! Only a few records matter when checking a file: the `LASF_Projection` records that carry the
//! GeoTIFF geokeys and the OGC WKT string. Everything else is kept so its size can be accounted
//! for.
//!
//! ```
//! use las_validate::Vlr;
//! let vlr = Vlr::projection(34735, vec![1, 0, 1, 0, 0, 0, 0, 0]);
//! assert!(vlr.is_projection());
//! assert!(!vlr.is_wkt_crs());
//! assert_eq!(62, vlr.len());
//! ```

use crate::{Error, Result, raw};

const HEADER_SIZE: usize = 54;
const EVLR_HEADER_SIZE: usize = 60;

/// The user id of the CRS records.
pub const PROJECTION_USER_ID: &str = "LASF_Projection";

/// The record id of an OGC WKT coordinate system.
pub const WKT_RECORD_ID: u16 = 2112;

/// A variable length record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vlr {
    /// The user that created this record.
    ///
    /// This value is often an official, "registered" user_id, such as "LASF_Spec" or
    /// "LASF_Projection".
    pub user_id: String,

    /// This value specifies the type of record, and depends on the user id.
    pub record_id: u16,

    /// Textual description of these data.
    pub description: String,

    /// The data themselves.
    pub data: Vec<u8>,

    /// Was this vlr stored after the points?
    pub is_extended: bool,
}

impl Vlr {
    /// Creates a vlr from a raw vlr.
    ///
    /// Strings stop at the first null. Invalid utf-8 is replaced, not rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Vlr, raw};
    /// let vlr = Vlr::new(raw::Vlr {
    ///     user_id: *b"LASF_Projection\0",
    ///     ..Default::default()
    /// });
    /// assert_eq!("LASF_Projection", vlr.user_id);
    /// ```
    pub fn new(raw_vlr: raw::Vlr) -> Vlr {
        Vlr {
            user_id: las_string(&raw_vlr.user_id),
            record_id: raw_vlr.record_id,
            description: las_string(&raw_vlr.description),
            is_extended: raw_vlr.is_extended(),
            data: raw_vlr.data,
        }
    }

    /// Creates a `LASF_Projection` vlr.
    pub fn projection(record_id: u16, data: Vec<u8>) -> Vlr {
        Vlr {
            user_id: PROJECTION_USER_ID.to_string(),
            record_id,
            data,
            ..Default::default()
        }
    }

    /// Converts this vlr to a raw vlr.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::Vlr;
    /// let raw_vlr = Vlr::projection(2112, b"GEOGCS[]".to_vec()).into_raw().unwrap();
    /// assert_eq!(*b"LASF_Projection\0", raw_vlr.user_id);
    /// ```
    pub fn into_raw(self) -> Result<raw::Vlr> {
        let record_length_after_header = if self.is_extended {
            raw::RecordLength::Evlr(self.data.len() as u64)
        } else {
            raw::RecordLength::Vlr(
                u16::try_from(self.data.len()).map_err(|_| Error::VlrTooLong(self.data.len()))?,
            )
        };
        Ok(raw::Vlr {
            reserved: 0,
            user_id: las_bytes(&self.user_id, "user id")?,
            record_id: self.record_id,
            record_length_after_header,
            description: las_bytes(&self.description, "description")?,
            data: self.data,
        })
    }

    /// Returns the total length of this vlr, header and data.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::Vlr;
    /// let mut vlr = Vlr::default();
    /// assert_eq!(54, vlr.len());
    /// vlr.is_extended = true;
    /// assert_eq!(60, vlr.len());
    /// ```
    pub fn len(&self) -> usize {
        if self.is_extended {
            EVLR_HEADER_SIZE + self.data.len()
        } else {
            HEADER_SIZE + self.data.len()
        }
    }

    /// Returns true if the data of this vlr are empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Is this a `LASF_Projection` record?
    pub fn is_projection(&self) -> bool {
        self.user_id == PROJECTION_USER_ID
    }

    /// Does this record hold an OGC WKT coordinate system?
    pub fn is_wkt_crs(&self) -> bool {
        self.is_projection() && self.record_id == WKT_RECORD_ID
    }
}

fn las_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

fn las_bytes<const N: usize>(s: &str, field: &'static str) -> Result<[u8; N]> {
    let mut bytes = [0; N];
    if s.len() > N {
        return Err(Error::StringTooLong {
            field,
            len: s.len(),
            max: N,
        });
    }
    bytes[..s.len()].copy_from_slice(s.as_bytes());
    Ok(bytes)
}
