//! The public header block, with its variable length records.
//!
//! A [Header] keeps every field exactly as stored, including values that break the rules, so
//! the checker can report them. The only interpretation done up front is decoding the GeoTIFF
//! geokeys and lining up the 32-bit and 64-bit point counts.

use crate::crs::GeoKeys;
use crate::feature::{Evlrs, LargeFiles, Waveforms};
use crate::point::Format;
use crate::{Bounds, GlobalEncoding, Result, Transform, Vector, Version, Vlr, raw};
use log::{Level, log};

/// Metadata describing the layout, source, and interpretation of the points.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    /// The file signature, "LASF" in a good file.
    pub file_signature: [u8; 4],

    /// The file source id.
    pub file_source_id: u16,

    /// The global encoding bit field.
    pub global_encoding: GlobalEncoding,

    /// The project id.
    pub guid: [u8; 16],

    /// The las version.
    pub version: Version,

    /// The system identifier, as stored.
    pub system_identifier: [u8; 32],

    /// The generating software, as stored.
    pub generating_software: [u8; 32],

    /// The file creation day of year.
    pub file_creation_day_of_year: u16,

    /// The file creation year.
    pub file_creation_year: u16,

    /// The declared size of the header.
    pub header_size: u16,

    /// The declared offset to the point data.
    pub offset_to_point_data: u32,

    /// The point data format id, as stored.
    pub point_data_format_id: u8,

    /// The declared length of one point record.
    pub point_data_record_length: u16,

    /// The 32-bit number of point records.
    pub legacy_number_of_point_records: u32,

    /// The 32-bit number of points for returns one through five.
    pub legacy_number_of_points_by_return: [u32; 5],

    /// The number of point records.
    ///
    /// Before las 1.4 this mirrors the legacy count.
    pub number_of_point_records: u64,

    /// The number of points for returns one through fifteen.
    ///
    /// Before las 1.4 the first five mirror the legacy counts and the rest are zero.
    pub number_of_points_by_return: [u64; 15],

    /// The scales and offsets.
    pub transforms: Vector<Transform>,

    /// The declared bounds.
    pub bounds: Bounds,

    /// The start of the waveform data packet record, zero when absent.
    pub start_of_waveform_data_packet_record: u64,

    /// The location and count of extended vlrs.
    pub evlr: raw::Evlr,

    /// Bytes between the last defined field and the declared header size.
    pub padding: Vec<u8>,

    /// The variable length records, regular and extended.
    pub vlrs: Vec<Vlr>,

    /// The geokeys, if there is a geokey directory.
    pub geokeys: Option<GeoKeys>,
}

impl Header {
    /// Creates a header from a raw header and its vlrs.
    ///
    /// A geokey directory that can't be decoded is kept as an empty one, so the file still
    /// counts as having geokeys, just none that resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Header, raw};
    /// let header = Header::new(raw::Header::default(), Vec::new());
    /// assert!(header.geokeys.is_none());
    /// ```
    pub fn new(raw_header: raw::Header, vlrs: Vec<Vlr>) -> Header {
        let geokeys = GeoKeys::from_vlrs(&vlrs).unwrap_or_else(|err| {
            log!(Level::Warn, "{}, keeping an empty geokey directory", err);
            Some(GeoKeys::default())
        });
        let (number_of_point_records, number_of_points_by_return) = match raw_header.large_file {
            Some(large_file) => (
                large_file.number_of_point_records,
                large_file.number_of_points_by_return,
            ),
            None => {
                let mut number_of_points_by_return = [0; 15];
                for (n, &legacy) in number_of_points_by_return
                    .iter_mut()
                    .zip(&raw_header.number_of_points_by_return)
                {
                    *n = u64::from(legacy);
                }
                (
                    u64::from(raw_header.number_of_point_records),
                    number_of_points_by_return,
                )
            }
        };
        let header = Header {
            file_signature: raw_header.file_signature,
            file_source_id: raw_header.file_source_id,
            global_encoding: raw_header.global_encoding.into(),
            guid: raw_header.guid,
            version: raw_header.version,
            system_identifier: raw_header.system_identifier,
            generating_software: raw_header.generating_software,
            file_creation_day_of_year: raw_header.file_creation_day_of_year,
            file_creation_year: raw_header.file_creation_year,
            header_size: raw_header.header_size,
            offset_to_point_data: raw_header.offset_to_point_data,
            point_data_format_id: raw_header.point_data_format_id,
            point_data_record_length: raw_header.point_data_record_length,
            legacy_number_of_point_records: raw_header.number_of_point_records,
            legacy_number_of_points_by_return: raw_header.number_of_points_by_return,
            number_of_point_records,
            number_of_points_by_return,
            transforms: Vector::from(
                [0, 1, 2].map(|i| Transform {
                    scale: raw_header.scale_factors[i],
                    offset: raw_header.offsets[i],
                }),
            ),
            bounds: Bounds {
                min: raw_header.min.into(),
                max: raw_header.max.into(),
            },
            start_of_waveform_data_packet_record: raw_header
                .start_of_waveform_data_packet_record
                .unwrap_or(0),
            evlr: raw_header.evlr.unwrap_or_default(),
            padding: raw_header.padding,
            vlrs,
            geokeys,
        };
        if header.global_encoding.has_wkt_crs() != header.wkt_crs().is_some() {
            log!(
                Level::Debug,
                "global encoding wkt bit is {} but a wkt vlr is {}",
                header.global_encoding.has_wkt_crs(),
                if header.wkt_crs().is_some() {
                    "present"
                } else {
                    "absent"
                }
            );
        }
        header
    }

    /// Converts this header into a raw header.
    ///
    /// The vlr count is the number of regular vlrs. 64-bit counts are only written for las 1.4
    /// and up.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::Header;
    /// let raw_header = Header::default().into_raw();
    /// assert_eq!(227, raw_header.header_size);
    /// ```
    pub fn into_raw(&self) -> raw::Header {
        raw::Header {
            file_signature: self.file_signature,
            file_source_id: self.file_source_id,
            global_encoding: self.global_encoding.into(),
            guid: self.guid,
            version: self.version,
            system_identifier: self.system_identifier,
            generating_software: self.generating_software,
            file_creation_day_of_year: self.file_creation_day_of_year,
            file_creation_year: self.file_creation_year,
            header_size: self.header_size,
            offset_to_point_data: self.offset_to_point_data,
            number_of_variable_length_records: u32::try_from(self.vlrs().count())
                .unwrap_or(u32::MAX),
            point_data_format_id: self.point_data_format_id,
            point_data_record_length: self.point_data_record_length,
            number_of_point_records: self.legacy_number_of_point_records,
            number_of_points_by_return: self.legacy_number_of_points_by_return,
            scale_factors: self.transforms.map(|transform| transform.scale).into(),
            offsets: self.transforms.map(|transform| transform.offset).into(),
            max: self.bounds.max.into(),
            min: self.bounds.min.into(),
            start_of_waveform_data_packet_record: if self.version.supports::<Waveforms>() {
                Some(self.start_of_waveform_data_packet_record)
            } else {
                None
            },
            evlr: if self.version.supports::<Evlrs>() {
                Some(self.evlr)
            } else {
                None
            },
            large_file: if self.version.supports::<LargeFiles>() {
                Some(raw::LargeFile {
                    number_of_point_records: self.number_of_point_records,
                    number_of_points_by_return: self.number_of_points_by_return,
                })
            } else {
                None
            },
            padding: self.padding.clone(),
        }
    }

    /// Is the point data compressed?
    pub fn is_compressed(&self) -> bool {
        self.point_data_format_id & raw::COMPRESSED_BIT != 0
    }

    /// Returns the point data format id without the compression bit.
    ///
    /// The rules check this id, so a compressed file is held to the same rules as its
    /// uncompressed form.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::Header;
    /// let mut header = Header::default();
    /// header.point_data_format_id = 131;
    /// assert!(header.is_compressed());
    /// assert_eq!(3, header.point_data_format());
    /// ```
    pub fn point_data_format(&self) -> u8 {
        self.point_data_format_id & !raw::COMPRESSED_BIT
    }

    /// Returns the point format, if the format id is one that can be decoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::Header;
    /// let mut header = Header::default();
    /// assert!(header.point_format().is_ok());
    /// header.point_data_format_id = 131;
    /// assert!(header.point_format().is_err());
    /// ```
    pub fn point_format(&self) -> Result<Format> {
        Format::new(self.point_data_format_id)
    }

    /// Returns an iterator over the regular vlrs.
    pub fn vlrs(&self) -> impl Iterator<Item = &Vlr> {
        self.vlrs.iter().filter(|vlr| !vlr.is_extended)
    }

    /// Returns an iterator over the extended vlrs.
    pub fn evlrs(&self) -> impl Iterator<Item = &Vlr> {
        self.vlrs.iter().filter(|vlr| vlr.is_extended)
    }

    /// Returns the combined size of the regular vlrs, headers included.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Header, Vlr};
    /// let mut header = Header::default();
    /// header.vlrs.push(Vlr { data: vec![0; 10], ..Default::default() });
    /// header.vlrs.push(Vlr { is_extended: true, ..Default::default() });
    /// assert_eq!(64, header.vlr_len());
    /// ```
    pub fn vlr_len(&self) -> u64 {
        self.vlrs().map(|vlr| vlr.len() as u64).sum()
    }

    /// Returns the OGC WKT coordinate system, if there is one, from a vlr or an extended vlr.
    pub fn wkt_crs(&self) -> Option<&[u8]> {
        self.vlrs
            .iter()
            .find(|vlr| vlr.is_wkt_crs())
            .map(|vlr| vlr.data.as_slice())
    }
}

impl Default for Header {
    fn default() -> Header {
        let version = Version::new(1, 2);
        let transform = Transform {
            scale: 0.01,
            offset: 0.,
        };
        Header {
            file_signature: raw::LASF,
            file_source_id: 0,
            global_encoding: GlobalEncoding::default(),
            guid: [0; 16],
            version,
            system_identifier: [0; 32],
            generating_software: [0; 32],
            file_creation_day_of_year: 0,
            file_creation_year: 0,
            header_size: version.minimum_header_size(),
            offset_to_point_data: u32::from(version.minimum_header_size()),
            point_data_format_id: 0,
            point_data_record_length: 20,
            legacy_number_of_point_records: 0,
            legacy_number_of_points_by_return: [0; 5],
            number_of_point_records: 0,
            number_of_points_by_return: [0; 15],
            transforms: Vector {
                x: transform,
                y: transform,
                z: transform,
            },
            bounds: Bounds {
                min: Vector::default(),
                max: Vector::default(),
            },
            start_of_waveform_data_packet_record: 0,
            evlr: raw::Evlr::default(),
            padding: Vec::new(),
            vlrs: Vec::new(),
            geokeys: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_counts_are_mirrored() {
        let raw_header = raw::Header {
            number_of_point_records: 42,
            number_of_points_by_return: [1, 2, 3, 4, 5],
            ..Default::default()
        };
        let header = Header::new(raw_header, Vec::new());
        assert_eq!(42, header.number_of_point_records);
        assert_eq!(42, header.legacy_number_of_point_records);
        assert_eq!(
            [1, 2, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            header.number_of_points_by_return
        );
    }

    #[test]
    fn large_file_counts() {
        let raw_header = raw::Header {
            version: Version::new(1, 4),
            number_of_point_records: 0,
            large_file: Some(raw::LargeFile {
                number_of_point_records: 1 << 33,
                number_of_points_by_return: [7; 15],
            }),
            ..Default::default()
        };
        let header = Header::new(raw_header, Vec::new());
        assert_eq!(1 << 33, header.number_of_point_records);
        assert_eq!(0, header.legacy_number_of_point_records);
        assert_eq!([7; 15], header.number_of_points_by_return);
    }

    #[test]
    fn geokeys_from_vlrs() {
        let vlrs = GeoKeys::new([(1024, 1), (3072, 32615)]).to_vlrs().unwrap();
        let header = Header::new(raw::Header::default(), vlrs);
        assert_eq!(2, header.geokeys.unwrap().number_of_keys());
    }

    #[test]
    fn bad_geokey_directory() {
        let vlrs = vec![Vlr::projection(34735, vec![2, 0, 1, 0, 0, 0, 0, 0])];
        let geokeys = Header::new(raw::Header::default(), vlrs).geokeys.unwrap();
        assert_eq!(0, geokeys.number_of_keys());
    }

    #[test]
    fn wkt_in_evlr() {
        let mut vlr = Vlr::projection(2112, b"PROJCS[]".to_vec());
        vlr.is_extended = true;
        let header = Header {
            vlrs: vec![vlr],
            ..Default::default()
        };
        assert_eq!(Some(b"PROJCS[]".as_slice()), header.wkt_crs());
        assert_eq!(0, header.vlr_len());
    }

    #[test]
    fn raw_roundtrip() {
        let header = Header {
            version: Version::new(1, 4),
            header_size: 375,
            number_of_point_records: 3,
            legacy_number_of_point_records: 3,
            start_of_waveform_data_packet_record: 12,
            ..Default::default()
        };
        assert_eq!(header, Header::new(header.into_raw(), Vec::new()));
    }
}
