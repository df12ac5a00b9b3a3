//! Read a las file and validate it.
//!
//! A [Reader] reads the header and the variable length records up front. [Reader::validate]
//! then streams the points through a [Checker] and returns the [Report]:
//!
//! ```
//! use std::io::Cursor;
//! use las_validate::{Header, Reader};
//!
//! let mut cursor = Cursor::new(Vec::new());
//! Header::default().into_raw().write_to(&mut cursor).unwrap();
//! cursor.set_position(0);
//!
//! let mut reader = Reader::new(cursor).unwrap();
//! let report = reader.validate(Default::default()).unwrap();
//! assert!(!report.is_valid());
//! ```
//!
//! `Reader::from_path` wraps the file in a `BufReader`:
//!
//! ```no_run
//! use las_validate::Reader;
//! let mut reader = Reader::from_path("points.las").unwrap();
//! println!("{}", reader.validate(Default::default()).unwrap());
//! ```

use crate::point::Format;
use crate::{CheckOptions, Checker, Header, Point, Report, Result, Vlr, raw};
use log::{Level, log};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Reads a las file.
#[derive(Debug)]
pub struct Reader<R> {
    read: R,
    header: Header,
}

impl Reader<BufReader<File>> {
    /// Creates a new reader from a path.
    ///
    /// The underlying `File` is wrapped in a `BufReader` for performance reasons.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Reader<BufReader<File>>> {
        let file = File::open(path)?;
        Reader::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> Reader<R> {
    /// Creates a new reader, reading the header, the vlrs, and the extended vlrs.
    ///
    /// Vlrs are read from the end of the declared header, wherever the header says the points
    /// start. Reading stops at the first vlr that runs past the end of the file, so the header
    /// is still checked; only a header that can't be read at all is an error.
    pub fn new(mut read: R) -> Result<Reader<R>> {
        let raw_header = raw::Header::read_from(&mut read)?;
        let _ = read.seek(SeekFrom::Start(u64::from(raw_header.header_size)))?;
        let mut vlrs = Vec::new();
        read_vlrs(
            &mut read,
            raw_header.number_of_variable_length_records,
            false,
            &mut vlrs,
        );
        if let Some(evlr) = raw_header.evlr {
            if evlr.number_of_evlrs > 0 && evlr.start_of_first_evlr > 0 {
                let _ = read.seek(SeekFrom::Start(evlr.start_of_first_evlr))?;
                read_vlrs(&mut read, evlr.number_of_evlrs, true, &mut vlrs);
            }
        }
        let header = Header::new(raw_header, vlrs);
        Ok(Reader { read, header })
    }

    /// Returns a reference to this reader's header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Feeds every point through a checker and returns what the checks found.
    ///
    /// Points are read from the declared offset up to the first extended vlr, or the end of
    /// the file. If the points can't be decoded, because the format is unknown or the record
    /// length is too short, they are skipped and only the header is checked.
    pub fn validate(&mut self, options: CheckOptions) -> Result<Report> {
        let mut checker = Checker::new(&self.header, options);
        if let Some((format, record_length)) = self.point_layout() {
            let count = self.number_of_records(record_length)?;
            let _ = self
                .read
                .seek(SeekFrom::Start(u64::from(self.header.offset_to_point_data)))?;
            for _ in 0..count {
                let point = Point::read_from(&mut self.read, format, record_length)?;
                checker.add(&point);
            }
        }
        Ok(checker.report(&self.header))
    }

    fn point_layout(&self) -> Option<(Format, u16)> {
        let id = self.header.point_data_format_id;
        if self.header.is_compressed() {
            log!(Level::Warn, "point data format {} is compressed, skipping points", id);
            return None;
        }
        let format = match Format::new(id) {
            Ok(format) => format,
            Err(err) => {
                log!(Level::Warn, "{}, skipping points", err);
                return None;
            }
        };
        let record_length = self.header.point_data_record_length;
        if record_length < format.record_length() {
            log!(
                Level::Warn,
                "point data record length {} is too short for {}, skipping points",
                record_length,
                format
            );
            return None;
        }
        Some((format, record_length))
    }

    fn number_of_records(&mut self, record_length: u16) -> Result<u64> {
        let start = u64::from(self.header.offset_to_point_data);
        let start_of_first_evlr = self.header.evlr.start_of_first_evlr;
        let end_of_file = self.read.seek(SeekFrom::End(0))?;
        let end = if start_of_first_evlr > start {
            start_of_first_evlr.min(end_of_file)
        } else {
            end_of_file
        };
        let bytes = end.saturating_sub(start);
        let record_length = u64::from(record_length);
        if bytes % record_length != 0 {
            log!(
                Level::Warn,
                "ignoring {} bytes of a partial point record",
                bytes % record_length
            );
        }
        Ok(bytes / record_length)
    }
}

fn read_vlrs<R: Read>(read: &mut R, count: u32, extended: bool, vlrs: &mut Vec<Vlr>) {
    for n in 0..count {
        match raw::Vlr::read_from(&mut *read, extended) {
            Ok(raw_vlr) => vlrs.push(Vlr::new(raw_vlr)),
            Err(err) => {
                log!(
                    Level::Warn,
                    "could not read {} {} of {}, ignoring the rest: {}",
                    if extended { "evlr" } else { "vlr" },
                    n + 1,
                    count,
                    err
                );
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::GeoKeys;
    use crate::{Severity, Version};
    use std::io::{Cursor, Write};

    fn file(header: &Header, points: &[Point]) -> Cursor<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        header.into_raw().write_to(&mut cursor).unwrap();
        for vlr in header.vlrs() {
            vlr.clone().into_raw().unwrap().write_to(&mut cursor).unwrap();
        }
        let format = Format::new(header.point_data_format_id).unwrap();
        for point in points {
            point
                .write_to(&mut cursor, format, header.point_data_record_length)
                .unwrap();
        }
        cursor.set_position(0);
        cursor
    }

    fn header() -> Header {
        let geokeys = GeoKeys::new([(1024, 1), (3072, 32615)]);
        let mut header = Header {
            file_creation_year: 2020,
            file_creation_day_of_year: 1,
            legacy_number_of_point_records: 2,
            legacy_number_of_points_by_return: [2, 0, 0, 0, 0],
            vlrs: geokeys.to_vlrs().unwrap(),
            geokeys: Some(geokeys),
            ..Default::default()
        };
        header.system_identifier[0] = b'a';
        header.generating_software[0] = b'b';
        header.offset_to_point_data = 227 + header.vlr_len() as u32;
        header.bounds.max.x = 1.;
        header
    }

    fn first_return(x: i32) -> Point {
        Point {
            x,
            return_number: 1,
            number_of_returns: 1,
            ..Default::default()
        }
    }

    #[test]
    fn valid_file() {
        let header = header();
        let mut reader = Reader::new(file(&header, &[first_return(0), first_return(100)])).unwrap();
        assert_eq!(header.geokeys, reader.header().geokeys);
        let report = reader.validate(Default::default()).unwrap();
        assert_eq!(Vec::<crate::Diagnostic>::new(), report.diagnostics);
        assert_eq!(
            Some("UTM 15 northern hemisphere"),
            report.crs_description.as_deref()
        );
    }

    #[test]
    fn counts_points_on_disk() {
        let mut header = header();
        header.legacy_number_of_point_records = 3;
        let mut cursor = file(&header, &[first_return(0), first_return(100)]);
        cursor.get_mut().write_all(&[0; 7]).unwrap();
        let report = Reader::new(cursor)
            .unwrap()
            .validate(Default::default())
            .unwrap();
        assert_eq!(
            vec!["there are only 2 point records and not 3"],
            report
                .fails()
                .map(|diagnostic| diagnostic.message.as_str())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn short_record_length_skips_points() {
        let mut header = header();
        header.point_data_record_length = 20;
        header.point_data_format_id = 1;
        let mut cursor = Cursor::new(Vec::new());
        header.into_raw().write_to(&mut cursor).unwrap();
        for vlr in header.vlrs() {
            vlr.clone().into_raw().unwrap().write_to(&mut cursor).unwrap();
        }
        cursor.write_all(&[0; 40]).unwrap();
        cursor.set_position(0);
        let report = Reader::new(cursor)
            .unwrap()
            .validate(Default::default())
            .unwrap();
        assert!(report.fails().any(|diagnostic| diagnostic.category == "point data record length"));
        assert!(report.fails().all(|diagnostic| diagnostic.category != "number of point records"));
    }

    #[test]
    fn evlrs() {
        let version = Version::new(1, 4);
        let mut header = Header {
            version,
            header_size: version.minimum_header_size(),
            offset_to_point_data: u32::from(version.minimum_header_size()),
            ..Default::default()
        };
        let mut wkt = Vlr::projection(2112, b"PROJCS[]\0".to_vec());
        wkt.is_extended = true;
        header.evlr.number_of_evlrs = 1;
        header.evlr.start_of_first_evlr = u64::from(header.offset_to_point_data) + 20;
        let mut cursor = file(&header, &[first_return(0)]);
        cursor.seek(SeekFrom::End(0)).unwrap();
        wkt.into_raw().unwrap().write_to(&mut cursor).unwrap();
        cursor.set_position(0);

        let mut reader = Reader::new(cursor).unwrap();
        assert_eq!(1, reader.header().evlrs().count());
        assert!(reader.header().wkt_crs().is_some());
        let report = reader.validate(Default::default()).unwrap();
        assert_eq!(
            vec!["there are only 1 point records and not 0"],
            report
                .fails()
                .filter(|diagnostic| diagnostic.category == "number of point records")
                .map(|diagnostic| diagnostic.message.as_str())
                .collect::<Vec<_>>()
        );
        assert!(report.diagnostics.iter().any(|diagnostic| diagnostic.severity
            == Severity::Warning
            && diagnostic.message
                == "there is a OGC WKT string but its check is not yet implemented"));
    }

    #[test]
    fn truncated_vlr() {
        let mut header = header();
        header.vlrs.clear();
        let mut raw_header = header.into_raw();
        raw_header.number_of_variable_length_records = 1;
        let mut cursor = Cursor::new(Vec::new());
        raw_header.write_to(&mut cursor).unwrap();
        cursor.set_position(0);
        let mut reader = Reader::new(cursor).unwrap();
        assert!(reader.header().vlrs.is_empty());
        let report = reader.validate(Default::default()).unwrap();
        assert!(report.fails().any(|diagnostic| diagnostic.category == "CRS"));
    }

    #[test]
    fn vlr_past_end_of_file() {
        let header = header();
        let mut cursor = file(&header, &[]);
        let len = cursor.get_ref().len();
        cursor.get_mut().truncate(len - 4);
        let mut reader = Reader::new(cursor).unwrap();
        assert!(reader.header().vlrs.is_empty());
        assert!(reader.header().geokeys.is_none());
        let report = reader.validate(Default::default()).unwrap();
        assert!(report.fails().any(|diagnostic| diagnostic.message
            == "file does not specify a Coordinate Reference System with GEOTIFF tags"));
    }

    #[test]
    fn evlr_past_end_of_file() {
        let version = Version::new(1, 4);
        let mut header = Header {
            version,
            header_size: version.minimum_header_size(),
            offset_to_point_data: u32::from(version.minimum_header_size()),
            ..Default::default()
        };
        header.evlr.number_of_evlrs = 2;
        header.evlr.start_of_first_evlr = 1 << 20;
        let mut reader = Reader::new(file(&header, &[first_return(0)])).unwrap();
        assert_eq!(0, reader.header().evlrs().count());
        let report = reader.validate(Default::default()).unwrap();
        assert!(report
            .fails()
            .any(|diagnostic| diagnostic.message == "there are only 1 point records and not 0"));
    }
}
