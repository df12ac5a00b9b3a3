//! The public header block, field for field.

use crate::feature::{Evlrs, LargeFiles, Waveforms};
use crate::{Result, Version, raw};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// laszip sets this bit of the point data format id on compressed files.
pub(crate) const COMPRESSED_BIT: u8 = 0x80;

/// The public header block of a las file, without interpretation.
///
/// Per-axis values are stored in x, y, z order.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    /// Should be "LASF".
    pub file_signature: [u8; 4],

    /// The file source id.
    pub file_source_id: u16,

    /// Global encoding bits, see [GlobalEncoding](crate::GlobalEncoding).
    pub global_encoding: u16,

    /// Project id, unused by the checks.
    pub guid: [u8; 16],

    /// Version major and minor.
    pub version: Version,

    /// Null-terminated system identifier.
    pub system_identifier: [u8; 32],

    /// Null-terminated generating software.
    pub generating_software: [u8; 32],

    /// Day of the year, 1-based.
    pub file_creation_day_of_year: u16,

    /// Four digit year.
    pub file_creation_year: u16,

    /// Declared header size, which may be larger than the fields read here.
    pub header_size: u16,

    /// Where the point records start.
    pub offset_to_point_data: u32,

    /// How many regular vlrs follow the header.
    pub number_of_variable_length_records: u32,

    /// The point data format id, compression bit included.
    pub point_data_format_id: u8,

    /// Bytes per point record.
    pub point_data_record_length: u16,

    /// Legacy 32-bit point count.
    pub number_of_point_records: u32,

    /// Legacy 32-bit counts for returns one through five.
    pub number_of_points_by_return: [u32; 5],

    /// Scale factors.
    pub scale_factors: [f64; 3],

    /// Offsets.
    pub offsets: [f64; 3],

    /// Declared maxima. On disk these are interleaved with the minima.
    pub max: [f64; 3],

    /// Declared minima.
    pub min: [f64; 3],

    /// Waveform data packet start, read for 1.3 and later, `None` when zero.
    pub start_of_waveform_data_packet_record: Option<u64>,

    /// Extended vlr location, read for 1.4, `None` when both fields are zero.
    pub evlr: Option<Evlr>,

    /// 64-bit counts, read for 1.4.
    pub large_file: Option<LargeFile>,

    /// Whatever sits between the last known field and `header_size`.
    pub padding: Vec<u8>,
}

/// Location and count of the extended vlrs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Evlr {
    /// Byte offset of the first extended vlr.
    pub start_of_first_evlr: u64,

    /// How many extended vlrs there are.
    pub number_of_evlrs: u32,
}

/// The 64-bit counts added in las 1.4.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LargeFile {
    /// Point count.
    pub number_of_point_records: u64,

    /// Counts for returns one through fifteen.
    pub number_of_points_by_return: [u64; 15],
}

impl Header {
    /// Reads a raw header.
    ///
    /// Nothing is validated. Fields that only exist in later versions are read when `version`
    /// says they are there.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las_validate::raw::Header;
    /// let mut cursor = Cursor::new(Vec::new());
    /// Header::default().write_to(&mut cursor).unwrap();
    /// cursor.set_position(0);
    /// let header = Header::read_from(cursor).unwrap();
    /// assert_eq!(*b"LASF", header.file_signature);
    /// ```
    pub fn read_from<R: Read>(mut read: R) -> Result<Header> {
        let file_signature = read_bytes(&mut read)?;
        let file_source_id = read.read_u16::<LittleEndian>()?;
        let global_encoding = read.read_u16::<LittleEndian>()?;
        let guid = read_bytes(&mut read)?;
        let version = Version::new(read.read_u8()?, read.read_u8()?);
        let system_identifier = read_bytes(&mut read)?;
        let generating_software = read_bytes(&mut read)?;
        let file_creation_day_of_year = read.read_u16::<LittleEndian>()?;
        let file_creation_year = read.read_u16::<LittleEndian>()?;
        let header_size = read.read_u16::<LittleEndian>()?;
        let offset_to_point_data = read.read_u32::<LittleEndian>()?;
        let number_of_variable_length_records = read.read_u32::<LittleEndian>()?;
        let point_data_format_id = read.read_u8()?;
        let point_data_record_length = read.read_u16::<LittleEndian>()?;
        let number_of_point_records = read.read_u32::<LittleEndian>()?;
        let mut number_of_points_by_return = [0; 5];
        read.read_u32_into::<LittleEndian>(&mut number_of_points_by_return)?;
        let mut scale_factors = [0.; 3];
        read.read_f64_into::<LittleEndian>(&mut scale_factors)?;
        let mut offsets = [0.; 3];
        read.read_f64_into::<LittleEndian>(&mut offsets)?;
        let mut extents = [0.; 6];
        read.read_f64_into::<LittleEndian>(&mut extents)?;
        let max = [extents[0], extents[2], extents[4]];
        let min = [extents[1], extents[3], extents[5]];

        let mut start_of_waveform_data_packet_record = None;
        if version.supports::<Waveforms>() {
            start_of_waveform_data_packet_record =
                Some(read.read_u64::<LittleEndian>()?).filter(|&n| n > 0);
        }
        let mut evlr = None;
        if version.supports::<Evlrs>() {
            evlr = Some(Evlr {
                start_of_first_evlr: read.read_u64::<LittleEndian>()?,
                number_of_evlrs: read.read_u32::<LittleEndian>()?,
            })
            .filter(|evlr| *evlr != Evlr::default());
        }
        let mut large_file = None;
        if version.supports::<LargeFiles>() {
            let mut large = LargeFile {
                number_of_point_records: read.read_u64::<LittleEndian>()?,
                ..Default::default()
            };
            read.read_u64_into::<LittleEndian>(&mut large.number_of_points_by_return)?;
            large_file = Some(large);
        }

        let known = version.minimum_header_size();
        let mut padding = vec![0; usize::from(header_size.saturating_sub(known))];
        read.read_exact(&mut padding)?;

        Ok(Header {
            file_signature,
            file_source_id,
            global_encoding,
            guid,
            version,
            system_identifier,
            generating_software,
            file_creation_day_of_year,
            file_creation_year,
            header_size,
            offset_to_point_data,
            number_of_variable_length_records,
            point_data_format_id,
            point_data_record_length,
            number_of_point_records,
            number_of_points_by_return,
            scale_factors,
            offsets,
            max,
            min,
            start_of_waveform_data_packet_record,
            evlr,
            large_file,
            padding,
        })
    }

    /// Is the compression bit set on the point data format id?
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::raw::Header;
    /// let mut header = Header::default();
    /// assert!(!header.is_compressed());
    /// header.point_data_format_id = 131;
    /// assert!(header.is_compressed());
    /// ```
    pub fn is_compressed(&self) -> bool {
        self.point_data_format_id & COMPRESSED_BIT != 0
    }

    /// Writes this header, including the version-specific sections and the padding.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las_validate::raw::Header;
    /// let mut cursor = Cursor::new(Vec::new());
    /// Header::default().write_to(&mut cursor).unwrap();
    /// assert_eq!(227, cursor.into_inner().len());
    /// ```
    pub fn write_to<W: Write>(&self, mut write: W) -> Result<()> {
        write.write_all(&self.file_signature)?;
        write.write_u16::<LittleEndian>(self.file_source_id)?;
        write.write_u16::<LittleEndian>(self.global_encoding)?;
        write.write_all(&self.guid)?;
        write.write_u8(self.version.major)?;
        write.write_u8(self.version.minor)?;
        write.write_all(&self.system_identifier)?;
        write.write_all(&self.generating_software)?;
        write.write_u16::<LittleEndian>(self.file_creation_day_of_year)?;
        write.write_u16::<LittleEndian>(self.file_creation_year)?;
        write.write_u16::<LittleEndian>(self.header_size)?;
        write.write_u32::<LittleEndian>(self.offset_to_point_data)?;
        write.write_u32::<LittleEndian>(self.number_of_variable_length_records)?;
        write.write_u8(self.point_data_format_id)?;
        write.write_u16::<LittleEndian>(self.point_data_record_length)?;
        write.write_u32::<LittleEndian>(self.number_of_point_records)?;
        for &n in &self.number_of_points_by_return {
            write.write_u32::<LittleEndian>(n)?;
        }
        for &value in self.scale_factors.iter().chain(&self.offsets) {
            write.write_f64::<LittleEndian>(value)?;
        }
        for (&max, &min) in self.max.iter().zip(&self.min) {
            write.write_f64::<LittleEndian>(max)?;
            write.write_f64::<LittleEndian>(min)?;
        }
        if self.version.supports::<Waveforms>() {
            write.write_u64::<LittleEndian>(self.start_of_waveform_data_packet_record.unwrap_or(0))?;
        }
        if self.version.supports::<Evlrs>() {
            let evlr = self.evlr.unwrap_or_default();
            write.write_u64::<LittleEndian>(evlr.start_of_first_evlr)?;
            write.write_u32::<LittleEndian>(evlr.number_of_evlrs)?;
        }
        if self.version.supports::<LargeFiles>() {
            let large_file = self.large_file.unwrap_or_default();
            write.write_u64::<LittleEndian>(large_file.number_of_point_records)?;
            for &n in &large_file.number_of_points_by_return {
                write.write_u64::<LittleEndian>(n)?;
            }
        }
        write.write_all(&self.padding)?;
        Ok(())
    }
}

fn read_bytes<R: Read, const N: usize>(mut read: R) -> Result<[u8; N]> {
    let mut bytes = [0; N];
    read.read_exact(&mut bytes)?;
    Ok(bytes)
}

impl Default for Header {
    fn default() -> Header {
        let version = Version::new(1, 2);
        let header_size = version.minimum_header_size();
        Header {
            file_signature: raw::LASF,
            file_source_id: 0,
            global_encoding: 0,
            guid: [0; 16],
            version,
            system_identifier: [0; 32],
            generating_software: [0; 32],
            file_creation_day_of_year: 0,
            file_creation_year: 0,
            header_size,
            offset_to_point_data: u32::from(header_size),
            number_of_variable_length_records: 0,
            point_data_format_id: 0,
            point_data_record_length: 20,
            number_of_point_records: 0,
            number_of_points_by_return: [0; 5],
            scale_factors: [0.01; 3],
            offsets: [0.; 3],
            max: [0.; 3],
            min: [0.; 3],
            start_of_waveform_data_packet_record: None,
            evlr: None,
            large_file: None,
            padding: Vec::new(),
        }
    }
}
