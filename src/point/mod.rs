//! The parts of a point record that the inventory cares about.
//!
//! ```
//! use std::io::Cursor;
//! use las_validate::point::{Format, Point};
//!
//! let format = Format::new(1).unwrap();
//! let point = Point { x: 1, y: 2, z: 3, return_number: 1, number_of_returns: 2, gps_time: Some(4.), ..Default::default() };
//! let mut cursor = Cursor::new(Vec::new());
//! point.write_to(&mut cursor, format, 30).unwrap();
//! cursor.set_position(0);
//! assert_eq!(point, Point::read_from(&mut cursor, format, 30).unwrap());
//! ```

mod format;

pub use self::format::{Format, minimum_record_length};

use crate::{Color, Error, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

const LEGACY_RETURN_MASK: u8 = 0b0000_0111;
const EXTENDED_RETURN_MASK: u8 = 0b0000_1111;

/// A point, with its coordinates still as the stored integers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// The raw x value.
    pub x: i32,
    /// The raw y value.
    pub y: i32,
    /// The raw z value.
    pub z: i32,
    /// The pulse return number for a given output pulse.
    ///
    /// Three bits wide in formats 0 through 5, four in formats 6 through 10.
    pub return_number: u8,
    /// The total number of returns for a given pulse.
    pub number_of_returns: u8,
    /// The time at which the point was acquired, if the format has it.
    pub gps_time: Option<f64>,
    /// The color of the point, if the format has it.
    pub color: Option<Color>,
}

impl Point {
    /// Reads one point record of `record_length` bytes.
    ///
    /// Bytes past the fields stored in this structure (near infrared, waveforms, extra bytes) are
    /// skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las_validate::point::{Format, Point};
    /// let format = Format::new(0).unwrap();
    /// let point = Point::read_from(Cursor::new(vec![0; 20]), format, 20).unwrap();
    /// assert!(Point::read_from(Cursor::new(vec![0; 20]), format, 19).is_err());
    /// ```
    pub fn read_from<R: Read>(mut read: R, format: Format, record_length: u16) -> Result<Point> {
        if record_length < format.record_length() {
            return Err(Error::TruncatedPointRecord {
                format,
                record_length,
            });
        }
        let x = read.read_i32::<LittleEndian>()?;
        let y = read.read_i32::<LittleEndian>()?;
        let z = read.read_i32::<LittleEndian>()?;
        let _intensity = read.read_u16::<LittleEndian>()?;
        let flags = read.read_u8()?;
        let (return_number, number_of_returns, mut consumed) = if format.is_extended() {
            // class flags, classification, user data, scan angle, point source id
            let mut skip = [0; 7];
            read.read_exact(&mut skip)?;
            (flags & EXTENDED_RETURN_MASK, flags >> 4, 22)
        } else {
            // classification, scan angle rank, user data, point source id
            let mut skip = [0; 5];
            read.read_exact(&mut skip)?;
            (flags & LEGACY_RETURN_MASK, (flags >> 3) & LEGACY_RETURN_MASK, 20)
        };
        let gps_time = if format.has_gps_time() {
            consumed += 8;
            Some(read.read_f64::<LittleEndian>()?)
        } else {
            None
        };
        let color = if format.has_color() {
            consumed += 6;
            let red = read.read_u16::<LittleEndian>()?;
            let green = read.read_u16::<LittleEndian>()?;
            let blue = read.read_u16::<LittleEndian>()?;
            Some(Color::new(red, green, blue))
        } else {
            None
        };
        let rest = u64::from(record_length - consumed);
        let skipped = io::copy(&mut read.by_ref().take(rest), &mut io::sink())?;
        if skipped < rest {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(Point {
            x,
            y,
            z,
            return_number,
            number_of_returns,
            gps_time,
            color,
        })
    }

    /// Writes this point as a record of `record_length` bytes.
    ///
    /// Fields this structure doesn't carry are written as zeros. A missing gps time or color is
    /// written as zeros too, if the format has them.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las_validate::point::{Format, Point};
    /// let mut cursor = Cursor::new(Vec::new());
    /// Point::default().write_to(&mut cursor, Format::new(6).unwrap(), 32).unwrap();
    /// assert_eq!(32, cursor.into_inner().len());
    /// ```
    pub fn write_to<W: Write>(&self, mut write: W, format: Format, record_length: u16) -> Result<()> {
        if record_length < format.record_length() {
            return Err(Error::TruncatedPointRecord {
                format,
                record_length,
            });
        }
        write.write_i32::<LittleEndian>(self.x)?;
        write.write_i32::<LittleEndian>(self.y)?;
        write.write_i32::<LittleEndian>(self.z)?;
        write.write_u16::<LittleEndian>(0)?;
        let mut written = if format.is_extended() {
            write.write_u8(
                (self.return_number & EXTENDED_RETURN_MASK)
                    | ((self.number_of_returns & EXTENDED_RETURN_MASK) << 4),
            )?;
            write.write_all(&[0; 7])?;
            22
        } else {
            write.write_u8(
                (self.return_number & LEGACY_RETURN_MASK)
                    | ((self.number_of_returns & LEGACY_RETURN_MASK) << 3),
            )?;
            write.write_all(&[0; 5])?;
            20
        };
        if format.has_gps_time() {
            write.write_f64::<LittleEndian>(self.gps_time.unwrap_or(0.))?;
            written += 8;
        }
        if format.has_color() {
            let color = self.color.unwrap_or_default();
            write.write_u16::<LittleEndian>(color.red)?;
            write.write_u16::<LittleEndian>(color.green)?;
            write.write_u16::<LittleEndian>(color.blue)?;
            written += 6;
        }
        write.write_all(&vec![0; usize::from(record_length - written)])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    macro_rules! roundtrip {
        ($name:ident, $format:expr) => {
            #[test]
            fn $name() {
                let format = Format::new($format).unwrap();
                let point = Point {
                    x: -1,
                    y: 2,
                    z: i32::MAX,
                    return_number: 3,
                    number_of_returns: 4,
                    gps_time: format.has_gps_time().then_some(42.5),
                    color: format.has_color().then_some(Color::new(1, 2, 3)),
                };
                let record_length = format.record_length() + 3;
                let mut cursor = Cursor::new(Vec::new());
                point.write_to(&mut cursor, format, record_length).unwrap();
                point.write_to(&mut cursor, format, record_length).unwrap();
                assert_eq!(2 * usize::from(record_length), cursor.get_ref().len());
                cursor.set_position(0);
                assert_eq!(point, Point::read_from(&mut cursor, format, record_length).unwrap());
                assert_eq!(point, Point::read_from(&mut cursor, format, record_length).unwrap());
            }
        };
    }

    roundtrip!(format_0, 0);
    roundtrip!(format_1, 1);
    roundtrip!(format_2, 2);
    roundtrip!(format_3, 3);
    roundtrip!(format_5, 5);
    roundtrip!(format_6, 6);
    roundtrip!(format_8, 8);
    roundtrip!(format_10, 10);

    #[test]
    fn extended_return_numbers() {
        let format = Format::new(6).unwrap();
        let mut bytes = vec![0; 30];
        bytes[14] = 0b1111_0111;
        let point = Point::read_from(Cursor::new(bytes), format, 30).unwrap();
        assert_eq!(7, point.return_number);
        assert_eq!(15, point.number_of_returns);
    }

    #[test]
    fn legacy_return_numbers() {
        let format = Format::new(0).unwrap();
        let mut bytes = vec![0; 20];
        bytes[14] = 0b1111_0110;
        let point = Point::read_from(Cursor::new(bytes), format, 20).unwrap();
        assert_eq!(6, point.return_number);
        assert_eq!(6, point.number_of_returns);
    }

    #[test]
    fn short_stream() {
        let format = Format::new(0).unwrap();
        assert!(Point::read_from(Cursor::new(vec![0; 21]), format, 22).is_err());
    }
}
