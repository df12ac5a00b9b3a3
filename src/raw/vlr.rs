//! Raw variable length records.

use crate::Result;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// A raw variable length record, regular or extended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vlr {
    /// Reserved, should be zero.
    pub reserved: u16,

    /// The registered user id, e.g. "LASF_Projection".
    pub user_id: [u8; 16],

    /// The record id, whose meaning depends on the user id.
    pub record_id: u16,

    /// The length of the payload.
    pub record_length_after_header: RecordLength,

    /// A null-terminated description.
    pub description: [u8; 32],

    /// The payload.
    pub data: Vec<u8>,
}

/// The length of a vlr payload, which is wider for extended vlrs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordLength {
    /// A regular vlr.
    Vlr(u16),
    /// An extended vlr.
    Evlr(u64),
}

impl Vlr {
    /// Reads a raw vlr.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las_validate::raw::Vlr;
    /// let mut cursor = Cursor::new(Vec::new());
    /// Vlr::default().write_to(&mut cursor).unwrap();
    /// cursor.set_position(0);
    /// let vlr = Vlr::read_from(cursor, false).unwrap();
    /// assert!(vlr.data.is_empty());
    /// ```
    pub fn read_from<R: Read>(mut read: R, extended: bool) -> Result<Vlr> {
        let reserved = read.read_u16::<LittleEndian>()?;
        let mut user_id = [0; 16];
        read.read_exact(&mut user_id)?;
        let record_id = read.read_u16::<LittleEndian>()?;
        let record_length_after_header = if extended {
            RecordLength::Evlr(read.read_u64::<LittleEndian>()?)
        } else {
            RecordLength::Vlr(read.read_u16::<LittleEndian>()?)
        };
        let mut description = [0; 32];
        read.read_exact(&mut description)?;
        let len = u64::from(record_length_after_header);
        let mut data = Vec::new();
        let n = read.by_ref().take(len).read_to_end(&mut data)?;
        if (n as u64) < len {
            return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
        }
        Ok(Vlr {
            reserved,
            user_id,
            record_id,
            record_length_after_header,
            description,
            data,
        })
    }

    /// Writes a raw vlr.
    pub fn write_to<W: Write>(&self, mut write: W) -> Result<()> {
        write.write_u16::<LittleEndian>(self.reserved)?;
        write.write_all(&self.user_id)?;
        write.write_u16::<LittleEndian>(self.record_id)?;
        match self.record_length_after_header {
            RecordLength::Vlr(n) => write.write_u16::<LittleEndian>(n)?,
            RecordLength::Evlr(n) => write.write_u64::<LittleEndian>(n)?,
        }
        write.write_all(&self.description)?;
        write.write_all(&self.data)?;
        Ok(())
    }

    /// Is this an extended vlr?
    pub fn is_extended(&self) -> bool {
        matches!(self.record_length_after_header, RecordLength::Evlr(_))
    }
}

impl Default for RecordLength {
    fn default() -> RecordLength {
        RecordLength::Vlr(0)
    }
}

impl From<RecordLength> for u64 {
    fn from(record_length: RecordLength) -> u64 {
        match record_length {
            RecordLength::Vlr(n) => u64::from(n),
            RecordLength::Evlr(n) => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    macro_rules! roundtrip {
        ($name:ident, $record_length:expr) => {
            #[test]
            fn $name() {
                let vlr = Vlr {
                    user_id: *b"LASF_Projection\0",
                    record_id: 34735,
                    record_length_after_header: $record_length,
                    data: vec![1, 2, 3],
                    ..Default::default()
                };
                let mut cursor = Cursor::new(Vec::new());
                vlr.write_to(&mut cursor).unwrap();
                cursor.set_position(0);
                assert_eq!(vlr, Vlr::read_from(cursor, vlr.is_extended()).unwrap());
            }
        };
    }

    roundtrip!(regular, RecordLength::Vlr(3));
    roundtrip!(extended, RecordLength::Evlr(3));

    #[test]
    fn truncated_payload() {
        let vlr = Vlr {
            record_length_after_header: RecordLength::Vlr(10),
            data: vec![1, 2, 3],
            ..Default::default()
        };
        let mut cursor = Cursor::new(Vec::new());
        vlr.write_to(&mut cursor).unwrap();
        cursor.set_position(0);
        assert!(Vlr::read_from(cursor, false).is_err());
    }
}
