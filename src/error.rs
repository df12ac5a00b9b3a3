use crate::point::Format;
use thiserror::Error;

/// Crate-specific error enum.
///
/// Errors only come from decoding bytes. A header that breaks the rules still decodes fine; its
/// problems are reported as [Diagnostic](crate::Diagnostic)s.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Wrapper around `std::io::Error`.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The geokey directory is not key directory version 1, revision 1.
    #[error("invalid geokey directory header: {key_directory_version}.{key_revision}.{minor_revision}")]
    InvalidGeoKeyDirectory {
        /// The key directory version, should be 1.
        key_directory_version: u16,
        /// The key revision, should be 1.
        key_revision: u16,
        /// The minor revision.
        minor_revision: u16,
    },

    /// A geokey points into the double parameters but there is no double parameter record.
    #[error("geokey {0} references double parameters, but there are none")]
    MissingGeoKeyDoubleParams(u16),

    /// A geokey points past the end of the double parameters.
    #[error("geokey {key_id} references double parameter {offset}, but there are only {len}")]
    GeoKeyDoubleOffset {
        /// The geokey id.
        key_id: u16,
        /// The offset into the double parameters.
        offset: u16,
        /// The number of double parameters.
        len: usize,
    },

    /// The point data record length is too short to hold the fields of the format.
    #[error("point data record length {record_length} is too short for {format}")]
    TruncatedPointRecord {
        /// The point format.
        format: Format,
        /// The record length declared in the header.
        record_length: u16,
    },

    /// A string is too long for its fixed-size field.
    #[error("{field} is {len} bytes, more than the {max} that fit")]
    StringTooLong {
        /// The field.
        field: &'static str,
        /// The string length.
        len: usize,
        /// The field size.
        max: usize,
    },

    /// The vlr data is too long for a regular vlr.
    #[error("the vlr is too long: {0}")]
    VlrTooLong(usize),

    /// The point format is not one that can be decoded.
    #[error("unsupported point format: {0}")]
    UnsupportedPointFormat(u8),
}
