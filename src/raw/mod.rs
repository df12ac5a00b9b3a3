//! Raw structures that map directly onto structures as defined in the las format specifications.
//!
//! These structures do no validity checking at all. A header whose fields break the rules still
//! reads fine, which is what lets [Checker](crate::Checker) report every problem instead of
//! stopping at the first one:
//!
//! ```
//! use las_validate::raw::Header;
//! let raw_header = Header {
//!     file_signature: *b"LASX",
//!     ..Default::default()
//! };
//! let header = las_validate::Header::new(raw_header, Vec::new());
//! assert_eq!(*b"LASX", header.file_signature);
//! ```

mod header;
mod vlr;

pub(crate) use self::header::COMPRESSED_BIT;
pub use self::header::{Evlr, Header, LargeFile};
pub use self::vlr::{RecordLength, Vlr};

/// The file magic number used for all las files.
pub const LASF: [u8; 4] = *b"LASF";
