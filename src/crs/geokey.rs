//! The GeoTIFF key directory stored in the `LASF_Projection` variable length records.

use crate::{Error, Result, Vlr};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Write};

/// Record id of the key directory.
pub const DIRECTORY_RECORD_ID: u16 = 34735;
/// Record id of the double parameters, and the tiff tag location of keys stored there.
pub const DOUBLE_PARAMS_RECORD_ID: u16 = 34736;
/// Record id of the ascii parameters.
pub const ASCII_PARAMS_RECORD_ID: u16 = 34737;

/// Value meaning "user-defined" for any key that takes a code.
pub const USER_DEFINED: u16 = 32767;

/// Geokey ids.
pub mod key {
    /// GTModelTypeGeoKey.
    pub const GT_MODEL_TYPE: u16 = 1024;
    /// GeographicTypeGeoKey.
    pub const GEOGRAPHIC_TYPE: u16 = 2048;
    /// GeogGeodeticDatumGeoKey.
    pub const GEOG_GEODETIC_DATUM: u16 = 2050;
    /// GeogLinearUnitsGeoKey.
    pub const GEOG_LINEAR_UNITS: u16 = 2052;
    /// GeogEllipsoidGeoKey.
    pub const GEOG_ELLIPSOID: u16 = 2056;
    /// ProjectedCSTypeGeoKey.
    pub const PROJECTED_CS_TYPE: u16 = 3072;
    /// ProjCoordTransGeoKey.
    pub const PROJ_COORD_TRANS: u16 = 3075;
    /// ProjLinearUnitsGeoKey.
    pub const PROJ_LINEAR_UNITS: u16 = 3076;
    /// ProjStdParallel1GeoKey.
    pub const PROJ_STD_PARALLEL_1: u16 = 3078;
    /// ProjStdParallel2GeoKey.
    pub const PROJ_STD_PARALLEL_2: u16 = 3079;
    /// ProjNatOriginLatGeoKey.
    pub const PROJ_NAT_ORIGIN_LAT: u16 = 3081;
    /// ProjFalseEastingGeoKey.
    pub const PROJ_FALSE_EASTING: u16 = 3082;
    /// ProjFalseNorthingGeoKey.
    pub const PROJ_FALSE_NORTHING: u16 = 3083;
    /// ProjCenterLongGeoKey.
    pub const PROJ_CENTER_LONG: u16 = 3088;
    /// ProjScaleAtNatOriginGeoKey.
    pub const PROJ_SCALE_AT_NAT_ORIGIN: u16 = 3092;
    /// VerticalCSTypeGeoKey.
    pub const VERTICAL_CS_TYPE: u16 = 4096;
    /// VerticalUnitsGeoKey.
    pub const VERTICAL_UNITS: u16 = 4099;
}

/// One entry of the key directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeoKeyEntry {
    /// The key id.
    pub key_id: u16,
    /// Zero if the value is stored in `value_offset`, otherwise the record holding the value.
    pub tiff_tag_location: u16,
    /// The number of values.
    pub count: u16,
    /// The value itself, or an index into the record named by `tiff_tag_location`.
    pub value_offset: u16,
}

impl GeoKeyEntry {
    /// Returns the double parameters this entry refers to.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::GeoKeys;
    /// let mut geokeys = GeoKeys::default();
    /// geokeys.push_double(3082, 500000.);
    /// assert_eq!(&[500000.], geokeys.entries[0].doubles(&geokeys).unwrap());
    /// ```
    pub fn doubles<'a>(&self, geokeys: &'a GeoKeys) -> Result<&'a [f64]> {
        if geokeys.double_params.is_empty() {
            return Err(Error::MissingGeoKeyDoubleParams(self.key_id));
        }
        let start = usize::from(self.value_offset);
        let end = start + usize::from(self.count);
        geokeys
            .double_params
            .get(start..end)
            .ok_or(Error::GeoKeyDoubleOffset {
                key_id: self.key_id,
                offset: self.value_offset,
                len: geokeys.double_params.len(),
            })
    }
}

/// A GeoTIFF key directory and its double parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoKeys {
    /// The key directory version, always 1.
    pub key_directory_version: u16,
    /// The key revision, always 1.
    pub key_revision: u16,
    /// The minor revision.
    pub minor_revision: u16,
    /// The keys, in directory order.
    pub entries: Vec<GeoKeyEntry>,
    /// The double parameters.
    pub double_params: Vec<f64>,
}

impl GeoKeys {
    /// Reads a key directory and, if there is one, its double parameter record.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::GeoKeys;
    /// let directory = [1, 0, 1, 0, 0, 0, 1, 0, 0, 4, 0, 0, 1, 0, 2, 0];
    /// let geokeys = GeoKeys::read_from(&directory, None).unwrap();
    /// assert_eq!(1024, geokeys.entries[0].key_id);
    /// assert_eq!(2, geokeys.entries[0].value_offset);
    /// ```
    pub fn read_from(directory: &[u8], double_params: Option<&[u8]>) -> Result<GeoKeys> {
        let mut directory = Cursor::new(directory);
        let key_directory_version = directory.read_u16::<LittleEndian>()?;
        let key_revision = directory.read_u16::<LittleEndian>()?;
        let minor_revision = directory.read_u16::<LittleEndian>()?;
        if key_directory_version != 1 || key_revision != 1 {
            return Err(Error::InvalidGeoKeyDirectory {
                key_directory_version,
                key_revision,
                minor_revision,
            });
        }
        let number_of_keys = directory.read_u16::<LittleEndian>()?;
        let mut entries = Vec::with_capacity(usize::from(number_of_keys));
        for _ in 0..number_of_keys {
            entries.push(GeoKeyEntry {
                key_id: directory.read_u16::<LittleEndian>()?,
                tiff_tag_location: directory.read_u16::<LittleEndian>()?,
                count: directory.read_u16::<LittleEndian>()?,
                value_offset: directory.read_u16::<LittleEndian>()?,
            });
        }
        let mut doubles = Vec::new();
        if let Some(double_params) = double_params {
            let mut cursor = Cursor::new(double_params);
            for _ in 0..double_params.len() / 8 {
                doubles.push(cursor.read_f64::<LittleEndian>()?);
            }
        }
        Ok(GeoKeys {
            key_directory_version,
            key_revision,
            minor_revision,
            entries,
            double_params: doubles,
        })
    }

    /// Reads the geokeys from a set of vlrs, if there is a key directory among them.
    pub fn from_vlrs<'a, I: IntoIterator<Item = &'a Vlr>>(vlrs: I) -> Result<Option<GeoKeys>> {
        let mut directory = None;
        let mut double_params = None;
        for vlr in vlrs {
            if vlr.is_projection() {
                match vlr.record_id {
                    DIRECTORY_RECORD_ID => directory = Some(vlr.data.as_slice()),
                    DOUBLE_PARAMS_RECORD_ID => double_params = Some(vlr.data.as_slice()),
                    _ => continue,
                }
            }
        }
        directory
            .map(|directory| GeoKeys::read_from(directory, double_params))
            .transpose()
    }

    /// Creates a directory of keys whose values are stored in the directory itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::GeoKeys;
    /// let geokeys = GeoKeys::new([(1024, 1), (3072, 32615)]);
    /// assert_eq!(2, geokeys.number_of_keys());
    /// ```
    pub fn new<I: IntoIterator<Item = (u16, u16)>>(keys: I) -> GeoKeys {
        let mut geokeys = GeoKeys::default();
        for (key_id, value) in keys {
            geokeys.push(key_id, value);
        }
        geokeys
    }

    /// Appends a key whose value is stored in the directory.
    pub fn push(&mut self, key_id: u16, value: u16) {
        self.entries.push(GeoKeyEntry {
            key_id,
            tiff_tag_location: 0,
            count: 1,
            value_offset: value,
        });
    }

    /// Appends a key whose value is a new double parameter.
    pub fn push_double(&mut self, key_id: u16, value: f64) {
        self.entries.push(GeoKeyEntry {
            key_id,
            tiff_tag_location: DOUBLE_PARAMS_RECORD_ID,
            count: 1,
            value_offset: u16::try_from(self.double_params.len()).unwrap_or(u16::MAX),
        });
        self.double_params.push(value);
    }

    /// Returns the number of keys.
    pub fn number_of_keys(&self) -> u16 {
        u16::try_from(self.entries.len()).unwrap_or(u16::MAX)
    }

    /// Writes the key directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::GeoKeys;
    /// let mut bytes = Vec::new();
    /// GeoKeys::new([(1024, 2)]).write_to(&mut bytes).unwrap();
    /// assert_eq!(16, bytes.len());
    /// ```
    pub fn write_to<W: Write>(&self, mut write: W) -> Result<()> {
        write.write_u16::<LittleEndian>(self.key_directory_version)?;
        write.write_u16::<LittleEndian>(self.key_revision)?;
        write.write_u16::<LittleEndian>(self.minor_revision)?;
        write.write_u16::<LittleEndian>(self.number_of_keys())?;
        for entry in &self.entries {
            write.write_u16::<LittleEndian>(entry.key_id)?;
            write.write_u16::<LittleEndian>(entry.tiff_tag_location)?;
            write.write_u16::<LittleEndian>(entry.count)?;
            write.write_u16::<LittleEndian>(entry.value_offset)?;
        }
        Ok(())
    }

    /// Returns the `LASF_Projection` vlrs that hold these geokeys.
    ///
    /// The double parameter record is only included if there are double parameters.
    pub fn to_vlrs(&self) -> Result<Vec<Vlr>> {
        let mut directory = Vec::new();
        self.write_to(&mut directory)?;
        let mut vlrs = vec![Vlr::projection(DIRECTORY_RECORD_ID, directory)];
        if !self.double_params.is_empty() {
            let mut doubles = Vec::with_capacity(8 * self.double_params.len());
            for &value in &self.double_params {
                doubles.write_f64::<LittleEndian>(value)?;
            }
            vlrs.push(Vlr::projection(DOUBLE_PARAMS_RECORD_ID, doubles));
        }
        Ok(vlrs)
    }
}

impl Default for GeoKeys {
    fn default() -> GeoKeys {
        GeoKeys {
            key_directory_version: 1,
            key_revision: 1,
            minor_revision: 0,
            entries: Vec::new(),
            double_params: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_vlrs() {
        let mut geokeys = GeoKeys::new([(key::GT_MODEL_TYPE, 1), (key::PROJ_COORD_TRANS, 1)]);
        geokeys.push_double(key::PROJ_FALSE_EASTING, 500000.);
        geokeys.push_double(key::PROJ_SCALE_AT_NAT_ORIGIN, 0.9996);
        let vlrs = geokeys.to_vlrs().unwrap();
        assert_eq!(2, vlrs.len());
        assert_eq!(geokeys, GeoKeys::from_vlrs(&vlrs).unwrap().unwrap());
    }

    #[test]
    fn invalid_directory_header() {
        let directory = [2, 0, 1, 0, 0, 0, 0, 0];
        assert!(matches!(
            GeoKeys::read_from(&directory, None),
            Err(Error::InvalidGeoKeyDirectory {
                key_directory_version: 2,
                ..
            })
        ));
    }

    #[test]
    fn truncated_directory() {
        let directory = [1, 0, 1, 0, 0, 0, 2, 0, 0, 4, 0, 0, 1, 0, 2, 0];
        assert!(GeoKeys::read_from(&directory, None).is_err());
    }

    #[test]
    fn no_directory() {
        let vlrs: Vec<Vlr> = Vec::new();
        assert!(GeoKeys::from_vlrs(&vlrs).unwrap().is_none());
    }

    #[test]
    fn doubles() {
        let mut geokeys = GeoKeys::default();
        geokeys.push_double(key::PROJ_FALSE_EASTING, 1.);
        let entry = geokeys.entries[0];
        assert_eq!(&[1.], entry.doubles(&geokeys).unwrap());
        let missing = GeoKeyEntry {
            value_offset: 3,
            ..entry
        };
        assert!(matches!(
            missing.doubles(&geokeys),
            Err(Error::GeoKeyDoubleOffset { offset: 3, len: 1, .. })
        ));
        assert!(matches!(
            entry.doubles(&GeoKeys::default()),
            Err(Error::MissingGeoKeyDoubleParams(3082))
        ));
    }
}
