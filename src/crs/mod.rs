//! Coordinate reference systems.
//!
//! LAS files declare their CRS either with GeoTIFF geokeys or with an OGC WKT string. Only the
//! geokeys are decoded here. [CrsContext::apply_geokeys] walks them and selects an ellipsoid, a
//! projection and units; projected CRS codes are resolved by [epsg::resolve].
//!
//! Nothing here projects coordinates. Only the parameters are selected.
//!
//! ```
//! use las_validate::crs::{CrsContext, GeoKeys, Origin, Projection};
//!
//! let geokeys = GeoKeys::new([(1024, 1), (3072, 26915), (3076, 9001)]);
//! let mut context = CrsContext::new();
//! assert!(context.apply_geokeys(&geokeys));
//! assert!(matches!(context.projection(Origin::GeoKeys), Some(Projection::Utm(_))));
//! ```

mod context;
pub mod ellipsoid;
pub mod epsg;
pub mod geokey;
mod projection;
pub mod state_plane;
mod units;

pub use self::context::{CrsContext, Unsupported};
pub use self::ellipsoid::Ellipsoid;
pub use self::geokey::{GeoKeyEntry, GeoKeys};
pub use self::projection::{LambertConformalConic, Projection, TransverseMercator, Utm};
pub use self::units::{LinearUnit, Origin};
