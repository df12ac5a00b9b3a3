//! The header rules, in the order they run.

use crate::check::Sink;
use crate::feature::{Feature, GpsStandardTime, SyntheticReturnNumbers, Waveforms, Wkt};
use crate::point::minimum_record_length;
use crate::utils::{format_g, lidar_double_scaled};
use crate::{GpsTime, Header, Inventory, Version};
use chrono::{Datelike, NaiveDate};

const SIGNATURE: &[u8; 4] = b"LASF";
const FIRST_FILE_CREATION_YEAR: i32 = 1990;
const SECONDS_PER_WEEK: f64 = 604800.;
const ROUND_SCALES: [f64; 15] = [
    0.01, 0.001, 0.1, 0.000001, 0.0000001, 0.00000001, 0.0001, 0.00001, 1.0, 0.25, 0.025,
    0.0025, 0.00025, 0.000025, 0.0000025,
];
const SCALE_TOLERANCE: f64 = 0.0000001;

/// Runs every header rule.
pub(crate) fn check(header: &Header, inventory: &Inventory, today: NaiveDate, sink: &mut dyn Sink) {
    file_signature(header, sink);
    global_encoding(header, inventory, sink);
    version(header, sink);
    identifier(&header.system_identifier, sink);
    identifier(&header.generating_software, sink);
    file_creation_date(header, today, sink);
    header_size(header, sink);
    offset_to_point_data(header, sink);
    point_data_format(header, sink);
    point_data_record_length(header, sink);
    legacy_counts(header, sink);
    if inventory.is_active() {
        point_counts(header, inventory, sink);
    }
    scale_factors(header, sink);
    waveform_data_packets(header, sink);
    if inventory.is_active() {
        bounding_box(header, inventory, sink);
        return_numbers(header, inventory, sink);
        number_of_returns(header, inventory, sink);
        gps_time(header, inventory, sink);
        color(header, inventory, sink);
    }
    crs_presence(header, sink);
}

fn file_signature(header: &Header, sink: &mut dyn Sink) {
    if &header.file_signature != SIGNATURE {
        let end = header
            .file_signature
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(header.file_signature.len());
        let signature = String::from_utf8_lossy(&header.file_signature[..end]);
        sink.fail(
            "file signature",
            format!("should be 'LASF' and not '{:>4}'", signature),
        );
    }
}

/// A 1.x version from before `F` was introduced.
fn undefined<F: Feature>(version: Version) -> bool {
    version.major == 1 && !version.supports::<F>()
}

fn has_waveform_format(header: &Header) -> bool {
    matches!(header.point_data_format(), 4 | 5 | 9 | 10)
}

fn global_encoding(header: &Header, inventory: &Inventory, sink: &mut dyn Sink) {
    let encoding = header.global_encoding;
    let version = header.version;
    let format = header.point_data_format();

    if encoding.has_reserved_bits() {
        sink.fail(
            "global encoding",
            format!("should be 31 or smaller but is {}", u16::from(encoding)),
        );
    }

    if encoding.has_wkt_crs() {
        if undefined::<Wkt>(version) {
            sink.fail(
                "global encoding",
                format!("set bit 4 not defined for LAS version {}", version),
            );
        }
    } else if version.is_at_least(4) && format >= 6 {
        sink.fail(
            "global encoding",
            format!(
                "bit 4 must be set (OGC WKT must be used) for point data format {}",
                format
            ),
        );
    }

    if encoding.has_synthetic_return_numbers() && undefined::<SyntheticReturnNumbers>(version) {
        sink.fail(
            "global encoding",
            format!("set bit 3 not defined for LAS version {}", version),
        );
    }

    if encoding.has_external_waveforms() {
        if undefined::<Waveforms>(version) {
            sink.fail(
                "global encoding",
                format!("set bit 2 not defined for LAS version {}", version),
            );
        }
        if !has_waveform_format(header) {
            sink.fail(
                "global encoding",
                format!("set bit 2 not defined for point data format {}", format),
            );
        }
        if encoding.has_internal_waveforms() {
            sink.fail(
                "global encoding",
                "although bit 1 and bit 2 are mutually exclusive they are both set".to_string(),
            );
        }
    } else if version.is_at_least(3)
        && has_waveform_format(header)
        && !encoding.has_internal_waveforms()
    {
        sink.fail(
            "global encoding",
            format!(
                "neither bit 1 nor bit 2 are set for point data format {}",
                format
            ),
        );
    }

    if encoding.has_internal_waveforms() {
        if undefined::<Waveforms>(version) {
            sink.fail(
                "global encoding",
                format!("set bit 1 not defined for LAS version {}", version),
            );
        }
        if !has_waveform_format(header) {
            sink.fail(
                "global encoding",
                format!("set bit 1 not defined for point data format {}", format),
            );
        }
    }

    if encoding.gps_time() == GpsTime::Standard {
        if undefined::<GpsStandardTime>(version) {
            sink.fail(
                "global encoding",
                format!("set bit 0 not defined for LAS version {}", version),
            );
        }
        if format == 0 {
            sink.fail(
                "global encoding",
                "set bit 0 not defined for point data format 0".to_string(),
            );
        }
    } else if format > 0 {
        if let (Some(min), Some(max)) = (inventory.min_gps_time, inventory.max_gps_time) {
            if min < 0. || max > SECONDS_PER_WEEK {
                sink.fail(
                    "global encoding",
                    format!(
                        "unset bit 0 suggests GPS week time but GPS time ranges from {} to {}",
                        format_g(min),
                        format_g(max)
                    ),
                );
            }
        }
    }
}

fn version(header: &Header, sink: &mut dyn Sink) {
    if header.version.major != 1 {
        sink.fail(
            "version major",
            format!("should be 1 and not {}", header.version.major),
        );
    }
    if header.version.minor > 4 {
        sink.fail(
            "version minor",
            format!("should be between 0 and 4 and not {}", header.version.minor),
        );
    }
}

fn identifier(field: &[u8; 32], sink: &mut dyn Sink) {
    match field.iter().position(|&b| b == 0) {
        None => sink.fail(
            "system identifier",
            "string should be terminated by a '\\0' character".to_string(),
        ),
        Some(end) => {
            if end == 0 {
                sink.warning(
                    "system identifier",
                    "empty string. first character is '\\0'".to_string(),
                );
            }
            if field[end..].iter().any(|&b| b != 0) {
                sink.fail(
                    "system identifier",
                    "remaining characters should all be '\\0'".to_string(),
                );
            }
        }
    }
}

fn file_creation_date(header: &Header, today: NaiveDate, sink: &mut dyn Sink) {
    let year = header.file_creation_year;
    let day = header.file_creation_day_of_year;
    if year == 0 {
        if day == 0 {
            sink.fail("file creation day", "not set".to_string());
        } else if day > 365 {
            sink.fail(
                "file creation day",
                format!("should be between 1 and 365 and not {}", day),
            );
        }
        sink.fail("file creation year", "not set".to_string());
        return;
    }

    let today_year = today.year();
    if i32::from(year) < FIRST_FILE_CREATION_YEAR || i32::from(year) > today_year {
        sink.fail(
            "file creation year",
            format!(
                "should be between {} and {} and not {}",
                FIRST_FILE_CREATION_YEAR, today_year, year
            ),
        );
    }

    // Days count from zero.
    let max_day_of_year = if i32::from(year) == today_year {
        today.ordinal0()
    } else if year % 4 == 0 {
        366
    } else {
        365
    };
    if u32::from(day) > max_day_of_year {
        sink.fail(
            "file creation day",
            format!("should be between 0 and {} and not {}", max_day_of_year, day),
        );
    }
}

fn header_size(header: &Header, sink: &mut dyn Sink) {
    let minimum = header.version.minimum_header_size();
    if header.header_size < minimum {
        sink.fail(
            "header size",
            format!(
                "should be at least {} and not {}",
                minimum, header.header_size
            ),
        );
    }
}

fn offset_to_point_data(header: &Header, sink: &mut dyn Sink) {
    let minimum = u64::from(header.header_size) + header.vlr_len();
    if u64::from(header.offset_to_point_data) < minimum {
        sink.fail(
            "offset to point data",
            format!(
                "should be at least {} and not {}",
                minimum, header.offset_to_point_data
            ),
        );
    }
}

fn point_data_format(header: &Header, sink: &mut dyn Sink) {
    let max = header.version.max_point_format();
    let format = header.point_data_format();
    if format > max {
        sink.fail(
            "point data format",
            format!("should be between 0 and {} and not {}", max, format),
        );
    }
}

fn point_data_record_length(header: &Header, sink: &mut dyn Sink) {
    let minimum = minimum_record_length(header.point_data_format());
    if header.point_data_record_length < minimum {
        sink.fail(
            "point data record length",
            format!(
                "should be at least {} and not {}",
                minimum, header.point_data_record_length
            ),
        );
    }
}

fn clamp(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn ordinal_suffix(n: usize) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn legacy_counts(header: &Header, sink: &mut dyn Sink) {
    if !header.version.is_at_least(4) {
        return;
    }
    let legacy = header.legacy_number_of_point_records;
    let expected = clamp(header.number_of_point_records);
    if legacy != 0 && legacy != expected {
        sink.fail(
            "legacy number of point records",
            format!(
                "should be consistent with number of point records and either be 0 or {} and not {}",
                expected, legacy
            ),
        );
    }
    for (&legacy, &n) in header
        .legacy_number_of_points_by_return
        .iter()
        .zip(&header.number_of_points_by_return)
    {
        let expected = clamp(n);
        if legacy != 0 && legacy != expected {
            sink.fail(
                "legacy number of point by return",
                format!(
                    "should be consistent with number of point by return and either be 0 or {} and not {}",
                    expected, legacy
                ),
            );
        }
    }
}

fn point_counts(header: &Header, inventory: &Inventory, sink: &mut dyn Sink) {
    // Slot zero of the inventory counts return number zero, so header return i is slot i + 1.
    let counted_by_return = &inventory.points_by_return[1..];
    if header.version.is_at_least(4) {
        if header.number_of_point_records != inventory.number_of_points {
            sink.fail(
                "number of point records",
                format!(
                    "there are only {} point records and not {}",
                    inventory.number_of_points, header.number_of_point_records
                ),
            );
        }
        for (i, (&declared, &counted)) in header
            .number_of_points_by_return
            .iter()
            .zip(counted_by_return)
            .enumerate()
        {
            if declared != counted {
                sink.fail(
                    "number of point by return",
                    format!(
                        "the number of {}{} return(s) is {} and not {}",
                        i + 1,
                        ordinal_suffix(i + 1),
                        counted,
                        declared
                    ),
                );
            }
        }
    } else {
        let counted = clamp(inventory.number_of_points);
        if header.legacy_number_of_point_records != counted {
            sink.fail(
                "number of point records",
                format!(
                    "there are only {} point records and not {}",
                    counted, header.legacy_number_of_point_records
                ),
            );
        }
        for (i, (&declared, &counted)) in header
            .legacy_number_of_points_by_return
            .iter()
            .zip(counted_by_return)
            .enumerate()
        {
            let counted = clamp(counted);
            if declared != counted {
                sink.fail(
                    "number of point by return",
                    format!(
                        "the number of {}{} return(s) is {} and not {}",
                        i + 1,
                        ordinal_suffix(i + 1),
                        counted,
                        declared
                    ),
                );
            }
        }
    }
}

fn is_round_scale(scale: f64) -> bool {
    ROUND_SCALES
        .iter()
        .any(|&round| (scale - round).abs() <= SCALE_TOLERANCE)
}

fn scale_factors(header: &Header, sink: &mut dyn Sink) {
    let transforms = &header.transforms;
    let axes = [
        (transforms.x, "x scale factor"),
        (transforms.y, "y scale factor"),
        (transforms.z, "z scale factor"),
    ];
    for &(transform, category) in &axes {
        if transform.scale <= 0. {
            sink.fail(
                category,
                format!(
                    "{} is equal to or smaller than zero",
                    format_g(transform.scale)
                ),
            );
        }
    }
    for &(transform, category) in &axes {
        if !is_round_scale(transform.scale) {
            sink.warning(
                category,
                format!(
                    "should be factor ten of 0.1 or 0.25 and not {}",
                    format_g(transform.scale)
                ),
            );
        }
    }
}

fn waveform_data_packets(header: &Header, sink: &mut dyn Sink) {
    if !header.version.is_at_least(3) {
        return;
    }
    let start = header.start_of_waveform_data_packet_record;
    if header.global_encoding.has_internal_waveforms() {
        if start == 0 {
            sink.fail(
                "start of waveform data packet record",
                "should not be 0 because global encoding bit 1 is set".to_string(),
            );
        }
    } else if start != 0 {
        sink.fail(
            "start of waveform data packet record",
            format!(
                "should be 0 because global encoding bit 1 is not set and not {}",
                start
            ),
        );
    }
}

fn bounding_box(header: &Header, inventory: &Inventory, sink: &mut dyn Sink) {
    let transforms = &header.transforms;
    let min = inventory.transformed_min(transforms);
    let max = inventory.transformed_max(transforms);
    let declared = &header.bounds;
    let axes = [
        (transforms.x, min.x, max.x, declared.min.x, declared.max.x, "min x", "max x"),
        (transforms.y, min.y, max.y, declared.min.y, declared.max.y, "min y", "max y"),
        (transforms.z, min.z, max.z, declared.min.z, declared.max.z, "min z", "max z"),
    ];
    for (transform, min, max, declared_min, declared_max, min_category, max_category) in axes {
        let scale = transform.scale;
        if declared_min - transform.half_scale() > min {
            sink.fail(
                min_category,
                format!(
                    "should be {} and not {}",
                    lidar_double_scaled(min, scale),
                    lidar_double_scaled(declared_min, scale)
                ),
            );
        }
        if declared_max + transform.half_scale() < max {
            sink.fail(
                max_category,
                format!(
                    "should be {} and not {}",
                    lidar_double_scaled(max, scale),
                    lidar_double_scaled(declared_max, scale)
                ),
            );
        }
    }
}

fn return_numbers(header: &Header, inventory: &Inventory, sink: &mut dyn Sink) {
    let counts = &inventory.points_by_return;
    if counts[0] != 0 {
        sink.warning(
            "return number",
            format!("there are {} points with a return number of 0", counts[0]),
        );
    }
    if header.version.is_at_most(3) {
        for n in [6, 7] {
            if counts[n] != 0 {
                sink.warning(
                    "return number",
                    format!("there are {} points with a return number of {}", counts[n], n),
                );
            }
        }
    }
}

fn number_of_returns(header: &Header, inventory: &Inventory, sink: &mut dyn Sink) {
    let counts = &inventory.points_by_number_of_returns;
    if counts[0] != 0 {
        sink.warning(
            "number of returns of given pulse",
            format!(
                "there are {} points with a number of returns of given pulse of 0",
                counts[0]
            ),
        );
    }
    if header.version.is_at_most(3) {
        for n in [6, 7] {
            if counts[n] != 0 {
                sink.warning(
                    "return number",
                    format!(
                        "there are {} points with a number of returns of given pulse of {}",
                        counts[n], n
                    ),
                );
            }
        }
    }
}

fn gps_time(header: &Header, inventory: &Inventory, sink: &mut dyn Sink) {
    if header.point_data_format() == 0 || inventory.number_of_points < 2 {
        return;
    }
    if let (Some(min), Some(max)) = (inventory.min_gps_time, inventory.max_gps_time) {
        if min == max {
            sink.warning(
                "GPS time",
                format!(
                    "time stamps of all {} points are {}",
                    inventory.number_of_points,
                    format_g(min)
                ),
            );
        }
    }
}

fn color(header: &Header, inventory: &Inventory, sink: &mut dyn Sink) {
    if !matches!(header.point_data_format(), 2 | 3 | 7 | 8 | 10) || inventory.number_of_points < 2 {
        return;
    }
    if let (Some(min), Some(max)) = (inventory.min_color, inventory.max_color) {
        if min == max {
            sink.warning(
                "RGB",
                format!(
                    "color of all {} points is ({}/{}/{})",
                    inventory.number_of_points, max.red, max.green, max.blue
                ),
            );
        }
    }
}

fn crs_presence(header: &Header, sink: &mut dyn Sink) {
    if header.point_data_format() <= 5 {
        if header.geokeys.is_none() {
            sink.fail(
                "CRS",
                "file does not specify a Coordinate Reference System with GEOTIFF tags"
                    .to_string(),
            );
        }
    } else if header.wkt_crs().is_none() {
        sink.fail(
            "CRS",
            format!(
                "file with point data format {} does not specify Coordinate Reference System with OGC WRT string",
                header.point_data_format()
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{Diagnostic, Severity};
    use crate::crs::GeoKeys;
    use crate::{Color, Point, Version, Vlr};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn identifier_from(s: &str) -> [u8; 32] {
        let mut field = [0; 32];
        field[..s.len()].copy_from_slice(s.as_bytes());
        field
    }

    fn valid_header(version: Version) -> Header {
        Header {
            version,
            system_identifier: identifier_from("test"),
            generating_software: identifier_from("las-validate"),
            file_creation_year: 2020,
            file_creation_day_of_year: 100,
            header_size: version.minimum_header_size(),
            offset_to_point_data: u32::from(version.minimum_header_size()),
            geokeys: Some(GeoKeys::new([(1024, 1), (3072, 32615)])),
            ..Default::default()
        }
    }

    fn run(header: &Header, inventory: &Inventory) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        check(header, inventory, today(), &mut diagnostics);
        diagnostics
    }

    fn fails(header: &Header, inventory: &Inventory) -> Vec<(&'static str, String)> {
        run(header, inventory)
            .into_iter()
            .filter(|d| d.severity == Severity::Fail)
            .map(|d| (d.category, d.message))
            .collect()
    }

    fn warnings(header: &Header, inventory: &Inventory) -> Vec<(&'static str, String)> {
        run(header, inventory)
            .into_iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| (d.category, d.message))
            .collect()
    }

    fn inventory(points: &[Point]) -> Inventory {
        let mut inventory = Inventory::default();
        for point in points {
            inventory.add(point);
        }
        inventory
    }

    fn first_return(x: i32) -> Point {
        Point {
            x,
            return_number: 1,
            number_of_returns: 1,
            ..Default::default()
        }
    }

    macro_rules! rules {
        ($name:ident, $minor:expr) => {
            mod $name {
                use super::*;

                fn header() -> Header {
                    valid_header(Version::new(1, $minor))
                }

                #[test]
                fn valid() {
                    assert!(run(&header(), &Inventory::default()).is_empty());
                }

                #[test]
                fn header_size() {
                    let mut header = header();
                    header.header_size -= 1;
                    let minimum = Version::new(1, $minor).minimum_header_size();
                    assert_eq!(
                        vec![(
                            "header size",
                            format!("should be at least {} and not {}", minimum, minimum - 1)
                        )],
                        fails(&header, &Inventory::default())
                    );
                }

                #[test]
                fn reserved_bits() {
                    let mut header = header();
                    header.global_encoding = 32.into();
                    assert_eq!(
                        vec![(
                            "global encoding",
                            "should be 31 or smaller but is 32".to_string()
                        )],
                        fails(&header, &Inventory::default())
                    );
                }

                #[test]
                fn synthetic_return_numbers() {
                    let mut header = header();
                    header.global_encoding = 8.into();
                    let fails = fails(&header, &Inventory::default());
                    if $minor <= 2 {
                        assert_eq!(
                            vec![(
                                "global encoding",
                                format!("set bit 3 not defined for LAS version 1.{}", $minor)
                            )],
                            fails
                        );
                    } else {
                        assert!(fails.is_empty());
                    }
                }

                #[test]
                fn return_number_six() {
                    let mut header = header();
                    header.legacy_number_of_point_records = 1;
                    header.number_of_point_records = 1;
                    let inventory = inventory(&[Point {
                        return_number: 6,
                        number_of_returns: 6,
                        ..Default::default()
                    }]);
                    let warnings = warnings(&header, &inventory);
                    if $minor < 4 {
                        assert_eq!(
                            vec![
                                (
                                    "return number",
                                    "there are 1 points with a return number of 6".to_string()
                                ),
                                (
                                    "return number",
                                    "there are 1 points with a number of returns of given pulse of 6"
                                        .to_string()
                                ),
                            ],
                            warnings
                        );
                    } else {
                        assert!(warnings.is_empty());
                    }
                }
            }
        };
    }

    rules!(las_1_0, 0);
    rules!(las_1_1, 1);
    rules!(las_1_2, 2);
    rules!(las_1_3, 3);
    rules!(las_1_4, 4);

    #[test]
    fn file_signature() {
        let mut header = valid_header(Version::new(1, 2));
        header.file_signature = *b"LAS\0";
        assert_eq!(
            vec![("file signature", "should be 'LASF' and not ' LAS'".to_string())],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn version_numbers() {
        let mut header = valid_header(Version::new(2, 5));
        header.header_size = 227;
        header.offset_to_point_data = 227;
        let fails = fails(&header, &Inventory::default());
        assert_eq!(
            ("version major", "should be 1 and not 2".to_string()),
            fails[0]
        );
        assert_eq!(
            ("version minor", "should be between 0 and 4 and not 5".to_string()),
            fails[1]
        );
    }

    #[test]
    fn wkt_bit_required() {
        let mut header = valid_header(Version::new(1, 4));
        header.point_data_format_id = 6;
        header.point_data_record_length = 30;
        assert_eq!(
            vec![
                (
                    "global encoding",
                    "bit 4 must be set (OGC WKT must be used) for point data format 6".to_string()
                ),
                (
                    "CRS",
                    "file with point data format 6 does not specify Coordinate Reference System with OGC WRT string"
                        .to_string()
                ),
            ],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn wkt_bit_too_early() {
        let mut header = valid_header(Version::new(1, 3));
        header.global_encoding = 16.into();
        assert_eq!(
            vec![(
                "global encoding",
                "set bit 4 not defined for LAS version 1.3".to_string()
            )],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn waveform_bits() {
        let mut header = valid_header(Version::new(1, 3));
        header.point_data_format_id = 4;
        header.point_data_record_length = 57;
        assert_eq!(
            vec![(
                "global encoding",
                "neither bit 1 nor bit 2 are set for point data format 4".to_string()
            )],
            fails(&header, &Inventory::default())
        );

        header.global_encoding = 6.into();
        header.start_of_waveform_data_packet_record = 1000;
        assert_eq!(
            vec![(
                "global encoding",
                "although bit 1 and bit 2 are mutually exclusive they are both set".to_string()
            )],
            fails(&header, &Inventory::default())
        );

        header.point_data_format_id = 1;
        header.point_data_record_length = 28;
        header.global_encoding = 3.into();
        assert_eq!(
            vec![(
                "global encoding",
                "set bit 1 not defined for point data format 1".to_string()
            )],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn compressed_format_id() {
        let mut header = valid_header(Version::new(1, 2));
        header.point_data_format_id = 131;
        header.point_data_record_length = 34;
        assert!(run(&header, &Inventory::default()).is_empty());

        header.point_data_record_length = 28;
        assert_eq!(
            vec![(
                "point data record length",
                "should be at least 34 and not 28".to_string()
            )],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn waveform_start() {
        let mut header = valid_header(Version::new(1, 3));
        header.start_of_waveform_data_packet_record = 42;
        assert_eq!(
            vec![(
                "start of waveform data packet record",
                "should be 0 because global encoding bit 1 is not set and not 42".to_string()
            )],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn gps_week_time() {
        let mut header = valid_header(Version::new(1, 2));
        header.point_data_format_id = 1;
        header.point_data_record_length = 28;
        header.legacy_number_of_point_records = 2;
        header.legacy_number_of_points_by_return = [2, 0, 0, 0, 0];
        let inventory = inventory(&[
            Point {
                gps_time: Some(-1.),
                ..first_return(0)
            },
            Point {
                gps_time: Some(700000.),
                ..first_return(0)
            },
        ]);
        assert_eq!(
            vec![(
                "global encoding",
                "unset bit 0 suggests GPS week time but GPS time ranges from -1 to 700000"
                    .to_string()
            )],
            fails(&header, &inventory)
        );
    }

    #[test]
    fn gps_standard_time_on_format_zero() {
        let mut header = valid_header(Version::new(1, 2));
        header.global_encoding = 1.into();
        assert_eq!(
            vec![(
                "global encoding",
                "set bit 0 not defined for point data format 0".to_string()
            )],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn identifiers() {
        let mut header = valid_header(Version::new(1, 2));
        header.system_identifier = [b'a'; 32];
        header.generating_software[20] = b'x';
        assert_eq!(
            vec![
                (
                    "system identifier",
                    "string should be terminated by a '\\0' character".to_string()
                ),
                (
                    "system identifier",
                    "remaining characters should all be '\\0'".to_string()
                ),
            ],
            fails(&header, &Inventory::default())
        );

        header.system_identifier = [0; 32];
        assert_eq!(
            vec![(
                "system identifier",
                "empty string. first character is '\\0'".to_string()
            )],
            warnings(&header, &Inventory::default())
        );
    }

    #[test]
    fn file_creation_date_not_set() {
        let mut header = valid_header(Version::new(1, 2));
        header.file_creation_year = 0;
        header.file_creation_day_of_year = 0;
        assert_eq!(
            vec![
                ("file creation day", "not set".to_string()),
                ("file creation year", "not set".to_string()),
            ],
            fails(&header, &Inventory::default())
        );

        header.file_creation_day_of_year = 400;
        assert_eq!(
            (
                "file creation day",
                "should be between 1 and 365 and not 400".to_string()
            ),
            fails(&header, &Inventory::default())[0]
        );
    }

    #[test]
    fn file_creation_date_ranges() {
        let mut header = valid_header(Version::new(1, 2));
        header.file_creation_year = 2025;
        assert_eq!(
            vec![(
                "file creation year",
                "should be between 1990 and 2024 and not 2025".to_string()
            )],
            fails(&header, &Inventory::default())
        );

        header.file_creation_year = 2024;
        header.file_creation_day_of_year = 61;
        assert_eq!(
            vec![(
                "file creation day",
                "should be between 0 and 60 and not 61".to_string()
            )],
            fails(&header, &Inventory::default())
        );

        header.file_creation_year = 2020;
        header.file_creation_day_of_year = 366;
        assert!(fails(&header, &Inventory::default()).is_empty());

        header.file_creation_year = 2021;
        assert_eq!(
            vec![(
                "file creation day",
                "should be between 0 and 365 and not 366".to_string()
            )],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn offset_to_point_data_counts_vlrs() {
        let mut header = valid_header(Version::new(1, 2));
        header.vlrs.push(Vlr {
            data: vec![0; 46],
            ..Default::default()
        });
        assert_eq!(
            vec![(
                "offset to point data",
                "should be at least 327 and not 227".to_string()
            )],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn point_format_and_record_length() {
        let mut header = valid_header(Version::new(1, 1));
        header.point_data_format_id = 3;
        assert_eq!(
            vec![
                (
                    "point data format",
                    "should be between 0 and 1 and not 3".to_string()
                ),
                (
                    "point data record length",
                    "should be at least 34 and not 20".to_string()
                ),
            ],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn legacy_counts() {
        let mut header = valid_header(Version::new(1, 4));
        header.number_of_point_records = 10;
        header.legacy_number_of_point_records = 9;
        header.number_of_points_by_return[0] = 10;
        header.legacy_number_of_points_by_return[0] = 10;
        header.legacy_number_of_points_by_return[1] = 3;
        assert_eq!(
            vec![
                (
                    "legacy number of point records",
                    "should be consistent with number of point records and either be 0 or 10 and not 9"
                        .to_string()
                ),
                (
                    "legacy number of point by return",
                    "should be consistent with number of point by return and either be 0 or 0 and not 3"
                        .to_string()
                ),
            ],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn point_counts() {
        let mut header = valid_header(Version::new(1, 4));
        header.number_of_point_records = 2;
        header.number_of_points_by_return[0] = 1;
        header.number_of_points_by_return[1] = 5;
        let inventory = inventory(&[
            first_return(0),
            Point {
                return_number: 2,
                number_of_returns: 2,
                ..Default::default()
            },
        ]);
        assert_eq!(
            vec![(
                "number of point by return",
                "the number of 2nd return(s) is 1 and not 5".to_string()
            )],
            fails(&header, &inventory)
        );

        let mut header = valid_header(Version::new(1, 2));
        header.legacy_number_of_point_records = 3;
        header.legacy_number_of_points_by_return = [1, 1, 0, 0, 0];
        assert_eq!(
            vec![(
                "number of point records",
                "there are only 2 point records and not 3".to_string()
            )],
            fails(&header, &inventory)
        );
    }

    #[test]
    fn scale_factor_not_round() {
        let mut header = valid_header(Version::new(1, 2));
        header.transforms.x.scale = 0.005;
        assert!(fails(&header, &Inventory::default()).is_empty());
        assert_eq!(
            vec![(
                "x scale factor",
                "should be factor ten of 0.1 or 0.25 and not 0.005".to_string()
            )],
            warnings(&header, &Inventory::default())
        );
    }

    #[test]
    fn scale_factor_not_positive() {
        let mut header = valid_header(Version::new(1, 2));
        header.transforms.z.scale = 0.;
        assert_eq!(
            vec![(
                "z scale factor",
                "0 is equal to or smaller than zero".to_string()
            )],
            fails(&header, &Inventory::default())
        );
    }

    #[test]
    fn bounding_box() {
        let mut header = valid_header(Version::new(1, 2));
        header.legacy_number_of_point_records = 1;
        header.legacy_number_of_points_by_return = [1, 0, 0, 0, 0];
        let inventory = inventory(&[first_return(-100)]);
        assert_eq!(
            vec![("min x", "should be -1.00 and not 0.00".to_string())],
            fails(&header, &inventory)
        );

        header.bounds.min.x = -0.996;
        assert!(fails(&header, &inventory).is_empty());
    }

    #[test]
    fn constant_gps_time_and_color() {
        let mut header = valid_header(Version::new(1, 2));
        header.point_data_format_id = 3;
        header.point_data_record_length = 34;
        header.global_encoding = 1.into();
        header.legacy_number_of_point_records = 2;
        header.legacy_number_of_points_by_return = [2, 0, 0, 0, 0];
        let point = Point {
            gps_time: Some(12.5),
            color: Some(Color::new(1, 2, 3)),
            ..first_return(0)
        };
        assert_eq!(
            vec![
                ("GPS time", "time stamps of all 2 points are 12.5".to_string()),
                ("RGB", "color of all 2 points is (1/2/3)".to_string()),
            ],
            warnings(&header, &inventory(&[point, point]))
        );
    }

    #[test]
    fn number_of_returns_zero() {
        let mut header = valid_header(Version::new(1, 4));
        header.number_of_point_records = 1;
        header.number_of_points_by_return[0] = 1;
        let inventory = inventory(&[Point {
            return_number: 1,
            ..Default::default()
        }]);
        assert_eq!(
            vec![(
                "number of returns of given pulse",
                "there are 1 points with a number of returns of given pulse of 0".to_string()
            )],
            warnings(&header, &inventory)
        );
    }

    #[test]
    fn missing_geokeys() {
        let mut header = valid_header(Version::new(1, 2));
        header.geokeys = None;
        assert_eq!(
            vec![(
                "CRS",
                "file does not specify a Coordinate Reference System with GEOTIFF tags".to_string()
            )],
            fails(&header, &Inventory::default())
        );
    }
}
