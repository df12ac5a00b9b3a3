use crate::crs::Unsupported;
use std::fmt;

/// How bad a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// The file breaks a rule of the format.
    Fail,
    /// The file is legal but suspicious.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Severity::Fail => write!(f, "FAILED"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// One finding about a header, e.g. a header size that is too small.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// The header field or property the finding is about, e.g. "header size".
    pub category: &'static str,

    /// Fail or warning.
    pub severity: Severity,

    /// What is wrong, e.g. "should be at least 227 and not 226".
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.category, self.message)
    }
}

/// Receives diagnostics as the checks run.
///
/// Diagnostics arrive in a fixed order, so two runs over the same input produce the same
/// sequence.
pub trait Sink {
    /// Receives a failure.
    fn fail(&mut self, category: &'static str, message: String);

    /// Receives a warning.
    fn warning(&mut self, category: &'static str, message: String);

    /// Receives a coordinate reference system value that could not be resolved.
    ///
    /// These are not diagnostics. The default implementation drops them.
    fn unsupported(&mut self, unsupported: Unsupported) {
        let _ = unsupported;
    }
}

impl Sink for Vec<Diagnostic> {
    fn fail(&mut self, category: &'static str, message: String) {
        self.push(Diagnostic {
            category,
            severity: Severity::Fail,
            message,
        });
    }

    fn warning(&mut self, category: &'static str, message: String) {
        self.push(Diagnostic {
            category,
            severity: Severity::Warning,
            message,
        });
    }
}

/// Everything a check run found.
///
/// # Examples
///
/// ```
/// use las_validate::{Checker, Header, Report};
/// let header = Header::default();
/// let checker = Checker::new(&header, Default::default());
/// let report = checker.report(&header);
/// assert!(!report.is_valid());
/// assert!(report.fails().any(|diagnostic| diagnostic.category == "CRS"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    /// The diagnostics, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,

    /// Coordinate reference system values that could not be resolved.
    pub unsupported: Vec<Unsupported>,

    /// The description of the coordinate reference system, if one was resolved.
    pub crs_description: Option<String>,
}

impl Report {
    /// Returns an iterator over the failures.
    pub fn fails(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Fail)
    }

    /// Returns an iterator over the warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Warning)
    }

    /// Returns true if nothing failed. Warnings don't count.
    pub fn is_valid(&self) -> bool {
        self.fails().next().is_none()
    }
}

impl Sink for Report {
    fn fail(&mut self, category: &'static str, message: String) {
        self.diagnostics.fail(category, message);
    }

    fn warning(&mut self, category: &'static str, message: String) {
        self.diagnostics.warning(category, message);
    }

    fn unsupported(&mut self, unsupported: Unsupported) {
        self.unsupported.push(unsupported);
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{}", diagnostic)?;
        }
        for unsupported in &self.unsupported {
            writeln!(f, "unsupported: {}", unsupported)?;
        }
        if let Some(description) = &self.crs_description {
            writeln!(f, "CRS: {}", description)?;
        }
        if self.is_valid() {
            write!(f, "pass")
        } else {
            write!(f, "fail")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let mut report = Report::default();
        report.fail("header size", "should be at least 227 and not 226".to_string());
        report.warning("x scale factor", "should be factor ten of 0.1 or 0.25 and not 0.005".to_string());
        report.crs_description = Some("UTM 15 northern hemisphere".to_string());
        assert_eq!(
            "FAILED: header size: should be at least 227 and not 226\n\
             WARNING: x scale factor: should be factor ten of 0.1 or 0.25 and not 0.005\n\
             CRS: UTM 15 northern hemisphere\n\
             fail",
            report.to_string()
        );
    }

    #[test]
    fn warnings_are_valid() {
        let mut report = Report::default();
        report.warning("RGB", "color of all 2 points is (1/2/3)".to_string());
        assert!(report.is_valid());
        assert_eq!(1, report.warnings().count());
        assert_eq!(0, report.fails().count());
    }

    #[test]
    fn unsupported_goes_to_the_side() {
        let mut report = Report::default();
        report.unsupported(Unsupported::ProjectedCrs(1));
        assert!(report.diagnostics.is_empty());
        assert_eq!(vec![Unsupported::ProjectedCrs(1)], report.unsupported);

        let mut diagnostics = Vec::new();
        diagnostics.unsupported(Unsupported::ProjectedCrs(1));
        assert!(diagnostics.is_empty());
    }
}
