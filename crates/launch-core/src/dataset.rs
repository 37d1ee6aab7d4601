// CSV loading of the launch records. Runs once at startup; the result is
// read-only for the rest of the process.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog;
use crate::error::DatasetError;
use crate::record::{LaunchRecord, Outcome};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_CLASS: &str = "class";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

/// Columns whose absence is a fatal load error.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAUNCH_SITE,
    COL_CLASS,
    COL_PAYLOAD_MASS,
    COL_BOOSTER_VERSION,
];

/// Row layout as it appears in the CSV. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category", default)]
    booster_category: Option<String>,
}

impl CsvRow {
    fn into_record(self, row: usize) -> Result<LaunchRecord, DatasetError> {
        let outcome = Outcome::from_class(self.class).ok_or_else(|| DatasetError::InvalidValue {
            row,
            column: COL_CLASS.to_string(),
            reason: format!("expected 0 or 1, got {}", self.class),
        })?;

        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidValue {
                row,
                column: COL_PAYLOAD_MASS.to_string(),
                reason: format!("expected a non-negative mass, got {}", self.payload_mass_kg),
            });
        }

        Ok(LaunchRecord {
            flight_number: self.flight_number,
            launch_site: self.launch_site,
            outcome,
            payload_mass_kg: self.payload_mass_kg,
            booster_version: self.booster_version,
            booster_category: self.booster_category.filter(|c| !c.is_empty()),
        })
    }
}

/// The immutable launch record set.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    /// Read the dataset from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            sites = dataset.sites().len(),
            "loaded launch dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV text (with a header row) from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn { column });
            }
        }
        debug!(columns = headers.len(), "dataset header validated");

        let mut records = Vec::new();
        for (idx, row) in rdr.deserialize::<CsvRow>().enumerate() {
            let row_number = idx + 1;
            let row = row.map_err(|err| classify_csv_error(err, row_number, &headers))?;
            records.push(row.into_record(row_number)?);
        }

        Ok(Self { records })
    }

    /// Build a dataset from already-parsed records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct site labels in first-seen order.
    pub fn sites(&self) -> Vec<String> {
        catalog::site_list(&self.records)
    }

    /// Observed `(min, max)` payload mass, or `None` for an empty dataset.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut masses = self.records.iter().map(|r| r.payload_mass_kg);
        let first = masses.next()?;
        Some(masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m))))
    }

    /// Number of successful launches across every site.
    pub fn total_successes(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }
}

/// Turn a serde failure into an `InvalidValue` naming the offending column.
fn classify_csv_error(err: csv::Error, row: usize, headers: &csv::StringRecord) -> DatasetError {
    if let csv::ErrorKind::Deserialize { err: de, .. } = err.kind() {
        let column = de
            .field()
            .and_then(|idx| headers.get(idx as usize))
            .unwrap_or("<unknown>")
            .to_string();
        return DatasetError::InvalidValue {
            row,
            column,
            reason: de.kind().to_string(),
        };
    }
    DatasetError::Csv(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,3,VAFB SLC-4E,1,9600.0,F9 B4 B1041.1,B4
3,4,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
";

    #[test]
    fn test_parse_sample() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 4);

        let first = &dataset.records()[0];
        assert_eq!(first.flight_number, Some(1));
        assert_eq!(first.launch_site, "CCAFS LC-40");
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.booster_version, "F9 v1.0  B0003");
        assert_eq!(first.booster_category.as_deref(), Some("v1.0"));

        assert_eq!(dataset.payload_bounds(), Some((0.0, 9600.0)));
        assert_eq!(dataset.total_successes(), 2);
        assert_eq!(
            dataset.sites(),
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
    }

    #[test]
    fn test_optional_columns_absent() {
        let text = "Launch Site,class,Payload Mass (kg),Booster Version\nA,1,100,F9\n";
        let dataset = Dataset::from_reader(text.as_bytes()).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.flight_number, None);
        assert_eq!(record.booster_category, None);
    }

    #[test]
    fn test_missing_column() {
        let text = "Launch Site,class,Booster Version\nA,1,F9\n";
        let err = Dataset::from_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn { column: "Payload Mass (kg)" }
        ));
    }

    #[test]
    fn test_non_numeric_payload() {
        let text = "Launch Site,class,Payload Mass (kg),Booster Version\nA,1,100,F9\nB,0,heavy,F9\n";
        let err = Dataset::from_reader(text.as_bytes()).unwrap_err();
        match err {
            DatasetError::InvalidValue { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Payload Mass (kg)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_class_out_of_range() {
        let text = "Launch Site,class,Payload Mass (kg),Booster Version\nA,3,100,F9\n";
        let err = Dataset::from_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidValue { row: 1, ref column, .. } if column == "class"));
    }

    #[test]
    fn test_negative_payload_rejected() {
        let text = "Launch Site,class,Payload Mass (kg),Booster Version\nA,1,-5,F9\n";
        let err = Dataset::from_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidValue { ref column, .. } if column == "Payload Mass (kg)"));
    }

    #[test]
    fn test_empty_dataset() {
        let text = "Launch Site,class,Payload Mass (kg),Booster Version\n";
        let dataset = Dataset::from_reader(text.as_bytes()).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.payload_bounds(), None);
        assert!(dataset.sites().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
