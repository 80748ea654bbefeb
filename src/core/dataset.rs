use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::core::angles::PitchKinematics;

pub const DEFAULT_DATA_PATH: &str = "2024mlbvradata.csv";

const MISSING_MARKERS: [&str; 6] = ["NA", "N/A", "NaN", "nan", "null", "NULL"];

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

/// Blank cells and NA-style markers are missing; any other unparsable cell is an error.
fn missing_or_number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(cell) if MISSING_MARKERS.contains(&cell) => Ok(None),
        Some(cell) => cell
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid number '{cell}'"))),
    }
}

/// One pitch row. Columns not named here are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PitchRecord {
    pub player_name: String,
    #[serde(default)]
    pub pitch_type: Option<String>,
    #[serde(default, deserialize_with = "missing_or_number")]
    pub vx0: Option<f64>,
    #[serde(default, deserialize_with = "missing_or_number")]
    pub vy0: Option<f64>,
    #[serde(default, deserialize_with = "missing_or_number")]
    pub vz0: Option<f64>,
    #[serde(default, deserialize_with = "missing_or_number")]
    pub ax: Option<f64>,
    #[serde(default, deserialize_with = "missing_or_number")]
    pub ay: Option<f64>,
    #[serde(default, deserialize_with = "missing_or_number")]
    pub az: Option<f64>,
    #[serde(default, deserialize_with = "missing_or_number")]
    pub release_extension: Option<f64>,
    #[serde(default, deserialize_with = "missing_or_number")]
    pub release_pos_x: Option<f64>,
    #[serde(default, deserialize_with = "missing_or_number")]
    pub release_pos_z: Option<f64>,
    #[serde(default, deserialize_with = "missing_or_number")]
    pub plate_z: Option<f64>,
}

impl PitchRecord {
    pub fn pitch_code(&self) -> &str {
        self.pitch_type.as_deref().unwrap_or("")
    }

    pub fn has_required_inputs(&self) -> bool {
        self.vy0.is_some() && self.release_extension.is_some()
    }

    /// `None` when `vy0` or `release_extension` is missing. Other gaps become NaN
    /// and surface as undefined angles.
    pub fn kinematics(&self) -> Option<PitchKinematics> {
        let vy0 = self.vy0?;
        let release_extension = self.release_extension?;
        let or_nan = |value: Option<f64>| value.unwrap_or(f64::NAN);
        Some(PitchKinematics {
            vx0: or_nan(self.vx0),
            vy0,
            vz0: or_nan(self.vz0),
            ax: or_nan(self.ax),
            ay: or_nan(self.ay),
            az: or_nan(self.az),
            release_extension,
            release_pos_x: or_nan(self.release_pos_x),
            release_pos_z: or_nan(self.release_pos_z),
            plate_z: or_nan(self.plate_z),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct PitchTable {
    records: Vec<PitchRecord>,
}

impl PitchTable {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: shown.clone(),
            source,
        })?;
        let table = Self::from_reader(file).map_err(|source| DatasetError::Csv {
            path: shown.clone(),
            source,
        })?;
        info!(
            path = %shown,
            rows = table.len(),
            players = table.player_names().len(),
            "loaded pitch table"
        );
        Ok(table)
    }

    /// Any malformed row fails the whole load. Cells are trimmed before parsing.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr);
        let records = reader
            .deserialize::<PitchRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PitchRecord] {
        &self.records
    }

    /// Distinct pitcher names in first-seen order.
    pub fn player_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|record| seen.insert(record.player_name.as_str()))
            .map(|record| record.player_name.clone())
            .collect()
    }

    pub fn for_player<'a>(&'a self, player: &'a str) -> impl Iterator<Item = &'a PitchRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.player_name == player)
    }
}
