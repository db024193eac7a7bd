use serde::{Deserialize, Serialize};

use crate::codon::GeneticCode;
use crate::error::{BioSeqError, Result};
use crate::orf::OrfDetector;

/// User-facing ORF detection settings, as read from a JSON config file.
///
/// `min_length` is signed so a negative value is reported as a configuration
/// error instead of failing to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Minimum ORF length in nucleotides.
    pub min_length: i64,
    /// NCBI genetic code table id.
    pub table: u8,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_length: 0,
            table: 1,
        }
    }
}

impl DetectorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BioSeqError::InvalidConfig(e.to_string()))
    }

    /// Validate the settings and build a detector.
    pub fn build(&self) -> Result<OrfDetector> {
        let code = GeneticCode::from_id(self.table)?;
        OrfDetector::try_new(self.min_length, code)
    }
}
