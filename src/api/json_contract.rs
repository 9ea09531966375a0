use serde::{Deserialize, Serialize};

use crate::core::Chart;
use crate::error::{AnnotatorError, AnnotatorResult};

pub const CHART_JSON_SCHEMA_V1: u32 = 1;

/// Versioned chart snapshot payload for host pages that persist figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartJsonContractV1 {
    pub schema_version: u32,
    pub chart: Chart,
}

impl Chart {
    pub fn to_json_contract_v1_pretty(&self) -> AnnotatorResult<String> {
        let payload = ChartJsonContractV1 {
            schema_version: CHART_JSON_SCHEMA_V1,
            chart: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AnnotatorError::InvalidData(format!("failed to serialize chart contract v1: {e}"))
        })
    }

    /// Parses either a schema-tagged contract payload or a bare chart.
    ///
    /// The tagged form is tried first: every chart field is defaultable, so a
    /// wrapped payload would otherwise also parse as an empty bare chart.
    pub fn from_json_compat_str(input: &str) -> AnnotatorResult<Self> {
        if let Ok(payload) = serde_json::from_str::<ChartJsonContractV1>(input) {
            if payload.schema_version != CHART_JSON_SCHEMA_V1 {
                return Err(AnnotatorError::InvalidData(format!(
                    "unsupported chart schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.chart);
        }
        serde_json::from_str::<Chart>(input).map_err(|e| {
            AnnotatorError::InvalidData(format!("failed to parse chart json payload: {e}"))
        })
    }
}
