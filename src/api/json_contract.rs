use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{EngineSnapshot, LineChartEngine};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned wrapper around [`EngineSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshotJsonContractV1 {
    /// Wraps `snapshot`, rejecting geometry JSON cannot carry.
    ///
    /// `serde_json` writes non-finite floats as `null`, which would not
    /// parse back into a snapshot.
    pub fn new(snapshot: EngineSnapshot) -> ChartResult<Self> {
        if let Some(index) = snapshot.points.iter().position(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "snapshot point {index} is not finite"
            )));
        }
        if snapshot
            .highlight
            .as_ref()
            .is_some_and(|highlight| !highlight.point.is_finite())
        {
            return Err(ChartError::InvalidData(
                "snapshot highlight point is not finite".to_owned(),
            ));
        }
        Ok(Self {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot,
        })
    }

    pub fn into_snapshot(self) -> ChartResult<EngineSnapshot> {
        if self.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                self.schema_version
            )));
        }
        Ok(self.snapshot)
    }
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1::new(self.clone())?;
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        payload.into_snapshot()
    }
}

impl<R: Renderer> LineChartEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
