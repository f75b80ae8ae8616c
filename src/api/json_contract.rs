use serde::{Deserialize, Serialize};

use crate::error::{StripError, StripResult};
use crate::render::Renderer;

use super::StripEngine;

pub const STRIP_OPTIONS_JSON_SCHEMA_V1: u32 = 1;

/// Host-supplied viewer options, typically decoded from a dashboard form
/// submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripOptions {
    pub rows: u32,
    pub show_grid: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            rows: 1,
            show_grid: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripOptionsJsonContractV1 {
    pub schema_version: u32,
    pub options: StripOptions,
}

impl StripOptions {
    pub fn validate(self) -> StripResult<Self> {
        if self.rows == 0 {
            return Err(StripError::InvalidRowCount {
                requested: i64::from(self.rows),
            });
        }
        Ok(self)
    }

    pub fn to_json_contract_v1_pretty(self) -> StripResult<String> {
        let payload = StripOptionsJsonContractV1 {
            schema_version: STRIP_OPTIONS_JSON_SCHEMA_V1,
            options: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            StripError::InvalidData(format!("failed to serialize options contract v1: {e}"))
        })
    }

    /// Parses either a bare options object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> StripResult<Self> {
        if let Ok(options) = serde_json::from_str::<StripOptions>(input) {
            return options.validate();
        }
        let payload: StripOptionsJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| StripError::InvalidData(format!("failed to parse options payload: {e}")))?;
        if payload.schema_version != STRIP_OPTIONS_JSON_SCHEMA_V1 {
            return Err(StripError::InvalidData(format!(
                "unsupported options schema version: {}",
                payload.schema_version
            )));
        }
        payload.options.validate()
    }
}

impl<R: Renderer> StripEngine<R> {
    /// Applies decoded viewer options in one pass: grid visibility, then the
    /// row layout (which re-derives scales and repaints).
    pub fn apply_options(&mut self, options: StripOptions) -> StripResult<()> {
        let options = options.validate()?;
        self.set_show_grid(options.show_grid)?;
        self.set_rows(options.rows)
    }
}
