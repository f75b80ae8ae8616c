mod engine;
mod engine_config;
mod frame_builder;
mod grid_builder;
mod json_contract;
mod render_style;
mod trace_builder;
mod validation;

pub use engine::StripEngine;
pub use engine_config::StripEngineConfig;
pub use json_contract::{STRIP_OPTIONS_JSON_SCHEMA_V1, StripOptions, StripOptionsJsonContractV1};
pub use render_style::{GRID_BOX_SIZE_PX, GRID_MINOR_DIVISIONS, StripStyle};
