mod chart_layout;
mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod render_plan_builder;
mod snapshot_controller;
mod validation;

pub use chart_layout::ChartLayout;
pub use engine::LineChartEngine;
pub use engine_config::ChartConfig;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
