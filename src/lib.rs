//! linechart-rs: headless geometry engine for single-series line/area charts.
//!
//! The engine turns an ordered `(value, label)` series plus a viewport and a
//! config into pixel geometry (points, linear or curved paths, gradient mask,
//! grid ticks, decimated category labels, dot markers) and resolves pointer
//! locations to the nearest data point. Drawing is delegated to a
//! [`render::Renderer`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, LineChartEngine};
pub use error::{ChartError, ChartResult};
