//! Download a legacy Excel workbook and preview its OPOSICIONES and VISTAS sheets.

pub mod config;
pub mod download;
pub mod error;
pub mod excel;
pub mod input;
pub mod json_export;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use error::{AppError, Result};
