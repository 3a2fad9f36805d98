//! Text or JSON output for built values.

use crate::error::ReportError;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Product{name='..', price=..}` style
    #[default]
    Text,
    /// One JSON object per value
    Json,
}

pub fn render<T>(value: &T, format: OutputFormat) -> Result<String, ReportError>
where
    T: Display + Serialize,
{
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
    }
}
