//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;
use owo_colors::OwoColorize;

/// Map domain/service errors to the text printed on stderr.
pub fn map_error(e: &ApiError, color: bool) -> String {
    if color {
        format!("{}\n{}", "FAILED".red().bold(), e)
    } else {
        format!("FAILED\n{}", e)
    }
}
