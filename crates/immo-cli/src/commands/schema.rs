use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `immo schema`. A schema has no useful table form, so table
/// output falls back to pretty JSON.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    output(&immo_core::property_schema(), format)
}
