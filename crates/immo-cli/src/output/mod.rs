use immo_core::NO_PROPERTIES_MESSAGE;
use immo_core::responses::ListingResponse;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

pub fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_key_value_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Listings get the property table instead of the generic key/value view.
pub fn render_listing(
    response: &ListingResponse,
    format: OutputFormat,
    options: table::TableOptions,
) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(response, format);
    }
    if response.properties.is_empty() {
        return Ok(response
            .message
            .clone()
            .unwrap_or_else(|| NO_PROPERTIES_MESSAGE.to_string()));
    }

    let mut rendered = table::render_property_table(&response.properties, options);
    if response.properties.len() < response.total {
        rendered.push_str(&format!(
            "\n({} sur {} propriétés affichées)",
            response.properties.len(),
            response.total
        ));
    }
    Ok(rendered)
}

pub fn output_listing(response: &ListingResponse, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_listing(response, format, table_options())?;
    println!("{rendered}");
    Ok(())
}

fn render_key_value_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    let aligns = [table::Align::Left, table::Align::Left];

    let rows = match serde_json::to_value(value)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| vec![key, value_to_cell(&value)])
            .collect::<Vec<_>>(),
        other => vec![vec![String::from("value"), value_to_cell(&other)]],
    };
    Ok(table::render_entity_table(
        &["clé", "valeur"],
        &aligns,
        &rows,
        options,
    ))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
