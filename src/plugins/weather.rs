//! Weather plugin - one-line weather reports via wttr.in

use tracing::debug;

use super::HTTP;
use crate::application::context::Context;
use crate::application::errors::CommandError;
use crate::domain::entities::{CommandSpec, PluginDescriptor};

const API_BASE: &str = "https://wttr.in";

pub fn plugin() -> PluginDescriptor {
    plugin_with_base(API_BASE)
}

/// Build the plugin against a different endpoint (used by tests).
pub fn plugin_with_base(base: &str) -> PluginDescriptor {
    let base = base.to_string();
    PluginDescriptor::new("weather")
        .with_description("Current weather for a city")
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_author("saku-bot")
        .with_command(
            CommandSpec::new("weather")
                .with_aliases(vec!["w".to_string()])
                .with_description("Show current weather for a city")
                .with_usage(".weather <city>")
                .with_category("lookup")
                .with_handler(move |ctx| {
                    let base = base.clone();
                    async move { weather(ctx, base).await }
                }),
        )
}

async fn weather(ctx: Context, base: String) -> Result<(), CommandError> {
    if ctx.args.is_empty() {
        return Err(CommandError::missing("Please provide a city name."));
    }

    let city = ctx.arg_text();
    let report = fetch_weather(&base, &city).await.map_err(|e| {
        debug!("Weather lookup for '{}' failed: {}", city, e);
        CommandError::remote("City")
    })?;

    ctx.reply(report.trim()).await?;
    Ok(())
}

/// wttr.in's `format=3` endpoint returns a single plain-text line,
/// e.g. `Lagos: ⛅️ +31°C`.
async fn fetch_weather(base: &str, city: &str) -> Result<String, reqwest::Error> {
    let url = format!("{}/{}", base, city);
    let response = HTTP
        .get(&url)
        .query(&[("format", "3")])
        .send()
        .await?
        .error_for_status()?;
    response.text().await
}
