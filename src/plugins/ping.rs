//! Ping plugin - liveness check with measured latency

use std::time::Instant;

use crate::application::context::Context;
use crate::application::errors::CommandError;
use crate::domain::entities::{CommandSpec, PluginDescriptor};

pub fn plugin() -> PluginDescriptor {
    PluginDescriptor::new("ping")
        .with_description("Check that the bot is alive and how fast it responds")
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_author("saku-bot")
        .with_command(
            CommandSpec::new("ping")
                .with_description("Measure bot response latency")
                .with_usage(".ping")
                .with_category("utility")
                .with_handler(ping),
        )
}

/// Replies immediately, then revises the reply with the measured send
/// latency. On transports without an edit capability the latency arrives
/// as a second message instead.
async fn ping(ctx: Context) -> Result<(), CommandError> {
    let started = Instant::now();
    let sent = ctx.reply("\u{1f3d3} Pong!").await?;
    let latency_ms = started.elapsed().as_millis();
    ctx.edit_or_send(&sent, &format!("\u{1f3d3} Pong! {} ms", latency_ms))
        .await?;
    Ok(())
}
