//! Sticker plugin - manage custom sticker command mappings
//!
//! Triggers and their sticker references live in the `stickerCommands`
//! namespace of the storage document, so they survive restarts and can be
//! hand-edited alongside any other configuration.

use crate::application::context::Context;
use crate::application::errors::CommandError;
use crate::domain::entities::{CommandSpec, PluginDescriptor};

pub fn plugin() -> PluginDescriptor {
    PluginDescriptor::new("sticker")
        .with_description("Custom sticker command mappings")
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_author("saku-bot")
        .with_command(
            CommandSpec::new("setsticker")
                .with_description("Map a trigger word to a sticker")
                .with_usage(".setsticker <trigger> <sticker-ref>")
                .with_category("config")
                .admin_only()
                .with_handler(set_sticker),
        )
        .with_command(
            CommandSpec::new("delsticker")
                .with_description("Remove a sticker trigger")
                .with_usage(".delsticker <trigger>")
                .with_category("config")
                .admin_only()
                .with_handler(del_sticker),
        )
        .with_command(
            CommandSpec::new("stickers")
                .with_aliases(vec!["liststickers".to_string()])
                .with_description("List sticker triggers")
                .with_usage(".stickers")
                .with_category("config")
                .with_handler(list_stickers),
        )
}

async fn set_sticker(ctx: Context) -> Result<(), CommandError> {
    if ctx.args.len() < 2 {
        return Err(CommandError::missing(
            "Please provide a trigger and a sticker reference.",
        ));
    }

    let trigger = ctx.args[0].clone();
    let reference = ctx.args[1..].join(" ");

    let mut commands = ctx.storage().get_sticker_commands().await;
    commands.insert(trigger.clone(), reference);
    ctx.storage().set_sticker_commands(commands).await?;

    ctx.reply(&format!("Saved sticker command '{}'.", trigger))
        .await?;
    Ok(())
}

async fn del_sticker(ctx: Context) -> Result<(), CommandError> {
    if ctx.args.is_empty() {
        return Err(CommandError::missing("Please provide a trigger to remove."));
    }

    let trigger = &ctx.args[0];
    let mut commands = ctx.storage().get_sticker_commands().await;
    if commands.remove(trigger).is_none() {
        ctx.reply(&format!("No sticker command '{}'.", trigger))
            .await?;
        return Ok(());
    }
    ctx.storage().set_sticker_commands(commands).await?;

    ctx.reply(&format!("Removed sticker command '{}'.", trigger))
        .await?;
    Ok(())
}

async fn list_stickers(ctx: Context) -> Result<(), CommandError> {
    let commands = ctx.storage().get_sticker_commands().await;
    if commands.is_empty() {
        ctx.reply("No sticker commands saved.").await?;
        return Ok(());
    }

    let mut triggers: Vec<&String> = commands.keys().collect();
    triggers.sort();
    let mut text = format!("Sticker commands ({}):\n", triggers.len());
    for trigger in triggers {
        text.push_str(&format!("  {}\n", trigger));
    }
    ctx.reply(text.trim_end()).await?;
    Ok(())
}
