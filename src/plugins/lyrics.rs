//! Lyrics plugin - song lyrics via lyrics.ovh

use serde::Deserialize;
use tracing::debug;

use super::HTTP;
use crate::application::context::Context;
use crate::application::errors::CommandError;
use crate::domain::entities::{CommandSpec, PluginDescriptor};

const API_BASE: &str = "https://api.lyrics.ovh";

/// Replies longer than this are cut off; chat transports reject huge texts.
const MAX_REPLY_CHARS: usize = 1500;

pub fn plugin() -> PluginDescriptor {
    plugin_with_base(API_BASE)
}

/// Build the plugin against a different endpoint (used by tests).
pub fn plugin_with_base(base: &str) -> PluginDescriptor {
    let base = base.to_string();
    PluginDescriptor::new("lyrics")
        .with_description("Look up song lyrics")
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_author("saku-bot")
        .with_command(
            CommandSpec::new("lyrics")
                .with_aliases(vec!["lyric".to_string()])
                .with_description("Find lyrics for a song")
                .with_usage(".lyrics <song name>")
                .with_category("lookup")
                .with_handler(move |ctx| {
                    let base = base.clone();
                    async move { lyrics(ctx, base).await }
                }),
        )
}

async fn lyrics(ctx: Context, base: String) -> Result<(), CommandError> {
    if ctx.args.is_empty() {
        return Err(CommandError::missing("Please provide a song name."));
    }

    let query = ctx.arg_text();
    let found = match fetch_lyrics(&base, &query).await {
        Ok(Some(found)) => found,
        Ok(None) => {
            debug!("No lyrics suggestion for '{}'", query);
            return Err(CommandError::remote("Lyrics"));
        }
        Err(e) => {
            debug!("Lyrics lookup for '{}' failed: {}", query, e);
            return Err(CommandError::remote("Lyrics"));
        }
    };

    let mut text = format!(
        "\u{1f3b5} {} - {}\n\n{}",
        found.artist,
        found.title,
        found.lyrics.trim()
    );
    if text.chars().count() > MAX_REPLY_CHARS {
        text = text.chars().take(MAX_REPLY_CHARS).collect();
        text.push_str("\n[...]");
    }

    ctx.reply(&text).await?;
    Ok(())
}

struct FoundLyrics {
    artist: String,
    title: String,
    lyrics: String,
}

#[derive(Deserialize)]
struct SuggestResponse {
    data: Vec<Suggestion>,
}

#[derive(Deserialize)]
struct Suggestion {
    title: String,
    artist: SuggestArtist,
}

#[derive(Deserialize)]
struct SuggestArtist {
    name: String,
}

#[derive(Deserialize)]
struct LyricsResponse {
    lyrics: String,
}

/// Resolve a free-text query to a concrete song, then fetch its lyrics.
/// `Ok(None)` means the query matched nothing.
async fn fetch_lyrics(base: &str, query: &str) -> Result<Option<FoundLyrics>, reqwest::Error> {
    let suggest: SuggestResponse = HTTP
        .get(format!("{}/suggest/{}", base, query))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let Some(hit) = suggest.data.into_iter().next() else {
        return Ok(None);
    };

    let body: LyricsResponse = HTTP
        .get(format!("{}/v1/{}/{}", base, hit.artist.name, hit.title))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(Some(FoundLyrics {
        artist: hit.artist.name,
        title: hit.title,
        lyrics: body.lyrics,
    }))
}
