use std::sync::Arc;

use clap::{Parser, Subcommand};

use saku_bot::application::services::{CommandService, Dispatch};
use saku_bot::domain::traits::ChatAdapter;
use saku_bot::infrastructure::adapters::console::ConsoleAdapter;
use saku_bot::infrastructure::config::Config;
use saku_bot::infrastructure::storage::StorageHandle;
use saku_bot::plugins;

#[derive(Parser)]
#[command(name = "saku-bot")]
#[command(about = "A small plugin-driven chat bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.config);
        }
        Commands::Version => {
            println!("saku-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config(&cli.config);
        }
    }
}

fn run_bot(config_path: String) {
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::default()
    };

    tracing::info!("Starting saku-bot: {}", config.bot.name);

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let storage = StorageHandle::spawn(&config.storage.path);

        let mut commands = CommandService::new(&config.bot.prefix);
        for plugin in plugins::default_plugins() {
            if let Err(e) = commands.register_plugin(plugin) {
                tracing::error!("Failed to register plugin: {}", e);
            }
        }
        tracing::info!("{} commands registered", commands.command_count());

        let console_enabled = config
            .adapters
            .console
            .as_ref()
            .map(|c| c.enabled)
            .unwrap_or(true);
        if !console_enabled {
            tracing::error!("No enabled adapter; console is the only one built in");
            return;
        }

        let adapter = Arc::new(ConsoleAdapter::new());
        run_console_bot(adapter, commands, storage).await;
    });
}

async fn run_console_bot(
    adapter: Arc<ConsoleAdapter>,
    commands: CommandService,
    storage: StorageHandle,
) {
    let prefix = commands.prefix().to_string();
    println!(
        "saku-bot console. Type {}help for commands, 'exit' to quit.",
        prefix
    );

    loop {
        let Some(line) = adapter.read_line("> ").await else {
            break;
        };
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }
        if line == format!("{}help", prefix) {
            println!("{}", commands.help());
            continue;
        }

        let transport: Arc<dyn ChatAdapter> = adapter.clone();
        match commands
            .dispatch("console", &line, transport, storage.clone())
            .await
        {
            Ok(Dispatch::Unknown(name)) => {
                println!("[BOT] Unknown command: {}{}", prefix, name);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Command failed: {}", e);
            }
        }
    }

    tracing::info!("Console session ended");
}

fn init_config(path: &str) {
    if std::path::Path::new(path).exists() {
        tracing::warn!("{} already exists, not overwriting", path);
        return;
    }
    match Config::write_default(path) {
        Ok(()) => println!("Wrote default config to {}", path),
        Err(e) => tracing::error!("Failed to write config: {}", e),
    }
}
