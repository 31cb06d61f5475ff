use std::sync::Arc;

use clap::Parser;

use timesince::{
    cli::{Command, ConfigCommand, Opts},
    core::{Clock, RenderSink, SystemClock, Timestamp, since::SinceTicker},
    utils::{
        config::{ConsoleConfig, load_config, save_config},
        constants::CONFIG_PATH,
        format::{format_absolute, format_time_since},
        highlight, logging,
    },
};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let opts = Opts::parse();
    run(opts).await?;
    Ok(())
}

struct StdoutSink;

impl RenderSink for StdoutSink {
    fn render(&self, text: &str) {
        println!("{}", highlight(text));
    }
}

async fn run(opts: Opts) -> timesince::Result<()> {
    logging::init()?;

    let mut config = match load_config(CONFIG_PATH).await {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!("No console config loaded, using defaults: {}", e);
            ConsoleConfig::default()
        }
    };
    if let Some(offset) = opts.offset {
        config.time_offset_ms = offset;
    }
    if let Some(format) = opts.format {
        config.date_format = format;
    }

    match opts.command {
        Command::Since { time } => {
            let time: Timestamp = time.parse()?;
            println!(
                "{}",
                highlight(&format_time_since(
                    SystemClock.now_millis(),
                    time.millis(),
                    config.time_offset_ms,
                ))
            );
        }
        Command::Date { time } => {
            let time: Timestamp = time.parse()?;
            let formatted =
                format_absolute(time.millis(), config.time_offset_ms, config.date_format())?;
            println!("{}", highlight(&formatted));
        }
        Command::Watch { time, interval } => {
            if let Some(interval) = interval {
                config.refresh_interval_ms = interval;
            }

            let initial = match time.parse::<Timestamp>() {
                Ok(time) => Some(time),
                Err(e) => {
                    timesince::warning!("{}", e);
                    None
                }
            };

            let ticker = SinceTicker::spawn(
                initial,
                &config,
                Arc::new(SystemClock),
                Arc::new(StdoutSink),
            );
            timesince::info!(
                "Refreshing every {}ms, press Ctrl+C to stop",
                config.refresh_interval_ms
            );

            tokio::signal::ctrl_c().await.ok();
            ticker.shutdown().await;
            timesince::success!("Stopped");
        }
        Command::Config { command } => match command {
            ConfigCommand::Show => {
                println!("time_offset_ms = {}", highlight(&config.time_offset_ms.to_string()));
                println!("date_format = {}", highlight(config.date_format()));
                println!(
                    "refresh_interval_ms = {}",
                    highlight(&config.refresh_interval_ms.to_string())
                );
            }
            ConfigCommand::SetOffset { millis } => {
                config.time_offset_ms = millis;
                save_config(CONFIG_PATH, &config).await?;
                timesince::success!("Clock offset set to {}ms", millis);
            }
            ConfigCommand::SetFormat { pattern } => {
                config.date_format = pattern.clone();
                save_config(CONFIG_PATH, &config).await?;
                timesince::success!("Date format set to '{}'", pattern);
            }
        },
    }

    Ok(())
}
