use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: Command,

    /// Clock offset in milliseconds between this machine and the server
    /// that produced the timestamps (overrides the configured value)
    #[clap(short, long)]
    pub offset: Option<i64>,

    /// strftime pattern for absolute date output (overrides the configured value)
    #[clap(short, long)]
    pub format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the elapsed time since a timestamp
    Since {
        /// Milliseconds since epoch, or a date string
        time: String,
    },

    /// Print a timestamp as an absolute, offset-corrected date
    Date {
        /// Milliseconds since epoch, or a date string
        time: String,
    },

    /// Keep an elapsed-time readout refreshed until interrupted
    Watch {
        /// Milliseconds since epoch, or a date string
        time: String,

        /// Refresh interval in milliseconds
        #[clap(short, long)]
        interval: Option<u64>,
    },

    /// Manage the console configuration
    Config {
        #[clap(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the current configuration
    Show,
    /// Set the clock offset in milliseconds
    SetOffset {
        /// Signed offset, positive when the server clock runs ahead of this machine
        millis: i64,
    },
    /// Set the absolute date format pattern
    SetFormat {
        /// strftime pattern, e.g. "%Y-%m-%d %H:%M:%S"
        pattern: String,
    },
}
