use owo_colors::OwoColorize;

pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod logging;

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        {
            use owo_colors::OwoColorize;
            println!("{} {}", "✓".green(), format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        {
            use owo_colors::OwoColorize;
            println!("{} {}", "⚠".yellow(), format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
       {
            use owo_colors::OwoColorize;
            println!("{} {}", "ℹ".blue(), format!($($arg)*))
       }
    };
}

pub fn highlight(text: &str) -> String {
    text.bold().blue().to_string()
}
