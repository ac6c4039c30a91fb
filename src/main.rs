use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use tokio::task::LocalSet;

use trapezio::LogLevel;
use trapezio::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "trapezio", about = "Stack navigation demo: a counter that pushes summaries")]
struct Args {
    /// Starting value of the root counter
    #[arg(short, long, allow_negative_numbers = true)]
    initial_value: Option<i64>,

    /// Log verbosity
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors are logged once the logger exists
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::TrapezioConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            initial_value: args.initial_value,
            log_level: args.log_level,
        },
    );

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level.filter(), log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Falling back to default config: {}", e);
    }
    log::info!("Trapezio starting up: {:?}", resolved);

    // Stores spawn their continuations with spawn_local
    LocalSet::new().run_until(trapezio::tui::run(resolved)).await
}
