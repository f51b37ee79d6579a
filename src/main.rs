use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::process::ExitCode;
use tilepaint::core::config;
use tilepaint::core::launch::{self, LaunchMode, USAGE};

#[derive(Parser)]
#[command(name = "tilepaint", about = "Paint tile maps in the terminal")]
struct Args {
    /// `<name>` to open a map, or `<width> <height> [name]` to create one
    #[arg(allow_negative_numbers = true)]
    args: Vec<String>,

    /// Terminal columns per tile
    #[arg(long)]
    cell_width: Option<u16>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Classify first: usage and bad dimensions touch nothing on disk
    let mode = match launch::parse_args(&args.args) {
        Ok(LaunchMode::Usage) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => config::TilepaintConfig {
            warnings: vec![format!("{e}; using default settings")],
            ..Default::default()
        },
    };
    let config = config::resolve(&file_config, args.cell_width);

    // Initialize file logger - the terminal belongs to the editor
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    // Config was read before the logger existed; report it now
    match config::config_path() {
        Some(path) => log::info!("Config file: {}", path.display()),
        None => log::info!("Config file: none"),
    }
    log::debug!("Resolved config: {:?}", config);
    for warning in &config.warnings {
        log::warn!("Config: {}", warning);
        eprintln!("Warning: {warning}");
    }

    log::info!("Tilepaint starting up: {:?}", mode);

    let app = match mode {
        LaunchMode::Open { name } => launch::open_map(&name, &config.extension),
        LaunchMode::Create {
            width,
            height,
            name,
        } => {
            let name = name.unwrap_or_else(|| config.default_map_name.clone());
            launch::create_map(width, height, &name, &config.extension)
        }
        // Printed before startup
        LaunchMode::Usage => return ExitCode::SUCCESS,
    };
    let app = match app {
        Ok(app) => app,
        Err(e) => {
            log::error!("Launch failed: {}", e);
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match tilepaint::tui::run(app, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
