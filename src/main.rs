use pagepath::cli::commands::{CliArgs, Commands, DetectArgs, ResolveArgs};
use pagepath::cli::output::OutputFormatter;
use pagepath::util::logging::{init_logging, parse_level, LoggingConfig};
use pagepath::{PagepathConfig, ResolutionRequest, VERSION};

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, Level};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("pagepath v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Resolve(resolve_args) => handle_resolve(resolve_args).await,
        Commands::Detect(detect_args) => handle_detect(detect_args),
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let mut config = LoggingConfig::from_env();

    if let Some(level_str) = &args.log_level {
        config.level = parse_level(level_str);
    } else if args.verbose {
        config.level = Level::DEBUG;
    } else if args.quiet {
        config.level = Level::ERROR;
    }

    init_logging(config);
}

fn project_dir(arg: &Option<PathBuf>) -> Result<PathBuf, String> {
    let dir = match arg {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()
            .map_err(|e| format!("Failed to read current directory: {}", e))?,
    };

    if dir.is_absolute() {
        Ok(dir)
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(dir))
            .map_err(|e| format!("Failed to read current directory: {}", e))
    }
}

fn load_settings() -> Option<PagepathConfig> {
    let settings = PagepathConfig::default();
    if let Err(e) = settings.validate() {
        error!("{}", e);
        eprintln!("Error: {}", e);
        return None;
    }
    Some(settings)
}

async fn handle_resolve(args: &ResolveArgs) -> i32 {
    let Some(settings) = load_settings() else {
        return 1;
    };

    let project_dir = match project_dir(&args.project_dir) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let mut request = ResolutionRequest::new(project_dir).with_static(args.enable_static);
    if let Some(output) = &args.output {
        request = request.with_output(output);
    }
    if let Some(ignore_path) = &args.ignore_path {
        request = request.with_ignore_path(ignore_path);
    }

    let resolver = settings.create_resolver();
    let config = match resolver.get_config(&request).await {
        Ok(config) => config,
        Err(e) => {
            error!("Resolution failed: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match OutputFormatter::new(args.format.into()).format(&config) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn handle_detect(args: &DetectArgs) -> i32 {
    let Some(settings) = load_settings() else {
        return 1;
    };

    let project_dir = match project_dir(&args.project_dir) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let kind = match settings.create_resolver().classify(&project_dir) {
        Ok(kind) => kind,
        Err(e) => {
            error!("Detection failed: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match OutputFormatter::new(args.format.into()).format_kind(kind) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
