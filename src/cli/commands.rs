use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Resolve page, static and output directories for JavaScript web frameworks
#[derive(Parser, Debug)]
#[command(
    name = "pagepath",
    version,
    long_about = "pagepath detects whether a project uses Next.js, Nuxt.js, Sapper or SvelteKit \
                  and prints where its pages, static assets and generated output live."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect the framework and resolve its paths",
        long_about = "Reads package.json to detect the framework, loads the framework's own \
                      configuration and prints the resolved paths. The output directory is \
                      created if it does not exist.\n\n\
                      Examples:\n  \
                      pagepath resolve\n  \
                      pagepath resolve ./site --static\n  \
                      pagepath resolve --output src/generated --format json"
    )]
    Resolve(ResolveArgs),

    #[command(about = "Only detect which framework a project uses")]
    Detect(DetectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    #[arg(
        value_name = "PATH",
        help = "Project directory (defaults to current directory)"
    )]
    pub project_dir: Option<PathBuf>,

    #[arg(short = 's', long = "static", help = "Include the static asset directory")]
    pub enable_static: bool,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Output directory, replacing the framework default"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'p',
        long,
        value_name = "FILE",
        help = "Ignore file, relative to the project directory"
    )]
    pub ignore_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Project directory (defaults to current directory)"
    )]
    pub project_dir: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => Self::Json,
            OutputFormatArg::Yaml => Self::Yaml,
            OutputFormatArg::Human => Self::Human,
        }
    }
}
