//! frame-fit CLI
//!
//! Usage:
//!   frame-fit [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --offset <N>       Vertical offset (and horizontal when -x is absent)
//!   -x, --horizontal <N>   Horizontal offset
//!   -c, --config <FILE>    Configuration file (TOML format)
//!   --suggest <QUERY>      Print offset suggestions and exit
//!   --json                 Read and write JSON instead of TOML
//!   -v, --verbose          Show debug diagnostics
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use frame_fit::{
    fit_with_config, suggestions, FitConfig, FitError, Host, ParameterValues, ResizeConfig,
    SceneFormat,
};

#[derive(Parser)]
#[command(name = "frame-fit")]
#[command(about = "Resize frames and components to a fixed offset from their content")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Vertical offset; also used horizontally unless --horizontal is given
    #[arg(short, long, default_value = "")]
    offset: String,

    /// Horizontal offset
    #[arg(short = 'x', long)]
    horizontal: Option<String>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print offset suggestions for a partial entry and exit
    #[arg(long, value_name = "QUERY")]
    suggest: Option<String>,

    /// Read and write the scene as JSON
    #[arg(long)]
    json: bool,

    /// Show debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

/// Host that reports to stderr
struct StderrHost;

impl Host for StderrHost {
    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn close(&mut self, _message: Option<&str>) {}
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load configuration
    let resize_config = match &cli.config {
        Some(path) => match ResizeConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ResizeConfig::default(),
    };

    let format = match (&cli.input, cli.json) {
        (_, true) => SceneFormat::Json,
        (Some(path), false) => SceneFormat::from_path(path),
        (None, false) => SceneFormat::Toml,
    };
    let config = FitConfig::new()
        .with_resize(resize_config)
        .with_format(format);

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if let Some(query) = &cli.suggest {
        match suggestions(&source, query, &config) {
            Ok(list) => {
                for s in list {
                    println!("{}", s);
                }
            }
            Err(e) => report_and_exit(&e, &source, &filename),
        }
        return;
    }

    let params = ParameterValues {
        offset: cli.offset,
        offset_hor: cli.horizontal,
    };
    match fit_with_config(&source, &params, &config, &mut StderrHost) {
        Ok(scene) => {
            print!("{}", scene);
        }
        // Already reported through the host
        Err(FitError::Resize(_)) => std::process::exit(1),
        Err(e) => report_and_exit(&e, &source, &filename),
    }
}

fn report_and_exit(error: &FitError, source: &str, filename: &str) -> ! {
    match error {
        FitError::Scene(e) => eprint!("{}", e.format(source, filename)),
        other => eprintln!("Error: {}", other),
    }
    std::process::exit(1);
}

fn print_intro() {
    println!(
        r#"frame-fit - Resize frames and components to a fixed offset from their content

USAGE:
    frame-fit [OPTIONS] [FILE]
    cat scene.toml | frame-fit --offset 16

OPTIONS:
    -o, --offset <N>       Vertical offset (also horizontal unless -x is given)
    -x, --horizontal <N>   Horizontal offset
    -c, --config <FILE>    Configuration (TOML file)
    --suggest <QUERY>      Print offset suggestions and exit
    --json                 Read and write JSON instead of TOML
    -v, --verbose          Show debug diagnostics
    -h, --help             Print help

SCENE FORMAT:
    selection = ["card"]

    [[nodes]]
    id = "card"
    kind = "frame"                      # frame, component, component_set, ...
    transform = [[1, 0, 0], [0, 1, 0]]  # [[c0, s0, x], [s1, c1, y]]
    width = 200
    height = 120
    layout_mode = "none"                # none, horizontal, vertical

    [[nodes.children]]
    id = "title"
    transform = [[1, 0, 10], [0, 1, 10]]
    width = 40
    height = 20

Freeform containers are fitted around their children's bounding box.
Auto-layout containers get their padding set to the offsets instead."#
    );
}
