use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use dto2ts::config::Config;
use dto2ts::error::check_paths;
use dto2ts::parser::CsParser;
use dto2ts::scanner;
use dto2ts::ts_generator::{TsCodeGenerator, WriteOutcome};
use dto2ts::type_mapper::TypeMapper;

const USAGE: &str = "Usage: dto2ts -i <input-file> -o <output-directory>";

#[derive(Parser)]
#[command(name = "dto2ts")]
#[command(about = "Generate TypeScript type aliases from C# JsonProperty data classes")]
#[command(version)]
struct Cli {
    /// C# source file, or a directory of .cs files
    #[arg(short, long)]
    input: PathBuf,

    /// Directory that receives one <ClassName>.ts per class
    #[arg(short, long = "out-dir", visible_alias = "outDir")]
    out_dir: PathBuf,

    /// Optional configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Watch mode: regenerate when the input changes
    #[arg(short, long)]
    watch: bool,
}

/// Run the generation process once
fn run_generation(cli: &Cli, config: &Config, type_mapper: &TypeMapper) -> Result<()> {
    let start = Instant::now();

    let sources = scanner::collect_sources(&cli.input)?;
    debug!("Found {} source file(s)", sources.len());

    let parser = CsParser::new(type_mapper);
    let generator = TsCodeGenerator::new(&cli.out_dir, type_mapper)
        .with_extension(&config.output.extension)
        .with_trailing_newline(config.output.trailing_newline);

    let mut written = 0;
    let mut unchanged = 0;

    for source in &sources {
        let classes = parser.parse_file(source)?;
        if classes.is_empty() {
            debug!("No data classes in {:?}", source);
        }

        for class in &classes {
            let outcome = generator.generate(class)?;
            match outcome {
                WriteOutcome::Written => written += 1,
                WriteOutcome::Unchanged => unchanged += 1,
            }
            if cli.verbose {
                let tag = match outcome {
                    WriteOutcome::Written => "written",
                    WriteOutcome::Unchanged => "unchanged",
                };
                println!(
                    "  [{}] {} {{ {} }} -> {:?}",
                    tag,
                    class.name,
                    class.field_names().join(", "),
                    generator.output_path(class)
                );
            }
        }
    }

    if cli.verbose {
        println!(
            "  Written: {}, Unchanged: {} in {:?}",
            written,
            unchanged,
            start.elapsed()
        );
    }
    println!("All types are generated");

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = check_paths(&cli.input, &cli.out_dir) {
        eprintln!("Invalid input file or output directory: {}", e);
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::default(),
    };
    let type_mapper = TypeMapper::new(&config.types.extra_value_types, &config.type_mappings);

    run_generation(&cli, &config, &type_mapper)?;

    if !cli.watch {
        return Ok(());
    }

    watch(&cli, &config, &type_mapper)
}

fn is_cs_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("cs")
}

/// Regenerate on changes to the input until interrupted
fn watch(cli: &Cli, config: &Config, type_mapper: &TypeMapper) -> Result<()> {
    // Single files are watched through their parent directory
    let (watch_path, mode) = if cli.input.is_dir() {
        (cli.input.clone(), RecursiveMode::Recursive)
    } else {
        let parent = cli
            .input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        (parent.to_path_buf(), RecursiveMode::NonRecursive)
    };

    println!("Watching {} (press Ctrl+C to stop)...", watch_path.display());

    let (tx, rx) = channel();

    let mut watcher: RecommendedWatcher = Watcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if let Err(e) = tx.send(event) {
                    warn!("Failed to send file event: {}", e);
                }
            }
            Err(e) => warn!("Watch error: {}", e),
        },
        notify::Config::default(),
    )?;
    watcher.watch(&watch_path, mode)?;

    const DEBOUNCE_MS: u64 = 300;

    let input_name = cli.input.file_name().map(|n| n.to_os_string());
    let mut last_change_time = Instant::now();
    let mut pending_generation = false;

    loop {
        if let Ok(event) = rx.recv_timeout(Duration::from_millis(100)) {
            if matches!(
                event.kind,
                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Any
            ) && event.paths.iter().any(|p| {
                if cli.input.is_dir() {
                    is_cs_file(p)
                } else {
                    p.file_name().map(|n| n.to_os_string()) == input_name
                }
            }) {
                pending_generation = true;
                last_change_time = Instant::now();
            }
        }

        if pending_generation && last_change_time.elapsed() >= Duration::from_millis(DEBOUNCE_MS) {
            println!("\nChanges detected, regenerating...");
            if let Err(e) = run_generation(cli, config, type_mapper) {
                eprintln!("Error during generation: {:#}", e);
            }
            pending_generation = false;
        }
    }
}
