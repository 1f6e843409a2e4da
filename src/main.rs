use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{LevelFilter, debug};
use renumber::{config, output, rename, types::Outcome};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "renumber")]
#[command(about = "Rename the images in a directory to 1.jpg, 2.jpg, ...")]
#[command(long_about = "\
Rename the images in a directory to 1.jpg, 2.jpg, ...

Images (.jpg .jpeg .png .webp .bmp, any case) are sorted by file name and
renamed in that order. Every file gets the .jpg extension; contents are not
converted. Other files are left alone.

  resources/               resources/
  ├── b.png                ├── 1.jpg    (was a.jpg)
  ├── a.jpg       →        ├── 2.jpg    (was b.png)
  ├── c.webp               ├── 3.jpg    (was c.webp)
  └── notes.txt            └── notes.txt

Files pass through temporary __temp_<n>.jpg names first, so existing numbered
files are never overwritten. A missing directory is reported, not created.

Settings are read from renumber.toml in the working directory if present.
Run 'renumber gen-config' to print a documented one.")]
#[command(version)]
struct Cli {
    /// Directory to renumber [default: resources, or `directory` from renumber.toml]
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Config file [default: ./renumber.toml if it exists]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the result as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose mode (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rename the images (the default)
    Run,
    /// Show what would be renamed without touching any file
    Check,
    /// Print a stock renumber.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(Env::default())
        .filter_level(log_level)
        .init();

    let dry_run = match cli.command.unwrap_or(Command::Run) {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            return Ok(());
        }
        Command::Check => true,
        Command::Run => false,
    };

    let mut renamer_config = match &cli.config {
        Some(path) => config::load_config_file(path)?,
        None => config::load_config(&std::env::current_dir()?)?,
    };
    if let Some(dir) = cli.dir {
        renamer_config.directory = dir;
    }
    debug!("config: {:?}", renamer_config);

    let directory = renamer_config.directory.clone();
    let outcome = if dry_run {
        rename::check(&directory, &renamer_config)?
    } else {
        rename::normalize(&directory, &renamer_config)?
    };
    print(&outcome, cli.json)?;

    Ok(())
}

fn print(outcome: &Outcome, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        output::print_outcome(outcome);
    }
    Ok(())
}
