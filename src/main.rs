use chrono::Local;
use clap::{Parser, Subcommand};
use monthlog::{config, output, scan, site};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "monthlog")]
#[command(about = "Static site generator for month-bucketed plain-text diaries")]
#[command(long_about = "\
Static site generator for month-bucketed plain-text diaries

Month folders become pages and day files become entries. Blank lines split
paragraphs; bare http(s) URLs become links.

Content structure:

  content/
  ├── config.toml          # Site config (optional)
  ├── 202501/              # Month: six digits, starting with 20
  │   ├── 20250103.txt     # Entry: eight digits + .txt
  │   └── 20250105.txt
  ├── 202502/              # Empty months still get a page
  └── notes/               # Anything else is ignored

Run 'monthlog gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "out", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the full site (default)
    Build,
    /// Scan and render content without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let built_at = Local::now().naive_local();
            let report = site::build(&cli.source, &cli.output, &site_config, built_at)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let months = scan::scan(&cli.source)?;
            output::print_scan_output(&months);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
