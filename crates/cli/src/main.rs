use std::path::{Path, PathBuf};
use std::process::{self, Command};

use clap::Parser;
use rnaarc_core::{Format as OutputFormat, PlotOptions, DEFAULT_OUTPUT_DIR};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Png,
    Svg,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Png => OutputFormat::Png,
            Format::Svg => OutputFormat::Svg,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// RNA secondary structure arc diagram renderer
#[derive(Parser)]
#[command(name = "rnaarc", version)]
struct Cli {
    /// Structure file: sequence, pair count, then one `i j base_i base_j` line per pair
    #[arg(short, long, default_value = "data.txt")]
    input: PathBuf,

    /// Directory the figure is written to, named `<sequence>.<format>`
    #[arg(short = 'd', long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Resolution in dots per inch (default: 600, or the value from --options)
    #[arg(long)]
    dpi: Option<f64>,

    /// JSON file with plot options; omitted fields keep their defaults
    #[arg(long)]
    options: Option<PathBuf>,

    /// Draw a nucleotide color legend
    #[arg(long)]
    legend: bool,

    /// Open the written figure in the system viewer
    #[arg(long)]
    show: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let mut opts = match &cli.options {
        Some(path) => match load_options(path) {
            Ok(opts) => opts,
            Err(e) => {
                eprintln!("error: {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => PlotOptions::default(),
    };
    if let Some(dpi) = cli.dpi {
        opts.dpi = dpi;
    }
    if cli.legend {
        opts.legend = true;
    }
    debug!(?opts, "plot options");

    let path = match rnaarc_core::plot_file(&cli.input, &cli.output_dir, cli.format.into(), &opts)
    {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    println!("{}", path.display());

    if cli.show {
        if let Err(e) = open_viewer(&path) {
            warn!("could not open {}: {e}", path.display());
        }
    }
}

/// Log level comes from `RNAARC_LOG`, e.g. `RNAARC_LOG=rnaarc_core=debug`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("RNAARC_LOG")
        .unwrap_or_else(|_| EnvFilter::new("rnaarc=info,rnaarc_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_options(path: &Path) -> Result<PlotOptions, String> {
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

/// Hand the file to the platform's default viewer without waiting for it to close.
fn open_viewer(path: &Path) -> std::io::Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path).spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rnaarc"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("data.txt"));
        assert_eq!(cli.output_dir, PathBuf::from("./visualization/examples"));
        assert!(matches!(cli.format, Format::Png));
        assert!(cli.dpi.is_none());
        assert!(!cli.show);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "rnaarc", "-i", "in.txt", "-d", "out", "-f", "svg", "--dpi", "150", "--legend",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert!(matches!(cli.format, Format::Svg));
        assert_eq!(cli.dpi, Some(150.0));
        assert!(cli.legend);
    }

    #[test]
    fn test_bad_format_rejected() {
        assert!(Cli::try_parse_from(["rnaarc", "-f", "gif"]).is_err());
    }
}
