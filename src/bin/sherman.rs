use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use log::{debug, LevelFilter};

use sherman::input::{encoding_for_label, expand_inputs, read_text};
use sherman::{render, Config, Format, Result, ShermanError, TokenTable};

/// Translate text into Sherman circular-script patterns
#[derive(Parser, Debug)]
#[command(name = "sherman", version, about, long_about = None)]
struct Args {
    /// Text to translate (prompts on stdin when neither text nor --file is given)
    text: Vec<String>,

    /// Translate files matching a glob pattern (repeatable)
    #[arg(short = 'f', long = "file", value_name = "PATTERN")]
    files: Vec<String>,

    /// Encoding of input files
    #[arg(short, long, default_value = "utf-8", env = "SHERMAN_ENCODING")]
    encoding: String,

    /// Token table CSV (token,row,column) replacing the built-in grid
    #[arg(short, long, value_name = "PATH", env = "SHERMAN_TABLE")]
    table: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Result<Config> {
        Ok(Config {
            table: self.table.clone(),
            encoding: encoding_for_label(&self.encoding)?,
            format: self.format,
        })
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.config()?;
    debug!("{:?}", config);
    let table = config.table()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.files.is_empty() {
        let paths = expand_inputs(&args.files)?;
        for (i, path) in paths.iter().enumerate() {
            let text = read_text(path, config.encoding)?;
            if i > 0 {
                writeln!(out).map_err(stdout_error)?;
            }
            writeln!(out, "==> {} <==", path.display()).map_err(stdout_error)?;
            emit(&mut out, &table, &text, config.format, false)?;
        }
        return Ok(());
    }

    if !args.text.is_empty() {
        return emit(&mut out, &table, &args.text.join(" "), config.format, false);
    }

    write!(out, "Enter text: ").map_err(stdout_error)?;
    out.flush().map_err(stdout_error)?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(ShermanError::Stdin)?;
    writeln!(out, "Generated Patterns:").map_err(stdout_error)?;
    let text = line.trim_end_matches(['\r', '\n']);
    emit(&mut out, &table, text, config.format, true)
}

/// Writes the rendered translation. `keep_empty` prints a blank line when no
/// tokens were found.
fn emit(
    out: &mut impl Write,
    table: &TokenTable,
    text: &str,
    format: Format,
    keep_empty: bool,
) -> Result<()> {
    let symbols = table.translate(text);
    debug!("{} token(s)", symbols.len());
    let rendered = render(&symbols, format)?;
    if keep_empty || !rendered.is_empty() {
        writeln!(out, "{}", rendered).map_err(stdout_error)?;
    }
    Ok(())
}

fn stdout_error(e: io::Error) -> ShermanError {
    ShermanError::Io {
        path: PathBuf::from("<stdout>"),
        source: e,
    }
}
