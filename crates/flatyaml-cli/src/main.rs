use std::fs::File;
use std::io::{self, Read, Write, stdin};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use flatyaml::{Decoder, Document, Options};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "flatyaml-cli",
    about = "Flatten a restricted YAML document into path-keyed JSON",
    version
)]
struct Args {
    /// Indentation unit width in spaces (2 to 256)
    #[arg(long, default_value_t = flatyaml::options::DEFAULT_INDENT)]
    indent: usize,

    /// Separator between key segments in output paths
    #[arg(long, default_value = flatyaml::options::DEFAULT_DELIMITER)]
    delimiter: String,

    /// Character encoding of the input (WHATWG label)
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    /// Print the input without blank and comment lines instead of decoding
    #[arg(long, default_value_t = false)]
    dump: bool,

    /// Print an empty object instead of failing when the input is unreadable
    #[arg(long, default_value_t = false)]
    or_empty: bool,

    /// Pretty-print JSON on output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flatyaml=warn")),
        )
        .init();

    let args = Args::parse();

    let options = Options::new(args.indent, args.delimiter.as_str())?;
    let reader = open_input(args.input.as_deref());

    if args.dump {
        let reader = reader?;
        let stdout = io::stdout().lock();
        flatyaml::dump::dump_reader_with_encoding(reader, &args.encoding, stdout)?;
        return Ok(());
    }

    let mut decoder = Decoder::new(options)?;
    let document = if args.or_empty {
        match reader {
            Ok(reader) => decoder.decode_reader_with_encoding_or_empty(reader, &args.encoding),
            Err(e) => {
                tracing::warn!(error = %e, "input unavailable, emitting empty document");
                Document::new()
            }
        }
    } else {
        decoder.decode_reader_with_encoding(reader?, &args.encoding)?
    };

    let json = document.to_json();
    let mut stdout = io::stdout().lock();
    if args.pretty {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&json)?)?;
    } else {
        writeln!(stdout, "{}", serde_json::to_string(&json)?)?;
    }

    Ok(())
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Ok(Box::new(f))
        }
        None => Ok(Box::new(stdin())),
    }
}
