use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use lzbits::{
    EncodeConfig, EncodedStream, Encoder, Error, Lz77Encoder, Result, TraceRenderer,
    DEFAULT_WINDOW_SIZE,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lzbits")]
#[command(about = "Trace greedy sliding-window LZ77 encoding bit by bit")]
#[command(version)]
struct Args {
    /// Text to encode (alternative to --input)
    #[arg(conflicts_with = "input", required_unless_present = "input")]
    text: Option<String>,

    /// Input file to encode (use - for stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Window size in symbols
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
    window: usize,

    /// Treat input as raw bytes instead of text
    #[arg(long)]
    bytes: bool,

    /// Print the packed bit stream as hex
    #[arg(long)]
    packed: bool,

    /// Do not print the step table
    #[arg(long)]
    no_trace: bool,

    /// Show statistics and debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = EncodeConfig::with_window_size(args.window);
    let mut encoder = Lz77Encoder::new(config);

    let start = std::time::Instant::now();
    let stream = match (&args.text, &args.input) {
        (Some(text), _) => encoder.encode_text(text)?,
        (None, Some(path)) => {
            let data = read_input(path)?;
            if args.bytes {
                encoder.encode(&data)?
            } else {
                let text = std::str::from_utf8(&data)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                encoder.encode_text(text)?
            }
        }
        (None, None) => return Err(Error::Internal("no input given".to_string())),
    };
    let elapsed = start.elapsed();

    let mut stdout = io::stdout().lock();
    if !args.no_trace {
        TraceRenderer::new().write_to(&stream, &mut stdout)?;
    }
    if args.packed {
        write_packed(&stream, &mut stdout)?;
    }

    if args.verbose {
        let stats = stream.stats();
        eprintln!("Encoding complete:");
        eprintln!("  Source symbols:   {}", stream.source_len());
        eprintln!("  Steps:            {}", stats.steps);
        eprintln!("  Literals:         {}", stats.literals);
        eprintln!("  Matches:          {}", stats.matches);
        eprintln!("  Matched symbols:  {}", stats.matched_symbols);
        eprintln!("  Offset overflows: {}", stats.offset_overflows);
        eprintln!("  Input bits:       {}", stats.input_bits);
        eprintln!("  Output bits:      {}", stats.total_bits);
        if let Some(ratio) = stats.ratio() {
            eprintln!("  Ratio:            {:.3}", ratio);
        }
        eprintln!("  Time:             {:.2?}", elapsed);
    }

    Ok(())
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    if path.to_str() == Some("-") {
        io::stdin().lock().read_to_end(&mut data)?;
    } else {
        BufReader::new(File::open(path)?).read_to_end(&mut data)?;
    }
    Ok(data)
}

fn write_packed<W: Write>(stream: &EncodedStream, output: &mut W) -> io::Result<()> {
    let bytes = stream.to_bytes();
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    writeln!(output, "Packed ({} bits, {} bytes): {}", stream.total_bits(), bytes.len(), hex)
}
