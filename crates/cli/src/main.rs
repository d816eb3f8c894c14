mod config;
mod interactive;

use config::Config;

use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;
use colored::{control::set_override, Colorize};
use hashhound_core::{
    BatchConfig, BatchRunner, CharsetTag, Hashhound, LengthSpec, RenderConfig, RenderMode,
};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

const LONG_ABOUT: &str = r##"
Hashhound identifies the likely algorithm family of a hash string.

It looks at the length, the character set and literal markers such as
'$1$' or '$2y$'. Everything happens offline; nothing is cracked, verified
or looked up.

CHARSET TAGS:
  a  lowercase/numeric (default)
  b  contains '$' (crypt-style fields)
  c  contains '/' (Base64-like alphabet)
  d  starts with 0x0 (MSSQL-style hex)
  e  contains upper-case letters

EXAMPLES:
  hashhound 5f4dcc3b5aa765d61d8327deb882cf99       Hex digest (MD5 family)
  hashhound '$1$abcdefgh$somehashvalue'            MD5 crypt(3)
  hashhound -c '$6$salt$hash'                      Compact output
  cat hashes.txt | hashhound -s -t 8               Script mode, 8 workers
  hashhound -i                                     Interactive shell

Hashes containing '$' or other shell symbols must be quoted.

SCRIPT MODE:
  Reads one hash per line from stdin and prints one compact block per
  hash: 'TOKEN 100.00' lines followed by a blank line. Blocks from
  different lines never interleave, but may arrive out of input order.

CONFIGURATION:
  Precedence: CLI args > Environment vars > Config file > Defaults

  Setting   | CLI flag        | Env var             | Default
  ----------|-----------------|---------------------|--------
  threads   | -t, --threads   | HASHHOUND_THREADS   | 4
  no_color  | -C, --no-color  | HASHHOUND_NO_COLOR  | false

  Config file location: hashhound --config-path
  Generate default config: hashhound --config-init

  Note: NO_COLOR env var is also respected (https://no-color.org/)"##;

#[derive(Parser)]
#[command(name = "hashhound")]
#[command(version)]
#[command(about = "Identify the likely algorithm of a hash")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// The hash to identify
    #[arg(value_name = "HASH")]
    hash: Option<String>,

    /// Use the interactive shell
    #[arg(long, short = 'i')]
    interactive: bool,

    /// Script mode: read hashes from stdin, one per line, compact output
    ///
    /// Implied when stdin is piped and no HASH is given.
    #[arg(long, short = 's')]
    script: bool,

    /// Number of worker threads for script mode
    #[arg(long, short = 't', value_name = "N", allow_negative_numbers = true)]
    threads: Option<i64>,

    /// List supported hashing algorithms
    #[arg(long, short = 'l')]
    list: bool,

    /// Output results as JSON, one object per hash
    #[arg(long, short = 'j')]
    json: bool,

    /// Compact output (one `TOKEN 100.00` line per algorithm)
    #[arg(long, short = 'c')]
    compact: bool,

    /// Disable colored output
    #[arg(long, short = 'C')]
    no_color: bool,

    /// Enable verbose logging (use multiple times for more detail)
    ///
    /// -v shows debug messages, -vv shows trace messages.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show config file path
    #[arg(long)]
    config_path: bool,

    /// Generate default config file (see --config-path for location)
    #[arg(long)]
    config_init: bool,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", "error".red().bold(), message);
    process::exit(1);
}

fn print_algorithms(hound: &Hashhound) {
    println!("{}", "Definite Signatures".bold().underline());
    println!();
    for rule in hound.signatures() {
        println!("  {} {} - {}", "→".cyan(), rule.name.yellow(), rule.test);
    }
    println!();

    println!("{}", "Catalog".bold().underline());
    println!();

    let mut lengths: Vec<LengthSpec> = Vec::new();
    for entry in hound.catalog() {
        if !lengths.contains(&entry.length) {
            lengths.push(entry.length);
        }
    }
    lengths.sort_by_key(|l| match l {
        LengthSpec::Exact(n) => (0, *n),
        LengthSpec::Any => (1, 0),
    });

    for length in lengths {
        let heading = match length {
            LengthSpec::Exact(n) => format!("{} chars", n),
            LengthSpec::Any => "variable length".to_string(),
        };
        println!("{} {}", "▶".blue(), heading.green().bold());

        for entry in hound.catalog().iter().filter(|e| e.length == length) {
            let tags: Vec<String> = entry.charsets.iter().map(CharsetTag::to_string).collect();
            println!(
                "  {} {} {}",
                "→".cyan(),
                entry.name.yellow(),
                format!("[{}]", tags.join(",")).dimmed()
            );
        }
        println!();
    }
}

fn main() {
    let cli = Cli::parse();

    // Handle --config-path
    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => fail("Cannot determine config directory"),
        }
        return;
    }

    // Handle --config-init
    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => fail(e),
        }
        return;
    }

    // Initialize tracing based on verbosity level
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    // Load config file and merge with CLI args
    let file_config = Config::load();

    if let Some(path) = Config::path() {
        if path.exists() {
            tracing::debug!("Loaded config from: {}", path.display());
        } else {
            tracing::trace!("No config file at: {}", path.display());
        }
    }

    let threads = if let Some(t) = cli.threads {
        tracing::debug!("threads = {} (from CLI)", t);
        t
    } else {
        let t = file_config.threads();
        let source = if std::env::var("HASHHOUND_THREADS").is_ok() {
            "env HASHHOUND_THREADS"
        } else if file_config.threads.is_some() {
            "config file"
        } else {
            "default"
        };
        tracing::debug!("threads = {} (from {})", t, source);
        t
    };

    let no_color = cli.no_color || file_config.no_color();
    if no_color {
        tracing::debug!("no_color = true");
        set_override(false);
    }

    let mode = if cli.json {
        RenderMode::Json
    } else if cli.compact {
        RenderMode::Compact
    } else {
        RenderMode::Verbose
    };
    let render = RenderConfig {
        mode,
        color: !no_color,
    };

    let hound = Hashhound::new();

    if cli.list {
        print_algorithms(&hound);
        return;
    }

    if let Some(hash) = cli.hash {
        let result = hound.classify(&hash);
        print!("{}", hound.render(&result, &render));
        return;
    }

    if cli.interactive {
        eprintln!(
            "{} {} - type a hash, Ctrl-D to quit",
            "hashhound".bold(),
            env!("CARGO_PKG_VERSION")
        );
        if let Err(e) = interactive::run_interactive(&hound, &render) {
            fail(format!("Failed to read stdin: {}", e));
        }
        return;
    }

    if cli.script || !io::stdin().is_terminal() {
        // Only script mode uses workers; a bad count is fatal before any input is read.
        let script_render = RenderConfig {
            mode: if cli.json {
                RenderMode::Json
            } else {
                RenderMode::Compact
            },
            color: false,
        };
        let batch_config = match BatchConfig::new(threads, script_render) {
            Ok(config) => config,
            Err(e) => fail(e),
        };

        tracing::debug!(workers = batch_config.workers(), "script mode");
        let runner = BatchRunner::new(&hound, io::stdout(), batch_config);
        if let Err(e) = runner.run_reader(io::stdin().lock()) {
            fail(e);
        }
        return;
    }

    eprintln!("{}: No hash provided", "error".red().bold());
    eprintln!();
    eprintln!("Usage: {} [HASH] [-i] [-s] [-l] [-t N]", "hashhound".bold());
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  hashhound 5f4dcc3b5aa765d61d8327deb882cf99");
    eprintln!("  hashhound '$1$abcdefgh$somehashvalue'");
    eprintln!("  cat hashes.txt | hashhound -s");
    eprintln!();
    eprintln!("Run {} for more information.", "hashhound --help".bold());
    process::exit(1);
}
