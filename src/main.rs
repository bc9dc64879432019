//! B-ENC - barcode-style substitution cipher.
//!
//! Encrypts lowercase text with a binary key and renders the result as
//! black and white bars.

use anyhow::{Context, Result};
use b_enc::codec::format_ciphertext;
use b_enc::config::{BencConfig, RenderBackend};
use b_enc::encoding::encode_bars_with;
use b_enc::render::renderer_for;
use b_enc::Pipeline;
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "b-enc")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Barcode-style substitution cipher",
    long_about = "Shifts lowercase text with a binary key and encodes the ciphertext as black/white bars."
)]
struct Cli {
    /// Key pattern; characters other than 0 and 1 are ignored (default: 101011)
    #[arg(long, global = true, conflicts_with = "ask_key")]
    key: Option<String>,

    /// Read the key from the terminal without echo
    #[arg(long, global = true)]
    ask_key: bool,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text into ciphertext and bars
    Encrypt {
        /// Plaintext (default: stdin)
        text: Option<String>,
    },

    /// Decrypt space-separated ciphertext
    Decrypt {
        /// Ciphertext integers (default: stdin)
        #[arg(allow_hyphen_values = true)]
        ciphertext: Option<String>,

        /// Fail on codes outside the alphabet instead of dropping them
        #[arg(long)]
        strict: bool,
    },

    /// Encode already-shifted integers as bars
    Bars {
        /// Integers to encode
        #[arg(allow_negative_numbers = true)]
        codes: Vec<i64>,
    },

    /// Encrypt text and render its bars to a file
    Render {
        /// Plaintext (default: stdin)
        text: Option<String>,

        /// Output file, or - for stdout
        #[arg(short, long)]
        output: PathBuf,

        /// Renderer: png or text
        #[arg(long)]
        backend: Option<RenderBackend>,

        /// Bar width in pixels
        #[arg(long)]
        bar_width: Option<u32>,

        /// Image height in pixels (lines for text)
        #[arg(long)]
        height: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "b_enc=warn",
        1 => "b_enc=debug",
        _ => "b_enc=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => BencConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BencConfig::default(),
    };

    if cli.ask_key {
        config.key = rpassword::prompt_password("Key: ").context("failed to read key")?;
    } else if let Some(key) = cli.key {
        config.key = key;
    }

    match cli.command {
        Commands::Encrypt { text } => cmd_encrypt(&config, text, cli.json),

        Commands::Decrypt { ciphertext, strict } => {
            config.strict_decode |= strict;
            cmd_decrypt(&config, ciphertext, cli.json)
        }

        Commands::Bars { codes } => cmd_bars(&config, &codes, cli.json),

        Commands::Render {
            text,
            output,
            backend,
            bar_width,
            height,
        } => {
            if let Some(backend) = backend {
                config.render.backend = backend;
            }
            if let Some(bar_width) = bar_width {
                config.render.bar_width = bar_width;
            }
            if let Some(height) = height {
                config.render.height = height;
            }
            cmd_render(&config, text, &output)
        }
    }
}

fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(s) => Ok(s),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn cmd_encrypt(config: &BencConfig, text: Option<String>, json: bool) -> Result<()> {
    let text = read_input(text)?;
    let pipeline = Pipeline::from_config(config)?;
    let encrypted = pipeline.encrypt_text(&text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&encrypted)?);
    } else {
        println!("Codes:      {}", format_ciphertext(&encrypted.codes));
        println!("Ciphertext: {}", format_ciphertext(&encrypted.cipher));
        println!("Bars:       {}", encrypted.bars);
    }

    Ok(())
}

fn cmd_decrypt(config: &BencConfig, ciphertext: Option<String>, json: bool) -> Result<()> {
    let ciphertext = read_input(ciphertext)?;
    let pipeline = Pipeline::from_config(config)?;
    let decrypted = pipeline.decrypt_str(&ciphertext)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&decrypted)?);
    } else {
        println!("Codes:     {}", format_ciphertext(&decrypted.codes));
        println!("Plaintext: {}", decrypted.plaintext);
    }

    Ok(())
}

fn cmd_bars(config: &BencConfig, codes: &[i64], json: bool) -> Result<()> {
    let bars = encode_bars_with(codes, &config.framing)?;

    if json {
        println!("{}", serde_json::to_string(&bars)?);
    } else {
        println!("{}", bars);
    }

    Ok(())
}

fn cmd_render(config: &BencConfig, text: Option<String>, output: &Path) -> Result<()> {
    let text = read_input(text)?;
    let pipeline = Pipeline::from_config(config)?;
    let encrypted = pipeline.encrypt_text(&text)?;
    let renderer = renderer_for(&config.render)?;
    let image = renderer.render(&encrypted.bars)?;

    if output == Path::new("-") {
        io::stdout().write_all(&image)?;
    } else {
        std::fs::write(output, &image)
            .with_context(|| format!("failed to write {}", output.display()))?;
        println!(
            "Wrote {} bars to {} ({})",
            encrypted.bars.len(),
            output.display(),
            renderer.extension()
        );
    }

    Ok(())
}
