#![deny(missing_docs)]
//! A command-line interface for one-time-pad encryption, pad generation,
//! and printable pad sheets.

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{error, info};
use paperpad_core::alphabet::{Alphabet, Charset};
use paperpad_core::integrity::{self, ChecksumKind};
use paperpad_core::pad_generator;
use paperpad_core::sheet::{self, SheetLayout};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encrypt a message over the printable charset\npaperpad-cli encrypt -m 'HELLO WORLD' -o 'x9!fGh2#Lq8'\n\n# Encrypt over base64 with a CRC-32 integrity tag\npaperpad-cli encrypt -m HELLO -o XKCD9XKCD9XKCD9 --charset base64 --checksum crc32\n\n# Decrypt the result\npaperpad-cli decrypt -m <CIPHERTEXT> -o XKCD9XKCD9XKCD9 --charset base64 --checksum crc32\n\n# Generate a 500-symbol pad from the hardware RNG\npaperpad-cli pad generate --output ./my.pad --length 500 --device /dev/hwrng\n\n# Render a printable pad sheet\npaperpad-cli sheet --output ./sheet.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Charset selection, mirrored from the core library for clap.
#[derive(Copy, Clone, ValueEnum)]
enum CharsetArg {
    /// The 64-symbol base64 table
    Base64,
    /// The base64 table plus --extra-chars
    Base64Extended,
    /// Printable ASCII, space through tilde
    Printable,
}

impl From<CharsetArg> for Charset {
    fn from(arg: CharsetArg) -> Self {
        match arg {
            CharsetArg::Base64 => Self::Base64,
            CharsetArg::Base64Extended => Self::Base64Extended,
            CharsetArg::Printable => Self::Printable,
        }
    }
}

/// Checksum selection, mirrored from the core library for clap.
#[derive(Copy, Clone, ValueEnum)]
enum ChecksumArg {
    /// CRC-32, 8 tag symbols
    Crc32,
    /// Truncated SHA-256, 16 tag symbols
    Sha256,
}

impl From<ChecksumArg> for ChecksumKind {
    fn from(arg: ChecksumArg) -> Self {
        match arg {
            ChecksumArg::Crc32 => Self::Crc32,
            ChecksumArg::Sha256 => Self::Sha256,
        }
    }
}

#[derive(Args)]
struct CharsetOpts {
    /// The charset to build the alphabet from
    #[arg(long, value_enum, default_value = "printable")]
    charset: CharsetArg,

    /// Extra symbols appended to the base64 table (base64-extended only)
    #[arg(long, value_name = "SYMBOLS")]
    extra_chars: Option<String>,
}

impl CharsetOpts {
    fn build_alphabet(&self) -> Result<Alphabet, Box<dyn Error>> {
        Ok(Alphabet::build(
            self.charset.into(),
            self.extra_chars.as_deref(),
        )?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message with a one-time pad
    Encrypt {
        /// The plaintext message
        #[arg(short, long, allow_hyphen_values = true)]
        message: String,

        /// The one-time pad, at least as long as the framed message
        #[arg(short, long, allow_hyphen_values = true)]
        otp: String,

        #[command(flatten)]
        charset: CharsetOpts,

        /// Append an integrity tag of this kind before encrypting
        #[arg(long, value_enum)]
        checksum: Option<ChecksumArg>,
    },
    /// Decrypt a ciphertext with a one-time pad
    Decrypt {
        /// The ciphertext message
        #[arg(short, long, allow_hyphen_values = true)]
        message: String,

        /// The one-time pad the ciphertext was produced with
        #[arg(short, long, allow_hyphen_values = true)]
        otp: String,

        #[command(flatten)]
        charset: CharsetOpts,

        /// Verify and strip an integrity tag of this kind after decrypting
        #[arg(long, value_enum)]
        checksum: Option<ChecksumArg>,
    },
    /// Manage pads
    Pad {
        #[command(subcommand)]
        command: PadCommands,
    },
    /// Render a printable page of fresh pad material
    Sheet {
        /// Path for the rendered sheet
        #[arg(short, long)]
        output: PathBuf,

        /// Entropy device to read from, e.g. /dev/hwrng; defaults to the OS RNG
        #[arg(long)]
        device: Option<PathBuf>,

        #[command(flatten)]
        charset: CharsetOpts,

        /// Pad symbols per row
        #[arg(long, default_value_t = 100)]
        chars_per_line: usize,

        /// Pad rows per page
        #[arg(long, default_value_t = 42)]
        lines_per_page: usize,
    },
}

#[derive(Subcommand)]
enum PadCommands {
    /// Generate a new pad file with a JSON record sidecar
    Generate {
        /// Path for the pad file
        #[arg(short, long)]
        output: PathBuf,

        /// Pad length in symbols
        #[arg(short, long)]
        length: usize,

        /// Entropy device to read from, e.g. /dev/hwrng; defaults to the OS RNG
        #[arg(long)]
        device: Option<PathBuf>,

        #[command(flatten)]
        charset: CharsetOpts,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Encrypt {
            message,
            otp,
            charset,
            checksum,
        } => {
            let alphabet = charset.build_alphabet()?;
            let ciphertext = integrity::encrypt_with_integrity(
                &message,
                &otp,
                &alphabet,
                checksum.map(Into::into),
            )?;
            println!("{ciphertext}");
        }
        Commands::Decrypt {
            message,
            otp,
            charset,
            checksum,
        } => {
            let alphabet = charset.build_alphabet()?;
            let plaintext = integrity::decrypt_with_integrity(
                &message,
                &otp,
                &alphabet,
                checksum.map(Into::into),
            )?;
            println!("{plaintext}");
        }
        Commands::Pad {
            command:
                PadCommands::Generate {
                    output,
                    length,
                    device,
                    charset,
                },
        } => {
            let alphabet = charset.build_alphabet()?;
            info!(
                "Generating a pad of {length} symbols at '{}'.",
                output.display()
            );
            let record = pad_generator::generate_pad(
                &output,
                &alphabet,
                charset.charset.into(),
                length,
                device.as_deref(),
            )?;
            info!("Pad record written next to the pad file.");
            println!("{}", record.id);
        }
        Commands::Sheet {
            output,
            device,
            charset,
            chars_per_line,
            lines_per_page,
        } => {
            let alphabet = charset.build_alphabet()?;
            let layout = SheetLayout {
                chars_per_line,
                lines_per_page,
            };
            let bytes = pad_generator::read_entropy(device.as_deref(), layout.capacity())?;
            let pad_text = pad_generator::pad_text_from_bytes(&alphabet, &bytes);
            let page = sheet::render_sheet(&pad_text, &alphabet, layout);
            fs::write(&output, page)?;
            info!("Sheet written to '{}'.", output.display());
        }
    }
    Ok(())
}
