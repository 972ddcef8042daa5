// File:    main.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Command-line front end for the classical cipher library.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! A command-line interface for encoding, decoding and attacking classical ciphers.

use cipher_core::{
    CaesarCryptanalyzer, Cipher, CipherError, CipherKind, KeySquare, analyze_frequency, compare,
};
use cipher_core::compare::Outcome;
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use serde::Serialize;
use std::path::{Path, PathBuf};

mod text_io;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encode with a Caesar shift of 3\ncipher-cli encode caesar --shift 3 \"HELLO\"\n\n# Decode a Vigenère message stored in a file\ncipher-cli decode vigenere --key KEY --input ./secret.txt\n\n# Rank all 26 Caesar shifts\ncipher-cli attack \"WKH TXLFN EURZQ IRA\"\n\n# Letter frequencies as JSON\ncipher-cli --json frequency --input ./book.txt"
)]
struct Cli {
    /// Print results as JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text with a cipher
    Encode(TransformArgs),
    /// Decode text with a cipher
    Decode(TransformArgs),
    /// Try every Caesar shift and rank the candidates
    Attack {
        /// The ciphertext. If omitted, --input or stdin is read.
        text: Option<String>,

        /// Path to a file holding the ciphertext
        #[arg(short, long, value_name = "INPUT_FILE")]
        input: Option<PathBuf>,

        /// How many candidates to show (0 shows all 26)
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },
    /// Count how often each letter A-Z occurs
    Frequency {
        /// The text to analyse. If omitted, --input or stdin is read.
        text: Option<String>,

        /// Path to a file holding the text
        #[arg(short, long, value_name = "INPUT_FILE")]
        input: Option<PathBuf>,
    },
    /// Show the Playfair key square for a keyword
    Square {
        /// The Playfair keyword
        #[arg(short, long)]
        key: String,
    },
    /// Encode the same text with every cipher
    #[command(
        after_help = "EXAMPLES:\n  \n# Compare all ciphers with the default keys\ncipher-cli compare \"Attack at dawn\"\n\n# Only show the transposition ciphers\ncipher-cli compare \"Attack at dawn\" --filter rail\n\n# Run just two ciphers\ncipher-cli compare \"Attack at dawn\" --only caesar,playfair"
    )]
    Compare(CompareArgs),
}

#[derive(Args)]
struct TransformArgs {
    /// The cipher to use (caesar, atbash, affine, vigenere, railfence, columnar, playfair)
    cipher: CipherKind,

    /// The text to transform. If omitted, --input or stdin is read.
    text: Option<String>,

    /// Path to a file holding the text
    #[arg(short, long, value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Path to write the result to. Prints to stdout if omitted.
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    #[command(flatten)]
    key: KeyArgs,
}

#[derive(Args)]
struct KeyArgs {
    /// Caesar shift (any integer)
    #[arg(short, long, allow_negative_numbers = true)]
    shift: Option<i32>,

    /// Keyword for Vigenère, columnar or Playfair
    #[arg(short, long)]
    key: Option<String>,

    /// Number of Rail Fence rails
    #[arg(short, long)]
    rails: Option<usize>,

    /// Affine multiplier, must be coprime with 26
    #[arg(short = 'a', long = "affine-a", allow_negative_numbers = true)]
    affine_a: Option<i32>,

    /// Affine offset
    #[arg(short = 'b', long = "affine-b", allow_negative_numbers = true)]
    affine_b: Option<i32>,
}

#[derive(Args)]
struct CompareArgs {
    /// The text to encode. If omitted, --input or stdin is read.
    text: Option<String>,

    /// Path to a file holding the text
    #[arg(short, long, value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Only show ciphers whose name or id contains this
    #[arg(short, long)]
    filter: Option<String>,

    /// Comma-separated ciphers to run (default: all)
    #[arg(long, value_delimiter = ',', value_name = "CIPHERS")]
    only: Vec<CipherKind>,

    /// Caesar shift
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    shift: i32,

    /// Vigenère key
    #[arg(long, default_value = "KEY")]
    vigenere_key: String,

    /// Rail Fence rails
    #[arg(long, default_value_t = 3)]
    rails: usize,

    /// Affine multiplier
    #[arg(short = 'a', long = "affine-a", default_value_t = 5, allow_negative_numbers = true)]
    affine_a: i32,

    /// Affine offset
    #[arg(short = 'b', long = "affine-b", default_value_t = 8, allow_negative_numbers = true)]
    affine_b: i32,

    /// Columnar key
    #[arg(long, default_value = "ZEBRA")]
    columnar_key: String,

    /// Playfair key
    #[arg(long, default_value = "MONARCHY")]
    playfair_key: String,
}

impl CompareArgs {
    /// The selected ciphers with their keys, in menu order.
    fn ciphers(&self) -> Vec<Cipher> {
        let all = [
            Cipher::Caesar { shift: self.shift },
            Cipher::Atbash,
            Cipher::Vigenere {
                keyword: self.vigenere_key.clone(),
            },
            Cipher::RailFence { rails: self.rails },
            Cipher::Affine {
                a: self.affine_a,
                b: self.affine_b,
            },
            Cipher::Columnar {
                key: self.columnar_key.clone(),
            },
            Cipher::Playfair {
                key: self.playfair_key.clone(),
            },
        ];
        all.into_iter()
            .filter(|cipher| self.only.is_empty() || self.only.contains(&cipher.kind()))
            .collect()
    }
}

/// The result of an encode or decode, as printed with `--json`.
#[derive(Serialize)]
struct TransformReport<'a> {
    cipher: &'a Cipher,
    direction: Direction,
    output: &'a str,
}

#[derive(Serialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum Direction {
    Encode,
    Decode,
}

fn missing(kind: CipherKind, flag: &str) -> CipherError {
    CipherError::InvalidKey(format!("the {} cipher needs {flag}", kind.name()))
}

/// Pairs the chosen cipher with the key flags it needs.
fn build_cipher(kind: CipherKind, key: &KeyArgs) -> Result<Cipher, CipherError> {
    let keyword = || key.key.clone().ok_or_else(|| missing(kind, "--key"));
    let cipher = match kind {
        CipherKind::Caesar => Cipher::Caesar {
            shift: key.shift.ok_or_else(|| missing(kind, "--shift"))?,
        },
        CipherKind::Atbash => Cipher::Atbash,
        CipherKind::Affine => Cipher::Affine {
            a: key.affine_a.ok_or_else(|| missing(kind, "--affine-a"))?,
            b: key.affine_b.ok_or_else(|| missing(kind, "--affine-b"))?,
        },
        CipherKind::Vigenere => Cipher::Vigenere { keyword: keyword()? },
        CipherKind::RailFence => Cipher::RailFence {
            rails: key.rails.ok_or_else(|| missing(kind, "--rails"))?,
        },
        CipherKind::Columnar => Cipher::Columnar { key: keyword()? },
        CipherKind::Playfair => Cipher::Playfair { key: keyword()? },
    };
    cipher.validate()?;
    Ok(cipher)
}

fn load_text(text: Option<&str>, input: Option<&Path>) -> String {
    text_io::read_text(text, input).unwrap_or_else(|e| {
        error!("Failed to read input text: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn transform(args: &TransformArgs, direction: Direction, json: bool) {
    let cipher = build_cipher(args.cipher, &args.key).unwrap_or_else(|e| {
        error!("{e}");
        std::process::exit(1);
    });
    let text = load_text(args.text.as_deref(), args.input.as_deref());

    info!("Running {} {:?}", cipher.kind().name(), cipher);
    let result = match direction {
        Direction::Encode => cipher.encode(&text),
        Direction::Decode => cipher.decode(&text),
    };
    let output = result.unwrap_or_else(|e| {
        error!("{e}");
        std::process::exit(1);
    });

    if json && args.output.is_none() {
        print_json(&TransformReport {
            cipher: &cipher,
            direction,
            output: &output,
        });
        return;
    }
    if let Err(e) = text_io::write_text(&output, args.output.as_deref()) {
        error!("Failed to write output: {e}");
        std::process::exit(1);
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode(args) => transform(args, Direction::Encode, cli.json),
        Commands::Decode(args) => transform(args, Direction::Decode, cli.json),
        Commands::Attack { text, input, top } => {
            let ciphertext = load_text(text.as_deref(), input.as_deref());
            if ciphertext.trim().is_empty() {
                error!("Please enter ciphertext first.");
                std::process::exit(1);
            }

            info!("Trying all 26 Caesar shifts...");
            let mut candidates = CaesarCryptanalyzer::brute_force(&ciphertext);
            if *top > 0 {
                candidates.truncate(*top);
            }

            if cli.json {
                print_json(&candidates);
            } else {
                for (rank, candidate) in candidates.iter().enumerate() {
                    println!("#{} {candidate}", rank + 1);
                }
            }
        }
        Commands::Frequency { text, input } => {
            let text = load_text(text.as_deref(), input.as_deref());
            let table = analyze_frequency(&text).require_letters().unwrap_or_else(|e| {
                error!("{e}");
                std::process::exit(1);
            });

            if cli.json {
                print_json(&table);
            } else {
                println!("{table}");
            }
        }
        Commands::Square { key } => {
            let square = KeySquare::new(key);
            if cli.json {
                print_json(square.rows());
            } else {
                println!("{square}");
            }
        }
        Commands::Compare(args) => {
            let text = load_text(args.text.as_deref(), args.input.as_deref());
            let query = args.filter.as_deref().unwrap_or_default();
            let results: Vec<compare::Comparison> = compare::run(&text, &args.ciphers())
                .into_iter()
                .filter(|entry| entry.matches(query))
                .collect();
            info!("Compared {} cipher(s)", results.len());

            if cli.json {
                print_json(&results);
                return;
            }
            let blocks: Vec<String> = results
                .iter()
                .map(|entry| match &entry.outcome {
                    Outcome::Output(output) => format!("{}:\n{output}", entry.name),
                    Outcome::Error(e) => format!("{}:\nerror: {e}", entry.name),
                })
                .collect();
            println!("{}", blocks.join("\n\n---\n\n"));
        }
    }
}
