use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use suid::{
    Alphabet, DEFAULT_RANDOM_BYTES, MAX_RANDOM_BYTES, MIN_RANDOM_BYTES, validate_separator,
};

/// Command-line arguments for the `suid` binary.
///
/// Global options apply to both subcommands and can be supplied through the
/// environment (or a `.env` file) as well as flags.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "suid",
    version,
    about = "Generate and parse sortable unique identifiers"
)]
pub struct CliArgs {
    /// Base64 alphabet: `standard` (or `base64`) or `url-safe` (or
    /// `base64url`).
    ///
    /// Environment variable: `SUID_ALPHABET`
    #[arg(long, global = true, env = "SUID_ALPHABET", default_value_t = Alphabet::Standard)]
    pub alphabet: Alphabet,

    /// Character placed between the three segments.
    ///
    /// Must not be a character the alphabet can produce (so not `-` with
    /// `url-safe`), nor `=`.
    ///
    /// Environment variable: `SUID_SEPARATOR`
    #[arg(long, global = true, env = "SUID_SEPARATOR", default_value_t = '.')]
    pub separator: char,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate SUIDs, one per line.
    Generate {
        /// How many SUIDs to print.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Milliseconds since the Unix epoch; defaults to the current time.
        #[arg(long, allow_negative_numbers = true)]
        timestamp: Option<i64>,

        /// Number of random bytes, at least 2.
        ///
        /// Environment variable: `SUID_RANDOM_BYTES`
        #[arg(long, env = "SUID_RANDOM_BYTES", default_value_t = DEFAULT_RANDOM_BYTES)]
        random_bytes: usize,
    },
    /// Decode SUIDs into their timestamp and random bits.
    Parse {
        /// One or more SUIDs.
        #[arg(required = true)]
        suids: Vec<String>,

        /// Print one JSON object per line.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Validated configuration derived from [`CliArgs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub alphabet: Alphabet,
    pub separator: char,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate {
        count: usize,
        timestamp: Option<i64>,
        random_bytes: usize,
    },
    Parse {
        suids: Vec<String>,
        json: bool,
    },
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        validate_separator(args.separator, args.alphabet).with_context(|| {
            format!(
                "SUID_SEPARATOR ({:?}) cannot be used with SUID_ALPHABET ({})",
                args.separator, args.alphabet
            )
        })?;

        let action = match args.command {
            Command::Generate {
                count,
                timestamp,
                random_bytes,
            } => {
                if count == 0 {
                    bail!("--count must be greater than 0");
                }
                if !(MIN_RANDOM_BYTES..=MAX_RANDOM_BYTES).contains(&random_bytes) {
                    bail!(
                        "SUID_RANDOM_BYTES ({random_bytes}) must be between {MIN_RANDOM_BYTES} and {MAX_RANDOM_BYTES}"
                    );
                }
                Action::Generate {
                    count,
                    timestamp,
                    random_bytes,
                }
            }
            Command::Parse { suids, json } => Action::Parse { suids, json },
        };

        Ok(Self {
            alphabet: args.alphabet,
            separator: args.separator,
            action,
        })
    }
}
