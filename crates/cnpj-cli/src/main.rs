//! cnpj CLI - generate, validate and derive CNPJ identifiers.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{branches, check_branches, complete, format, generate, validate, Variant};

#[derive(Parser)]
#[command(name = "cnpj", version)]
#[command(about = "Generate and validate numeric and alphanumeric CNPJ identifiers")]
struct Cli {
    /// Log engine decisions to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random headquarters identifiers
    Generate {
        /// Identifier variant
        #[arg(long, value_enum, default_value_t = Variant::Numeric)]
        variant: Variant,
        /// Number of identifiers to generate
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate one or more identifiers
    Validate {
        /// Identifiers, masked or raw
        #[arg(required = true)]
        ids: Vec<String>,
        /// Identifier variant
        #[arg(long, value_enum, default_value_t = Variant::Numeric)]
        variant: Variant,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if any identifier is invalid
        #[arg(long)]
        strict: bool,
    },
    /// Derive branch identifiers 0001..COUNT from a main identifier
    Branches {
        /// Main identifier
        root: String,
        /// Number of branches to derive
        count: u32,
        /// Identifier variant
        #[arg(long, value_enum, default_value_t = Variant::Numeric)]
        variant: Variant,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check branch identifiers against a main identifier
    CheckBranches {
        /// Main identifier
        root: String,
        /// Branch identifiers
        branches: Vec<String>,
        /// Read additional branch identifiers from a file, one per line
        #[arg(long)]
        file: Option<String>,
        /// Identifier variant
        #[arg(long, value_enum, default_value_t = Variant::Numeric)]
        variant: Variant,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if any branch is invalid
        #[arg(long)]
        strict: bool,
    },
    /// Append check digits to a 12-symbol root+branch base
    Complete {
        /// Root and branch symbols, punctuation allowed
        base: String,
        /// Identifier variant
        #[arg(long, value_enum, default_value_t = Variant::Numeric)]
        variant: Variant,
    },
    /// Apply the XX.XXX.XXX/XXXX-XX mask
    Format {
        /// Raw identifier
        raw: String,
        /// Identifier variant
        #[arg(long, value_enum, default_value_t = Variant::Numeric)]
        variant: Variant,
    },
    /// Strip the mask and any other non-symbol characters
    Unformat {
        /// Identifier text
        text: String,
        /// Identifier variant
        #[arg(long, value_enum, default_value_t = Variant::Numeric)]
        variant: Variant,
    },
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            variant,
            count,
            seed,
            json,
        } => generate::run(variant, count, seed, json),
        Commands::Validate {
            ids,
            variant,
            json,
            strict,
        } => validate::run(variant, ids, json, strict),
        Commands::Branches {
            root,
            count,
            variant,
            json,
        } => branches::run(variant, root, count, json),
        Commands::CheckBranches {
            root,
            branches,
            file,
            variant,
            json,
            strict,
        } => check_branches::run(variant, root, branches, file, json, strict),
        Commands::Complete { base, variant } => complete::run(variant, base),
        Commands::Format { raw, variant } => format::run_format(variant, raw),
        Commands::Unformat { text, variant } => format::run_unformat(variant, text),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
