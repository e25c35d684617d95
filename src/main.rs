use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nestlink::text::DEFAULT_FORMAT;
use nestlink::{
    flatten_cursor, flatten_with_parent, split_camel_case, Cursor, Iso8601Check, Node, Scalar,
};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "nestlink", about = "Flatten nested structures with parent and cursor links")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every leaf of a literal with its nearest parent.
    Flatten {
        /// Structure literal, e.g. "[1, [2, 3], (4, 5), {6}]".
        literal: String,
    },
    /// Open a cursor over a literal's elements and print leaf/cursor/parent triples.
    Cursor {
        /// Aggregate structure literal.
        literal: String,
        /// Stop after this many triples.
        #[arg(long)]
        take: Option<usize>,
    },
    /// Check whether a string is an ISO-8601-like date/time.
    Iso8601 {
        /// Candidate string, optionally suffixed with Z or +hh:mm.
        text: String,
        /// strftime-style reference format.
        #[arg(long, default_value = DEFAULT_FORMAT)]
        format: String,
        /// Reject timezone suffixes.
        #[arg(long)]
        no_timezone: bool,
    },
    /// Split a camel-case identifier into words.
    Camel {
        /// Identifier to split.
        text: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Flatten { literal } => run_flatten(&literal)?,
        Commands::Cursor { literal, take } => run_cursor(&literal, take)?,
        Commands::Iso8601 {
            text,
            format,
            no_timezone,
        } => return Ok(run_iso8601(&text, format, no_timezone)),
        Commands::Camel { text } => run_camel(&text),
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_literal(literal: &str) -> Result<Node<Scalar>> {
    literal
        .parse()
        .with_context(|| format!("failed to parse structure literal '{}'", literal))
}

fn render_parent(parent: Option<&Node<Scalar>>) -> String {
    parent.map_or_else(|| "-".to_string(), |node| node.to_string())
}

fn run_flatten(literal: &str) -> Result<()> {
    let root = parse_literal(literal)?;
    debug!(leaves = root.leaf_count(), depth = root.depth(), "flattening");

    for (leaf, parent) in flatten_with_parent(&root) {
        println!("{}\t{}", leaf, render_parent(parent));
    }

    Ok(())
}

fn run_cursor(literal: &str, take: Option<usize>) -> Result<()> {
    let root = parse_literal(literal)?;
    if !root.is_aggregate() {
        bail!("cursor needs an aggregate literal, got leaf {}", root);
    }

    let mut cursor = Cursor::over(&root);
    let limit = take.unwrap_or(usize::MAX);
    for linked in flatten_cursor(&mut cursor, None).take(limit) {
        let producer = linked
            .cursor
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        println!("{}\t{}\t{}", linked.value, producer, render_parent(linked.parent));
    }

    let pulled = cursor.pulled();
    let remaining = cursor.count();
    println!("pulled {} element(s), {} remaining", pulled, remaining);

    Ok(())
}

fn run_iso8601(text: &str, format: String, no_timezone: bool) -> ExitCode {
    let check = Iso8601Check::with_format(format).with_timezone(!no_timezone);
    if check.check(text) {
        println!("valid");
        ExitCode::SUCCESS
    } else {
        println!("invalid");
        ExitCode::FAILURE
    }
}

fn run_camel(text: &str) {
    for word in split_camel_case(text) {
        println!("{}", word);
    }
}
