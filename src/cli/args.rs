//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "uic", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug-level logging with timestamps.
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Raise the logger to error-level only.
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan a project tree and produce a manifest of interactive elements.
    Scan(ScanArgs),
    /// Assign agent ids to a raw element manifest.
    Name(NameArgs),
    /// Write agent ids back into source as `data-agent-id` attributes.
    Annotate(AnnotateArgs),
    /// Compare two manifests and classify the changes.
    Diff(DiffArgs),
    /// List elements in a manifest, optionally filtered.
    List(ListArgs),
    /// Fuzzy-search a manifest by agent id, label, or handler.
    Find(FindArgs),
    /// Print one element's full record.
    Describe(DescribeArgs),
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Project root directory.
    pub dir: PathBuf,

    /// Write the manifest to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Routing convention to derive routes with.
    #[arg(long)]
    pub framework: Option<String>,

    /// Emit the manifest as JSON on stdout regardless of `--output`.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct NameArgs {
    /// Raw-element manifest to assign agent ids to.
    pub manifest_in: PathBuf,

    /// Write the named manifest to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct AnnotateArgs {
    /// Project root directory.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Manifest to read agent ids from.
    #[arg(long, default_value = "manifest.json")]
    pub manifest: PathBuf,

    /// Preview edits without touching the filesystem (default, and always
    /// wins over `--write`).
    #[arg(long, default_value_t = true, overrides_with = "no_dry_run")]
    pub dry_run: bool,

    /// Disable dry-run so `--write` actually takes effect.
    #[arg(long = "no-dry-run", overrides_with = "dry_run")]
    pub no_dry_run: bool,

    /// Apply the edits to disk (has no effect unless dry-run is disabled).
    #[arg(long)]
    pub write: bool,

    /// Directory to copy originals into before the first write.
    #[arg(long, default_value = ".uic-backup")]
    pub backup_dir: PathBuf,

    /// Emit a diff summary as JSON.
    #[arg(long)]
    pub json: bool,
}

impl AnnotateArgs {
    pub fn effective_dry_run(&self) -> bool {
        !self.no_dry_run
    }
}

#[derive(Debug, Parser)]
pub struct DiffArgs {
    /// Older manifest.
    pub a: PathBuf,
    /// Newer manifest.
    pub b: PathBuf,

    /// Emit the change set as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Manifest to list elements from.
    #[arg(long, default_value = "manifest.json")]
    pub manifest: PathBuf,

    /// Filter by element type.
    #[arg(long)]
    pub r#type: Option<String>,

    /// Filter by route.
    #[arg(long)]
    pub route: Option<String>,

    /// Filter by enclosing component name.
    #[arg(long)]
    pub component: Option<String>,

    /// Print the distinct set of routes instead of elements.
    #[arg(long)]
    pub routes: bool,

    /// Print the distinct set of components instead of elements.
    #[arg(long)]
    pub components: bool,

    /// Emit matches as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct FindArgs {
    /// Free-text query matched against agent ids, labels, and handlers.
    pub query: String,

    /// Manifest to search.
    #[arg(long, default_value = "manifest.json")]
    pub manifest: PathBuf,

    /// Maximum number of matches to print.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Emit matches as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct DescribeArgs {
    /// Agent id to describe.
    pub agent_id: String,

    /// Manifest to look the id up in.
    #[arg(long, default_value = "manifest.json")]
    pub manifest: PathBuf,

    /// Emit the element as JSON.
    #[arg(long)]
    pub json: bool,
}
