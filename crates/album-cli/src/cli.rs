use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "album")]
#[command(about = "Browse and add to the event album from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Media service account identifier (overrides ALBUM_CLOUD_NAME)
    #[arg(long, global = true, value_name = "NAME")]
    pub cloud_name: Option<String>,

    /// Unsigned upload preset (overrides ALBUM_UPLOAD_PRESET)
    #[arg(long, global = true, value_name = "PRESET")]
    pub upload_preset: Option<String>,

    /// Album classification tag (overrides ALBUM_TAG)
    #[arg(long, global = true, value_name = "TAG")]
    pub tag: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the album's photos and videos
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Upload photos or videos to the album
    Upload {
        /// Files to upload
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
        /// Accept only the first file, like the single file input
        #[arg(long)]
        single: bool,
        /// Skip the delayed listing refresh after uploading
        #[arg(long)]
        no_refresh: bool,
    },
    /// Print delivery URLs for one item
    Urls {
        /// Media identity
        public_id: String,
        /// Delivery format (jpg, mp4, ...)
        format: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
