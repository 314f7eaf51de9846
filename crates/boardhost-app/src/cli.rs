use std::path::PathBuf;

use boardhost_embed::ViewerKind;
use clap::Parser;

/// Boardhost: opens board and document viewers as tabs of one window.
#[derive(Parser, Debug)]
#[command(name = "boardhost", version, about)]
pub struct Args {
    /// Files to open, one tab each.
    pub files: Vec<PathBuf>,

    /// Viewer for the files on the command line
    /// (board-viewer, open-board-view, flex-board-view, sumatra-pdf).
    #[arg(long)]
    pub viewer: Option<ViewerKind>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
