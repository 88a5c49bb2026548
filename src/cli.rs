use std::path::PathBuf;

use clap::Args;

use crate::config::AlbumConfig;

/// Flags shared by both binaries
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing the `album/` folder
    #[arg(long, env = "ALBUM_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Errors only
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommonArgs {
    pub fn config(&self) -> AlbumConfig {
        AlbumConfig::from_root(&self.root)
    }
}
