use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::Cli;
use crate::materialize::{self, CreationLog, PlannedEntry, Silent, TracingLog};
use crate::tree::{self, NodeKind};

pub fn run(cli: Cli) -> Result<()> {
    let cwd = env::current_dir().context("determining current directory")?;
    let base = resolve_base(&cwd, cli.chdir.as_deref());
    let layout = tree::flutter_layout()?;
    let planned = materialize::plan(&base, &layout)?;

    if cli.dry_run {
        for entry in &planned {
            println!("{:<9} {}", entry.kind, entry.path);
        }
        return Ok(());
    }

    let log: &dyn CreationLog = if cli.quiet { &Silent } else { &TracingLog };
    materialize::materialize(&base, &layout, log)
        .with_context(|| format!("creating Flutter layout under {}", base.display()))?;

    let (directories, files) = tally(&planned);
    info!(
        "created {directories} directories and {files} files in {}",
        base.display()
    );
    info!("directory structure created");
    Ok(())
}

/// `--chdir` wins over the working directory; relative values are taken from it.
fn resolve_base(cwd: &Path, chdir: Option<&Path>) -> PathBuf {
    match chdir {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    }
}

fn tally(planned: &[PlannedEntry]) -> (usize, usize) {
    planned.iter().fold((0, 0), |(dirs, files), entry| match entry.kind {
        NodeKind::Directory => (dirs + 1, files),
        NodeKind::File => (dirs, files + 1),
    })
}
