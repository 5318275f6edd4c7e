//! Command execution for the statdiff CLI

use crate::cli::Cli;
use crate::diff;
use crate::error::Result;
use crate::output;
use crate::resolver::SnapshotPair;
use crate::snapshot;

/// Run the full pipeline: resolve, load, diff, sort, emit.
pub fn run(cli: &Cli) -> Result<()> {
    let pair = SnapshotPair::resolve(&cli.old_snapshot, &cli.new_snapshot)?;
    log::debug!(
        "diffing {} ({}) against {} ({}), cutoff {}",
        pair.new_path.display(),
        pair.new_date,
        pair.old_path.display(),
        pair.old_date,
        pair.cutoff
    );

    let old = snapshot::load(&pair.old_path)?;
    let new = snapshot::load(&pair.new_path)?;

    let outcome = diff::compute_diff(&old, &new, pair.cutoff);
    let mut combined = outcome.combined;

    if cli.sort_desc {
        combined.sort_by_views_desc();
    }

    match &cli.output {
        Some(path) => {
            output::write_to_path(&combined, path)?;
            println!(
                "✅ Wrote {} rows to {} ({} new entries)",
                combined.len(),
                path.display(),
                outcome.new_entries
            );
        }
        None => output::write_to_stdout(&combined)?,
    }

    Ok(())
}
