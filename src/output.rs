//! TSV emission for combined results

use crate::error::Result;
use crate::snapshot::Relation;
use std::io::Write;
use std::path::Path;

/// Write a relation as tab-separated rows, no header, key column first.
pub fn write_relation<W: Write>(relation: &Relation, writer: W) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);

    for row in relation.iter() {
        out.serialize(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Write a relation to a file, creating or truncating it.
pub fn write_to_path(relation: &Relation, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_relation(relation, file)
}

/// Write a relation to standard output.
pub fn write_to_stdout(relation: &Relation) -> Result<()> {
    let stdout = std::io::stdout();
    write_relation(relation, stdout.lock())
}
