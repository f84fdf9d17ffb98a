use std::{fs::File, io::Write, path::Path};

use anyhow::Context;

use crate::domain::review::Review;

/// Write all rows as CSV, header first, replacing whatever is at `path`.
pub fn write_reviews(path: &Path, reviews: &[Review]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output table {}", path.display()))?;

    write_reviews_to(file, reviews)
        .with_context(|| format!("Failed to write output table {}", path.display()))?;

    log::info!("Wrote {} reviews to {}", reviews.len(), path.display());
    Ok(())
}

pub fn write_reviews_to<W: Write>(writer: W, reviews: &[Review]) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for review in reviews {
        writer.serialize(review)?;
    }
    writer.flush()?;

    Ok(())
}
