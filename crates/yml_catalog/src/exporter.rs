//! Writing finished catalogs to streams and files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::CatalogResult;
use crate::models::Catalog;
use crate::schema::ROOT_TAG;
use crate::serializer::to_xml;

/// Fixed preamble written before the document element.
pub const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE yml_catalog SYSTEM \"shops.dtd\">\n";

/// Render the complete document, preamble included.
pub fn export_to_string(catalog: &Catalog, pretty: bool) -> String {
    let mut document = String::from(HEADER);
    document.push_str(&to_xml(ROOT_TAG, catalog, pretty));
    document
}

/// Write the complete document to a stream.
pub fn export_to_writer<W: Write>(catalog: &Catalog, mut writer: W, pretty: bool) -> CatalogResult<()> {
    let document = export_to_string(catalog, pretty);
    debug!(
        "Writing catalog with {} offers ({} bytes)",
        catalog.offers().len(),
        document.len()
    );

    writer.write_all(document.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write the complete document to a file, replacing any existing content.
pub fn export_to_file(catalog: &Catalog, path: impl AsRef<Path>, pretty: bool) -> CatalogResult<()> {
    let path = path.as_ref();
    debug!("Exporting catalog to {:?}", path);

    let file = File::create(path)?;
    export_to_writer(catalog, BufWriter::new(file), pretty)
}
