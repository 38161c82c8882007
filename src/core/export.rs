use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::model::Record;
use crate::domain::ports::Storage;
use crate::utils::error::{EtlError, Result};

/// Default directory course listings are exported into.
pub const DEFAULT_EXPORT_DIR: &str = "./course_result";

/// Writes record sets as pretty-printed UTF-8 JSON through a storage backend.
pub struct Exporter<S: Storage> {
    storage: S,
}

impl<S: Storage> Exporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Serializes `records` to `<file_name>.json` (the suffix is appended
    /// when absent), overwriting any previous export. Returns the file name
    /// actually written.
    pub async fn export(&self, records: &[Record], file_name: &str) -> Result<String> {
        let file_name = normalize_file_name(file_name);
        let document = to_pretty_json(records)?;
        self.storage
            .write_file(&file_name, document.as_bytes())
            .await
            .map_err(|source| EtlError::ExportError {
                path: file_name.clone(),
                source: Box::new(source),
            })?;
        Ok(file_name)
    }
}

fn normalize_file_name(name: &str) -> String {
    let extension = std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str());
    if extension == Some("json") {
        name.to_string()
    } else {
        format!("{}.json", name)
    }
}

/// 4-space indented JSON with non-ASCII text left unescaped.
pub fn to_pretty_json(records: &[Record]) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer).expect("serde_json output is UTF-8"))
}
