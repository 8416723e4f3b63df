// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::consts::JSON_INDENT;
use crate::config::options::ExportOptions;
use crate::error::WriteError;
use crate::item::{Item, ScheduledItem};

/// Outcome of writing both export files. Each file succeeds or fails on its own.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<WriteError>,
}

impl WriteReport {
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Serialize `value` as pretty JSON: 4-space indent, non-ASCII kept literal,
/// trailing newline.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Create/truncate `path` and write `value` as JSON. Parent dirs are created.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), WriteError> {
    let fail = |source: io::Error| WriteError { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(fail)?;
        }
    }
    let bytes = to_json_bytes(value).map_err(|e| fail(io::Error::other(e)))?;

    let mut file = fs::File::create(path).map_err(fail)?;
    file.write_all(&bytes).map_err(fail)?;
    file.flush().map_err(fail)
}

/// Write both export files. A failure on one does not skip the other.
pub fn write_exports(
    export: &ExportOptions,
    released: &[Item],
    to_be_released: &[ScheduledItem],
) -> WriteReport {
    let mut report = WriteReport::default();

    let released_path = export.released_path();
    match write_json(&released_path, released) {
        Ok(()) => report.written.push(released_path),
        Err(e) => report.failed.push(e),
    }

    let pending_path = export.to_be_released_path();
    match write_json(&pending_path, to_be_released) {
        Ok(()) => report.written.push(pending_path),
        Err(e) => report.failed.push(e),
    }

    report
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_four_spaces_and_trailing_newline() {
        let items = vec![Item::new("에어 조던 1", "/p/1", "2020-01-01")];
        let text = String::from_utf8(to_json_bytes(&items).unwrap()).unwrap();
        assert_eq!(
            text,
            "[\n    {\n        \"name\": \"에어 조던 1\",\n        \"href\": \"/p/1\",\n        \"raw_release_text\": \"2020-01-01\"\n    }\n]\n"
        );
    }

    #[test]
    fn scheduled_item_keeps_key_order_and_null_date() {
        let items = vec![ScheduledItem::unresolved(Item::new("A", "/a", ""))];
        let text = String::from_utf8(to_json_bytes(&items).unwrap()).unwrap();
        let keys: Vec<usize> = ["\"name\"", "\"href\"", "\"raw_release_text\"", "\"releaseDate\""]
            .iter()
            .map(|k| text.find(k).unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("\"releaseDate\": null"));
    }

    #[test]
    fn empty_list_is_still_an_array() {
        let none: Vec<Item> = Vec::new();
        assert_eq!(to_json_bytes(&none).unwrap(), b"[]\n");
    }
}
