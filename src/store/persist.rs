//! JSON file persistence for the record store
//!
//! The store file is a JSON array of record objects. A missing file is an
//! empty store.

use crate::error::{RecmanError, Result};
use crate::runner::{Context, LoadPolicy};
use crate::store::{Record, Store};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Permission bits for a saved store file (rw-r--r--)
#[cfg(unix)]
const STORE_FILE_MODE: u32 = 0o644;

/// Load the store from `path`
pub fn load(path: &Path, ctx: &Context) -> Result<Store> {
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            ctx.print_debug(&format!("{} does not exist, starting empty", path.display()));
            return Ok(Store::new());
        }
        Err(e) => {
            return Err(RecmanError::Persist {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    if contents.iter().all(u8::is_ascii_whitespace) {
        ctx.print_debug(&format!("{} is empty, starting empty", path.display()));
        return Ok(Store::new());
    }

    // A literal `null` is an empty store.
    let records: Vec<Record> = match serde_json::from_slice::<Option<Vec<Record>>>(&contents) {
        Ok(records) => records.unwrap_or_default(),
        Err(e) => match ctx.load_policy {
            LoadPolicy::Strict => {
                return Err(RecmanError::Decoding(format!(
                    "store file '{}' is not valid: {}",
                    path.display(),
                    e
                )))
            }
            LoadPolicy::Lenient => {
                ctx.print_warn(&format!(
                    "ignoring malformed store file '{}': {}",
                    path.display(),
                    e
                ));
                Vec::new()
            }
        },
    };

    let store: Store = records.into_iter().collect();
    ctx.print_debug(&format!("loaded {} record(s) from {}", store.len(), path.display()));
    Ok(store)
}

/// Save the store to `path`, replacing any previous contents
///
/// The new contents are written to a temporary file next to `path` and
/// renamed over it.
pub fn save(path: &Path, store: &Store, ctx: &Context) -> Result<()> {
    let bytes = serde_json::to_vec(&store.list())?;

    let persist_err = |source: io::Error| RecmanError::Persist {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(persist_err)?;
    file.write_all(&bytes).map_err(persist_err)?;
    file.flush().map_err(persist_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(STORE_FILE_MODE))
            .map_err(persist_err)?;
    }

    file.persist(path).map_err(|e| persist_err(e.error))?;

    ctx.print_debug(&format!("saved {} record(s) to {}", store.len(), path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Store {
        let mut store = Store::new();
        store.add(Record::new("1", "a@b.com", 30)).unwrap();
        store.add(Record::new("2", "c@d.com", 41)).unwrap();
        store
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = load(&temp_dir.path().join("absent.json"), &Context::new()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_null_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        fs::write(&path, "null").unwrap();

        let store = load(&path, &Context::new()).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_load_blank_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");

        fs::write(&path, "").unwrap();
        assert!(load(&path, &Context::new()).unwrap().is_empty());

        fs::write(&path, " \n\t").unwrap();
        assert!(load(&path, &Context::new()).unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        let ctx = Context::new();

        save(&path, &sample(), &ctx).unwrap();
        let loaded = load(&path, &ctx).unwrap();

        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_save_empty_store_writes_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");

        save(&path, &Store::new(), &Context::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        let ctx = Context::new();

        save(&path, &sample(), &ctx).unwrap();
        save(&path, &Store::new(), &ctx).unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");

        save(&path, &sample(), &Context::new()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_load_malformed_strict() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        fs::write(&path, "not json").unwrap();

        let result = load(&path, &Context::new());

        assert!(matches!(result, Err(RecmanError::Decoding(_))));
    }

    #[test]
    fn test_load_malformed_lenient() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        fs::write(&path, "{\"id\":").unwrap();

        let ctx = Context::new()
            .with_verbosity(crate::runner::Verbosity::Silent)
            .with_load_policy(LoadPolicy::Lenient);
        let store = load(&path, &ctx).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load(temp_dir.path(), &Context::new());
        assert!(matches!(result, Err(RecmanError::Persist { .. })));
    }
}
