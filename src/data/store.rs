use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;

use crate::data::entry::Entry;
use crate::data::entry::EntryHandle;
use crate::data::entry::Record;
use crate::data::entry::RecordRef;
use crate::error::JournalError;
use crate::error::Result;

/// Suffix of entry files inside the store root
pub const ENTRY_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

/// File-per-entry store rooted at a single directory.
///
/// Nothing is cached: every [`load`](Self::load) and [`list`](Self::list) reads the disk again.
#[derive(Debug, Clone)]
pub struct EntryStore {
	root: PathBuf,
}

impl EntryStore {
	pub fn open(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Creates the store root and its parents if missing
	pub fn ensure_root(&self) -> Result<()> {
		fs::create_dir_all(&self.root).map_err(|source| JournalError::Io {
			path: self.root.clone(),
			source,
		})
	}

	/// Builds a new unsaved entry stamped with the current time
	pub fn create(&self, content: String) -> Entry {
		Entry::new(content)
	}

	/// Writes `entry` to disk, assigning a handle on its first save.
	///
	/// The entry is only modified once the record has been fully written.
	pub fn save(&self, entry: &mut Entry) -> Result<()> {
		let payload = serde_json::to_string_pretty(&RecordRef::from(&*entry));

		match entry.handle.clone() {
			Some(handle) => {
				let payload = payload.map_err(|err| JournalError::Io {
					path: handle.path().to_path_buf(),
					source: err.into(),
				})?;
				Self::replace(handle.path(), payload.as_bytes())?;
				tracing::debug!(handle = %handle, "entry updated");
			}
			None => {
				let (handle, mut file) = self.claim(&entry.created_at)?;
				let written = payload
					.map_err(io::Error::from)
					.and_then(|payload| file.write_all(payload.as_bytes()));
				if let Err(source) = written {
					drop(file);
					let _ = fs::remove_file(handle.path());
					return Err(JournalError::Io {
						path: handle.path().to_path_buf(),
						source,
					});
				}
				tracing::debug!(handle = %handle, "entry created");
				entry.handle = Some(handle);
			}
		}
		Ok(())
	}

	/// Reads the entry stored at `handle`
	pub fn load(&self, handle: &EntryHandle) -> Result<Entry> {
		let path = handle.path();
		let contents = fs::read_to_string(path).map_err(|err| JournalError::from_io(path, err))?;
		let record: Record = serde_json::from_str(&contents).map_err(|source| JournalError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(record.into_entry(handle.clone()))
	}

	/// Loads every readable entry, newest first.
	///
	/// Records that fail to load are skipped. Entries sharing a timestamp are ordered by
	/// descending handle. A missing root is an empty store.
	pub fn list(&self) -> Result<Vec<Entry>> {
		let dir = match fs::read_dir(&self.root) {
			Ok(dir) => dir,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				tracing::debug!(root = %self.root.display(), "store root missing");
				return Ok(vec![]);
			}
			Err(source) => {
				return Err(JournalError::Io {
					path: self.root.clone(),
					source,
				})
			}
		};

		let mut entries = vec![];
		for item in dir.flatten() {
			let path = item.path();
			if !path.is_file() || path.extension() != Some(OsStr::new(ENTRY_EXTENSION)) {
				continue;
			}
			match self.load(&EntryHandle::new(path)) {
				Ok(entry) => entries.push(entry),
				Err(err) => tracing::warn!(error = %err, "skipping unreadable entry"),
			}
		}

		entries.sort_by(|a, b| {
			b.created_at
				.cmp(&a.created_at)
				.then_with(|| b.handle.cmp(&a.handle))
		});
		tracing::debug!(count = entries.len(), "entries listed");
		Ok(entries)
	}

	/// Removes the entry at `handle`; [`JournalError::NotFound`] if it is already gone
	pub fn delete(&self, handle: &EntryHandle) -> Result<()> {
		fs::remove_file(handle.path()).map_err(|err| JournalError::from_io(handle.path(), err))?;
		tracing::debug!(handle = %handle, "entry deleted");
		Ok(())
	}

	/// Reserves a fresh file named after `created_at`, stepping forward on collisions
	fn claim(&self, created_at: &DateTime<Utc>) -> Result<(EntryHandle, File)> {
		let mut stamp = created_at
			.timestamp_nanos_opt()
			.unwrap_or_else(|| created_at.timestamp_millis());
		loop {
			let path = self.root.join(format!("{stamp}.{ENTRY_EXTENSION}"));
			match OpenOptions::new().write(true).create_new(true).open(&path) {
				Ok(file) => return Ok((EntryHandle::new(path), file)),
				Err(err) if err.kind() == io::ErrorKind::AlreadyExists => stamp += 1,
				Err(source) => return Err(JournalError::Io { path, source }),
			}
		}
	}

	/// Overwrites `path` through a sibling temp file so a failed write never truncates it
	fn replace(path: &Path, bytes: &[u8]) -> Result<()> {
		let tmp = path.with_extension(TEMP_EXTENSION);
		let result = fs::write(&tmp, bytes).and_then(|_| fs::rename(&tmp, path));
		if let Err(source) = result {
			let _ = fs::remove_file(&tmp);
			return Err(JournalError::Io {
				path: path.to_path_buf(),
				source,
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;
	use tempfile::TempDir;

	use super::*;

	fn store() -> (TempDir, EntryStore) {
		let dir = TempDir::new().unwrap();
		let store = EntryStore::open(dir.path());
		(dir, store)
	}

	fn saved(store: &EntryStore, content: &str, created_at: DateTime<Utc>) -> Entry {
		let mut entry = store.create(content.into());
		entry.created_at = created_at;
		store.save(&mut entry).unwrap();
		entry
	}

	fn handles(entries: &[Entry]) -> Vec<EntryHandle> {
		entries.iter().filter_map(|e| e.handle.clone()).collect()
	}

	#[test]
	fn create_does_not_persist() {
		let (_dir, store) = store();
		let entry = store.create("draft".into());
		assert!(entry.handle.is_none());
		assert!(store.list().unwrap().is_empty());
	}

	#[test]
	fn save_then_load_round_trips() {
		let (_dir, store) = store();
		let mut entry = store.create("hello\nworld ✓".into());
		store.save(&mut entry).unwrap();

		let handle = entry.handle.clone().unwrap();
		assert!(handle.path().starts_with(store.root()));
		assert_eq!(handle.path().extension().unwrap(), "json");

		let loaded = store.load(&handle).unwrap();
		assert_eq!(loaded.content, "hello\nworld ✓");
		assert_eq!(loaded.created_at, entry.created_at);
		assert_eq!(loaded.handle, Some(handle));
	}

	#[test]
	fn record_holds_content_and_date_only() {
		let (_dir, store) = store();
		let entry = saved(&store, "x", Utc::now());
		let raw = fs::read_to_string(entry.handle.unwrap().path()).unwrap();
		let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
		let obj = value.as_object().unwrap();
		assert_eq!(obj.len(), 2);
		assert!(obj.contains_key("content"));
		assert!(obj.contains_key("date"));
	}

	#[test]
	fn successive_entries_get_distinct_handles() {
		let (_dir, store) = store();
		let mut a = store.create("a".into());
		let mut b = store.create("b".into());
		store.save(&mut a).unwrap();
		store.save(&mut b).unwrap();
		assert_ne!(a.handle, b.handle);

		let at = Utc::now();
		let c = saved(&store, "c", at);
		let d = saved(&store, "d", at);
		assert_ne!(c.handle, d.handle);
		assert_eq!(store.list().unwrap().len(), 4);
	}

	#[test]
	fn save_reuses_handle() {
		let (_dir, store) = store();
		let mut entry = saved(&store, "first", Utc::now());
		let handle = entry.handle.clone();

		entry.content = "second".into();
		store.save(&mut entry).unwrap();
		assert_eq!(entry.handle, handle);

		let listed = store.list().unwrap();
		assert_eq!(listed.len(), 1);
		assert_eq!(listed[0].content, "second");
		assert_eq!(listed[0].handle, handle);
	}

	#[test]
	fn failed_save_leaves_entry_unsaved() {
		let dir = TempDir::new().unwrap();
		let store = EntryStore::open(dir.path().join("missing"));
		let mut entry = store.create("x".into());
		let err = store.save(&mut entry).unwrap_err();
		assert!(matches!(err, JournalError::Io { .. }));
		assert!(entry.handle.is_none());
	}

	#[test]
	fn load_reports_missing_and_malformed() {
		let (dir, store) = store();
		let missing = EntryHandle::new(dir.path().join("1.json"));
		assert!(store.load(&missing).unwrap_err().is_not_found());

		let bad = dir.path().join("2.json");
		fs::write(&bad, "{ not json").unwrap();
		assert!(matches!(
			store.load(&EntryHandle::new(bad)).unwrap_err(),
			JournalError::Parse { .. }
		));
	}

	#[test]
	fn list_is_newest_first() {
		let (_dir, store) = store();
		let t1 = saved(&store, "t1", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
		let t3 = saved(&store, "t3", Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
		let t2 = saved(&store, "t2", Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());

		let listed = store.list().unwrap();
		assert_eq!(handles(&listed), handles(&[t3, t2, t1]));
	}

	#[test]
	fn list_breaks_ties_by_handle() {
		let (_dir, store) = store();
		let at = Utc.with_ymd_and_hms(2024, 5, 5, 5, 5, 5).unwrap();
		let first = saved(&store, "first", at);
		let second = saved(&store, "second", at);
		assert!(second.handle > first.handle);

		let listed = store.list().unwrap();
		assert_eq!(handles(&listed), handles(&[second, first]));
	}

	#[test]
	fn list_skips_corrupt_records() {
		let (_dir, store) = store();
		let keep = saved(&store, "keep", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
		let broken = saved(&store, "broken", Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
		let also = saved(&store, "also", Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap());
		fs::write(broken.handle.as_ref().unwrap().path(), b"\x00garbage").unwrap();

		let listed = store.list().unwrap();
		assert_eq!(handles(&listed), handles(&[also, keep]));
	}

	#[test]
	fn list_ignores_foreign_files() {
		let (dir, store) = store();
		saved(&store, "entry", Utc::now());
		fs::write(dir.path().join("notes.txt"), "hi").unwrap();
		fs::write(dir.path().join("1.json.tmp"), "{}").unwrap();
		fs::create_dir(dir.path().join("sub.json")).unwrap();

		let listed = store.list().unwrap();
		assert_eq!(listed.len(), 1);
		assert_eq!(listed[0].content, "entry");
	}

	#[test]
	fn list_of_missing_root_is_empty() {
		let dir = TempDir::new().unwrap();
		let store = EntryStore::open(dir.path().join("nope"));
		assert!(store.list().unwrap().is_empty());
	}

	#[test]
	fn delete_then_list_omits_entry() {
		let (_dir, store) = store();
		let gone = saved(&store, "gone", Utc::now());
		let kept = saved(&store, "kept", Utc::now());
		let handle = gone.handle.unwrap();

		store.delete(&handle).unwrap();
		let listed = store.list().unwrap();
		assert!(listed.iter().all(|e| e.handle.as_ref() != Some(&handle)));
		assert_eq!(handles(&listed), handles(&[kept]));

		assert!(store.delete(&handle).unwrap_err().is_not_found());
	}

	#[test]
	fn ensure_root_creates_tree() {
		let dir = TempDir::new().unwrap();
		let store = EntryStore::open(dir.path().join("a/b/entries"));
		store.ensure_root().unwrap();
		assert!(store.root().is_dir());
		saved(&store, "x", Utc::now());
	}
}
