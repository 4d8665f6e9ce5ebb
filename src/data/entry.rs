use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Local;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Maximum number of characters shown in a list description
pub const DESCRIPTION_LEN: usize = 50;

/// Human format for entry dates, e.g. `January 2, 2006 15:04:05`
pub const DATE_FORMAT: &str = "%B %-d, %Y %H:%M:%S";

/// Location of an entry on disk
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryHandle(PathBuf);

impl EntryHandle {
	pub fn new(path: PathBuf) -> Self {
		Self(path)
	}

	pub fn path(&self) -> &Path {
		&self.0
	}
}

impl fmt::Display for EntryHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.display())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
	pub content: String,
	pub created_at: DateTime<Utc>,
	/// `None` until the entry is first saved
	pub handle: Option<EntryHandle>,
}

impl Entry {
	pub fn new(content: String) -> Self {
		Self {
			content,
			created_at: Utc::now(),
			handle: None,
		}
	}

	pub fn formatted_date(&self) -> String {
		self.created_at
			.with_timezone(&Local)
			.format(DATE_FORMAT)
			.to_string()
	}
}

/// On-disk form of an [`Entry`]. The handle is the file itself and is never stored inside it.
#[derive(Debug, Serialize)]
pub(crate) struct RecordRef<'e> {
	pub content: &'e str,
	pub date: &'e DateTime<Utc>,
}

impl<'e> From<&'e Entry> for RecordRef<'e> {
	fn from(entry: &'e Entry) -> Self {
		Self {
			content: &entry.content,
			date: &entry.created_at,
		}
	}
}

#[derive(Debug, Deserialize)]
pub(crate) struct Record {
	pub content: String,
	pub date: DateTime<Utc>,
}

impl Record {
	pub fn into_entry(self, handle: EntryHandle) -> Entry {
		Entry {
			content: self.content,
			created_at: self.date,
			handle: Some(handle),
		}
	}
}

/// Display row of the entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
	pub title: String,
	pub description: String,
	pub handle: EntryHandle,
}

impl ListItem {
	/// Projects a saved entry, `None` for an entry that has no handle yet
	pub fn from_entry(entry: &Entry) -> Option<Self> {
		Some(Self {
			title: entry.formatted_date(),
			description: truncate(&entry.content, DESCRIPTION_LEN),
			handle: entry.handle.clone()?,
		})
	}
}

/// Cuts `s` to `max` characters, marking the cut with `...`
pub fn truncate(s: &str, max: usize) -> String {
	let flat = s.replace(['\n', '\r'], " ");
	if flat.chars().count() <= max {
		return flat;
	}
	let mut cut = flat.chars().take(max).collect::<String>();
	cut.push_str("...");
	cut
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;

	use super::*;

	#[test]
	fn truncate_keeps_short_text() {
		assert_eq!(truncate("hello", 10), "hello");
		assert_eq!(truncate("hello", 5), "hello");
	}

	#[test]
	fn truncate_marks_cut() {
		assert_eq!(truncate("hello world", 5), "hello...");
	}

	#[test]
	fn truncate_counts_characters() {
		assert_eq!(truncate("héllo wörld", 7), "héllo w...");
		assert_eq!(truncate("日本語のテキスト", 3), "日本語...");
	}

	#[test]
	fn truncate_flattens_lines() {
		assert_eq!(truncate("a\nb", 10), "a b");
	}

	#[test]
	fn list_item_needs_handle() {
		let mut entry = Entry::new("text".into());
		assert!(ListItem::from_entry(&entry).is_none());

		entry.handle = Some(EntryHandle::new(PathBuf::from("/j/1.json")));
		let item = ListItem::from_entry(&entry).unwrap();
		assert_eq!(item.description, "text");
		assert_eq!(item.handle.path(), Path::new("/j/1.json"));
		assert_eq!(item.title, entry.formatted_date());
	}

	#[test]
	fn record_omits_handle() {
		let entry = Entry {
			content: "hi".into(),
			created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
			handle: Some(EntryHandle::new(PathBuf::from("/j/1.json"))),
		};
		let json = serde_json::to_value(RecordRef::from(&entry)).unwrap();
		let obj = json.as_object().unwrap();
		assert_eq!(obj.len(), 2);
		assert_eq!(obj["content"], "hi");
		assert!(obj["date"].as_str().unwrap().starts_with("2024-01-02T03:04:05"));
	}

	#[test]
	fn record_accepts_offset_dates() {
		let record: Record = serde_json::from_str(
			r#"{"content":"x","date":"2024-01-02T10:04:05.5-05:00","path":"/old/1.json"}"#,
		)
		.unwrap();
		assert_eq!(
			record.date,
			Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap() + chrono::Duration::milliseconds(500)
		);
	}
}
