pub mod entry;
pub mod store;

pub use entry::Entry;
pub use entry::EntryHandle;
pub use entry::ListItem;
pub use store::EntryStore;
