use crossterm::event::KeyEvent;

use crate::app::command::Command;
use crate::app::command::Signal;
use crate::app::keymap;
use crate::data::entry::Entry;
use crate::data::entry::ListItem;
use crate::data::store::EntryStore;
use crate::error::JournalError;
use crate::widgets::entry_list::EntryList;
use crate::widgets::text_input::TextInput;
use crate::widgets::widget::Component;

pub const INPUT_PLACEHOLDER: &str = "Write your journal entry here...";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	#[default]
	Listing,
	Composing,
	Viewing,
	Editing,
}

/// Last terminal size reported through [`Command::Resize`], bounds the drawn area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
	pub width: u16,
	pub height: u16,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			width: 80,
			height: 24,
		}
	}
}

/// Everything the UI shows, plus the store it mirrors.
///
/// The last error lives beside the mode rather than as a mode of its own: it is raised from
/// any mode and dismissing it must land back in that same mode.
pub struct ViewState {
	store: EntryStore,
	mode: Mode,
	/// Entry being viewed or edited, `None` in the other modes
	focus: Option<Entry>,
	error: Option<JournalError>,
	viewport: Viewport,
	dev_mode: bool,

	list: EntryList,
	input: TextInput,
}

impl ViewState {
	/// Starts in [`Mode::Listing`] with the store's current entries
	pub fn new(store: EntryStore, dev_mode: bool) -> Self {
		let mut state = Self {
			store,
			mode: Mode::default(),
			focus: None,
			error: None,
			viewport: Viewport::default(),
			dev_mode,
			list: EntryList::default(),
			input: TextInput::new().placeholder(INPUT_PLACEHOLDER),
		};
		state.refresh();
		state
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn focus(&self) -> Option<&Entry> {
		self.focus.as_ref()
	}

	pub fn error(&self) -> Option<&JournalError> {
		self.error.as_ref()
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn dev_mode(&self) -> bool {
		self.dev_mode
	}

	pub fn store(&self) -> &EntryStore {
		&self.store
	}

	pub fn list(&self) -> &EntryList {
		&self.list
	}

	pub fn input(&self) -> &TextInput {
		&self.input
	}

	/// Handles a key press: dismisses a pending error, otherwise maps it through the keymap
	pub fn handle_key(&mut self, key: &KeyEvent) -> Signal {
		if self.dismiss_error() {
			return Signal::Continue;
		}
		match keymap::command_for(self.mode, key) {
			Some(command) => self.handle(command),
			None => Signal::Continue,
		}
	}

	/// Applies one command and returns whether the application keeps running
	pub fn handle(&mut self, command: Command) -> Signal {
		if let Command::Resize { width, height } = command {
			self.viewport = Viewport { width, height };
			return Signal::Continue;
		}
		if self.dismiss_error() {
			return Signal::Continue;
		}

		tracing::trace!(mode = ?self.mode, ?command, "handling command");
		match (self.mode, command) {
			(Mode::Listing | Mode::Composing | Mode::Editing, Command::Quit) => return Signal::Quit,

			(Mode::Listing, Command::New) => {
				self.input.clear();
				self.mode = Mode::Composing;
			}
			(Mode::Listing, Command::Select) => self.open_selected(),
			(Mode::Listing, Command::Navigate(key)) => {
				self.list.input(&key);
			}

			(Mode::Composing, Command::Cancel) => {
				self.input.clear();
				self.mode = Mode::Listing;
			}
			(Mode::Composing, Command::Confirm) => self.save_new(),

			(Mode::Viewing, Command::Back) => {
				self.focus = None;
				self.mode = Mode::Listing;
			}
			(Mode::Viewing, Command::Delete) => self.delete_focus(),
			(Mode::Viewing, Command::Edit) => {
				if let Some(focus) = &self.focus {
					self.input.set_input(focus.content.clone());
					self.mode = Mode::Editing;
				}
			}

			(Mode::Editing, Command::Cancel) => {
				self.input.clear();
				self.mode = Mode::Viewing;
			}
			(Mode::Editing, Command::Confirm) => self.save_focus(),

			(Mode::Composing | Mode::Editing, Command::Input(key)) => {
				self.input.input(&key);
			}

			(mode, command) => tracing::trace!(?mode, ?command, "command ignored"),
		}
		Signal::Continue
	}

	/// Re-reads the store into the list
	pub fn refresh(&mut self) {
		match self.store.list() {
			Ok(entries) => {
				let items = entries.iter().filter_map(ListItem::from_entry).collect();
				self.list.set_items(items);
			}
			Err(err) => self.fail(err),
		}
	}

	fn dismiss_error(&mut self) -> bool {
		match self.error.take() {
			Some(err) => {
				tracing::debug!(error = %err, "error dismissed");
				true
			}
			None => false,
		}
	}

	fn fail(&mut self, err: JournalError) {
		tracing::warn!(mode = ?self.mode, error = %err, "operation failed");
		self.error = Some(err);
	}

	fn open_selected(&mut self) {
		let Some(item) = self.list.selected_item() else {
			return;
		};
		match self.store.load(&item.handle) {
			Ok(entry) => {
				self.focus = Some(entry);
				self.mode = Mode::Viewing;
			}
			Err(err) => self.fail(err),
		}
	}

	fn save_new(&mut self) {
		if self.input.is_empty() {
			return;
		}
		let mut entry = self.store.create(self.input.value().to_string());
		match self.store.save(&mut entry) {
			Ok(()) => {
				self.input.clear();
				self.mode = Mode::Listing;
				self.refresh();
				self.list.select_first();
			}
			Err(err) => self.fail(err),
		}
	}

	fn save_focus(&mut self) {
		if self.input.is_empty() {
			return;
		}
		let Some(focus) = &self.focus else {
			return;
		};
		let mut updated = focus.clone();
		updated.content = self.input.value().to_string();
		match self.store.save(&mut updated) {
			Ok(()) => {
				self.focus = Some(updated);
				self.input.clear();
				self.mode = Mode::Viewing;
				self.refresh();
			}
			Err(err) => self.fail(err),
		}
	}

	fn delete_focus(&mut self) {
		let Some(handle) = self.focus.as_ref().and_then(|entry| entry.handle.clone()) else {
			return;
		};
		match self.store.delete(&handle) {
			Ok(()) => {}
			Err(err) if err.is_not_found() => {
				tracing::debug!(handle = %handle, "entry already deleted");
			}
			Err(err) => return self.fail(err),
		}
		self.focus = None;
		self.mode = Mode::Listing;
		self.refresh();
	}
}
