use std::env;
use std::path::PathBuf;

use color_eyre::eyre::eyre;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::Event;
use crossterm::event::{self};
use getopts::Options;
use ratatui::DefaultTerminal;

use journal_tui::app::keymap;
use journal_tui::app::Command;
use journal_tui::app::Signal;
use journal_tui::app::ViewState;
use journal_tui::config;
use journal_tui::config::ConfigLayer;
use journal_tui::data::EntryStore;
use journal_tui::logging;
use journal_tui::style::Theme;
use journal_tui::ui;
use journal_tui::Config;

struct App {
	state: ViewState,
	theme: Theme,
}

impl App {
	fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
		let size = terminal.size()?;
		self.state.handle(Command::Resize {
			width: size.width,
			height: size.height,
		});

		loop {
			terminal.draw(|frame| ui::draw(frame, &self.state, &self.theme))?;

			let event = event::read()?;
			let signal = match &event {
				Event::Resize(width, height) => self.state.handle(Command::Resize {
					width: *width,
					height: *height,
				}),
				_ => match keymap::key_press(&event) {
					Some(key) => self.state.handle_key(key),
					None => Signal::Continue,
				},
			};
			if signal == Signal::Quit {
				tracing::info!("quit");
				return Ok(());
			}
		}
	}
}

fn options() -> Options {
	let mut opts = Options::new();
	opts.optopt("c", "config", "Apply FILE after the standard config files", "FILE");
	opts.optopt("d", "entries-dir", "Store entries in DIR", "DIR");
	opts.optflag("", "dev", "Development mode (verbose logging)");
	opts.optflag("h", "help", "Print this help");
	opts
}

fn load_config(matches: &getopts::Matches) -> Result<Config> {
	let mut sources = config::standard_sources();
	if let Some(file) = matches.opt_str("c") {
		let file = PathBuf::from(file);
		if !file.is_file() {
			return Err(eyre!("Config file '{}' not found", file.display()));
		}
		sources.push(file);
	}

	let mut config = Config::load_from(&sources).wrap_err("Error loading configuration")?;
	config.merge(ConfigLayer {
		entries_dir: matches.opt_str("d").map(PathBuf::from),
		dev_mode: matches.opt_present("dev").then_some(true),
		log_level: None,
	});
	Ok(config)
}

fn main() -> Result<()> {
	color_eyre::install()?;

	let opts = options();
	let matches = opts
		.parse(env::args().skip(1))
		.wrap_err("Invalid arguments")?;
	if matches.opt_present("h") {
		print!("{}", opts.usage("Usage: journal-tui [options]"));
		return Ok(());
	}

	let config = load_config(&matches)?;
	logging::init(&config);

	match config::create_default_user_config() {
		Ok(Some(path)) => tracing::info!(path = %path.display(), "wrote default config"),
		Ok(None) => {}
		Err(err) => {
			tracing::warn!(error = %err, "could not create default config file");
			eprintln!("Warning: Could not create default config file: {err}");
		}
	}

	let store = EntryStore::open(&config.entries_dir);
	store
		.ensure_root()
		.wrap_err("Error creating entries directory")?;

	let app = App {
		state: ViewState::new(store, config.dev_mode),
		theme: Theme::default(),
	};
	let terminal = ratatui::init();
	let app_result = app.run(terminal);
	ratatui::restore();
	app_result
}
