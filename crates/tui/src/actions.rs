use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

const SCROLL_STEP: u16 = 5;

impl App<'_> {
	/// Process a keyboard event; returns `true` when the user wants to quit.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
		let suggesting = self.session.suggestions().is_visible();
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
			KeyCode::Esc if suggesting => self.session.suggestions_mut().hide(),
			KeyCode::Esc => return true,
			KeyCode::Tab | KeyCode::Down if suggesting => {
				self.session.suggestions_mut().select_next();
			}
			KeyCode::BackTab | KeyCode::Up if suggesting => {
				self.session.suggestions_mut().select_previous();
			}
			KeyCode::Enter => {
				if self.session.accept_suggestion(Instant::now()) {
					self.sync_input();
				} else {
					self.submit();
				}
			}
			KeyCode::PageUp => self.scroll_back = self.scroll_back.saturating_add(SCROLL_STEP),
			KeyCode::PageDown => self.scroll_back = self.scroll_back.saturating_sub(SCROLL_STEP),
			// Alt+1..5 picks an example query.
			KeyCode::Char(digit @ '1'..='9') if key.modifiers.contains(KeyModifiers::ALT) => {
				let index = usize::from(digit as u8 - b'1');
				if self.session.use_example(index, Instant::now()) {
					self.sync_input();
				}
			}
			// The input is a single line.
			KeyCode::Char('m' | 'j') if key.modifiers.contains(KeyModifiers::CONTROL) => {}
			_ => {
				if self.input.input(key) {
					let text = self.input_text();
					self.session.set_input(text, Instant::now());
				}
			}
		}
		false
	}

	/// Insert pasted text, flattened onto one line.
	pub(crate) fn handle_paste(&mut self, text: &str) {
		let flattened = text.replace(['\r', '\n'], " ");
		if self.input.insert_str(flattened) {
			let text = self.input_text();
			self.session.set_input(text, Instant::now());
		}
	}
}
