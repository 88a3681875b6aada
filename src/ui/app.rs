use crate::catalog::CatalogSource;
use crate::session::SearchSession;
use crate::view_model::ViewModel;

/// Interactive screen state: the search session plus list selection.
pub struct App<S: CatalogSource> {
    should_quit: bool,
    session: SearchSession<S>,
    selection: usize,
}

impl<S: CatalogSource> App<S> {
    pub fn new(session: SearchSession<S>) -> Self {
        Self {
            should_quit: false,
            session,
            selection: 0,
        }
    }

    pub fn session(&self) -> &SearchSession<S> {
        &self.session
    }

    pub fn view_model(&self) -> &ViewModel {
        self.session.view_model()
    }

    pub fn search_term(&self) -> &str {
        self.session.search_term()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Activate the session. Needs a tokio runtime context.
    pub fn start(&mut self) {
        self.session.activate();
    }

    pub fn on_tick(&mut self) {
        if self.session.poll() {
            self.clamp_selection();
        }
    }

    pub fn push_char(&mut self, ch: char) {
        let mut term = self.session.search_term().to_string();
        term.push(ch);
        self.update_term(term);
    }

    pub fn backspace(&mut self) {
        let mut term = self.session.search_term().to_string();
        if term.pop().is_some() {
            self.update_term(term);
        }
    }

    pub fn clear_term(&mut self) {
        if !self.session.search_term().is_empty() {
            self.update_term(String::new());
        }
    }

    /// Ctrl+R: new activation after an error. No-op otherwise.
    pub fn retry(&mut self) -> bool {
        let started = self.session.reactivate();
        if started {
            self.selection = 0;
        }
        started
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.session.view_model().items().len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Tear the session down before the screen goes away.
    pub fn shutdown(&mut self) {
        self.session.teardown();
    }

    fn update_term(&mut self, term: String) {
        if self.session.set_search_term(term) {
            self.selection = 0;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.session.view_model().items().len();
        self.selection = self.selection.min(len.saturating_sub(1));
    }
}
