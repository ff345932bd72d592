use super::*;

impl UiState {
    /// Activates `tab`. Every other tab becomes inactive.
    pub fn select_tab(&mut self, tab: Mode) {
        self.active_tab = tab;
    }

    /// Activates the tab whose identifier is `tab_id`. Unknown ids are ignored.
    pub fn select_tab_id(&mut self, tab_id: &str) -> bool {
        match Mode::from_tab_id(tab_id) {
            Some(mode) => {
                self.select_tab(mode);
                true
            }
            None => false,
        }
    }

    pub fn is_tab_active(&self, tab_id: &str) -> bool {
        self.active_tab.tab_id() == tab_id
    }

    pub fn set_difficulty(&mut self, level: DifficultyLevel) {
        self.difficulty = level;
    }

    pub fn is_difficulty_active(&self, level: DifficultyLevel) -> bool {
        self.difficulty == level
    }
}

impl EduApp {
    pub fn switch_tab(&mut self, tab: Mode) {
        if self.ui.active_tab != tab {
            log::debug!("Switching to tab {}", tab.tab_id());
        }
        self.ui.select_tab(tab);
        self.message.clear();
    }

    /// Flips one explanation in the displayed quiz, if there is one.
    pub fn toggle_explanation(&mut self, index: usize) -> bool {
        match self.response.as_mut().map(|r| &mut r.markup) {
            Some(DisplayMarkup::Quiz(view)) => view.toggle_explanation(index),
            _ => false,
        }
    }
}
