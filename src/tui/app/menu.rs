use crate::deck::Deck;
use crate::game::Game;
use log::info;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    HandSize,
    Seed,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::HandSize, MenuItem::Seed];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::HandSize => format!("Hand Size: {}", app.cfg_hand_size),
            MenuItem::Seed => match app.cfg_seed {
                Some(seed) => format!("Shuffle Seed: {seed}"),
                None => "Shuffle Seed: random".to_string(),
            },
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size < Deck::SIZE {
                    app.cfg_hand_size += 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = Some(app.cfg_seed.map_or(0, |s| s.saturating_add(1)));
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size > 1 {
                    app.cfg_hand_size -= 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = match app.cfg_seed {
                    Some(0) | None => None,
                    Some(s) => Some(s - 1),
                };
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_hand_size = self.hand_size;
        self.cfg_seed = self.seed;
        self.scene = super::Scene::Menu;
    }

    /// Rebuild the game from the edited configuration.
    pub fn apply_menu(&mut self) {
        self.cfg_hand_size = self.cfg_hand_size.clamp(1, Deck::SIZE);
        self.hand_size = self.cfg_hand_size;
        self.seed = self.cfg_seed;
        self.game = match self.seed {
            Some(seed) => Game::with_seed(seed),
            None => Game::new(),
        };
        self.clear_round();
        self.scene = super::Scene::Table;
        info!("applied config: hand size {}, seed {:?}", self.hand_size, self.seed);
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
