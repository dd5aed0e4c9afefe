use crate::faces::CardFaces;
use crate::game::{Game, HandReport};
use log::{info, warn};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    DealHand,
    CheckHand,
    ShuffleDeck,
    ResetDeck,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    pub faces: CardFaces,
    // Applied configuration
    pub hand_size: usize,
    pub seed: Option<u64>,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_hand_size: usize,
    pub cfg_seed: Option<u64>,
    report: Option<HandReport>,
    help_open: bool,
    error: Option<String>,
    error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scene: Scene::Table,
            game: Game::new(),
            faces: CardFaces::standard(),
            hand_size: Game::HAND_SIZE,
            seed: None,
            menu_index: 0,
            cfg_hand_size: Game::HAND_SIZE,
            cfg_seed: None,
            report: None,
            help_open: false,
            error: None,
            error_at: None,
        }
    }
}

impl AppState {
    const ERROR_TTL: Duration = Duration::from_secs(3);

    /// Start from a seeded game, mainly for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            game: Game::with_seed(seed),
            seed: Some(seed),
            cfg_seed: Some(seed),
            ..Self::default()
        }
    }

    /// The last hand check, cleared whenever a new hand is dealt.
    pub fn report(&self) -> Option<&HandReport> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    /// Forget the last check and any pending error.
    pub(crate) fn clear_round(&mut self) {
        self.report = None;
        self.help_open = false;
        self.clear_error();
    }

    fn set_error(&mut self, msg: String) {
        warn!("{msg}");
        self.error = Some(msg);
        self.error_at = Some(Instant::now());
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.error_at = None;
    }

    /// Returns true when the action changed the game.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene != Scene::Menu {
                    return false;
                }
                self.apply_menu();
                true
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::DealHand => self.scene == Scene::Table && self.deal_hand(),
            InputAction::CheckHand => self.scene == Scene::Table && self.check_hand(),
            InputAction::ShuffleDeck => self.scene == Scene::Table && self.shuffle_deck(),
            InputAction::ResetDeck => {
                if self.scene != Scene::Table {
                    return false;
                }
                self.game.reset();
                self.clear_round();
                info!("deck reset");
                true
            }
        }
    }

    pub fn deal_hand(&mut self) -> bool {
        if let Err(err) = self.game.deal(self.hand_size) {
            self.set_error(err.to_string());
            return false;
        }
        self.clear_round();
        let missing = self
            .game
            .hand()
            .iter()
            .find_map(|c| self.faces.face_for(c).err())
            .map(|err| err.to_string());
        if let Some(msg) = missing {
            self.set_error(msg);
        }
        true
    }

    pub fn check_hand(&mut self) -> bool {
        self.report = Some(self.game.evaluate());
        true
    }

    pub fn shuffle_deck(&mut self) -> bool {
        match self.game.shuffle() {
            Ok(()) => {
                self.clear_error();
                true
            }
            Err(err) => {
                self.set_error(format!("cannot shuffle: {err}"));
                false
            }
        }
    }

    /// Expire stale error messages; called once per tick.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.error_at {
            if at.elapsed() >= Self::ERROR_TTL {
                self.clear_error();
            }
        }
    }
}
