//! Browser implementations of the platform collaborators

use web_sys::{Document, Element};

use super::{Clock, HudSink, MemoryStorage, Storage};
use crate::error::PlatformError;
use crate::hud::{HudSnapshot, Screen};

/// `window.localStorage`
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, PlatformError> {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PlatformError::StorageUnavailable)?;
        Ok(Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PlatformError> {
        self.inner
            .get_item(key)
            .map_err(|e| PlatformError::StorageRead {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PlatformError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| PlatformError::StorageWrite {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&mut self, key: &str) -> Result<(), PlatformError> {
        self.inner
            .remove_item(key)
            .map_err(|e| PlatformError::StorageWrite {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// `localStorage` when the page may use it, memory otherwise
pub enum PageStorage {
    Local(LocalStorage),
    Memory(MemoryStorage),
}

impl PageStorage {
    pub fn open() -> Self {
        match LocalStorage::open() {
            Ok(local) => PageStorage::Local(local),
            Err(e) => {
                log::warn!("{} - scores will not be kept", e);
                PageStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl Storage for PageStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PlatformError> {
        match self {
            PageStorage::Local(s) => s.get(key),
            PageStorage::Memory(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PlatformError> {
        match self {
            PageStorage::Local(s) => s.set(key, value),
            PageStorage::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), PlatformError> {
        match self {
            PageStorage::Local(s) => s.remove(key),
            PageStorage::Memory(s) => s.remove(key),
        }
    }
}

/// `Date.now()`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

const OVERLAYS: [&str; 3] = ["startScreen", "gameOverScreen", "levelCompleteScreen"];
const ACTIVE: &str = "active";

/// Updates the page's HUD counters and overlay screens
pub struct DomHud {
    document: Document,
}

impl DomHud {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn overlay(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Make `id` the only active overlay (`None` hides all)
    fn activate(&self, id: Option<&str>) {
        for overlay in OVERLAYS {
            let Some(el) = self.overlay(overlay) else {
                continue;
            };
            let classes = el.class_list();
            let result = if Some(overlay) == id {
                classes.add_1(ACTIVE)
            } else {
                classes.remove_1(ACTIVE)
            };
            if let Err(e) = result {
                log::warn!("Failed to toggle #{}: {:?}", overlay, e);
            }
        }
    }

    pub fn set_sound_label(&self, enabled: bool) {
        let label = if enabled {
            "🔊 SOUND ON"
        } else {
            "🔇 SOUND OFF"
        };
        self.set_text("soundBtn", label);
    }
}

impl HudSink for DomHud {
    fn refresh(&mut self, hud: &HudSnapshot) {
        self.set_text("score", &hud.score);
        self.set_text("highScore", &hud.high_score);
        self.set_text("lives", &hud.lives);
        self.set_text("level", &hud.level);
    }

    fn show(&mut self, screen: &Screen) {
        match screen {
            Screen::Start => self.activate(Some("startScreen")),
            Screen::Playing => {
                self.activate(None);
                self.set_text("pauseBtn", "⏸ PAUSE");
            }
            Screen::Paused => self.set_text("pauseBtn", "▶ RESUME"),
            Screen::LevelComplete => self.activate(Some("levelCompleteScreen")),
            Screen::GameOver(stats) => {
                self.set_text("finalScore", &stats.score);
                self.set_text("finalLevel", &stats.level);
                self.set_text("aliensDestroyed", &stats.aliens_destroyed.to_string());
                self.activate(Some("gameOverScreen"));
            }
        }
    }
}
