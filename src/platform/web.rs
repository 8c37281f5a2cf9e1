//! Browser frame scheduling via `requestAnimationFrame` and HUD syncing

use std::cell::RefCell;
use std::rc::Weak;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{FrameHandle, FrameScheduler, FrameToken};
use crate::error::{Error, Result};
use crate::game::Game;
use crate::renderer::CanvasSurface;

/// The game as wired up in the browser
pub type WebGame = Game<WebScheduler, CanvasSurface>;

/// Delivers frame tokens back to the game from rAF callbacks
pub struct WebScheduler {
    game: Weak<RefCell<WebGame>>,
}

impl WebScheduler {
    pub fn new(game: Weak<RefCell<WebGame>>) -> Self {
        Self { game }
    }
}

impl FrameScheduler for WebScheduler {
    fn request_frame(&mut self, token: FrameToken) -> Result<FrameHandle> {
        let window = web_sys::window().ok_or_else(|| Error::Platform("no window".into()))?;
        let game = self.game.clone();

        let callback = Closure::once_into_js(move |_time: f64| {
            let Some(game) = game.upgrade() else {
                return;
            };
            match game.try_borrow_mut() {
                Ok(mut g) => {
                    g.on_frame(token);
                    sync_dom(&g);
                }
                Err(_) => log::warn!("Frame {:?} skipped: game busy", token),
            }
        });

        let id = window.request_animation_frame(callback.unchecked_ref())?;
        Ok(FrameHandle(id))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.cancel_animation_frame(handle.0) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}

/// Mirror score, lives and button state into the page
pub fn sync_dom(game: &WebGame) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let hud = game.hud();
    set_text(&document, "score", &hud.score.to_string());
    set_text(&document, "lives", &hud.lives.to_string());

    let controls = game.controls();
    set_disabled(&document, "startBtn", !controls.start_enabled);
    set_disabled(&document, "pauseBtn", !controls.pause_enabled);
    set_disabled(&document, "resetBtn", !controls.reset_enabled);
    set_text(&document, "pauseBtn", controls.pause_label);
}

fn set_text(document: &web_sys::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        if el.text_content().as_deref() != Some(text) {
            el.set_text_content(Some(text));
        }
    }
}

fn set_disabled(document: &web_sys::Document, id: &str, disabled: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let result = if disabled {
            el.set_attribute("disabled", "")
        } else {
            el.remove_attribute("disabled")
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle #{}: {:?}", id, e);
        }
    }
}
