//! Brick Breaker entry point
//!
//! Wires the game to the page in the browser; natively runs a headless
//! auto-play session for smoke testing.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::input::Key;
    use brick_breaker::platform::web::{WebGame, WebScheduler, sync_dom};
    use brick_breaker::renderer::CanvasSurface;
    use brick_breaker::{Config, Error, Game, Result};

    pub fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or_else(|| Error::Platform("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Platform("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| Error::Platform("no #gameCanvas".into()))?
            .dyn_into()
            .map_err(|_| Error::Platform("#gameCanvas is not a canvas".into()))?;

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| Error::Platform("no 2d context".into()))?
            .dyn_into()
            .map_err(|_| Error::Platform("2d context has the wrong type".into()))?;

        let config = Config {
            surface_width: canvas.width() as f32,
            surface_height: canvas.height() as f32,
            ..Config::default()
        };
        config.validate()?;

        let seed = js_sys::Date::now() as u64;
        let game: Rc<RefCell<WebGame>> = Rc::new_cyclic(|weak| {
            RefCell::new(Game::new(
                config,
                seed,
                WebScheduler::new(weak.clone()),
                CanvasSurface::new(context),
            ))
        });
        sync_dom(&game.borrow());

        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(&document, game.clone())?;
        setup_pointer(&document, &canvas, game.clone())?;
        setup_buttons(&document, game)?;

        log::info!("Brick Breaker ready");
        Ok(())
    }

    fn setup_keyboard(document: &web_sys::Document, game: Rc<RefCell<WebGame>>) -> Result<()> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    let mut g = game.borrow_mut();
                    g.key_down(key);
                    sync_dom(&g);
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    game.borrow_mut().key_up(key);
                }
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_pointer(
        document: &web_sys::Document,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<WebGame>>,
    ) -> Result<()> {
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            let x = event.client_x() as f32 - rect.left() as f32;
            game.borrow_mut().pointer_moved(x);
        });
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_buttons(document: &web_sys::Document, game: Rc<RefCell<WebGame>>) -> Result<()> {
        let actions: [(&str, fn(&mut WebGame)); 3] = [
            ("startBtn", |g| g.start()),
            ("pauseBtn", |g| g.toggle_pause()),
            ("resetBtn", |g| g.reset()),
        ];

        for (id, action) in actions {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("No #{} button, skipping", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                action(&mut g);
                sync_dom(&g);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode plays a headless demo - build for wasm32 to play in the browser");

    let config = match std::env::args().nth(1) {
        Some(path) => match brick_breaker::Config::load(std::path::Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => brick_breaker::Config::default(),
    };

    demo::run(config);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use brick_breaker::platform::ManualScheduler;
    use brick_breaker::renderer::RecordingSurface;
    use brick_breaker::{Config, Game};

    /// Give up on a session that never ends
    const MAX_FRAMES: u64 = 200_000;

    /// Auto-pilot: keep the paddle under the ball with a slowly drifting
    /// offset so hits land at varied angles
    pub fn run(config: Config) {
        let mut game = Game::new(config, 2024, ManualScheduler::new(), RecordingSurface::new());
        game.start();

        let mut frames = 0u64;
        while game.is_looping() && frames < MAX_FRAMES {
            let offset = ((frames / 90) % 7) as f32 * 12.0 - 36.0;
            let ball_x = game.state().ball.pos.x;
            game.pointer_moved(ball_x + offset);

            for token in game.scheduler_mut().take_due() {
                game.on_frame(token);
            }
            game.surface_mut().clear_commands();
            frames += 1;
        }

        let hud = game.hud();
        log::info!(
            "Finished after {} frames: {:?}, score {}, lives {}",
            frames,
            hud.phase,
            hud.score,
            hud.lives
        );
        println!(
            "{:?} after {} frames - score {}, lives {}",
            hud.phase, frames, hud.score, hud.lives
        );
    }
}
