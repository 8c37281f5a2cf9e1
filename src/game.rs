//! Game controller: phase state machine and the frame-driven render loop
//!
//! Input handlers call into [`Game`] to latch flags, move the paddle or
//! trigger start/pause/reset. Only [`Game::on_frame`] runs physics and draws
//! an animated frame, and it only does so for the token of the frame it most
//! recently scheduled.

use crate::config::Config;
use crate::input::Key;
use crate::platform::{FrameHandle, FrameScheduler, FrameToken};
use crate::renderer::{self, Surface};
use crate::sim::{GameEvent, GamePhase, GameState, Rect, TickInput, tick};

/// Values shown in the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub lives: u8,
    pub phase: GamePhase,
}

/// Enablement of the start/pause/reset buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start_enabled: bool,
    pub pause_enabled: bool,
    pub reset_enabled: bool,
    pub pause_label: &'static str,
}

pub struct Game<F: FrameScheduler, S: Surface> {
    state: GameState,
    input: TickInput,
    scheduler: F,
    surface: S,
    /// The one frame whose callback is allowed to run
    pending: Option<(FrameToken, FrameHandle)>,
    next_token: u64,
}

impl<F: FrameScheduler, S: Surface> Game<F, S> {
    /// Build an idle game and draw its opening scene
    pub fn new(config: Config, seed: u64, scheduler: F, surface: S) -> Self {
        let mut game = Self {
            state: GameState::new(config, seed),
            input: TickInput::default(),
            scheduler,
            surface,
            pending: None,
            next_token: 1,
        };
        game.draw_static();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Whether a frame is scheduled
    pub fn is_looping(&self) -> bool {
        self.pending.is_some()
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.state.score,
            lives: self.state.lives,
            phase: self.state.phase,
        }
    }

    pub fn controls(&self) -> Controls {
        let (start_enabled, pause_enabled) = match self.state.phase {
            GamePhase::Idle | GamePhase::Over | GamePhase::Won => (true, false),
            GamePhase::Running | GamePhase::Paused => (false, true),
        };
        Controls {
            start_enabled,
            pause_enabled,
            reset_enabled: true,
            pause_label: if self.state.phase == GamePhase::Paused {
                "Resume"
            } else {
                "Pause"
            },
        }
    }

    /// Start from idle; from a finished game this starts a fresh board
    pub fn start(&mut self) {
        if self.state.phase.is_terminal() {
            log::info!("Starting over after {:?}", self.state.phase);
            self.reset();
        }
        if !self.state.start() {
            log::debug!("Start ignored while {:?}", self.state.phase);
            return;
        }
        log::info!("Game started");
        self.schedule();
    }

    pub fn toggle_pause(&mut self) {
        match self.state.toggle_pause() {
            Some(GamePhase::Paused) => {
                self.cancel();
                self.draw_static();
                log::info!("Game paused");
            }
            Some(_) => {
                self.schedule();
                log::info!("Game resumed");
            }
            None => log::debug!("Pause ignored while {:?}", self.state.phase),
        }
    }

    /// Stop the loop and return to a fresh idle board
    pub fn reset(&mut self) {
        self.cancel();
        self.state.reset();
        self.draw_static();
        log::info!("Game reset");
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.input.left = true,
            Key::Right => self.input.right = true,
            Key::Start => self.start(),
            Key::Pause => self.toggle_pause(),
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.input.left = false,
            Key::Right => self.input.right = false,
            Key::Start | Key::Pause => {}
        }
    }

    /// Pointer x in surface coordinates; only steers while running
    pub fn pointer_moved(&mut self, x: f32) {
        if self.state.phase == GamePhase::Running {
            self.state.paddle.follow_pointer(x);
        }
    }

    /// One animation frame; a token other than the pending one is a no-op
    pub fn on_frame(&mut self, token: FrameToken) {
        match self.pending {
            Some((pending, _)) if pending == token => self.pending = None,
            _ => {
                log::debug!("Stale frame {:?} ignored", token);
                return;
            }
        }
        if self.state.phase != GamePhase::Running {
            return;
        }

        let config = &self.state.config;
        self.surface
            .clear(Rect::new(0.0, 0.0, config.surface_width, config.surface_height));
        renderer::draw_bricks(&mut self.surface, &self.state.bricks);
        renderer::draw_ball(&mut self.surface, &self.state.ball);
        renderer::draw_paddle(&mut self.surface, &self.state.paddle);
        self.state.particles.update();
        renderer::draw_particles(&mut self.surface, &self.state.particles);

        let events = tick(&mut self.state, &self.input);
        log_events(&events);

        match self.state.phase {
            GamePhase::Running => self.schedule(),
            GamePhase::Over | GamePhase::Won => renderer::draw_end_screen(
                &mut self.surface,
                self.state.phase,
                self.state.score,
                &self.state.config,
            ),
            GamePhase::Idle | GamePhase::Paused => {}
        }
    }

    fn schedule(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let token = FrameToken(self.next_token);
        self.next_token += 1;
        match self.scheduler.request_frame(token) {
            Ok(handle) => self.pending = Some((token, handle)),
            Err(e) => log::error!("Failed to schedule frame: {}", e),
        }
    }

    /// Cancel the pending frame and invalidate its token
    fn cancel(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    /// Redraw the current scene without advancing anything
    fn draw_static(&mut self) {
        renderer::draw_scene(&mut self.surface, &self.state);
        renderer::draw_end_screen(
            &mut self.surface,
            self.state.phase,
            self.state.score,
            &self.state.config,
        );
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::BrickDestroyed { column, row, score } => {
                log::debug!("Brick ({}, {}) destroyed, score {}", column, row, score)
            }
            GameEvent::SpeedUp { speed } => log::info!("Ball speed up to {:.2}", speed),
            GameEvent::LifeLost { lives } => log::debug!("Ball lost, {} lives left", lives),
            GameEvent::GameOver { score } => log::info!("Game over with score {}", score),
            GameEvent::Won { score } => log::info!("All bricks cleared with score {}", score),
            GameEvent::WallBounce | GameEvent::PaddleHit { .. } => log::trace!("{:?}", event),
        }
    }
}
