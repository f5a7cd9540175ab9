//! Space Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Event, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use space_shooter::audio::AudioManager;
    use space_shooter::hud::{HudSnapshot, Screen};
    use space_shooter::platform::web::{BrowserClock, DomHud, PageStorage};
    use space_shooter::platform::{HudSink, InputState, KeyAction, TouchButton};
    use space_shooter::consts::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH};
    use space_shooter::renderer::{CanvasSurface, Surface};
    use space_shooter::sim::GamePhase;
    use space_shooter::{Game, PlatformError, Tuning};

    /// Everything the page callbacks share
    struct App {
        game: Game<PageStorage, BrowserClock>,
        input: InputState,
        audio: AudioManager,
        hud: DomHud,
        /// `None` when the page has no usable canvas; the game still runs
        surface: Option<CanvasSurface>,
        /// A requestAnimationFrame callback is pending
        loop_active: bool,
    }

    type Shared = Rc<RefCell<App>>;

    impl App {
        fn frame(&mut self) -> bool {
            let input = self.input.take_tick_input();
            self.game.frame(
                &input,
                &mut self.audio,
                &mut self.hud,
                self.surface.as_mut().map(|s| s as &mut dyn Surface),
            )
        }

        /// Publish command results and repaint
        fn sync(&mut self) {
            self.game.sync(&mut self.audio, &mut self.hud);
            if let Some(surface) = self.surface.as_mut() {
                self.game.render(surface);
            }
        }

        /// Match the canvas to its container
        fn fit_canvas(&mut self) {
            let Some(surface) = self.surface.as_ref() else {
                return;
            };
            let canvas = surface.canvas();
            let (w, h) = canvas
                .parent_element()
                .map(|parent| (parent.client_width(), parent.client_height()))
                .unwrap_or((canvas.client_width(), canvas.client_height()));
            if w <= 0 || h <= 0 {
                return;
            }
            surface.set_size(w as u32, h as u32);
            self.game.resize(w as f32, h as f32);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Space Shooter starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let surface = open_surface(&document);
        let arena = surface
            .as_ref()
            .map(CanvasSurface::size)
            .unwrap_or(Vec2::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT));

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            PageStorage::open(),
            BrowserClock,
            Tuning::default(),
            Vec2::new(arena.x.max(1.0), arena.y.max(1.0)),
            seed,
        );

        let mut audio = AudioManager::new();
        audio.set_master_volume(game.settings().effective_volume());

        let app = Rc::new(RefCell::new(App {
            hud: DomHud::new(document.clone()),
            game,
            input: InputState::new(),
            audio,
            surface,
            loop_active: false,
        }));

        {
            let mut a = app.borrow_mut();
            a.fit_canvas();
            let snapshot = HudSnapshot::from_state(a.game.state());
            let sound = a.game.settings().sound_enabled;
            a.hud.refresh(&snapshot);
            a.hud.show(&Screen::Start);
            a.hud.set_sound_label(sound);
            a.sync();
        }

        setup_keyboard(&app)?;
        setup_touch_controls(&document, &app)?;
        setup_buttons(&document, &app)?;
        setup_window_events(&document, &app)?;

        log::info!("Space Shooter ready (seed {})", seed);
        Ok(())
    }

    /// The `#gameCanvas` 2D surface, or `None` with a warning
    fn open_surface(document: &Document) -> Option<CanvasSurface> {
        let surface = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or(PlatformError::SurfaceUnavailable)
            .and_then(CanvasSurface::new);
        match surface {
            Ok(surface) => Some(surface),
            Err(e) => {
                log::warn!("{} - running without drawing", e);
                None
            }
        }
    }

    /// Apply a command, publish it, and restart the frame loop if needed
    fn command(app: &Shared, f: impl FnOnce(&mut App)) {
        let resume = {
            let mut a = app.borrow_mut();
            f(&mut *a);
            a.sync();
            let resume = a.game.state().wants_frames() && !a.loop_active;
            if resume {
                a.loop_active = true;
            }
            resume
        };
        if resume {
            request_animation_frame(app.clone());
        }
    }

    fn request_animation_frame(app: Shared) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pending = app.clone();
        let closure = Closure::once(move |_time: f64| game_loop(pending));
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
            app.borrow_mut().loop_active = false;
        }
        closure.forget();
    }

    fn game_loop(app: Shared) {
        let again = {
            let mut a = app.borrow_mut();
            let again = a.frame();
            a.loop_active = again;
            again
        };
        if again {
            request_animation_frame(app);
        }
    }

    fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
        target: &web_sys::EventTarget,
        event: &str,
        handler: impl FnMut(E) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_keyboard(app: &Shared) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        {
            let app = app.clone();
            listen(&window, "keydown", move |event: KeyboardEvent| {
                let action = {
                    let mut a = app.borrow_mut();
                    let action = a.input.key_down(&event.key());
                    if action == KeyAction::Fire && !a.game.state().wants_frames() {
                        a.input.cancel_fire();
                    }
                    action
                };
                match action {
                    // Space would scroll the page
                    KeyAction::Fire => event.prevent_default(),
                    KeyAction::TogglePause => command(&app, |a| a.game.toggle_pause()),
                    KeyAction::None => {}
                }
            })?;
        }

        let app = app.clone();
        listen(&window, "keyup", move |event: KeyboardEvent| {
            app.borrow_mut().input.key_up(&event.key());
        })
    }

    fn setup_touch_controls(document: &Document, app: &Shared) -> Result<(), JsValue> {
        let buttons = [
            ("leftBtn", TouchButton::Left),
            ("rightBtn", TouchButton::Right),
            ("shootBtn", TouchButton::Shoot),
        ];
        for (id, button) in buttons {
            let Some(el) = document.get_element_by_id(id) else {
                log::warn!("Missing #{}", id);
                continue;
            };
            for (event, pressed) in [("touchstart", true), ("touchend", false)] {
                let app = app.clone();
                listen(&el, event, move |event: TouchEvent| {
                    event.prevent_default();
                    let mut a = app.borrow_mut();
                    if pressed && button == TouchButton::Shoot && !a.game.state().wants_frames() {
                        return;
                    }
                    a.input.touch(button, pressed);
                })?;
            }
        }
        Ok(())
    }

    fn on_click(
        document: &Document,
        id: &str,
        app: &Shared,
        handler: fn(&mut App),
    ) -> Result<(), JsValue> {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("Missing #{}", id);
            return Ok(());
        };
        let app = app.clone();
        listen(&el, "click", move |_event: Event| command(&app, handler))
    }

    fn start(a: &mut App) {
        // First user gesture: audio may start now
        a.audio.resume();
        a.game.start();
    }

    fn setup_buttons(document: &Document, app: &Shared) -> Result<(), JsValue> {
        on_click(document, "startBtn", app, start)?;
        on_click(document, "playAgainBtn", app, start)?;
        on_click(document, "restartBtn", app, start)?;
        on_click(document, "nextLevelBtn", app, |a| {
            a.game.next_level();
        })?;
        on_click(document, "pauseBtn", app, |a| a.game.toggle_pause())?;
        on_click(document, "soundBtn", app, |a| {
            let enabled = a.game.toggle_sound();
            let volume = a.game.settings().effective_volume();
            a.audio.set_master_volume(volume);
            a.hud.set_sound_label(enabled);
        })?;
        on_click(document, "clearScoresBtn", app, |a| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure you want to clear all scores?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            if let Err(e) = a.game.clear_scores() {
                log::warn!("Failed to clear scores: {}", e);
            }
        })?;

        if let Some(btn) = document.get_element_by_id("fullscreenBtn") {
            listen(&btn, "click", move |_event: Event| {
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let result = if document.fullscreen_element().is_some() {
                    document.exit_fullscreen();
                    Ok(())
                } else {
                    let container = document
                        .get_element_by_id("gameCanvas")
                        .and_then(|canvas| canvas.parent_element());
                    match container {
                        Some(container) => container.request_fullscreen(),
                        None => Ok(()),
                    }
                };
                if let Err(e) = result {
                    log::info!("Fullscreen failed: {:?}", e);
                }
            })?;
        }
        Ok(())
    }

    fn setup_window_events(document: &Document, app: &Shared) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        {
            let app = app.clone();
            listen(&window, "resize", move |_event: Event| {
                command(&app, App::fit_canvas);
            })?;
        }

        // Keys released while unfocused never deliver keyup
        {
            let app = app.clone();
            listen(&window, "blur", move |_event: Event| {
                app.borrow_mut().input.release_all();
            })?;
        }

        let app = app.clone();
        let doc = document.clone();
        listen(document, "visibilitychange", move |_event: Event| {
            if doc.visibility_state() != web_sys::VisibilityState::Hidden {
                return;
            }
            let running = app.borrow().game.state().phase == GamePhase::Running;
            if running {
                log::info!("Auto-paused (tab hidden)");
                command(&app, |a| a.game.toggle_pause());
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Space Shooter (native) starting...");
    log::info!("The playable build runs in the browser - use `trunk serve`");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);
    autopilot(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run with a weaving, always-firing ship
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(seed: u64) {
    use glam::Vec2;
    use space_shooter::consts::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH};
    use space_shooter::platform::{LogHud, ManualClock, MemoryStorage, NullAudio};
    use space_shooter::sim::{GamePhase, TickInput};
    use space_shooter::{Game, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    let mut game = Game::new(
        MemoryStorage::new(),
        ManualClock::new(0.0),
        Tuning::default(),
        Vec2::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT),
        seed,
    );
    let mut hud = LogHud;
    game.start();

    for frame in 0..MAX_FRAMES {
        game.clock_mut().advance(FRAME_MS);
        let sweep_left = (frame / 90) % 2 == 0;
        let input = TickInput {
            left: sweep_left,
            right: !sweep_left,
            fire: true,
        };
        if game.frame(&input, &mut NullAudio, &mut hud, None) {
            continue;
        }
        match game.state().phase {
            GamePhase::LevelComplete => {
                game.next_level();
            }
            _ => break,
        }
    }

    let state = game.state();
    println!(
        "Seed {}: {:?} at level {} with score {} ({} aliens destroyed)",
        seed, state.phase, state.level, state.score, state.aliens_destroyed
    );
}
