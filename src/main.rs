//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use brick_breaker::Settings;
    use brick_breaker::renderer::{canvas2d, draw_list};
    use brick_breaker::sim::{Game, InputEvent, TickInput, tick};

    /// Longest frame gap fed to the accumulator (tab switches etc.)
    const MAX_FRAME_MS: f64 = 250.0;

    /// Game instance holding all state
    struct App {
        settings: Settings,
        game: Game,
        ctx: CanvasRenderingContext2d,
        accumulator: f64,
        last_time: f64,
        input: TickInput,
    }

    impl App {
        /// Run scheduler ticks for the elapsed time
        fn update(&mut self, dt_ms: f64) {
            let tick_ms = self.settings.tick_ms as f64;
            self.accumulator += dt_ms.min(MAX_FRAME_MS);

            while self.accumulator >= tick_ms {
                tick(&mut self.game, &self.input);
                self.accumulator -= tick_ms;
            }
        }

        fn render(&self) {
            if let Err(e) = canvas2d::paint(&self.ctx, &draw_list(&self.game.canvas)) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Start over after a game over
        fn restart(&mut self) {
            match Game::new(self.settings.clone()) {
                Ok(game) => {
                    self.game = game;
                    self.accumulator = 0.0;
                    log::info!("Game restarted");
                }
                Err(e) => log::error!("Restart failed: {}", e),
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let mut settings = Settings::load();
        settings.seed = js_sys::Date::now() as u64;
        canvas.set_width(settings.play_width as u32);
        canvas.set_height(settings.play_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = match Game::new(settings.clone()) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Could not start game: {}", e);
                return;
            }
        };

        let app = Rc::new(RefCell::new(App {
            settings,
            game,
            ctx,
            accumulator: 0.0,
            last_time: 0.0,
            input: TickInput::default(),
        }));

        setup_input_handlers(app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut a = app.borrow_mut();
            match event.key().as_str() {
                "ArrowLeft" => {
                    event.prevent_default();
                    a.game.handle_input(InputEvent::MoveLeft);
                }
                "ArrowRight" => {
                    event.prevent_default();
                    a.game.handle_input(InputEvent::MoveRight);
                }
                " " => {
                    event.prevent_default();
                    if a.game.is_game_over() {
                        a.restart();
                    } else {
                        a.game.handle_input(InputEvent::Launch);
                    }
                }
                "i" | "I" => {
                    a.input.idle_mode = !a.input.idle_mode;
                    log::info!("Idle mode: {}", a.input.idle_mode);
                }
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                time - a.last_time
            } else {
                0.0
            };
            a.last_time = time;

            a.update(dt);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::Settings;
    use brick_breaker::sim::{Game, GameEvent, TickInput, tick};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` to play");

    // Demo length in ticks; five minutes of game time by default
    let max_ticks: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(5 * 60 * 20);

    let settings = Settings::load();
    let mut game = match Game::new(settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Could not start game: {}", e);
            std::process::exit(1);
        }
    };

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let mut destroyed = 0u32;
    while !game.is_game_over() && game.time_ticks < max_ticks {
        tick(&mut game, &input);
        for event in game.drain_events() {
            if event == GameEvent::BrickDestroyed {
                destroyed += 1;
            }
        }
    }

    let hud = game.hud();
    println!(
        "After {} ticks: level {}, score {}, lives {}, {} bricks destroyed{}",
        game.time_ticks,
        hud.level,
        hud.score,
        hud.lives,
        destroyed,
        if game.is_game_over() { " (game over)" } else { "" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
