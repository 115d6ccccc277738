//! Dorm Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use dorm_runner::renderer::RenderState;
    use dorm_runner::sim::{GameEvent, GameState, Session};
    use dorm_runner::{HUD_TEXT, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session,
        render_state: Option<RenderState>,
    }

    impl Game {
        fn new(tuning: Tuning) -> Self {
            Self {
                session: Session::new(GameState::with_tuning(tuning)),
                render_state: None,
            }
        }

        /// Run one simulation tick and report what happened
        fn update(&mut self) {
            self.session.frame();
            for event in self.session.drain_events() {
                match event {
                    GameEvent::Respawned { tick, cause } => {
                        log::debug!("Respawn event at tick {}: {:?}", tick, cause);
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.session.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => render_state.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dorm Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed-size world; the canvas is exactly one world pixel per pixel
        let tuning = Tuning::default();
        let width = tuning.world_width as u32;
        let height = tuning.world_height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let world_size = glam::Vec2::new(tuning.world_width, tuning.world_height);
        let game = Rc::new(RefCell::new(Game::new(tuning)));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, world_size).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Renderer unavailable, running without rendering: {}", e),
        }

        if let Some(hud) = document.get_element_by_id("hud") {
            hud.set_text_content(Some(HUD_TEXT));
        }

        setup_input_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Dorm Runner running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().session.input.key_down(&event.code()) {
                    // Keep arrows/space from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().session.input.key_up(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One tick per animation frame, then draw
    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Frames the headless runner simulates when no count is given (10 s at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_HEADLESS_FRAMES: u64 = 600;

/// Headless Dorm Runner: plays a scripted session and logs every respawn
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with physics tuning overrides
    tuning: Option<std::path::PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = DEFAULT_HEADLESS_FRAMES)]
    frames: u64,
}

/// Headless run: walk right, hop every second
///
/// Useful for checking tuning changes without a browser.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    use dorm_runner::Tuning;
    use dorm_runner::sim::{GameEvent, GameState, Session, after_frames};

    let args = Args::parse();

    env_logger::init();
    log::info!("Dorm Runner (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let tuning = match &args.tuning {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let tuning = Tuning::from_json(&json)?;
            log::info!("Loaded tuning from {}", path.display());
            tuning
        }
        None => Tuning::default(),
    };

    let mut session = Session::new(GameState::with_tuning(tuning));
    let ran = session.run_until(after_frames(args.frames), |frame, input| {
        input.right = true;
        input.jump = frame % 60 == 0;
    });

    let respawns = session
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::Respawned { .. }))
        .count();
    let player = &session.state.player;
    log::info!(
        "Ran {} frames: player at ({:.1}, {:.1}), on_ground={}, {} respawns",
        ran,
        player.pos.x,
        player.pos.y,
        player.on_ground,
        respawns
    );

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
