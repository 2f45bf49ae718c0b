//! Hex Bounce entry point
//!
//! The browser build draws into `<canvas id="canvas">` via WebGPU. The native
//! build runs the same simulation headless for a fixed number of ticks and
//! logs frames (`RUST_LOG=debug` to see them).

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use hex_bounce::platform::{FrameSink, TimestampClock};
    use hex_bounce::renderer::RenderState;
    use hex_bounce::driver::step;
    use hex_bounce::sim::{SimState, TickInput, TickOutcome};

    /// Everything the animation-frame callback needs
    struct Game {
        state: SimState,
        render_state: Option<RenderState>,
        clock: TimestampClock,
        stop_requested: bool,
    }

    impl Game {
        fn new() -> Self {
            Self {
                state: SimState::default(),
                render_state: None,
                clock: TimestampClock::new(),
                stop_requested: false,
            }
        }

        /// Advance one frame and draw it; false once the game has stopped
        fn frame(&mut self, time: f64) -> bool {
            let dt = self.clock.advance_to(time);
            let input = TickInput {
                stop_requested: self.stop_requested,
            };

            match step(&mut self.state, &input, dt) {
                TickOutcome::Frame(frame) => {
                    if let Some(ref mut render_state) = self.render_state {
                        render_state.present(&frame);
                    }
                    true
                }
                TickOutcome::Stopped => {
                    log::info!("Stopped after {} ticks", self.state.time_ticks);
                    false
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hex Bounce starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new()));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .expect("Failed to create device");
        game.borrow_mut().render_state = Some(render_state);

        setup_stop_handlers(game.clone());

        let params = serde_json::to_string(&game.borrow().state.params).unwrap_or_default();
        log::info!("Parameters: {}", params);

        request_animation_frame(game);

        log::info!("Hex Bounce running!");
    }

    /// Escape or leaving the page requests a stop
    fn setup_stop_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    log::info!("Stop requested (Escape)");
                    game.borrow_mut().stop_requested = true;
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                log::info!("Stop requested (page hidden)");
                game.borrow_mut().stop_requested = true;
            });
            let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let running = game.borrow_mut().frame(time);
        if running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Ten seconds at the target rate
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_TICKS: u64 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hex_bounce::platform::{LogSink, SleepClock, TickBudget};
    use hex_bounce::{SimState, consts::TARGET_FPS, run};

    env_logger::init();
    log::info!("Hex Bounce (native, headless) starting...");

    let mut state = SimState::default();
    match serde_json::to_string(&state.params) {
        Ok(json) => log::info!("Parameters: {}", json),
        Err(e) => log::warn!("Could not encode parameters: {}", e),
    }

    let mut clock = SleepClock::new(TARGET_FPS);
    let mut stop = TickBudget::new(HEADLESS_TICKS);
    let mut sink = LogSink::new(TARGET_FPS as u64);

    let ticks = run(&mut state, &mut clock, &mut stop, &mut sink);

    log::info!(
        "Finished {} ticks ({} frames logged): ball at ({:.2}, {:.2}), velocity ({:.2}, {:.2}), hexagon angle {:.3}",
        ticks,
        sink.presented(),
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.vel.x,
        state.ball.vel.y,
        state.hexagon.angle
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
