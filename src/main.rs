//! Bounce Bench entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, Window};

    use bounce_bench::platform::{input, intro};
    use bounce_bench::renderer::{
        CanvasRenderer, DomRenderer, GpuRenderer, Positioning, RenderError, Renderer,
    };
    use bounce_bench::sim::{Simulation, Viewport, advance};
    use bounce_bench::{FrameStats, RenderStrategy, Settings};

    /// App instance holding all state
    struct App {
        sim: Simulation,
        renderer: Box<dyn Renderer>,
        stats: FrameStats,
        settings: Settings,
        /// Drawing surface for canvas/GPU strategies
        canvas: Option<HtmlCanvasElement>,
        /// Renderer pixels per CSS pixel
        pixel_ratio: f64,
    }

    impl App {
        /// Advance the simulation to `time` (rAF ms)
        fn update(&mut self, time: f64) {
            advance(&mut self.sim, time);
            self.stats.record(time);
        }

        /// Render the current frame
        fn render(&mut self) {
            match self.renderer.render(&self.sim) {
                Ok(_) => {}
                Err(RenderError::Surface(
                    wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated,
                )) => {
                    let (w, h) = self.renderer.size();
                    self.renderer.resize(w, h);
                }
                Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {}", e),
            }
        }

        /// Window resized: new bounds for the simulation, new surface size
        fn resize(&mut self, width: f32, height: f32) {
            self.sim.resize(width, height);
            if let Some(canvas) = &self.canvas {
                let (pw, ph) = size_canvas(canvas, width, height, self.pixel_ratio);
                self.renderer.resize(pw, ph);
            }
            log::info!("Viewport resized to {}x{}", width, height);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, document: &Document) {
            if !self.settings.show_stats {
                return;
            }
            if let Some(el) = document.query_selector("#hud-bodies .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.sim.len().to_string()));
            }
            if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.stats.fps().to_string()));
            }
        }

        /// Persist a new strategy and reload the page with it
        fn switch_strategy(&mut self, strategy: RenderStrategy) {
            if strategy == self.settings.strategy {
                return;
            }
            self.settings.apply_strategy(strategy);
            self.settings.save();
            log::info!("Switching renderer to {}", strategy.as_str());

            if let Some(window) = web_sys::window() {
                let location = window.location();
                // A query string would override the saved strategy
                let result = match location.search() {
                    Ok(search) if !search.is_empty() => location.set_search(""),
                    _ => location.reload(),
                };
                if let Err(e) = result {
                    log::error!("Reload failed: {:?}", e);
                }
            }
        }
    }

    fn window_size(window: &Window) -> (f32, f32) {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width as f32, height as f32)
    }

    /// Size a canvas to `width`×`height` CSS pixels; returns its pixel size
    fn size_canvas(canvas: &HtmlCanvasElement, width: f32, height: f32, ratio: f64) -> (u32, u32) {
        let pw = (width as f64 * ratio) as u32;
        let ph = (height as f64 * ratio) as u32;
        canvas.set_width(pw);
        canvas.set_height(ph);
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));
        (pw, ph)
    }

    fn create_canvas(document: &Document, body: &HtmlElement) -> Result<HtmlCanvasElement, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id("canvas");
        body.append_child(&canvas)?;
        Ok(canvas)
    }

    async fn create_gpu_renderer(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<GpuRenderer, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        GpuRenderer::new(surface, &adapter, width, height).await
    }

    fn to_js(e: RenderError) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    type RendererParts = (Box<dyn Renderer>, Element, Option<HtmlCanvasElement>, f64);

    fn canvas_renderer(
        document: &Document,
        body: &HtmlElement,
        width: f32,
        height: f32,
    ) -> Result<RendererParts, JsValue> {
        let canvas = create_canvas(document, body)?;
        size_canvas(&canvas, width, height, 1.0);
        let renderer: Box<dyn Renderer> =
            Box::new(CanvasRenderer::new(canvas.clone()).map_err(to_js)?);
        Ok((renderer, canvas.clone().into(), Some(canvas), 1.0))
    }

    /// Build the configured renderer. Returns the renderer, the element
    /// presses are measured against, the canvas (if any) and its pixel ratio.
    async fn create_renderer(
        window: &Window,
        document: &Document,
        body: &HtmlElement,
        strategy: RenderStrategy,
        (width, height): (f32, f32),
    ) -> Result<RendererParts, JsValue> {
        match strategy {
            RenderStrategy::DomAbsolute | RenderStrategy::DomTransform => {
                let positioning = if strategy == RenderStrategy::DomAbsolute {
                    Positioning::Absolute
                } else {
                    Positioning::Transform
                };
                let renderer: Box<dyn Renderer> =
                    Box::new(DomRenderer::new(document.clone(), body.clone(), positioning));
                Ok((renderer, body.clone().into(), None, 1.0))
            }
            RenderStrategy::Canvas => canvas_renderer(document, body, width, height),
            RenderStrategy::Gpu => {
                let dpr = window.device_pixel_ratio();
                let canvas = create_canvas(document, body)?;
                let (pw, ph) = size_canvas(&canvas, width, height, dpr);
                match create_gpu_renderer(canvas.clone(), pw, ph).await {
                    Ok(renderer) => {
                        let renderer: Box<dyn Renderer> = Box::new(renderer);
                        Ok((renderer, canvas.clone().into(), Some(canvas), dpr))
                    }
                    Err(e) => {
                        // A canvas that tried WebGPU can't hand out a 2d context
                        log::warn!("GPU renderer unavailable ({}), falling back to canvas", e);
                        canvas.remove();
                        canvas_renderer(document, body, width, height)
                    }
                }
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        input::prevent_touch_scroll(&window)?;

        if intro::install(&document)? {
            return Ok(());
        }

        log::info!("Bounce Bench starting...");

        let mut settings = Settings::load();
        if let Ok(query) = window.location().search() {
            settings.apply_query(&query);
        }

        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
        let size = window_size(&window);

        let seed = js_sys::Date::now() as u64;
        let mut sim = Simulation::new(Viewport::new(size.0, size.1), settings.sim_config(), seed);
        sim.populate(settings.initial_bodies);
        log::info!(
            "Simulation seeded with {} ({} bodies, {}x{})",
            seed,
            sim.len(),
            size.0,
            size.1
        );

        let (renderer, target, canvas, pixel_ratio) =
            create_renderer(&window, &document, &body, settings.strategy, size).await?;
        log::info!("Renderer: {}", renderer.name());

        if let Some(el) = document.query_selector("#hud-renderer .hud-value")? {
            el.set_text_content(Some(renderer.name()));
        }
        if let Some(hud) = document.get_element_by_id("hud") {
            let class = if settings.show_stats { "" } else { "hidden" };
            let _ = hud.set_attribute("class", class);
        }

        let app = Rc::new(RefCell::new(App {
            sim,
            renderer,
            stats: FrameStats::new(),
            settings,
            canvas,
            pixel_ratio,
        }));

        setup_input_handlers(&window, &target, app.clone())?;

        request_animation_frame(app);

        log::info!("Bounce Bench running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &Window,
        target: &Element,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Press on a body: clone it
        {
            let app = app.clone();
            let kind = input::pointer_kind(window);
            input::on_press(target, kind, move |pos| {
                if let Some(index) = app.borrow_mut().sim.spawn_at_point(pos.x, pos.y) {
                    log::debug!("Press at ({:.0}, {:.0}) spawned body {}", pos.x, pos.y, index);
                }
            })?;
        }

        // Resize
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Some(window) = web_sys::window() {
                    let (w, h) = window_size(&window);
                    app.borrow_mut().resize(w, h);
                }
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().as_str() {
                    "Escape" => a.sim.stop(),
                    key @ ("1" | "2" | "3" | "4") => {
                        let index = key.parse::<usize>().unwrap_or(1) - 1;
                        a.switch_strategy(RenderStrategy::ALL[index]);
                    }
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        let running = {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                a.update_hud(&document);
            }
            a.sim.is_running()
        };

        if running {
            request_animation_frame(app);
        } else {
            log::info!("Animation loop ended");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_app::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: 10 s at 60 Hz, pressing the first body once a second
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bounce_bench::Settings;
    use bounce_bench::sim::{Simulation, Viewport, advance};

    env_logger::init();
    log::info!("Bounce Bench (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the browser demo");

    let settings = Settings::load();
    let mut sim = Simulation::new(Viewport::new(800.0, 600.0), settings.sim_config(), 42);
    sim.populate(settings.initial_bodies.max(1));

    let frame_ms = 1000.0 / 60.0;
    for frame in 0..600u32 {
        advance(&mut sim, frame as f64 * frame_ms);
        if frame % 60 == 0 {
            let first = sim.bodies[0];
            let center = first.pos + first.size / 2.0;
            sim.spawn_at_point(center.x, center.y);
        }
    }

    let escaped = sim
        .bodies
        .iter()
        .filter(|b| !b.is_within(&sim.viewport))
        .count();
    log::info!("{} bodies after 600 frames, {} out of bounds", sim.len(), escaped);
    println!("{} bodies, {} out of bounds", sim.len(), escaped);
}
