//! WASM entry point - draws the triangle into `<canvas id="canvas">`

use crate::math::{self, Matrix4};
use crate::render::{Camera, GpuContext, TriangleRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::web::EventLoopExtWebSys;
use winit::platform::web::WindowAttributesExtWebSys;
use winit::window::{Window, WindowId};

const CANVAS_WIDTH: u32 = 500;
const CANVAS_HEIGHT: u32 = 300;

struct AppState {
    context: Option<GpuContext>,
    renderer: Option<TriangleRenderer>,
}

struct App {
    window: Option<Arc<Window>>,
    state: Rc<RefCell<AppState>>,
    camera: Camera,
    model: Matrix4,
    init_pending: bool,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            state: Rc::new(RefCell::new(AppState {
                context: None,
                renderer: None,
            })),
            camera: Camera::default(),
            model: *math::identity(&mut math::create()),
            init_pending: false,
        }
    }

    fn render(&self) {
        let state = self.state.borrow();
        let (Some(context), Some(renderer)) = (state.context.as_ref(), state.renderer.as_ref())
        else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(o) => o,
            Err(_) => return,
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        renderer.render(&context.device, &context.queue, &view, &context.depth_view);
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_pending {
            return;
        }
        self.init_pending = true;

        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("canvas"))
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("no canvas element with id 'canvas'");
            return;
        };

        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let window_attrs = Window::default_attributes()
            .with_canvas(Some(canvas))
            .with_inner_size(PhysicalSize::new(CANVAS_WIDTH, CANVAS_HEIGHT));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                return;
            }
        };
        self.window = Some(window.clone());

        let state = self.state.clone();
        let mut camera = self.camera;
        let model = self.model;

        wasm_bindgen_futures::spawn_local(async move {
            let context = match GpuContext::new(window.clone()).await {
                Ok(context) => context,
                Err(e) => {
                    log::error!("{e}");
                    return;
                }
            };
            let format = context.config.format;
            let renderer = match TriangleRenderer::new(&context.device, format).await {
                Ok(renderer) => renderer,
                Err(e) => {
                    log::error!("{e}");
                    return;
                }
            };

            camera.set_aspect(context.aspect_ratio());
            renderer.set_mvp(&context.queue, &camera.model_view_projection(&model));

            let mut state = state.borrow_mut();
            state.context = Some(context);
            state.renderer = Some(renderer);

            window.request_redraw();
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                let mut state = self.state.borrow_mut();
                if let Some(context) = &mut state.context {
                    context.resize(size);
                }
            }

            WindowEvent::RedrawRequested => self.render(),

            _ => {}
        }
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Warn);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };

    event_loop.spawn_app(App::new());
}
