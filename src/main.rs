#[cfg(not(target_arch = "wasm32"))]
mod native {
    use mvp_webgpu::math::{self, Matrix4};
    use mvp_webgpu::render::{Camera, GpuContext, TriangleRenderer};
    use mvp_webgpu::RenderError;
    use std::sync::Arc;
    use winit::application::ApplicationHandler;
    use winit::dpi::PhysicalSize;
    use winit::event::WindowEvent;
    use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
    use winit::window::{Window, WindowId};

    const CANVAS_WIDTH: u32 = 500;
    const CANVAS_HEIGHT: u32 = 300;

    struct App {
        window: Option<Arc<Window>>,
        context: Option<GpuContext>,
        renderer: Option<TriangleRenderer>,
        camera: Camera,
        model: Matrix4,
    }

    impl App {
        fn new() -> Self {
            Self {
                window: None,
                context: None,
                renderer: None,
                camera: Camera::default(),
                model: *math::identity(&mut math::create()),
            }
        }

        fn init(&mut self, window: Arc<Window>) -> Result<(), RenderError> {
            let context = pollster::block_on(GpuContext::new(window))?;
            let renderer = pollster::block_on(TriangleRenderer::new(
                &context.device,
                context.config.format,
            ))?;

            self.camera.set_aspect(context.aspect_ratio());
            let mvp = self.camera.model_view_projection(&self.model);
            renderer.set_mvp(&context.queue, &mvp);
            log::debug!("mvp = {:?}", mvp.as_slice());

            self.context = Some(context);
            self.renderer = Some(renderer);
            Ok(())
        }

        fn render(&mut self) {
            let (Some(context), Some(renderer)) = (self.context.as_ref(), self.renderer.as_ref())
            else {
                return;
            };

            let output = match context.surface.get_current_texture() {
                Ok(output) => output,
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    return;
                }
                Err(e) => {
                    log::error!("Surface error: {:?}", e);
                    return;
                }
            };

            let view = output
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());

            renderer.render(&context.device, &context.queue, &view, &context.depth_view);

            output.present();
        }
    }

    impl ApplicationHandler for App {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_some() {
                return;
            }

            let window_attrs = Window::default_attributes()
                .with_title("MVP Triangle")
                .with_inner_size(PhysicalSize::new(CANVAS_WIDTH, CANVAS_HEIGHT))
                .with_resizable(false);

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            if let Err(e) = self.init(window.clone()) {
                log::error!("{e}");
                event_loop.exit();
                return;
            }

            window.request_redraw();
        }

        fn window_event(
            &mut self,
            event_loop: &ActiveEventLoop,
            _id: WindowId,
            event: WindowEvent,
        ) {
            match event {
                WindowEvent::CloseRequested => {
                    event_loop.exit();
                }
                WindowEvent::Resized(size) => {
                    if let Some(context) = &mut self.context {
                        context.resize(size);
                    }
                }
                WindowEvent::RedrawRequested => {
                    self.render();
                }
                _ => {}
            }
        }
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::init();

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new();
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
