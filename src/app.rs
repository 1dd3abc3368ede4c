use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    animation::AnimationDriver,
    config::AppConfig,
    context::AppContext,
    error::AppError,
    gfx::{rendering::RenderEngine, surface::Viewport},
    input::{InputReactor, PointerEvent, PointerTracker},
};

/// Composition root: owns the event loop and everything the demo needs
pub struct CubeApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    context: Option<AppContext>,
    reactor: InputReactor,
    driver: Option<AnimationDriver>,
    pointer: PointerTracker,
    fatal: Option<AppError>,
}

impl CubeApp {
    /// Create a new application; the window and GPU come up on first resume
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let event_loop = EventLoop::new()?;
        let reactor = InputReactor::new(&config);

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                context: None,
                reactor,
                driver: None,
                pointer: PointerTracker::new(),
                fatal: None,
            },
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.app_state.config
    }

    /// Run the application (consumes self and starts the event loop)
    ///
    /// Returns once the window is closed. A fatal render error that stopped
    /// the loop is returned here.
    pub fn run(mut self) -> Result<(), AppError> {
        let Some(event_loop) = self.event_loop.take() else {
            return Ok(());
        };
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;

        self.dispose();
        match self.app_state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Releases the scene and GPU resources; safe to call more than once
    pub fn dispose(&mut self) {
        self.app_state.dispose();
    }
}

impl AppState {
    fn dispose(&mut self) {
        if let Some(context) = self.context.as_mut() {
            if !context.is_disposed() {
                log::info!("disposing scene");
            }
            context.dispose();
        }
        if let Some(render_engine) = self.render_engine.as_mut() {
            render_engine.release_scene_resources();
        }
        self.reactor.reset();
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.dispose();
        event_loop.exit();
    }

    fn viewport(window: &Window) -> Viewport {
        let PhysicalSize { width, height } = window.inner_size();
        Viewport::from_physical(width, height, window.scale_factor())
    }

    fn resize(&mut self) {
        let (Some(window), Some(context), Some(render_engine)) = (
            self.window.as_ref(),
            self.context.as_mut(),
            self.render_engine.as_mut(),
        ) else {
            return;
        };

        if context.resize(Self::viewport(window)) {
            let (width, height) = context.surface.drawing_buffer_size();
            render_engine.resize(width, height);
        }
    }

    fn dispatch_pointer(&mut self, event: PointerEvent) {
        let Some(context) = self.context.as_mut() else {
            return;
        };
        if let Some(interaction) = self.reactor.handle_pointer(context, &event) {
            log::debug!(
                "{:?} on {} target(s)",
                interaction.kind,
                interaction.targets.len()
            );
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(context), Some(render_engine), Some(driver)) = (
            self.context.as_mut(),
            self.render_engine.as_mut(),
            self.driver.as_mut(),
        ) else {
            return;
        };

        match driver.frame(context, render_engine) {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => {
                log::warn!("skipping frame: {err}");
            }
            Err(err) => {
                log::error!("render failed: {err}");
                self.fatal = Some(err.into());
                self.shutdown(event_loop);
            }
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.config.window_size;
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(width, height));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                self.fatal = Some(err.into());
                event_loop.exit();
                return;
            }
        };

        let context = AppContext::new(&self.config, Self::viewport(&window));
        let (buffer_width, buffer_height) = context.surface.drawing_buffer_size();

        let renderer = pollster::block_on(RenderEngine::new(
            window.clone(),
            buffer_width,
            buffer_height,
        ));
        let render_engine = match renderer {
            Ok(render_engine) => render_engine,
            Err(err) => {
                log::error!("failed to initialize renderer: {err}");
                self.fatal = Some(err.into());
                event_loop.exit();
                return;
            }
        };

        log::info!(
            "window ready: {}x{} ({} mode)",
            buffer_width,
            buffer_height,
            self.config.mode
        );

        self.driver = Some(AnimationDriver::new(self.config.rotation_step).spin(context.cube()));
        self.context = Some(context);
        self.render_engine = Some(render_engine);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(scale_factor) = self.window.as_ref().map(|w| w.scale_factor()) else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.shutdown(event_loop);
            }
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.resize();
            }
            WindowEvent::CursorEntered { .. } => {
                self.pointer.cursor_entered();
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.cursor_left();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let event = self.pointer.cursor_moved(position, scale_factor);
                self.dispatch_pointer(event);
            }
            WindowEvent::MouseInput { state, .. } => {
                if let Some(event) = self.pointer.button(state) {
                    self.dispatch_pointer(event);
                }
            }
            WindowEvent::Touch(touch) => {
                if let Some(event) = self.pointer.touch(&touch, scale_factor) {
                    self.dispatch_pointer(event);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
