use anyhow::Result;
use clap::Parser;
use desert_scene::{
    cli::Cli,
    core::{FpsCounter, WinitController},
    frame::FrameClock,
    loaders,
    renderer::SceneRenderer,
    Camera, Caravan, DesertScene, MeshKind,
};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const WINDOW_TITLE: &str = "Egipat";
const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    controller: WinitController,
    camera: Camera,
    scene: DesertScene,
    caravan: Caravan,
    clock: FrameClock,
    fps: FpsCounter,
}

impl App {
    fn new(cli: Cli) -> Self {
        let camera = Camera::from_preset(cli.camera);
        let caravan = Caravan::towards_camera(camera.position, cli.speed);
        log::info!(
            "Caravan route {:?} -> {:?}, step {} per frame",
            caravan.start(),
            caravan.end(),
            cli.speed
        );
        Self {
            scene: DesertScene::new(camera.up),
            window: None,
            renderer: None,
            controller: WinitController::new(),
            camera,
            caravan,
            clock: FrameClock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
            cli,
        }
    }

    fn init_renderer(&self, window: Arc<Window>) -> Result<SceneRenderer> {
        let mut renderer =
            pollster::block_on(SceneRenderer::new(window, self.cli.shader.as_deref()))?;

        match loaders::load_model(&self.cli.model) {
            Ok(model) => renderer.set_model(MeshKind::Camel, &model),
            Err(e) => log::error!("{:#}; continuing without the camel", e),
        }

        Ok(renderer)
    }

    fn redraw(&mut self) {
        let frame = self.clock.tick();
        if let Some(fps) = self.fps.tick(frame.delta) {
            log::debug!(
                "FPS: {:.1} (frame {}, {:.1}s)",
                fps,
                frame.number,
                frame.time
            );
        }

        self.caravan.advance(&self.controller);
        let calls = self.scene.draw_calls(&self.caravan);

        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.render(&self.camera, &calls) {
                log::error!("Render error: {:#}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.cli.window_size();
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::PhysicalSize::new(width, height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match self.init_renderer(window.clone()) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!("Controls: Up/Down move the caravan, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
