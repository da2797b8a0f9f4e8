use anyhow::Result;
use backdrop_common::Viewport;
use backdrop_input::{Action, Overlay, OverlaySignal, PointerTracker};
use backdrop_render::ParallaxCamera;
use backdrop_render_wgpu::{BackdropRenderer, acquire_device};
use backdrop_scene::{Scene, advance};
use backdrop_tools::SceneInspector;
use clap::Parser;
use egui::Context as EguiContext;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Cap on the HiDPI scale factor applied to the output surface, balancing
/// visual fidelity against GPU load.
const MAX_PIXEL_RATIO: f64 = 2.0;

#[derive(Parser)]
#[command(name = "backdrop-desktop", about = "Ambient 3D backdrop window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Starfield seed
    #[arg(long, default_value = "42")]
    seed: u64,
}

/// Clamp a physical surface size as if the display's pixel ratio were at most
/// `MAX_PIXEL_RATIO`.
fn clamped_surface_size(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let ratio = if scale_factor > MAX_PIXEL_RATIO {
        MAX_PIXEL_RATIO / scale_factor
    } else {
        1.0
    };
    Viewport::new(
        (size.width as f64 * ratio) as u32,
        (size.height as f64 * ratio) as u32,
    )
}

/// Application state shared between input handlers and the frame tick.
struct AppState {
    scene: Scene,
    camera: ParallaxCamera,
    tracker: PointerTracker,
    overlay: Overlay,
    started: Instant,
}

impl AppState {
    fn new(seed: u64) -> Self {
        Self {
            scene: Scene::build(seed),
            camera: ParallaxCamera::default(),
            tracker: PointerTracker::default(),
            overlay: Overlay::new(),
            started: Instant::now(),
        }
    }

    /// One frame tick: advance entity transforms, then smooth the camera.
    fn tick(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let pointer = self.tracker.state();
        advance(&mut self.scene, elapsed, pointer);
        self.camera.follow(pointer);
    }

    /// All raw events arrive here as shared actions.
    fn apply(&mut self, action: Action) {
        match action {
            Action::PointerMoved { client_x, client_y } => {
                self.tracker.pointer_moved(client_x, client_y);
            }
            Action::ViewportResized(viewport) => {
                self.camera.set_viewport(viewport);
                self.tracker.viewport_resized(viewport);
            }
            Action::Overlay(signal) => {
                self.overlay.apply(signal);
            }
            Action::Noop => {}
        }
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    self.apply(Action::Overlay(OverlaySignal::Open));
                }
                ui.separator();
                ui.small(format!("{}", SceneInspector::summary(&self.scene)));
            });
        });

        if !self.overlay.is_visible() {
            return;
        }

        // Dimmed backdrop behind the dialog; it senses clicks.
        let screen = ctx.screen_rect();
        let backdrop = egui::Area::new(egui::Id::new("overlay_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, resp) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::from_black_alpha(128));
                resp
            })
            .inner;

        let mut close_clicked = false;
        egui::Window::new("Application received")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Your application has been submitted.");
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });

        if close_clicked {
            self.apply(Action::Overlay(OverlaySignal::Close));
        } else if backdrop.clicked() {
            // The dialog swallows its own clicks, so any click reaching the
            // backdrop area landed outside the panel.
            self.apply(Action::Overlay(OverlaySignal::BackdropPressed {
                inside_panel: false,
            }));
        }
    }
}

struct GpuApp {
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<BackdropRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl GpuApp {
    fn new(seed: u64) -> Self {
        Self {
            state: AppState::new(seed),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Backdrop")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                // The single fatal startup path: no window, no scene, no loop.
                tracing::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = match instance.create_surface(window.clone()) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("failed to create surface: {e}");
                event_loop.exit();
                return;
            }
        };

        let (adapter, device, queue) = match acquire_device(&instance, &surface) {
            Ok(gpu) => gpu,
            Err(e) => {
                tracing::error!("GPU initialization failed: {e}");
                event_loop.exit();
                return;
            }
        };

        let viewport = clamped_surface_size(window.inner_size(), window.scale_factor());
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: viewport.width,
            height: viewport.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.apply(Action::ViewportResized(viewport));

        let renderer = BackdropRenderer::new(
            &device,
            surface_format,
            viewport.width,
            viewport.height,
            &self.state.scene,
        );

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(egui_winit) = &mut self.egui_winit {
            let response = egui_winit.on_window_event(self.window.as_ref().unwrap(), &event);
            // Pointer motion always reaches the scene, even when the UI claims
            // the pointer (the overlay backdrop covers the whole window, and
            // the parallax must keep tracking underneath it).
            if response.consumed && !matches!(event, WindowEvent::CursorMoved { .. }) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                let scale = self
                    .window
                    .as_ref()
                    .map(|w| w.scale_factor())
                    .unwrap_or(1.0);
                let viewport = clamped_surface_size(new_size, scale);
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = viewport.width;
                    config.height = viewport.height;
                    surface.configure(device, config);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
                self.state.apply(Action::ViewportResized(viewport));
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.state.apply(Action::PointerMoved {
                    client_x: position.x as f32,
                    client_y: position.y as f32,
                });
            }
            WindowEvent::RedrawRequested => {
                self.state.tick();

                // Missing surface or device means a skipped frame, not a fault.
                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(device, queue, &view, &self.state.camera, &self.state.scene);
                }

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    self.state.draw_ui(ctx);
                });

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [
                        self.config.as_ref().unwrap().width,
                        self.config.as_ref().unwrap().height,
                    ],
                    pixels_per_point: full_output.pixels_per_point,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
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
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("backdrop-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(cli.seed);
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_clamp() {
        let vp = clamped_surface_size(PhysicalSize::new(3000, 1500), 3.0);
        assert_eq!(vp.width, 2000);
        assert_eq!(vp.height, 1000);
    }

    #[test]
    fn pixel_ratio_untouched_at_or_below_two() {
        let vp = clamped_surface_size(PhysicalSize::new(2560, 1440), 2.0);
        assert_eq!(vp.width, 2560);
        assert_eq!(vp.height, 1440);
    }

    #[test]
    fn pointer_moves_update_tracker_while_overlay_open() {
        let mut state = AppState::new(1);
        state.apply(Action::ViewportResized(Viewport::new(800, 600)));
        state.apply(Action::Overlay(OverlaySignal::Open));
        state.apply(Action::PointerMoved {
            client_x: 500.0,
            client_y: 400.0,
        });
        assert!(state.overlay.is_visible());
        let pointer = state.tracker.state();
        assert_eq!(pointer.raw_x, 100.0);
        assert_eq!(pointer.raw_y, 100.0);
    }
}
