use crate::app::{AppContext, HostRequest};
use crate::{hud, keymap};
use anyhow::{Context as _, Result};
use egui::Context as EguiContext;
use pyramid_config::AppConfig;
use pyramid_input::{InputEvent, scroll_lines_from_pixels};
use pyramid_render::Mesh;
use pyramid_render_wgpu::{GpuContext, PyramidRenderer};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

/// Window plus everything created against its surface.
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: PyramidRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop, config: &AppConfig, egui_ctx: &EguiContext) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.window.title.clone())
            .with_inner_size(PhysicalSize::new(config.window.width, config.window.height));
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let size = window.inner_size();
        let gpu = GpuContext::new(window.clone(), size.width, size.height, config.render.vsync)
            .context("initialize GPU")?;

        let renderer = PyramidRenderer::new(
            &gpu.device,
            gpu.format(),
            size.width,
            size.height,
            &Mesh::pyramid(),
        );

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&gpu.device, gpu.format(), None, 1, false);

        Ok(Self {
            window,
            gpu,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.gpu.resize(size.width, size.height);
        let (width, height) = self.gpu.size();
        self.renderer.resize(&self.gpu.device, width, height);
    }

    /// Grab and hide the cursor, preferring `Locked` over `Confined`.
    /// Returns whether the grab took effect. Look input comes from raw
    /// device motion in either mode.
    fn capture_cursor(&mut self, captured: bool) -> bool {
        if !captured {
            if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
                tracing::warn!("failed to release cursor: {e}");
            }
            self.window.set_cursor_visible(true);
            return true;
        }

        let mode = match self.window.set_cursor_grab(CursorGrabMode::Locked) {
            Ok(()) => Some(CursorGrabMode::Locked),
            Err(_) => self
                .window
                .set_cursor_grab(CursorGrabMode::Confined)
                .map(|()| CursorGrabMode::Confined)
                .map_err(|e| tracing::warn!("cursor grab unavailable: {e}"))
                .ok(),
        };
        let Some(mode) = mode else {
            return false;
        };
        self.window.set_cursor_visible(false);
        tracing::debug!(?mode, "cursor captured");
        true
    }

    fn draw(&mut self, egui_ctx: &EguiContext, state: &AppContext, clear_color: wgpu::Color) {
        let Some(output) = self.gpu.acquire() else {
            return;
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let (device, queue) = (&self.gpu.device, &self.gpu.queue);

        self.renderer
            .render(device, queue, &view, &state.frame(), clear_color);

        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = egui_ctx.run(raw_input, |ctx| hud::draw(ctx, state));
        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let (width, height) = self.gpu.size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        self.egui_renderer.update_buffers(
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
            self.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        output.present();
    }
}

/// winit application: owns the config, the app context and, once resumed,
/// the graphics.
pub struct GpuApp {
    config: AppConfig,
    state: AppContext,
    graphics: Option<Graphics>,
    egui_ctx: EguiContext,
    clear_color: wgpu::Color,
    init_error: Option<anyhow::Error>,
}

impl GpuApp {
    pub fn new(config: AppConfig) -> Result<Self> {
        let state = AppContext::new(&config).context("camera settings")?;
        let [r, g, b, a] = config.render.clear_color;
        Ok(Self {
            config,
            state,
            graphics: None,
            egui_ctx: EguiContext::default(),
            clear_color: wgpu::Color { r, g, b, a },
            init_error: None,
        })
    }

    /// Initialization failure recorded while the event loop was running.
    pub fn finish(self) -> Result<()> {
        match self.init_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn apply_request(&mut self, event_loop: &ActiveEventLoop, request: HostRequest) {
        match request {
            HostRequest::Exit => {
                tracing::info!("exit requested");
                event_loop.exit();
            }
            HostRequest::CaptureCursor(captured) => {
                let Some(gfx) = &mut self.graphics else {
                    return;
                };
                if gfx.capture_cursor(captured) {
                    self.state.set_mouse_captured(captured);
                }
            }
        }
    }

    fn redraw(&mut self) {
        let dt = self.state.clock.tick();
        self.state.update(dt);

        let Some(gfx) = &mut self.graphics else {
            return;
        };
        gfx.draw(&self.egui_ctx, &self.state, self.clear_color);
        gfx.window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        match Graphics::new(event_loop, &self.config, &self.egui_ctx) {
            Ok(gfx) => {
                let size = gfx.window.inner_size();
                self.state.resize(size.width, size.height);
                self.graphics = Some(gfx);
                if self.config.window.capture_mouse {
                    self.apply_request(event_loop, HostRequest::CaptureCursor(true));
                }
                // Time spent creating the device is not a frame.
                self.state.clock.tick();
            }
            Err(e) => {
                tracing::error!("failed to initialize graphics: {e:#}");
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.state.show_hud && !self.state.mouse_captured() {
            if let Some(gfx) = &mut self.graphics {
                let response = gfx.egui_winit.on_window_event(&gfx.window, &event);
                if response.consumed {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gfx) = &mut self.graphics {
                    gfx.resize(new_size);
                    let (width, height) = gfx.gpu.size();
                    self.state.resize(width, height);
                }
            }
            WindowEvent::Focused(false) => {
                self.state.focus_lost();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                let action = keymap::action_for(key);
                if repeat && !action.is_continuous() {
                    return;
                }
                let pressed = key_state == ElementState::Pressed;
                if let Some(request) = self.state.handle_action(action, pressed) {
                    self.apply_request(event_loop, request);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => scroll_lines_from_pixels(p.y as f32),
                };
                self.state.handle_input(InputEvent::Scroll { y });
            }
            WindowEvent::MouseInput { button, state, .. } => {
                let action = if state == ElementState::Pressed {
                    "pressed"
                } else {
                    "released"
                };
                match keymap::mouse_button_name(button) {
                    Some(name) => tracing::info!("{name} mouse button {action}"),
                    None => tracing::info!("unhandled mouse button event: {button:?}"),
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            // Confined cursors stall at the window edge; device motion does not.
            self.state.mouse_motion(dx, dy);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gfx) = &self.graphics {
            gfx.window.request_redraw();
        }
    }
}
