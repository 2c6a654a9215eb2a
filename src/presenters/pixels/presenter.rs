use crate::adapters::pixel_format::{copy_rgb_to_rgba, fill_rgba};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::warn;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture, TextureError};
use std::sync::Arc;
use std::time::Duration;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

const PLACEHOLDER_RGB: [u8; 3] = [0, 0, 0];

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    has_frame: bool,
    last_presented_generation: u64,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            has_frame: false,
            last_presented_generation: 0,
            last_error_message: None,
            last_render_duration: None,
        })
    }

    /// Takes the newest worker event. Frames older than the one on screen, or sized for
    /// a previous window size, are dropped.
    fn take_latest_frame(&mut self) {
        let Some(event) = self.adapter.take_render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                let pixel_rect = frame.pixel_rect();

                if frame.generation > self.last_presented_generation
                    && pixel_rect.width() == self.width
                    && pixel_rect.height() == self.height
                    && self.copy_frame(&frame)
                {
                    self.has_frame = true;
                    self.last_presented_generation = frame.generation;
                    self.last_render_duration = Some(frame.render_duration);
                    self.last_error_message = None;
                }
            }
            RenderEvent::Error(error) => {
                if error.generation >= self.last_presented_generation {
                    self.last_error_message = Some(error.message);
                }
            }
        }
    }

    fn copy_frame(&mut self, frame: &FrameData) -> bool {
        match copy_rgb_to_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut()) {
            Ok(()) => true,
            Err(err) => {
                warn!("frame {} not shown: {}", frame.generation, err);
                false
            }
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.take_latest_frame();

        if !self.has_frame {
            fill_rgba(self.pixels.frame_mut(), PLACEHOLDER_RGB);
        }

        let width = self.width;
        let height = self.height;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [width, height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        self.width = width;
        self.height = height;

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        self.has_frame = false;
        Ok(())
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}
