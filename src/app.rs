// filepath: src/app.rs
//! Main application logic for f91w-face

use chrono::Local;
use f91w_face::canvas::{Canvas, FontId};
use f91w_face::config::FaceConfig;
use f91w_face::draw::PixelCanvas;
use f91w_face::fonts::FontSet;
use f91w_face::{DisplayGeometry, FaceRenderer, Rgb, TimeSnapshot};
use log::{debug, error, info, warn};
use smithay_client_toolkit::{
    output::OutputState,
    registry::RegistryState,
    shell::{
        wlr_layer::{Anchor, KeyboardInteractivity, LayerSurface},
        WaylandSurface,
    },
    shm::{
        slot::{Buffer, SlotPool},
        Shm,
    },
};
use std::time::Duration;
use wayland_client::protocol::{wl_shm, wl_surface::WlSurface};

/// Pixel canvas backed by an shm buffer; ending the frame presents it
struct SurfaceCanvas<'a> {
    pixels: PixelCanvas<'a>,
    buffer: &'a Buffer,
    surface: &'a WlSurface,
}

impl Canvas for SurfaceCanvas<'_> {
    fn width(&self) -> i32 {
        self.pixels.width()
    }

    fn height(&self) -> i32 {
        self.pixels.height()
    }

    fn font_height(&self, font: FontId) -> i32 {
        self.pixels.font_height(font)
    }

    fn begin_frame(&mut self) {
        self.pixels.begin_frame();
    }

    fn end_frame(&mut self) {
        self.pixels.end_frame();

        if let Err(e) = self.buffer.attach_to(self.surface) {
            warn!("Failed to attach face buffer, frame dropped: {:?}", e);
            return;
        }
        self.surface
            .damage_buffer(0, 0, self.pixels.width(), self.pixels.height());
        self.surface.commit();
    }

    fn fill_rect(&mut self, color: Rgb, x: i32, y: i32, w: i32, h: i32) {
        self.pixels.fill_rect(color, x, y, w, h);
    }

    fn measure_text(&self, text: &str, font: FontId) -> i32 {
        self.pixels.measure_text(text, font)
    }

    fn draw_text(&mut self, text: &str, font: FontId, color: Rgb, x: i32, y: i32) {
        self.pixels.draw_text(text, font, color, x, y);
    }
}

pub struct AppData {
    registry_state: RegistryState,
    output_state: OutputState,
    shm_state: Shm,
    layer_surface: Option<LayerSurface>,
    pool: SlotPool,
    pub(crate) width: u32,
    pub(crate) height: u32,
    configured: bool,
    config: FaceConfig,
    fonts: FontSet,
    renderer: FaceRenderer,
    pub(crate) exit: bool,
}

impl AppData {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry_state: RegistryState,
        output_state: OutputState,
        shm_state: Shm,
        layer_surface: LayerSurface,
        pool: SlotPool,
        config: FaceConfig,
        fonts: FontSet,
        renderer: FaceRenderer,
    ) -> Self {
        info!("Configuring layer surface");
        layer_surface.set_anchor(Anchor::TOP);
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::None);
        layer_surface.set_size(config.width, config.height);
        layer_surface.set_exclusive_zone(-1);
        layer_surface.set_margin(0, 0, 0, 0);
        info!("Committing layer surface configuration");
        layer_surface.wl_surface().commit();

        Self {
            registry_state,
            output_state,
            shm_state,
            layer_surface: Some(layer_surface),
            pool,
            width: config.width,
            height: config.height,
            configured: false,
            config,
            fonts,
            renderer,
            exit: false,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    /// Adopt the size the compositor gave us. The geometry is rebuilt only
    /// when the size actually changes.
    pub fn update_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        let geo = self.renderer.geometry();
        if geo.width == w && geo.height == h {
            return;
        }
        let rebuilt = DisplayGeometry::validated_with_layout(w, h, self.config.layout)
            .and_then(|geometry| FaceRenderer::from_config(geometry, &self.config));
        match rebuilt {
            Ok(renderer) => {
                info!("Surface resized to {}x{}, rebuilding geometry", width, height);
                self.renderer = renderer;
            }
            Err(e) => {
                error!("Compositor assigned an unusable size: {}", e);
                self.exit = true;
            }
        }
    }

    pub fn draw(&mut self, snapshot: &TimeSnapshot) -> Result<(), Box<dyn std::error::Error>> {
        if !self.configured {
            debug!("draw() called before surface is configured, skipping");
            return Ok(());
        }
        let Some(layer_surface) = self.layer_surface.as_ref() else {
            debug!("draw() called after layer surface closed, skipping");
            return Ok(());
        };

        let width = self.width;
        let height = self.height;
        let stride = width * 4;

        let (buffer, pixels) = self.pool.create_buffer(
            width as i32,
            height as i32,
            stride as i32,
            wl_shm::Format::Argb8888,
        )?;

        let mut canvas = SurfaceCanvas {
            pixels: PixelCanvas::new(pixels, width, height, &self.fonts),
            buffer: &buffer,
            surface: layer_surface.wl_surface(),
        };
        self.renderer.draw(&mut canvas, snapshot);

        Ok(())
    }

    /// Redraw for the current local time and return the delay until the
    /// next redraw is due
    pub fn tick(&mut self) -> Duration {
        let snapshot = TimeSnapshot::from_datetime(&Local::now());
        if let Err(e) = self.draw(&snapshot) {
            warn!("Skipping frame: {}", e);
        }

        let delay = self.config.cadence.delay_until_next(&Local::now());
        debug!("Next redraw in {:?}", delay);
        delay
    }

    pub fn registry_state(&mut self) -> &mut RegistryState {
        &mut self.registry_state
    }

    pub fn output_state(&mut self) -> &mut OutputState {
        &mut self.output_state
    }

    pub fn shm_state(&mut self) -> &mut Shm {
        &mut self.shm_state
    }

    pub fn close_layer_surface(&mut self) {
        self.layer_surface = None;
        self.exit = true;
        info!("Layer surface closed");
    }
}
