// filepath: src/main.rs

mod app;
mod wayland;

use app::AppData;
use calloop::{
    timer::{TimeoutAction, Timer},
    EventLoop,
};
use calloop_wayland_source::WaylandSource;
use chrono::Local;
use f91w_face::config::FaceConfig;
use f91w_face::fonts::FontSet;
use f91w_face::{DisplayGeometry, FaceRenderer};
use log::info;
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    shell::wlr_layer::{Layer, LayerShell},
    shm::{slot::SlotPool, Shm},
};
use wayland_client::{globals::registry_queue_init, Connection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting f91w-face");

    let config = FaceConfig::load_from_file()?;
    info!(
        "Configuration loaded from {}",
        FaceConfig::get_config_path().display()
    );

    // Everything the face needs is validated before touching the display
    let geometry = DisplayGeometry::validated_with_layout(
        i32::try_from(config.width).unwrap_or(i32::MAX),
        i32::try_from(config.height).unwrap_or(i32::MAX),
        config.layout,
    )?;
    let fonts = FontSet::load(&config.fonts.big, &config.fonts.label)?;
    let renderer = FaceRenderer::from_config(geometry, &config)?;
    info!(
        "Face geometry {}x{} ({:?} panel, {:?} LCD), redraw every {:?}",
        geometry.width, geometry.height, config.layout, config.lcd_style, config.cadence
    );

    let conn = Connection::connect_to_env()?;
    let (globals, event_queue) = registry_queue_init(&conn)?;
    let qh = event_queue.handle();

    let compositor = CompositorState::bind(&globals, &qh)?;
    let layer_shell = LayerShell::bind(&globals, &qh)?;
    let shm = Shm::bind(&globals, &qh)?;

    let pool = SlotPool::new(geometry.frame_bytes(), &shm)?;

    let surface = compositor.create_surface(&qh);
    let layer_surface =
        layer_shell.create_layer_surface(&qh, surface, Layer::Top, Some("f91w-face"), None);

    let mut event_loop: EventLoop<AppData> = EventLoop::try_new()?;
    let loop_handle = event_loop.handle();
    WaylandSource::new(conn.clone(), event_queue)
        .insert(loop_handle.clone())
        .map_err(|e| e.error)?;

    let first_tick = config.cadence.delay_until_next(&Local::now());
    loop_handle
        .insert_source(Timer::from_duration(first_tick), |_deadline, _, app| {
            TimeoutAction::ToDuration(app.tick())
        })
        .map_err(|e| e.error)?;

    let mut app_data = AppData::new(
        RegistryState::new(&globals),
        OutputState::new(&globals, &qh),
        shm,
        layer_surface,
        pool,
        config,
        fonts,
        renderer,
    );

    info!("Entering event loop");
    while !app_data.exit {
        event_loop.dispatch(None, &mut app_data)?;
    }

    info!("Exiting");
    Ok(())
}
