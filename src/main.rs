use anyhow::{anyhow, Context};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[cfg(feature = "reload")]
use hot_lib::*;
#[cfg(not(feature = "reload"))]
use regions::*;

#[cfg(feature = "reload")]
#[hot_lib_reloader::hot_module(dylib = "regions", file_watch_debounce = 20, lib_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug")
)]
mod hot_lib {
    pub use regions::{Config, Screen, ScreenAction};
    hot_functions_from_file!("lib/src/lib.rs");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "regionboard=info,regions=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).with_context(|| format!("loading config from {path}"))?,
        None => Config::default(),
    };
    let mut screen = Screen::new(&config).context("building screen")?;
    let (width, height) = (config.window.width, config.window.height);

    let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;

    let window = video_subsystem
        .window(&config.window.title, width, height)
        .position_centered()
        .build()?;

    let mut canvas = window.into_canvas().build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture =
        texture_creator.create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)?;
    let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

    info!(width, height, "window open; click + or press A to add, M toggles dragging");

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::A),
                    repeat: false,
                    ..
                } => {
                    let index = add_circle(&mut screen);
                    info!(index, "circle added");
                }
                Event::KeyDown {
                    keycode: Some(Keycode::M),
                    repeat: false,
                    ..
                } => {
                    let moveable = toggle_moveable(&mut screen);
                    info!(moveable, "dragging toggled");
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => match pointer_down(&mut screen, x as f64, y as f64) {
                    Some(ScreenAction::Added(index)) => info!(index, "circle added"),
                    Some(ScreenAction::MoveableChanged(moveable)) => {
                        info!(moveable, "dragging toggled")
                    }
                    Some(ScreenAction::DragStarted(_)) | None => {}
                },
                Event::MouseMotion {
                    mousestate,
                    xrel,
                    yrel,
                    ..
                } if mousestate.left() => {
                    pointer_moved(&mut screen, xrel as f64, yrel as f64);
                }
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => pointer_up(&mut screen),
                _ => {}
            }
        }

        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                render(&screen, buffer, width as usize, height as usize, pitch);
            })
            .map_err(|e| anyhow!(e))?;

        canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
        canvas.present();
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
