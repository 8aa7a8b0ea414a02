use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use winit::{event::*, event_loop::EventLoop, keyboard::PhysicalKey, window::WindowBuilder};

use celestial_core::{
    EngineParams, GeneratorParams, ParticleEngine, SystemFontRasterizer, DEFAULT_FONT_SIZE,
    DEFAULT_PARTICLE_COUNT,
};

mod input;
mod render;

use input::Action;

// Longer stalls (window drags, font loading) would overshoot the blend.
const MAX_FRAME_DT: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "celestial-tree", version, about = "Particles that morph between a tree, a galaxy and your text")]
struct Cli {
    /// Text for the text shape; `\n` starts a new line
    #[arg(long, default_value = "MERRY\\nCHRISTMAS")]
    text: String,

    /// Font size in pixels on the 1024x512 text canvas (clamped to 20..=400)
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    font_size: f32,

    /// Number of particles per layer
    #[arg(long, default_value_t = DEFAULT_PARTICLE_COUNT)]
    count: usize,

    /// Seed for shape sampling and sparkle; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn window_title(engine: &ParticleEngine) -> String {
    format!("Celestial Tree - {}", engine.mode().label())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("[main] seed={seed} count={}", cli.count);
    let params = EngineParams {
        generator: GeneratorParams { count: cli.count },
        text: input::unescape_newlines(&cli.text),
        font_size: cli.font_size,
        ..EngineParams::default()
    };
    let mut engine = ParticleEngine::new(params, Box::new(SystemFontRasterizer::new()), seed);

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title(window_title(&engine))
        .build(&event_loop)
        .context("window")?;

    let mut state = pollster::block_on(render::GpuState::new(&window)).context("gpu")?;
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let width = state.size().width as f32;
                engine.set_rotation_input(input::rotation_from_pointer(position.x as f32, width));
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                engine.cycle_mode();
                state.window.set_title(&window_title(&engine));
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match input::action_for_key(code) {
                Some(Action::CycleMode) => {
                    engine.cycle_mode();
                    state.window.set_title(&window_title(&engine));
                }
                Some(Action::AdjustFontSize(step)) => {
                    let size = engine.font_size() + step;
                    if engine.set_font_size(size) {
                        log::info!("[main] font size {}", engine.font_size());
                    }
                }
                Some(Action::Quit) => elwt.exit(),
                None => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            engine.tick((now - last_frame).min(MAX_FRAME_DT));
            last_frame = now;
            match state.render(engine.layers()) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
