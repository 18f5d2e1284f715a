use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use springboard::engine::game_loop::GameLoop;
use springboard::engine::input::KeyboardState;
use springboard::game::{Stage, WorldConstants};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Springboard...");

    let mut stage = Stage::demo(WorldConstants::default())?;
    let mut keyboard = KeyboardState::new();
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Springboard")
        .with_inner_size(winit::dpi::LogicalSize::new(800, 480))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                keyboard.process_keyboard_event(&event);
                if keyboard.quit_requested() {
                    info!("Quit key pressed, shutting down...");
                    elwt.exit();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                keyboard.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let steps = game_loop.begin_frame();
                let input = keyboard.snapshot();
                for _ in 0..steps {
                    stage.step(game_loop.fixed_timestep(), &input);
                }

                // Drawing lives in the host's renderer; the title doubles as a HUD
                let character = &stage.character;
                let state = character.state();
                let facing = if character.facing().is_mirrored() { "<" } else { ">" };
                let spring = match character.last_spring() {
                    Some(report) if state.is_spring() => {
                        format!(" | Spring: {:.0}N ({:.1} u/s²)", report.force, report.acceleration)
                    }
                    _ => String::new(),
                };
                window.set_title(&format!(
                    "Springboard | {} {} | Velocity: ({:.1}, {:.1}) | Frame: {}{}",
                    facing,
                    state.animation_name(),
                    character.velocity.x,
                    character.velocity.y,
                    character.animation().current_frame(),
                    spring,
                ));
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
