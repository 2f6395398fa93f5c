//! Darkade entry point
//!
//! Runs the fixed-timestep host loop against the headless display and a
//! scripted input source. No window system is linked; the loop, scene flow
//! and logging are the same a windowed backend would drive.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use darkade::platform::{FrameClock, FrameInput, Key, ScriptStep, ScriptedInput};
use darkade::renderer::Frame;
use darkade::scene::names;
use darkade::scenes::Menu;
use darkade::{QuitRequested, SceneContext, SceneManager, Settings};

#[derive(Parser, Debug)]
#[command(name = "darkade")]
#[command(about = "Pong and Snake arcade launcher (headless demo run)", long_about = None)]
#[command(version)]
struct Args {
    /// Settings JSON file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many frames even if the script is still running
    #[arg(long)]
    frames: Option<u64>,
}

/// Walk through both games: a single-player Snake run into the wall, back to
/// the main menu, then a stretch of Pong
fn demo_script() -> ScriptedInput {
    ScriptedInput::new([
        ScriptStep::idle(5),
        ScriptStep::tap(Key::Digit(2), 2),
        ScriptStep::tap(Key::Digit(1), 1),
        ScriptStep::hold(40, [Key::Right]),
        ScriptStep::tap(Key::Enter, 2),
        ScriptStep::tap(Key::Digit(6), 2),
        ScriptStep::tap(Key::Digit(1), 2),
        ScriptStep::tap(Key::Digit(1), 2),
        ScriptStep::hold(90, [Key::W, Key::Down]),
        ScriptStep::hold(90, [Key::S, Key::Up]),
    ])
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::init();
    log::info!("Darkade (headless) starting...");

    let settings = match &args.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    log::info!(
        "{} at {}x{}",
        settings.title,
        settings.window_width,
        settings.window_height
    );

    let context = SceneContext::new(settings);
    let viewport = context.viewport;
    let mut manager =
        SceneManager::activate(Box::new(Menu::main(viewport)), names::MAIN_MENU, context);
    let mut display = Frame::new(viewport);
    let mut input = demo_script();
    let mut clock = FrameClock::new();

    let mut frames = 0u64;
    loop {
        if args.frames.is_some_and(|limit| frames >= limit) {
            log::info!("Frame limit reached");
            break;
        }

        let frame_input = FrameInput::sample(&mut input);
        match manager.tick(&frame_input) {
            Ok(Some(transition)) => {
                if let Err(e) = manager.apply(transition) {
                    log::error!("{}", e);
                    return ExitCode::FAILURE;
                }
            }
            Ok(None) => {}
            Err(QuitRequested) => {
                log::info!("Quit requested");
                break;
            }
        }

        manager.render(&mut display);
        clock.wait(manager.frame_rate());
        frames += 1;
    }

    log::info!(
        "Darkade stopped after {} frames in '{}'",
        frames,
        manager.active_name()
    );
    ExitCode::SUCCESS
}
