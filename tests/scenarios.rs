//! End-to-end scene flows through the manager and the real scene catalog

use darkade::platform::{FrameInput, InputEvent, Key};
use darkade::renderer::{Frame, Renderer};
use darkade::scene::{CountdownSpec, SceneKind, SceneSpec, names};
use darkade::scenes::Menu;
use darkade::{QuitRequested, SceneContext, SceneError, SceneManager, Settings, Transition};

fn manager() -> SceneManager {
    let settings = Settings {
        seed: Some(2024),
        ..Default::default()
    };
    let context = SceneContext::new(settings);
    let menu = Box::new(Menu::main(context.viewport));
    SceneManager::activate(menu, names::MAIN_MENU, context)
}

/// One host-loop iteration without pacing
fn step(manager: &mut SceneManager, input: &FrameInput) {
    if let Some(transition) = manager.tick(input).unwrap() {
        manager.apply(transition).unwrap();
    }
}

fn press(manager: &mut SceneManager, key: Key) {
    step(manager, &FrameInput::with_events([InputEvent::KeyUp(key)]));
}

fn rendered_texts(manager: &SceneManager) -> Vec<String> {
    let mut display = Frame::new(manager.context().viewport);
    manager.render(&mut display);
    display.snapshot().texts().map(str::to_owned).collect()
}

#[test]
fn main_menu_to_pong_and_back_clears_registry() {
    let mut m = manager();
    press(&mut m, Key::Digit(1));
    assert_eq!(m.active_name(), names::PONG_MENU);
    assert_eq!(m.len(), 2);

    press(&mut m, Key::Digit(1));
    assert_eq!(m.active_kind(), SceneKind::PongMatch);
    assert_eq!(
        m.names(),
        vec![names::MAIN_MENU, names::PONG_MATCH, names::PONG_MENU]
    );

    m.apply(Transition::resume(names::PONG_MENU)).unwrap();
    press(&mut m, Key::Digit(2));
    assert_eq!(m.names(), vec![names::MAIN_MENU]);
    assert_eq!(m.active_kind(), SceneKind::MainMenu);
}

#[test]
fn pong_point_runs_countdown_then_resumes() {
    let mut m = manager();
    press(&mut m, Key::Digit(1));
    press(&mut m, Key::Digit(1));

    // Both paddles out of the way of the horizontal serve
    let dodge = FrameInput::holding([Key::W, Key::Up]);
    for _ in 0..200 {
        step(&mut m, &dodge);
        if m.active_kind() == SceneKind::Countdown {
            break;
        }
    }
    assert_eq!(m.active_name(), names::COUNTDOWN);
    assert!(m.contains(names::PONG_MATCH));
    assert!(rendered_texts(&m).contains(&"3".to_string()));

    // Lead-in plus three lines at 30 frames each
    for _ in 0..119 {
        step(&mut m, &FrameInput::default());
    }
    assert_eq!(m.active_name(), names::COUNTDOWN);
    assert!(rendered_texts(&m).contains(&"1".to_string()));

    step(&mut m, &FrameInput::default());
    assert_eq!(m.active_kind(), SceneKind::PongMatch);
    assert!(!m.contains(names::COUNTDOWN));
}

#[test]
fn countdown_ready_go_timing_through_manager() {
    let mut m = manager();
    let mut background = Frame::new(m.context().viewport);
    background.clear([0.1, 0.1, 0.1, 1.0]);
    let countdown = CountdownSpec {
        background: background.snapshot(),
        lines: vec!["Ready".to_string(), "Go!".to_string()],
        frames_per_line: 30,
        next: Box::new(Transition::resume(names::MAIN_MENU).deleting_current()),
    };
    m.apply(Transition::fresh(names::COUNTDOWN, SceneSpec::Countdown(countdown)))
        .unwrap();

    for _ in 0..59 {
        step(&mut m, &FrameInput::default());
    }
    assert_eq!(rendered_texts(&m), ["Ready"]);

    step(&mut m, &FrameInput::default());
    assert_eq!(rendered_texts(&m), ["Go!"]);

    for _ in 60..89 {
        step(&mut m, &FrameInput::default());
    }
    assert_eq!(m.active_name(), names::COUNTDOWN);
    step(&mut m, &FrameInput::default());
    assert_eq!(m.active_name(), names::MAIN_MENU);
    assert_eq!(m.len(), 1);
}

#[test]
fn snake_single_crash_shows_score_screen() {
    let mut m = manager();
    press(&mut m, Key::Digit(2));
    press(&mut m, Key::Digit(1));
    assert_eq!(m.active_kind(), SceneKind::SnakeSingle);
    assert_eq!(m.frame_rate(), 15);

    let right = FrameInput::holding([Key::Right]);
    for _ in 0..40 {
        if m.active_kind() != SceneKind::SnakeSingle {
            break;
        }
        step(&mut m, &right);
    }
    assert_eq!(m.active_name(), names::SNAKE_END);
    assert!(!m.contains(names::SNAKE_SINGLE));
    assert_eq!(m.frame_rate(), 60);
    assert!(rendered_texts(&m).contains(&"LOSER!".to_string()));

    press(&mut m, Key::Enter);
    assert_eq!(m.active_name(), names::SNAKE_MENU);
    assert_eq!(m.names(), vec![names::MAIN_MENU, names::SNAKE_MENU]);
}

#[test]
fn snake_versus_round_replays_then_counts_down() {
    let mut m = manager();
    press(&mut m, Key::Digit(2));
    press(&mut m, Key::Digit(5));
    assert_eq!(m.active_kind(), SceneKind::SnakeDouble);
    assert_eq!(m.frame_rate(), 30);

    // Nobody steers: both snakes reach the side walls on the same tick
    for _ in 0..100 {
        step(&mut m, &FrameInput::default());
        if m.active_kind() == SceneKind::Replay {
            break;
        }
    }
    assert_eq!(m.active_name(), names::REPLAY);
    assert!(m.contains(names::SNAKE_DOUBLE));
    assert_eq!(m.frame_rate(), 30);
    assert!(rendered_texts(&m).contains(&"REPLAY".to_string()));

    for _ in 0..200 {
        step(&mut m, &FrameInput::default());
        if m.active_kind() == SceneKind::Countdown {
            break;
        }
    }
    assert_eq!(m.active_name(), names::COUNTDOWN);
    assert!(!m.contains(names::REPLAY));
    assert!(rendered_texts(&m).contains(&"Round 2".to_string()));

    for _ in 0..90 {
        step(&mut m, &FrameInput::default());
    }
    assert_eq!(m.active_kind(), SceneKind::SnakeDouble);
    assert!(!m.contains(names::COUNTDOWN));
    assert!(rendered_texts(&m).contains(&"P2: 1".to_string()));
}

#[test]
fn snake_versus_match_ends_on_summary() {
    let mut m = manager();
    press(&mut m, Key::Digit(2));
    press(&mut m, Key::Digit(5));

    for _ in 0..2000 {
        step(&mut m, &FrameInput::default());
        if m.active_kind() == SceneKind::SnakeDoubleEnd {
            break;
        }
    }
    assert_eq!(m.active_name(), names::SNAKE_DOUBLE_END);
    assert!(!m.contains(names::SNAKE_DOUBLE));
    assert!(!m.contains(names::REPLAY));
    let texts = rendered_texts(&m);
    assert!(texts.contains(&"Player 2 wins!".to_string()));
    assert!(texts.contains(&"Rounds: 0 - 3".to_string()));
}

#[test]
fn resume_of_unknown_scene_is_rejected() {
    let mut m = manager();
    let err = m.apply(Transition::resume(names::PONG_MATCH)).unwrap_err();
    assert_eq!(
        err,
        SceneError::InvalidTransition {
            target: names::PONG_MATCH.to_string()
        }
    );
    assert_eq!(m.active_name(), names::MAIN_MENU);
    assert_eq!(m.len(), 1);
}

#[test]
fn quit_reaches_the_host() {
    let mut m = manager();
    press(&mut m, Key::Digit(1));
    let quit = FrameInput::with_events([InputEvent::Quit]);
    assert!(matches!(m.tick(&quit), Err(QuitRequested)));
    assert_eq!(m.active_name(), names::PONG_MENU);
}
