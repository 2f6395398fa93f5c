//! Scene catalog
//!
//! Every concrete scene plus `build`, the constructor dispatch table the
//! manager uses for `SceneSpec` payloads.

pub mod countdown;
pub mod menu;
pub mod pong;
pub mod replay;
pub mod snake;

pub use countdown::Countdown;
pub use menu::{Menu, MenuAction};
pub use pong::PongMatch;
pub use replay::Replay;
pub use snake::{SnakeDouble, SnakeSingle};

use crate::scene::{Scene, SceneContext, SceneSpec};

/// Construct the scene described by `spec`
pub fn build(spec: SceneSpec, ctx: &mut SceneContext) -> Box<dyn Scene> {
    match spec {
        SceneSpec::MainMenu => Box::new(Menu::main(ctx.viewport)),
        SceneSpec::PongMenu => Box::new(Menu::pong(ctx.viewport)),
        SceneSpec::SnakeMenu => Box::new(Menu::snake(ctx.viewport)),
        SceneSpec::PongMatch => Box::new(PongMatch::new(ctx)),
        SceneSpec::PongEnd { left, right } => Box::new(Menu::pong_end(left, right)),
        SceneSpec::SnakeSingle { speed } => Box::new(SnakeSingle::new(speed, ctx)),
        SceneSpec::SnakeEnd { score } => Box::new(Menu::snake_end(score)),
        SceneSpec::SnakeDouble { speed } => Box::new(SnakeDouble::new(speed, ctx)),
        SceneSpec::SnakeDoubleEnd { wins } => Box::new(Menu::snake_versus_end(wins)),
        SceneSpec::Countdown(spec) => Box::new(Countdown::new(spec)),
        SceneSpec::Replay(spec) => Box::new(Replay::new(spec)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Image;
    use crate::scene::{CountdownSpec, ReplaySpec, SceneKind, Transition, names};
    use crate::settings::{Settings, SnakeSpeed};
    use crate::sim::ReplayBuffer;
    use glam::Vec2;

    #[test]
    fn test_build_matches_spec_kind() {
        let mut ctx = SceneContext::new(Settings {
            seed: Some(5),
            ..Default::default()
        });
        let next = Box::new(Transition::resume(names::MAIN_MENU));
        let specs = vec![
            SceneSpec::MainMenu,
            SceneSpec::PongMenu,
            SceneSpec::SnakeMenu,
            SceneSpec::PongMatch,
            SceneSpec::PongEnd { left: 1, right: 2 },
            SceneSpec::SnakeSingle {
                speed: SnakeSpeed::Fast,
            },
            SceneSpec::SnakeEnd { score: 4 },
            SceneSpec::SnakeDouble {
                speed: SnakeSpeed::Slow,
            },
            SceneSpec::SnakeDoubleEnd { wins: [3, 0] },
            SceneSpec::Countdown(CountdownSpec {
                background: Image::new(Vec2::ONE, [0.0; 4], Vec::new()),
                lines: vec!["Go!".to_string()],
                frames_per_line: 5,
                next: next.clone(),
            }),
            SceneSpec::Replay(ReplaySpec {
                buffer: ReplayBuffer::default(),
                frame_rate: 15,
                next,
            }),
        ];

        for spec in specs {
            let kind = spec.kind();
            let scene = build(spec, &mut ctx);
            assert_eq!(scene.kind(), kind);
        }
        let fast = SceneSpec::SnakeSingle {
            speed: SnakeSpeed::Fast,
        };
        assert_eq!(build(fast, &mut ctx).frame_rate(), 70);
        assert_eq!(build(SceneSpec::MainMenu, &mut ctx).kind(), SceneKind::MainMenu);
    }
}
