//! Game entities
//!
//! Pure state plus draw calls. Nothing here knows about scenes, input or the
//! display; scenes own these and move them one tick at a time.

pub mod pong;
pub mod replay;
pub mod snake;

pub use pong::{Ball, MAX_BOUNCE_ANGLE, Paddle, Side, Wall, bounce_angle};
pub use replay::{REPLAY_CAPACITY, ReplayBuffer};
pub use snake::{BLOCK_SIZE, Food, Grid, Heading, Snake};
