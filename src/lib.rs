// Springboard: a 2D side-scrolling character controller
//
// The simulation core lives in `game`: a character that runs, jumps and gets
// launched by springs, with a motion state machine driving its sprite
// animation. `engine` holds the host-side glue (frame clock, keyboard input).

pub mod core;
pub mod engine;
pub mod game;
