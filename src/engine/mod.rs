// Engine modules: frame clock, input

pub mod game_loop;
pub mod input;
