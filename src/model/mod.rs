pub mod game;
pub mod schedule;
