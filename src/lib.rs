//! Cluedo AI - decision core for computer-controlled Cluedo players

pub mod ai;
pub mod board;
pub mod cards;
pub mod core;
pub mod game;
