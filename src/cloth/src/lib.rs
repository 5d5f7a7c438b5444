pub mod cloth;
pub mod config;
pub mod constraint;
pub mod error;
pub mod lifecycle;
pub mod particle;
pub mod pointer;
pub mod posbox;
pub mod simulation;
pub mod time_manager;

pub type V2 = nalgebra::Vector2<f32>;
