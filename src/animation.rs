pub mod ease;
pub mod looping;
pub mod tween;
