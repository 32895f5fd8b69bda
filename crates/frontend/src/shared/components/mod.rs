pub mod animated_number;
pub mod ui;

pub use animated_number::AnimatedNumber;
