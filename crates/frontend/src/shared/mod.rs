pub mod components;
pub mod export;
pub mod icons;
pub mod modal_frame;
pub mod number_format;
