pub mod charts;
pub mod modal;

pub use modal::ResultsModal;
