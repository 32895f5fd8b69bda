pub mod delivery;
pub mod results;
pub mod view;
pub mod view_model;

pub use view::CalculatorPage;
