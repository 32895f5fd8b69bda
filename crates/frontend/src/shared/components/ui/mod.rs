pub mod decimal_input;
pub mod form_field;
pub mod money_input;
pub mod percent_slider;
pub mod select_field;

pub use decimal_input::DecimalInput;
pub use form_field::{FormField, InfoTip};
pub use money_input::MoneyInput;
pub use percent_slider::PercentSlider;
pub use select_field::SelectField;
