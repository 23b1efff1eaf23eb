pub mod modal;
pub mod spinner;
pub mod universities;
