mod reporter;

pub use reporter::{format_accuracy, format_analog_data, format_analogs};
