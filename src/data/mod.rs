mod loader;

pub use loader::{load_series, load_signal_store, load_snowfall, series_from_str_keyed};
