use {
    clap::Parser,
    snow_analog::{Cli, config::log_levels, run},
    std::panic,
};

fn main() -> anyhow::Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = log_levels(cfg!(debug_assertions));

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("snow_analog"), my_code_level)
        .parse_default_env() // RUST_LOG still wins
        .init();

    let args = Cli::parse();

    run(args)
}
