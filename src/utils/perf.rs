/// Times `$block` and logs a warning when it runs longer than `$limit_micros`
/// (500 = 0.5ms). Off unless `config::LOG_PERFORMANCE` is set; the block's value is
/// returned either way.
#[macro_export]
macro_rules! trace_time {
    ($label:expr, $limit_micros:expr, $block:block) => {{
        if $crate::config::LOG_PERFORMANCE {
            let started = std::time::Instant::now();
            let value = $block;
            let took_micros = started.elapsed().as_micros();
            if took_micros > $limit_micros {
                log::warn!(
                    "⏱ {} ran {:.1}ms, over its {:.1}ms budget ({} build)",
                    $label,
                    took_micros as f64 / 1000.0,
                    $limit_micros as f64 / 1000.0,
                    if cfg!(debug_assertions) { "debug" } else { "release" }
                );
            }
            value
        } else {
            $block
        }
    }};
}
