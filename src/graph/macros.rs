/// Runs a block and reports how long it took as a `tracing` event.
///
/// The plain form also announces the block before it starts; `at once` only
/// reports when it is done.
#[macro_export]
macro_rules! time_it {
    ($comment:literal => $stmt:stmt) => {{
        $crate::time_it!(concat!($comment, "") => {$stmt})
    }};
    (at once | $comment:literal => $stmt:stmt) => {{
        $crate::time_it!(at once | concat!($comment, "") => {$stmt})
    }};
    ($comment:expr => $stmt:stmt) => {{
        ::tracing::info!("{}", $comment);
        let start = std::time::Instant::now();
        let result = { $stmt };
        ::tracing::info!(elapsed = ?start.elapsed(), "{} done", $comment);
        result
    }};
    (at once | $comment:expr => $stmt:stmt) => {{
        let start = std::time::Instant::now();
        let result = { $stmt };
        ::tracing::info!(elapsed = ?start.elapsed(), "{}", $comment);
        result
    }};
}
