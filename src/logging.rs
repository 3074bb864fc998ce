use tracing::Level;

/// Installs a stderr subscriber for the calculator's debug events.
///
/// Nothing is installed unless tracing was requested, so the default
/// run only ever writes the result line.
pub fn init(enable_tracing: bool) {
    if !enable_tracing {
        return;
    }
    // Ignore the result, it only fails if a subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .try_init();
}
