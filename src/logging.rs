/// Crate prefix the console logger is scoped to.
const LOG_TARGET_PREFIX: &str = "newsdesk_ui";

/// Route `log` records to the browser console.
///
/// Panics are routed there too, so a crash in a view shows its message instead of
/// an opaque `unreachable` trap.
pub fn setup_logging(level: log::Level) {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(level).module_prefix(LOG_TARGET_PREFIX));

    log::info!("Logging initialized at level {level}");
}
