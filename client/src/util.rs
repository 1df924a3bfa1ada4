use web_sys::Window;

/// `?debug=1` (or `?log=1`) turns on console logging.
pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1")
        || search.contains("debug=true")
        || search.contains("log=1")
        || search.contains("log=true")
}

pub fn debug_log(enabled: bool, message: &str) {
    if enabled {
        web_sys::console::log_1(&message.into());
    }
}

pub fn error_log(message: &str) {
    web_sys::console::error_1(&message.into());
}
