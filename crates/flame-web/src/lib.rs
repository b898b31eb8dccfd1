pub mod runner;

pub use runner::GameRunner;

/// Install the panic hook and route `log` to the browser console.
/// Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Days since 1970-01-01 on the host's local calendar.
///
/// Reads the JS clock, so only call this from inside the browser.
pub fn local_day_number() -> i64 {
    let now = js_sys::Date::new_0();
    let offset_minutes = now.get_timezone_offset();
    let local_ms = now.get_time() - offset_minutes * 60_000.0;
    day_number_from_local_ms(local_ms)
}

/// Floor-divide local milliseconds into whole days.
pub fn day_number_from_local_ms(local_ms: f64) -> i64 {
    (local_ms / 86_400_000.0).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_number_floors_toward_negative_infinity() {
        assert_eq!(day_number_from_local_ms(0.0), 0);
        assert_eq!(day_number_from_local_ms(86_399_999.0), 0);
        assert_eq!(day_number_from_local_ms(86_400_000.0), 1);
        assert_eq!(day_number_from_local_ms(-1.0), -1);
    }
}
