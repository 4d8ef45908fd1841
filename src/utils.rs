use std::thread::sleep;
use std::time::{Duration, Instant};
use tinyfiledialogs::{message_box_ok, MessageBoxIcon};

pub fn wait_for(what: impl Fn() -> bool, timeout: Duration, check_period: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        let start_check = Instant::now();
        if what() {
            return true;
        }
        let end_check = Instant::now();
        if end_check > deadline {
            return false;
        }
        sleep_remaining(start_check, check_period);
    }
}

/// Sleeps until `period` has passed since `started`.
pub fn sleep_remaining(started: Instant, period: Duration) {
    let elapsed = started.elapsed();
    if elapsed < period {
        sleep(period - elapsed);
    }
}

pub fn show_error_message(title: &str, message: &str) {
    message_box_ok(title, message, MessageBoxIcon::Error);
}
