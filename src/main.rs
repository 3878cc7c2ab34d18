//! rShipAudit main entrypoint.

use rshipaudit::run;
use rshipaudit::ui::messages::{error, hint};

fn main() {
    println!();
    if let Err(e) = run() {
        error(&e);
        if e.is_retryable() {
            hint("This looks like a temporary failure: retrying may succeed.");
        }
        std::process::exit(1);
    }
}
