//! legcal main entrypoint.

use legcal::run;

fn main() {
    if let Err(e) = run() {
        legcal::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
