//! shcw main entrypoint.

use shcw::run;
use shcw::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
