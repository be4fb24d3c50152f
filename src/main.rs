//! slvm main entrypoint.

use slvm::run;
use slvm::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
