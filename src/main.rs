//! rWeekhours main entrypoint.

use rweekhours::run;
use rweekhours::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
