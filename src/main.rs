//! rTimesheets main entrypoint.

use rtimesheets::run;
use rtimesheets::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
