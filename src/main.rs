//! comet binary entry point.
//!
//! Thin shell: resolve the config path, run the application, render the
//! outcome (stdout on success, stderr otherwise), and exit with its code.

use comet::cli::{commands, Application, ExitCode};
use comet::config;
use comet::ui::MarkupText;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(run(&args));
}

fn run(args: &[String]) -> i32 {
    let config_path = match config::default_path() {
        Ok(path) => path,
        Err(err) => return fail(&err.to_string()),
    };

    let app = Application::new(commands::builtin(config_path));
    match app.run(args) {
        Ok(outcome) => {
            let rendered = outcome.message.render();
            if !rendered.is_empty() {
                if outcome.exit_code == ExitCode::Success {
                    println!("{}", rendered);
                } else {
                    eprintln!("{}", rendered);
                }
            }
            outcome.exit_code.code()
        }
        Err(err) => fail(&format!("{:#}", err)),
    }
}

fn fail(message: &str) -> i32 {
    eprintln!(
        "{}",
        MarkupText::new(format!("<error>{}</error>", message)).render()
    );
    ExitCode::Error.code()
}
