// ABOUTME: REPL driver - reads one line, evaluates it, prints the result; repeats

use crate::config;
use crate::env::Environment;
use crate::eval::eval;
use crate::primitives;
use crate::reader::read;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::rc::Rc;

/// Runs the read-eval-print loop until EOF (Ctrl-D) or Ctrl-C.
///
/// Each turn is `prompt -> read line -> parse -> eval -> print`, exactly
/// per spec.md §6: `[In N]: ` then `[Out N]: <value>`, `N` incrementing
/// from 0 on every turn regardless of whether it errored. A reader or
/// evaluator error prints a single diagnostic line and returns to the
/// prompt; it never aborts the process (spec.md §7).
pub fn run() -> std::io::Result<()> {
    println!("{}", config::BANNER);
    println!("{}", config::BANNER_SUBTITLE);

    let env = Environment::global();
    primitives::register(&env);

    let mut editor = DefaultEditor::new().map_err(to_io_error)?;
    let mut turn: u64 = 0;

    loop {
        let prompt = format!("{}{}{}", config::PROMPT_PREFIX, turn, config::PROMPT_SUFFIX);
        match editor.readline(&prompt) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                run_turn(&line, turn, &env);
                turn += 1;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: terminate by external signal, per spec.md §6.
                return Ok(());
            }
            Err(ReadlineError::Eof) => {
                // EOF: clean exit, code 0.
                return Ok(());
            }
            Err(e) => return Err(to_io_error(e)),
        }
    }
}

fn run_turn(line: &str, turn: u64, env: &Rc<Environment>) {
    let result: Result<_, crate::error::ReplError> = read(line)
        .map_err(Into::into)
        .and_then(|expr| eval(expr, env.clone()).map_err(Into::into));
    match result {
        Ok(value) => {
            println!("{}{}{}{}", config::OUTPUT_PREFIX, turn, config::OUTPUT_SUFFIX, value)
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn to_io_error(e: impl std::error::Error + Send + Sync + 'static) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e)
}
