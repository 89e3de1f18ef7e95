use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as ReplResult};

use reckon::{evaluate, render, Context};

fn main() -> ReplResult<()> {
    let mut base = 10;
    let mut interactive = true;
    for arg in std::env::args().skip(1) {
        if !arg.starts_with('-') {
            continue;
        }
        match arg.as_bytes().get(1).copied() {
            Some(b'x') => base = 16,
            Some(b'b') => base = 2,
            Some(b'o') => base = 8,
            Some(b'i') => interactive = false,
            _ => {
                usage();
                return Ok(());
            }
        }
    }

    let mut context = Context::new();
    if interactive {
        run_repl(&mut context, base)
    } else {
        run_batch(&mut context, base)
    }
}

fn usage() {
    println!("usage: reckon [-x|-o|-b|-i]");
}

/// Prompt for expressions until an empty line, Ctrl-C or Ctrl-D. One
/// context lives for the whole session, so variables persist between
/// lines.
fn run_repl(context: &mut Context, base: u32) -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.is_empty() {
                    break;
                }
                rl.add_history_entry(line.as_str())?;
                let outcome = evaluate(&line, context);
                println!("{}", render(&outcome, base));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Evaluate a single line taken from stdin
fn run_batch(context: &mut Context, base: u32) -> ReplResult<()> {
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
    if line.is_empty() {
        return Ok(());
    }
    let outcome = evaluate(line, context);
    println!("{}", render(&outcome, base));
    Ok(())
}
