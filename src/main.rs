use assign_calc::logging::init_tracing;
use assign_calc::session::BANNER;
use assign_calc::{Flow, Session};

use rustyline::error::ReadlineError;

fn finish(session: &Session, flow: Flow) {
    match flow {
        Flow::quit => println!("Quitting program"),
        _ => println!("{}", session.report()),
    }
}

fn run_script(path: &str, session: &mut Session) {
    let script = match std::fs::read_to_string(path) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Error: could not read '{}', {}", path, e);
            return;
        }
    };

    let mut stderr = std::io::stderr();
    for line in script.lines() {
        match session.feed(line, &mut stderr) {
            Ok(Flow::proceed) => continue,
            Ok(flow) => return finish(session, flow),
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        }
    }
    // running off the end of a script acts like `run`
    finish(session, Flow::report);
}

fn run_interactive(session: &mut Session) {
    let mut rl = match rustyline::DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            return;
        }
    };

    let mut stderr = std::io::stderr();
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match session.feed(&line, &mut stderr) {
                    Ok(Flow::proceed) => {},
                    Ok(flow) => return finish(session, flow),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                return finish(session, Flow::quit)
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                return;
            }
        }
    }
}

fn main() {
    init_tracing();

    let mut session = Session::new();
    match std::env::args().nth(1) {
        Some(path) => run_script(&path, &mut session),
        None => {
            println!("{}", BANNER);
            run_interactive(&mut session);
        }
    }
}
