//! Interactive loop: paste a fragment, extract, reformat, copy.
//!
//! HTML lines are buffered until a line containing only `.` submits them
//! for extraction (Ctrl-D submits any remaining buffer and exits).
//! Commands start with `:`.

use std::io::{self, BufRead, Write};

use event_harvest::notify::{Flash, FLASH_DURATION};
use event_harvest::session::Session;
use event_harvest::Options;

const BANNER: &str = "\
event-harvest interactive mode
Paste an HTML fragment, then submit it with a lone `.` line.
Commands: :join  :copy  :show  :quit";

fn main() -> io::Result<()> {
    println!("{BANNER}");

    let mut session = Session::new(Options::default());
    let mut flash = Flash::new();
    let mut buffer: Vec<String> = Vec::new();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}", if buffer.is_empty() { "> " } else { "| " });
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF submits whatever is buffered
            if !buffer.is_empty() {
                submit(&mut session, &mut buffer);
            }
            break;
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);

        if buffer.is_empty() && trimmed.starts_with(':') {
            if !handle_command(trimmed, &mut session, &mut flash) {
                break;
            }
            continue;
        }

        if trimmed.trim() == "." {
            submit(&mut session, &mut buffer);
            continue;
        }

        buffer.push(trimmed.to_string());
    }

    Ok(())
}

fn submit(session: &mut Session, buffer: &mut Vec<String>) {
    let html = buffer.join("\n");
    buffer.clear();
    match session.extract(&html) {
        Ok(_) => println!("{}", session.display_text()),
        Err(err) => eprintln!("{err}"),
    }
}

/// Returns false when the loop should exit.
fn handle_command(command: &str, session: &mut Session, flash: &mut Flash) -> bool {
    match command {
        ":quit" | ":q" => return false,
        ":show" => println!("{}", session.display_text()),
        ":join" => match session.reformat() {
            Ok(()) => println!("{}", session.display_text()),
            Err(err) => eprintln!("{err}"),
        },
        ":copy" => copy_output(session, flash),
        _ => eprintln!("unknown command: {command}"),
    }
    true
}

#[cfg(feature = "clipboard")]
fn copy_output(session: &Session, flash: &mut Flash) {
    let text = match session.exportable_text() {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    match event_harvest::clipboard::copy(&text) {
        Ok(()) => {
            println!("Copied to clipboard.");
            // Best-effort erase of the status line once the flash expires;
            // a prompt that has scrolled past is left alone.
            flash.schedule(FLASH_DURATION, || {
                print!("\x1b[1A\x1b[2K\r");
                let _ = io::stdout().flush();
            });
        }
        Err(err) => eprintln!("{err}"),
    }
}

#[cfg(not(feature = "clipboard"))]
fn copy_output(_session: &Session, _flash: &mut Flash) {
    eprintln!("clipboard support not compiled in");
}
