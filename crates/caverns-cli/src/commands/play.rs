use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::debug;

use caverns_engine::engine::QUIT_LINE;
use caverns_engine::{Engine, EngineConfig};

pub fn run(config: EngineConfig) -> Result<(), String> {
    debug!(?config, "starting session");
    let mut engine = Engine::new(config);

    println!("  {} the caverns", "Entering".bold());
    println!("  Type 'quit' to leave.\n");
    for line in engine.render_look() {
        println!("{line}");
    }
    println!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while engine.is_alive() {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let output = engine.process_turn(line.trim_end_matches(['\r', '\n']));
        let ended = !engine.is_alive();
        for text in output {
            if ended && text != QUIT_LINE {
                println!("{}", text.red().bold());
            } else {
                println!("{text}");
            }
        }
        println!();
    }

    println!("  {}", moves_played(engine.state().moves()).dimmed());
    Ok(())
}

fn moves_played(moves: u32) -> String {
    let noun = if moves == 1 { "move" } else { "moves" };
    format!("{moves} {noun} played")
}
