/// Play — interactive shell for walking a story.
///
/// Usage: play --story <path> [--lens <name>] [--seed <n>]
///
/// Commands:
///   look            — show the current node through the active lens
///   choices         — list choices on the current node
///   choose <id>     — take a choice by id (a bare number also works)
///   lens <name>     — switch lens (base, narrator, observer)
///   vars            — show the variable bag
///   log             — show the event log
///   wander <n>      — take n random choices (seeded)
///   seed <n>        — set the RNG seed for wander
///   restart         — back to the start node
///   help            — list commands
///   quit            — exit

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::Path;

use storylens::core::session::Session;
use storylens::core::stepper::StepOutcome;
use storylens::schema::lens::Lens;
use storylens::schema::story::Story;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut story_path = None;
    let mut lens = Lens::Base;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--story" if i + 1 < args.len() => {
                i += 1;
                story_path = Some(args[i].clone());
            }
            "--lens" if i + 1 < args.len() => {
                i += 1;
                match Lens::from_name(&args[i]) {
                    Some(l) => lens = l,
                    None => {
                        eprintln!("Unknown lens: {}", args[i]);
                        std::process::exit(1);
                    }
                }
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(story_path) = story_path else {
        eprintln!("Missing required --story <path>");
        print_usage();
        std::process::exit(1);
    };

    let story = match Story::load_from_ron(Path::new(&story_path)) {
        Ok(story) => story,
        Err(e) => {
            eprintln!("ERROR loading story {}: {}", story_path, e);
            std::process::exit(1);
        }
    };

    let title = if story.title.is_empty() {
        story_path.clone()
    } else {
        story.title.clone()
    };
    println!("Loaded '{}' ({} nodes)", title, story.nodes.len());
    println!("Seed: {}", seed);
    println!("Type 'help' for commands.\n");

    let mut session = Session::new(story);
    let mut current_seed = seed;

    show_node(&session, lens);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("play> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "look" | "l" => {
                show_node(&session, lens);
            }
            "choices" | "c" => {
                show_choices(&session);
            }
            "choose" => {
                if parts.len() < 2 {
                    println!("Usage: choose <id>");
                    continue;
                }
                take_choice(&mut session, parts[1], lens);
            }
            "lens" => {
                if parts.len() < 2 {
                    println!("Current lens: {}", lens.name());
                    println!("Available: base, narrator, observer");
                    continue;
                }
                match Lens::from_name(parts[1]) {
                    Some(l) => {
                        lens = l;
                        println!("Lens set to {}.", lens.name());
                        show_node(&session, lens);
                    }
                    None => {
                        println!("Unknown lens: {}. Available: base, narrator, observer", parts[1]);
                    }
                }
            }
            "vars" | "v" => {
                let mut vars: Vec<(&str, f64)> = session.state().vars.iter().collect();
                vars.sort_by(|a, b| a.0.cmp(b.0));
                for (name, value) in vars {
                    println!("  {} = {}", name, value);
                }
            }
            "log" => {
                let log = &session.state().log;
                if log.is_empty() {
                    println!("  (empty)");
                }
                for entry in log {
                    println!("  {}", entry);
                }
            }
            "wander" => {
                if parts.len() < 2 {
                    println!("Usage: wander <n>");
                    continue;
                }
                let count: usize = match parts[1].parse() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        println!("Invalid count: {}", parts[1]);
                        continue;
                    }
                };
                wander(&mut session, count, current_seed);
                show_node(&session, lens);
            }
            "seed" => {
                if parts.len() < 2 {
                    println!("Current seed: {}", current_seed);
                    continue;
                }
                match parts[1].parse::<u64>() {
                    Ok(s) => {
                        current_seed = s;
                        println!("Seed set to {}", current_seed);
                    }
                    Err(_) => {
                        println!("Invalid seed: {}", parts[1]);
                    }
                }
            }
            "restart" => {
                session.restart();
                println!("Back to the start.\n");
                show_node(&session, lens);
            }
            _ => {
                // A bare number picks a choice by position
                if let Ok(index) = cmd.parse::<usize>() {
                    let id = match session.choices() {
                        Ok(choices) if index >= 1 && index <= choices.len() => {
                            Some(choices[index - 1].id.as_str().to_string())
                        }
                        Ok(_) => {
                            println!("No choice number {}.", index);
                            None
                        }
                        Err(e) => {
                            println!("ERROR: {}", e);
                            None
                        }
                    };
                    if let Some(id) = id {
                        take_choice(&mut session, &id, lens);
                    }
                } else {
                    println!("Unknown command: '{}'. Type 'help' for available commands.", cmd);
                }
            }
        }
    }
}

fn print_usage() {
    println!("Play — interactive shell for walking a story.");
    println!();
    println!("Usage: play --story <path> [--lens <name>] [--seed <n>]");
    println!();
    println!("  --story <path>  Path to a RON story file");
    println!("  --lens <name>   Starting lens: base, narrator, observer (default: base)");
    println!("  --seed <n>      RNG seed for 'wander' (default: 42)");
}

fn print_help() {
    println!("Commands:");
    println!("  look            Show the current node through the active lens");
    println!("  choices         List choices on the current node");
    println!("  choose <id>     Take a choice by id (a bare number also works)");
    println!("  lens <name>     Switch lens (base, narrator, observer)");
    println!("  vars            Show the variable bag");
    println!("  log             Show the event log");
    println!("  wander <n>      Take n random choices (seeded)");
    println!("  seed <n>        Set the RNG seed for wander");
    println!("  restart         Back to the start node");
    println!("  help            Show this help");
    println!("  quit            Exit");
}

fn show_node(session: &Session, lens: Lens) {
    match session.current_node() {
        Ok(node) => {
            println!("--- {} ---", node.title);
            println!("{}", node.text.get(lens));
            println!();
            if node.is_dead_end() {
                println!("(The story ends here. 'restart' to play again.)");
            } else {
                show_choices(session);
            }
        }
        Err(e) => println!("ERROR: {}", e),
    }
}

fn show_choices(session: &Session) {
    match session.choices() {
        Ok(choices) => {
            for (i, choice) in choices.iter().enumerate() {
                println!("  {}. [{}] {}", i + 1, choice.id, choice.label);
            }
        }
        Err(e) => println!("ERROR: {}", e),
    }
}

fn take_choice(session: &mut Session, id: &str, lens: Lens) {
    match session.choose(id) {
        Ok(StepOutcome::Advanced(_)) => {
            show_node(session, lens);
        }
        Ok(StepOutcome::MissingTarget { to, .. }) => {
            println!("That choice leads nowhere (missing node '{}'). Nothing happens.", to);
        }
        Err(e) => println!("ERROR: {}", e),
    }
}

fn wander(session: &mut Session, count: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for step in 0..count {
        let id = match session.choices() {
            Ok(choices) => match choices.choose(&mut rng) {
                Some(choice) => choice.id.as_str().to_string(),
                None => {
                    println!("Reached a dead end after {} steps.", step);
                    return;
                }
            },
            Err(e) => {
                println!("ERROR: {}", e);
                return;
            }
        };
        match session.choose(&id) {
            Ok(StepOutcome::Advanced(state)) => {
                println!(
                    "  {} -> {}",
                    state.log.last().map(String::as_str).unwrap_or(""),
                    state.node_id
                );
            }
            Ok(StepOutcome::MissingTarget { to, .. }) => {
                println!("  (choice '{}' dangles to '{}', skipped)", id, to);
            }
            Err(e) => {
                println!("ERROR: {}", e);
                return;
            }
        }
    }
}
