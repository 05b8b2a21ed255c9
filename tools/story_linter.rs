/// Story Linter — validates story files for authoring mistakes the
/// engine deliberately tolerates at run time.
///
/// Usage: story_linter <story_file_or_dir> [more paths...]

use rustc_hash::FxHashSet;
use std::path::Path;
use std::process;

use storylens::schema::lens::Lens;
use storylens::schema::story::Story;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: story_linter <story_file_or_dir> [more paths...]");
        process::exit(0);
    }

    // Collect stories from every given path
    let mut stories: Vec<(String, Story)> = Vec::new();
    let mut load_errors = 0;

    for arg in &args[1..] {
        let path = Path::new(arg);
        if path.is_file() {
            load_story(path, &mut stories, &mut load_errors);
        } else if path.is_dir() {
            load_stories_recursive(path, &mut stories, &mut load_errors);
        } else {
            eprintln!("ERROR: Path '{}' does not exist", arg);
            process::exit(1);
        }
    }

    println!("Loaded {} stories", stories.len());

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for (name, story) in &stories {
        lint_story(name, story, &mut errors, &mut warnings);
    }

    println!("\n=== Story Lint Report ===\n");

    if load_errors == 0 && errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len() + load_errors,
        warnings.len()
    );

    if errors.is_empty() && load_errors == 0 {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn load_story(path: &Path, stories: &mut Vec<(String, Story)>, load_errors: &mut usize) {
    match Story::load_from_ron(path) {
        Ok(story) => {
            println!("  Loaded: {}", path.display());
            stories.push((path.display().to_string(), story));
        }
        Err(e) => {
            eprintln!("  ERROR loading {}: {}", path.display(), e);
            *load_errors += 1;
        }
    }
}

fn load_stories_recursive(dir: &Path, stories: &mut Vec<(String, Story)>, load_errors: &mut usize) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                load_stories_recursive(&path, stories, load_errors);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                load_story(&path, stories, load_errors);
            }
        }
    }
}

fn lint_story(name: &str, story: &Story, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    // Duplicate node ids
    let mut seen_nodes: FxHashSet<&str> = FxHashSet::default();
    for node in &story.nodes {
        if !seen_nodes.insert(node.id.as_str()) {
            errors.push(format!("{}: duplicate node id '{}'", name, node.id));
        }
    }

    // Start node must exist
    if story.node(&story.start).is_none() {
        errors.push(format!(
            "{}: start node '{}' not found in nodes",
            name, story.start
        ));
    }

    for node in &story.nodes {
        if node.text.base.trim().is_empty() {
            warnings.push(format!("{}: node '{}' has empty base text", name, node.id));
        }

        // Lens coverage: purely informational, base is always enough
        let has_variant = Lens::ALL
            .iter()
            .any(|&l| l != Lens::Base && node.text.variant(l).is_some());
        if !has_variant {
            warnings.push(format!(
                "{}: node '{}' has no lens variants beyond base",
                name, node.id
            ));
        }

        // Choice ids are unique per node, targets must resolve
        let mut seen_choices: FxHashSet<&str> = FxHashSet::default();
        for choice in &node.choices {
            if !seen_choices.insert(choice.id.as_str()) {
                errors.push(format!(
                    "{}: node '{}' has duplicate choice id '{}'",
                    name, node.id, choice.id
                ));
            }
            if choice.label.trim().is_empty() {
                warnings.push(format!(
                    "{}: choice '{}' on node '{}' has an empty label",
                    name, choice.id, node.id
                ));
            }
            if story.node(&choice.to).is_none() {
                errors.push(format!(
                    "{}: choice '{}' on node '{}' targets non-existent node '{}'",
                    name, choice.id, node.id, choice.to
                ));
            }
        }
    }

    // Reachability from the start node
    let mut reachable: FxHashSet<&str> = FxHashSet::default();
    let mut worklist = vec![story.start.as_str()];
    while let Some(id) = worklist.pop() {
        if !reachable.insert(id) {
            continue;
        }
        if let Some(node) = story.nodes.iter().find(|n| n.id.as_str() == id) {
            for choice in &node.choices {
                worklist.push(choice.to.as_str());
            }
        }
    }
    for node in &story.nodes {
        if !reachable.contains(node.id.as_str()) {
            warnings.push(format!(
                "{}: node '{}' is unreachable from start",
                name, node.id
            ));
        }
    }
}
