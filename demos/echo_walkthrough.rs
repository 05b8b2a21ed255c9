/// Echo Walkthrough example — plays a fixed path through the shipped story.
///
/// Each scene is shown through a different lens in rotation, and the
/// final run state is dumped at the end.
///
/// Run with: cargo run --example echo_walkthrough

use storylens::core::session::Session;
use storylens::schema::lens::Lens;
use storylens::schema::story::Story;

fn main() {
    let story = Story::load_from_ron(std::path::Path::new("story_data/echo_chamber.ron"))
        .expect("Failed to load echo chamber story");

    let mut session = Session::new(story);

    println!("========================================");
    println!("   THE ECHO CHAMBER");
    println!("   A Walkthrough in Five Scenes");
    println!("========================================");
    println!();

    // Landing -> corridor -> mirror hall -> threshold -> out
    let path = ["descend", "press_on", "face", "cross"];

    let mut scene = 1;
    print_scene(scene, &session, Lens::ALL[(scene - 1) % Lens::ALL.len()]);

    for choice_id in path {
        let label = session
            .current_node()
            .expect("current node should exist")
            .choice(choice_id)
            .expect("scripted choice should exist")
            .label
            .clone();
        println!("   > {}", label);
        println!();

        let outcome = session.choose(choice_id).expect("scripted choice should resolve");
        assert!(outcome.advanced(), "scripted path should never dangle");

        scene += 1;
        print_scene(scene, &session, Lens::ALL[(scene - 1) % Lens::ALL.len()]);
    }

    println!("========================================");
    println!("   FINAL STATE");
    println!("========================================");
    let state = session.state();
    println!("Node: {}", state.node_id);

    let mut vars: Vec<(&str, f64)> = state.vars.iter().collect();
    vars.sort_by(|a, b| a.0.cmp(b.0));
    for (name, value) in vars {
        println!("  {} = {}", name, value);
    }

    println!("Log:");
    for entry in &state.log {
        println!("  {}", entry);
    }
}

fn print_scene(number: usize, session: &Session, lens: Lens) {
    let node = session.current_node().expect("current node should exist");
    println!("--- Scene {}: {} [lens: {}] ---", number, node.title, lens.name());
    println!();
    println!("{}", node.text.get(lens));
    println!();
}
