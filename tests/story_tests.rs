/// Shipped story data tests — the echo chamber must hold every
/// invariant the linter enforces, and play through end to end.

use rustc_hash::FxHashSet;
use storylens::core::session::Session;
use storylens::schema::lens::Lens;
use storylens::schema::node::NodeId;
use storylens::schema::story::Story;

fn echo_chamber() -> Story {
    let path = std::path::Path::new("story_data/echo_chamber.ron");
    Story::load_from_ron(path).unwrap()
}

#[test]
fn echo_chamber_loads() {
    let story = echo_chamber();
    assert_eq!(story.title, "The Echo Chamber");
    assert!(story.nodes.len() >= 7);
    assert!(story.node(&story.start).is_some());
}

#[test]
fn node_ids_are_unique() {
    let story = echo_chamber();
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for node in &story.nodes {
        assert!(seen.insert(node.id.as_str()), "duplicate node id: {}", node.id);
    }
}

#[test]
fn all_choice_targets_resolve() {
    let story = echo_chamber();
    for node in &story.nodes {
        for choice in &node.choices {
            assert!(
                story.node(&choice.to).is_some(),
                "choice '{}' on node '{}' targets missing node '{}'",
                choice.id,
                node.id,
                choice.to
            );
        }
    }
}

#[test]
fn choice_ids_are_unique_per_node() {
    let story = echo_chamber();
    for node in &story.nodes {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for choice in &node.choices {
            assert!(
                seen.insert(choice.id.as_str()),
                "duplicate choice id '{}' on node '{}'",
                choice.id,
                node.id
            );
        }
    }
}

#[test]
fn every_node_has_base_text_and_a_label_per_choice() {
    let story = echo_chamber();
    for node in &story.nodes {
        assert!(
            !node.text.base.trim().is_empty(),
            "node '{}' has empty base text",
            node.id
        );
        for choice in &node.choices {
            assert!(
                !choice.label.trim().is_empty(),
                "choice '{}' on node '{}' has an empty label",
                choice.id,
                node.id
            );
        }
    }
}

#[test]
fn every_node_is_reachable_from_start() {
    let story = echo_chamber();
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
        assert!(
            reachable.contains(node.id.as_str()),
            "node '{}' is unreachable from start",
            node.id
        );
    }
}

#[test]
fn the_story_has_endings() {
    let story = echo_chamber();
    let dead_ends = story.nodes.iter().filter(|n| n.is_dead_end()).count();
    assert!(dead_ends >= 2, "expected at least two ending nodes");
}

#[test]
fn several_nodes_carry_lens_variants() {
    let story = echo_chamber();
    let with_variants = story
        .nodes
        .iter()
        .filter(|n| {
            n.text.variant(Lens::Narrator).is_some() || n.text.variant(Lens::Observer).is_some()
        })
        .count();
    assert!(with_variants >= 3);
}

#[test]
fn full_playthrough_to_the_clear_ending() {
    let mut session = Session::new(echo_chamber());
    assert_eq!(session.state().node_id, NodeId::from("start"));

    for choice_id in ["descend", "press_on", "face", "cross"] {
        let outcome = session.choose(choice_id).unwrap();
        assert!(outcome.advanced(), "choice '{}' should advance", choice_id);
    }

    let state = session.state();
    assert_eq!(state.node_id, NodeId::from("ending_clear"));
    assert_eq!(state.vars.get("mut"), 4.0);
    assert_eq!(state.vars.get("klarheit"), 4.0);
    assert!(!state.vars.contains("echo"));

    assert_eq!(state.log.len(), 4);
    assert_eq!(state.log[0], "Choice: Descend the stairs");
    assert_eq!(state.log[3], "Choice: Step through");

    assert!(session.current_node().unwrap().is_dead_end());
}

#[test]
fn the_gallery_path_introduces_echo() {
    let mut session = Session::new(echo_chamber());
    session.choose("listen").unwrap();
    assert!(!session.state().vars.contains("echo"));

    session.choose("answer").unwrap();
    assert_eq!(session.state().vars.get("echo"), 2.0);
    assert_eq!(session.state().node_id, NodeId::from("corridor"));
}
