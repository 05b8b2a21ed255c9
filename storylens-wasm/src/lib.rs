//! WASM bindings for storylens — powers the interactive web demo.

use wasm_bindgen::prelude::*;

use storylens::core::session::Session;
use storylens::core::stepper::StepOutcome;
use storylens::schema::lens::Lens;
use storylens::schema::story::Story;

// ---------------------------------------------------------------------------
// Embedded story data — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const ECHO_CHAMBER: &str = include_str!("../../story_data/echo_chamber.ron");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct ChoiceView {
    id: String,
    label: String,
}

#[derive(serde::Serialize)]
struct NodeView {
    id: String,
    title: String,
    lens: String,
    text: String,
    choices: Vec<ChoiceView>,
}

#[derive(serde::Serialize)]
struct ChoiceReport {
    status: String,
    node_id: String,
    missing_target: Option<String>,
}

// ---------------------------------------------------------------------------
// StoryDemo — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct StoryDemo {
    session: Session,
}

#[wasm_bindgen]
impl StoryDemo {
    /// Create a demo session over the embedded story.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<StoryDemo, JsError> {
        let story = Story::parse_ron(data::ECHO_CHAMBER)
            .map_err(|e| JsError::new(&format!("Story parse error: {e}")))?;
        Ok(StoryDemo {
            session: Session::new(story),
        })
    }

    /// Render the current node through a lens. Returns JSON:
    /// `{ id, title, lens, text, choices: [{ id, label }] }`.
    ///
    /// An unknown lens name falls back to "base", matching the total
    /// lens accessor.
    pub fn render(&self, lens: &str) -> Result<String, JsError> {
        let lens = Lens::from_name(lens).unwrap_or_default();
        let node = self
            .session
            .current_node()
            .map_err(|e| JsError::new(&format!("Session error: {e}")))?;

        let view = NodeView {
            id: node.id.as_str().to_string(),
            title: node.title.clone(),
            lens: lens.name().to_string(),
            text: node.text.get(lens).to_string(),
            choices: node
                .choices
                .iter()
                .map(|c| ChoiceView {
                    id: c.id.as_str().to_string(),
                    label: c.label.clone(),
                })
                .collect(),
        };
        serde_json::to_string(&view)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Take a choice on the current node. Returns a JSON report with
    /// status "advanced", "missing_target", or "unknown_choice".
    pub fn choose(&mut self, choice_id: &str) -> Result<String, JsError> {
        let report = match self.session.choose(choice_id) {
            Ok(StepOutcome::Advanced(state)) => ChoiceReport {
                status: "advanced".to_string(),
                node_id: state.node_id.as_str().to_string(),
                missing_target: None,
            },
            Ok(StepOutcome::MissingTarget { state, to }) => ChoiceReport {
                status: "missing_target".to_string(),
                node_id: state.node_id.as_str().to_string(),
                missing_target: Some(to.as_str().to_string()),
            },
            Err(_) => ChoiceReport {
                status: "unknown_choice".to_string(),
                node_id: self.session.state().node_id.as_str().to_string(),
                missing_target: None,
            },
        };
        serde_json::to_string(&report)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// The full run state (node id, vars, log) as JSON — what the demo
    /// page shows in its state panel.
    pub fn state_json(&self) -> Result<String, JsError> {
        serde_json::to_string(self.session.state())
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// JSON array of available lens names.
    pub fn lenses() -> String {
        serde_json::to_string(&["base", "narrator", "observer"])
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Back to the start node with a fresh run state.
    pub fn reset(&mut self) {
        self.session.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_story_opens() {
        let demo = StoryDemo::new().unwrap();
        let rendered = demo.render("base").unwrap();
        assert!(rendered.contains("\"id\":\"start\""));
    }

    #[test]
    fn unknown_lens_falls_back_to_base() {
        let demo = StoryDemo::new().unwrap();
        let rendered = demo.render("mirror").unwrap();
        assert!(rendered.contains("\"lens\":\"base\""));
    }

    #[test]
    fn choose_reports_status() {
        let mut demo = StoryDemo::new().unwrap();
        let report = demo.choose("descend").unwrap();
        assert!(report.contains("\"status\":\"advanced\""));

        let report = demo.choose("no_such_choice").unwrap();
        assert!(report.contains("\"status\":\"unknown_choice\""));
    }

    #[test]
    fn reset_returns_to_start() {
        let mut demo = StoryDemo::new().unwrap();
        demo.choose("descend").unwrap();
        demo.reset();
        let state = demo.state_json().unwrap();
        assert!(state.contains("\"node_id\":\"start\""));
    }
}
