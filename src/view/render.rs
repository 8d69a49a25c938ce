use crate::domain::model::{ComparisonResult, OptionAnalysis};
use crate::view::state::ViewState;
use std::fmt::Write;

pub const TITLE: &str = "Option Scale";
pub const TAGLINE: &str = "Compare two options and let the AI weigh the pros and cons for you.";
pub const PLACEHOLDER_A: &str = "Option A: e.g. Working as a freelancer";
pub const PLACEHOLDER_B: &str = "Option B: e.g. Working at a company";
pub const SUBMIT_LABEL: &str = "[ Analyze ]";
pub const LOADING_CAPTION: &str = "Analyzing... The AI is weighing the options.";
pub const IDLE_HINT: &str = "Enter two options to compare and choose Analyze.";
pub const CONCLUSION_TITLE: &str = "AI Conclusion";
pub const PRO_MARKER: &str = "+";
pub const CON_MARKER: &str = "-";

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const RULE_WIDTH: usize = 60;

pub fn spinner_glyph(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

fn rule(out: &mut String, fill: char) {
    out.extend(std::iter::repeat(fill).take(RULE_WIDTH));
    out.push('\n');
}

fn input_line(out: &mut String, value: &str, placeholder: &str, enabled: bool) {
    let shown = if value.is_empty() { placeholder } else { value };
    let marker = if enabled { "" } else { " (disabled)" };
    let _ = writeln!(out, "  > {}{}", shown, marker);
}

/// Submit control: spinner while loading, otherwise the label.
pub fn submit_control(state: &ViewState, frame: usize) -> String {
    if state.is_loading() {
        format!("[ {} ]", spinner_glyph(frame))
    } else if state.can_submit() {
        SUBMIT_LABEL.to_string()
    } else {
        format!("{} (disabled)", SUBMIT_LABEL)
    }
}

pub fn render_panel(out: &mut String, analysis: &OptionAnalysis) {
    rule(out, '-');
    let _ = writeln!(out, "{}", analysis.name());
    rule(out, '-');
    let _ = writeln!(out, "Pros");
    for pro in analysis.pros() {
        let _ = writeln!(out, "  {} {}", PRO_MARKER, pro);
    }
    let _ = writeln!(out, "Cons");
    for con in analysis.cons() {
        let _ = writeln!(out, "  {} {}", CON_MARKER, con);
    }
}

pub fn render_result(out: &mut String, result: &ComparisonResult) {
    for item in result.items() {
        render_panel(out, item);
        out.push('\n');
    }
    rule(out, '=');
    let _ = writeln!(out, "{}", CONCLUSION_TITLE);
    rule(out, '=');
    let _ = writeln!(out, "{}", result.conclusion());
}

/// Renders the whole form. `frame` advances the spinner while loading.
pub fn render(state: &ViewState, frame: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", TAGLINE);
    out.push('\n');

    input_line(&mut out, state.option_a(), PLACEHOLDER_A, state.inputs_enabled());
    input_line(&mut out, state.option_b(), PLACEHOLDER_B, state.inputs_enabled());
    let _ = writeln!(out, "  {}", submit_control(state, frame));
    out.push('\n');

    if let Some(error) = state.error() {
        let _ = writeln!(out, "! {}", error);
    }

    if state.is_loading() {
        let _ = writeln!(out, "{} {}", spinner_glyph(frame), LOADING_CAPTION);
    }

    if let Some(result) = state.result() {
        render_result(&mut out, result);
    }

    if !state.is_loading() && state.result().is_none() && state.error().is_none() {
        let _ = writeln!(out, "{}", IDLE_HINT);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ComparisonError;
    use crate::view::state::OptionSlot;

    fn freelance_result() -> ComparisonResult {
        serde_json::from_str(
            r#"{"itemA":{"name":"Freelance","pros":["Flexibility"],"cons":["No stability"]},"itemB":{"name":"Employment","pros":["Stability"],"cons":["Less flexibility"]},"conclusion":"Depends on risk tolerance."}"#,
        )
        .unwrap()
    }

    fn resolved(outcome: Result<ComparisonResult, ComparisonError>) -> ViewState {
        let mut state = ViewState::new();
        state.set_option(OptionSlot::A, "Freelance");
        state.set_option(OptionSlot::B, "Employment");
        state.begin_submit();
        state.resolve(outcome);
        state
    }

    #[test]
    fn test_idle_shows_placeholders_and_hint() {
        let text = render(&ViewState::new(), 0);

        assert!(text.contains(PLACEHOLDER_A));
        assert!(text.contains(PLACEHOLDER_B));
        assert!(text.contains("[ Analyze ] (disabled)"));
        assert!(text.contains(IDLE_HINT));
    }

    #[test]
    fn test_loading_shows_spinner_and_caption() {
        let mut state = ViewState::new();
        state.set_option(OptionSlot::A, "Tea");
        state.set_option(OptionSlot::B, "Coffee");
        state.begin_submit();

        let text = render(&state, 1);

        assert!(text.contains("[ / ]"));
        assert!(text.contains(LOADING_CAPTION));
        assert!(text.contains("Tea (disabled)"));
        assert!(!text.contains(IDLE_HINT));
    }

    #[test]
    fn test_success_renders_two_panels_and_conclusion() {
        let text = render(&resolved(Ok(freelance_result())), 0);
        let lines: Vec<&str> = text.lines().collect();

        let titles: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|l| *l == "Freelance" || *l == "Employment")
            .collect();
        assert_eq!(titles, vec!["Freelance", "Employment"]);

        let pros = lines.iter().filter(|l| l.starts_with("  + ")).count();
        let cons = lines.iter().filter(|l| l.starts_with("  - ")).count();
        assert_eq!(pros, 2);
        assert_eq!(cons, 2);
        assert!(lines.contains(&"  + Flexibility"));
        assert!(lines.contains(&"  - Less flexibility"));

        assert!(text.contains(CONCLUSION_TITLE));
        assert!(lines.contains(&"Depends on risk tolerance."));
        assert!(!text.contains("! "));
    }

    #[test]
    fn test_failure_renders_banner_without_panels() {
        let state = resolved(Err(ComparisonError::RequestFailed {
            message: Some("timeout".to_string()),
        }));
        let text = render(&state, 0);

        assert!(text.contains("! Could not obtain the analysis: timeout"));
        assert!(!text.contains("Pros"));
        assert!(!text.contains(CONCLUSION_TITLE));
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_glyph(0), '|');
        assert_eq!(spinner_glyph(4), '|');
        assert_eq!(spinner_glyph(3), '\\');
    }
}
