use crate::domain::ports::GenerativeModel;
use crate::utils::error::Result;
use crate::view::{ComparisonView, OptionSlot, ViewPhase};
use std::io::Write;

/// Runs a single comparison and writes either the rendered form or the
/// result as JSON. Returns the phase the form ended in.
pub async fn run_once<M, W>(
    view: &mut ComparisonView<M>,
    option_a: &str,
    option_b: &str,
    as_json: bool,
    output: &mut W,
) -> Result<ViewPhase>
where
    M: GenerativeModel,
    W: Write,
{
    view.edit(OptionSlot::A, option_a);
    view.edit(OptionSlot::B, option_b);

    let phase = view.submit().await;

    match (as_json, view.state().result()) {
        (true, Some(result)) => writeln!(output, "{}", serde_json::to_string_pretty(result)?)?,
        _ => writeln!(output, "{}", view.render())?,
    }

    Ok(phase)
}
