use crate::domain::ports::GenerativeModel;
use crate::utils::error::Result;
use crate::view::render::{self, LOADING_CAPTION};
use crate::view::{ComparisonView, OptionSlot};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const SPINNER_TICK: Duration = Duration::from_millis(120);

pub const HELP: &str = "\
Commands:
  a <text>     set Option A
  b <text>     set Option B
  analyze      compare the two options (alias: go)
  show         redraw the form
  clear        empty both options and the result
  help         show this help
  quit         leave (alias: exit)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(OptionSlot, String),
    Analyze,
    Show,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "a" => Command::Set(OptionSlot::A, rest.to_string()),
        "b" => Command::Set(OptionSlot::B, rest.to_string()),
        "analyze" | "go" => Command::Analyze,
        "show" | "" => Command::Show,
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Drives the form from line commands until `quit` or end of input.
pub async fn run_session<M, R, W>(
    view: &mut ComparisonView<M>,
    input: R,
    output: &mut W,
) -> Result<()>
where
    M: GenerativeModel,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{}", view.render())?;
    writeln!(output, "{}", HELP)?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Command::Set(slot, text) => {
                if view.edit(slot, text) {
                    writeln!(output, "{}", view.render())?;
                }
            }
            Command::Analyze => {
                if !view.state().can_submit() {
                    tracing::debug!("Submit requested while the form is incomplete");
                }
                // The first spinner write failure is reported once the comparison settles.
                let mut spinner_error: Option<std::io::Error> = None;
                let phase = view
                    .submit_with_progress(SPINNER_TICK, |_, frame| {
                        if spinner_error.is_some() {
                            return;
                        }
                        let written = write!(
                            output,
                            "\r{} {}",
                            render::spinner_glyph(frame),
                            LOADING_CAPTION
                        )
                        .and_then(|_| output.flush());
                        if let Err(e) = written {
                            spinner_error = Some(e);
                        }
                    })
                    .await;
                tracing::debug!("Submit finished in phase {:?}", phase);
                if let Some(e) = spinner_error {
                    return Err(e.into());
                }
                writeln!(output)?;
                writeln!(output, "{}", view.render())?;
            }
            Command::Show => writeln!(output, "{}", view.render())?,
            Command::Clear => {
                view.reset();
                writeln!(output, "{}", view.render())?;
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => break,
            Command::Unknown(text) => {
                writeln!(output, "Unknown command: {}. Type `help` for the list.", text)?
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::ComparisonClient;
    use crate::domain::ports::GenerationRequest;
    use crate::utils::error::{ComparisonError, ProviderError};
    use crate::view::ViewPhase;
    use async_trait::async_trait;

    const PAYLOAD: &str = r#"{"itemA":{"name":"Tea","pros":["Calm"],"cons":["Weak"]},"itemB":{"name":"Coffee","pros":["Strong"],"cons":["Jitters"]},"conclusion":"Pick by mood."}"#;

    struct SlowModel;

    #[async_trait]
    impl GenerativeModel for SlowModel {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> std::result::Result<Option<String>, ProviderError> {
            tokio::time::sleep(Duration::from_millis(40)).await;
            Ok(Some(PAYLOAD.to_string()))
        }
    }

    /// Accepts everything except the spinner's carriage-return frames.
    #[derive(Default)]
    struct SpinnerRejectingWriter {
        written: Vec<u8>,
    }

    impl Write for SpinnerRejectingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if buf.first() == Some(&b'\r') {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "terminal closed",
                ));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_spinner_write_failure_is_returned_after_submit() {
        let mut view = ComparisonView::new(ComparisonClient::new(SlowModel));
        let mut output = SpinnerRejectingWriter::default();
        let script = "a Tea\nb Coffee\nanalyze\nquit\n";

        let err = run_session(&mut view, script.as_bytes(), &mut output)
            .await
            .unwrap_err();

        assert!(matches!(err, ComparisonError::Io(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe));
        assert_eq!(view.state().phase(), ViewPhase::Success);
        assert!(!view.state().is_loading());
    }

    #[test]
    fn test_parse_set_commands_keep_inner_spaces() {
        assert_eq!(
            parse_command("a  Working as a freelancer "),
            Command::Set(OptionSlot::A, "Working as a freelancer".to_string())
        );
        assert_eq!(
            parse_command("B Working at a company"),
            Command::Set(OptionSlot::B, "Working at a company".to_string())
        );
    }

    #[test]
    fn test_parse_set_without_text_clears_field() {
        assert_eq!(parse_command("a"), Command::Set(OptionSlot::A, String::new()));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse_command("go"), Command::Analyze);
        assert_eq!(parse_command("ANALYZE"), Command::Analyze);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command(""), Command::Show);
        assert_eq!(parse_command("?"), Command::Help);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("compare now"),
            Command::Unknown("compare now".to_string())
        );
    }
}
