use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Without `--verbose` nothing is
/// logged, so the error banner is the only failure text the user sees.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "option_scale=debug,info"
    } else {
        "off"
    }
}

pub fn cli_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

// Logs go to stderr so they never interleave with the rendered form on stdout.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Machine-readable variant for running under a log collector.
pub fn init_json_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("option_scale=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::ComparisonClient;
    use crate::domain::ports::{GenerationRequest, GenerativeModel};
    use crate::utils::error::ProviderError;
    use crate::view::{ComparisonView, OptionSlot, ViewPhase};
    use async_trait::async_trait;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    struct FailingModel;

    #[async_trait]
    impl GenerativeModel for FailingModel {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> std::result::Result<Option<String>, ProviderError> {
            Err(ProviderError::Other("timeout".to_string()))
        }
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    async fn failed_submit_logs(verbose: bool) -> (String, String) {
        let logs = SharedBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(default_directive(verbose)))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(move || writer.clone())
                    .with_ansi(false)
                    .compact(),
            );
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut view = ComparisonView::new(ComparisonClient::new(FailingModel));
        view.edit(OptionSlot::A, "Tea");
        view.edit(OptionSlot::B, "Coffee");
        assert_eq!(view.submit().await, ViewPhase::Failed);

        let banner = view.render();
        (banner, logs.contents())
    }

    #[tokio::test]
    async fn test_failed_submit_shows_only_the_banner_by_default() {
        let (rendered, logs) = failed_submit_logs(false).await;

        assert!(rendered.contains("! Could not obtain the analysis: timeout"));
        assert!(logs.is_empty(), "unexpected log output: {}", logs);
    }

    #[tokio::test]
    async fn test_verbose_logging_records_the_failure() {
        let (_, logs) = failed_submit_logs(true).await;

        assert!(logs.contains("Comparison request failed: timeout"));
    }
}
