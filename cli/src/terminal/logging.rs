use std::fmt::Write as _;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

use autorecon_common::log::{self, FINDING_TARGET, PRINT_TARGET, Severity};

use crate::terminal::spinner;

/// Renders events as `[HH:MM:SS] <tag> <message>`.
///
/// Events on the print target are written verbatim and findings get the
/// indented `-> [VULN]` form.
pub struct ReconFormatter;

impl<S, N> FormatEvent<S, N> for ReconFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let mut message = String::new();
        ctx.field_format().format_fields(Writer::new(&mut message), event)?;

        let line = match meta.target() {
            PRINT_TARGET => message,
            FINDING_TARGET => log::format_finding(&message),
            target => {
                let severity = Severity::from_event(meta.level(), target);
                let timestamp = Local::now().format("%H:%M:%S").to_string();
                log::format_line(severity, &timestamp, &message)
            }
        };

        writer.write_str(&line)?;
        writeln!(writer)
    }
}

/// `RUST_LOG` (default `info`), with the console output the tool always owes
/// the user (raw prints and finding echoes) exempt from it.
pub fn console_filter(env: Option<&str>) -> anyhow::Result<EnvFilter> {
    let filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    Ok(filter
        .add_directive(format!("{PRINT_TARGET}=info").parse()?)
        .add_directive(format!("{FINDING_TARGET}=warn").parse()?))
}

/// Installs the global subscriber.
pub fn init_logging() -> anyhow::Result<()> {
    let indicatif_layer = IndicatifLayer::new().with_progress_style(spinner::stage_style()?);
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = console_filter(rust_log.as_deref())?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(ReconFormatter)
                .with_writer(indicatif_layer.get_stdout_writer()),
        )
        .with(indicatif_layer)
        .try_init()?;

    Ok(())
}
