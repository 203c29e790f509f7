//! Log Output Format
//!
//! Emits one `<timestamp>,<level>,<message>` line per record with a
//! `YYYY-MM-DD HH:MM:SS` timestamp.

use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Comma-separated event format
pub struct CommaFormat;

impl<S, N> FormatEvent<S, N> for CommaFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(
            writer,
            "{},{},",
            Local::now().format(LOG_TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the pipeline's log sink.
///
/// Idempotent: if a sink is already installed, the call is a no-op rather
/// than stacking a second output.
pub fn init_logging(level: Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .event_format(CommaFormat)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
