use indicatif::ProgressStyle;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Style of the spinner shown while a pipeline stage is in flight.
pub fn stage_style() -> anyhow::Result<ProgressStyle> {
    let style = ProgressStyle::with_template("{spinner:.blue} {span_name} {span_fields}")?
        .tick_strings(TICKS);
    Ok(style)
}
