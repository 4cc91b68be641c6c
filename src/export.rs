//! CSV rendering and export filenames.

use jiff::civil::DateTime;

const FILE_PREFIX: &str = "pitch_data";

/// Renders rows as CSV text, one line per row.
///
/// Fields are written as-is: no quoting, no escaping.
pub fn render_csv(rows: &[Vec<String>]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    // Every field came from a `String`.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Lowercases the opponent name and turns spaces into hyphens.
///
/// Path separators and other characters that can't appear in a filename
/// become hyphens too, so the result is always a single path component.
pub fn sanitize_opponent(opponent: &str) -> String {
    let trimmed = opponent.trim();
    let name = if trimmed.is_empty() {
        crate::session::PRACTICE_OPPONENT
    } else {
        trimmed
    };
    name.chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Filename for an export taken at `at`:
/// `pitch_data_vs_<opponent>_<YYYY-MM-DD_HH-mm>.csv`.
pub fn suggested_filename(opponent: &str, at: DateTime) -> String {
    format!(
        "{FILE_PREFIX}_vs_{}_{}.csv",
        sanitize_opponent(opponent),
        at.strftime("%Y-%m-%d_%H-%M")
    )
}
