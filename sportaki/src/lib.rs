//! Schedule conversion library: turns loose `{ key: value, ... }` schedule blocks into
//! PHP array-literal lines.
//! The core is pure text in, text out; reading and writing files lives behind `storage`.

pub mod core {
    use indexmap::IndexMap;
    use serde::{Deserialize, Serialize};

    /* ------------------------------ Fields ------------------------------ */

    /// Key/value pairs of one block, in first-occurrence order.
    /// A repeated key overwrites the earlier value but keeps its position.
    pub type FieldMap = IndexMap<String, String>;

    /// Substring of a URL that marks a link still to be filled in ("ΑΝΑΜΟΝΗ", transliterated).
    pub const PENDING_MARKER: &str = "ANAMONH";

    /// Byte offsets into the input text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SourceRange {
        pub start: usize,
        pub end: usize,
    }

    impl SourceRange {
        pub fn slice<'a>(&self, src: &'a str) -> &'a str {
            &src[self.start..self.end]
        }
    }

    /// Inner text of a single-level `{ ... }` span.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct RawBlock<'src> {
        /// Range of `body` (braces excluded).
        pub range: SourceRange,
        pub body: &'src str,
    }

    /* ------------------------------ Events ------------------------------ */

    /// A block that carried a `date` or a `title` and is destined for output.
    /// Unrecognised fields are kept but never rendered.
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Event {
        pub fields: FieldMap,
    }

    impl Event {
        /// Accepts `fields` as an event when a `date` or `title` key is present.
        pub fn from_fields(fields: FieldMap) -> Option<Self> {
            if fields.contains_key("date") || fields.contains_key("title") {
                Some(Self { fields })
            } else {
                None
            }
        }

        pub fn get(&self, key: &str) -> Option<&str> {
            self.fields.get(key).map(String::as_str)
        }

        fn text(&self, key: &str) -> &str {
            self.get(key).unwrap_or("")
        }

        pub fn date(&self) -> &str {
            self.text("date")
        }

        pub fn start(&self) -> &str {
            self.text("start")
        }

        pub fn duration(&self) -> Option<&str> {
            self.get("duration")
        }

        pub fn title(&self) -> &str {
            self.text("title")
        }

        pub fn sport(&self) -> &str {
            self.text("sport")
        }

        /// `competition` when non-empty, else `comp`, else empty.
        pub fn competition(&self) -> &str {
            match self.get("competition") {
                Some(c) if !c.is_empty() => c,
                _ => self.text("comp"),
            }
        }

        pub fn url(&self) -> &str {
            self.text("url")
        }

        /// True when the URL still carries the pending-link marker (any case).
        pub fn is_pending(&self) -> bool {
            self.url().trim().to_uppercase().contains(PENDING_MARKER)
        }

        /// Copies `comp` into `competition` when the latter is missing.
        pub fn normalize_competition(&mut self) {
            if self.fields.contains_key("competition") {
                return;
            }
            if let Some(comp) = self.fields.get("comp").cloned() {
                self.fields.insert("competition".into(), comp);
            }
        }
    }

    /// An event whose link is still a placeholder, surfaced next to the main output.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PendingEntry {
        pub date: String,
        pub start: String,
        pub title: String,
        /// Trimmed but not escaped.
        pub url: String,
    }

    impl PendingEntry {
        pub fn from_event(event: &Event) -> Self {
            Self {
                date: event.date().to_string(),
                start: event.start().to_string(),
                title: event.title().to_string(),
                url: event.url().trim().to_string(),
            }
        }
    }

    /* ---------------------------- Conversion ---------------------------- */

    /// Result of one conversion call.
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct Conversion {
        /// Rendered lines joined with `\n`, without a trailing newline.
        pub output: String,
        /// Pending entries in block order.
        pub pending: Vec<PendingEntry>,
        pub event_count: usize,
    }

    impl Conversion {
        /// Text as it is written to disk: trimmed, with exactly one trailing newline.
        pub fn to_file_text(&self) -> String {
            let mut text = self.output.trim().to_string();
            text.push('\n');
            text
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    pub enum ConvertError {
        #[error("there is no input to convert")]
        EmptyInput,
        #[error("no `{{ ... }}` entries found in the input")]
        NoBlocks,
    }
}

pub mod parser {
    //! Block and field scanner built on `nom`.
    //!
    //! Blocks are single-level `{ ... }` spans; a `{` inside a block simply makes that
    //! opening brace fail and the scan moves on. Inside a block each `key: value` pair is
    //! tried value form by value form, in priority order:
    //! - single-quoted string, then double-quoted string,
    //! - `-?digits(.digits)?`,
    //! - `( ... )` without a closing paren inside,
    //! - anything up to the next comma.
    //!
    //! A form only counts when it is followed by a comma or the end of the block, so a quoted
    //! string with trailing junk falls through to the unquoted form. Text that matches nothing
    //! is skipped one character at a time. Nothing here ever reports an error.

    use crate::core::*;
    use nom::{
        IResult,
        branch::alt,
        bytes::complete::{is_not, take_while},
        character::complete::{char, digit1, satisfy},
        combinator::{eof, opt, recognize, value},
        error::{VerboseError, VerboseErrorKind},
        sequence::{delimited, pair, preceded, tuple},
    };
    use tracing::debug;

    type PResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

    /* ------------------------ Public entry points ------------------------ */

    /// Extracts accepted events and pending entries, both in block order.
    pub fn extract_events(input: &str) -> (Vec<Event>, Vec<PendingEntry>) {
        let mut events = Vec::new();
        let mut pending = Vec::new();

        for block in find_blocks(input) {
            let fields = parse_fields(block.body);
            let Some(mut event) = Event::from_fields(fields) else {
                debug!(
                    start = block.range.start,
                    end = block.range.end,
                    "skipping block without date or title"
                );
                continue;
            };

            // Pending capture reads the map before `comp` is folded into `competition`.
            if event.is_pending() {
                let entry = PendingEntry::from_event(&event);
                debug!(title = %entry.title, url = %entry.url, "pending link");
                pending.push(entry);
            }

            event.normalize_competition();
            events.push(event);
        }

        (events, pending)
    }

    /// All non-overlapping single-level blocks, left to right.
    pub fn find_blocks(input: &str) -> Vec<RawBlock<'_>> {
        let base_len = input.len();
        let mut blocks = Vec::new();
        let mut i = input;

        while !i.is_empty() {
            match block(i) {
                Ok((rest, body)) => {
                    let start = base_len - i.len() + 1;
                    blocks.push(RawBlock {
                        range: SourceRange {
                            start,
                            end: start + body.len(),
                        },
                        body,
                    });
                    i = rest;
                }
                Err(_) => i = skip_char(i),
            }
        }

        blocks
    }

    /// Parses the `key: value` pairs of one block body.
    pub fn parse_fields(body: &str) -> FieldMap {
        let mut fields = FieldMap::new();
        let mut i = body;

        while !i.is_empty() {
            match field(i) {
                Ok((rest, (key, raw))) => {
                    fields.insert(key.to_string(), strip_quotes(raw).to_string());
                    i = rest;
                }
                Err(_) => i = skip_char(i),
            }
        }

        fields
    }

    /// Trims, then removes one matching pair of outer `'` or `"` quotes.
    pub fn strip_quotes(raw: &str) -> &str {
        let s = raw.trim();
        let bytes = s.as_bytes();
        if bytes.len() >= 2 {
            let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
            if first == last && (first == b'\'' || first == b'"') {
                return &s[1..s.len() - 1];
            }
        }
        s
    }

    /* ------------------------------- Utils ------------------------------- */

    fn skip_char(i: &str) -> &str {
        let mut chars = i.chars();
        chars.next();
        chars.as_str()
    }

    fn ws0(i: &str) -> PResult<'_, &str> {
        take_while(char::is_whitespace)(i)
    }

    fn block(i: &str) -> PResult<'_, &str> {
        delimited(
            char('{'),
            take_while(|c: char| c != '{' && c != '}'),
            char('}'),
        )(i)
    }

    fn identifier(i: &str) -> PResult<'_, &str> {
        recognize(pair(
            satisfy(|c: char| c.is_ascii_alphabetic() || c == '_'),
            take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        ))(i)
    }

    /// Optional whitespace, then a comma or the end of the block.
    fn terminator(i: &str) -> PResult<'_, ()> {
        preceded(ws0, alt((value((), char(',')), value((), eof))))(i)
    }

    /* ------------------------------ Fields ------------------------------ */

    /// One `key: value` pair plus its terminator. The value slice is returned raw.
    fn field(i: &str) -> PResult<'_, (&str, &str)> {
        let (after_colon, (key, _, _)) = tuple((identifier, ws0, char(':')))(i)?;
        let (value_start, skipped) = ws0(after_colon)?;

        if let Some((rest, raw)) = field_value(value_start) {
            return Ok((rest, (key, raw)));
        }

        // Only whitespace between the colon and the terminator.
        if !skipped.is_empty() {
            if let Ok((rest, ())) = terminator(value_start) {
                return Ok((rest, (key, "")));
            }
        }

        Err(nom::Err::Error(VerboseError {
            errors: vec![(value_start, VerboseErrorKind::Context("field value"))],
        }))
    }

    /// First value form, in priority order, that is followed by a terminator.
    /// Returns `(rest_after_terminator, raw_value)`.
    fn field_value(i: &str) -> Option<(&str, &str)> {
        for quote in ['\'', '"'] {
            for end in quoted_ends(i, quote) {
                let (raw, after) = i.split_at(end);
                if let Ok((rest, ())) = terminator(after) {
                    return Some((rest, raw));
                }
            }
        }

        let forms: [for<'a> fn(&'a str) -> PResult<'a, &'a str>; 3] = [number, parenthesized, unquoted];
        for form in forms {
            if let Ok((after, raw)) = form(i) {
                if let Ok((rest, ())) = terminator(after) {
                    return Some((rest, raw));
                }
            }
        }

        None
    }

    /// Possible end offsets (closing quote included) of a quoted string at the start of `i`,
    /// longest first. A backslash-quote pair may either continue the string or close it.
    fn quoted_ends(i: &str, quote: char) -> Vec<usize> {
        let mut chars = i.char_indices();
        if !matches!(chars.next(), Some((_, c)) if c == quote) {
            return Vec::new();
        }

        let mut ends = Vec::new();
        let mut after_backslash = false;
        for (idx, c) in chars {
            if c == quote {
                ends.push(idx + c.len_utf8());
                if !after_backslash {
                    break;
                }
            }
            after_backslash = c == '\\';
        }
        ends.reverse();
        ends
    }

    fn number(i: &str) -> PResult<'_, &str> {
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        )))(i)
    }

    fn parenthesized(i: &str) -> PResult<'_, &str> {
        recognize(delimited(char('('), is_not(")"), char(')')))(i)
    }

    fn unquoted(i: &str) -> PResult<'_, &str> {
        is_not(",}")(i)
    }

}

pub mod format {
    //! Sorting and PHP array-literal rendering.

    use crate::core::Event;
    use chrono::{NaiveDate, NaiveTime};
    use std::cmp::Ordering;
    use tracing::warn;

    /// Renders events sorted by `(date, start)`, one line each, with a blank line whenever
    /// the date changes. No trailing newline.
    pub fn render(events: &[Event]) -> String {
        let mut sorted: Vec<&Event> = events.iter().collect();
        sorted.sort_by(|a, b| compare_events(a, b));

        let mut lines = Vec::with_capacity(sorted.len());
        let mut last_date: Option<&str> = None;
        for event in sorted {
            check_chronological(event);
            let date = event.date();
            if last_date.is_some_and(|prev| prev != date) {
                lines.push(String::new());
            }
            lines.push(render_line(event));
            last_date = Some(date);
        }

        lines.join("\n")
    }

    /// Stable in-place sort by `(date, start)`; missing fields sort as empty strings.
    pub fn sort_events(events: &mut [Event]) {
        events.sort_by(compare_events);
    }

    pub fn compare_events(a: &Event, b: &Event) -> Ordering {
        a.date()
            .cmp(b.date())
            .then_with(|| a.start().cmp(b.start()))
    }

    /// One `['date'=>...,'url'=>...],` line.
    pub fn render_line(event: &Event) -> String {
        let duration = match event.duration().and_then(coerce_duration) {
            Some(n) => n,
            None => format!("'{}'", php_escape(event.duration().unwrap_or(""))),
        };

        format!(
            "['date'=>'{}','start'=>'{}','duration'=>{},'title'=>'{}','sport'=>'{}','competition'=>'{}','url'=>'{}'],",
            php_escape(event.date()),
            php_escape(event.start()),
            duration,
            php_escape(event.title()),
            php_escape(event.sport()),
            php_escape(event.competition()),
            php_escape(event.url()),
        )
    }

    /// Escapes for a single-quoted PHP literal: backslash first, then the quote.
    pub fn php_escape(s: &str) -> String {
        s.replace('\\', "\\\\").replace('\'', "\\'")
    }

    /// Integer text for a duration that reads as a finite float, truncated toward zero.
    pub fn coerce_duration(raw: &str) -> Option<String> {
        let text = raw.trim();
        let cleaned = strip_digit_separators(text)?;
        let value: f64 = cleaned.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        let truncated = value.trunc();
        if truncated == 0.0 {
            return Some("0".to_string());
        }
        Some(format!("{truncated:.0}"))
    }

    /// Drops `_` separators that sit between two digits; any other `_` rejects the text.
    fn strip_digit_separators(text: &str) -> Option<String> {
        if !text.contains('_') {
            return Some(text.to_string());
        }
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        for (idx, &c) in chars.iter().enumerate() {
            if c != '_' {
                out.push(c);
                continue;
            }
            let before = idx.checked_sub(1).and_then(|p| chars.get(p));
            let after = chars.get(idx + 1);
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
                _ => return None,
            }
        }
        Some(out)
    }

    /// Lexicographic order matches calendar order only for `YYYY-MM-DD` and `HH:MM`.
    fn check_chronological(event: &Event) {
        let date = event.date();
        if !date.is_empty()
            && (date.len() != 10 || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err())
        {
            warn!(date, title = event.title(), "date is not YYYY-MM-DD; sorted as text");
        }
        let start = event.start();
        if !start.is_empty()
            && (start.len() != 5 || NaiveTime::parse_from_str(start, "%H:%M").is_err())
        {
            warn!(start, title = event.title(), "start is not HH:MM; sorted as text");
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::core::FieldMap;

        fn event(pairs: &[(&str, &str)]) -> Event {
            let fields: FieldMap = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            Event { fields }
        }

        #[test]
        fn renders_full_line() {
            let e = event(&[
                ("date", "2024-05-01"),
                ("start", "18:00"),
                ("duration", "90"),
                ("title", "Team A vs Team B"),
                ("sport", "Football"),
                ("competition", "League X"),
                ("url", "http://x"),
            ]);
            assert_eq!(
                render_line(&e),
                "['date'=>'2024-05-01','start'=>'18:00','duration'=>90,'title'=>'Team A vs Team B','sport'=>'Football','competition'=>'League X','url'=>'http://x'],"
            );
        }

        #[test]
        fn missing_fields_render_empty() {
            let e = event(&[("title", "Only")]);
            assert_eq!(
                render_line(&e),
                "['date'=>'','start'=>'','duration'=>'','title'=>'Only','sport'=>'','competition'=>'','url'=>''],"
            );
        }

        #[test]
        fn escapes_backslash_then_quote() {
            assert_eq!(php_escape(r"O'Neil \ Co"), r"O\'Neil \\ Co");
            assert_eq!(php_escape(r"it\'s"), r"it\\\'s");
        }

        #[test]
        fn duration_coercion() {
            assert_eq!(coerce_duration("45").as_deref(), Some("45"));
            assert_eq!(coerce_duration(" 90.9 ").as_deref(), Some("90"));
            assert_eq!(coerce_duration("-2.5").as_deref(), Some("-2"));
            assert_eq!(coerce_duration("-0.4").as_deref(), Some("0"));
            assert_eq!(coerce_duration("1e3").as_deref(), Some("1000"));
            assert_eq!(coerce_duration("1_000").as_deref(), Some("1000"));
            assert_eq!(coerce_duration("tbd"), None);
            assert_eq!(coerce_duration(""), None);
            assert_eq!(coerce_duration("inf"), None);
            assert_eq!(coerce_duration("nan"), None);
            assert_eq!(coerce_duration("_1"), None);
        }

        #[test]
        fn non_numeric_duration_is_quoted() {
            let e = event(&[("title", "T"), ("duration", "tbd")]);
            assert!(render_line(&e).contains("'duration'=>'tbd',"));
            let e = event(&[("title", "T"), ("duration", "45")]);
            assert!(render_line(&e).contains("'duration'=>45,"));
        }

        #[test]
        fn competition_falls_back_to_comp_when_empty() {
            let e = event(&[("title", "T"), ("competition", ""), ("comp", "Cup")]);
            assert!(render_line(&e).contains("'competition'=>'Cup',"));
        }

        #[test]
        fn sorts_by_date_then_start() {
            let events = vec![
                event(&[("date", "2024-01-02"), ("start", "10:00"), ("title", "late")]),
                event(&[("date", "2024-01-01"), ("start", "20:00"), ("title", "evening")]),
                event(&[("date", "2024-01-01"), ("start", "08:00"), ("title", "morning")]),
            ];
            let out = render(&events);
            let lines: Vec<&str> = out.lines().collect();
            assert_eq!(lines.len(), 4);
            assert!(lines[0].contains("morning"));
            assert!(lines[1].contains("evening"));
            assert_eq!(lines[2], "");
            assert!(lines[3].contains("late"));
        }

        #[test]
        fn missing_date_sorts_first_and_ties_keep_order() {
            let mut events = vec![
                event(&[("date", "2024-01-01"), ("title", "dated")]),
                event(&[("title", "first")]),
                event(&[("title", "second")]),
            ];
            sort_events(&mut events);
            let titles: Vec<&str> = events.iter().map(Event::title).collect();
            assert_eq!(titles, vec!["first", "second", "dated"]);
        }

        #[test]
        fn blank_line_only_between_dates() {
            let events = vec![
                event(&[("date", "2024-01-01"), ("start", "10:00"), ("title", "a")]),
                event(&[("date", "2024-01-01"), ("start", "11:00"), ("title", "b")]),
                event(&[("date", "2024-01-03"), ("start", "11:00"), ("title", "c")]),
            ];
            let out = render(&events);
            assert_eq!(out.matches("\n\n").count(), 1);
            assert!(!out.starts_with('\n'));
            assert!(!out.ends_with('\n'));
            let non_blank = out.lines().filter(|l| !l.is_empty()).count();
            assert_eq!(non_blank, events.len());
        }

        #[test]
        fn rendering_is_repeatable() {
            let mut events = vec![
                event(&[("date", "2024-03-01"), ("title", "x")]),
                event(&[("date", "2024-02-01"), ("title", "y")]),
            ];
            sort_events(&mut events);
            assert_eq!(render(&events), render(&events));
        }

        #[test]
        fn empty_input_renders_nothing() {
            assert_eq!(render(&[]), "");
        }
    }
}

pub mod pending {
    //! Text report of pending links.

    use crate::core::PendingEntry;

    /// Shown when nothing is pending.
    pub const NO_PENDING: &str = "— no pending entries —";

    /// One `- date start | title | url` line per entry.
    pub fn render_pending(pending: &[PendingEntry]) -> String {
        if pending.is_empty() {
            return NO_PENDING.to_string();
        }
        pending
            .iter()
            .map(|p| format!("- {} {} | {} | {}", p.date, p.start, p.title, p.url))
            .collect::<Vec<_>>()
            .join("\n")
    }

}

pub mod storage {
    //! File access for the shell. The conversion core never touches the filesystem.

    use anyhow::{Context, Result};
    use std::{fs, path::Path};

    /// Where schedules are read from and converted output is written to.
    pub trait ScheduleStore {
        fn open(&self, path: &Path) -> Result<String>;
        fn save(&self, path: &Path, text: &str) -> Result<()>;
    }

    /// Plain files on disk.
    pub struct FsStore;

    impl ScheduleStore for FsStore {
        fn open(&self, path: &Path) -> Result<String> {
            let bytes = fs::read(path).with_context(|| format!("reading {:?}", path))?;
            Ok(decode_text(&bytes))
        }

        fn save(&self, path: &Path, text: &str) -> Result<()> {
            fs::write(path, text.as_bytes()).with_context(|| format!("writing {:?}", path))
        }
    }

    /// UTF-8 with invalid sequences replaced; `\r\n` and lone `\r` become `\n`.
    pub fn decode_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes)
            .replace("\r\n", "\n")
            .replace('\r', "\n")
    }

}

pub mod pipeline {
    //! The single conversion entry point plus the checks the shell applies around it.

    use crate::core::{Conversion, ConvertError};
    use crate::format::render;
    use crate::parser::extract_events;

    /// Converts raw schedule text. Total: malformed input only shrinks the output.
    pub fn convert(raw: &str) -> Conversion {
        let (events, pending) = extract_events(raw);
        let output = render(&events);
        Conversion {
            output,
            pending,
            event_count: events.len(),
        }
    }

    /// Like [`convert`], but blank input and empty output are reported as errors.
    pub fn convert_checked(raw: &str) -> Result<Conversion, ConvertError> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(ConvertError::EmptyInput);
        }
        let conversion = convert(input);
        if conversion.output.trim().is_empty() {
            return Err(ConvertError::NoBlocks);
        }
        Ok(conversion)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        const EXAMPLE: &str = "{date:'2024-05-01',start:'18:00',duration:'90',title:'Team A vs Team B',sport:'Football',competition:'League X',url:'http://x'}";

        #[test]
        fn converts_the_reference_block() {
            let c = convert(EXAMPLE);
            assert_eq!(
                c.output,
                "['date'=>'2024-05-01','start'=>'18:00','duration'=>90,'title'=>'Team A vs Team B','sport'=>'Football','competition'=>'League X','url'=>'http://x'],"
            );
            assert_eq!(c.event_count, 1);
            assert!(c.pending.is_empty());
        }

        #[test]
        fn later_date_in_input_comes_out_second() {
            let text = "{date: '2024-01-02', title: 'e1'}\n{date: '2024-01-01', title: 'e2'}";
            let c = convert(text);
            let e1 = c.output.find("'e1'").expect("e1");
            let e2 = c.output.find("'e2'").expect("e2");
            assert!(e2 < e1);
            assert_eq!(c.output.lines().filter(|l| l.is_empty()).count(), 1);
        }

        #[test]
        fn pending_events_stay_in_output() {
            let text = "{date: '2024-01-01', title: 'x', url: 'http://x/ANAMONH_LINK'}";
            let c = convert(text);
            assert_eq!(c.pending.len(), 1);
            assert!(c.output.contains("http://x/ANAMONH_LINK"));
        }

        #[test]
        fn garbage_converts_to_nothing() {
            let c = convert("no braces here { sport: 'Football' }");
            assert_eq!(c, Conversion::default());
        }

        #[test]
        fn checked_conversion_reports_empty_cases() {
            assert_eq!(convert_checked("  \n\t"), Err(ConvertError::EmptyInput));
            assert_eq!(
                convert_checked("{ sport: 'Football' }"),
                Err(ConvertError::NoBlocks)
            );
            assert!(convert_checked(EXAMPLE).is_ok());
        }

        #[test]
        fn file_text_has_one_trailing_newline() {
            let c = convert(EXAMPLE);
            let text = c.to_file_text();
            assert!(text.ends_with("],\n"));
            assert!(!text.ends_with("\n\n"));
        }
    }
}

pub use crate::core::{Conversion, ConvertError, Event, PendingEntry};
pub use crate::format::render;
pub use crate::parser::extract_events;
pub use crate::pipeline::{convert, convert_checked};
