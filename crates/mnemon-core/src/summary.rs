//! Range summaries of major-system words.
//!
//! A summary prints, for each number in a range, the words that encode
//! it. The printer is handed out as a guard: the style's header goes out
//! once when the printer is acquired, and the final flush runs exactly
//! once even when the caller bails out of its loop early.

use std::io::{self, Write};

use crate::major;

/// Output style for a words summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryStyle {
    /// One `N: word, word` line per number.
    #[default]
    Plain,
    /// Org-mode outline: a top-level heading, one `**` entry per number.
    Org,
}

/// Configuration for one summary run.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub style: SummaryStyle,
    pub nouns_only: bool,
}

impl Summary {
    pub fn new(style: SummaryStyle, nouns_only: bool) -> Self {
        Self { style, nouns_only }
    }

    /// Acquire a printer for this run. Emits the style's header.
    pub fn printer<'a, W: Write>(&self, out: &'a mut W) -> io::Result<SummaryPrinter<'a, W>> {
        if self.style == SummaryStyle::Org {
            writeln!(out, "* Major system words")?;
        }
        Ok(SummaryPrinter {
            out,
            style: self.style,
            nouns_only: self.nouns_only,
            finished: false,
        })
    }

    /// The numbers a summary over `[min, max)` walks: every single-digit
    /// value of the range first, then every value zero-padded to two
    /// digits. `numbers(0, 1)` is `["0", "00"]`.
    pub fn numbers(min: u32, max: u32) -> Vec<String> {
        let mut out = Vec::new();
        for n in min..max {
            if n < 10 {
                out.push(n.to_string());
            }
        }
        for n in min..max {
            out.push(format!("{n:02}"));
        }
        out
    }
}

/// Guard for one summary run. Dropping it flushes the writer; call
/// [`SummaryPrinter::finish`] instead to surface the flush error.
pub struct SummaryPrinter<'a, W: Write> {
    out: &'a mut W,
    style: SummaryStyle,
    nouns_only: bool,
    finished: bool,
}

impl<W: Write> SummaryPrinter<'_, W> {
    /// Print one number's line. Numbers with no matching words still get
    /// a line, with an empty word list.
    pub fn print_number(&mut self, number: &str) -> io::Result<()> {
        let words: Vec<&str> = major::lookup(number, self.nouns_only)
            .iter()
            .map(|e| e.word)
            .collect();
        let joined = words.join(", ");
        match self.style {
            SummaryStyle::Plain => writeln!(self.out, "{number}: {joined}"),
            SummaryStyle::Org => writeln!(self.out, "** {number}: {joined}"),
        }
    }

    /// Flush and consume the printer.
    pub fn finish(mut self) -> io::Result<()> {
        self.finished = true;
        self.out.flush()
    }
}

impl<W: Write> Drop for SummaryPrinter<'_, W> {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(style: SummaryStyle, nouns_only: bool, min: u32, max: u32) -> String {
        let summary = Summary::new(style, nouns_only);
        let mut buf = Vec::new();
        let mut printer = summary.printer(&mut buf).unwrap();
        for number in Summary::numbers(min, max) {
            printer.print_number(&number).unwrap();
        }
        printer.finish().unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn numbers_walks_single_digits_then_padded() {
        assert_eq!(Summary::numbers(0, 1), vec!["0", "00"]);
        assert_eq!(Summary::numbers(0, 10).len(), 20);
        assert_eq!(Summary::numbers(0, 100).len(), 110);
        assert_eq!(Summary::numbers(42, 44), vec!["42", "43"]);
        assert!(Summary::numbers(5, 5).is_empty());
    }

    #[test]
    fn plain_summary_over_zero_to_one() {
        let text = render(SummaryStyle::Plain, false, 0, 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0:"));
        assert!(lines[1].starts_with("00:"));
        assert!(lines[0].contains("sea"));
    }

    #[test]
    fn plain_summary_has_one_line_per_number() {
        let text = render(SummaryStyle::Plain, false, 0, 100);
        assert_eq!(text.lines().count(), 110);
    }

    #[test]
    fn org_summary_emits_header_once() {
        let text = render(SummaryStyle::Org, false, 0, 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "* Major system words");
        assert_eq!(text.matches("* Major system words").count(), 1);
        assert!(lines[1].starts_with("** 0:"));
    }

    #[test]
    fn nouns_only_filters_lines() {
        let all = render(SummaryStyle::Plain, false, 10, 11);
        let nouns = render(SummaryStyle::Plain, true, 10, 11);
        assert!(all.contains("dizzy"));
        assert!(!nouns.contains("dizzy"));
    }

    #[test]
    fn early_drop_still_tears_down() {
        let summary = Summary::new(SummaryStyle::Org, false);
        let mut buf = Vec::new();
        {
            let mut printer = summary.printer(&mut buf).unwrap();
            printer.print_number("0").unwrap();
            // dropped without finish(), as an interrupted loop would
        }
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("* Major system words").count(), 1);
        assert!(text.contains("** 0:"));
    }
}
