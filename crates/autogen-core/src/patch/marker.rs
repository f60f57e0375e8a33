//! Line classification for inline regions
//!
//! Grammar, after leading whitespace:
//!
//! ```text
//! // -- autogen          start marker
//! // -- end autogen      end marker
//! // -- <fragment>       template line
//! ```
//!
//! The sentinel must be followed by exactly one space. Marker words must be
//! followed by whitespace or the end of the line, so `// -- autogenerated`
//! is a template line.

use crate::config::consts::markers::{END, SENTINEL, START};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Start,
    End,
    /// Template line, carrying the text after `// -- `
    Template(&'a str),
    Plain,
}

pub fn classify(line: &str) -> LineKind<'_> {
    let Some(body) = line
        .trim_start()
        .strip_prefix(SENTINEL)
        .and_then(|rest| rest.strip_prefix(' '))
    else {
        return LineKind::Plain;
    };

    if starts_with_word(body, END) {
        LineKind::End
    } else if starts_with_word(body, START) {
        LineKind::Start
    } else {
        LineKind::Template(body)
    }
}

fn starts_with_word(text: &str, word: &str) -> bool {
    text.strip_prefix(word)
        .is_some_and(|after| after.is_empty() || after.starts_with(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_markers() {
        assert_eq!(classify("// -- autogen"), LineKind::Start);
        assert_eq!(classify("    // -- autogen"), LineKind::Start);
        assert_eq!(classify("\t// -- autogen  "), LineKind::Start);
        assert_eq!(classify("// -- end autogen"), LineKind::End);
        assert_eq!(classify("  // -- end autogen"), LineKind::End);
    }

    #[test]
    fn test_classify_crlf_markers() {
        assert_eq!(classify("// -- autogen\r"), LineKind::Start);
        assert_eq!(classify("// -- end autogen\r"), LineKind::End);
    }

    #[test]
    fn test_classify_template_lines() {
        assert_eq!(classify("// -- {{ foo }}"), LineKind::Template("{{ foo }}"));
        assert_eq!(
            classify("  // -- ## for item in configuration"),
            LineKind::Template("## for item in configuration")
        );
        assert_eq!(classify("// -- "), LineKind::Template(""));
        assert_eq!(classify("// --  autogen"), LineKind::Template(" autogen"));
        assert_eq!(classify("// -- autogenerated"), LineKind::Template("autogenerated"));
        assert_eq!(classify("// -- end"), LineKind::Template("end"));
    }

    #[test]
    fn test_classify_plain_lines() {
        assert_eq!(classify(""), LineKind::Plain);
        assert_eq!(classify("int x = 1;"), LineKind::Plain);
        assert_eq!(classify("// --"), LineKind::Plain);
        assert_eq!(classify("// --autogen"), LineKind::Plain);
        assert_eq!(classify("/* -- autogen */"), LineKind::Plain);
        assert_eq!(classify("x // -- autogen"), LineKind::Plain);
        assert_eq!(classify("// - autogen"), LineKind::Plain);
    }
}
