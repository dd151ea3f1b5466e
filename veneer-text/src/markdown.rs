//! Markdown rendering

use once_cell::sync::Lazy;
use pulldown_cmark::{Parser, html};
use regex::Regex;

// Much of the stored markdown predates the CommonMark heading rule: it has
// no space between the hashes and the title text (e.g. "##Title"). The
// class excludes whitespace, so the fix is line-local by construction.
static HEADING_FIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(##+)([^\s#])").expect("heading fix pattern"));

/// Convert markdown to HTML.
///
/// Runs of two or more leading `#` heading markers gain the missing space
/// before the heading text, then the whole source is rendered as
/// CommonMark. The result is trusted HTML and is not escaped further.
pub fn markdown(md: &str) -> String {
    let fixed = HEADING_FIX.replace_all(md, "$1 $2");

    let mut out = String::new();
    html::push_html(&mut out, Parser::new(&fixed));
    out
}
