//! Heuristic main-content extraction
//!
//! Works on an owned parse of the page document: noise elements are detached
//! from that copy, candidate containers are scored, and the best one's
//! rendered text becomes the page content.

use crate::domain::model::{CapturedContent, UNTITLED};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Candidates need strictly more words than this to be considered.
pub const MIN_CANDIDATE_WORDS: usize = 80;
/// Character length stops contributing to the score past this point.
pub const MAX_SCORED_CHARS: usize = 2000;

const NOISE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "nav",
    "footer",
    "header",
    "aside",
    "form",
    "button",
    "input",
    "textarea",
    "svg",
    "canvas",
    "iframe",
    "[role='navigation']",
    "[role='banner']",
    "[role='contentinfo']",
    "[aria-hidden='true']",
    "[hidden]",
    ".ad",
    ".ads",
    ".advert",
    ".advertisement",
    ".promo",
    ".subscribe",
    ".newsletter",
];

const CANDIDATE_SELECTOR: &str = "article, main, [role='main'], section, div";

static NOISE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(&NOISE_SELECTORS.join(", ")).expect("noise selector"));
static CANDIDATES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(CANDIDATE_SELECTOR).expect("candidate selector"));
static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").expect("body selector"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Collapse every whitespace run to one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn candidate_score(text: &str) -> f64 {
    let chars = text.chars().count().min(MAX_SCORED_CHARS);
    word_count(text) as f64 + chars as f64 / 10.0
}

/// Extract `{url, title, content, selection}` from a page document.
///
/// `content` is the raw rendered text of the winning container; callers
/// collapse it before sending.
#[instrument(skip(html, live_selection), fields(html_len = html.len()))]
pub fn extract_page_content(html: &str, url: &str, live_selection: &str) -> CapturedContent {
    let selection = live_selection.trim().to_string();

    let mut document = Html::parse_document(html);
    let title = page_title(&document);

    let raw_body_text = body_or_root(&document)
        .map(|root| rendered_text(&root))
        .unwrap_or_default();

    remove_noise(&mut document);

    let mut content = pick_best_text(&document);
    if content.is_empty() {
        content = raw_body_text.trim().to_string();
        if !content.is_empty() {
            debug!("Cleaned tree has no text, using unfiltered body");
        }
    }

    CapturedContent {
        url: url.to_string(),
        title,
        content,
        selection,
    }
}

fn page_title(document: &Html) -> String {
    document_title(document).unwrap_or_else(|| UNTITLED.to_string())
}

fn document_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// `<title>` of an HTML document, if it has a non-empty one.
pub fn html_title(html: &str) -> Option<String> {
    document_title(&Html::parse_document(html))
}

fn body_or_root(document: &Html) -> Option<ElementRef<'_>> {
    document
        .select(&BODY)
        .next()
        .or_else(|| Some(document.root_element()))
}

fn remove_noise(document: &mut Html) {
    let ids: Vec<_> = document.select(&NOISE).map(|el| el.id()).collect();
    debug!("Removing {} noise elements", ids.len());
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn pick_best_text(document: &Html) -> String {
    let mut best_text = String::new();
    let mut best_score = 0.0_f64;
    let mut considered = 0usize;

    // Html::select walks every node, detached ones included; start from the
    // attached root so removed noise cannot be scored.
    let candidates = body_or_root(document)
        .into_iter()
        .flat_map(|root| root.select(&CANDIDATES));
    for candidate in candidates {
        considered += 1;
        let text = rendered_text(&candidate);
        let text = text.trim();
        let words = word_count(text);
        let score = candidate_score(text);
        if score > best_score && words > MIN_CANDIDATE_WORDS {
            best_score = score;
            best_text = text.to_string();
        }
    }

    if best_text.is_empty() {
        debug!(
            "No qualifying candidate among {}, using cleaned tree text",
            considered
        );
        body_or_root(document)
            .map(|root| rendered_text(&root).trim().to_string())
            .unwrap_or_default()
    } else {
        debug!("Picked candidate with score {:.1}", best_score);
        best_text
    }
}

/// Approximates `innerText`: block boundaries become line breaks and
/// non-rendered elements contribute nothing.
pub fn rendered_text(element: &ElementRef<'_>) -> String {
    let mut out = String::new();
    push_rendered_text(element, &mut out);
    out
}

fn push_rendered_text(element: &ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if matches!(name, "script" | "style" | "noscript" | "template" | "head") {
        return;
    }
    if name == "br" {
        out.push('\n');
        return;
    }

    let block = is_block(name);
    if block {
        out.push('\n');
    }
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            push_rendered_text(&child_element, out);
        }
    }
    if block {
        out.push('\n');
    }
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "p" | "div"
            | "section"
            | "article"
            | "main"
            | "header"
            | "footer"
            | "aside"
            | "nav"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "ul"
            | "ol"
            | "li"
            | "dl"
            | "dt"
            | "dd"
            | "blockquote"
            | "pre"
            | "table"
            | "tr"
            | "td"
            | "th"
            | "hr"
            | "figure"
            | "figcaption"
            | "body"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize, word: &str) -> String {
        vec![word; n].join(" ")
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  hello   world  "), "hello world");
        assert_eq!(collapse_whitespace("a\n\n\tb\r\nc"), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_collapse_whitespace_is_idempotent() {
        let samples = [
            "  hello   world  ",
            "line one\n\nline two\t\tend",
            "",
            "\u{a0}non\u{a0}breaking\u{2003}spaces ",
            "already clean",
        ];
        for sample in samples {
            let once = collapse_whitespace(sample);
            assert_eq!(collapse_whitespace(&once), once);
        }
    }

    #[test]
    fn test_score_caps_character_contribution() {
        let short = words(10, "abc");
        assert_eq!(candidate_score(&short), 10.0 + short.len() as f64 / 10.0);

        let long = "x".repeat(5000);
        assert_eq!(candidate_score(&long), 1.0 + 200.0);
    }

    #[test]
    fn test_picks_highest_scoring_candidate() {
        let html = format!(
            r#"<html><head><title> Field Notes </title></head><body>
            <div id="sidebar">{}</div>
            <article>{}</article>
            </body></html>"#,
            words(90, "side"),
            words(300, "story")
        );

        let captured = extract_page_content(&html, "https://example.com/a", "");
        assert_eq!(captured.title, "Field Notes");
        assert_eq!(captured.url, "https://example.com/a");
        assert_eq!(word_count(&captured.content), 300);
        assert!(captured.content.starts_with("story"));
    }

    #[test]
    fn test_outer_container_wins_ties_in_document_order() {
        let html = format!(
            "<html><body><main><div>{}</div></main></body></html>",
            words(120, "word")
        );
        let captured = extract_page_content(&html, "https://example.com", "");
        assert_eq!(collapse_whitespace(&captured.content), words(120, "word"));
    }

    #[test]
    fn test_noise_is_removed_before_scoring() {
        let html = format!(
            r#"<html><body>
            <div>
              <nav>{}</nav>
              <p>{}</p>
              <script>var tracking = "{}";</script>
              <div class="ad">{}</div>
              <div aria-hidden="true">{}</div>
            </div>
            </body></html>"#,
            words(50, "menu"),
            words(100, "body"),
            words(50, "script"),
            words(50, "buy"),
            words(50, "ghost")
        );

        let captured = extract_page_content(&html, "https://example.com", "");
        let content = collapse_whitespace(&captured.content);
        assert_eq!(content, words(100, "body"));
    }

    #[test]
    fn test_large_noise_containers_never_win() {
        let html = format!(
            r#"<html><body>
            <article>{}</article>
            <footer><div>{}</div></footer>
            <aside><section>{}</section></aside>
            <div class="ad"><div>{}</div></div>
            </body></html>"#,
            words(100, "story"),
            words(300, "footerlink"),
            words(350, "related"),
            words(400, "buynow")
        );

        let captured = extract_page_content(&html, "https://example.com", "");
        assert_eq!(collapse_whitespace(&captured.content), words(100, "story"));
    }

    #[test]
    fn test_html_title() {
        assert_eq!(
            html_title("<html><head><title> Notes </title></head></html>"),
            Some("Notes".to_string())
        );
        assert_eq!(html_title("<html><head><title>  </title></head></html>"), None);
        assert_eq!(html_title("<p>no head</p>"), None);
    }

    #[test]
    fn test_short_candidates_fall_back_to_cleaned_tree() {
        let html = r#"<html><body>
            <nav>Home About</nav>
            <div>First short block.</div>
            <section>Second <b>short</b> block.</section>
            </body></html>"#;

        let captured = extract_page_content(html, "https://example.com", "");
        assert_eq!(
            collapse_whitespace(&captured.content),
            "First short block. Second short block."
        );
    }

    #[test]
    fn test_exactly_eighty_words_does_not_qualify() {
        let html = format!(
            "<html><body><nav>skip me</nav><div>{}</div></body></html>",
            words(MIN_CANDIDATE_WORDS, "w")
        );
        let captured = extract_page_content(&html, "https://example.com", "");
        // falls back to the cleaned body, which has the same words but no nav
        assert_eq!(
            collapse_whitespace(&captured.content),
            words(MIN_CANDIDATE_WORDS, "w")
        );
    }

    #[test]
    fn test_all_noise_falls_back_to_unfiltered_body() {
        let html = "<html><body><header>Site Banner</header><footer>Contact us</footer></body></html>";
        let captured = extract_page_content(html, "https://example.com", "");
        assert_eq!(collapse_whitespace(&captured.content), "Site Banner Contact us");
    }

    #[test]
    fn test_empty_page_yields_empty_content_and_default_title() {
        let captured = extract_page_content("<html><body></body></html>", "about:blank", "");
        assert_eq!(captured.content, "");
        assert_eq!(captured.title, UNTITLED);
        assert_eq!(captured.selection, "");
    }

    #[test]
    fn test_live_selection_is_trimmed_verbatim() {
        let captured = extract_page_content(
            "<html><body><p>text</p></body></html>",
            "https://example.com",
            "  picked   text \n",
        );
        assert_eq!(captured.selection, "picked   text");
    }

    #[test]
    fn test_inline_elements_do_not_split_words() {
        let html = "<html><body><p>un<b>break</b>able</p></body></html>";
        let captured = extract_page_content(html, "https://example.com", "");
        assert_eq!(collapse_whitespace(&captured.content), "unbreakable");
    }
}
