//! HTML page builder for the Wahy interpreter
//!
//! `PageBuilder` owns all mutable state for exactly one run: the emitted
//! fragments, the open list and section stacks, and the style table. It is a
//! strict state machine — `Unopened → Opened → Closed` — and every content
//! operation requires the `Opened` state.
//!
//! The output is assembled from three buffers: a preamble written at open, a
//! body of content fragments, and a trailer assembled once at close (pending
//! closers, the style block, then the closing boilerplate). The style block
//! therefore always lands immediately before `</body>`.

use std::collections::BTreeMap;
use std::fmt;

/// Errors raised by page operations: state violations and stack underflow.
#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    AlreadyOpen,
    NotOpen,
    AlreadyClosed,
    NoOpenList,
    NoOpenSection,
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::AlreadyOpen => write!(f, "the page is already open"),
            PageError::NotOpen => {
                write!(f, "a page must be opened first with \"افتح صفحة\"")
            }
            PageError::AlreadyClosed => {
                write!(f, "the page is closed; no further content can be added")
            }
            PageError::NoOpenList => write!(f, "no open list to end or add items to"),
            PageError::NoOpenSection => write!(f, "no open section to end"),
        }
    }
}

impl std::error::Error for PageError {}

/// The two list flavours Wahy knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageState {
    Unopened,
    Opened,
    Closed,
}

/// Selector under which the style commands write their properties.
const BODY_SELECTOR: &str = "body";

/// Class used for sections started without an explicit label.
const DEFAULT_SECTION_CLASS: &str = "section";

/// Stateful builder holding one document under construction.
#[derive(Debug)]
pub struct PageBuilder {
    state: PageState,
    preamble: Vec<String>,
    body: Vec<String>,
    trailer: Vec<String>,
    list_stack: Vec<ListKind>,
    section_stack: Vec<String>,
    styles: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuilder {
    pub fn new() -> Self {
        PageBuilder {
            state: PageState::Unopened,
            preamble: Vec::new(),
            body: Vec::new(),
            trailer: Vec::new(),
            list_stack: Vec::new(),
            section_stack: Vec::new(),
            styles: BTreeMap::new(),
        }
    }

    fn ensure_open(&self) -> Result<(), PageError> {
        match self.state {
            PageState::Unopened => Err(PageError::NotOpen),
            PageState::Closed => Err(PageError::AlreadyClosed),
            PageState::Opened => Ok(()),
        }
    }

    /// Open the page: emit the fixed boilerplate and baseline stylesheet.
    /// Legal only in the `Unopened` state.
    pub fn open_page(&mut self, title: &str) -> Result<(), PageError> {
        match self.state {
            PageState::Opened => return Err(PageError::AlreadyOpen),
            PageState::Closed => return Err(PageError::AlreadyClosed),
            PageState::Unopened => {}
        }

        let preamble = [
            "<!DOCTYPE html>".to_string(),
            "<html lang=\"ar\" dir=\"rtl\">".to_string(),
            "<head>".to_string(),
            "<meta charset=\"UTF-8\">".to_string(),
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
                .to_string(),
            format!("<title>{}</title>", escape_html(title)),
            "<style>".to_string(),
            "body { font-family: \"Arial\", sans-serif; margin: 20px; padding: 20px; }"
                .to_string(),
            "h1, h2, h3, h4, h5, h6 { color: #333; }".to_string(),
            "p { line-height: 1.6; margin: 10px 0; }".to_string(),
            "ul, ol { margin: 10px 0; padding-right: 20px; }".to_string(),
            "li { margin: 5px 0; }".to_string(),
            "a { color: #007bff; text-decoration: none; }".to_string(),
            "a:hover { text-decoration: underline; }".to_string(),
            "img { max-width: 100%; height: auto; margin: 10px 0; }".to_string(),
            "hr { margin: 20px 0; border: none; border-top: 1px solid #ddd; }".to_string(),
            ".section { margin: 20px 0; padding: 15px; border: 1px solid #eee; border-radius: 5px; }"
                .to_string(),
            "</style>".to_string(),
            "</head>".to_string(),
            "<body>".to_string(),
        ];
        self.preamble.extend(preamble);
        self.state = PageState::Opened;
        Ok(())
    }

    /// Close the page: drain open lists and sections (innermost first),
    /// flush the style table, emit the closing boilerplate.
    pub fn close_page(&mut self) -> Result<(), PageError> {
        self.ensure_open()?;

        while let Some(kind) = self.list_stack.pop() {
            self.body.push(format!("</{}>", kind.tag()));
        }
        while self.section_stack.pop().is_some() {
            self.body.push("</div>".to_string());
        }

        if !self.styles.is_empty() {
            self.trailer.push("<style>".to_string());
            for (selector, properties) in &self.styles {
                let rules = properties
                    .iter()
                    .map(|(property, value)| format!("{}: {}", property, value))
                    .collect::<Vec<_>>()
                    .join("; ");
                self.trailer.push(format!("{} {{ {}; }}", selector, rules));
            }
            self.trailer.push("</style>".to_string());
        }
        self.trailer.push("</body>".to_string());
        self.trailer.push("</html>".to_string());

        self.state = PageState::Closed;
        Ok(())
    }

    /// Emit a heading; the level is clamped to the HTML range 1..=6.
    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<(), PageError> {
        self.ensure_open()?;
        let level = level.clamp(1, 6);
        self.body
            .push(format!("<h{0}>{1}</h{0}>", level, escape_html(text)));
        Ok(())
    }

    pub fn add_subheading(&mut self, text: &str) -> Result<(), PageError> {
        self.add_heading(text, 2)
    }

    pub fn add_paragraph(&mut self, text: &str) -> Result<(), PageError> {
        self.ensure_open()?;
        self.body.push(format!("<p>{}</p>", escape_html(text)));
        Ok(())
    }

    pub fn add_link(&mut self, text: &str, url: &str) -> Result<(), PageError> {
        self.ensure_open()?;
        self.body.push(format!(
            "<a href=\"{}\">{}</a>",
            escape_html(url),
            escape_html(text)
        ));
        Ok(())
    }

    pub fn add_image(&mut self, url: &str, alt: &str) -> Result<(), PageError> {
        self.ensure_open()?;
        self.body.push(format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(url),
            escape_html(alt)
        ));
        Ok(())
    }

    pub fn start_list(&mut self) -> Result<(), PageError> {
        self.ensure_open()?;
        self.body.push("<ul>".to_string());
        self.list_stack.push(ListKind::Unordered);
        Ok(())
    }

    pub fn start_ordered_list(&mut self) -> Result<(), PageError> {
        self.ensure_open()?;
        self.body.push("<ol>".to_string());
        self.list_stack.push(ListKind::Ordered);
        Ok(())
    }

    /// Close the innermost open list with its matching tag.
    pub fn end_list(&mut self) -> Result<(), PageError> {
        self.ensure_open()?;
        let kind = self.list_stack.pop().ok_or(PageError::NoOpenList)?;
        self.body.push(format!("</{}>", kind.tag()));
        Ok(())
    }

    pub fn add_list_item(&mut self, text: &str) -> Result<(), PageError> {
        self.ensure_open()?;
        if self.list_stack.is_empty() {
            return Err(PageError::NoOpenList);
        }
        self.body.push(format!("<li>{}</li>", escape_html(text)));
        Ok(())
    }

    pub fn add_horizontal_rule(&mut self) -> Result<(), PageError> {
        self.ensure_open()?;
        self.body.push("<hr>".to_string());
        Ok(())
    }

    pub fn add_space(&mut self) -> Result<(), PageError> {
        self.ensure_open()?;
        self.body.push("<br>".to_string());
        Ok(())
    }

    /// Start a `<div>` section, tagged with the given class or a default.
    pub fn start_section(&mut self, label: Option<&str>) -> Result<(), PageError> {
        self.ensure_open()?;
        let class = label.unwrap_or(DEFAULT_SECTION_CLASS);
        self.body
            .push(format!("<div class=\"{}\">", escape_html(class)));
        self.section_stack.push(class.to_string());
        Ok(())
    }

    pub fn end_section(&mut self) -> Result<(), PageError> {
        self.ensure_open()?;
        self.section_stack.pop().ok_or(PageError::NoOpenSection)?;
        self.body.push("</div>".to_string());
        Ok(())
    }

    pub fn set_background_color(&mut self, color: &str) -> Result<(), PageError> {
        self.set_style("background-color", color)
    }

    pub fn set_text_color(&mut self, color: &str) -> Result<(), PageError> {
        self.set_style("color", color)
    }

    pub fn set_font(&mut self, family: &str) -> Result<(), PageError> {
        self.set_style("font-family", family)
    }

    /// Upsert one property under the body selector; last write wins. The
    /// table is flushed as a single style block at close time.
    fn set_style(&mut self, property: &str, value: &str) -> Result<(), PageError> {
        self.ensure_open()?;
        self.styles
            .entry(BODY_SELECTOR.to_string())
            .or_default()
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    /// Join all fragments emitted so far. Callable in any state; the content
    /// is only complete once the page has been closed.
    pub fn html(&self) -> String {
        self.preamble
            .iter()
            .chain(&self.body)
            .chain(&self.trailer)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True iff the page was opened and then closed.
    pub fn is_complete(&self) -> bool {
        self.state == PageState::Closed
    }
}

/// Fixed character substitution for free text and URLs.
/// The ampersand goes first so already-substituted entities are not escaped twice.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
