//! Command registry and dispatcher
//!
//! Maps each exact keyword phrase to an action against the page builder.
//! The registry is stateless beyond its static table: argument-count checks
//! live inside the individual actions, and any failure an action raises is
//! wrapped with the offending phrase before it reaches the driver.

use crate::wahy::document::{PageBuilder, PageError};
use std::collections::HashMap;
use std::fmt;

/// Errors produced while executing a recognized command.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// The action was invoked with fewer arguments than it needs.
    MissingArgument {
        phrase: String,
        expects: &'static str,
    },
    /// The page builder rejected the operation.
    Command { phrase: String, error: PageError },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::MissingArgument { phrase, expects } => {
                write!(f, "command \"{}\" expects {}", phrase, expects)
            }
            DispatchError::Command { phrase, error } => {
                write!(f, "command \"{}\" failed: {}", phrase, error)
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Action-local failure, before the phrase context is attached.
enum ActionError {
    MissingArgument(&'static str),
    Page(PageError),
}

impl ActionError {
    fn attach(self, phrase: &str) -> DispatchError {
        match self {
            ActionError::MissingArgument(expects) => DispatchError::MissingArgument {
                phrase: phrase.to_string(),
                expects,
            },
            ActionError::Page(error) => DispatchError::Command {
                phrase: phrase.to_string(),
                error,
            },
        }
    }
}

type Action = fn(&[String], &mut PageBuilder) -> Result<(), ActionError>;

struct CommandSpec {
    action: Action,
    description: &'static str,
}

/// Registry of keyword phrases.
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandSpec>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl CommandRegistry {
    /// Build the registry with the full Wahy command table.
    pub fn with_defaults() -> Self {
        let mut registry = CommandRegistry {
            commands: HashMap::new(),
        };
        registry.register("افتح صفحة", open_page, "يفتح صفحة جديدة بالعنوان المعطى");
        registry.register("أغلق صفحة", close_page, "يغلق الصفحة الحالية");
        registry.register("أضف عنوان", add_heading, "يضيف عنوانًا رئيسيًا");
        registry.register("أضف عنوان_فرعي", add_subheading, "يضيف عنوانًا فرعيًا");
        registry.register("أضف فقرة", add_paragraph, "يضيف فقرة نصية");
        registry.register("أضف رابط", add_link, "يضيف رابطًا بنص وعنوان URL");
        registry.register("أضف صورة", add_image, "يضيف صورة بعنوان URL ووصف");
        registry.register(
            "غيّر لون_الخلفية إلى",
            change_background_color,
            "يغيّر لون خلفية الصفحة",
        );
        registry.register("غيّر لون_النص إلى", change_text_color, "يغيّر لون النص");
        registry.register("غيّر الخط إلى", change_font, "يغيّر خط الصفحة");
        registry.register("ابدأ قائمة", start_list, "يبدأ قائمة نقطية");
        registry.register("أنهِ قائمة", end_list, "ينهي القائمة الحالية");
        registry.register("ابدأ قائمة_مرقمة", start_ordered_list, "يبدأ قائمة مرقمة");
        registry.register("أنهِ قائمة_مرقمة", end_list, "ينهي القائمة المرقمة الحالية");
        registry.register("أضف عنصر", add_list_item, "يضيف عنصرًا إلى القائمة الحالية");
        registry.register("أضف خط_فاصل", add_horizontal_rule, "يضيف خطًا فاصلًا");
        registry.register("أضف مسافة", add_space, "يضيف سطرًا فارغًا");
        registry.register("ابدأ قسم", start_section, "يبدأ قسمًا جديدًا");
        registry.register("أنهِ قسم", end_section, "ينهي القسم الحالي");
        registry
    }

    fn register(&mut self, phrase: &'static str, action: Action, description: &'static str) {
        self.commands.insert(
            phrase,
            CommandSpec {
                action,
                description,
            },
        );
    }

    /// Execute a phrase against the page.
    ///
    /// `Ok(false)` means the phrase is not in the table (the driver turns
    /// that into an unknown-command failure); errors raised by the action
    /// come back wrapped with the phrase.
    pub fn execute(
        &self,
        phrase: &str,
        args: &[String],
        page: &mut PageBuilder,
    ) -> Result<bool, DispatchError> {
        let Some(spec) = self.commands.get(phrase) else {
            return Ok(false);
        };
        (spec.action)(args, page).map_err(|error| error.attach(phrase))?;
        Ok(true)
    }

    /// All registered phrases with their descriptions, sorted by phrase.
    pub fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self
            .commands
            .iter()
            .map(|(phrase, spec)| (*phrase, spec.description))
            .collect();
        entries.sort();
        entries
    }
}

/// Fetch a required argument or report what the command expects.
fn require<'a>(
    args: &'a [String],
    index: usize,
    expects: &'static str,
) -> Result<&'a str, ActionError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(ActionError::MissingArgument(expects))
}

fn open_page(args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    let title = require(args, 0, "the page title")?;
    page.open_page(title).map_err(ActionError::Page)
}

fn close_page(_args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    page.close_page().map_err(ActionError::Page)
}

fn add_heading(args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    let text = require(args, 0, "the heading text")?;
    page.add_heading(text, 1).map_err(ActionError::Page)
}

fn add_subheading(args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    let text = require(args, 0, "the subheading text")?;
    page.add_subheading(text).map_err(ActionError::Page)
}

fn add_paragraph(args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    let text = require(args, 0, "the paragraph text")?;
    page.add_paragraph(text).map_err(ActionError::Page)
}

fn add_link(args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    let text = require(args, 0, "the link text and a URL")?;
    let url = require(args, 1, "the link text and a URL")?;
    page.add_link(text, url).map_err(ActionError::Page)
}

fn add_image(args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    let url = require(args, 0, "the image URL and a description")?;
    let alt = require(args, 1, "the image URL and a description")?;
    page.add_image(url, alt).map_err(ActionError::Page)
}

fn change_background_color(args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    let color = require(args, 0, "a color name")?;
    page.set_background_color(color).map_err(ActionError::Page)
}

fn change_text_color(args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    let color = require(args, 0, "a color name")?;
    page.set_text_color(color).map_err(ActionError::Page)
}

fn change_font(args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    let family = require(args, 0, "a font family name")?;
    page.set_font(family).map_err(ActionError::Page)
}

fn start_list(_args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    page.start_list().map_err(ActionError::Page)
}

fn start_ordered_list(_args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    page.start_ordered_list().map_err(ActionError::Page)
}

fn end_list(_args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    page.end_list().map_err(ActionError::Page)
}

fn add_list_item(args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    let text = require(args, 0, "the item text")?;
    page.add_list_item(text).map_err(ActionError::Page)
}

fn add_horizontal_rule(_args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    page.add_horizontal_rule().map_err(ActionError::Page)
}

fn add_space(_args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    page.add_space().map_err(ActionError::Page)
}

fn start_section(args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    let label = args.first().map(String::as_str);
    page.start_section(label).map_err(ActionError::Page)
}

fn end_section(_args: &[String], page: &mut PageBuilder) -> Result<(), ActionError> {
    page.end_section().map_err(ActionError::Page)
}
