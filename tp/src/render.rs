//! Text projection of document state
//!
//! Rendering never mutates; it reads the document and the current
//! presentation preferences and produces the text the CLI prints after each
//! operation.

use colored::*;

use itinstore::{DayPlan, Document};

use crate::prefs::{Layout, Prefs, Theme};

/// How to present the document
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewOptions {
    pub prefs: Prefs,
    /// Read-only presentation: no indices, no editing hints
    pub view_only: bool,
}

fn accent(text: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Dark => text.cyan(),
        Theme::Light => text.blue(),
    }
}

/// Render the whole document: day list plus active-day detail
pub fn render_document(document: &Document, options: &ViewOptions) -> String {
    let mut out = String::new();

    if document.is_empty() {
        out.push_str("No days planned yet.");
        if !options.view_only {
            out.push_str(" Add one with `tp day add`.");
        }
        out.push('\n');
        return out;
    }

    for (index, day) in document.days().iter().enumerate() {
        let marker = if document.active_day_index() == Some(index) {
            "\u{25b8}"
        } else {
            " "
        };
        let count = day.activities.len();
        if options.view_only {
            out.push_str(&format!("{} {}\n", marker, accent(&day.title, options.prefs.theme)));
        } else {
            out.push_str(&format!(
                "{} {}. {} ({} activities)\n",
                marker,
                index + 1,
                accent(&day.title, options.prefs.theme),
                count
            ));
        }
    }

    if let Some(day) = document.active_day() {
        out.push('\n');
        out.push_str(&render_day(day, options));
    }

    out
}

/// Render one day's activities according to the layout preference
pub fn render_day(day: &DayPlan, options: &ViewOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", accent(&day.title, options.prefs.theme).bold()));

    if day.activities.is_empty() {
        out.push_str("  (no activities)\n");
        return out;
    }

    for (index, activity) in day.activities.iter().enumerate() {
        let prefix = if options.view_only {
            "  ".to_string()
        } else {
            format!("  {:>2}. ", index)
        };
        match options.prefs.layout {
            Layout::Grid => {
                let category = if activity.category.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", activity.category)
                };
                out.push_str(&format!(
                    "{}{:<6} {}{}\n",
                    prefix,
                    activity.time.dimmed(),
                    activity.title,
                    category.dimmed()
                ));
            }
            Layout::List => {
                out.push_str(&format!("{}{} {}\n", prefix, activity.time.dimmed(), activity.title));
                if !activity.category.is_empty() {
                    out.push_str(&format!("      category: {}\n", activity.category));
                }
                if !activity.notes.is_empty() {
                    out.push_str(&format!("      notes: {}\n", activity.notes));
                }
            }
        }
    }

    out
}
