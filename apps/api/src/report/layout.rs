//! Positions the title and feedback lines on A4 pages.

use crate::report::pdf::{write_pdf, Font, Page, TextLine, A4_HEIGHT, A4_WIDTH};
use crate::report::RenderError;

pub const REPORT_TITLE: &str = "AI Resume Feedback Report";
pub const COMPARISON_HEADING: &str = "📌 Job Description Comparison:";

const TITLE_FONT_SIZE: f32 = 16.0;
const TITLE_X: f32 = 100.0;
const TITLE_OFFSET: f32 = 50.0;

const BODY_FONT_SIZE: f32 = 12.0;
const BODY_X: f32 = 50.0;
/// Body baseline on the first page, measured from the top edge.
const BODY_OFFSET_FIRST_PAGE: f32 = 100.0;
/// Body baseline on continuation pages, measured from the top edge.
const BODY_OFFSET_CONTINUATION: f32 = 50.0;
const LEADING: f32 = 16.0;
const BOTTOM_MARGIN: f32 = 50.0;

/// Positioned report content, ready to serialise.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<Page>,
}

impl ReportLayout {
    /// Body text in reading order, across all pages, excluding the title.
    pub fn body_lines(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|p| p.lines.iter())
            .filter(|l| l.font == Font::Helvetica)
            .map(|l| l.text.as_str())
            .collect()
    }

    pub fn to_pdf(&self) -> Result<Vec<u8>, RenderError> {
        write_pdf(&self.pages, A4_WIDTH, A4_HEIGHT)
    }
}

/// Builds the page layout for one or two feedback blocks.
///
/// Body order: resume lines; then, when a comparison block is given, a blank line,
/// the comparison heading, and the comparison lines.
pub fn layout_report(
    resume_feedback: &str,
    comparison_feedback: Option<&str>,
) -> Result<ReportLayout, RenderError> {
    if resume_feedback.trim().is_empty() {
        return Err(RenderError::EmptyBlock("resume"));
    }
    if comparison_feedback.is_some_and(|c| c.trim().is_empty()) {
        return Err(RenderError::EmptyBlock("comparison"));
    }

    let mut body: Vec<&str> = split_lines(resume_feedback).collect();
    if let Some(comparison) = comparison_feedback {
        body.push("");
        body.push(COMPARISON_HEADING);
        body.extend(split_lines(comparison));
    }

    let mut pages = vec![Page {
        lines: vec![TextLine {
            text: REPORT_TITLE.to_string(),
            x: TITLE_X,
            y: A4_HEIGHT - TITLE_OFFSET,
            font: Font::HelveticaBold,
            size: TITLE_FONT_SIZE,
        }],
    }];
    let mut y = A4_HEIGHT - BODY_OFFSET_FIRST_PAGE;

    for text in body {
        if y < BOTTOM_MARGIN {
            // A blank line never opens a page.
            if text.is_empty() {
                continue;
            }
            pages.push(Page::default());
            y = A4_HEIGHT - BODY_OFFSET_CONTINUATION;
        }
        // Blank lines only advance the cursor.
        if !text.is_empty() {
            if let Some(page) = pages.last_mut() {
                page.lines.push(TextLine {
                    text: text.to_string(),
                    x: BODY_X,
                    y,
                    font: Font::Helvetica,
                    size: BODY_FONT_SIZE,
                });
            }
        }
        y -= LEADING;
    }

    Ok(ReportLayout { pages })
}

fn split_lines(block: &str) -> impl Iterator<Item = &str> {
    block.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l))
}
