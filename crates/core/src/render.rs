//! Side-by-side projection of annotated spans
//!
//! Fragments keep raw text so the columns reconstruct their inputs exactly;
//! escaping happens only when a column is turned into markup.

use serde::{Deserialize, Serialize};

use crate::annotate::{AnnotatedSpan, Change, ChangeId, ChangeKind};
use crate::diff::SpanKind;

/// Highlight class of a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentClass {
    Added,
    Removed,
    Unchanged,
}

impl FragmentClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            FragmentClass::Added => "added",
            FragmentClass::Removed => "removed",
            FragmentClass::Unchanged => "unchanged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub text: String,
    pub css_class: FragmentClass,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub anchor_id: Option<ChangeId>,
}

impl Fragment {
    fn new(text: &str, css_class: FragmentClass, anchor_id: Option<ChangeId>) -> Self {
        Self {
            text: text.to_string(),
            css_class,
            anchor_id,
        }
    }

    /// Render as a single `<span>` with escaped content
    pub fn to_html(&self) -> String {
        let text = escape_html(&self.text);
        match self.anchor_id {
            Some(id) => format!(
                "<span id=\"{}\" class=\"{}\">{}</span>",
                id.anchor(),
                self.css_class.css_class(),
                text
            ),
            None => format!("<span class=\"{}\">{}</span>", self.css_class.css_class(), text),
        }
    }
}

/// One side of the side-by-side view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    pub fragments: Vec<Fragment>,
}

impl Column {
    fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Concatenated raw text of every fragment
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn to_html(&self) -> String {
        self.fragments.iter().map(Fragment::to_html).collect()
    }

    /// Fragment carrying the given anchor
    pub fn find_anchor(&self, id: ChangeId) -> Option<&Fragment> {
        self.fragments.iter().find(|f| f.anchor_id == Some(id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Columns {
    pub left: Column,
    pub right: Column,
}

/// Project annotated spans into original-side and modified-side columns.
///
/// Spans that were not promoted to a change (whitespace-only edits) still
/// render on their own side, unhighlighted and without an anchor.
pub fn project(spans: &[AnnotatedSpan]) -> Columns {
    let mut columns = Columns::default();

    for annotated in spans {
        let text = annotated.span.text.as_str();
        let id = annotated.change_id;

        match annotated.span.kind {
            SpanKind::Equal => {
                columns.left.push(Fragment::new(text, FragmentClass::Unchanged, None));
                columns.right.push(Fragment::new(text, FragmentClass::Unchanged, None));
            }
            SpanKind::Deleted => {
                let class = if id.is_some() {
                    FragmentClass::Removed
                } else {
                    FragmentClass::Unchanged
                };
                columns.left.push(Fragment::new(text, class, id));
            }
            SpanKind::Inserted => {
                let class = if id.is_some() {
                    FragmentClass::Added
                } else {
                    FragmentClass::Unchanged
                };
                columns.right.push(Fragment::new(text, class, id));
            }
        }
    }

    columns
}

/// Change list markup; each entry carries `data-change` for scroll hooks
pub fn changes_panel_html(changes: &[Change]) -> String {
    changes
        .iter()
        .map(|change| {
            let class = match change.kind {
                ChangeKind::Inserted => "ins",
                ChangeKind::Deleted => "rem",
            };
            format!(
                "<div class=\"chgblk {}\" data-change=\"{}\">{}<br>&quot;{}&quot;</div>",
                class,
                change.id,
                escape_html(&change.label()),
                escape_html(&change.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
