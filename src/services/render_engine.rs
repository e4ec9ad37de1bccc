//! Render Engine for HotRoute.
//!
//! A pure function from a link list to the displayed list. Important links
//! come first; within each group the newest link comes first. The sort is
//! stable, so links with equal dates keep their stored order.

use std::cmp::Ordering;

use crate::types::display::{DisplayItem, DisplayList};
use crate::types::link::Link;

const STAR_ON: &str = "\u{2605}";
const STAR_OFF: &str = "\u{2606}";

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Display ordering: important first, then by date descending. Unparseable
/// dates sort after every parseable date in their group.
pub fn sort_for_display(links: &[Link]) -> Vec<&Link> {
    let mut keyed: Vec<_> = links.iter().map(|l| (l, l.parsed_date())).collect();
    keyed.sort_by(|(a, a_date), (b, b_date)| {
        b.important.cmp(&a.important).then_with(|| match (a_date, b_date) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    });
    keyed.into_iter().map(|(l, _)| l).collect()
}

/// Renders `links` into a full display list.
pub fn render(links: &[Link]) -> DisplayList {
    if links.is_empty() {
        return DisplayList::Empty;
    }
    let items = sort_for_display(links)
        .into_iter()
        .map(|link| DisplayItem {
            id: link.id.clone(),
            name_html: html_escape(&link.name),
            url: link.url.clone(),
            important: link.important,
            star_icon: if link.important { STAR_ON } else { STAR_OFF }.to_string(),
            star_title: if link.important { "Important" } else { "Mark as important" }.to_string(),
        })
        .collect();
    DisplayList::Items(items)
}

impl DisplayList {
    /// Markup for the list container. Every interactive element carries a
    /// `data-role` so the page can dispatch from a single delegated listener.
    pub fn to_html(&self) -> String {
        let items = match self {
            DisplayList::Empty => {
                return concat!(
                    "<div class=\"empty-state\">",
                    "<div class=\"empty-icon\">\u{1F516}</div>",
                    "<p>No links saved yet</p>",
                    "<p class=\"empty-hint\">Click the + button to add a new link</p>",
                    "</div>"
                )
                .to_string();
            }
            DisplayList::Items(items) => items,
        };

        let mut html = String::with_capacity(items.len() * 640);
        for item in items {
            let id = html_escape(&item.id);
            let url = html_escape(&item.url);
            let important = if item.important { " important" } else { "" };
            let active = if item.important { " active" } else { "" };
            html.push_str(&format!(
                concat!(
                    "<li class=\"link-item{important}\" data-id=\"{id}\">",
                    "<div class=\"link-content\">",
                    "<div class=\"link-name\" data-role=\"reveal\" data-id=\"{id}\" data-url=\"{url}\" ",
                    "data-name=\"{name}\" title=\"Click to show URL\">{name}</div>",
                    "</div>",
                    "<div class=\"link-actions\">",
                    "<button class=\"action-btn copy-btn\" data-role=\"copy\" data-url=\"{url}\" title=\"Copy URL\">\u{2398}</button>",
                    "<button class=\"action-btn open-btn\" data-role=\"open\" data-url=\"{url}\" title=\"Open in browser\">\u{2197}</button>",
                    "<button class=\"action-btn delete-btn\" data-role=\"delete\" data-id=\"{id}\" title=\"Delete\">\u{2715}</button>",
                    "<button class=\"action-btn star-btn{active}\" data-role=\"star\" data-id=\"{id}\" title=\"{star_title}\">{star}</button>",
                    "</div>",
                    "</li>"
                ),
                important = important,
                active = active,
                id = id,
                url = url,
                name = item.name_html,
                star_title = item.star_title,
                star = item.star_icon,
            ));
        }
        html
    }
}
