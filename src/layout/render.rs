//! Plain-text rendering of layout groups, used by the CLI.

use crate::layout::engine::{GroupKind, LayoutGroup};

/// Separator drawn between the two hemistichs of a couplet.
pub const HEMISTICH_SEPARATOR: &str = "  ٭  ";

/// Render groups as one line each.
///
/// Numbered groups are prefixed with their number, couplets are joined by
/// [`HEMISTICH_SEPARATOR`], comments are parenthesized.
pub fn render_plain(groups: &[LayoutGroup<'_>]) -> String {
    groups
        .iter()
        .map(render_group)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_group(group: &LayoutGroup<'_>) -> String {
    let body = match (group.kind, group.second()) {
        (GroupKind::Couplet, Some(second)) => {
            format!("{}{}{}", group.first().text, HEMISTICH_SEPARATOR, second.text)
        }
        (GroupKind::Comment, _) => format!("({})", group.first().text),
        _ => group.first().text.clone(),
    };

    match group.number {
        Some(n) => format!("{}. {}", n, body),
        None => body,
    }
}
