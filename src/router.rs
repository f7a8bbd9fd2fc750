//! Fragment routing: which item, if any, the URL puts in edit mode.

use crate::edit::EditTarget;
use crate::location::FragmentChange;
use crate::model::TodoId;
use crate::registry::ItemRegistry;
use crate::render::Document;

const EDIT_PREFIX: &str = "edit/";

/// Extracts the edit target from a URL (or a bare `#fragment`).
///
/// Only fragments of the exact form `edit/<lowercase hex>` name a target.
pub fn resolve(url: &str) -> Option<TodoId> {
    let fragment = match url.strip_prefix('#') {
        Some(fragment) => fragment.to_string(),
        None => reqwest::Url::parse(url).ok()?.fragment()?.to_string(),
    };
    parse_edit_fragment(&fragment)
}

pub fn parse_edit_fragment(fragment: &str) -> Option<TodoId> {
    let id = fragment.strip_prefix(EDIT_PREFIX)?;
    let is_hex = !id.is_empty() && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
    is_hex.then(|| TodoId::new(id))
}

pub fn edit_fragment(id: &TodoId) -> String {
    format!("{}{}", EDIT_PREFIX, id)
}

/// Applies one fragment transition: the old target is cancelled before the
/// new one is activated.
pub fn on_fragment_change(
    change: &FragmentChange,
    registry: &mut ItemRegistry,
    document: &mut Document,
) {
    if let Some(id) = resolve(&change.old_url)
        && let Some(target) = EditTarget::lookup(registry, document, &id)
    {
        target.cancel();
    }

    if let Some(id) = resolve(&change.new_url)
        && let Some(target) = EditTarget::lookup(registry, document, &id)
    {
        target.enter();
    }
}

/// Re-applies the current URL after the list has been rendered, so a reload
/// or deep link lands in edit mode. Activation only.
pub fn restore(href: &str, registry: &mut ItemRegistry, document: &mut Document) {
    if let Some(id) = resolve(href)
        && let Some(target) = EditTarget::lookup(registry, document, &id)
    {
        target.enter();
    }
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
