// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTML-aware substitution — rewrite spaces in text nodes only.
//
// The fragment is parsed into an `RcDom` with html5ever, every text node under
// `<body>` is rewritten in place, and the children of `<body>` are serialised
// back. Tags and attribute values keep their spaces.

use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use tracing::{debug, instrument};
use unispace_core::error::{Result, UnispaceError};

use crate::registry::Registry;
use crate::substitute::{combine_variants, substitute_spaces};

/// Replace U+0020 with `replacement` inside the text nodes of `html`.
///
/// Returns the serialised inner HTML of the parsed `<body>`, so the parser's
/// normalisation applies (unclosed tags get closed, entities are re-escaped).
#[instrument(skip_all, fields(html_len = html.len()))]
pub fn substitute_spaces_in_html(html: &str, replacement: &str) -> Result<String> {
    if html.is_empty() {
        return Ok(String::new());
    }

    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
    let body = find_body(&dom.document)
        .ok_or_else(|| UnispaceError::Markup("parsed document has no <body>".into()))?;

    let rewritten = rewrite_text_nodes(&body, replacement);
    debug!(rewritten, "text nodes rewritten");

    let mut output = Vec::new();
    let handle = SerializableHandle::from(body);
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut output, &handle, opts)
        .map_err(|err| UnispaceError::Markup(format!("failed to serialise body: {err}")))?;

    String::from_utf8(output)
        .map_err(|err| UnispaceError::Markup(format!("serialiser produced invalid UTF-8: {err}")))
}

/// HTML counterpart of [`crate::apply_custom_spacing`].
///
/// An empty selection returns `html` untouched, without a parse round trip.
pub fn apply_custom_spacing_html<S: AsRef<str>>(
    selected: &[S],
    html: &str,
    registry: &Registry,
) -> Result<String> {
    if selected.is_empty() {
        return Ok(html.to_owned());
    }
    substitute_spaces_in_html(html, &combine_variants(selected, registry))
}

fn find_body(node: &Handle) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &node.data
        && &*name.local == "body"
    {
        return Some(node.clone());
    }
    node.children.borrow().iter().find_map(find_body)
}

/// Returns the number of text nodes visited.
fn rewrite_text_nodes(node: &Handle, replacement: &str) -> usize {
    if let NodeData::Text { contents } = &node.data {
        let replaced = substitute_spaces(&contents.borrow(), replacement);
        *contents.borrow_mut() = StrTendril::from(replaced);
        return 1;
    }
    node.children
        .borrow()
        .iter()
        .map(|child| rewrite_text_nodes(child, replacement))
        .sum()
}
