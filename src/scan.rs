//! Markup scanner: discovers declared fields and groups in a form's
//! shorthand source text.
//!
//! The dialect declares elements as `[<keyword> <token>*]`, optionally
//! closed by `[/keyword]`. Scanning is a single pass per list and never
//! fails: a bracket span that does not parse as a declaration produces no
//! entry, and the scan resumes at the next `[`.

use std::collections::HashSet;

use winnow::combinator::{alt, opt, peek};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

use crate::types::{FieldDescriptor, FormSnapshot, GroupDescriptor};

/// Keywords that declare containers or meta elements with no direct
/// submitted value. They never produce a field.
const EXCLUDED_KEYWORDS: &[&str] = &["group", "step", "repeater", "submit"];

/// Scan shorthand markup into the current field/group universe.
///
/// Field and group extraction are independent passes; each list is ordered
/// by first appearance and de-duplicated by name (first occurrence wins).
#[must_use]
pub fn scan(markup: &str) -> FormSnapshot {
    FormSnapshot {
        fields: scan_fields(markup),
        groups: scan_groups(markup),
    }
}

/// Every declaration whose keyword is not a container/meta keyword, in
/// order of first appearance. The star-stripped keyword becomes the kind.
#[must_use]
pub fn scan_fields(markup: &str) -> Vec<FieldDescriptor> {
    let mut seen = HashSet::new();
    declarations(markup)
        .into_iter()
        .filter(|d| !EXCLUDED_KEYWORDS.contains(&d.keyword.as_str()))
        .filter_map(|d| {
            let name = d.name?;
            seen.insert(name.clone()).then_some(FieldDescriptor {
                name,
                kind: d.keyword,
            })
        })
        .collect()
}

/// Every `[group <name>]` declaration, in order of first appearance.
#[must_use]
pub fn scan_groups(markup: &str) -> Vec<GroupDescriptor> {
    let mut seen = HashSet::new();
    declarations(markup)
        .into_iter()
        .filter(|d| d.keyword == "group")
        .filter_map(|d| {
            let name = d.name?;
            seen.insert(name.clone()).then_some(GroupDescriptor { name })
        })
        .collect()
}

/// One parsed bracket declaration. `name` is the first name-like token
/// after the keyword, if any.
#[derive(Debug, PartialEq, Eq)]
struct TagDecl {
    keyword: String,
    name: Option<String>,
}

fn declarations(markup: &str) -> Vec<TagDecl> {
    let mut decls = Vec::new();
    let mut rest = markup;
    while let Some(pos) = rest.find('[') {
        rest = &rest[pos..];
        let mut input = rest;
        match tag_decl.parse_next(&mut input) {
            Ok(decl) => {
                decls.push(decl);
                rest = input;
            }
            // not a declaration; skip this bracket and keep scanning
            Err(_) => rest = &rest[1..],
        }
    }
    decls
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

fn keyword<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || c == '_' || c == '-'
        }),
    )
        .take()
        .parse_next(input)
}

/// A bare (unquoted) token: anything up to whitespace or the closing
/// bracket.
fn bare_token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !c.is_whitespace() && c != ']').parse_next(input)
}

/// A quoted option value. Quoted tokens are never element names.
fn quoted_token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((
        ('"', take_while(0.., |c: char| c != '"'), '"').take(),
        ('\'', take_while(0.., |c: char| c != '\''), '\'').take(),
    ))
    .parse_next(input)
}

fn tag_decl(input: &mut &str) -> ModalResult<TagDecl> {
    '['.parse_next(input)?;
    ws.parse_next(input)?;
    let kw = keyword.parse_next(input)?;
    // required-marker: `text*` and `text` are the same kind
    let _ = opt('*').parse_next(input)?;

    let mut name = None;
    loop {
        ws.parse_next(input)?;
        if opt(peek(']')).parse_next(input)?.is_some() {
            break;
        }
        let quoted = opt(quoted_token).parse_next(input)?;
        if quoted.is_some() {
            continue;
        }
        let token = bare_token.parse_next(input)?;
        if name.is_none() && is_name(token) {
            name = Some(token.to_owned());
        }
    }
    ']'.parse_next(input)?;

    Ok(TagDecl {
        keyword: kw.to_owned(),
        name,
    })
}

/// Name-like tokens start with a letter or underscore and continue with
/// word characters or hyphens. Option flags (`id:phone`), size specs
/// (`40x5` starts with a digit), and quoted values all fail this test.
fn is_name(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
