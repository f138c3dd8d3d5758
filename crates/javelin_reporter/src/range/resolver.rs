use super::scanner::{PositionScanner, ScanError, TokenKind};
use crate::ast::{BindingId, Node, QualifiedName};
use std::sync::Arc;

/// Resolves the source range a problem is anchored to.
///
/// The resolver owns a scanner that is created on first use and reset
/// before every scan. It holds a cursor into the last scanned buffer, so an
/// instance must stay with one reporter and is never shared between units
/// in flight.
#[derive(Debug, Default)]
pub struct RangeResolver {
    scanner: Option<PositionScanner>,
}

impl RangeResolver {
    /// Creates a resolver; the scanner is allocated lazily.
    pub fn new() -> Self {
        Self::default()
    }

    fn scanner(&mut self, source: &Arc<str>, start: u32, end: u32) -> &mut PositionScanner {
        let scanner = self.scanner.get_or_insert_with(PositionScanner::new);
        scanner.reset_to(Arc::clone(source), start, end);
        scanner
    }

    /// Returns the start offset for a problem about `binding` at segment
    /// `index` of `node`.
    pub fn start(&self, node: &Node, binding: Option<BindingId>, index: usize) -> u32 {
        match node {
            Node::FieldReference { name_start, .. } => *name_start,
            Node::QualifiedName(name) => {
                segment_for(name, binding, index).map_or(name.span.start, |segment| {
                    name.segments[segment].start
                })
            }
            _ => node.start(),
        }
    }

    /// Returns the end offset for a problem about `binding` at segment
    /// `index` of `node`, scanning `source` when the stored end is short.
    pub fn end(
        &mut self,
        source: &Arc<str>,
        node: &Node,
        binding: Option<BindingId>,
        index: usize,
    ) -> u32 {
        match node {
            Node::QualifiedName(name) => {
                segment_for(name, binding, index).map_or(name.span.end, |segment| {
                    name.segments[segment].end
                })
            }
            Node::ArrayType { original_end, .. } => *original_end,
            Node::ParameterizedType {
                span,
                type_arguments,
            } => match type_arguments.last() {
                Some(last) if last.end() > span.end => {
                    self.closing_angle_bracket(source, span.end)
                }
                _ => span.end,
            },
            _ => node.end(),
        }
    }

    /// Returns the offset of the first `>` after `from` not matched by a `<`
    /// after `from`, or `from` itself if `{` or the end of input comes first.
    pub fn closing_angle_bracket(&mut self, source: &Arc<str>, from: u32) -> u32 {
        let len = source.len() as u32;
        let scanner = self.scanner(source, from.saturating_add(1), len.saturating_sub(1));
        match scan_closing_angle(scanner) {
            Ok(Some(offset)) => offset,
            Ok(None) => {
                tracing::debug!(from, "no closing '>' before '{{' or end of input");
                from
            }
            Err(err) => {
                tracing::debug!(from, %err, "closing '>' scan failed");
                from
            }
        }
    }

    /// Returns the offset just after the `count`-th `(` in `[start, end]`,
    /// or `start` if there is none.
    pub fn start_after_parens(
        &mut self,
        source: &Arc<str>,
        start: u32,
        end: u32,
        count: usize,
    ) -> u32 {
        let scanner = self.scanner(source, start, end);
        match scan_after_parens(scanner, count) {
            Ok(Some(offset)) => offset,
            Ok(None) => start,
            Err(err) => {
                tracing::debug!(start, %err, "parenthesis scan failed");
                start
            }
        }
    }

    /// Returns the offset just before the `)` matching the `count`-th `(` in
    /// `[start, end]`, or `end` if there is none.
    pub fn end_before_parens(
        &mut self,
        source: &Arc<str>,
        start: u32,
        end: u32,
        count: usize,
    ) -> u32 {
        let scanner = self.scanner(source, start, end);
        match scan_before_parens(scanner, count) {
            Ok(Some(offset)) => offset,
            Ok(None) => end,
            Err(err) => {
                tracing::debug!(end, %err, "parenthesis scan failed");
                end
            }
        }
    }
}

/// Picks the segment a problem about `binding` at `index` refers to.
fn segment_for(name: &QualifiedName, binding: Option<BindingId>, index: usize) -> Option<usize> {
    let binding = binding?;
    if name.binding == Some(binding) {
        return if index == 0 {
            name.first_bound_index.checked_sub(1)
        } else {
            Some(index)
        }
        .filter(|segment| *segment < name.segments.len());
    }
    let offset = name.first_bound_index;
    name.other_bindings
        .iter()
        .enumerate()
        .filter(|(i, _)| index == 0 || i + offset == index)
        .find(|(_, other)| **other == binding)
        .map(|(i, _)| i + offset)
        .filter(|segment| *segment < name.segments.len())
}

fn scan_closing_angle(scanner: &mut PositionScanner) -> Result<Option<u32>, ScanError> {
    let mut depth = 0u32;
    while let Some(token) = scanner.next_token()? {
        match token.kind {
            TokenKind::Punct(b'<') => depth += 1,
            TokenKind::Punct(b'>') if depth == 0 => return Ok(Some(token.start)),
            TokenKind::Punct(b'>') => depth -= 1,
            TokenKind::Punct(b'{') => return Ok(None),
            _ => {}
        }
    }
    Ok(None)
}

fn scan_after_parens(
    scanner: &mut PositionScanner,
    count: usize,
) -> Result<Option<u32>, ScanError> {
    let mut seen = 0;
    while let Some(token) = scanner.next_token()? {
        if token.kind == TokenKind::Punct(b'(') {
            seen += 1;
            if seen == count {
                return Ok(Some(token.end + 1));
            }
        }
    }
    Ok(None)
}

fn scan_before_parens(
    scanner: &mut PositionScanner,
    count: usize,
) -> Result<Option<u32>, ScanError> {
    let mut depth = 0usize;
    let mut seen = 0usize;
    let mut target = None;
    while let Some(token) = scanner.next_token()? {
        match token.kind {
            TokenKind::Punct(b'(') => {
                depth += 1;
                seen += 1;
                if seen == count {
                    target = Some(depth);
                }
            }
            TokenKind::Punct(b')') => {
                if target == Some(depth) {
                    return Ok(Some(token.start.saturating_sub(1)));
                }
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
    }
    Ok(None)
}
