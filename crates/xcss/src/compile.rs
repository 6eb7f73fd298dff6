//! Compiles a [`Style`] under a class selector into CSS rules.
//!
//! Compilation walks the style once, in order:
//!
//! 1. declarations are split per breakpoint slot, expanded
//!    (utilities, tokens, units) and appended to the rule for the current
//!    selector in that slot
//! 2. nested blocks combine their selector with the current one
//! 3. `@alias` blocks switch the current slot
//! 4. range blocks switch the slot and exclude the range's end, so their
//!    rules land in a segment of their own
//!
//! Within one rule a raw property is declared once: a later declaration
//! removes the earlier one and is appended, so the last applied wins.
//! Rules for the base slot come first, followed by the rules of every
//! breakpoint in registration order. A slot is split into consecutive
//! segments whenever the excluded breakpoints change, which keeps the
//! source order of ranged and open declarations intact.

use std::collections::BTreeMap;

use crate::error::{Result, XcssError};
use crate::parser::combine_selectors;
use crate::responsive::{Breakpoints, Slot, expand_value};
use crate::scales::Scales;
use crate::style::{Style, StyleItem};
use crate::utils::{Declaration, expand_declaration};

/// A selector and its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl CssRule {
    fn write(&self, out: &mut String) {
        out.push_str(&self.selector);
        out.push('{');
        for (idx, (property, value)) in self.declarations.iter().enumerate() {
            if idx > 0 {
                out.push(';');
            }
            out.push_str(property);
            out.push(':');
            out.push_str(value);
        }
        out.push('}');
    }
}

/// The rules produced for one class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledStyle {
    /// `(media condition, rules)` in emission order. `None` is unconditional.
    pub blocks: Vec<(Option<String>, Vec<CssRule>)>,
}

impl CompiledStyle {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Unconditional rules of the leading base segment.
    pub fn base(&self) -> &[CssRule] {
        match self.blocks.first() {
            Some((None, rules)) => rules,
            _ => &[],
        }
    }

    /// Serializes the blocks in compact form.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (condition, rules) in &self.blocks {
            match condition {
                None => rules.iter().for_each(|rule| rule.write(&mut out)),
                Some(condition) => {
                    out.push_str("@media ");
                    out.push_str(condition);
                    out.push('{');
                    rules.iter().for_each(|rule| rule.write(&mut out));
                    out.push('}');
                }
            }
        }
        out
    }
}

/// Compiles `style` with `selector` standing for `&`.
///
/// Fails when a selector or value contains `</`, which would end the
/// `<style>` element the stylesheet is embedded in.
pub fn compile(
    style: &Style,
    selector: &str,
    scales: &Scales,
    breakpoints: &Breakpoints,
) -> Result<CompiledStyle> {
    let mut compiler = Compiler {
        scales,
        breakpoints,
        segments: BTreeMap::new(),
        phases: BTreeMap::new(),
    };
    compiler.walk(style, selector, None, &[])?;

    let mut compiled = CompiledStyle::default();
    for (key, rules) in compiler.segments {
        let condition = breakpoints.range_condition(key.slot, &key.until)?;
        compiled.blocks.push((condition, rules));
    }
    log::trace!(
        "compiled `{}`: {} base rules, {} blocks",
        selector,
        compiled.base().len(),
        compiled.blocks.len()
    );
    Ok(compiled)
}

/// Where a segment's rules are emitted: slot first, then source order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SegmentKey {
    slot: Slot,
    phase: u32,
    until: Vec<usize>,
}

struct Compiler<'a> {
    scales: &'a Scales,
    breakpoints: &'a Breakpoints,
    segments: BTreeMap<SegmentKey, Vec<CssRule>>,
    /// Current phase and excluded breakpoints per slot.
    phases: BTreeMap<Slot, (u32, Vec<usize>)>,
}

impl Compiler<'_> {
    fn walk(&mut self, style: &Style, selector: &str, slot: Slot, until: &[usize]) -> Result<()> {
        for item in style.items() {
            match item {
                StyleItem::Declaration { property, value } => {
                    for (at, scalar) in expand_value(self.breakpoints, value, slot)? {
                        if excluded(at, until) {
                            continue;
                        }
                        let declarations = expand_declaration(property, scalar, self.scales)?;
                        self.push(at, until, selector, declarations)?;
                    }
                }
                StyleItem::Nested {
                    selector: child,
                    style,
                } => {
                    let combined = combine_selectors(selector, child);
                    self.walk(style, &combined, slot, until)?;
                }
                StyleItem::Breakpoint { alias, style } => {
                    let at = match self.breakpoints.slot(alias)? {
                        None => slot,
                        inner => inner,
                    };
                    if !excluded(at, until) {
                        self.walk(style, selector, at, until)?;
                    }
                }
                StyleItem::Range {
                    from,
                    until: end,
                    style,
                } => {
                    let at = match self.breakpoints.slot(from)? {
                        None => slot,
                        inner => inner,
                    };
                    let end = self.breakpoints.slot(end)?.ok_or_else(|| {
                        XcssError::invalid_value(end.clone(), "a breakpoint range cannot end at `initial`")
                    })?;
                    if at == Some(end) || excluded(at, until) {
                        continue;
                    }
                    let mut bounds = until.to_vec();
                    if !bounds.contains(&end) {
                        bounds.push(end);
                        bounds.sort_unstable();
                    }
                    self.walk(style, selector, at, &bounds)?;
                }
            }
        }
        Ok(())
    }

    fn push(
        &mut self,
        slot: Slot,
        until: &[usize],
        selector: &str,
        declarations: Vec<Declaration>,
    ) -> Result<()> {
        if declarations.is_empty() {
            return Ok(());
        }
        reject_markup(selector)?;
        for (_, value) in &declarations {
            reject_markup(value)?;
        }

        let (phase, last) = self.phases.entry(slot).or_insert_with(|| (0, Vec::new()));
        if last.as_slice() != until {
            *phase += 1;
            *last = until.to_vec();
        }
        let key = SegmentKey {
            slot,
            phase: *phase,
            until: until.to_vec(),
        };

        let rules = self.segments.entry(key).or_default();
        let idx = match rules.iter().position(|rule| rule.selector == selector) {
            Some(idx) => idx,
            None => {
                rules.push(CssRule {
                    selector: selector.to_string(),
                    declarations: Vec::new(),
                });
                rules.len() - 1
            }
        };
        let rule = &mut rules[idx];
        for (property, value) in declarations {
            rule.declarations.retain(|(existing, _)| *existing != property);
            rule.declarations.push((property, value));
        }
        Ok(())
    }
}

fn excluded(slot: Slot, until: &[usize]) -> bool {
    slot.is_some_and(|idx| until.contains(&idx))
}

/// The stylesheet is embedded in a `<style>` element; `</` would end it.
fn reject_markup(text: &str) -> Result<()> {
    if text.contains("</") {
        return Err(XcssError::invalid_value(text, "`</` cannot appear in a stylesheet"));
    }
    Ok(())
}
