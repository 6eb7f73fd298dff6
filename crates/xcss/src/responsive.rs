//! Breakpoints and responsive values.
//!
//! [`Breakpoints`] is an ordered registry of alias → media condition. The
//! alias `initial` is reserved and means "no condition". Registration order
//! is emission order: rules for later breakpoints come later in the
//! stylesheet, so with `min-width` conditions the widest matching
//! breakpoint wins.
//!
//! Internally a breakpoint position is a *slot*: `None` for `initial`,
//! `Some(i)` for the i-th registered breakpoint. `Option`'s ordering puts
//! `None` first, which is exactly the emission order.

use crate::error::{Result, XcssError};
use crate::parser::{media_condition, negate_media_condition};
use crate::types::value::{StyleValue, normalize_alias};

/// The reserved alias for "no media condition".
pub const INITIAL: &str = "initial";

/// A breakpoint position: `None` is `initial`.
pub type Slot = Option<usize>;

/// A registered breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    pub alias: String,
    /// Normalized media condition, e.g. `(min-width: 640px)`.
    pub condition: String,
}

/// Ordered breakpoint registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    entries: Vec<Breakpoint>,
}

impl Default for Breakpoints {
    /// `sm` 640px, `md` 768px, `lg` 1024px, `xl` 1280px.
    fn default() -> Self {
        let entries = [("sm", 640), ("md", 768), ("lg", 1024), ("xl", 1280)]
            .into_iter()
            .map(|(alias, px)| Breakpoint {
                alias: alias.to_string(),
                condition: format!("(min-width: {}px)", px),
            })
            .collect();
        Self { entries }
    }
}

impl Breakpoints {
    /// An empty registry; only `initial` is known.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers a breakpoint after the existing ones.
    ///
    /// The alias may carry a leading `@`. Fails with
    /// [`XcssError::ReservedBreakpoint`] for `initial`,
    /// [`XcssError::DuplicateBreakpoint`] when the alias or the normalized
    /// condition is already registered, and [`XcssError::InvalidValue`]
    /// for a malformed condition.
    pub fn with(mut self, alias: &str, condition: &str) -> Result<Self> {
        let alias = normalize_alias(alias);
        if alias.is_empty() {
            return Err(XcssError::invalid_value(alias, "empty breakpoint alias"));
        }
        if alias == INITIAL {
            return Err(XcssError::ReservedBreakpoint(alias));
        }
        let condition = media_condition(condition)?;

        if self.entries.iter().any(|bp| bp.alias == alias) {
            return Err(XcssError::DuplicateBreakpoint {
                alias,
                reason: "alias already registered".to_string(),
            });
        }
        if let Some(existing) = self.entries.iter().find(|bp| bp.condition == condition) {
            return Err(XcssError::DuplicateBreakpoint {
                reason: format!("condition `{}` already registered as `{}`", condition, existing.alias),
                alias,
            });
        }

        self.entries.push(Breakpoint { alias, condition });
        Ok(self)
    }

    /// Maps an alias (with or without `@`) to its slot.
    pub fn slot(&self, alias: &str) -> Result<Slot> {
        let alias = normalize_alias(alias);
        if alias == INITIAL {
            return Ok(None);
        }
        self.entries
            .iter()
            .position(|bp| bp.alias == alias)
            .map(Some)
            .ok_or(XcssError::UnknownBreakpoint(alias))
    }

    /// The alias a slot was registered under.
    pub fn alias(&self, slot: Slot) -> &str {
        match slot {
            None => INITIAL,
            Some(idx) => self.entries.get(idx).map_or(INITIAL, |bp| bp.alias.as_str()),
        }
    }

    /// The media condition for `from` with every slot in `until` excluded.
    ///
    /// Returns `None` for the unconditional base. With default breakpoints,
    /// `range_condition(None, &[0])` is `not (min-width: 640px)` and
    /// `range_condition(Some(0), &[2])` is
    /// `(min-width: 640px) and (not (min-width: 1024px))`.
    pub fn range_condition(&self, from: Slot, until: &[usize]) -> Result<Option<String>> {
        let mut parts = Vec::with_capacity(until.len() + 1);
        if let Some(idx) = from {
            parts.push(self.condition(idx)?.to_string());
        }
        for &idx in until {
            parts.push(negate_media_condition(self.condition(idx)?)?);
        }
        Ok(match parts.len() {
            0 => None,
            1 => parts.pop(),
            _ => Some(
                parts
                    .iter()
                    .enumerate()
                    .map(|(pos, part)| {
                        if pos == 0 && from.is_some() {
                            part.clone()
                        } else {
                            format!("({})", part)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" and "),
            ),
        })
    }

    fn condition(&self, idx: usize) -> Result<&str> {
        self.entries
            .get(idx)
            .map(|bp| bp.condition.as_str())
            .ok_or_else(|| XcssError::UnknownBreakpoint(format!("#{}", idx)))
    }

    pub fn get(&self, idx: usize) -> Option<&Breakpoint> {
        self.entries.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flattens a declaration value into per-slot scalar values.
///
/// A scalar applies at `current`. A responsive value maps `initial` to
/// `current` and every other alias to its own slot. The result is sorted by
/// slot; a slot listed twice keeps its last value.
pub fn expand_value<'v>(
    breakpoints: &Breakpoints,
    value: &'v StyleValue,
    current: Slot,
) -> Result<Vec<(Slot, &'v StyleValue)>> {
    let arms = match value {
        StyleValue::Responsive(arms) => arms,
        scalar => return Ok(vec![(current, scalar)]),
    };

    let mut slots: Vec<(Slot, &StyleValue)> = Vec::with_capacity(arms.len());
    for (alias, arm) in arms {
        if matches!(arm, StyleValue::Responsive(_)) {
            return Err(XcssError::invalid_value(
                alias.clone(),
                "responsive values cannot be nested",
            ));
        }
        let slot = match breakpoints.slot(alias)? {
            None => current,
            Some(idx) => Some(idx),
        };
        slots.retain(|(s, _)| *s != slot);
        slots.push((slot, arm));
    }
    slots.sort_by_key(|(slot, _)| *slot);
    Ok(slots)
}
