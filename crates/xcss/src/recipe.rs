//! Variant recipes.
//!
//! A [`Recipe`] is a named style with variant groups. Resolving it against
//! a [`Selection`] composes, from lowest to highest precedence:
//!
//! 1. the base style
//! 2. the chosen arm of every group, in group-definition order
//! 3. every compound variant whose conditions all hold, in list order
//! 4. the recipe's responsive overrides
//! 5. the selection's inline `css`
//!
//! Omitted groups fall back to their default arm. The composed style is
//! compiled under a class whose name is derived from the recipe's
//! fingerprint and the canonical form of the selection, so identical
//! invocations always produce the same class and the same rules.
//!
//! ```
//! use xcss::{Collector, Engine, EngineConfig, Recipe, Selection, Style};
//! # fn main() -> xcss::Result<()> {
//! let engine = Engine::new(EngineConfig::default())?;
//! let text = Recipe::builder("text")
//!     .base(Style::new().set("margin", 0))
//!     .variant("size", "sm", Style::new().set("fontSize", "$sm"))
//!     .variant("size", "lg", Style::new().set("fontSize", "$lg"))
//!     .default_variant("size", "sm")
//!     .build()?;
//!
//! let mut collector = Collector::new();
//! let a = text.class_name(&engine, &mut collector, &Selection::new())?;
//! let b = text.class_name(&engine, &mut collector, &Selection::new().with("size", "sm"))?;
//! assert_eq!(a, b);
//! assert_eq!(collector.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;

use crate::collector::{Collector, ResolvedEntry};
use crate::engine::Engine;
use crate::error::{Result, XcssError};
use crate::hash::{stable_hash, to_base36};
use crate::responsive::{Breakpoints, Slot};
use crate::style::Style;
use crate::variant::{Choice, Selection, Variant, VariantEnum};

/// Conditions of a compound variant: every `(group, value)` must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditions {
    pairs: Vec<(String, String)>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(mut self, group: &str, value: impl Variant) -> Self {
        self.pairs
            .push((group.to_string(), value.variant_key().into_owned()));
        self
    }
}

#[derive(Debug, Clone)]
struct VariantGroup {
    name: String,
    arms: Vec<(String, Style)>,
}

impl VariantGroup {
    fn arm(&self, value: &str) -> Option<&Style> {
        self.arms
            .iter()
            .find(|(key, _)| key == value)
            .map(|(_, style)| style)
    }
}

#[derive(Debug, Clone)]
struct CompoundVariant {
    /// `(group index, value)`
    conditions: Vec<(usize, String)>,
    style: Style,
}

/// Builder for [`Recipe`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    name: String,
    base: Style,
    groups: Vec<VariantGroup>,
    defaults: Vec<(String, String)>,
    compounds: Vec<(Conditions, Style)>,
    responsive: Vec<(String, Style)>,
}

impl RecipeBuilder {
    /// Appends to the base style.
    pub fn base(mut self, style: Style) -> Self {
        self.base = std::mem::take(&mut self.base).extend(style);
        self
    }

    /// Declares the arm `value` of `group`. Groups keep the order in which
    /// they were first declared; declaring an arm twice replaces it.
    pub fn variant(mut self, group: &str, value: impl Variant, style: Style) -> Self {
        let key = value.variant_key().into_owned();
        let idx = match self.groups.iter().position(|g| g.name == group) {
            Some(idx) => idx,
            None => {
                self.groups.push(VariantGroup {
                    name: group.to_string(),
                    arms: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        let arms = &mut self.groups[idx].arms;
        match arms.iter_mut().find(|(k, _)| *k == key) {
            Some(arm) => arm.1 = style,
            None => arms.push((key, style)),
        }
        self
    }

    /// Declares one arm per value of a typed variant enum.
    pub fn variants<V: VariantEnum>(self, group: &str, style_for: impl Fn(V) -> Style) -> Self {
        V::ALL
            .iter()
            .fold(self, |builder, &value| builder.variant(group, value, style_for(value)))
    }

    pub fn default_variant(mut self, group: &str, value: impl Variant) -> Self {
        self.defaults.retain(|(g, _)| g != group);
        self.defaults
            .push((group.to_string(), value.variant_key().into_owned()));
        self
    }

    /// Adds a style applied when every condition holds.
    pub fn compound(mut self, conditions: Conditions, style: Style) -> Self {
        self.compounds.push((conditions, style));
        self
    }

    /// Adds a style applied at a breakpoint regardless of the selection.
    pub fn responsive(mut self, alias: &str, style: Style) -> Self {
        self.responsive.push((alias.to_string(), style));
        self
    }

    /// Validates the definition.
    ///
    /// Fails with [`XcssError::InvalidValue`] for a name that is not a
    /// lowercase identifier, and with [`XcssError::InvalidVariant`] when a
    /// default or a compound condition names an undeclared group or arm.
    pub fn build(self) -> Result<Recipe> {
        if !is_valid_name(&self.name) {
            return Err(XcssError::invalid_value(
                self.name,
                "recipe names use lowercase letters, digits and `-`",
            ));
        }

        let mut defaults = vec![None; self.groups.len()];
        for (group, value) in &self.defaults {
            let idx = find_arm(&self.name, &self.groups, group, value)?;
            defaults[idx] = Some(value.clone());
        }

        let mut compounds = Vec::with_capacity(self.compounds.len());
        for (conditions, style) in self.compounds {
            let mut resolved = Vec::with_capacity(conditions.pairs.len());
            for (group, value) in conditions.pairs {
                let idx = find_arm(&self.name, &self.groups, &group, &value)?;
                resolved.push((idx, value));
            }
            compounds.push(CompoundVariant {
                conditions: resolved,
                style,
            });
        }

        let mut recipe = Recipe {
            name: self.name,
            base: self.base,
            groups: self.groups,
            defaults,
            compounds,
            responsive: self.responsive,
            fingerprint: String::new(),
        };
        recipe.fingerprint = recipe.compute_fingerprint();
        log::debug!(
            "recipe `{}` built: {} groups, {} compounds",
            recipe.name,
            recipe.groups.len(),
            recipe.compounds.len()
        );
        Ok(recipe)
    }
}

/// Index of the group declaring arm `value`.
fn find_arm(recipe: &str, groups: &[VariantGroup], group: &str, value: &str) -> Result<usize> {
    groups
        .iter()
        .position(|g| g.name == group && g.arm(value).is_some())
        .ok_or_else(|| XcssError::InvalidVariant {
            recipe: recipe.to_string(),
            group: group.to_string(),
            value: value.to_string(),
        })
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Per group: the chosen arm at each slot, sorted by slot. Empty when the
/// group contributes nothing.
type Plan = Vec<Vec<(Slot, String)>>;

/// An immutable, validated style recipe.
#[derive(Debug, Clone)]
pub struct Recipe {
    name: String,
    base: Style,
    groups: Vec<VariantGroup>,
    /// Default arm per group, indexed like `groups`.
    defaults: Vec<Option<String>>,
    compounds: Vec<CompoundVariant>,
    responsive: Vec<(String, Style)>,
    fingerprint: String,
}

impl Recipe {
    pub fn builder(name: &str) -> RecipeBuilder {
        RecipeBuilder {
            name: name.to_string(),
            base: Style::new(),
            groups: Vec::new(),
            defaults: Vec::new(),
            compounds: Vec::new(),
            responsive: Vec::new(),
        }
    }

    /// A recipe with no variants, for one-off styles.
    pub fn css(style: Style) -> Recipe {
        let mut recipe = Recipe {
            name: "css".to_string(),
            base: style,
            groups: Vec::new(),
            defaults: Vec::new(),
            compounds: Vec::new(),
            responsive: Vec::new(),
            fingerprint: String::new(),
        };
        recipe.fingerprint = recipe.compute_fingerprint();
        recipe
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group names in definition order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Resolves a selection to a class name, registering its rules in
    /// `collector` the first time the canonical key is seen.
    ///
    /// On error the collector is left untouched.
    pub fn class_name(
        &self,
        engine: &Engine,
        collector: &mut Collector,
        selection: &Selection,
    ) -> Result<String> {
        let plan = self.plan(engine.breakpoints(), selection)?;
        let key = self.canonical_key(engine, &plan, selection);
        if let Some(entry) = collector.get(&key) {
            log::trace!("reusing `{}`", entry.class_name);
            return Ok(entry.class_name.clone());
        }

        let entry = self.compile_entry(engine, &plan, selection, key)?;
        let class_name = entry.class_name.clone();
        collector.register(entry)?;
        Ok(class_name)
    }

    /// Resolves a selection without touching any collector.
    pub fn resolve(&self, engine: &Engine, selection: &Selection) -> Result<ResolvedEntry> {
        let plan = self.plan(engine.breakpoints(), selection)?;
        let key = self.canonical_key(engine, &plan, selection);
        self.compile_entry(engine, &plan, selection, key)
    }

    fn compile_entry(
        &self,
        engine: &Engine,
        plan: &Plan,
        selection: &Selection,
        key: String,
    ) -> Result<ResolvedEntry> {
        let class_name = engine.class_name_for(&self.name, &key);
        let style = self.compose(engine.breakpoints(), plan, selection);
        let css = engine.compile(&style, &format!(".{}", class_name))?.to_css();
        Ok(ResolvedEntry {
            key,
            class_name,
            css,
        })
    }

    /// Validates the selection and fills in defaults.
    fn plan(&self, breakpoints: &Breakpoints, selection: &Selection) -> Result<Plan> {
        let mut plan: Plan = vec![Vec::new(); self.groups.len()];

        for (group, choice) in selection.choices() {
            let idx = self
                .groups
                .iter()
                .position(|g| g.name == *group)
                .ok_or_else(|| self.invalid_variant(group, &choice_label(choice)))?;

            let mut slots: Vec<(Slot, String)> = Vec::new();
            match choice {
                Choice::Fixed(value) => slots.push((None, value.clone())),
                Choice::At(arms) => {
                    for (alias, value) in arms {
                        let slot = breakpoints.slot(alias)?;
                        slots.retain(|(s, _)| *s != slot);
                        slots.push((slot, value.clone()));
                    }
                    slots.sort_by_key(|(slot, _)| *slot);
                }
            }
            for (_, value) in &slots {
                if self.groups[idx].arm(value).is_none() {
                    return Err(self.invalid_variant(group, value));
                }
            }
            plan[idx] = slots;
        }

        for (idx, slots) in plan.iter_mut().enumerate() {
            let has_initial = slots.first().is_some_and(|(slot, _)| slot.is_none());
            if !has_initial {
                if let Some(default) = &self.defaults[idx] {
                    slots.insert(0, (None, default.clone()));
                }
            }
            // Consecutive slots choosing the same arm add nothing.
            slots.dedup_by(|later, earlier| later.1 == earlier.1);
        }
        Ok(plan)
    }

    fn canonical_key(&self, engine: &Engine, plan: &Plan, selection: &Selection) -> String {
        let breakpoints = engine.breakpoints();
        let mut key = format!("{}:{}#{}", engine.prefix(), self.name, self.fingerprint);
        for (group, slots) in self.groups.iter().zip(plan) {
            if slots.is_empty() {
                continue;
            }
            key.push('|');
            key.push_str(&group.name);
            key.push('=');
            for (slot, value) in slots {
                if slot.is_some() {
                    key.push('@');
                    key.push_str(breakpoints.alias(*slot));
                    key.push(':');
                }
                key.push_str(value);
                key.push(',');
            }
        }
        if let Some(css) = selection.inline_css() {
            key.push_str("|css=");
            css.write_canonical(&mut key);
        }
        key
    }

    fn compose(&self, breakpoints: &Breakpoints, plan: &Plan, selection: &Selection) -> Style {
        let apply = |style: Style, slot: Slot, addition: &Style| match slot {
            None => style.extend(addition.clone()),
            Some(_) => style.at(breakpoints.alias(slot), addition.clone()),
        };

        let mut style = self.base.clone();
        for (group, slots) in self.groups.iter().zip(plan) {
            for (slot, value) in slots {
                if let Some(arm) = group.arm(value) {
                    style = apply(style, *slot, arm);
                }
            }
        }

        if !self.compounds.is_empty() {
            let points: BTreeSet<Slot> = std::iter::once(None)
                .chain(plan.iter().flatten().map(|(slot, _)| *slot))
                .collect();
            // Each contiguous matching run is applied once, bounded by the
            // breakpoint where it stops matching.
            for compound in &self.compounds {
                let mut run_start: Option<Slot> = None;
                for &point in &points {
                    let matched = compound.conditions.iter().all(|(group, value)| {
                        effective_arm(&plan[*group], point) == Some(value.as_str())
                    });
                    match (matched, run_start) {
                        (true, None) => run_start = Some(point),
                        (false, Some(start)) => {
                            style = style.between(
                                breakpoints.alias(start),
                                breakpoints.alias(point),
                                compound.style.clone(),
                            );
                            run_start = None;
                        }
                        _ => {}
                    }
                }
                if let Some(start) = run_start {
                    style = apply(style, start, &compound.style);
                }
            }
        }

        for (alias, overrides) in &self.responsive {
            style = style.at(alias, overrides.clone());
        }
        if let Some(css) = selection.inline_css() {
            style = style.extend(css.clone());
        }
        style
    }

    fn compute_fingerprint(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.name);
        self.base.write_canonical(&mut text);
        for (group, default) in self.groups.iter().zip(&self.defaults) {
            text.push_str(&format!("|{}={:?}", group.name, default));
            for (key, style) in &group.arms {
                text.push_str(&format!("{:?}", key));
                style.write_canonical(&mut text);
            }
        }
        for compound in &self.compounds {
            text.push_str(&format!("|compound{:?}", compound.conditions));
            compound.style.write_canonical(&mut text);
        }
        for (alias, style) in &self.responsive {
            text.push_str(&format!("|@{}", alias));
            style.write_canonical(&mut text);
        }
        to_base36(stable_hash(&text))
    }

    fn invalid_variant(&self, group: &str, value: &str) -> XcssError {
        XcssError::InvalidVariant {
            recipe: self.name.clone(),
            group: group.to_string(),
            value: value.to_string(),
        }
    }
}

/// The arm in effect at `point`: the last chosen arm at or below it.
fn effective_arm(slots: &[(Slot, String)], point: Slot) -> Option<&str> {
    slots
        .iter()
        .take_while(|(slot, _)| *slot <= point)
        .last()
        .map(|(_, value)| value.as_str())
}

fn choice_label(choice: &Choice) -> String {
    match choice {
        Choice::Fixed(value) => value.clone(),
        Choice::At(arms) => arms
            .iter()
            .map(|(alias, value)| format!("@{}:{}", alias, value))
            .collect::<Vec<_>>()
            .join(","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;

    fn engine() -> Engine {
        Engine::new(EngineConfig::default()).unwrap()
    }

    fn stack() -> Recipe {
        Recipe::builder("stack")
            .base(Style::new().set("display", "flex"))
            .variant("dir", "row", Style::new().set("flexDirection", "row"))
            .variant("dir", "col", Style::new().set("flexDirection", "column"))
            .variant("grow", true, Style::new().set("flexGrow", 1))
            .variant("gap", "sm", Style::new().set("gap", "$2"))
            .default_variant("dir", "row")
            .compound(
                Conditions::new().when("dir", "col").when("grow", true),
                Style::new().set("minHeight", 0),
            )
            .build()
            .unwrap()
    }

    fn css(recipe: &Recipe, selection: &Selection) -> (String, String) {
        let entry = recipe.resolve(&engine(), selection).unwrap();
        let css = entry.css.replace(&entry.class_name, "C");
        (entry.class_name, css)
    }

    #[test]
    fn build_rejects_unknown_defaults_and_compounds() {
        let err = Recipe::builder("r")
            .variant("size", "sm", Style::new())
            .default_variant("size", "xl")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            XcssError::InvalidVariant {
                recipe: "r".into(),
                group: "size".into(),
                value: "xl".into()
            }
        );

        let err = Recipe::builder("r")
            .variant("size", "sm", Style::new())
            .compound(Conditions::new().when("tone", "loud"), Style::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, XcssError::InvalidVariant { .. }));

        assert!(Recipe::builder("Bad Name").build().is_err());
    }

    #[test]
    fn defaults_fill_omitted_groups() {
        let recipe = stack();
        let (a, _) = css(&recipe, &Selection::new());
        let (b, _) = css(&recipe, &Selection::new().with("dir", "row"));
        assert_eq!(a, b);
    }

    #[test]
    fn precedence_order() {
        let recipe = stack();
        let (_, rules) = css(
            &recipe,
            &Selection::new()
                .with("dir", "col")
                .with("grow", true)
                .css(Style::new().set("display", "grid")),
        );
        assert_eq!(
            rules,
            ".C{flex-direction:column;flex-grow:1;min-height:0;display:grid}"
        );
    }

    #[test]
    fn unknown_group_value_and_alias() {
        let recipe = stack();
        let engine = engine();
        assert!(matches!(
            recipe.resolve(&engine, &Selection::new().with("tone", "loud")),
            Err(XcssError::InvalidVariant { .. })
        ));
        assert!(matches!(
            recipe.resolve(&engine, &Selection::new().with("dir", "diagonal")),
            Err(XcssError::InvalidVariant { .. })
        ));
        assert_eq!(
            recipe
                .resolve(
                    &engine,
                    &Selection::new().with_responsive("dir", [("@huge", "row")])
                )
                .unwrap_err(),
            XcssError::UnknownBreakpoint("huge".into())
        );
    }

    #[test]
    fn responsive_without_initial_uses_default() {
        let recipe = stack();
        let (a, rules) = css(
            &recipe,
            &Selection::new().with_responsive("dir", [("@md", "col")]),
        );
        let (b, _) = css(
            &recipe,
            &Selection::new().with_responsive("dir", [("initial", "row"), ("md", "col")]),
        );
        assert_eq!(a, b);
        assert_eq!(
            rules,
            ".C{display:flex;flex-direction:row}\
             @media (min-width: 768px){.C{flex-direction:column}}"
        );
    }

    #[test]
    fn initial_only_map_equals_fixed_value() {
        let recipe = stack();
        let (a, _) = css(&recipe, &Selection::new().with_responsive("gap", [("@initial", "sm")]));
        let (b, _) = css(&recipe, &Selection::new().with("gap", "sm"));
        assert_eq!(a, b);
    }

    #[test]
    fn compound_applies_per_breakpoint() {
        let recipe = stack();
        let (_, rules) = css(
            &recipe,
            &Selection::new()
                .with_responsive("dir", [("initial", "row"), ("@sm", "col")])
                .with("grow", true),
        );
        assert_eq!(
            rules,
            ".C{display:flex;flex-direction:row;flex-grow:1}\
             @media (min-width: 640px){.C{flex-direction:column;min-height:0}}"
        );
    }

    #[test]
    fn compound_needs_every_condition() {
        let recipe = stack();
        let (_, rules) = css(&recipe, &Selection::new().with("dir", "col"));
        assert!(!rules.contains("min-height"));
    }

    #[test]
    fn recipes_with_different_definitions_never_share_classes() {
        let a = Recipe::builder("box")
            .base(Style::new().set("color", "red"))
            .build()
            .unwrap();
        let b = Recipe::builder("box")
            .base(Style::new().set("color", "blue"))
            .build()
            .unwrap();
        let engine = engine();
        assert_ne!(
            a.resolve(&engine, &Selection::new()).unwrap().class_name,
            b.resolve(&engine, &Selection::new()).unwrap().class_name
        );
    }

    #[test]
    fn engines_with_different_prefixes_share_a_collector() {
        let recipe = Recipe::css(Style::new().set("color", "red"));
        let plain = engine();
        let prefixed = Engine::new(EngineConfig::default().with_prefix("bs")).unwrap();
        let mut collector = Collector::new();

        let a = recipe.class_name(&plain, &mut collector, &Selection::new()).unwrap();
        let b = recipe.class_name(&prefixed, &mut collector, &Selection::new()).unwrap();
        assert!(a.starts_with("x-css-"));
        assert!(b.starts_with("bs-css-"));
        assert_eq!(collector.len(), 2);
        assert_eq!(collector.entries()[1].class_name, b);
    }

    #[test]
    fn failing_resolution_leaves_collector_unchanged() {
        let engine = engine();
        let recipe = Recipe::css(Style::new().set("mt", "$nope"));
        let mut collector = Collector::new();
        assert!(recipe.class_name(&engine, &mut collector, &Selection::new()).is_err());
        assert!(collector.is_empty());
    }

    #[test]
    fn effective_arm_walks_slots() {
        let slots = vec![(None, "a".to_string()), (Some(1), "b".to_string())];
        assert_eq!(effective_arm(&slots, None), Some("a"));
        assert_eq!(effective_arm(&slots, Some(0)), Some("a"));
        assert_eq!(effective_arm(&slots, Some(2)), Some("b"));
        assert_eq!(effective_arm(&[], Some(2)), None);
    }
}
