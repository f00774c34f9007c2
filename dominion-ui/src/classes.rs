//! Class-list composition with deterministic conflict resolution.
//!
//! Components build their `class` attribute from ordered fragments: plain
//! literals, boolean-gated names, or nothing. [`compose`] flattens the
//! fragments, drops gated-off names, deduplicates, and resolves classes
//! that target the same visual property (card variants, reveal delays,
//! accent colors) last-occurrence-wins.

/// One fragment of a class list.
#[derive(Clone, Copy, Debug)]
pub enum ClassSpec<'a> {
    /// Always included
    Lit(&'a str),
    /// Included only when the gate is true
    Gated(&'a str, bool),
    /// Contributes nothing; placeholder for optional caller classes
    Skip,
}

impl<'a> From<&'a str> for ClassSpec<'a> {
    fn from(value: &'a str) -> Self {
        ClassSpec::Lit(value)
    }
}

impl<'a> From<Option<&'a str>> for ClassSpec<'a> {
    fn from(value: Option<&'a str>) -> Self {
        match value {
            Some(class) => ClassSpec::Lit(class),
            None => ClassSpec::Skip,
        }
    }
}

/// Classes that set the same visual property; at most one per group
/// survives composition.
const CONFLICT_GROUPS: &[&[&str]] = &[
    &["card-interactive", "card-feature", "constitution-section"],
    &["delay-100", "delay-200", "delay-300", "delay-400"],
    &["stellar-text", "cosmic-text"],
];

fn conflict_group(class: &str) -> Option<usize> {
    CONFLICT_GROUPS
        .iter()
        .position(|group| group.contains(&class))
}

fn conflicts(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (conflict_group(a), conflict_group(b)) {
        (Some(ga), Some(gb)) => ga == gb,
        _ => false,
    }
}

/// Compose class fragments into a single deduplicated class string.
///
/// Fragments are flattened left-to-right. A later class removes any
/// earlier class it conflicts with (same name, or same conflict group),
/// so the last occurrence wins. Whitespace inside a literal separates
/// multiple classes.
///
/// ```rust
/// use dominion_ui::classes::{compose, ClassSpec};
///
/// let class = compose(&[
///     ClassSpec::Lit("a"),
///     ClassSpec::Gated("b", false),
///     ClassSpec::Gated("c", true),
///     ClassSpec::Skip,
///     ClassSpec::Lit("a"),
/// ]);
/// assert_eq!(class, "c a");
/// ```
pub fn compose(specs: &[ClassSpec<'_>]) -> String {
    let mut kept: Vec<&str> = Vec::new();

    let names = specs.iter().flat_map(|spec| {
        let fragment = match spec {
            ClassSpec::Lit(class) => *class,
            ClassSpec::Gated(class, true) => *class,
            ClassSpec::Gated(_, false) | ClassSpec::Skip => "",
        };
        fragment.split_whitespace()
    });

    for name in names {
        kept.retain(|existing| !conflicts(existing, name));
        kept.push(name);
    }

    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_literals_and_true_gates_only() {
        let class = compose(&[
            ClassSpec::Lit("a"),
            ClassSpec::Gated("b", false),
            ClassSpec::Gated("c", true),
            ClassSpec::Skip,
            ClassSpec::Lit("a"),
        ]);
        assert_eq!(class, "c a");
        assert_eq!(class.matches('a').count(), 1);
        assert!(!class.contains('b'));
    }

    #[test]
    fn later_variant_replaces_earlier_variant() {
        let class = compose(&[
            ClassSpec::Lit("card-interactive"),
            ClassSpec::Lit("reveal"),
            ClassSpec::Lit("card-feature"),
        ]);
        assert_eq!(class, "reveal card-feature");
    }

    #[test]
    fn delay_classes_conflict_with_each_other() {
        let class = compose(&[
            ClassSpec::Lit("reveal delay-100"),
            ClassSpec::Gated("delay-300", true),
        ]);
        assert_eq!(class, "reveal delay-300");
    }

    #[test]
    fn unrelated_classes_pass_through_in_order() {
        let class = compose(&[
            ClassSpec::Lit("nav-link"),
            ClassSpec::Gated("active", true),
            ClassSpec::Lit("stellar-text"),
        ]);
        assert_eq!(class, "nav-link active stellar-text");
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(compose(&[]), "");
        assert_eq!(compose(&[ClassSpec::Skip, ClassSpec::Gated("x", false)]), "");
    }

    #[test]
    fn option_converts_to_spec() {
        let extra: Option<&str> = None;
        let class = compose(&[ClassSpec::Lit("reveal"), extra.into()]);
        assert_eq!(class, "reveal");

        let extra = Some("cosmic-glow");
        let class = compose(&[ClassSpec::Lit("reveal"), extra.into()]);
        assert_eq!(class, "reveal cosmic-glow");
    }
}
