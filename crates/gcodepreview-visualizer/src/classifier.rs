//! Segment classification
//!
//! Assigns every motion segment to one of the three render categories in two
//! stages:
//!
//! 1. The segment's role is resolved against an ordered [`RuleTable`]. Rules
//!    are substring matches and the first matching rule wins, so a role such
//!    as `"support-fill"` lands in whatever category the earlier rule names.
//! 2. If stage 1 produced [`Category::Object`] but the segment's style is one
//!    of the configured travel-like styles (fly, retract and optionally
//!    restore), the segment is reassigned to [`Category::Travel`]. Those are
//!    non-depositing moves inside an object region and must not show up as
//!    model geometry.
//!
//! Classification is total: a role no rule matches falls back to the table's
//! fallback category.

use gcodepreview_core::{Category, RoleRule, Segment, StyleTag};
use gcodepreview_settings::ClassifierSettings;
use tracing::{debug, warn};

/// Ordered role-to-category rules plus a fallback
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: Vec<RoleRule>,
    fallback: Category,
}

/// A pattern that can never decide a classification because an earlier rule
/// with a different category matches every role it matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedPattern {
    /// Index of the rule holding the unreachable pattern
    pub rule: usize,
    pub pattern: String,
    /// Index of the earlier rule that wins instead
    pub shadowed_by: usize,
    /// The earlier rule's pattern contained in `pattern`
    pub shadowing_pattern: String,
}

impl RuleTable {
    /// Create a table from rules in precedence order, falling back to travel
    pub fn new(rules: Vec<RoleRule>) -> Self {
        Self {
            rules,
            fallback: Category::Travel,
        }
    }

    /// The stock table: helper motions, then supports, then model features
    pub fn standard() -> Self {
        Self::new(RoleRule::standard_table())
    }

    /// Replace the fallback category used when no rule matches
    pub fn with_fallback(mut self, fallback: Category) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn rules(&self) -> &[RoleRule] {
        &self.rules
    }

    pub fn fallback(&self) -> Category {
        self.fallback
    }

    /// Index of the first rule matching `role`
    pub fn matching_rule(&self, role: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(role))
    }

    /// Resolve a role to its category (first match wins)
    pub fn resolve(&self, role: &str) -> Category {
        self.matching_rule(role)
            .map(|idx| self.rules[idx].category)
            .unwrap_or(self.fallback)
    }

    /// Patterns made unreachable by an earlier rule of another category
    ///
    /// A later pattern containing an earlier pattern can only ever match roles
    /// the earlier rule already claims.
    pub fn shadowed_patterns(&self) -> Vec<ShadowedPattern> {
        let mut shadowed = Vec::new();
        for (later_idx, later) in self.rules.iter().enumerate() {
            for pattern in &later.patterns {
                let winner = self.rules[..later_idx]
                    .iter()
                    .enumerate()
                    .filter(|(_, earlier)| earlier.category != later.category)
                    .find_map(|(earlier_idx, earlier)| {
                        earlier
                            .patterns
                            .iter()
                            .find(|p| pattern.contains(p.as_str()))
                            .map(|p| (earlier_idx, p))
                    });
                if let Some((earlier_idx, shadowing)) = winner {
                    shadowed.push(ShadowedPattern {
                        rule: later_idx,
                        pattern: pattern.clone(),
                        shadowed_by: earlier_idx,
                        shadowing_pattern: shadowing.clone(),
                    });
                }
            }
        }
        shadowed
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Outcome of both classification stages for one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Category selected by the role table
    pub role_category: Category,
    /// Final category after the travel override
    pub category: Category,
}

impl Classification {
    /// Whether the travel override changed the role table's answer
    pub fn is_overridden(&self) -> bool {
        self.role_category != self.category
    }
}

/// Pure segment classifier
#[derive(Debug, Clone)]
pub struct Classifier {
    table: RuleTable,
    override_styles: Vec<StyleTag>,
}

impl Classifier {
    /// Create a classifier from a rule table and the travel-like styles that
    /// override an object classification
    pub fn new(table: RuleTable, override_styles: Vec<StyleTag>) -> Self {
        for shadow in table.shadowed_patterns() {
            warn!(
                "Role pattern '{}' in rule {} is unreachable: rule {} matches '{}' first",
                shadow.pattern, shadow.rule, shadow.shadowed_by, shadow.shadowing_pattern
            );
        }
        debug!(
            "Classifier ready: {} role rules, override styles {:?}",
            table.rules().len(),
            override_styles
        );
        Self {
            table,
            override_styles,
        }
    }

    /// Stock rule table with fly, retract and restore treated as travel
    pub fn standard() -> Self {
        Self::new(
            RuleTable::standard(),
            vec![StyleTag::Fly, StyleTag::Retract, StyleTag::Restore],
        )
    }

    pub fn from_settings(settings: &ClassifierSettings) -> Self {
        Self::new(
            RuleTable::new(settings.rules.clone()),
            settings.override_styles(),
        )
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn override_styles(&self) -> &[StyleTag] {
        &self.override_styles
    }

    /// Run both stages and report the intermediate result
    pub fn classify_detailed(&self, segment: &Segment) -> Classification {
        let role_category = self.table.resolve(&segment.role);
        let category = match role_category {
            Category::Object if self.override_styles.contains(&segment.style) => {
                Category::Travel
            }
            other => other,
        };
        Classification {
            role_category,
            category,
        }
    }

    /// Category for a segment
    pub fn classify(&self, segment: &Segment) -> Category {
        self.classify_detailed(segment).category
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}
