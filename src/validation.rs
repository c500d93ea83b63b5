//! Validation rule programs.
//!
//! A field's validation is stored as data: an ordered list of modifiers over
//! a closed vocabulary. The program is interpreted lazily, when the consumer
//! hands in its own rule-builder capability through [`Validation::apply`] —
//! never while the descriptor is being constructed. A capability that does
//! not support an invoked modifier fails at that point with
//! [`RuleError::Unsupported`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single validation modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Required,
    Min(f64),
    Max(f64),
    Regex(String),
    Error(String),
    Warning(String),
}

/// Ordered list of modifiers making up one rule.
///
/// Modifiers are applied in insertion order, mirroring the chained calls of
/// the platform's fluent rule API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleSet(Vec<Modifier>);

impl RuleSet {
    pub fn new() -> Self {
        RuleSet::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.0
    }

    pub fn required(mut self) -> Self {
        self.0.push(Modifier::Required);
        self
    }

    pub fn min(mut self, limit: f64) -> Self {
        self.0.push(Modifier::Min(limit));
        self
    }

    pub fn max(mut self, limit: f64) -> Self {
        self.0.push(Modifier::Max(limit));
        self
    }

    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.0.push(Modifier::Regex(pattern.into()));
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.0.push(Modifier::Error(message.into()));
        self
    }

    pub fn warning(mut self, message: impl Into<String>) -> Self {
        self.0.push(Modifier::Warning(message.into()));
        self
    }
}

impl From<Vec<Modifier>> for RuleSet {
    fn from(modifiers: Vec<Modifier>) -> Self {
        RuleSet(modifiers)
    }
}

/// Error raised when a rule-builder capability does not support an applied
/// modifier.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    #[error("rule builder does not support '{0}'")]
    Unsupported(&'static str),
}

/// Rule-builder capability supplied by the consuming platform.
///
/// Every operation defaults to [`RuleError::Unsupported`], so a capability
/// implements only the modifiers it understands; unsupported ones surface
/// when the rule program is applied, not when the descriptor is built.
pub trait RuleBuilder: Sized {
    fn required(self) -> Result<Self, RuleError> {
        Err(RuleError::Unsupported("required"))
    }

    fn min(self, _limit: f64) -> Result<Self, RuleError> {
        Err(RuleError::Unsupported("min"))
    }

    fn max(self, _limit: f64) -> Result<Self, RuleError> {
        Err(RuleError::Unsupported("max"))
    }

    fn regex(self, _pattern: &str) -> Result<Self, RuleError> {
        Err(RuleError::Unsupported("regex"))
    }

    fn error(self, _message: &str) -> Result<Self, RuleError> {
        Err(RuleError::Unsupported("error"))
    }

    fn warning(self, _message: &str) -> Result<Self, RuleError> {
        Err(RuleError::Unsupported("warning"))
    }
}

/// Apply each modifier of `rule` to `base` in insertion order.
pub fn apply_rule<R: RuleBuilder>(base: R, rule: &RuleSet) -> Result<R, RuleError> {
    let mut result = base;
    for modifier in &rule.0 {
        result = match modifier {
            Modifier::Required => result.required()?,
            Modifier::Min(limit) => result.min(*limit)?,
            Modifier::Max(limit) => result.max(*limit)?,
            Modifier::Regex(pattern) => result.regex(pattern)?,
            Modifier::Error(message) => result.error(message)?,
            Modifier::Warning(message) => result.warning(message)?,
        };
    }
    Ok(result)
}

/// Validation attached to a field: a single rule, or a sequence of rules
/// each interpreted from the same base capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Validation {
    Rule(RuleSet),
    Rules(Vec<RuleSet>),
}

/// Result of applying a [`Validation`] to a capability.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied<R> {
    One(R),
    Many(Vec<R>),
}

impl Validation {
    /// True when the program names no rule at all. An empty program on a
    /// field is treated as no validation.
    pub fn is_empty(&self) -> bool {
        match self {
            Validation::Rule(rule) => rule.is_empty(),
            Validation::Rules(rules) => rules.is_empty(),
        }
    }

    /// Interpret the rule program against a capability.
    ///
    /// For [`Validation::Rules`] every rule set starts from its own clone of
    /// the base capability, so the resulting rules are independent.
    pub fn apply<R: RuleBuilder + Clone>(&self, base: R) -> Result<Applied<R>, RuleError> {
        match self {
            Validation::Rule(rule) => apply_rule(base, rule).map(Applied::One),
            Validation::Rules(rules) => rules
                .iter()
                .map(|rule| apply_rule(base.clone(), rule))
                .collect::<Result<Vec<_>, _>>()
                .map(Applied::Many),
        }
    }
}

impl From<RuleSet> for Validation {
    fn from(rule: RuleSet) -> Self {
        Validation::Rule(rule)
    }
}

impl From<Vec<RuleSet>> for Validation {
    fn from(rules: Vec<RuleSet>) -> Self {
        Validation::Rules(rules)
    }
}
