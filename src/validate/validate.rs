use super::context::{ErrorReporter, ValidationContext, ValidationError};
use crate::ast::{ASTContext, Document};
use crate::error::Result;
use crate::schema::Schema;
use crate::walk::{walk, Events};
use std::borrow::Borrow;
use std::fmt;

/// A function that registers a rule's observers on [`Events`], which then report errors through
/// the given [`ErrorReporter`].
pub type RegisterRule = for<'a, 'v> fn(&mut Events<'a, 'v>, ErrorReporter<'a, 'v>);

/// A named validation rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub register: RegisterRule,
}

impl Rule {
    #[inline]
    pub const fn new(name: &'static str, register: RegisterRule) -> Self {
        Rule { name, register }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

/// An ordered set of validation rules with unique names.
///
/// Rules register their observers in the order of this set, which is also the order in which
/// their errors are reported for any single node. [`RuleSet::default`] contains all rules this
/// crate comes with, see [`specified_rules`](super::rules::specified_rules).
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set without any rules.
    pub fn new() -> Self {
        RuleSet { rules: Vec::new() }
    }

    /// Adds a rule to the end of the set. When a rule of the same name is already part of the
    /// set, it's replaced in place instead.
    pub fn add_rule(&mut self, name: &'static str, register: RegisterRule) -> &mut Self {
        let rule = Rule::new(name, register);
        match self.rules.iter_mut().find(|rule| rule.name == name) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        self
    }

    /// Removes the rule called `name` and returns it, if it was part of the set.
    pub fn remove_rule(&mut self, name: &str) -> Option<Rule> {
        let index = self.rules.iter().position(|rule| rule.name == name)?;
        Some(self.rules.remove(index))
    }

    /// Replaces the rule called `name` in place and returns the previous rule. Nothing is added
    /// when there's no rule of that name.
    pub fn replace_rule(&mut self, name: &'static str, register: RegisterRule) -> Option<Rule> {
        let existing = self.rules.iter_mut().find(|rule| rule.name == name)?;
        Some(std::mem::replace(existing, Rule::new(name, register)))
    }

    /// Checks whether a rule called `name` is part of the set.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.name == name)
    }

    /// Returns the names of all rules in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        super::rules::specified_rules()
    }
}

impl<'r> IntoIterator for &'r RuleSet {
    type Item = &'r Rule;
    type IntoIter = std::slice::Iter<'r, Rule>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

fn run_rules<'a>(
    validation: &ValidationContext<'a>,
    schema: &'a Schema<'a>,
    document: &'a Document<'a>,
    rules: &RuleSet,
) {
    let mut events = Events::new();
    for rule in rules {
        (rule.register)(&mut events, validation.reporter(rule.name));
    }
    walk(schema, document, &events);
}

/// Run all `rules` against the given document in a single walk and return a result which errors
/// if any rule has reported an error.
#[tracing::instrument(level = "debug", skip_all, fields(rules = rules.len()))]
pub fn validate<'a>(
    ctx: &'a ASTContext,
    schema: &'a Schema<'a>,
    document: &'a Document<'a>,
    rules: &RuleSet,
) -> Result<()> {
    let validation = ValidationContext::new(ctx);
    run_rules(&validation, schema, document, rules);
    tracing::debug!(errors = validation.len(), "validated document");
    validation.to_result()
}

/// Run all `rules` against the given document and return every error they've reported.
pub fn collect_errors<'a>(
    ctx: &'a ASTContext,
    schema: &'a Schema<'a>,
    document: &'a Document<'a>,
    rules: &RuleSet,
) -> Vec<ValidationError<'a>> {
    let validation = ValidationContext::new(ctx);
    run_rules(&validation, schema, document, rules);
    tracing::debug!(errors = validation.len(), "collected validation errors");
    validation.errors()
}

/// Trait to run validation rules on a given GraphQL Document node.
pub trait ValidateNode<'a>
where
    Self: Borrow<Document<'a>>,
{
    /// Run all default rules against the document node and return a result which errors if
    /// validation fails on the current document.
    ///
    /// `document.validate(&ctx, &schema)`
    #[inline]
    fn validate(&'a self, ctx: &'a ASTContext, schema: &'a Schema<'a>) -> Result<()> {
        validate(ctx, schema, self.borrow(), &RuleSet::default())
    }

    /// Run the given rules against the document node.
    #[inline]
    fn validate_with(
        &'a self,
        ctx: &'a ASTContext,
        schema: &'a Schema<'a>,
        rules: &RuleSet,
    ) -> Result<()> {
        validate(ctx, schema, self.borrow(), rules)
    }
}

impl<'a> ValidateNode<'a> for Document<'a> {}
