//! Statically declared constraint tables
//!
//! Every request shape describes its fields once, as a constant table, instead
//! of having its constraints discovered at runtime. A table lists the fields in
//! declaration order; each field lists its rules in the order they are checked.
//!
//! ```rust,ignore
//! const RULES: ConstraintSet = ConstraintSet::new(
//!     "CreateArticleRequest",
//!     &[
//!         FieldRules::new("Title", WireName::Named("title"), &[Constraint::Required, Constraint::Min(20)]),
//!         FieldRules::new("Status", WireName::Named("status"), &[Constraint::Required, Constraint::OneOf(STATUSES)]),
//!     ],
//! );
//! ```

/// A single rule attached to a field
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Value must be present and non-empty
    Required,

    /// Value must be at least `n` characters long
    Min(usize),

    /// Value must be at most `n` characters long
    Max(usize),

    /// Value must be exactly one of the listed values
    OneOf(&'static [&'static str]),

    /// Application-specific rule identified by its tag
    Custom {
        tag: &'static str,
        check: fn(&str) -> bool,
    },
}

impl Constraint {
    /// Tag reported on the wire for this rule
    pub fn tag(&self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::Min(_) => "min",
            Constraint::Max(_) => "max",
            Constraint::OneOf(_) => "oneof",
            Constraint::Custom { tag, .. } => *tag,
        }
    }

    /// Parameter of the rule as declared (empty when the rule takes none)
    pub fn param(&self) -> String {
        match self {
            Constraint::Required | Constraint::Custom { .. } => String::new(),
            Constraint::Min(n) | Constraint::Max(n) => n.to_string(),
            Constraint::OneOf(values) => values.join(" "),
        }
    }

    /// Whether `value` satisfies this rule
    ///
    /// Lengths are counted in characters, so multi-byte text is measured the
    /// way a reader would count it.
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        match self {
            Constraint::Required => !value.is_empty(),
            Constraint::Min(n) => value.chars().count() >= *n,
            Constraint::Max(n) => value.chars().count() <= *n,
            Constraint::OneOf(values) => values.contains(&value),
            Constraint::Custom { check, .. } => check(value),
        }
    }
}

/// How a field is named on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireName {
    /// Serialized under this name
    Named(&'static str),

    /// No wire name declared; the lower-cased field name is used
    Unnamed,

    /// Explicitly excluded from serialization; the raw field name is used
    Suppressed,
}

/// Rules declared for one field
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    /// Field name as declared on the request type
    pub field: &'static str,

    /// Name used for this field in JSON
    pub wire: WireName,

    /// Skip every rule when the value is empty
    pub omit_empty: bool,

    /// Rules in check order
    pub constraints: &'static [Constraint],
}

impl FieldRules {
    pub const fn new(
        field: &'static str,
        wire: WireName,
        constraints: &'static [Constraint],
    ) -> Self {
        Self {
            field,
            wire,
            omit_empty: false,
            constraints,
        }
    }

    /// Same rules, but only checked when a value is supplied
    pub const fn optional(
        field: &'static str,
        wire: WireName,
        constraints: &'static [Constraint],
    ) -> Self {
        Self {
            field,
            wire,
            omit_empty: true,
            constraints,
        }
    }

    /// Name reported to clients for this field
    pub fn display_name(&self) -> String {
        match self.wire {
            WireName::Named(name) => name.to_string(),
            WireName::Unnamed => self.field.to_lowercase(),
            WireName::Suppressed => self.field.to_string(),
        }
    }
}

/// The full table for a request shape
#[derive(Debug, Clone, Copy)]
pub struct ConstraintSet {
    pub shape: &'static str,
    pub fields: &'static [FieldRules],
}

impl ConstraintSet {
    pub const fn new(shape: &'static str, fields: &'static [FieldRules]) -> Self {
        Self { shape, fields }
    }
}

/// A payload whose shape has a constraint table
///
/// `field_value` returns `None` for fields that were not supplied; the
/// validator treats `None` and `Some("")` the same way.
pub trait Constrained {
    fn constraint_set() -> &'static ConstraintSet;

    fn field_value(&self, field: &str) -> Option<&str>;
}
