//! Validation scope and options
//!
//! A [`Scope`] is the per-call context threaded through every recursive
//! step: property path, active groups, message language and the violation
//! factory. It is extended by producing a *new* scope; sibling branches never
//! see each other's path.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::argument::Argument;
use crate::foundation::constraint::Constraint;
use crate::foundation::error::{FatalError, ValidationResult};
use crate::foundation::list::ViolationList;
use crate::foundation::path::{PathElement, PropertyPath};
use crate::foundation::value::Key;
use crate::foundation::violation::{TranslatingViolationFactory, ViolationBuilder, ViolationFactory};
use crate::translation::LanguageTag;

/// Group every constraint and scope belongs to when none is given.
pub const DEFAULT_GROUP: &str = "default";

// ============================================================================
// OPTIONS
// ============================================================================

/// One entry of an option list: a scope modifier or a constraint.
///
/// Modifiers are applied in order by [`Scope::apply_options`]; constraints
/// are run by the dispatcher in the same order.
#[derive(Clone)]
#[non_exhaustive]
pub enum Opt {
    /// Appends a property name to the path.
    PropertyName(Arc<str>),
    /// Appends an array index to the path.
    ArrayIndex(usize),
    /// Appends a whole path.
    PropertyPath(PropertyPath),
    /// Sets the message language.
    Language(LanguageTag),
    /// Replaces the active groups.
    Groups(Arc<[Cow<'static, str>]>),
    /// A constraint.
    Constraint(Arc<dyn Constraint>),
}

impl Opt {
    /// Wraps a shared constraint.
    pub fn constraint(constraint: Arc<dyn Constraint>) -> Self {
        Self::Constraint(constraint)
    }

    /// The constraint, when this option is one.
    #[must_use]
    pub fn as_constraint(&self) -> Option<&dyn Constraint> {
        match self {
            Self::Constraint(constraint) => Some(constraint.as_ref()),
            _ => None,
        }
    }
}

impl<C: Constraint + 'static> From<C> for Opt {
    fn from(constraint: C) -> Self {
        Self::Constraint(Arc::new(constraint))
    }
}

impl fmt::Debug for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PropertyName(name) => f.debug_tuple("PropertyName").field(name).finish(),
            Self::ArrayIndex(index) => f.debug_tuple("ArrayIndex").field(index).finish(),
            Self::PropertyPath(path) => f.debug_tuple("PropertyPath").field(path).finish(),
            Self::Language(tag) => f.debug_tuple("Language").field(tag).finish(),
            Self::Groups(groups) => f.debug_tuple("Groups").field(groups).finish(),
            Self::Constraint(constraint) => {
                f.debug_tuple("Constraint").field(&constraint.name()).finish()
            }
        }
    }
}

/// Appends a property name to the path.
pub fn property_name(name: impl Into<Arc<str>>) -> Opt {
    Opt::PropertyName(name.into())
}

/// Appends an array index to the path.
pub fn array_index(index: usize) -> Opt {
    Opt::ArrayIndex(index)
}

/// Appends a whole path.
pub fn property_path(path: PropertyPath) -> Opt {
    Opt::PropertyPath(path)
}

/// Sets the message language.
pub fn language(tag: LanguageTag) -> Opt {
    Opt::Language(tag)
}

/// Replaces the active validation groups.
pub fn groups<I, S>(groups: I) -> Opt
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    Opt::Groups(groups.into_iter().map(Into::into).collect())
}

// ============================================================================
// SCOPE
// ============================================================================

/// Per-call validation context.
///
/// Cheap to clone: the path is a persistent list and the factory is shared.
#[derive(Clone)]
pub struct Scope {
    property_path: PropertyPath,
    groups: Arc<[Cow<'static, str>]>,
    language: LanguageTag,
    factory: Arc<dyn ViolationFactory>,
}

impl Scope {
    /// Creates a root scope over `factory`.
    pub fn new(factory: Arc<dyn ViolationFactory>) -> Self {
        Self {
            property_path: PropertyPath::new(),
            groups: Arc::from([]),
            language: LanguageTag::UND,
            factory,
        }
    }

    /// Current property path.
    #[must_use]
    pub fn property_path(&self) -> &PropertyPath {
        &self.property_path
    }

    /// Active groups; empty means the default group only.
    #[must_use]
    pub fn groups(&self) -> &[Cow<'static, str>] {
        &self.groups
    }

    /// Message language.
    #[must_use]
    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    /// Violation factory.
    #[must_use]
    pub fn factory(&self) -> &dyn ViolationFactory {
        self.factory.as_ref()
    }

    /// Child scope one property deeper.
    #[must_use]
    pub fn at_property(&self, name: impl Into<Arc<str>>) -> Self {
        self.at(PathElement::property(name))
    }

    /// Child scope one index deeper.
    #[must_use]
    pub fn at_index(&self, index: usize) -> Self {
        self.at(PathElement::Index(index))
    }

    /// Child scope for an element of an iterable.
    #[must_use]
    pub fn at_key(&self, key: &Key) -> Self {
        match key {
            Key::Index(index) => self.at_index(*index),
            Key::Name(name) => self.at_property(name.as_str()),
        }
    }

    /// Child scope with `path` appended.
    #[must_use]
    pub fn at_path(&self, path: &PropertyPath) -> Self {
        Self {
            property_path: self.property_path.join(path),
            ..self.clone()
        }
    }

    fn at(&self, element: PathElement) -> Self {
        Self {
            property_path: self.property_path.with(element),
            ..self.clone()
        }
    }

    /// Scope with the active groups replaced.
    #[must_use]
    pub fn with_groups<I, S>(&self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    /// Scope with the message language replaced.
    #[must_use]
    pub fn with_language(&self, language: LanguageTag) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }

    /// Scope with another violation factory.
    #[must_use]
    pub fn with_factory(&self, factory: Arc<dyn ViolationFactory>) -> Self {
        Self {
            factory,
            ..self.clone()
        }
    }

    /// Applies an option list, returning the derived scope.
    ///
    /// Path, language and group modifiers are applied in order. Every
    /// constraint's [`set_up`](Constraint::set_up) runs too; the first
    /// failure aborts.
    pub fn apply_options(&self, options: &[Opt]) -> Result<Self, FatalError> {
        let mut scope = self.clone();
        for option in options {
            match option {
                Opt::PropertyName(name) => {
                    scope.property_path = scope.property_path.with_property(Arc::clone(name));
                }
                Opt::ArrayIndex(index) => {
                    scope.property_path = scope.property_path.with_index(*index);
                }
                Opt::PropertyPath(path) => {
                    scope.property_path = scope.property_path.join(path);
                }
                Opt::Language(tag) => scope.language = tag.clone(),
                Opt::Groups(groups) => scope.groups = Arc::clone(groups),
                Opt::Constraint(constraint) => {
                    if let Err(error) = constraint.set_up() {
                        debug!(
                            constraint = constraint.name(),
                            path = %scope.property_path,
                            %error,
                            "constraint set-up failed"
                        );
                        return Err(error);
                    }
                }
            }
        }
        Ok(scope)
    }

    /// Returns `true` when a rule restricted to `groups` must be skipped.
    ///
    /// An empty group list on either side stands for [`DEFAULT_GROUP`]; the
    /// rule runs when the two sets intersect.
    #[must_use]
    pub fn is_ignored<S: AsRef<str>>(&self, groups: &[S]) -> bool {
        let requested: Vec<&str> = if groups.is_empty() {
            vec![DEFAULT_GROUP]
        } else {
            groups.iter().map(AsRef::as_ref).collect()
        };
        let active: Vec<&str> = if self.groups.is_empty() {
            vec![DEFAULT_GROUP]
        } else {
            self.groups.iter().map(AsRef::as_ref).collect()
        };

        !requested.iter().any(|group| active.contains(group))
    }

    /// Starts a violation located at the current path, in the current language.
    pub fn build_violation(
        &self,
        code: impl Into<Cow<'static, str>>,
        message_template: impl Into<Cow<'static, str>>,
    ) -> ViolationBuilder<'_> {
        ViolationBuilder::new(self.factory.as_ref(), code, message_template)
            .with_property_path(self.property_path.clone())
            .with_language(self.language.clone())
    }

    /// Evaluates every argument in this scope and flattens the results.
    ///
    /// A fatal error aborts the remaining arguments.
    pub fn validate<'a, I>(&self, arguments: I) -> ValidationResult
    where
        I: IntoIterator<Item = Argument<'a>>,
    {
        let mut violations = ViolationList::new();
        for argument in arguments {
            violations.append_result(argument.validate(self))?;
        }
        violations.into_result()
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new(Arc::new(TranslatingViolationFactory::default()))
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("property_path", &self.property_path)
            .field("groups", &self.groups)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
