//! Storable rule and criteria fields.

use std::fmt;
use std::str::FromStr;

use crate::localization;

/// Every key a rule or criteria set may store.
///
/// The declaration order is the display order used by summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Text content of the element.
    Text,
    /// Role expression.
    Role,
    /// HTML tag name.
    Tag,
    /// HTML `id` attribute.
    Id,
    /// HTML `class` attribute.
    ClassName,
    /// States expression.
    States,
    /// Image source.
    Src,
    /// Path from the closest context element.
    RelativePath,
    /// Position among the matching elements.
    Index,
    /// Page title the criteria set is restricted to.
    ContextPageTitle,
    /// Page type the criteria set is restricted to.
    ContextPageType,
    /// Parent zone the criteria set is restricted to.
    ContextParent,
    /// Keyboard gestures bound to the rule.
    Gestures,
    /// Action run automatically when the rule matches.
    AutoAction,
    /// Whether matching elements switch to form mode.
    FormMode,
    /// Whether page navigation skips matching elements.
    Skip,
    /// Whether the rule name is spoken on matches.
    SayName,
    /// Name spoken instead of the rule name.
    CustomName,
    /// Text spoken instead of the element content.
    CustomValue,
}

/// Broad category of a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Matches a property of the element itself.
    Criterion,
    /// Restricts where a criteria set applies.
    Context,
    /// Configures what the rule does once it matches.
    Property,
}

/// Vocabulary an expression field is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    /// Element roles.
    Roles,
    /// Element states.
    States,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Self; 19] = [
        Self::Text,
        Self::Role,
        Self::Tag,
        Self::Id,
        Self::ClassName,
        Self::States,
        Self::Src,
        Self::RelativePath,
        Self::Index,
        Self::ContextPageTitle,
        Self::ContextPageType,
        Self::ContextParent,
        Self::Gestures,
        Self::AutoAction,
        Self::FormMode,
        Self::Skip,
        Self::SayName,
        Self::CustomName,
        Self::CustomValue,
    ];

    /// Key under which the field is stored.
    ///
    /// # Examples
    /// ```
    /// use webaccess_rules::Field;
    ///
    /// assert_eq!(Field::ClassName.key(), "className");
    /// assert_eq!("contextPageTitle".parse::<Field>(), Ok(Field::ContextPageTitle));
    /// ```
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Role => "role",
            Self::Tag => "tag",
            Self::Id => "id",
            Self::ClassName => "className",
            Self::States => "states",
            Self::Src => "src",
            Self::RelativePath => "relativePath",
            Self::Index => "index",
            Self::ContextPageTitle => "contextPageTitle",
            Self::ContextPageType => "contextPageType",
            Self::ContextParent => "contextParent",
            Self::Gestures => "gestures",
            Self::AutoAction => "autoAction",
            Self::FormMode => "formMode",
            Self::Skip => "skip",
            Self::SayName => "sayName",
            Self::CustomName => "customName",
            Self::CustomValue => "customValue",
        }
    }

    /// Category of the field.
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Text
            | Self::Role
            | Self::Tag
            | Self::Id
            | Self::ClassName
            | Self::States
            | Self::Src
            | Self::RelativePath
            | Self::Index => FieldKind::Criterion,
            Self::ContextPageTitle | Self::ContextPageType | Self::ContextParent => {
                FieldKind::Context
            }
            Self::Gestures
            | Self::AutoAction
            | Self::FormMode
            | Self::Skip
            | Self::SayName
            | Self::CustomName
            | Self::CustomValue => FieldKind::Property,
        }
    }

    /// Vocabulary of an expression field, `None` for plain text fields.
    #[must_use]
    pub const fn vocabulary(self) -> Option<Vocabulary> {
        match self {
            Self::Role => Some(Vocabulary::Roles),
            Self::States => Some(Vocabulary::States),
            _ => None,
        }
    }

    /// Localized display label.
    #[must_use]
    pub fn label(self) -> String {
        localization::message(self.message_id())
    }

    const fn message_id(self) -> &'static str {
        match self {
            Self::Text => "field-text",
            Self::Role => "field-role",
            Self::Tag => "field-tag",
            Self::Id => "field-id",
            Self::ClassName => "field-class-name",
            Self::States => "field-states",
            Self::Src => "field-src",
            Self::RelativePath => "field-relative-path",
            Self::Index => "field-index",
            Self::ContextPageTitle => "field-context-page-title",
            Self::ContextPageType => "field-context-page-type",
            Self::ContextParent => "field-context-parent",
            Self::Gestures => "field-gestures",
            Self::AutoAction => "field-auto-action",
            Self::FormMode => "field-form-mode",
            Self::Skip => "field-skip",
            Self::SayName => "field-say-name",
            Self::CustomName => "field-custom-name",
            Self::CustomValue => "field-custom-value",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a key names no known [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError(pub String);

impl fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field key: {}", self.0)
    }
}

impl std::error::Error for UnknownFieldError {}

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.key() == trimmed)
            .ok_or_else(|| UnknownFieldError(value.to_owned()))
    }
}
