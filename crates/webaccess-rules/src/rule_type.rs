//! Rule types and the fields each of them accepts.

use std::fmt;
use std::str::FromStr;

use crate::field::{Field, FieldKind};
use crate::localization;

/// What a rule represents on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleType {
    /// A single element reachable with a gesture.
    Marker,
    /// A region navigation can be restricted to.
    Zone,
    /// Text announced as the main title of the page.
    PageTitle1,
    /// Text announced as the secondary title of the page.
    PageTitle2,
    /// An element other criteria sets can use as context.
    Parent,
}

const ACTION_PROPERTIES: &[Field] = &[
    Field::Gestures,
    Field::AutoAction,
    Field::FormMode,
    Field::Skip,
    Field::SayName,
    Field::CustomName,
    Field::CustomValue,
];
const TITLE_PROPERTIES: &[Field] = &[Field::CustomValue];
const NO_PROPERTIES: &[Field] = &[];

impl RuleType {
    /// All types in the order the editor offers them.
    pub const ALL: [Self; 5] = [
        Self::Marker,
        Self::Zone,
        Self::PageTitle1,
        Self::PageTitle2,
        Self::Parent,
    ];

    /// Key under which the type is stored.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Marker => "marker",
            Self::Zone => "zone",
            Self::PageTitle1 => "pageTitle1",
            Self::PageTitle2 => "pageTitle2",
            Self::Parent => "parent",
        }
    }

    /// Localized display label.
    #[must_use]
    pub fn label(self) -> String {
        localization::message(match self {
            Self::Marker => "rule-type-marker",
            Self::Zone => "rule-type-zone",
            Self::PageTitle1 => "rule-type-page-title-1",
            Self::PageTitle2 => "rule-type-page-title-2",
            Self::Parent => "rule-type-parent",
        })
    }

    /// Property fields available to rules of this type.
    ///
    /// # Examples
    /// ```
    /// use webaccess_rules::{Field, RuleType};
    ///
    /// assert!(RuleType::Zone.property_fields().contains(&Field::Gestures));
    /// assert_eq!(RuleType::PageTitle1.property_fields(), &[Field::CustomValue]);
    /// assert!(RuleType::Parent.property_fields().is_empty());
    /// ```
    #[must_use]
    pub const fn property_fields(self) -> &'static [Field] {
        match self {
            Self::Marker | Self::Zone => ACTION_PROPERTIES,
            Self::PageTitle1 | Self::PageTitle2 => TITLE_PROPERTIES,
            Self::Parent => NO_PROPERTIES,
        }
    }

    /// Whether rules of this type may store `field`.
    ///
    /// Criteria and context fields apply to every type.
    #[must_use]
    pub fn accepts(self, field: Field) -> bool {
        match field.kind() {
            FieldKind::Criterion | FieldKind::Context => true,
            FieldKind::Property => self.property_fields().contains(&field),
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a key names no known [`RuleType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRuleTypeError(pub String);

impl fmt::Display for UnknownRuleTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rule type: {}", self.0)
    }
}

impl std::error::Error for UnknownRuleTypeError {}

impl FromStr for RuleType {
    type Err = UnknownRuleTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|rule_type| rule_type.key() == trimmed)
            .ok_or_else(|| UnknownRuleTypeError(value.to_owned()))
    }
}
