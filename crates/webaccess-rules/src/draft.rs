//! Rule drafts: the state shared by the editor panels during one edit.
//!
//! A [`RuleDraft`] is created when the editor opens, passed by mutable
//! reference to each panel as it saves, and turned into a [`Rule`] once every
//! panel accepted its values.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::criteria::CriteriaSets;
use crate::error::RuleError;
use crate::field::{Field, FieldKind};
use crate::rule_type::RuleType;

/// Value of a rule property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// On/off switch such as form mode.
    Flag(bool),
    /// Free text such as a custom name.
    Text(String),
    /// Gesture identifiers mapped to the action they trigger.
    Gestures(BTreeMap<String, String>),
}

/// A validated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    rule_type: RuleType,
    comment: String,
    criteria: CriteriaSets,
    properties: BTreeMap<Field, PropertyValue>,
}

impl Rule {
    /// Unique name of the rule.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type of the rule.
    #[must_use]
    pub const fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    /// User documentation.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Criteria sets in sequence order.
    #[must_use]
    pub const fn criteria(&self) -> &CriteriaSets {
        &self.criteria
    }

    /// Value of a property.
    #[must_use]
    pub fn property(&self, field: Field) -> Option<&PropertyValue> {
        self.properties.get(&field)
    }
}

/// Builder scoped to one create or edit operation.
#[derive(Debug, Clone, Default)]
pub struct RuleDraft {
    original_name: Option<String>,
    rule_type: Option<RuleType>,
    name: String,
    comment: String,
    criteria: CriteriaSets,
    properties: BTreeMap<Field, PropertyValue>,
}

impl RuleDraft {
    /// Start a draft for a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft editing a copy of `rule`.
    #[must_use]
    pub fn edit(rule: &Rule) -> Self {
        Self {
            original_name: Some(rule.name.clone()),
            rule_type: Some(rule.rule_type),
            name: rule.name.clone(),
            comment: rule.comment.clone(),
            criteria: rule.criteria.clone(),
            properties: rule.properties.clone(),
        }
    }

    /// Whether the draft creates a rule rather than editing one.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.original_name.is_none()
    }

    /// Currently selected type.
    #[must_use]
    pub const fn rule_type(&self) -> Option<RuleType> {
        self.rule_type
    }

    /// Select the type, dropping properties the new type does not accept.
    pub fn set_rule_type(&mut self, rule_type: RuleType) {
        self.rule_type = Some(rule_type);
        self.properties.retain(|field, _| {
            let keep = rule_type.accepts(*field);
            if !keep {
                debug!("dropping {field} which {rule_type} rules do not accept");
            }
            keep
        });
    }

    /// Name as entered.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the user documentation.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Criteria sets of the draft.
    #[must_use]
    pub const fn criteria_sets(&self) -> &CriteriaSets {
        &self.criteria
    }

    /// Mutable criteria sets of the draft.
    pub fn criteria_sets_mut(&mut self) -> &mut CriteriaSets {
        &mut self.criteria
    }

    /// Value of a property.
    #[must_use]
    pub fn property(&self, field: Field) -> Option<&PropertyValue> {
        self.properties.get(&field)
    }

    /// Set a property.
    ///
    /// Before a type is chosen any property is accepted; properties the
    /// chosen type rejects are dropped by [`set_rule_type`](Self::set_rule_type).
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::NotAProperty`] for criteria and context fields and
    /// [`RuleError::FieldNotApplicable`] when the current type does not accept
    /// `field`.
    pub fn set_property(&mut self, field: Field, value: PropertyValue) -> Result<(), RuleError> {
        if field.kind() != FieldKind::Property {
            return Err(RuleError::NotAProperty { field });
        }
        if let Some(rule_type) = self.rule_type {
            if !rule_type.accepts(field) {
                return Err(RuleError::FieldNotApplicable { field, rule_type });
            }
        }
        self.properties.insert(field, value);
        Ok(())
    }

    /// Store a text property, or remove it when `value` is blank.
    ///
    /// # Errors
    ///
    /// Same as [`set_property`](Self::set_property).
    pub fn set_if_not_empty(&mut self, field: Field, value: &str) -> Result<(), RuleError> {
        if value.trim().is_empty() {
            if field.kind() != FieldKind::Property {
                return Err(RuleError::NotAProperty { field });
            }
            self.properties.remove(&field);
            return Ok(());
        }
        self.set_property(field, PropertyValue::Text(value.to_owned()))
    }

    /// Turn form mode on for a new rule created inside a form control.
    ///
    /// `ancestry` lists the roles of the element at the caret followed by
    /// those of its ancestors. Drafts editing an existing rule are left
    /// untouched. Returns whether form mode was switched on.
    ///
    /// # Examples
    /// ```
    /// use webaccess_rules::{Field, PropertyValue, RuleDraft};
    ///
    /// const EDITABLE_TEXT: i64 = 8;
    /// const COMBO_BOX: i64 = 13;
    ///
    /// let mut draft = RuleDraft::new();
    /// assert!(draft.infer_form_mode([44, EDITABLE_TEXT, 3], &[EDITABLE_TEXT, COMBO_BOX]));
    /// assert_eq!(draft.property(Field::FormMode), Some(&PropertyValue::Flag(true)));
    /// ```
    pub fn infer_form_mode(
        &mut self,
        ancestry: impl IntoIterator<Item = i64>,
        form_mode_roles: &[i64],
    ) -> bool {
        if !self.is_new() {
            return false;
        }
        let inside_form = ancestry
            .into_iter()
            .any(|role| form_mode_roles.contains(&role));
        if inside_form {
            self.properties
                .insert(Field::FormMode, PropertyValue::Flag(true));
        }
        inside_form
    }

    /// Validate the draft and build the rule.
    ///
    /// `existing_names` are the names of the rules already defined, including
    /// the one being edited.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::MissingType`] when no type was chosen,
    /// [`RuleError::MissingName`] when the name is blank and
    /// [`RuleError::DuplicateName`] when a new or renamed rule would reuse the
    /// name of another rule.
    pub fn finish<'a>(
        &self,
        existing_names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Rule, RuleError> {
        let rule_type = self.rule_type.ok_or(RuleError::MissingType)?;
        if self.name.trim().is_empty() {
            return Err(RuleError::MissingName);
        }
        let renamed = self.original_name.as_deref() != Some(self.name.as_str());
        if renamed && existing_names.into_iter().any(|name| name == self.name) {
            warn!("rule name {:?} is already taken", self.name);
            return Err(RuleError::DuplicateName {
                name: self.name.clone(),
            });
        }
        let properties = self
            .properties
            .iter()
            .filter(|(field, _)| rule_type.accepts(**field))
            .map(|(field, value)| (*field, value.clone()))
            .collect();
        Ok(Rule {
            name: self.name.clone(),
            rule_type,
            comment: self.comment.clone(),
            criteria: self.criteria.clone(),
            properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(name: &str) -> RuleDraft {
        let mut draft = RuleDraft::new();
        draft.set_rule_type(RuleType::Marker);
        draft.set_name(name);
        draft
    }

    fn finish(draft: &RuleDraft, existing: &[&str]) -> Rule {
        draft
            .finish(existing.iter().copied())
            .unwrap_or_else(|error| panic!("draft should be valid: {error:?}"))
    }

    #[test]
    fn type_is_required_before_name() {
        let draft = RuleDraft::new();
        assert_eq!(draft.finish([]).err(), Some(RuleError::MissingType));
    }

    #[test]
    fn blank_name_is_rejected() {
        let draft = marker("  ");
        assert_eq!(draft.finish([]).err(), Some(RuleError::MissingName));
    }

    #[test]
    fn new_rule_cannot_reuse_a_name() {
        let draft = marker("Search");
        assert_eq!(
            draft.finish(["Menu", "Search"]).err(),
            Some(RuleError::DuplicateName {
                name: "Search".into()
            })
        );
    }

    #[test]
    fn edited_rule_keeps_its_own_name() {
        let rule = finish(&marker("Search"), &[]);
        let mut draft = RuleDraft::edit(&rule);
        draft.set_comment("Jumps to the search field");
        let edited = finish(&draft, &["Search", "Menu"]);
        assert_eq!(edited.name(), "Search");
        assert_eq!(edited.comment(), "Jumps to the search field");
    }

    #[test]
    fn renamed_rule_cannot_take_another_name() {
        let rule = finish(&marker("Search"), &[]);
        let mut draft = RuleDraft::edit(&rule);
        draft.set_name("Menu");
        assert!(matches!(
            draft.finish(["Search", "Menu"]),
            Err(RuleError::DuplicateName { .. })
        ));
    }

    #[test]
    fn changing_type_drops_inapplicable_properties() {
        let mut draft = marker("Title");
        assert_eq!(draft.set_if_not_empty(Field::CustomName, "Heading"), Ok(()));
        assert_eq!(draft.set_if_not_empty(Field::CustomValue, "Inbox"), Ok(()));
        draft.set_rule_type(RuleType::PageTitle1);
        assert_eq!(draft.property(Field::CustomName), None);
        assert_eq!(
            draft.property(Field::CustomValue),
            Some(&PropertyValue::Text("Inbox".into()))
        );
    }

    #[test]
    fn inapplicable_property_is_rejected() {
        let mut draft = marker("Zone");
        draft.set_rule_type(RuleType::Parent);
        assert_eq!(
            draft.set_property(Field::Skip, PropertyValue::Flag(true)),
            Err(RuleError::FieldNotApplicable {
                field: Field::Skip,
                rule_type: RuleType::Parent,
            })
        );
    }

    #[test]
    fn criteria_fields_are_not_properties() {
        let mut draft = marker("x");
        assert_eq!(
            draft.set_if_not_empty(Field::Role, "9"),
            Err(RuleError::NotAProperty { field: Field::Role })
        );
    }

    #[test]
    fn form_mode_is_not_inferred_when_editing() {
        let rule = finish(&marker("Search"), &[]);
        let mut draft = RuleDraft::edit(&rule);
        assert!(!draft.infer_form_mode([8], &[8]));
        assert_eq!(draft.property(Field::FormMode), None);
    }

    #[test]
    fn inferred_form_mode_is_dropped_for_page_titles() {
        let mut draft = RuleDraft::new();
        assert!(draft.infer_form_mode([8], &[8, 13]));
        draft.set_name("Login");
        draft.set_rule_type(RuleType::Zone);
        let zone = finish(&draft, &[]);
        assert_eq!(zone.property(Field::FormMode), Some(&PropertyValue::Flag(true)));

        let mut draft = RuleDraft::new();
        assert!(draft.infer_form_mode([8], &[8, 13]));
        draft.set_name("Login title");
        draft.set_rule_type(RuleType::PageTitle2);
        let title = finish(&draft, &[]);
        assert_eq!(title.property(Field::FormMode), None);
    }
}
