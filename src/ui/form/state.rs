use crate::api::NewPost;
use crate::mvi::State;
use std::collections::BTreeSet;

use super::validate::validate;

/// Fields of the create form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FormField {
    #[default]
    Title,
    Categories,
    Content,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Categories, FormField::Content];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Categories => "Categories",
            FormField::Content => "Content",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Categories,
            FormField::Categories => FormField::Content,
            FormField::Content => FormField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Categories => FormField::Title,
            FormField::Content => FormField::Categories,
        }
    }
}

/// Raw form values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostForm {
    pub title: String,
    pub categories: String,
    pub content: String,
}

impl PostForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Categories => &self.categories,
            FormField::Content => &self.content,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Categories => &mut self.categories,
            FormField::Content => &mut self.content,
        }
    }
}

impl From<PostForm> for NewPost {
    fn from(form: PostForm) -> Self {
        NewPost {
            title: form.title,
            categories: form.categories,
            content: form.content,
        }
    }
}

/// Create form state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub values: PostForm,
    pub focused: FormField,
    /// Fields the user has left at least once. Errors are only shown for these.
    pub touched: BTreeSet<FormField>,
    /// A create request is in flight.
    pub submitting: bool,
}

impl State for FormState {}

impl FormState {
    /// Validation message to display for `field`, if any.
    pub fn visible_error(&self, field: FormField) -> Option<&'static str> {
        if !self.touched.contains(&field) {
            return None;
        }
        validate(&self.values).get(&field).copied()
    }

    pub fn is_valid(&self) -> bool {
        validate(&self.values).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut field = FormField::Title;
        for expected in [FormField::Categories, FormField::Content, FormField::Title] {
            field = field.next();
            assert_eq!(field, expected);
        }
        assert_eq!(FormField::Title.prev(), FormField::Content);
    }

    #[test]
    fn untouched_fields_hide_errors() {
        let state = FormState::default();
        assert!(!state.is_valid());
        assert_eq!(state.visible_error(FormField::Title), None);
    }
}
