use std::collections::BTreeMap;

use super::state::{FormField, PostForm};

/// Check the create form.
///
/// Returns one message per empty field. An empty map means the form can be
/// submitted. Whitespace-only values count as empty.
pub fn validate(form: &PostForm) -> BTreeMap<FormField, &'static str> {
    FormField::ALL
        .into_iter()
        .filter(|field| form.value(*field).trim().is_empty())
        .map(|field| (field, message(field)))
        .collect()
}

fn message(field: FormField) -> &'static str {
    match field {
        FormField::Title => "Your blog post needs a title...",
        FormField::Categories => "Provide at least one category for your blog post...",
        FormField::Content => "Your blog post should very well have some content...",
    }
}
