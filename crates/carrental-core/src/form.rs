use crate::page::WelcomePage;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormMethod {
    Get,
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMethod::Get => write!(f, "GET"),
        }
    }
}

/// The navigation a browser performs when the welcome form is submitted.
///
/// The form has no named controls, so the encoded form data set is empty.
/// For a GET form the browser replaces the action's query with that data,
/// which leaves a bare `?` and keeps any fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    pub action: String,
    pub method: FormMethod,
}

impl FormSubmission {
    pub fn from_page(page: &WelcomePage) -> Self {
        Self {
            action: page.action.clone(),
            method: FormMethod::Get,
        }
    }

    /// Target of the navigation, relative to the page URL when `action` is.
    pub fn navigation_url(&self) -> String {
        let (without_fragment, fragment) = match self.action.split_once('#') {
            Some((head, frag)) => (head, Some(frag)),
            None => (self.action.as_str(), None),
        };
        let path = without_fragment
            .split_once('?')
            .map_or(without_fragment, |(path, _)| path);

        let mut url = format!("{path}?");
        if let Some(frag) = fragment {
            url.push('#');
            url.push_str(frag);
        }
        url
    }
}
