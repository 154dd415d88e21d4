use crate::error::Result;
use crate::form::FormSubmission;
use handlebars::Handlebars;
use serde::Serialize;
use std::sync::Arc;

const TEMPLATE_NAME: &str = "welcome";
const WELCOME_TEMPLATE: &str = include_str!("../templates/welcome.hbs");

/// Content of the welcome screen: a title, a heading, a line of text and one
/// button whose form navigates to the registration endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WelcomePage {
    pub title: String,
    pub heading: String,
    pub message: String,
    pub button_label: String,
    pub action: String,
}

impl Default for WelcomePage {
    fn default() -> Self {
        crate::config::Config::default().page()
    }
}

/// Render `page` to HTML. Text is escaped by the template engine, so
/// configured values can't inject markup.
pub fn render(page: &WelcomePage) -> Result<String> {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(true);
    hb.register_template_string(TEMPLATE_NAME, WELCOME_TEMPLATE)?;
    Ok(hb.render(TEMPLATE_NAME, page)?)
}

/// A page rendered once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    html: Arc<str>,
    submission: FormSubmission,
}

impl RenderedPage {
    pub fn new(page: &WelcomePage) -> Result<Self> {
        let html = render(page)?;
        Ok(Self {
            html: Arc::from(html),
            submission: FormSubmission::from_page(page),
        })
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    pub fn submission(&self) -> &FormSubmission {
        &self.submission
    }
}
