//! The RC status search form.
//!
//! The lookup page is a JSF application. Submitting a search is an AJAX
//! partial-page update: the request names the button that triggered it and
//! the panels to re-render, and echoes back the view-state token issued with
//! the landing page.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::domain::RegistrationNumber;

use super::error::LookupError;

/// Name of the hidden input carrying the JSF view state.
const VIEW_STATE_FIELD: &str = "javax.faces.ViewState";

/// Id of the search form; the submit button's id starts with it.
const FORM_ID: &str = "form_rcdl";

/// Panels the server should re-render with the search result.
const RENDER_TARGETS: &str = "form_rcdl:pnl_show form_rcdl:pg_show form_rcdl:rcdl_pnl";

static VIEW_STATE_INPUT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!(r#"input[name="{VIEW_STATE_FIELD}"]"#)).unwrap()
});

static SEARCH_BUTTON: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(&format!(r#"button[id^="{FORM_ID}"]"#)).unwrap());

/// What a search submission needs from the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    view_state: String,
    button_id: String,
}

impl SearchForm {
    /// Extract the view-state token and the search button from the landing
    /// page markup.
    pub fn from_landing_page(html: &str) -> Result<Self, LookupError> {
        let document = Html::parse_document(html);

        let view_state = document
            .select(&VIEW_STATE_INPUT)
            .next()
            .and_then(|input| input.value().attr("value"))
            .ok_or(LookupError::MissingViewState)?;

        let button_id = document
            .select(&SEARCH_BUTTON)
            .next()
            .and_then(|button| button.value().id())
            .ok_or(LookupError::StructureChanged)?;

        Ok(Self {
            view_state: view_state.to_string(),
            button_id: button_id.to_string(),
        })
    }

    /// Id of the button that submits the search.
    pub fn button_id(&self) -> &str {
        &self.button_id
    }

    /// Form fields for the search POST, in submission order.
    pub fn payload(&self, registration: &RegistrationNumber) -> Vec<(String, String)> {
        let (first, rest) = registration.form_parts();
        vec![
            ("javax.faces.partial.ajax".into(), "true".into()),
            ("javax.faces.source".into(), self.button_id.clone()),
            ("javax.faces.partial.execute".into(), "@all".into()),
            ("javax.faces.partial.render".into(), RENDER_TARGETS.into()),
            (self.button_id.clone(), self.button_id.clone()),
            (FORM_ID.into(), FORM_ID.into()),
            (format!("{FORM_ID}:tf_reg_no1"), first.into()),
            (format!("{FORM_ID}:tf_reg_no2"), rest.into()),
            (VIEW_STATE_FIELD.into(), self.view_state.clone()),
        ]
    }
}
