//! HTML rendering
//!
//! Templates are compiled into the binary and loaded into a single Tera
//! instance at startup.

use axum::response::Html;
use polls_domain::{Question, QuestionDetail};
use tera::{Context, Tera};

const BASE: &str = include_str!("../../templates/base.html");
const INDEX: &str = include_str!("../../templates/index.html");
const DETAIL: &str = include_str!("../../templates/detail.html");
const RESULTS: &str = include_str!("../../templates/results.html");

/// Page renderer
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE),
            ("index.html", INDEX),
            ("detail.html", DETAIL),
            ("results.html", RESULTS),
        ])?;
        Ok(Self { tera })
    }

    pub fn index(&self, latest_question_list: &[Question]) -> Result<Html<String>, tera::Error> {
        let mut context = Context::new();
        context.insert("latest_question_list", latest_question_list);
        self.render("index.html", &context)
    }

    /// Voting form, optionally with an error line above the choices
    pub fn detail(
        &self,
        detail: &QuestionDetail,
        error_message: Option<&str>,
    ) -> Result<Html<String>, tera::Error> {
        let mut context = Self::question_context(detail);
        context.insert("error_message", &error_message);
        self.render("detail.html", &context)
    }

    pub fn results(&self, detail: &QuestionDetail) -> Result<Html<String>, tera::Error> {
        self.render("results.html", &Self::question_context(detail))
    }

    fn question_context(detail: &QuestionDetail) -> Context {
        let mut context = Context::new();
        context.insert("question", &detail.question);
        context.insert("choices", &detail.choices);
        context
    }

    fn render(&self, name: &str, context: &Context) -> Result<Html<String>, tera::Error> {
        self.tera.render(name, context).map(Html)
    }
}
