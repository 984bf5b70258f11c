//! Printable document rendering: a full worksheet with signature blocks, a
//! compact card, and the plain-text clipboard export.

use serde::{Deserialize, Serialize};

use super::domain::WorksheetForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderLayout {
    #[default]
    Worksheet,
    Card,
}

/// Render the form into a standalone HTML document.
pub fn render_document(title: &str, form: &WorksheetForm, layout: RenderLayout) -> String {
    match layout {
        RenderLayout::Worksheet => render_worksheet(title, form),
        RenderLayout::Card => render_card(title, form),
    }
}

fn render_worksheet(title: &str, form: &WorksheetForm) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str("</head>\n<body class=\"worksheet\">\n");
    html.push_str("<h1>Proficiency and Conduct Marking Worksheet</h1>\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(title)));

    push_section(
        &mut html,
        "Proficiency",
        form.proficiency_mark.display(),
        &form.proficiency_statement,
    );
    push_section(
        &mut html,
        "Conduct",
        form.conduct_mark.display(),
        &form.conduct_statement,
    );

    html.push_str("<div class=\"signatures\">\n");
    for role in ["Marine", "Counselor", "Reviewing Officer"] {
        html.push_str(&format!(
            "<div class=\"signature-block\">\
             <span class=\"signature-line\"></span>\
             <span class=\"signature-label\">{role} Signature / Date</span>\
             </div>\n"
        ));
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_card(title: &str, form: &WorksheetForm) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str("</head>\n<body class=\"card\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    html.push_str(&format!(
        "<p class=\"marks\">PRO {} / CON {}</p>\n",
        escape_html(form.proficiency_mark.display()),
        escape_html(form.conduct_mark.display()),
    ));
    html.push_str(&format!(
        "<p class=\"statement\">{}</p>\n<p class=\"statement\">{}</p>\n",
        escape_html(form.proficiency_statement.trim()),
        escape_html(form.conduct_statement.trim()),
    ));
    html.push_str("</body>\n</html>\n");
    html
}

fn push_section(html: &mut String, heading: &str, mark: &str, statement: &str) {
    html.push_str(&format!(
        "<section>\n<h3>{heading} ({})</h3>\n<p>{}</p>\n</section>\n",
        escape_html(mark),
        escape_html(statement.trim()),
    ));
}

/// Plain-text export matching the copy-to-clipboard format; empty fields are
/// omitted entirely.
pub fn clipboard_text(form: &WorksheetForm) -> String {
    let mut text = String::new();

    let proficiency = form.proficiency_statement.trim();
    if !proficiency.is_empty() {
        text.push_str(&format!(
            "PROFICIENCY ({}):\n{proficiency}\n\n",
            form.proficiency_mark.display()
        ));
    }

    let conduct = form.conduct_statement.trim();
    if !conduct.is_empty() {
        text.push_str(&format!(
            "CONDUCT ({}):\n{conduct}",
            form.conduct_mark.display()
        ));
    }

    text.trim().to_string()
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
