use chrono::NaiveDate;

use crate::form::data::{Field, Gender};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Dob => "date",
        Field::Email => "email",
        Field::Phone => "tel",
        Field::Password | Field::ConfirmPassword => "password",
        _ => "text",
    }
}

/// Labeled control for one field. A failing field gets the `error` class
/// and its message right below the control.
pub fn field_html(field: Field, value: &str, error: Option<&str>, today: NaiveDate) -> String {
    let name = field.wire_name();
    let class = if error.is_some() { "input error" } else { "input" };

    let control = match field {
        Field::Gender => {
            let mut options = format!(
                r#"<option value=""{}>Select gender</option>"#,
                if value.is_empty() { " selected" } else { "" }
            );
            for gender in Gender::ALL {
                let g = gender.as_str();
                options.push_str(&format!(
                    r#"<option value="{g}"{}>{g}</option>"#,
                    if value == g { " selected" } else { "" }
                ));
            }
            format!(r#"<select id="{name}" name="{name}" class="{class}">{options}</select>"#)
        }
        Field::Dob => format!(
            r#"<input id="{name}" name="{name}" type="date" class="{class}" max="{}" value="{}">"#,
            today.format("%Y-%m-%d"),
            escape(value)
        ),
        _ => format!(
            r#"<input id="{name}" name="{name}" type="{}" class="{class}" value="{}">"#,
            input_type(field),
            escape(value)
        ),
    };

    let message = error
        .map(|m| format!(r#"<p class="error-message">{}</p>"#, escape(m)))
        .unwrap_or_default();

    format!(
        r#"<div class="form-field"><label for="{name}">{}</label>{control}{message}</div>"#,
        field.label()
    )
}

const STYLE: &str = r#"<style>
body{font-family:Arial,sans-serif;background:#f3f4f6}
form{max-width:420px;margin:40px auto;background:#fff;padding:32px;border-radius:8px}
.form-field{display:flex;flex-direction:column;margin-bottom:14px}
.input{padding:8px;border:1px solid #d1d5db;border-radius:4px}
.input.error{border-color:#dc2626}
.error-message{color:#dc2626;font-size:13px;margin:4px 0 0}
.success{max-width:420px;margin:20px auto;padding:12px;background:#dcfce7;color:#166534;border-radius:8px;text-align:center}
</style>"#;

/// Complete html document around the rendered fields.
pub fn page(fields: &[String], notice: Option<&str>) -> String {
    let banner = notice
        .map(|n| format!(r#"<div class="success" role="status">{}</div>"#, escape(n)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>SignUp Form</title>{STYLE}</head><body>{banner}<form method="post" action="/signup" novalidate><h1>SignUp Form</h1>{}<button type="submit">Submit</button></form></body></html>"#,
        fields.concat()
    )
}
