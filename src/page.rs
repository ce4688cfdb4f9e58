//! HTML page shared by the form and prediction handlers

use std::fmt::Write;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Credit Card Fraud Detection</title>
  <style>
    body { font-family: sans-serif; max-width: 32rem; margin: 2rem auto; }
    label { display: block; margin-top: 0.6rem; }
    input[type=text] { width: 100%; padding: 0.3rem; }
    button { margin-top: 1rem; padding: 0.4rem 1.2rem; }
    .result { margin-top: 1.5rem; font-weight: bold; }
  </style>
</head>
<body>
  <h1>Credit Card Fraud Detection</h1>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// Render the input form, one numeric field per feature, with an optional
/// result line under it.
pub fn render(feature_names: &[String], prediction_text: Option<&str>) -> String {
    let mut html = String::from(HEAD);

    html.push_str("  <form action=\"/predict\" method=\"post\">\n");
    for name in feature_names {
        let name = escape(name);
        let _ = writeln!(
            html,
            "    <label for=\"{name}\">{name}</label>\n    <input type=\"text\" id=\"{name}\" name=\"{name}\" placeholder=\"0.0\">"
        );
    }
    html.push_str("    <button type=\"submit\">Predict</button>\n  </form>\n");

    if let Some(text) = prediction_text {
        let _ = writeln!(html, "  <p class=\"result\">{}</p>", escape(text));
    }

    html.push_str(TAIL);
    html
}

/// Minimal HTML escaping for text and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_lists_features_in_order() {
        let names = vec!["V1".to_string(), "Amount".to_string()];
        let html = render(&names, None);

        let v1 = html.find("name=\"V1\"").unwrap();
        let amount = html.find("name=\"Amount\"").unwrap();
        assert!(v1 < amount);
        assert!(!html.contains("class=\"result\""));
    }

    #[test]
    fn test_result_is_escaped() {
        let html = render(&[], Some("bad <script>\"x\"</script>"));
        assert!(html.contains("bad &lt;script&gt;&quot;x&quot;&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
