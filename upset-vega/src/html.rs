const VEGA_URL: &str = "https://cdn.jsdelivr.net/npm/vega@5";
const VEGA_LITE_URL: &str = "https://cdn.jsdelivr.net/npm/vega-lite@5";
const VEGA_EMBED_URL: &str = "https://cdn.jsdelivr.net/npm/vega-embed@6";

/// Page that loads the Vega runtime from a CDN and embeds `spec_json`
pub fn standalone_html(title: &str, spec_json: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="{VEGA_URL}"></script>
  <script src="{VEGA_LITE_URL}"></script>
  <script src="{VEGA_EMBED_URL}"></script>
</head>
<body>
  <div id="vis"></div>
  <script type="text/javascript">
    const spec = {spec};
    vegaEmbed("#vis", spec, {{"mode": "vega-lite"}}).catch(console.error);
  </script>
</body>
</html>
"##,
        title = escape_html(title),
        spec = escape_script(spec_json),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// A literal `</script>` inside the JSON would end the script element early
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_spec() {
        let html = standalone_html("Sets & <things>", r#"{"title": "</script>"}"#);
        assert!(html.contains("<title>Sets &amp; &lt;things&gt;</title>"));
        assert!(html.contains(r#"const spec = {"title": "<\/script>"};"#));
        assert!(html.contains("vega-embed@6"));
        assert!(html.contains("vegaEmbed(\"#vis\""));
    }
}
