//! Full-page HTML templates: the document skeleton, the welcome page, and the
//! two error pages.

use crate::style::style_attr;
use crate::types::StyleMap;

/// Global function the welcome page calls to ask the host for the example.
pub const LOAD_EXAMPLE_HOOK: &str = "webforgeLoadExample";

/// Render the page skeleton around already-rendered body fragments.
pub fn document_page(
    title: &str,
    body_style: &StyleMap,
    body_text: Option<&str>,
    fragments: &[String],
) -> String {
    let mut parts = Vec::with_capacity(fragments.len() + 3);
    parts.push(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}    </style>
</head>
<body{body_style}>"#,
        title = title,
        css = DOCUMENT_CSS,
        body_style = style_attr(body_style),
    ));

    if let Some(text) = body_text.filter(|t| !t.is_empty()) {
        parts.push(format!("<div class=\"body-text\">{text}</div>"));
    }
    parts.extend(fragments.iter().cloned());
    parts.push("</body>\n</html>".to_string());
    parts.join("\n")
}

/// The onboarding page shown for an empty document.
pub fn welcome_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>WebForge - Ready to Build</title>
    <style>{css}    </style>
</head>
<body>
    <div class="welcome-container">
        <h1 class="welcome-title">Welcome to WebForge</h1>
        <p class="welcome-subtitle">Your YAML-powered webpage builder</p>
        <p class="welcome-description">
            Start building your webpage by writing YAML in the editor.
            Use components like headers, paragraphs, images, buttons, and more to create beautiful pages.
        </p>
        <div class="welcome-features">
            <div class="feature-item">
                <div class="feature-title">Simple Syntax</div>
                <div class="feature-desc">Write clean YAML to define your page structure</div>
            </div>
            <div class="feature-item">
                <div class="feature-title">Live Preview</div>
                <div class="feature-desc">See your changes in real-time as you type</div>
            </div>
            <div class="feature-item">
                <div class="feature-title">Rich Components</div>
                <div class="feature-desc">Headers, images, buttons, lists, and more</div>
            </div>
            <div class="feature-item">
                <div class="feature-title">Custom Styling</div>
                <div class="feature-desc">Apply CSS styles to any component</div>
            </div>
        </div>
        <div class="load-example-container">
            <button class="load-example-btn" onclick="window.{hook}()">
                <span class="btn-text">Load Example</span>
            </button>
            <p class="load-example-desc">Try our example to see what's possible</p>
        </div>
    </div>
    <script>
        window.{hook} = function() {{
            if (window.webforge && window.webforge.loadExample) {{
                window.webforge.loadExample();
            }} else {{
                console.log('WebForge bridge not available');
            }}
        }};
    </script>
</body>
</html>"#,
        css = WELCOME_CSS,
        hook = LOAD_EXAMPLE_HOOK,
    )
}

/// Page shown when the source is not valid YAML. `message` is embedded as is.
pub fn yaml_error_page(message: &str) -> String {
    error_page("YAML Error", "YAML Error", message, YAML_ERROR_CSS)
}

/// Page shown when rendering fails unexpectedly.
pub fn fault_page(message: &str) -> String {
    error_page("Error", "Preview Error", message, FAULT_CSS)
}

fn error_page(title: &str, heading: &str, message: &str, css: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{ERROR_BASE_CSS}{css}    </style>
</head>
<body>
    <div class="error-container">
        <div class="error-title">{heading}</div>
        <div class="error-message">{message}</div>
    </div>
</body>
</html>"#
    )
}

const DOCUMENT_CSS: &str = r#"
        body {
            margin: 0;
            padding: 0;
            font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }
        h1 {
            color: #4dabf7;
            font-size: 2.5em;
            font-weight: 600;
            margin: 0;
        }
        p {
            font-size: 1.1em;
            color: #e0e0e0;
        }
        img {
            max-width: 100%;
            height: auto;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.3);
        }
        ul {
            list-style-type: none;
        }
        li {
            color: #e0e0e0;
        }
        .buttons {
            display: flex;
            gap: 1em;
        }
        .buttons a {
            text-decoration: none;
        }
        .buttons button {
            border: none;
            border-radius: 8px;
            font-size: 1em;
            cursor: pointer;
            transition: all 0.2s ease;
        }
        section {
            background: #2d2d2d;
            border-radius: 12px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.2);
            padding: 1em;
        }
        .body-text, .section-text, .div-text {
            color: #e0e0e0;
            font-size: 1.1em;
        }
"#;

const WELCOME_CSS: &str = r#"
        body {
            margin: 0;
            padding: 0;
            font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
            height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .welcome-container { text-align: center; max-width: 600px; padding: 40px; }
        .welcome-title { color: #4dabf7; font-size: 3rem; font-weight: 600; margin-bottom: 20px; }
        .welcome-subtitle { color: #a0a0a0; font-size: 1.2rem; margin-bottom: 30px; }
        .welcome-description { color: #e0e0e0; font-size: 1rem; line-height: 1.8; margin-bottom: 40px; }
        .welcome-features {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            margin-top: 30px;
        }
        .feature-item { background: #2d2d2d; padding: 20px; border-radius: 8px; border-left: 4px solid #4dabf7; }
        .feature-title { color: #4dabf7; font-weight: 600; margin-bottom: 8px; }
        .feature-desc { color: #a0a0a0; font-size: 0.9rem; }
        .load-example-container { margin-top: 40px; text-align: center; }
        .load-example-btn {
            background: linear-gradient(135deg, #4dabf7 0%, #339af0 100%);
            color: #ffffff;
            border: none;
            border-radius: 12px;
            padding: 18px 36px;
            font-size: 1.1rem;
            font-weight: 600;
            cursor: pointer;
            transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
            display: inline-flex;
            align-items: center;
            gap: 12px;
            box-shadow: 0 8px 25px rgba(77, 171, 247, 0.25);
            min-width: 200px;
            justify-content: center;
        }
        .load-example-btn:hover {
            transform: translateY(-3px);
            box-shadow: 0 12px 35px rgba(77, 171, 247, 0.4);
            background: linear-gradient(135deg, #339af0 0%, #228be6 100%);
        }
        .load-example-btn:active { transform: translateY(-1px); }
        .load-example-desc { color: #a0a0a0; font-size: 0.9rem; margin-top: 12px; margin-bottom: 0; }
"#;

const ERROR_BASE_CSS: &str = r#"
        body {
            margin: 0;
            padding: 20px;
            font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }
        .error-container {
            position: fixed;
            bottom: 0;
            left: 0;
            right: 0;
            margin: 0;
            padding: 1.2em;
            background-color: #2d2d2d;
            z-index: 1000;
            box-shadow: 0 -2px 10px rgba(0,0,0,0.2);
        }
        .error-title {
            font-weight: 600;
            margin-bottom: 0.8em;
            font-size: 1.1em;
        }
        .error-message {
            font-family: 'Consolas', monospace;
            white-space: pre-wrap;
            background-color: #363636;
            padding: 1em;
            border-radius: 8px;
            margin-top: 0.5em;
            font-size: 0.95em;
        }
"#;

const YAML_ERROR_CSS: &str = r#"
        .error-container { border-top: 2px solid #404040; }
        .error-title { color: #ff6b6b; }
        .error-message { color: #ff8787; }
"#;

const FAULT_CSS: &str = r#"
        .error-container { border-top: 2px solid #f08c00; }
        .error-title { color: #ffa94d; }
        .error-message { color: #ffc078; }
"#;
