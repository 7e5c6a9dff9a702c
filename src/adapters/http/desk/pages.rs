//! Server-rendered pages for the writing desk.
//!
//! One form page, one results page, one error page, all built from plain
//! string templates. Every piece of dynamic content is HTML-escaped before
//! interpolation.

use crate::application::RunTaskResult;
use crate::domain::agents::TranscriptEntry;

/// Page heading, shared by every view.
const PAGE_TITLE: &str = "Agentic Pattern Demo: Reflection Pattern";

/// Example task shown as the input placeholder.
const EXAMPLE_TASK: &str = "Write a concise, engaging article about AI Agentic Workflows. Make sure the article is within 350 words.";

/// The landing page: just the task form.
pub fn form_page() -> String {
    page_shell(&task_form(""))
}

/// A completed run: the form still holding the task, an echo of what was
/// asked, and the three result sections.
pub fn results_page(task: &str, result: &RunTaskResult) -> String {
    let mut body = task_form(task);
    body.push_str(&format!(
        "<p class=\"task-echo\">Your task: {}</p>",
        html_escape(task)
    ));
    body.push_str(&section("Generated Content", &paragraphs(&result.draft)));
    body.push_str(&section(
        "Critic",
        &transcript_list(&result.review.transcript),
    ));
    body.push_str(&section(
        "Here is the completion of the task",
        &paragraphs(&result.review.summary),
    ));
    page_shell(&body)
}

/// A failed run: the form plus what went wrong.
pub fn error_page(task: &str, message: &str) -> String {
    let mut body = task_form(task);
    body.push_str(&format!(
        "<section class=\"error\"><h2>Workflow failed</h2>{}</section>",
        paragraphs(message)
    ));
    page_shell(&body)
}

/// Wraps page content in a complete HTML document.
fn page_shell(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <main class="desk">
        <h1>{title}</h1>
{body}
    </main>
</body>
</html>"#,
        title = html_escape(PAGE_TITLE),
        css = PAGE_CSS,
        body = body
    )
}

fn task_form(task: &str) -> String {
    format!(
        r#"<form method="post" action="/">
    <label for="task">Enter your task:</label>
    <textarea id="task" name="task" rows="4" placeholder="{placeholder}">{task}</textarea>
    <button type="submit">Run Workflow</button>
</form>"#,
        placeholder = html_escape(EXAMPLE_TASK),
        task = html_escape(task)
    )
}

fn section(heading: &str, inner: &str) -> String {
    format!(
        "<section><h2>{}</h2>{}</section>",
        html_escape(heading),
        inner
    )
}

fn transcript_list(entries: &[TranscriptEntry]) -> String {
    let mut items = String::new();
    for entry in entries {
        items.push_str(&format!(
            "<article class=\"message\"><h3>{}</h3>{}</article>",
            html_escape(&entry.speaker),
            paragraphs(&entry.content)
        ));
    }
    items
}

/// Escapes text and keeps its line breaks.
fn paragraphs(text: &str) -> String {
    format!("<p>{}</p>", html_escape(text).replace('\n', "<br>"))
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Default CSS for the desk pages.
const PAGE_CSS: &str = r#"
:root {
    --primary-color: #2563eb;
    --text-color: #1f2937;
    --muted-color: #6b7280;
    --border-color: #e5e7eb;
    --bg-color: #ffffff;
    --code-bg: #f3f4f6;
    --error-color: #b91c1c;
}

* {
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    font-size: 16px;
    line-height: 1.6;
    color: var(--text-color);
    background-color: var(--bg-color);
    margin: 0 auto;
    padding: 2rem;
    max-width: 900px;
}

h1 {
    font-size: 2rem;
    border-bottom: 2px solid var(--primary-color);
    padding-bottom: 0.5rem;
}

h2 {
    font-size: 1.5rem;
    border-bottom: 1px solid var(--border-color);
    padding-bottom: 0.25rem;
}

form {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    margin: 1.5rem 0;
}

textarea {
    font: inherit;
    padding: 0.5rem;
    border: 1px solid var(--border-color);
    border-radius: 4px;
}

button {
    align-self: flex-start;
    font: inherit;
    padding: 0.5rem 1.25rem;
    color: #ffffff;
    background-color: var(--primary-color);
    border: none;
    border-radius: 4px;
    cursor: pointer;
}

.task-echo {
    color: var(--muted-color);
}

.message {
    margin: 1em 0;
    padding: 0.5em 1em;
    border-left: 4px solid var(--primary-color);
    background-color: var(--code-bg);
}

.message h3 {
    margin: 0 0 0.25em;
    font-size: 1rem;
    color: var(--muted-color);
}

.error h2 {
    color: var(--error-color);
}
"#;
