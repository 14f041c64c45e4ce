//! HTML templates for the web interface.

/// Base HTML template with navigation header.
pub fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - News Sentiment</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header id="main-header">
        <nav>
            <a href="/" class="logo">News Sentiment</a>
            <a href="/">analyze</a>
            <a href="/about">about</a>
            <a href="/contact">contact</a>
        </nav>
    </header>
    <main>
        <h1>{title}</h1>
        {content}
    </main>
    <script src="/static/app.js"></script>
</body>
</html>"#,
        title = title,
        content = content
    )
}

/// Upload form and results table.
pub fn index_page() -> String {
    let content = r#"
        <p>Upload a CSV file with a <code>Content</code> column (and optionally <code>Title</code>).
        English articles are scored with a sentiment lexicon, Malay articles with a transformer model.</p>

        <form id="upload-form">
            <div id="drop-area">
                <p>Drop a CSV file here or click to choose one</p>
                <input type="file" id="file-upload" name="file" accept=".csv,text/csv" hidden>
                <div id="file-info"></div>
            </div>
            <p><button type="submit" id="analyze-btn" disabled>Analyze</button></p>
        </form>
        <div id="status"></div>

        <section id="results-section" class="hidden">
            <div class="summary-cards">
                <div class="card"><div class="count" id="total-entries">0</div>total</div>
                <div class="card positive"><div class="count" id="positive-count">0</div>positive</div>
                <div class="card neutral"><div class="count" id="neutral-count">0</div>neutral</div>
                <div class="card negative"><div class="count" id="negative-count">0</div>negative</div>
                <div class="card unknown"><div class="count" id="unknown-count">0</div>other</div>
            </div>
            <table>
                <thead>
                    <tr><th>#</th><th>Title</th><th>Content</th><th>Language</th><th>Sentiment</th></tr>
                </thead>
                <tbody id="results-body"></tbody>
            </table>
            <p><a href="/api/summary">JSON report of these results</a></p>
        </section>
    "#;
    base_template("Analyze a dataset", content)
}

pub fn about_page() -> String {
    let content = r#"
        <p>Each article's text is cleaned (symbols removed, whitespace collapsed, lowercased),
        its language is detected, and it is labelled with a sentiment.</p>
        <ul>
            <li><strong>English</strong>: VADER compound score, positive at 0.05 and above,
                negative at -0.05 and below, neutral otherwise.</li>
            <li><strong>Malay</strong>: the top label of a pre-trained DeBERTa sentiment model.</li>
            <li><strong>Other languages</strong>: <code>unknown</code>.</li>
        </ul>
        <p>Rows without content are marked <code>Invalid</code>; rows whose scoring failed are
        marked <code>Error</code>. Results are also saved as a CSV file.</p>
    "#;
    base_template("About", content)
}

pub fn contact_page() -> String {
    let content = r#"
        <p>Questions, bug reports and dataset contributions are welcome through the project's
        issue tracker.</p>
    "#;
    base_template("Contact", content)
}
