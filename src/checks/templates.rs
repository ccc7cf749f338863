//! Starter file contents written by `--fix`

use chrono::Datelike;

const MIT_BODY: &str = r#"Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

const GITIGNORE: &str = "# Build artifacts
bin/
dist/
build/
target/
*.out

# Dependencies
node_modules/
__pycache__/
.venv/

# Environment
.env

# Editors
.vscode/
.idea/

# OS
.DS_Store
Thumbs.db
";

const CHANGELOG: &str = "# Changelog

All notable changes to this project will be documented in this file.

## Unreleased
- Initial scaffolding
";

/// MIT license stamped with the current year
#[must_use]
pub fn mit_license() -> String {
    format!(
        "MIT License\n\nCopyright (c) {}\n\n{MIT_BODY}",
        chrono::Local::now().year()
    )
}

/// Starter `.gitignore`
#[must_use]
pub fn gitignore() -> String {
    GITIGNORE.to_string()
}

/// Starter `CHANGELOG.md`
#[must_use]
pub fn changelog() -> String {
    CHANGELOG.to_string()
}
