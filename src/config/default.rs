// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values and the templates written by `bartle init`.

use crate::error::{BartleError, ConfigError, Result};
use handlebars::Handlebars;
use serde::Serialize;

use super::schema::{BartleConfig, Style};

/// Get the default configuration.
pub fn default_config() -> BartleConfig {
    BartleConfig::default()
}

const CONVENTIONAL_TEMPLATE: &str = r#"# Bartle configuration
# Commits follow conventional style: type(scope)!: subject

style = "conventional"

[rules]
# Require a (scope) after the type
scope_required = {{scope_required}}
# Maximum first-line length in characters (0 disables the check)
max_line_length = {{max_line_length}}
# Reject subjects starting with an uppercase letter
lowercase_start = {{lowercase_start}}
# Allowed commit types
types = [{{#each types}}"{{this}}"{{#unless @last}}, {{/unless}}{{/each}}]

[hook]
# Exit non-zero on lint failure so the commit-msg hook blocks the commit
block_on_fail = {{block_on_fail}}
"#;

const JIRA_TEMPLATE: &str = r#"# Bartle configuration
# Commits start with a ticket key: ABC-123: subject

style = "jira"

[rules]
# Maximum first-line length in characters (0 disables the check)
max_line_length = {{max_line_length}}

[hook]
# Exit non-zero on lint failure so the commit-msg hook blocks the commit
block_on_fail = {{block_on_fail}}
"#;

const CUSTOM_TEMPLATE: &str = r#"# Bartle configuration
# Custom rules on top of the conventional grammar: type(scope)!: subject
# Adjust the types and toggles below to suit the project.

style = "custom"

[rules]
scope_required = {{scope_required}}
max_line_length = {{max_line_length}}
lowercase_start = {{lowercase_start}}
types = [{{#each types}}"{{this}}"{{#unless @last}}, {{/unless}}{{/each}}]

[hook]
block_on_fail = {{block_on_fail}}
"#;

/// Values substituted into the init templates.
#[derive(Debug, Serialize)]
struct TemplateData<'a> {
    scope_required: bool,
    max_line_length: i64,
    lowercase_start: bool,
    types: &'a [String],
    block_on_fail: bool,
}

/// Render the configuration file `bartle init` writes for a style.
///
/// Values come from the defaults, so a freshly generated file always
/// parses back to [`default_config`] apart from the style.
pub fn render_init_config(style: &Style) -> Result<String> {
    let template = match style {
        Style::Jira => JIRA_TEMPLATE,
        Style::Custom => CUSTOM_TEMPLATE,
        Style::Conventional | Style::Unrecognized(_) => CONVENTIONAL_TEMPLATE,
    };

    let defaults = default_config();
    let data = TemplateData {
        scope_required: defaults.rules.scope_required,
        max_line_length: defaults.rules.max_line_length,
        lowercase_start: defaults.rules.lowercase_start,
        types: &defaults.rules.types,
        block_on_fail: defaults.hook.block_on_fail,
    };

    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars.render_template(template, &data).map_err(|e| {
        BartleError::Config(ConfigError::RenderFailed {
            message: e.to_string(),
        })
    })
}
