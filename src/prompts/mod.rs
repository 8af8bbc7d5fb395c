use crate::domain::OptimizationRequest;
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde_json::{Value, json};
use std::collections::HashMap;

static PROMPT_REGISTRY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("optimize_system", include_str!("optimize_system.hbs"));
    m.insert("optimize_user", include_str!("optimize_user.hbs"));
    m
});

/// Render a prompt by name using Handlebars.
///
/// Usage:
///     render("optimize_user", &json!({"language": "Rust", "code": "fn main() {}"}))
///
/// Code is inserted verbatim; HTML escaping is disabled.
pub fn render(name: &str, ctx: &Value) -> anyhow::Result<String> {
    let template = PROMPT_REGISTRY
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("unknown prompt '{name}'"))?;

    let mut hb = Handlebars::new();
    hb.set_strict_mode(true); // fail if a variable is missing
    hb.register_escape_fn(handlebars::no_escape);

    hb.render_template(template, ctx)
        .map_err(|e| anyhow::anyhow!("rendering prompt '{name}' failed: {e}"))
}

/// System and user messages for one optimization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizePrompt {
    pub system: String,
    pub user: String,
}

pub fn optimize_prompt(request: &OptimizationRequest) -> anyhow::Result<OptimizePrompt> {
    let ctx = json!({
        "language": request.language.to_string(),
        "code": request.code,
    });

    Ok(OptimizePrompt {
        system: render("optimize_system", &ctx)?,
        user: render("optimize_user", &ctx)?,
    })
}
