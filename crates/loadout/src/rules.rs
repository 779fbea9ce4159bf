//! Transform-to-loader-chain selection.

use serde_json::{Value, json};
use tracing::debug;

use crate::constants::{
    BABEL_LOADER, COMPONENT_PLUGINS, COMPONENT_PRESETS, DEPENDENCY_DIR_PATTERN,
    FILE_NAME_TEMPLATE, FIRST_PARTY_EXTENSION, LEGACY_ES2015_PRESET, loaders,
};
use crate::error::{AddonError, Result};
use crate::extend::extend;
use crate::model::{Pattern, Rule, Step, WebpackConfig};
use crate::transform::{Transform, TransformKind};

/// Append the rule for `transform` on files ending in `.<extension>`.
///
/// The input configuration is left as is; the returned configuration carries
/// the new rule at the end of `module.rules` and, for script kinds, the
/// extension registered in `resolve.extensions`.
///
/// # Errors
///
/// `InvalidArgument` if `extension` is empty or does not compile as a pattern,
/// or the transformer name is empty.
///
/// # Example
///
/// ```
/// use loadout::{build_rule, WebpackConfig};
///
/// let config = build_rule(&WebpackConfig::default(), "ts", "ts").unwrap();
/// let rule = &config.module.rules[0];
///
/// assert_eq!(rule.loaders(), vec!["babel-loader", "ts-loader"]);
/// assert_eq!(config.resolve.extensions, vec![".ts".to_string()]);
/// ```
pub fn build_rule(
    config: &WebpackConfig,
    extension: &str,
    transform: impl Into<Transform>,
) -> Result<WebpackConfig> {
    let transform = transform.into();
    if extension.is_empty() {
        return Err(AddonError::invalid_extension(format!("{extension:?}")));
    }
    transform.validate()?;

    let chain = loader_chain(&transform);
    let rule = make_rule(extension, chain)?;

    let mut next = config.clone();
    if transform.transformer.registers_extension() {
        add_default_extension(&mut next, extension);
    }

    debug!(
        extension,
        transformer = %transform.transformer,
        loaders = ?rule.loaders(),
        "appending module rule"
    );
    next.module.rules.push(rule.into());

    Ok(next)
}

/// [`build_rule`] for untyped callers, e.g. values read from a JSON file.
///
/// # Errors
///
/// `InvalidArgument` if `extension` is not a non-empty string, or `transform`
/// is neither a kind string nor a descriptor with a string `transformer`.
pub fn build_rule_from_value(
    config: &WebpackConfig,
    extension: &Value,
    transform: &Value,
) -> Result<WebpackConfig> {
    let extension = match extension {
        Value::String(ext) if !ext.is_empty() => ext.as_str(),
        other => return Err(AddonError::invalid_extension(other)),
    };
    let transform = Transform::from_value(transform)?;
    build_rule(config, extension, transform)
}

/// Steps for `transform`, before loader names are resolved.
fn loader_chain(transform: &Transform) -> Vec<Step> {
    let options = transform.config.clone();

    match &transform.transformer {
        kind @ (TransformKind::Css
        | TransformKind::Less
        | TransformKind::Sass
        | TransformKind::Stylus) => {
            let mut chain = vec![
                Step::new(loaders::STYLE, None),
                Step::new(loaders::CSS, None),
                Step::new(loaders::POSTCSS, None),
            ];
            if *kind != TransformKind::Css {
                chain.push(Step::new(kind.as_str(), options));
            }
            chain
        }
        TransformKind::Babel => vec![Step::new(loaders::BABEL, options)],
        TransformKind::Jsx => vec![Step::new(
            loaders::BABEL,
            Some(component_babel_options(transform)),
        )],
        kind @ (TransformKind::Ts | TransformKind::Tsx) => {
            let babel_options = if *kind == TransformKind::Tsx {
                Some(component_babel_options(transform))
            } else {
                options
            };
            vec![
                Step::new(loaders::BABEL, babel_options),
                Step::new(loaders::TS, None),
            ]
        }
        TransformKind::File => vec![Step::new(
            loaders::FILE,
            Some(json!({ "name": FILE_NAME_TEMPLATE })),
        )],
        kind @ (TransformKind::Flow | TransformKind::Other(_)) => {
            vec![Step::new(kind.as_str(), options)]
        }
    }
}

fn make_rule(extension: &str, chain: Vec<Step>) -> Result<Rule> {
    let steps = chain
        .into_iter()
        .map(|step| {
            let loader = loader_name(&step.loader);
            let options = if loader == BABEL_LOADER {
                step.options.map(adapt_babel_options)
            } else {
                step.options
            };
            Step { loader, options }
        })
        .collect();

    // Dependencies ship pre-built; only first-party `.js` goes through the chain.
    let exclude = if extension == FIRST_PARTY_EXTENSION {
        Some(Pattern::new(DEPENDENCY_DIR_PATTERN)?)
    } else {
        None
    };

    Ok(Rule {
        test: Pattern::for_extension(extension)?,
        steps,
        exclude,
    })
}

fn loader_name(name: &str) -> String {
    if name.ends_with(loaders::SUFFIX) {
        name.to_string()
    } else {
        format!("{name}{}", loaders::SUFFIX)
    }
}

fn add_default_extension(config: &mut WebpackConfig, extension: &str) {
    let extension = format!(".{extension}");
    if !config.resolves(&extension) {
        config.resolve.extensions.push(extension);
    }
}

/// Caller's `config.options` over the React preset defaults.
fn component_babel_options(transform: &Transform) -> Value {
    let defaults = json!({
        "presets": COMPONENT_PRESETS,
        "plugins": COMPONENT_PLUGINS,
    });
    extend(&defaults, &[transform.nested_options()])
}

/// Turn off the ES2015 preset's module transform so the bundler sees the
/// original `import`/`export` statements.
fn adapt_babel_options(options: Value) -> Value {
    let Value::Object(mut map) = options else {
        return options;
    };
    if let Some(Value::Array(presets)) = map.get_mut("presets") {
        for preset in presets.iter_mut() {
            if let Some(adapted) = adapt_preset(preset) {
                *preset = adapted;
            }
        }
    }
    Value::Object(map)
}

fn adapt_preset(preset: &Value) -> Option<Value> {
    let no_modules = json!({ "modules": false });
    match preset {
        Value::String(name) if name == LEGACY_ES2015_PRESET => {
            Some(json!([LEGACY_ES2015_PRESET, no_modules]))
        }
        Value::Array(parts)
            if parts.first().and_then(Value::as_str) == Some(LEGACY_ES2015_PRESET) =>
        {
            let existing = parts.get(1).unwrap_or(&Value::Null);
            Some(json!([
                LEGACY_ES2015_PRESET,
                extend(existing, &[Some(&no_modules)])
            ]))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_suffix_is_added_once() {
        assert_eq!(loader_name("babel"), "babel-loader");
        assert_eq!(loader_name("babel-loader"), "babel-loader");
        assert_eq!(loader_name("vue-loader"), "vue-loader");
    }

    #[test]
    fn adapt_leaves_unrelated_presets() {
        let adapted = adapt_babel_options(json!({
            "presets": ["es2015", ["react", { "pragma": "h" }], "ES2015"],
            "comments": false
        }));
        assert_eq!(
            adapted,
            json!({
                "presets": ["es2015", ["react", { "pragma": "h" }], ["ES2015", { "modules": false }]],
                "comments": false
            })
        );
    }

    #[test]
    fn adapt_overrides_existing_modules_flag() {
        let adapted = adapt_babel_options(json!({
            "presets": [["ES2015", { "modules": "commonjs", "loose": true }]]
        }));
        assert_eq!(
            adapted,
            json!({ "presets": [["ES2015", { "modules": false, "loose": true }]] })
        );
    }

    #[test]
    fn adapt_ignores_options_without_preset_list() {
        assert_eq!(
            adapt_babel_options(json!({ "plugins": ["x"] })),
            json!({ "plugins": ["x"] })
        );
        assert_eq!(
            adapt_babel_options(json!({ "presets": "ES2015" })),
            json!({ "presets": "ES2015" })
        );
        assert_eq!(adapt_babel_options(json!(true)), json!(true));
    }

    #[test]
    fn registering_twice_keeps_one_entry() {
        let mut config = WebpackConfig::default();
        add_default_extension(&mut config, "js");
        add_default_extension(&mut config, "js");
        add_default_extension(&mut config, "jsx");
        assert_eq!(config.resolve.extensions, vec![".js", ".jsx"]);
    }
}
