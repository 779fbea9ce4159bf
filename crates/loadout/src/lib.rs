//! Builders for bundler configuration fragments.
//!
//! A [`WebpackConfig`] is threaded through a sequence of builder calls as an
//! immutable value. Every builder borrows the configuration it is given and
//! returns a new one, so callers can keep earlier stages around:
//!
//! ```
//! use loadout::{build_rule, build_split_chunks, OptimizationOptions, WebpackConfig};
//!
//! let base = WebpackConfig::default();
//! let with_js = build_rule(&base, "js", "babel").unwrap();
//! let with_less = build_rule(&with_js, "less", "less").unwrap();
//! let split = build_split_chunks(
//!     &with_less,
//!     &OptimizationOptions { extract_common: true, extract_vendor: Some("vendor".into()) },
//! );
//!
//! assert!(base.module.rules.is_empty());
//! assert_eq!(split.module.rules.len(), 2);
//! assert_eq!(split.resolve.extensions, vec![".js".to_string()]);
//! ```

pub mod chunks;
pub mod constants;
pub mod error;
pub mod extend;
pub mod model;
pub mod project;
pub mod rules;
pub mod transform;

pub use chunks::{OptimizationOptions, build_split_chunks};
pub use error::{AddonError, Result};
pub use extend::extend;
pub use model::{
    CacheGroup, MinSize, ModuleOptions, ModuleRule, Optimization, Pattern, Resolve, Rule,
    SplitChunksOptions, Step, WebpackConfig,
};
pub use project::{ProjectConfig, apply_project};
pub use rules::{build_rule, build_rule_from_value};
pub use transform::{Transform, TransformKind};
