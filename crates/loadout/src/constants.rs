//! Catalog of recognized transformer kinds, chunk names and loader identifiers.

/// Transformer kind identifiers.
pub mod transforms {
    pub const CSS: &str = "css";
    pub const LESS: &str = "less";
    pub const SASS: &str = "sass";
    pub const STYLUS: &str = "stylus";
    pub const BABEL: &str = "babel";
    pub const JSX: &str = "jsx";
    pub const TS: &str = "ts";
    pub const TSX: &str = "tsx";
    pub const FLOW: &str = "flow";
    pub const FILE: &str = "file";

    pub const ALL: [&str; 10] = [CSS, LESS, SASS, STYLUS, BABEL, JSX, TS, TSX, FLOW, FILE];
}

/// Chunk names understood by the split-chunks policy.
pub mod chunks {
    pub const COMMON: &str = "common";
}

/// Loader identifiers, without the `-loader` suffix.
pub mod loaders {
    pub const STYLE: &str = "style";
    pub const CSS: &str = "css";
    pub const POSTCSS: &str = "postcss";
    pub const BABEL: &str = "babel";
    pub const TS: &str = "ts";
    pub const FILE: &str = "file";

    /// Suffix every resolved loader identifier ends with.
    pub const SUFFIX: &str = "-loader";
}

/// Resolved name of the transpilation loader.
pub const BABEL_LOADER: &str = "babel-loader";

/// Babel preset whose module transform must be turned off.
pub const LEGACY_ES2015_PRESET: &str = "ES2015";

/// Output naming scheme for emitted static files.
pub const FILE_NAME_TEMPLATE: &str = "static/[name]-[hash].[ext]";

/// Exclusion applied to `js` rules so third-party code is left alone.
pub const DEPENDENCY_DIR_PATTERN: &str = "(node_modules)";

/// Extension whose rules receive [`DEPENDENCY_DIR_PATTERN`].
pub const FIRST_PARTY_EXTENSION: &str = "js";

/// Scope used for every split-chunks policy and cache group.
pub const ALL_CHUNKS: &str = "all";

/// Babel presets used for component-syntax sources.
pub const COMPONENT_PRESETS: [&str; 2] = ["es2015", "react"];

/// Babel plugins used for component-syntax sources.
pub const COMPONENT_PLUGINS: [&str; 1] = ["react-hot-loader/babel"];
