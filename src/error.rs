// Error types for mounting the backdrop and validating its configuration

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("option list `{0}` is empty")]
    EmptyOptions(&'static str),
    #[error("range `{name}` is inverted: min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("`{0}` must not be negative")]
    Negative(&'static str),
    #[error("`{0}` must be greater than zero")]
    NotPositive(&'static str),
    #[error("`{name}` must lie in [0, 1], got {value}")]
    NotAProbability { name: &'static str, value: f64 },
}

#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("canvas element `#{0}` not found")]
    MissingCanvas(String),
    #[error("element `#{0}` is not a canvas")]
    NotACanvas(String),
    #[error("canvas does not provide a 2d context")]
    NoContext,
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BackdropError {
    fn from(value: JsValue) -> Self {
        BackdropError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<BackdropError> for JsValue {
    fn from(err: BackdropError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
