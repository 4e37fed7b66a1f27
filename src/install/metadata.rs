use super::InstallRoot;
use crate::error::{AttachError, Result};
use crate::platform::Layout;
use regex::Regex;
use std::fs;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*version\s*=\s*([0-9]+\.[0-9]+\.[0-9]+)").expect("valid version regex")
});

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*id\s*=\s*(\S+)").expect("valid id regex"));

/// Identity of the installed product, read from `.eclipseproduct`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInfo {
    pub version: String,
    pub id: String,
}

/// `source` is only used for error messages.
pub fn parse_product_info(content: &str, source: &str) -> Result<ProductInfo> {
    let version = VERSION_RE
        .captures(content)
        .and_then(|c| c.get(1))
        .ok_or_else(|| AttachError::missing_field("version", source))?
        .as_str()
        .to_string();

    let id = ID_RE
        .captures(content)
        .and_then(|c| c.get(1))
        .ok_or_else(|| AttachError::missing_field("id", source))?
        .as_str()
        .to_string();

    Ok(ProductInfo { version, id })
}

pub fn read_product_info(root: &InstallRoot, layout: &Layout) -> Result<ProductInfo> {
    let file = root.product_file(layout);
    if !file.is_file() {
        return Err(AttachError::missing_artifact(file.display().to_string()));
    }

    let content = fs::read_to_string(&file)?;
    parse_product_info(&content, &file.display().to_string())
}
