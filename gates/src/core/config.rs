//! Evaluation policy for composite predicates.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How `Xor`/`Xnor` obtain the reference value from the first predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Invoke the first predicate once and use its result both as the
    /// reference and as the first compared value.
    #[default]
    Reuse,
    /// Invoke the first predicate for the reference, then again as the first
    /// compared value. Two calls per evaluation.
    Reevaluate,
}

/// Gate evaluation settings (TOML).
///
/// Missing fields take their defaults, so an empty document is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Reference value policy for `Xor` and `Xnor`. Ignored by other gates.
    pub reference: ReferencePolicy,
}

impl GateConfig {
    /// Config with the given reference policy.
    pub fn with_reference(reference: ReferencePolicy) -> Self {
        Self { reference }
    }

    pub fn validate(&self) -> Result<()> {
        // Every combination of fields is currently meaningful.
        Ok(())
    }

    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: GateConfig = toml::from_str(contents).context("parse gate config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        self.validate()?;
        let mut buf = toml::to_string_pretty(self).context("serialize gate config")?;
        if !buf.ends_with('\n') {
            buf.push('\n');
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let cfg = GateConfig::from_toml_str("").expect("parse");
        assert_eq!(cfg, GateConfig::default());
        assert_eq!(cfg.reference, ReferencePolicy::Reuse);
    }

    #[test]
    fn parses_reevaluate_policy() {
        let cfg = GateConfig::from_toml_str("reference = \"reevaluate\"\n").expect("parse");
        assert_eq!(cfg.reference, ReferencePolicy::Reevaluate);
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = GateConfig::from_toml_str("reference = \"sometimes\"\n").expect_err("invalid");
        assert!(format!("{:#}", err).contains("parse gate config"));
    }

    #[test]
    fn serialized_config_parses_back() {
        let cfg = GateConfig::with_reference(ReferencePolicy::Reevaluate);
        let text = cfg.to_toml_string().expect("serialize");
        assert!(text.contains("reevaluate"));
        assert_eq!(GateConfig::from_toml_str(&text).expect("parse"), cfg);
    }
}
