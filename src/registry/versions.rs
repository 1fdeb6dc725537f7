// Version inference - Which protocol versions may negotiate a suite
//
// This is a naming-convention heuristic, not a per-suite capability table.
// EXPORT suites end up listed under TLS 1.3 and CBC-SHA suites under every
// version; both are known imprecisions of the rule set.

use super::policy::{ClassificationPolicy, VersionRule};

pub struct VersionInferencer {
    rules: Vec<VersionRule>,
    default_versions: Vec<String>,
}

impl VersionInferencer {
    pub fn new(policy: &ClassificationPolicy) -> Self {
        Self {
            rules: policy.version_rules.clone(),
            default_versions: policy.default_versions.clone(),
        }
    }

    /// Rules are evaluated in table order; the first match wins and the
    /// default set applies when none does.
    pub fn infer(&self, description: &str, value: &str) -> Vec<String> {
        self.rules
            .iter()
            .find(|rule| rule.trigger.matches(description, value))
            .map(|rule| rule.versions.clone())
            .unwrap_or_else(|| self.default_versions.clone())
    }
}

impl Default for VersionInferencer {
    fn default() -> Self {
        Self::new(&ClassificationPolicy::default())
    }
}
