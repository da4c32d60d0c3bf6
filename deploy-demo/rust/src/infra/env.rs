use std::{collections::HashMap, env};

pub(crate) trait Environment: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;

    fn var_or(&self, key: &str, fallback: &str) -> String {
        self.var(key).unwrap_or_else(|| fallback.to_owned())
    }
}

pub(crate) struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[cfg(test)]
pub(crate) fn from_pairs<const N: usize>(pairs: [(&str, &str); N]) -> HashMap<String, String> {
    pairs.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_when_unset() {
        let env = from_pairs([("JOB_NAME", "deploy-demo-main")]);

        assert_eq!(env.var_or("JOB_NAME", "Flask-App-Deployment"), "deploy-demo-main");
        assert_eq!(env.var_or("BUILD_NUMBER", "N/A"), "N/A");
    }

    #[test]
    fn empty_value_is_not_unset() {
        let env = from_pairs([("BUILD_NUMBER", "")]);

        assert_eq!(env.var_or("BUILD_NUMBER", "N/A"), "");
    }
}
