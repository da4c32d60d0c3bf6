use std::sync::atomic::{AtomicU64, Ordering};

use crate::infra::env::Environment;

pub(crate) const BUILD_NUMBER: &str = "BUILD_NUMBER";
pub(crate) const JOB_NAME: &str = "JOB_NAME";
pub(crate) const DEFAULT_JOB_NAME: &str = "Flask-App-Deployment";

#[derive(Default)]
pub(crate) struct DeploymentCounter {
    value: AtomicU64,
}

impl DeploymentCounter {
    pub(crate) fn record(&self) -> u64 {
        self.value.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub(crate) fn current(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

pub(crate) struct BuildMetadata {
    build_number: Option<String>,
    job_name: Option<String>,
}

impl BuildMetadata {
    pub(crate) fn resolve(env: &dyn Environment) -> Self {
        Self {
            build_number: env.var(BUILD_NUMBER),
            job_name: env.var(JOB_NAME),
        }
    }

    pub(crate) fn build_number_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.build_number.as_deref().unwrap_or(fallback)
    }

    pub(crate) fn job_name(&self) -> &str {
        self.job_name.as_deref().unwrap_or(DEFAULT_JOB_NAME)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, sync::Arc, thread};

    use super::*;
    use crate::infra::env::from_pairs;

    #[test]
    fn starts_at_zero() {
        let counter = DeploymentCounter::default();

        assert_eq!(counter.current(), 0);
        assert_eq!(counter.record(), 1);
        assert_eq!(counter.record(), 2);
        assert_eq!(counter.current(), 2);
    }

    #[test]
    fn concurrent_records_are_unique() {
        const THREADS: u64 = 8;
        const PER_THREAD: u64 = 1000;

        let counter = Arc::new(DeploymentCounter::default());
        let handles = (0..THREADS)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || (0..PER_THREAD).map(|_| counter.record()).collect::<Vec<_>>())
            })
            .collect::<Vec<_>>();

        let seen = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect::<BTreeSet<_>>();

        assert_eq!(seen, (1..=THREADS * PER_THREAD).collect::<BTreeSet<_>>());
    }

    #[test]
    fn metadata_fallbacks() {
        let meta = BuildMetadata::resolve(&from_pairs([]));
        assert_eq!(meta.build_number_or("N/A"), "N/A");
        assert_eq!(meta.job_name(), "Flask-App-Deployment");

        let meta = BuildMetadata::resolve(&from_pairs([("BUILD_NUMBER", "42"), ("JOB_NAME", "deploy-demo")]));
        assert_eq!(meta.build_number_or("N/A"), "42");
        assert_eq!(meta.job_name(), "deploy-demo");
    }
}
