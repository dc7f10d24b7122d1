//! Runtime lookup as a chain of resolvers.
//!
//! Each [`TargetResolver`] maps an executable name to a path or declines.
//! The launcher pairs its bundled runtimes with the process search path, so
//! [`PairResolver`] only ever needs a primary and a fallback.

use std::path::PathBuf;

pub trait TargetResolver {
    fn resolve(&self, command: &str) -> Option<PathBuf>;
}

#[derive(Clone)]
pub struct PairResolver<R1, R2> {
    primary: R1,
    fallback: R2,
}

impl<R1, R2> PairResolver<R1, R2>
where
    R1: TargetResolver,
    R2: TargetResolver,
{
    pub fn new(primary: R1, fallback: R2) -> Self {
        Self { primary, fallback }
    }
}

impl<R1, R2> TargetResolver for PairResolver<R1, R2>
where
    R1: TargetResolver,
    R2: TargetResolver,
{
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        self.primary
            .resolve(command)
            .or_else(|| self.fallback.resolve(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockResolver(&'static str, Option<PathBuf>);

    impl TargetResolver for MockResolver {
        fn resolve(&self, command: &str) -> Option<PathBuf> {
            if command == self.0 {
                self.1.clone()
            } else {
                None
            }
        }
    }

    #[test]
    fn test_pair_resolver_fallback() {
        let primary = MockResolver("java", Some(PathBuf::from("/managed/bin/java")));
        let fallback = MockResolver("node", Some(PathBuf::from("/usr/bin/node")));

        let resolver = PairResolver::new(primary, fallback);

        assert_eq!(
            resolver.resolve("java"),
            Some(PathBuf::from("/managed/bin/java"))
        );
        assert_eq!(resolver.resolve("node"), Some(PathBuf::from("/usr/bin/node")));
        assert_eq!(resolver.resolve("ruby"), None);
    }

    #[test]
    fn test_pair_resolver_primary_wins_when_both_match() {
        let primary = MockResolver("java", Some(PathBuf::from("/managed/bin/java")));
        let fallback = MockResolver("java", Some(PathBuf::from("java")));

        let resolver = PairResolver::new(primary, fallback);

        assert_eq!(
            resolver.resolve("java"),
            Some(PathBuf::from("/managed/bin/java"))
        );
    }
}
