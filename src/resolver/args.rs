use crate::common::{ResolveError, Result};

/// Command-line tokens forwarded by the host build process.
///
/// Flags are looked up positionally: `-name value` pairs, first match wins.
#[derive(Debug, Clone, Default)]
pub struct ArgumentResolver {
    args: Vec<String>,
}

impl ArgumentResolver {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgumentResolver {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Find the first `-<name>` token and return the token after it.
    ///
    /// Returns `Ok(None)` when the flag is absent and
    /// [`ResolveError::MissingValue`] when it is the last token.
    pub fn lookup(&self, name: &str) -> Result<Option<&str>> {
        let flag = format!("-{}", name);

        let Some(index) = self.args.iter().position(|arg| *arg == flag) else {
            return Ok(None);
        };

        match self.args.get(index + 1) {
            Some(value) => Ok(Some(value.as_str())),
            None => Err(ResolveError::MissingValue {
                flag: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_following_token() {
        let resolver = ArgumentResolver::new(["-batchmode", "-output", "dist", "-quit"]);
        assert_eq!(resolver.lookup("output").unwrap(), Some("dist"));
        assert_eq!(resolver.lookup("name").unwrap(), None);
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let resolver = ArgumentResolver::new(["-name", "First", "-name", "Second"]);
        assert_eq!(resolver.lookup("name").unwrap(), Some("First"));
    }

    #[test]
    fn test_lookup_requires_exact_token() {
        let resolver = ArgumentResolver::new(["--name", "A", "-Name", "B", "name", "C"]);
        assert_eq!(resolver.lookup("name").unwrap(), None);
    }

    #[test]
    fn test_lookup_dangling_flag() {
        let resolver = ArgumentResolver::new(["-quit", "-output"]);
        match resolver.lookup("output") {
            Err(ResolveError::MissingValue { flag }) => assert_eq!(flag, "output"),
            other => panic!("expected MissingValue, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_empty_args() {
        let resolver = ArgumentResolver::default();
        assert!(resolver.args().is_empty());
        assert_eq!(resolver.lookup("buildTarget").unwrap(), None);
    }
}
