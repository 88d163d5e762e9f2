use std::collections::BTreeSet;
use std::fmt;

/// Tag filter applied to the droplet inventory.
///
/// `Single` matches droplets carrying that tag; `Any` matches droplets
/// carrying at least one of the tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagPredicate {
    Single(String),
    Any(BTreeSet<String>),
}

impl TagPredicate {
    /// Build an `Any` predicate from a comma or newline separated list.
    /// Blank entries are dropped; returns `None` if nothing remains.
    pub fn parse_list(raw: &str) -> Option<Self> {
        let tags: BTreeSet<String> = raw
            .split(|c: char| c == ',' || c == '\n')
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect();
        if tags.is_empty() {
            None
        } else {
            Some(TagPredicate::Any(tags))
        }
    }

    pub fn matches<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        match self {
            TagPredicate::Single(tag) => tags.iter().any(|t| t.as_ref() == tag),
            TagPredicate::Any(set) => tags.iter().any(|t| set.contains(t.as_ref())),
        }
    }
}

impl fmt::Display for TagPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagPredicate::Single(tag) => write!(f, "{:?}", tag),
            TagPredicate::Any(set) => {
                let quoted: Vec<String> = set.iter().map(|t| format!("{:?}", t)).collect();
                write!(f, "[{}]", quoted.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tag_requires_membership() {
        let p = TagPredicate::Single("web".into());
        assert!(p.matches(&["db", "web"]));
        assert!(!p.matches(&["db"]));
        assert!(!p.matches::<&str>(&[]));
    }

    #[test]
    fn any_is_logical_or() {
        let p = TagPredicate::parse_list("web, db").unwrap();
        assert!(p.matches(&["db"]));
        assert!(p.matches(&["web", "cache"]));
        assert!(!p.matches(&["cache"]));
    }

    #[test]
    fn parse_list_splits_on_commas_and_newlines() {
        let p = TagPredicate::parse_list("web\n db ,,\ncache\n").unwrap();
        let expected: BTreeSet<String> = ["cache", "db", "web"].iter().map(|s| s.to_string()).collect();
        assert_eq!(p, TagPredicate::Any(expected));
    }

    #[test]
    fn parse_list_of_blanks_is_none() {
        assert_eq!(TagPredicate::parse_list(" , \n "), None);
    }

    #[test]
    fn display_quotes_tags() {
        assert_eq!(TagPredicate::Single("web".into()).to_string(), "\"web\"");
        assert_eq!(TagPredicate::parse_list("web,db").unwrap().to_string(), "[\"db\", \"web\"]");
    }
}
