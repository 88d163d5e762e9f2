use std::fmt;
use std::str::FromStr;

/// Which `networks` list of a droplet to search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IpVersion {
    #[default]
    V4,
    V6,
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => f.write_str("IPv4"),
            IpVersion::V6 => f.write_str("IPv6"),
        }
    }
}

impl FromStr for IpVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v4" | "4" | "ipv4" => Ok(IpVersion::V4),
            "v6" | "6" | "ipv6" => Ok(IpVersion::V6),
            other => Err(format!("Invalid ip-version '{}': expected 'v4' or 'v6'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_spellings() {
        for s in ["v4", "4", "IPv4"] {
            assert_eq!(s.parse::<IpVersion>(), Ok(IpVersion::V4));
        }
        for s in ["v6", "6", "ipv6"] {
            assert_eq!(s.parse::<IpVersion>(), Ok(IpVersion::V6));
        }
        assert!("v5".parse::<IpVersion>().is_err());
    }
}
