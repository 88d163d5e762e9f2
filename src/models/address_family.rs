use std::fmt;
use std::str::FromStr;

/// Which network attachment type to read an address from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressFamily {
    #[default]
    Public,
    Private,
}

impl AddressFamily {
    /// The value of the attachment's `type` field in the droplets API
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::Public => "public",
            AddressFamily::Private => "private",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(AddressFamily::Public),
            "private" => Ok(AddressFamily::Private),
            other => Err(format!(
                "Invalid network-type '{}': expected 'public' or 'private'",
                other
            )),
        }
    }
}
