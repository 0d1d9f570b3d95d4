use std::fmt;

/// The `host:port` a server endpoint is reached at.
///
/// Wrapping the string in a newtype keeps an address from being mixed up
/// with any other string, such as an application name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(addr: &str) -> Self {
        Self::new(addr)
    }
}

impl From<String> for Address {
    fn from(addr: String) -> Self {
        Self(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_given() {
        let addr = Address::from("db0.example.net:27017");
        assert_eq!(addr.to_string(), "db0.example.net:27017");
        assert_eq!(addr.as_str(), "db0.example.net:27017");
    }
}
