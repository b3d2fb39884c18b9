use std::fmt;

use crate::protocol::ParseError;

/// The request methods this server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl TryFrom<&str> for Method {
    type Error = ParseError;

    fn try_from(str: &str) -> Result<Self, Self::Error> {
        match str {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            other => Err(ParseError::unsupported_method(other)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from() {
        assert_eq!(Method::try_from("GET").unwrap(), Method::Get);
        assert_eq!(Method::try_from("POST").unwrap(), Method::Post);
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn test_method_from_error() {
        for method in ["get", "PUT", "DELETE", ""] {
            let result = Method::try_from(method);
            assert!(matches!(result, Err(ParseError::UnsupportedMethod { method: m }) if m == method));
        }
    }
}
