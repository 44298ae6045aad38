//! HTTP method types.

use derive_more::Display;

/// HTTP method used by the Unsend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - fetch a resource or collection.
    #[display("GET")]
    Get,
    /// POST method - create a resource or trigger an action.
    #[display("POST")]
    Post,
    /// PUT method - create or replace a resource (upsert).
    #[display("PUT")]
    Put,
    /// PATCH method - partially update a resource.
    #[display("PATCH")]
    Patch,
    /// DELETE method - remove a resource.
    #[display("DELETE")]
    Delete,
}

impl Method {
    /// Returns `true` if requests with this method usually carry a body.
    #[must_use]
    pub const fn expects_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

impl TryFrom<http::Method> for Method {
    type Error = crate::Error;

    fn try_from(method: http::Method) -> Result<Self, Self::Error> {
        match method {
            http::Method::GET => Ok(Self::Get),
            http::Method::POST => Ok(Self::Post),
            http::Method::PUT => Ok(Self::Put),
            http::Method::PATCH => Ok(Self::Patch),
            http::Method::DELETE => Ok(Self::Delete),
            other => Err(crate::Error::invalid_request(format!(
                "unsupported HTTP method: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Put.to_string(), "PUT");
        assert_eq!(Method::Patch.to_string(), "PATCH");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn method_expects_body() {
        assert!(Method::Post.expects_body());
        assert!(Method::Put.expects_body());
        assert!(Method::Patch.expects_body());
        assert!(!Method::Get.expects_body());
        assert!(!Method::Delete.expects_body());
    }

    #[test]
    fn method_round_trips_through_http() {
        for method in [
            Method::Get,
            Method::Post,
            Method::Put,
            Method::Patch,
            Method::Delete,
        ] {
            let http_method = http::Method::from(method);
            assert_eq!(Method::try_from(http_method).expect("known method"), method);
        }
    }

    #[test]
    fn method_rejects_unsupported_http_method() {
        let err = Method::try_from(http::Method::OPTIONS).expect_err("unsupported");
        assert_eq!(err.to_string(), "invalid request: unsupported HTTP method: OPTIONS");
    }
}
