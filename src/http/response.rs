use std::fmt;

use crate::http::mime::ContentKind;

/// HTTP status codes known to the server.
///
/// This is the full static catalog: every variant maps to a fixed numeric
/// code and reason phrase, plus a symbolic name (`"not-found"`,
/// `"internal-error"`, ...) used in logs. The server
/// itself only emits `Ok`, `BadRequest`, `NotFound` and
/// `InternalServerError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// 100 Continue
    Continue,
    /// 101 Switching Protocols
    SwitchingProtocols,
    /// 102 Processing
    Processing,
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 202 Accepted
    Accepted,
    /// 203 Non-Authoritative Information
    NonAuthoritative,
    /// 204 No Content
    NoContent,
    /// 205 Reset Content
    ResetContent,
    /// 206 Partial Content
    PartialContent,
    /// 207 Multi-Status
    MultiStatus,
    /// 205 Already Reported
    ///
    /// Registered as 208 by RFC 5842; served as 205 for wire compatibility
    /// with existing clients.
    AlreadyReported,
    /// 205 IM Used
    ///
    /// Registered as 226 by RFC 3229; served as 205 for the same reason as
    /// `AlreadyReported`.
    ImUsed,
    /// 300 Multiple Choices
    MultipleChoices,
    /// 301 Moved Permanently
    MovedPermanently,
    /// 302 Found
    Found,
    /// 303 See Other
    SeeOther,
    /// 304 Not Modified
    NotModified,
    /// 305 Use Proxy
    UseProxy,
    /// 307 Temporary Redirect
    TemporaryRedirect,
    /// 308 Permanent Redirect
    PermanentRedirect,
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 402 Payment Required
    PaymentRequired,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 406 Not Acceptable
    NotAcceptable,
    /// 407 Proxy Authentication Required
    ProxyAuthRequired,
    /// 408 Request Timeout
    RequestTimeout,
    /// 409 Conflict
    Conflict,
    /// 410 Gone
    Gone,
    /// 411 Length Required
    LengthRequired,
    /// 412 Precondition Failed
    PreconditionFailed,
    /// 413 Payload Too Large
    PayloadTooLarge,
    /// 414 Request-URI Too Long
    UriTooLong,
    /// 415 Unsupported Media Type
    UnsupportedMediaType,
    /// 416 Requested Range Not Satisfiable
    RangeNotSatisfiable,
    /// 417 Expectation Failed
    ExpectationFailed,
    /// 418 I'm a teapot
    ImATeapot,
    /// 421 Misdirected Request
    MisdirectedRequest,
    /// 422 Unprocessable Entity
    UnprocessableEntity,
    /// 423 Locked
    Locked,
    /// 424 Failed Dependency
    FailedDependency,
    /// 426 Upgrade Required
    UpgradeRequired,
    /// 428 Precondition Required
    PreconditionRequired,
    /// 429 Too Many Requests
    TooManyRequests,
    /// 431 Request Header Fields Too Large
    HeaderFieldsTooLarge,
    /// 444 Connection Closed Without Response
    ConnectionClosed,
    /// 451 Unavailable For Legal Reasons
    UnavailableForLegalReasons,
    /// 499 Client Closed Request
    ClientClosedRequest,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
    /// 502 Bad Gateway
    BadGateway,
    /// 503 Service Unavailable
    ServiceUnavailable,
    /// 504 Gateway Timeout
    GatewayTimeout,
    /// 505 HTTP Version Not Supported
    HttpVersionNotSupported,
    /// 506 Variant Also Negotiates
    VariantAlsoNegotiates,
    /// 507 Insufficient Storage
    InsufficientStorage,
    /// 508 Loop Detected
    LoopDetected,
    /// 510 Not Extended
    NotExtended,
    /// 511 Network Authentication Required
    NetworkAuthRequired,
    /// 599 Network Connect Timeout Error
    NetworkConnectTimeout,
}

impl StatusCode {
    pub const ALL: [StatusCode; 63] = [
        StatusCode::Continue,
        StatusCode::SwitchingProtocols,
        StatusCode::Processing,
        StatusCode::Ok,
        StatusCode::Created,
        StatusCode::Accepted,
        StatusCode::NonAuthoritative,
        StatusCode::NoContent,
        StatusCode::ResetContent,
        StatusCode::PartialContent,
        StatusCode::MultiStatus,
        StatusCode::AlreadyReported,
        StatusCode::ImUsed,
        StatusCode::MultipleChoices,
        StatusCode::MovedPermanently,
        StatusCode::Found,
        StatusCode::SeeOther,
        StatusCode::NotModified,
        StatusCode::UseProxy,
        StatusCode::TemporaryRedirect,
        StatusCode::PermanentRedirect,
        StatusCode::BadRequest,
        StatusCode::Unauthorized,
        StatusCode::PaymentRequired,
        StatusCode::Forbidden,
        StatusCode::NotFound,
        StatusCode::MethodNotAllowed,
        StatusCode::NotAcceptable,
        StatusCode::ProxyAuthRequired,
        StatusCode::RequestTimeout,
        StatusCode::Conflict,
        StatusCode::Gone,
        StatusCode::LengthRequired,
        StatusCode::PreconditionFailed,
        StatusCode::PayloadTooLarge,
        StatusCode::UriTooLong,
        StatusCode::UnsupportedMediaType,
        StatusCode::RangeNotSatisfiable,
        StatusCode::ExpectationFailed,
        StatusCode::ImATeapot,
        StatusCode::MisdirectedRequest,
        StatusCode::UnprocessableEntity,
        StatusCode::Locked,
        StatusCode::FailedDependency,
        StatusCode::UpgradeRequired,
        StatusCode::PreconditionRequired,
        StatusCode::TooManyRequests,
        StatusCode::HeaderFieldsTooLarge,
        StatusCode::ConnectionClosed,
        StatusCode::UnavailableForLegalReasons,
        StatusCode::ClientClosedRequest,
        StatusCode::InternalServerError,
        StatusCode::NotImplemented,
        StatusCode::BadGateway,
        StatusCode::ServiceUnavailable,
        StatusCode::GatewayTimeout,
        StatusCode::HttpVersionNotSupported,
        StatusCode::VariantAlsoNegotiates,
        StatusCode::InsufficientStorage,
        StatusCode::LoopDetected,
        StatusCode::NotExtended,
        StatusCode::NetworkAuthRequired,
        StatusCode::NetworkConnectTimeout,
    ];

    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use webserv::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Continue => 100,
            StatusCode::SwitchingProtocols => 101,
            StatusCode::Processing => 102,
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::Accepted => 202,
            StatusCode::NonAuthoritative => 203,
            StatusCode::NoContent => 204,
            StatusCode::ResetContent => 205,
            StatusCode::PartialContent => 206,
            StatusCode::MultiStatus => 207,
            StatusCode::AlreadyReported => 205,
            StatusCode::ImUsed => 205,
            StatusCode::MultipleChoices => 300,
            StatusCode::MovedPermanently => 301,
            StatusCode::Found => 302,
            StatusCode::SeeOther => 303,
            StatusCode::NotModified => 304,
            StatusCode::UseProxy => 305,
            StatusCode::TemporaryRedirect => 307,
            StatusCode::PermanentRedirect => 308,
            StatusCode::BadRequest => 400,
            StatusCode::Unauthorized => 401,
            StatusCode::PaymentRequired => 402,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::NotAcceptable => 406,
            StatusCode::ProxyAuthRequired => 407,
            StatusCode::RequestTimeout => 408,
            StatusCode::Conflict => 409,
            StatusCode::Gone => 410,
            StatusCode::LengthRequired => 411,
            StatusCode::PreconditionFailed => 412,
            StatusCode::PayloadTooLarge => 413,
            StatusCode::UriTooLong => 414,
            StatusCode::UnsupportedMediaType => 415,
            StatusCode::RangeNotSatisfiable => 416,
            StatusCode::ExpectationFailed => 417,
            StatusCode::ImATeapot => 418,
            StatusCode::MisdirectedRequest => 421,
            StatusCode::UnprocessableEntity => 422,
            StatusCode::Locked => 423,
            StatusCode::FailedDependency => 424,
            StatusCode::UpgradeRequired => 426,
            StatusCode::PreconditionRequired => 428,
            StatusCode::TooManyRequests => 429,
            StatusCode::HeaderFieldsTooLarge => 431,
            StatusCode::ConnectionClosed => 444,
            StatusCode::UnavailableForLegalReasons => 451,
            StatusCode::ClientClosedRequest => 499,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
            StatusCode::BadGateway => 502,
            StatusCode::ServiceUnavailable => 503,
            StatusCode::GatewayTimeout => 504,
            StatusCode::HttpVersionNotSupported => 505,
            StatusCode::VariantAlsoNegotiates => 506,
            StatusCode::InsufficientStorage => 507,
            StatusCode::LoopDetected => 508,
            StatusCode::NotExtended => 510,
            StatusCode::NetworkAuthRequired => 511,
            StatusCode::NetworkConnectTimeout => 599,
        }
    }

    /// Returns the reason phrase sent after the numeric code.
    ///
    /// # Example
    ///
    /// ```
    /// # use webserv::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Continue => "Continue",
            StatusCode::SwitchingProtocols => "Switching Protocols",
            StatusCode::Processing => "Processing",
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::Accepted => "Accepted",
            StatusCode::NonAuthoritative => "Non-Authoritative Information",
            StatusCode::NoContent => "No Content",
            StatusCode::ResetContent => "Reset Content",
            StatusCode::PartialContent => "Partial Content",
            StatusCode::MultiStatus => "Multi-Status",
            StatusCode::AlreadyReported => "Already Reported",
            StatusCode::ImUsed => "IM Used",
            StatusCode::MultipleChoices => "Multiple Choices",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::Found => "Found",
            StatusCode::SeeOther => "See Other",
            StatusCode::NotModified => "Not Modified",
            StatusCode::UseProxy => "Use Proxy",
            StatusCode::TemporaryRedirect => "Temporary Redirect",
            StatusCode::PermanentRedirect => "Permanent Redirect",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::PaymentRequired => "Payment Required",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::NotAcceptable => "Not Acceptable",
            StatusCode::ProxyAuthRequired => "Proxy Authentication Required",
            StatusCode::RequestTimeout => "Request Timeout",
            StatusCode::Conflict => "Conflict",
            StatusCode::Gone => "Gone",
            StatusCode::LengthRequired => "Length Required",
            StatusCode::PreconditionFailed => "Precondition Failed",
            StatusCode::PayloadTooLarge => "Payload Too Large",
            StatusCode::UriTooLong => "Request-URI Too Long",
            StatusCode::UnsupportedMediaType => "Unsupported Media Type",
            StatusCode::RangeNotSatisfiable => "Requested Range Not Satisfiable",
            StatusCode::ExpectationFailed => "Expectation Failed",
            StatusCode::ImATeapot => "I'm a teapot",
            StatusCode::MisdirectedRequest => "Misdirected Request",
            StatusCode::UnprocessableEntity => "Unprocessable Entity",
            StatusCode::Locked => "Locked",
            StatusCode::FailedDependency => "Failed Dependency",
            StatusCode::UpgradeRequired => "Upgrade Required",
            StatusCode::PreconditionRequired => "Precondition Required",
            StatusCode::TooManyRequests => "Too Many Requests",
            StatusCode::HeaderFieldsTooLarge => "Request Header Fields Too Large",
            StatusCode::ConnectionClosed => "Connection Closed Without Response",
            StatusCode::UnavailableForLegalReasons => "Unavailable For Legal Reasons",
            StatusCode::ClientClosedRequest => "Client Closed Request",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
            StatusCode::BadGateway => "Bad Gateway",
            StatusCode::ServiceUnavailable => "Service Unavailable",
            StatusCode::GatewayTimeout => "Gateway Timeout",
            StatusCode::HttpVersionNotSupported => "HTTP Version Not Supported",
            StatusCode::VariantAlsoNegotiates => "Variant Also Negotiates",
            StatusCode::InsufficientStorage => "Insufficient Storage",
            StatusCode::LoopDetected => "Loop Detected",
            StatusCode::NotExtended => "Not Extended",
            StatusCode::NetworkAuthRequired => "Network Authentication Required",
            StatusCode::NetworkConnectTimeout => "Network Connect Timeout Error",
        }
    }

    /// Symbolic name of the status, e.g. `"bad-request"`.
    pub fn symbol(&self) -> &'static str {
        match self {
            StatusCode::Continue => "continue",
            StatusCode::SwitchingProtocols => "switching-protocols",
            StatusCode::Processing => "processing",
            StatusCode::Ok => "ok",
            StatusCode::Created => "created",
            StatusCode::Accepted => "accepted",
            StatusCode::NonAuthoritative => "non-authoritative",
            StatusCode::NoContent => "no-content",
            StatusCode::ResetContent => "reset-content",
            StatusCode::PartialContent => "partial-content",
            StatusCode::MultiStatus => "multi-status",
            StatusCode::AlreadyReported => "already-reported",
            StatusCode::ImUsed => "im-used",
            StatusCode::MultipleChoices => "multiple-choices",
            StatusCode::MovedPermanently => "permanent",
            StatusCode::Found => "found",
            StatusCode::SeeOther => "see-other",
            StatusCode::NotModified => "not_modified",
            StatusCode::UseProxy => "use-proxy",
            StatusCode::TemporaryRedirect => "temporary-redirect",
            StatusCode::PermanentRedirect => "permanant-redirect",
            StatusCode::BadRequest => "bad-request",
            StatusCode::Unauthorized => "unauthorised",
            StatusCode::PaymentRequired => "payment",
            StatusCode::Forbidden => "forbidden",
            StatusCode::NotFound => "not-found",
            StatusCode::MethodNotAllowed => "method-not-allowed",
            StatusCode::NotAcceptable => "not-acceptable",
            StatusCode::ProxyAuthRequired => "proxy-auth-needed",
            StatusCode::RequestTimeout => "timeout",
            StatusCode::Conflict => "conflict",
            StatusCode::Gone => "gone",
            StatusCode::LengthRequired => "length-required",
            StatusCode::PreconditionFailed => "precondition-failed",
            StatusCode::PayloadTooLarge => "payload-too-large",
            StatusCode::UriTooLong => "request-uri-too-long",
            StatusCode::UnsupportedMediaType => "unsupported-media-type",
            StatusCode::RangeNotSatisfiable => "range-not-satisfiable",
            StatusCode::ExpectationFailed => "expectation-failed",
            StatusCode::ImATeapot => "teapot",
            StatusCode::MisdirectedRequest => "misdirected",
            StatusCode::UnprocessableEntity => "unprocessable",
            StatusCode::Locked => "locked",
            StatusCode::FailedDependency => "failed-dependency",
            StatusCode::UpgradeRequired => "upgrade-required",
            StatusCode::PreconditionRequired => "precondition-required",
            StatusCode::TooManyRequests => "too-many-requests",
            StatusCode::HeaderFieldsTooLarge => "fields-too-large",
            StatusCode::ConnectionClosed => "connection-closed",
            StatusCode::UnavailableForLegalReasons => "censorship",
            StatusCode::ClientClosedRequest => "client-closed",
            StatusCode::InternalServerError => "internal-error",
            StatusCode::NotImplemented => "not-implemented",
            StatusCode::BadGateway => "bad-gateway",
            StatusCode::ServiceUnavailable => "service-unavailable",
            StatusCode::GatewayTimeout => "gateway-timeout",
            StatusCode::HttpVersionNotSupported => "unsupported",
            StatusCode::VariantAlsoNegotiates => "variant-negotiates",
            StatusCode::InsufficientStorage => "storage",
            StatusCode::LoopDetected => "loop",
            StatusCode::NotExtended => "not-extended",
            StatusCode::NetworkAuthRequired => "network-authorisation-required",
            StatusCode::NetworkConnectTimeout => "network-timeout",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.symbol() == symbol)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.as_u16())
    }
}

impl fmt::Display for StatusCode {
    /// Formats as `"<code> <reason>"`, the tail of the status line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// A complete response ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_kind: ContentKind,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: StatusCode, content_kind: ContentKind, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_kind,
            body: body.into(),
        }
    }

    /// 200 OK carrying file contents of the given kind.
    pub fn ok(content_kind: ContentKind, body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::Ok, content_kind, body)
    }

    pub fn bad_request() -> Self {
        Self::new(StatusCode::BadRequest, ContentKind::Text, "Bad request")
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound, ContentKind::Text, "File not found")
    }

    /// Generic 500. Never carries error detail.
    pub fn internal_error() -> Self {
        Self::new(StatusCode::InternalServerError, ContentKind::Text, "Internal error")
    }
}
