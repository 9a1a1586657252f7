//! Call execution: transport seam, interceptors, envelope decoding and
//! result resolution.

pub mod envelope;
pub mod interceptor;
pub mod resolver;
pub mod timeout;
pub mod transport;

pub use envelope::{RawPayload, decode_envelope};
pub use interceptor::{HttpInterceptor, HttpRequestContext, LoggingInterceptor};
pub use resolver::{Outcome, resolve_outcome};
pub use timeout::long_poll_timeout;
pub use transport::{HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport};
