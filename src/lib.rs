pub mod constants;
pub mod site;

mod allowed_headers;
mod allowed_methods;
mod allowed_origins;
mod context;
mod headers;
mod options;
mod policy;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use allowed_origins::AllowedOrigins;
pub use context::RequestContext;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use policy::CorsPolicy;
pub use result::CorsDecision;
