//! Parameter encoding: field flattening and request building.

mod flatten;
mod request;
pub mod skip;

pub use flatten::{FieldSpec, FieldValue, FlatFields, FormSchema, OMIT, flatten};
pub use request::{
    FilePart, JSON_CONTENT_TYPE, MULTIPART_CONTENT_TYPE, MethodParams, MultipartBody, RequestArgs,
    RequestBody, build_json_request_args, build_multipart_request_args, build_request_args,
};
