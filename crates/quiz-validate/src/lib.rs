mod parser;
mod validator;

pub use parser::{
    ParseFailure, ParseOptions, SerializeFailure, SerializeOptions, parse, serialize,
    serialize_to_value,
};
pub use validator::{ValidationReport, validate};
