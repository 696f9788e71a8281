mod invoker;
mod language;
mod model;
mod prompt;
mod resolver;
mod slang;
mod sse;

pub use invoker::{Source, Translated, Translator};
pub use language::{
    SUPPORTED_LANGUAGES, display_name, format_languages, is_supported, parse_code,
    print_languages, validate_language,
};
pub use model::ModelClient;
pub use resolver::{ResolvedLanguages, resolve};
pub use slang::{BUILTIN_SLANG, Direction, SlangBook};
