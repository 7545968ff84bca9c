//! Value-string tokenization per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization),
//! reduced to the token set CSS value grammars use.

mod token;
#[allow(clippy::module_inception)]
mod tokenizer;

pub use token::Token;
pub use tokenizer::Tokenizer;
