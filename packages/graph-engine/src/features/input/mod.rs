//! Graph input stream
//!
//! Reads the shared grammar of both graph representations:
//!
//! ```text
//! N                      vertex count, rest of the line ignored
//! <label 1>              N label lines, taken verbatim
//! ...
//! <label N>
//! s d [w]                edge tuples, whitespace separated, any line layout
//! ...
//! 0 0 [0]                terminator
//! ```
//!
//! Tokens and lines can be mixed on one stream: `next_token` skips whitespace
//! across line breaks, while `next_line` hands back whatever is left of the
//! current line. A token that fails to parse poisons the stream, and every
//! later read then reports exhaustion.

mod stream;

pub use stream::InputStream;
