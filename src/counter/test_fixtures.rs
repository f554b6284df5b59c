//! Shared test fixtures for counter tests.
//!
//! Provides the `CommentSyntax` configurations used by the classifier and
//! source tests.

use crate::counter::CommentSyntax;

/// C syntax: `//` plus `/* */`, the command-line default.
pub fn c_syntax() -> CommentSyntax {
    CommentSyntax::default()
}

/// Shell/Python style `#` comments with multi-line detection disabled.
pub fn hash_syntax() -> CommentSyntax {
    CommentSyntax::new("#", None)
}

/// Ruby syntax with `=begin`/`=end` multi-line comments.
pub fn ruby_syntax() -> CommentSyntax {
    CommentSyntax::new("#", Some(("=begin", "=end")))
}

/// Haskell syntax: `--` single-line and `{- -}` multi-line comments.
pub fn haskell_syntax() -> CommentSyntax {
    CommentSyntax::new("--", Some(("{-", "-}")))
}
