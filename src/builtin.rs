//! Builtin language definitions
//!
//! The default definition source shipped with the binary, in the same
//! external format the catalog loader reads from disk. Each language also
//! carries an `extensions` key that the highlighter uses for filename
//! detection.
//!
//! Because list values are `|`-split, patterns here avoid alternation and
//! the `|` operator token cannot be listed. Keywords must be shaped like a
//! single atom to ever match one, so mixed word/punctuation names (`set!`,
//! `null?`) are not listed.

const PYTHON: &str = r#"[python]
extensions = py | pyw
keywords = False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield
operators = + | - | * | / | % | = | == | != | < | > | <= | >= | ** | // | -> | := | ( | ) | [ | ] | { | } | : | , | .
literals = \d+ | \d+\.\d+ | "[^"]*" | '[^']*' | f"[^"]*" | f'[^']*'
comments = #.*
"#;

const RACKET: &str = r#"[racket]
extensions = rkt | scm
keywords = define|lambda|let|letrec|if|cond|else|when|unless|begin|and|or|not|quote|require|provide|struct|case|do|for|map|filter|foldl|foldr|car|cdr|cons|list|first|rest|empty
operators = + | - | * | / | = | < | > | <= | >= | ( | ) | [ | ]
literals = \d+ | \d+\.\d+ | "[^"]*"
comments = ;.*
"#;

const ASM: &str = r#"[asm]
extensions = asm | s
keywords = mov|add|sub|mul|imul|div|idiv|inc|dec|neg|jmp|je|jne|jg|jge|jl|jle|jz|jnz|cmp|test|call|ret|push|pop|int|lea|xor|and|or|not|shl|shr|nop|section|global|extern|db|dw|dd|dq|equ
operators = , | [ | ] | + | - | * | :
literals = \d+ | \d+\.\d+ | "[^"]*" | '[^']*'
comments = ;.*
"#;

const C: &str = r#"[c]
extensions = c | h
keywords = auto|break|case|char|const|continue|default|do|double|else|enum|extern|float|for|goto|if|int|long|register|return|short|signed|sizeof|static|struct|switch|typedef|union|unsigned|void|volatile|while
operators = + | - | * | / | % | = | == | != | < | > | <= | >= | && | ++ | -- | -> | ; | , | ( | ) | { | } | [ | ]
literals = \d+ | \d+\.\d+ | "[^"]*" | '[^']*'
comments = //.*
"#;

const RUST: &str = r#"[rust]
extensions = rs
keywords = as|async|await|break|const|continue|crate|dyn|else|enum|extern|false|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|static|struct|super|trait|true|type|unsafe|use|where|while
operators = + | - | * | / | % | = | == | != | < | > | <= | >= | => | -> | :: | ; | , | ( | ) | { | } | [ | ] | &
literals = \d+ | \d+\.\d+ | "[^"]*" | '[^']*'
comments = //.*
"#;

/// The builtin definition source, one section per language
pub fn default_source() -> String {
    [PYTHON, RACKET, ASM, C, RUST].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatternCatalog;

    #[test]
    fn test_builtin_source_parses() {
        let catalog = PatternCatalog::parse(&default_source());

        for language in ["python", "racket", "asm", "c", "rust"] {
            assert!(catalog.contains(language), "missing [{language}]");
            let entry = catalog.get(language);
            assert!(!entry.keywords.is_empty());
            assert!(!entry.literals.is_empty());
            assert!(entry.extra.contains_key("extensions"));
        }
    }

    #[test]
    fn test_builtin_python_patterns() {
        let catalog = PatternCatalog::parse(&default_source());
        let entry = catalog.get("python");

        assert!(entry.keywords.contains("def"));
        assert!(entry.operators.contains("=="));
        assert!(entry.matches_literal("3.14"));
        assert!(entry.matches_literal("f\"x={x}\""));
        assert!(entry.is_comment_line("# comment"));
    }

    #[test]
    fn test_builtin_comment_markers_differ() {
        let catalog = PatternCatalog::parse(&default_source());

        assert!(catalog.get("racket").is_comment_line("; scheme comment"));
        assert!(!catalog.get("racket").is_comment_line("# not one"));
        assert!(catalog.get("c").is_comment_line("// c comment"));
        assert!(catalog.get("rust").is_comment_line("// rust comment"));
    }
}
