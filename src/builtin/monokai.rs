//! Monokai, a dark style

use super::BuiltinStyle;

pub fn monokai_style() -> BuiltinStyle {
    BuiltinStyle {
        name: "monokai",
        background: "#272822",
        highlight: "#49483e",
        styles: &[
            ("Token", "#f8f8f2"),
            ("Whitespace", ""),
            ("Error", "#ed007e bg:#1e0010"),
            ("Comment", "#959077"),
            ("Keyword", "#66d9ef"),
            ("Keyword.Namespace", "#ff4689"),
            ("Operator", "#ff4689"),
            ("Punctuation", "#f8f8f2"),
            ("Name", "#f8f8f2"),
            ("Name.Attribute", "#a6e22e"),
            ("Name.Class", "#a6e22e"),
            ("Name.Constant", "#66d9ef"),
            ("Name.Decorator", "#a6e22e"),
            ("Name.Exception", "#a6e22e"),
            ("Name.Function", "#a6e22e"),
            ("Name.Property", ""),
            ("Name.Tag", "#ff4689"),
            ("Number", "#ae81ff"),
            ("Literal", "#ae81ff"),
            ("Literal.Date", "#e6db74"),
            ("String", "#e6db74"),
            ("String.Escape", "#ae81ff"),
            ("Generic.Deleted", "#ff4689"),
            ("Generic.Emph", "italic"),
            ("Generic.Inserted", "#a6e22e"),
            ("Generic.Strong", "bold"),
            ("Generic.Subheading", "#959077"),
        ],
    }
}
