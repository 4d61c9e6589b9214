//! SELECT field list.

/// What a mapping entry in [`Fields::Map`] expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTarget {
    /// `key AS alias`
    Alias(String),
    /// `key.f1, key.f2, ...` (table-qualified projection)
    Qualified(Vec<String>),
}

impl From<&str> for FieldTarget {
    fn from(alias: &str) -> Self {
        FieldTarget::Alias(alias.to_string())
    }
}

impl From<String> for FieldTarget {
    fn from(alias: String) -> Self {
        FieldTarget::Alias(alias)
    }
}

impl<S: Into<String>> From<Vec<S>> for FieldTarget {
    fn from(fields: Vec<S>) -> Self {
        FieldTarget::Qualified(fields.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for FieldTarget {
    fn from(fields: [S; N]) -> Self {
        FieldTarget::Qualified(fields.into_iter().map(Into::into).collect())
    }
}

/// The projection of a SELECT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fields {
    /// Verbatim clause text, trimmed.
    Verbatim(String),
    /// Nested selectors joined with `, `.
    List(Vec<Fields>),
    /// `key AS alias` or `key.field` expansions, in order.
    Map(Vec<(String, FieldTarget)>),
}

impl From<&str> for Fields {
    fn from(fields: &str) -> Self {
        Fields::Verbatim(fields.to_string())
    }
}

impl From<String> for Fields {
    fn from(fields: String) -> Self {
        Fields::Verbatim(fields)
    }
}

impl From<Vec<&str>> for Fields {
    fn from(fields: Vec<&str>) -> Self {
        Fields::List(fields.into_iter().map(Fields::from).collect())
    }
}

impl From<Vec<String>> for Fields {
    fn from(fields: Vec<String>) -> Self {
        Fields::List(fields.into_iter().map(Fields::from).collect())
    }
}

impl From<Vec<Fields>> for Fields {
    fn from(fields: Vec<Fields>) -> Self {
        Fields::List(fields)
    }
}

impl From<Vec<(String, FieldTarget)>> for Fields {
    fn from(entries: Vec<(String, FieldTarget)>) -> Self {
        Fields::Map(entries)
    }
}

/// Render the field list; anything empty renders `*`.
pub fn sql_select_fields(fields: Option<&Fields>) -> String {
    let sql = fields.map(render_fields).unwrap_or_default();
    if sql.is_empty() { "*".to_string() } else { sql }
}

fn render_fields(fields: &Fields) -> String {
    match fields {
        Fields::Verbatim(s) => s.trim().to_string(),
        Fields::List(items) => items
            .iter()
            .map(render_fields)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Fields::Map(entries) => entries
            .iter()
            .map(|(key, target)| match target {
                FieldTarget::Alias(alias) => format!("{key} AS {alias}"),
                FieldTarget::Qualified(names) => names
                    .iter()
                    .map(|name| format!("{key}.{name}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries;

    #[test]
    fn defaults_to_star() {
        assert_eq!(sql_select_fields(None), "*");
        assert_eq!(sql_select_fields(Some(&"  ".into())), "*");
        assert_eq!(sql_select_fields(Some(&Fields::List(vec![]))), "*");
        assert_eq!(sql_select_fields(Some(&Fields::Map(vec![]))), "*");
    }

    #[test]
    fn verbatim_and_list() {
        assert_eq!(sql_select_fields(Some(&" fd1, fd2 ".into())), "fd1, fd2");
        assert_eq!(
            sql_select_fields(Some(&vec!["fd1", "fd2"].into())),
            "fd1, fd2"
        );
    }

    #[test]
    fn aliases() {
        let fields = Fields::Map(entries! { "fd1" => "a", "fd2" => "b" });
        assert_eq!(sql_select_fields(Some(&fields)), "fd1 AS a, fd2 AS b");
    }

    #[test]
    fn qualified_projection() {
        let fields = Fields::Map(entries! {
            "a" => vec!["fd11", "fd12"],
            "b" => vec!["fd21", "fd22"],
        });
        assert_eq!(
            sql_select_fields(Some(&fields)),
            "a.fd11, a.fd12, b.fd21, b.fd22"
        );
    }

    #[test]
    fn nested_list_mixes_shapes() {
        let fields = Fields::List(vec![
            "fd0".into(),
            Fields::Map(entries! { "a" => ["fd1"] }),
            Fields::Map(entries! { "fd2" => "x" }),
        ]);
        assert_eq!(sql_select_fields(Some(&fields)), "fd0, a.fd1, fd2 AS x");
    }
}
