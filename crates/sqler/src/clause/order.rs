//! GROUP BY / HAVING / ORDER BY.

use crate::condition::{Cond, sql_having};

/// Grouping columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupBy {
    Verbatim(String),
    List(Vec<String>),
}

impl From<&str> for GroupBy {
    fn from(s: &str) -> Self {
        GroupBy::Verbatim(s.to_string())
    }
}

impl From<String> for GroupBy {
    fn from(s: String) -> Self {
        GroupBy::Verbatim(s)
    }
}

impl From<Vec<&str>> for GroupBy {
    fn from(fields: Vec<&str>) -> Self {
        GroupBy::List(fields.into_iter().map(String::from).collect())
    }
}

impl From<Vec<String>> for GroupBy {
    fn from(fields: Vec<String>) -> Self {
        GroupBy::List(fields)
    }
}

/// Sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBy {
    Verbatim(String),
    List(Vec<String>),
    /// `(field, direction)` pairs; directions other than `DESC` render `ASC`.
    Directed(Vec<(String, String)>),
}

impl From<&str> for OrderBy {
    fn from(s: &str) -> Self {
        OrderBy::Verbatim(s.to_string())
    }
}

impl From<String> for OrderBy {
    fn from(s: String) -> Self {
        OrderBy::Verbatim(s)
    }
}

impl From<Vec<&str>> for OrderBy {
    fn from(fields: Vec<&str>) -> Self {
        OrderBy::List(fields.into_iter().map(String::from).collect())
    }
}

impl From<Vec<String>> for OrderBy {
    fn from(fields: Vec<String>) -> Self {
        OrderBy::List(fields)
    }
}

impl From<Vec<(String, String)>> for OrderBy {
    fn from(pairs: Vec<(String, String)>) -> Self {
        OrderBy::Directed(pairs)
    }
}

impl From<Vec<(&str, &str)>> for OrderBy {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        OrderBy::Directed(
            pairs
                .into_iter()
                .map(|(f, d)| (f.to_string(), d.to_string()))
                .collect(),
        )
    }
}

fn join_names(names: &[String]) -> String {
    names
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn direction(dir: &str) -> &'static str {
    if dir.trim().eq_ignore_ascii_case("DESC") {
        "DESC"
    } else {
        "ASC"
    }
}

/// Render `GROUP BY ...`, or nothing.
pub fn sql_group_by(group_by: Option<&GroupBy>) -> String {
    let body = match group_by {
        Some(GroupBy::Verbatim(s)) => s.trim().to_string(),
        Some(GroupBy::List(names)) => join_names(names),
        None => String::new(),
    };
    if body.is_empty() {
        String::new()
    } else {
        format!("GROUP BY {body}")
    }
}

/// Render `GROUP BY ... HAVING ...`. HAVING is dropped when there is no grouping.
pub fn sql_group_by_having(group_by: Option<&GroupBy>, havings: Option<&Cond>) -> String {
    let group = sql_group_by(group_by);
    if group.is_empty() {
        return group;
    }
    let having = sql_having(group_by, havings);
    if having.is_empty() {
        group
    } else {
        format!("{group} {having}")
    }
}

/// Render `ORDER BY ...`, or nothing.
pub fn sql_order_by(order_by: Option<&OrderBy>) -> String {
    let body = match order_by {
        Some(OrderBy::Verbatim(s)) => s.trim().to_string(),
        Some(OrderBy::List(names)) => join_names(names),
        Some(OrderBy::Directed(pairs)) => pairs
            .iter()
            .filter(|(field, _)| !field.trim().is_empty())
            .map(|(field, dir)| format!("{} {}", field.trim(), direction(dir)))
            .collect::<Vec<_>>()
            .join(", "),
        None => String::new(),
    };
    if body.is_empty() {
        String::new()
    } else {
        format!("ORDER BY {body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_by_shapes() {
        assert_eq!(sql_group_by(Some(&"fd1".into())), "GROUP BY fd1");
        assert_eq!(sql_group_by(Some(&vec!["fd1", "fd2"].into())), "GROUP BY fd1, fd2");
        assert_eq!(sql_group_by(Some(&" ".into())), "");
        assert_eq!(sql_group_by(Some(&vec![" ", ""].into())), "");
        assert_eq!(sql_group_by(None), "");
    }

    #[test]
    fn having_requires_group_by() {
        let having = Cond::from("COUNT(fd1) > 5");
        assert_eq!(
            sql_group_by_having(Some(&vec!["fd1", "fd2"].into()), Some(&having)),
            "GROUP BY fd1, fd2 HAVING COUNT(fd1) > 5"
        );
        assert_eq!(sql_group_by_having(None, Some(&having)), "");
        assert_eq!(sql_group_by_having(Some(&"fd1".into()), None), "GROUP BY fd1");
    }

    #[test]
    fn order_by_directions() {
        let order = OrderBy::from(vec![("fd1", "desc"), ("fd2", "ASC")]);
        assert_eq!(sql_order_by(Some(&order)), "ORDER BY fd1 DESC, fd2 ASC");

        let order = OrderBy::from(vec![("fd1", "sideways")]);
        assert_eq!(sql_order_by(Some(&order)), "ORDER BY fd1 ASC");
    }

    #[test]
    fn order_by_list_and_text() {
        assert_eq!(sql_order_by(Some(&vec!["fd1", "fd2"].into())), "ORDER BY fd1, fd2");
        assert_eq!(sql_order_by(Some(&"fd1 DESC".into())), "ORDER BY fd1 DESC");
        assert_eq!(sql_order_by(Some(&"".into())), "");
        assert_eq!(sql_order_by(None), "");
    }
}
