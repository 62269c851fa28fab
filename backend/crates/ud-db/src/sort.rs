//! Ordering options for listing users.
//!
//! Parsing is lenient: anything that is not a recognised value falls back to
//! the default (`name`, ascending).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSortField {
    #[default]
    Name,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserSort {
    pub field: UserSortField,
    pub order: SortOrder,
}

impl UserSortField {
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("email") => UserSortField::Email,
            _ => UserSortField::Name,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            UserSortField::Name => "name",
            UserSortField::Email => "email",
        }
    }
}

impl SortOrder {
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl UserSort {
    pub fn new(field: UserSortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Build from raw query-string values
    pub fn from_params(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        Self {
            field: UserSortField::parse_lenient(sort_by),
            order: SortOrder::parse_lenient(sort_order),
        }
    }

    /// `ORDER BY` body. Only whitelisted identifiers ever reach the SQL text.
    pub fn order_by_clause(&self) -> String {
        format!("{} {}, id ASC", self.field.column(), self.order.keyword())
    }
}

impl fmt::Display for UserSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.field.column(),
            self.order.keyword().to_lowercase()
        )
    }
}
