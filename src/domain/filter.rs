//! Order query filter and its condition representation.
//!
//! Filtering is expressed as pure data: [`OrderFilter::conditions`] turns a
//! sparse filter into a conjunctive list of [`FilterCondition`]s, and the
//! storage adapter compiles that list into the store's query language.
//! Keeping construction separate from execution lets the item, projection,
//! and count queries share one predicate source.

use chrono::NaiveDate;
use serde::Deserialize;

/// Order fields a condition can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    CustomerName,
    CreatedAt,
}

/// Typed value carried by a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Id(i64),
    Date(NaiveDate),
}

/// A single query condition. A list of conditions is conjunctive: a row
/// matches iff every condition holds.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCondition {
    /// Exact equality
    Equals(OrderField, FilterValue),
    /// Case-insensitive substring match
    ContainsCaseInsensitive(OrderField, String),
    /// Inclusive lower bound
    GreaterOrEqual(OrderField, FilterValue),
    /// Inclusive upper bound
    LessOrEqual(OrderField, FilterValue),
}

/// Caller-constructed order filter; every field is optional and
/// independent. Lives only for the duration of one query call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilter {
    /// Exact order identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Customer name fragment, matched case-insensitively
    #[serde(default)]
    pub customer: Option<String>,
    /// Creation date lower bound, inclusive
    #[serde(default)]
    pub created_from: Option<NaiveDate>,
    /// Creation date upper bound, inclusive
    #[serde(default)]
    pub created_until: Option<NaiveDate>,
}

impl OrderFilter {
    /// Build the conjunctive condition list for this filter.
    ///
    /// Absent and empty fields impose no constraint; an all-empty filter
    /// yields an empty list, which matches everything. Never fails.
    pub fn conditions(&self) -> Vec<FilterCondition> {
        let mut conditions = Vec::new();

        if let Some(id) = self.id {
            conditions.push(FilterCondition::Equals(OrderField::Id, FilterValue::Id(id)));
        }

        if let Some(fragment) = self.customer.as_deref().filter(|f| !f.is_empty()) {
            conditions.push(FilterCondition::ContainsCaseInsensitive(
                OrderField::CustomerName,
                fragment.to_string(),
            ));
        }

        if let Some(from) = self.created_from {
            conditions.push(FilterCondition::GreaterOrEqual(
                OrderField::CreatedAt,
                FilterValue::Date(from),
            ));
        }

        if let Some(until) = self.created_until {
            conditions.push(FilterCondition::LessOrEqual(
                OrderField::CreatedAt,
                FilterValue::Date(until),
            ));
        }

        conditions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_filter_yields_no_conditions() {
        assert!(OrderFilter::default().conditions().is_empty());
    }

    #[test]
    fn id_filter_yields_equality() {
        let filter = OrderFilter {
            id: Some(42),
            ..Default::default()
        };

        assert_eq!(
            filter.conditions(),
            vec![FilterCondition::Equals(OrderField::Id, FilterValue::Id(42))]
        );
    }

    #[test]
    fn customer_fragment_yields_substring_condition() {
        let filter = OrderFilter {
            customer: Some("ana".to_string()),
            ..Default::default()
        };

        assert_eq!(
            filter.conditions(),
            vec![FilterCondition::ContainsCaseInsensitive(
                OrderField::CustomerName,
                "ana".to_string(),
            )]
        );
    }

    #[test]
    fn empty_customer_fragment_is_skipped() {
        let filter = OrderFilter {
            customer: Some(String::new()),
            ..Default::default()
        };

        assert!(filter.conditions().is_empty());
    }

    #[test]
    fn date_bounds_are_inclusive_and_independent() {
        let from_only = OrderFilter {
            created_from: Some(date(2024, 3, 1)),
            ..Default::default()
        };
        assert_eq!(
            from_only.conditions(),
            vec![FilterCondition::GreaterOrEqual(
                OrderField::CreatedAt,
                FilterValue::Date(date(2024, 3, 1)),
            )]
        );

        let until_only = OrderFilter {
            created_until: Some(date(2024, 3, 31)),
            ..Default::default()
        };
        assert_eq!(
            until_only.conditions(),
            vec![FilterCondition::LessOrEqual(
                OrderField::CreatedAt,
                FilterValue::Date(date(2024, 3, 31)),
            )]
        );
    }

    #[test]
    fn full_filter_yields_one_condition_per_field() {
        let filter = OrderFilter {
            id: Some(7),
            customer: Some("Silva".to_string()),
            created_from: Some(date(2024, 1, 1)),
            created_until: Some(date(2024, 12, 31)),
        };

        assert_eq!(
            filter.conditions(),
            vec![
                FilterCondition::Equals(OrderField::Id, FilterValue::Id(7)),
                FilterCondition::ContainsCaseInsensitive(
                    OrderField::CustomerName,
                    "Silva".to_string(),
                ),
                FilterCondition::GreaterOrEqual(
                    OrderField::CreatedAt,
                    FilterValue::Date(date(2024, 1, 1)),
                ),
                FilterCondition::LessOrEqual(
                    OrderField::CreatedAt,
                    FilterValue::Date(date(2024, 12, 31)),
                ),
            ]
        );
    }
}
