//! Turns filter predicates into a sea-orm [`Condition`].
//!
//! Column names are resolved against the entity's own column set, values are coerced to the
//! column type and bound as parameters, and every predicate is ANDed into one condition.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, ColumnType, Condition, EntityTrait, Value,
    sea_query::{Alias, BinOper, Expr, Func, SimpleExpr},
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::entities::{Comparison, ComparisonSymbol, Predicate},
};

pub fn build_condition<E>(predicates: &[Predicate]) -> Result<Condition, CoreError>
where
    E: EntityTrait,
{
    predicates
        .iter()
        .try_fold(Condition::all(), |condition, predicate| {
            Ok(condition.add(predicate_expr::<E>(predicate)?))
        })
}

fn predicate_expr<E>(predicate: &Predicate) -> Result<SimpleExpr, CoreError>
where
    E: EntityTrait,
{
    let comparison = predicate.comparison();
    let column = E::Column::from_str(&comparison.column).map_err(|_| {
        error!(
            column = %comparison.column,
            "filter targets a column the entity does not have"
        );
        CoreError::Configuration(format!("unknown filter column '{}'", comparison.column))
    })?;
    let operator = bin_oper(comparison.symbol);

    let expr = match predicate {
        Predicate::Date(_) => {
            let date = parse_date(&comparison.value).ok_or_else(|| invalid(comparison))?;
            Expr::expr(Func::cust(Alias::new("DATE")).arg(Expr::col(column.as_column_ref())))
                .binary(operator, date)
        }
        Predicate::Simple(_) => {
            let value = coerce(column.def().get_column_type(), comparison)?;
            Expr::col(column.as_column_ref()).binary(operator, value)
        }
    };

    Ok(expr)
}

fn bin_oper(symbol: ComparisonSymbol) -> BinOper {
    match symbol {
        ComparisonSymbol::Equal => BinOper::Equal,
        ComparisonSymbol::NotEqual => BinOper::NotEqual,
        ComparisonSymbol::Less => BinOper::SmallerThan,
        ComparisonSymbol::LessOrEqual => BinOper::SmallerThanOrEqual,
        ComparisonSymbol::Greater => BinOper::GreaterThan,
        ComparisonSymbol::GreaterOrEqual => BinOper::GreaterThanOrEqual,
        ComparisonSymbol::Like => BinOper::Like,
    }
}

fn coerce(column_type: &ColumnType, comparison: &Comparison) -> Result<Value, CoreError> {
    let raw = comparison.value.trim();

    // patterns are always matched as text
    if comparison.symbol.is_pattern() {
        return Ok(Value::from(comparison.value.clone()));
    }

    let value = match column_type {
        ColumnType::TinyInteger | ColumnType::SmallInteger | ColumnType::Integer => {
            raw.parse::<i32>().ok().map(Value::from)
        }
        ColumnType::BigInteger => raw.parse::<i64>().ok().map(Value::from),
        ColumnType::Decimal(_) | ColumnType::Money(_) => {
            Decimal::from_str(raw).ok().map(Value::from)
        }
        ColumnType::Float | ColumnType::Double => raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Value::from),
        ColumnType::Boolean => parse_bool(raw).map(Value::from),
        ColumnType::Date => parse_date(raw).map(Value::from),
        ColumnType::DateTime | ColumnType::Timestamp => parse_datetime(raw).map(Value::from),
        _ => Some(Value::from(comparison.value.clone())),
    };

    value.ok_or_else(|| invalid(comparison))
}

fn invalid(comparison: &Comparison) -> CoreError {
    CoreError::InvalidFilter(format!(
        "'{}' is not a valid value for {}",
        comparison.value, comparison.column
    ))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DD HH:MM:SS`.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(raw).map(|datetime| datetime.date()))
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    DateTime::parse_from_rfc3339(raw)
        .map(|datetime| datetime.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .ok()
}
