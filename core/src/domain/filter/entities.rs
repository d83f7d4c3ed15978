use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Operator code accepted in `field[operator]=value` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterOperator {
    Eq,   // equals
    Ne,   // not equals
    Gt,   // greater than
    Gte,  // greater than or equal
    Lt,   // less than
    Lte,  // less than or equal
    Like, // pattern match
}

impl FilterOperator {
    pub fn code(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Ne => "ne",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::Like => "like",
        }
    }
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "ne" => Ok(FilterOperator::Ne),
            "gt" => Ok(FilterOperator::Gt),
            "gte" => Ok(FilterOperator::Gte),
            "lt" => Ok(FilterOperator::Lt),
            "lte" => Ok(FilterOperator::Lte),
            "like" => Ok(FilterOperator::Like),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Comparison symbol a predicate is applied with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonSymbol {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Like,
}

impl ComparisonSymbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonSymbol::Equal => "=",
            ComparisonSymbol::NotEqual => "!=",
            ComparisonSymbol::Less => "<",
            ComparisonSymbol::LessOrEqual => "<=",
            ComparisonSymbol::Greater => ">",
            ComparisonSymbol::GreaterOrEqual => ">=",
            ComparisonSymbol::Like => "LIKE",
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, ComparisonSymbol::Like)
    }
}

impl fmt::Display for ComparisonSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub column: String,
    pub symbol: ComparisonSymbol,
    pub value: String,
}

impl Comparison {
    pub fn new(column: impl Into<String>, symbol: ComparisonSymbol, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            symbol,
            value: value.into(),
        }
    }
}

/// Output unit of the filter engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Direct comparison of the column against the value.
    Simple(Comparison),
    /// Comparison truncated to calendar-day granularity on both sides.
    Date(Comparison),
}

impl Predicate {
    pub fn comparison(&self) -> &Comparison {
        match self {
            Predicate::Simple(comparison) | Predicate::Date(comparison) => comparison,
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Predicate::Date(_))
    }
}

/// A decoded query-string value: either `name=foo` or `name[op]=foo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Scalar(String),
    Operators(BTreeMap<String, String>),
}

/// Query parameters of one request, with bracket notation already decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    params: HashMap<String, QueryValue>,
}

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, parameter: &str) -> Option<&QueryValue> {
        self.params.get(parameter)
    }

    /// Records `parameter=value`, replacing anything previously seen for `parameter`.
    pub fn insert_scalar(&mut self, parameter: impl Into<String>, value: impl Into<String>) {
        self.params
            .insert(parameter.into(), QueryValue::Scalar(value.into()));
    }

    /// Records `parameter[operator]=value`. A scalar previously stored under `parameter` is
    /// replaced by the operator map.
    pub fn insert_operator(
        &mut self,
        parameter: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) {
        let entry = self
            .params
            .entry(parameter.into())
            .or_insert_with(|| QueryValue::Operators(BTreeMap::new()));

        if let QueryValue::Scalar(_) = entry {
            *entry = QueryValue::Operators(BTreeMap::new());
        }
        if let QueryValue::Operators(operators) = entry {
            operators.insert(operator.into(), value.into());
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
