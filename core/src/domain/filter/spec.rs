use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use super::entities::{ComparisonSymbol, FilterOperator};

/// Columns compared at calendar-day granularity unless a filter spec overrides the set.
pub const DEFAULT_DATE_COLUMNS: [&str; 2] = ["created_at", "updated_at"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterSpecError {
    #[error("{resource}: parameter '{parameter}' is declared more than once")]
    DuplicateParameter { resource: String, parameter: String },

    #[error("{resource}: operator '{operator}' allowed for '{parameter}' has no symbol")]
    MissingSymbol {
        resource: String,
        parameter: String,
        operator: FilterOperator,
    },

    #[error("{resource}: column mapping for undeclared parameter '{parameter}'")]
    UnmappedParameter { resource: String, parameter: String },
}

/// Whitelist of filterable query parameters for one resource type.
///
/// Built once at startup and never mutated afterwards, so a single instance can be shared by
/// every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    resource: String,
    allowed_parameters: Vec<(String, Vec<FilterOperator>)>,
    column_map: HashMap<String, String>,
    operator_symbols: HashMap<FilterOperator, ComparisonSymbol>,
    date_columns: BTreeSet<String>,
}

impl FilterSpec {
    pub fn builder(resource: impl Into<String>) -> FilterSpecBuilder {
        FilterSpecBuilder {
            resource: resource.into(),
            allowed_parameters: Vec::new(),
            column_map: HashMap::new(),
            operator_symbols: HashMap::new(),
            date_columns: DEFAULT_DATE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Parameters with their allowed operators, in declaration order.
    pub fn allowed_parameters(&self) -> impl Iterator<Item = (&str, &[FilterOperator])> {
        self.allowed_parameters
            .iter()
            .map(|(parameter, operators)| (parameter.as_str(), operators.as_slice()))
    }

    /// Storage column for `parameter`, falling back to the parameter name itself.
    pub fn column_for<'a>(&'a self, parameter: &'a str) -> &'a str {
        self.column_map
            .get(parameter)
            .map(String::as_str)
            .unwrap_or(parameter)
    }

    pub fn symbol_for(&self, operator: FilterOperator) -> Option<ComparisonSymbol> {
        self.operator_symbols.get(&operator).copied()
    }

    pub fn is_date_column(&self, column: &str) -> bool {
        self.date_columns.contains(column)
    }
}

pub struct FilterSpecBuilder {
    resource: String,
    allowed_parameters: Vec<(String, Vec<FilterOperator>)>,
    column_map: HashMap<String, String>,
    operator_symbols: HashMap<FilterOperator, ComparisonSymbol>,
    date_columns: BTreeSet<String>,
}

impl FilterSpecBuilder {
    /// Allows `parameter` with the given operators. Repeated operators keep their first position.
    pub fn parameter(
        mut self,
        parameter: impl Into<String>,
        operators: impl IntoIterator<Item = FilterOperator>,
    ) -> Self {
        let mut allowed: Vec<FilterOperator> = Vec::new();
        for operator in operators {
            if !allowed.contains(&operator) {
                allowed.push(operator);
            }
        }
        self.allowed_parameters.push((parameter.into(), allowed));
        self
    }

    /// Maps `parameter` onto a differently named storage column.
    pub fn column(mut self, parameter: impl Into<String>, column: impl Into<String>) -> Self {
        self.column_map.insert(parameter.into(), column.into());
        self
    }

    pub fn symbol(mut self, operator: FilterOperator, symbol: ComparisonSymbol) -> Self {
        self.operator_symbols.insert(operator, symbol);
        self
    }

    /// Replaces the set of date-valued columns for this resource.
    pub fn date_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<FilterSpec, FilterSpecError> {
        let mut seen = BTreeSet::new();
        for (parameter, operators) in &self.allowed_parameters {
            if !seen.insert(parameter.as_str()) {
                return Err(FilterSpecError::DuplicateParameter {
                    resource: self.resource.clone(),
                    parameter: parameter.clone(),
                });
            }

            if let Some(operator) = operators
                .iter()
                .find(|operator| !self.operator_symbols.contains_key(*operator))
            {
                return Err(FilterSpecError::MissingSymbol {
                    resource: self.resource.clone(),
                    parameter: parameter.clone(),
                    operator: *operator,
                });
            }
        }

        if let Some(parameter) = self
            .column_map
            .keys()
            .find(|parameter| !seen.contains(parameter.as_str()))
        {
            return Err(FilterSpecError::UnmappedParameter {
                resource: self.resource.clone(),
                parameter: parameter.clone(),
            });
        }

        Ok(FilterSpec {
            resource: self.resource,
            allowed_parameters: self.allowed_parameters,
            column_map: self.column_map,
            operator_symbols: self.operator_symbols,
            date_columns: self.date_columns,
        })
    }
}
