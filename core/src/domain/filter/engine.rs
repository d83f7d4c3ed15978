use super::{
    entities::{Comparison, Predicate, QueryValue, RawQuery},
    spec::FilterSpec,
};

/// Translates the whitelisted `field[operator]=value` parameters of `query` into predicates.
///
/// Anything `spec` does not name is skipped: unknown parameters, operators not
/// allowed for a parameter, and scalar values without an operator key. The function never fails.
/// Predicates come out in declaration order (parameters, then each parameter's operators).
pub fn transform(query: &RawQuery, spec: &FilterSpec) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    for (parameter, operators) in spec.allowed_parameters() {
        let Some(QueryValue::Operators(values)) = query.get(parameter) else {
            continue;
        };

        let column = spec.column_for(parameter);

        for operator in operators {
            let Some(value) = values.get(operator.code()) else {
                continue;
            };
            let Some(symbol) = spec.symbol_for(*operator) else {
                continue;
            };

            if symbol.is_pattern() {
                predicates.push(Predicate::Simple(Comparison::new(
                    column,
                    symbol,
                    format!("%{value}%"),
                )));
                continue;
            }

            let comparison = Comparison::new(column, symbol, value.as_str());
            if spec.is_date_column(column) {
                predicates.push(Predicate::Date(comparison));
            } else {
                predicates.push(Predicate::Simple(comparison));
            }
        }
    }

    predicates
}
