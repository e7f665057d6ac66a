/// Parses typed values out of a query string, e.g.
/// `parse_query!(query, "from" => i32, "count" => i64)` evaluates to
/// `(Option<i32>, Option<i64>)`.
macro_rules! parse_query {
    ($query:expr, $($name:tt => $t:ty),+) => {{
        let params = $crate::controller::utils::query_params($query);
        ($(
            params
                .get($name)
                .and_then(|value| value.parse::<$t>().ok())
        ),+)
    }};
}

/// Builds `ValidationErrors` by hand, for rules that only the service
/// layer can check, e.g.
/// `validation_errors!({"field_id": ["field_id" => "Already exists"]})`.
macro_rules! validation_errors {
    ({$($field:tt: [$($code:tt => $message:tt),+]),*}) => {{
        let mut errors = ::validator::ValidationErrors::new();
        $($(
            errors.add(
                $field,
                ::validator::ValidationError {
                    code: ::std::borrow::Cow::from($code),
                    message: Some(::std::borrow::Cow::from($message)),
                    params: ::std::collections::HashMap::new(),
                },
            );
        )+)*
        errors
    }};
}
