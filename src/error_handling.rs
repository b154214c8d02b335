use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("unexpected characters at end of expression")]
    unexpected_trailing_input,

    #[error("mismatched absolute value bars")]
    mismatched_absolute_bars,

    #[error("mismatched parentheses")]
    mismatched_parentheses,

    #[error("expected '(' after function name '{0}'")]
    expected_open_paren_after_function(String),

    #[error("expected ',' between pow arguments")]
    expected_comma_in_pow,

    #[error("expected ')' after function arguments")]
    expected_close_paren_after_args,

    #[error("unknown function '{0}'")]
    unknown_function(String),

    #[error("invalid number format")]
    invalid_number_format,

    #[error("expected number")]
    expected_number,

    #[error("'{0}' is not a valid number")]
    invalid_number_literal(String),

    #[error("expected identifier")]
    expected_identifier,
}

pub type Result<T> = std::result::Result<T, CalcError>;
